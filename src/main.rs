//! 회원(Member) CRUD REST 서버 실행 엔트리
//!
//! ```bash
//! cargo run
//!
//! curl -X POST http://localhost:3000/api/members -H 'Content-Type: application/json' \
//!     -d '{"name": "Jack", "email": "jack@example.com"}'
//! curl http://localhost:3000/api/members
//! curl http://localhost:3000/api/members/1
//! curl -X PUT http://localhost:3000/api/members/1 -H 'Content-Type: application/json' \
//!     -d '{"name": "John", "email": "john@example.com"}'
//! curl -X DELETE http://localhost:3000/api/members/1
//! ```

use std::sync::Arc;

use member_api::{app, Config, InMemoryMemberService};
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 🏁 main()

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    // RUST_LOG 가 없으면 설정의 기본 필터 사용
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 빈 회원 저장소 생성
    let members = Arc::new(InMemoryMemberService::new());

    let app = app(members, &config);

    let listener = TcpListener::bind(config.addr).await?;
    tracing::debug!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::debug!("server stopped");
    Ok(())
}

// 🧠 Ctrl+C 또는 SIGTERM 중 먼저 오는 신호를 기다림
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(%err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::debug!("shutdown signal received");
}

//! ⚙️ 서버 설정
//!
//! 환경 변수(및 `.env` 파일)에서 읽습니다.
//!
//! | 변수 | 기본값 |
//! |---|---|
//! | `MEMBER_API_ADDR` | `127.0.0.1:3000` |
//! | `MEMBER_API_TIMEOUT_SECS` | `10` |
//! | `MEMBER_API_LOG` | `member_api=debug,tower_http=debug,axum::rejection=trace` |
//!
//! `RUST_LOG` 가 설정되어 있으면 `MEMBER_API_LOG` 보다 우선합니다.

use std::{net::SocketAddr, time::Duration};

use thiserror::Error;

const ADDR_VAR: &str = "MEMBER_API_ADDR";
const TIMEOUT_VAR: &str = "MEMBER_API_TIMEOUT_SECS";
const LOG_VAR: &str = "MEMBER_API_LOG";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    pub request_timeout: Duration,
    pub log_filter: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            // axum 은 내장 추출기의 리젝션을 `axum::rejection` 타겟, TRACE 레벨로 남김
            log_filter: format!(
                "{}=debug,tower_http=debug,axum::rejection=trace",
                env!("CARGO_CRATE_NAME")
            ),
        }
    }
}

impl Config {
    /// `.env` 파일(있다면)을 먼저 읽은 뒤 프로세스 환경 변수에서 설정을 만듭니다.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 임의의 조회 함수로 설정을 만듭니다. 없는 변수는 기본값을 씁니다.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ADDR_VAR) {
            config.addr = value.parse().map_err(|_| ConfigError::Invalid {
                var: ADDR_VAR,
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup(TIMEOUT_VAR) {
            let secs: u64 = value.parse().map_err(|_| ConfigError::Invalid {
                var: TIMEOUT_VAR,
                value: value.clone(),
            })?;
            config.request_timeout = Duration::from_secs(secs);
        }

        if let Some(value) = lookup(LOG_VAR) {
            config.log_filter = value;
        }

        Ok(config)
    }
}

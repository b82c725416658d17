//! 日志基础设施

use tracing_subscriber::EnvFilter;

pub struct Logger;

impl Logger {
    /// 按 `RUST_LOG` 初始化，默认 `info`
    pub fn init() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }
}

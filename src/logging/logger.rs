use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

use crate::config::ConfigManager;

/// 初始化全局 tracing 日志。
/// JSON 日志按小时滚动写入 `log_dir`，同时在 stderr 输出简要日志。
/// 返回的 guard 需要持有到进程退出，否则缓冲中的日志会丢失。
pub fn init(config: &ConfigManager) -> anyhow::Result<WorkerGuard> {
    let log_file = rolling::hourly(&config.log_dir, &config.log_file);
    let (non_blocking, guard) = tracing_appender::non_blocking(log_file);

    let filter = EnvFilter::builder()
        .with_default_directive(config.log_level.into())
        .from_env_lossy();

    let subscriber = Registry::default()
        .with(filter)
        .with(fmt::layer().json().with_writer(non_blocking))
        .with(fmt::layer().compact().with_writer(std::io::stderr));
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("unable to set global tracing subscriber: {}", e))?;

    Ok(guard)
}

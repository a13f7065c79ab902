use std::path::PathBuf;
use std::str::FromStr;

use tracing_subscriber::filter::LevelFilter;

/// 运行配置：日志目录、文件名前缀以及默认日志级别
#[derive(Clone, Debug)]
pub struct ConfigManager {
    pub log_dir: PathBuf,
    pub log_file: String,
    pub log_level: LevelFilter,
}

impl ConfigManager {
    pub fn new(log_dir: impl Into<PathBuf>, log_level: LevelFilter) -> Self {
        ConfigManager {
            log_dir: log_dir.into(),
            log_file: "validation.json".to_string(),
            log_level,
        }
    }

    /// 由命令行参数构造，log_level 形如 "info" / "debug"
    pub fn from_args(log_dir: &str, log_level: &str) -> anyhow::Result<Self> {
        let level = LevelFilter::from_str(log_level)
            .map_err(|e| anyhow::anyhow!("invalid log level {:?}: {}", log_level, e))?;
        Ok(ConfigManager::new(log_dir, level))
    }
}

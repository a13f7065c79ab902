// src/main.rs

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use futures::future::join_all;
use tracing::{error, info};

use rtb_envelope::codec;
use rtb_envelope::config::ConfigManager;
use rtb_envelope::inspect::{inspect, redact, Inspection};
use rtb_envelope::logging::{self, ValidationLog};

#[derive(Parser, Debug)]
#[command(author = "whiteCcinn", version = "1.0", about = "OpenRTB BidRequest validator")]
struct CliArgs {
    #[arg(long, default_value = "logs", global = true)]
    log_dir: String,
    #[arg(long, default_value = "info", global = true)]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 校验一个或多个 BidRequest JSON 文件
    Validate {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// 校验后输出规范化的副本
    Normalize {
        file: PathBuf,
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// 去除 user 以及设备标识
        #[arg(long)]
        redact: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config = match ConfigManager::from_args(&args.log_dir, &args.log_level) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{:#}", e);
            return ExitCode::from(2);
        }
    };
    let _guard = match logging::init(&config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{:#}", e);
            return ExitCode::from(2);
        }
    };

    let result = match args.command {
        Command::Validate { files } => validate_files(files).await,
        Command::Normalize { file, out, redact } => normalize(file, out, redact).await,
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::from(2)
        }
    }
}

/// 并发读取所有文件并逐个校验，全部通过时返回 true
async fn validate_files(files: Vec<PathBuf>) -> anyhow::Result<bool> {
    let tasks = files.into_iter().map(|path| async move {
        let source = path.display().to_string();
        match tokio::fs::read(&path).await {
            Ok(payload) => inspect(&source, payload).log,
            Err(e) => {
                let mut log = ValidationLog::new(&source);
                log.failure_reason = Some(format!("read: {}", e));
                log
            }
        }
    });
    let logs = join_all(tasks).await;

    let mut failed = 0usize;
    for log in &logs {
        log.emit();
        println!("{}", serde_json::to_string(log)?);
        if !log.is_success() {
            failed += 1;
        }
    }
    info!(total = logs.len(), failed, "validation finished");

    Ok(failed == 0)
}

async fn normalize(file: PathBuf, out: Option<PathBuf>, redact_ids: bool) -> anyhow::Result<bool> {
    let source = file.display().to_string();
    let payload = tokio::fs::read(&file)
        .await
        .with_context(|| format!("read {}", source))?;

    let Inspection { log, request } = inspect(&source, payload);
    log.emit();
    let request = match request {
        Some(request) if log.is_success() => request,
        _ => return Ok(false),
    };

    let normalized = if redact_ids {
        redact(&request)
    } else {
        request.copy()
    };
    let bytes = codec::encode_pretty(&normalized)?;

    match out {
        Some(path) => {
            tokio::fs::write(&path, &bytes)
                .await
                .with_context(|| format!("write {}", path.display()))?;
            info!(request_id = %normalized.id, out = %path.display(), "normalized request written");
        }
        None => println!("{}", String::from_utf8_lossy(&bytes)),
    }

    Ok(true)
}

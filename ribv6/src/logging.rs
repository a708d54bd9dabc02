use std::path::Path;

use clap::ValueEnum;
use tracing::Level;
use tracing_appender::rolling;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Terminal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggingOutput {
    Stderr,
    File(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub output: LoggingOutput,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            output: LoggingOutput::Stderr,
            format: LogFormat::Terminal,
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
pub enum LogOutputType {
    Stderr,
    File,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum LogFormatType {
    Json,
    Terminal,
}

pub fn logging_config_from_args(
    log_output: &LogOutputType,
    log_file: &Option<String>,
    log_format: &LogFormatType,
) -> LoggingConfig {
    let output = match log_output {
        LogOutputType::Stderr => LoggingOutput::Stderr,
        LogOutputType::File => {
            let path = log_file
                .clone()
                .unwrap_or_else(|| "ribv6.log".to_string());
            LoggingOutput::File(path)
        }
    };

    let format = match log_format {
        LogFormatType::Json => LogFormat::Json,
        LogFormatType::Terminal => LogFormat::Terminal,
    };

    LoggingConfig { output, format }
}

pub fn tracing_set(config: &LoggingConfig) {
    setup_tracing_with_format(config.output.clone(), config.format.clone()).unwrap_or_else(|e| {
        eprintln!("Failed to setup {:?} logging: {}", config.output, e);
        tracing_subscriber::fmt()
            .with_max_level(Level::INFO)
            .with_writer(std::io::stderr)
            .init();
    });
}

pub fn setup_tracing_with_format(output: LoggingOutput, format: LogFormat) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match (output, format) {
        (LoggingOutput::Stderr, LogFormat::Json) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .init();
        }
        (LoggingOutput::Stderr, LogFormat::Terminal) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .init();
        }
        (LoggingOutput::File(path), format) => {
            let log_path = Path::new(&path);
            let log_dir = match log_path.parent() {
                Some(dir) if !dir.as_os_str().is_empty() => dir,
                _ => Path::new("."),
            };
            if !log_dir.exists() {
                std::fs::create_dir_all(log_dir).map_err(|e| {
                    anyhow::anyhow!(
                        "Failed to create log directory {}: {}",
                        log_dir.display(),
                        e
                    )
                })?;
            }
            let log_filename = log_path
                .file_name()
                .ok_or_else(|| anyhow::anyhow!("Invalid log filename: {}", path))?;

            let writer = rolling::never(log_dir, log_filename);
            match format {
                LogFormat::Json => {
                    tracing_subscriber::fmt()
                        .with_env_filter(filter)
                        .json()
                        .with_writer(writer)
                        .with_target(false)
                        .with_thread_ids(false)
                        .with_file(false)
                        .with_line_number(false)
                        .with_ansi(false)
                        .init();
                }
                LogFormat::Terminal => {
                    tracing_subscriber::fmt()
                        .with_env_filter(filter)
                        .with_writer(writer)
                        .with_target(false)
                        .with_ansi(false)
                        .init();
                }
            }
        }
    }
    Ok(())
}

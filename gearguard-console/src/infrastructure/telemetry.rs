use serde::*;
use tracing::metadata::LevelFilter;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    filter::Directive, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry,
};

/// Logging setup. Console logs go to stderr so they never mix with the
/// rendered views on stdout.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct TelemetryConfig {
    #[serde(default = "default_enabled")]
    pub enable: bool,
    /// Global filter level.
    #[serde(default)]
    pub max_level: LoggingLevel,
    /// Extra `EnvFilter` directives, e.g. `service_maintenance=debug`.
    #[serde(default)]
    pub level_filter: String,
    #[serde(default)]
    pub console: ConsoleLogConfig,
    #[serde(default)]
    pub file: FileLogConfig,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enable: default_enabled(),
            max_level: Default::default(),
            level_filter: Default::default(),
            console: Default::default(),
            file: Default::default(),
        }
    }
}

#[derive(Default, Deserialize, Serialize, Clone, Debug)]
pub enum LoggingLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl From<LoggingLevel> for LevelFilter {
    fn from(val: LoggingLevel) -> Self {
        match val {
            LoggingLevel::Error => LevelFilter::ERROR,
            LoggingLevel::Warn => LevelFilter::WARN,
            LoggingLevel::Info => LevelFilter::INFO,
            LoggingLevel::Debug => LevelFilter::DEBUG,
            LoggingLevel::Trace => LevelFilter::TRACE,
            LoggingLevel::Off => LevelFilter::OFF,
        }
    }
}

impl From<LoggingLevel> for Directive {
    fn from(val: LoggingLevel) -> Self {
        let level: LevelFilter = val.into();
        level.into()
    }
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ConsoleLogConfig {
    #[serde(default = "default_enabled")]
    pub enable: bool,
    /// Adds file, line and thread to every event.
    #[serde(default)]
    pub enable_debug_logging: bool,
}

impl Default for ConsoleLogConfig {
    fn default() -> Self {
        Self {
            enable: default_enabled(),
            enable_debug_logging: Default::default(),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct FileLogConfig {
    #[serde(default)]
    pub enable: bool,
    #[serde(default)]
    pub enable_debug_logging: bool,
    #[serde(default = "default_path")]
    pub path: String,
    /// File name, or prefix when rolling.
    #[serde(default = "default_filename")]
    pub prefix: String,
    #[serde(default)]
    pub rolling_time: RotationLevel,
}

impl Default for FileLogConfig {
    fn default() -> Self {
        Self {
            enable: Default::default(),
            enable_debug_logging: Default::default(),
            path: default_path(),
            prefix: default_filename(),
            rolling_time: Default::default(),
        }
    }
}

#[derive(Default, Deserialize, Serialize, Clone, Debug)]
pub enum RotationLevel {
    Daily,
    Hourly,
    Minutely,
    #[default]
    Never,
}

impl From<RotationLevel> for Rotation {
    fn from(val: RotationLevel) -> Self {
        match val {
            RotationLevel::Daily => Rotation::DAILY,
            RotationLevel::Hourly => Rotation::HOURLY,
            RotationLevel::Minutely => Rotation::MINUTELY,
            RotationLevel::Never => Rotation::NEVER,
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_path() -> String {
    "./logs".to_string()
}

fn default_filename() -> String {
    "gearguard-console.log".to_string()
}

pub fn initialize_telemetry(config: &TelemetryConfig) -> anyhow::Result<()> {
    if !config.enable {
        return Ok(());
    }
    let filter = EnvFilter::builder()
        .with_default_directive(config.max_level.clone().into())
        .parse_lossy(config.level_filter.as_str());
    let console = config.console.enable.then(|| {
        let debug = config.console.enable_debug_logging;
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_file(debug)
            .with_line_number(debug)
            .with_thread_ids(debug)
            .with_target(debug)
    });
    let file = config.file.enable.then(|| {
        let debug = config.file.enable_debug_logging;
        let file_appender = RollingFileAppender::new(
            config.file.rolling_time.clone().into(),
            &config.file.path,
            &config.file.prefix,
        );
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(file_appender)
            .with_file(debug)
            .with_line_number(debug)
            .with_thread_ids(debug)
            .with_target(debug)
    });
    Registry::default()
        .with(filter)
        .with(console)
        .with(file)
        .try_init()?;
    Ok(())
}

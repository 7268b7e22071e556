mod config;
mod service_provider;
mod telemetry;

pub use config::{build_config, ConsoleConfig, OutputFormat};
pub use service_provider::ServiceProvider;
pub use telemetry::initialize_telemetry;

//! Tracing setup for the trivia server
//!
//! Usage:
//!   trivia --debug serve              # Debug logging to console
//!   trivia --log-file error.log serve # Also append INFO and above to a file
//!   trivia --otel serve               # Export traces to OTLP (telemetry feature)
//!   RUST_LOG=trivia_server=debug trivia serve
//!
//! Environment variables:
//!   RUST_LOG                          # Console filter (default: info)
//!   TRIVIA_LOG_FILE                   # Same as --log-file
//!   OTEL_EXPORTER_OTLP_ENDPOINT       # OTLP endpoint (default: http://localhost:4317)
//!   OTEL_SERVICE_NAME                 # Service name (default: trivia)

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing::Subscriber;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Debug level unless RUST_LOG says otherwise
    pub debug: bool,
    /// Enable OpenTelemetry OTLP export
    pub otel: bool,
    /// Append INFO and above to this file, independent of RUST_LOG
    pub log_file: Option<PathBuf>,
}

fn env_filter(config: &TracingConfig) -> EnvFilter {
    let default = if config.debug { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

fn console_layer<S>(config: &TracingConfig) -> impl Layer<S> + Send + Sync
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    tracing_subscriber::fmt::layer()
        .with_target(config.debug)
        .compact()
        .with_filter(env_filter(config))
}

/// Plain-text INFO+ log appended to `path`.
fn file_layer<S>(path: &Path) -> Result<impl Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    Ok(tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_filter(LevelFilter::INFO))
}

/// Console output, plus the log file when configured
pub fn init_tracing(config: &TracingConfig) -> Result<()> {
    let file = match &config.log_file {
        Some(path) => Some(file_layer(path)?),
        None => None,
    };

    tracing_subscriber::registry()
        .with(console_layer(config))
        .with(file)
        .try_init()
        .map_err(|err| anyhow!(err))
}

/// Console output plus OTLP span export
#[cfg(feature = "telemetry")]
pub fn init_tracing_with_otel(config: &TracingConfig) -> Result<()> {
    use opentelemetry::trace::TracerProvider as _;
    use opentelemetry::KeyValue;
    use opentelemetry_otlp::WithExportConfig;
    use opentelemetry_sdk::trace::TracerProvider;

    let endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
        .unwrap_or_else(|_| "http://localhost:4317".to_string());
    let service_name = std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| "trivia".to_string());

    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(&endpoint)
        .build()
        .map_err(|e| anyhow!("Failed to create OTLP exporter: {}", e))?;

    let resource = opentelemetry_sdk::Resource::new(vec![KeyValue::new(
        "service.name",
        service_name.clone(),
    )]);

    let provider = TracerProvider::builder()
        .with_batch_exporter(exporter, opentelemetry_sdk::runtime::Tokio)
        .with_resource(resource)
        .build();

    let tracer = provider.tracer("trivia");

    // Keep the provider alive for the life of the process
    let _ = opentelemetry::global::set_tracer_provider(provider);

    let file = match &config.log_file {
        Some(path) => Some(file_layer(path)?),
        None => None,
    };

    tracing_subscriber::registry()
        .with(console_layer(config))
        .with(file)
        .with(
            tracing_opentelemetry::layer()
                .with_tracer(tracer)
                .with_filter(env_filter(config)),
        )
        .try_init()
        .map_err(|err| anyhow!(err))?;

    tracing::info!(endpoint = %endpoint, service = %service_name, "OpenTelemetry tracing initialized");
    Ok(())
}

/// Flush pending spans
#[cfg(feature = "telemetry")]
pub fn shutdown_otel() {
    opentelemetry::global::shutdown_tracer_provider();
}

#[cfg(not(feature = "telemetry"))]
pub fn shutdown_otel() {}

/// Pick console-only or OTLP based on `config.otel`.
pub fn init(config: &TracingConfig) -> Result<()> {
    #[cfg(feature = "telemetry")]
    if config.otel {
        return init_tracing_with_otel(config);
    }

    if config.otel {
        eprintln!("--otel ignored: built without the `telemetry` feature");
    }
    init_tracing(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_gets_info_and_above_without_colour() {
        let path = std::env::temp_dir().join(format!("trivia-log-{}.log", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let subscriber = tracing_subscriber::registry().with(file_layer(&path).unwrap());
        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("page window computed");
            tracing::info!(id = 7, "question deleted");
            tracing::error!("storage unavailable");
        });

        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(written.contains("question deleted"));
        assert!(written.contains("storage unavailable"));
        assert!(!written.contains("page window computed"));
        assert!(!written.contains('\u{1b}'));
    }

    #[test]
    fn log_file_in_missing_directory_is_an_error() {
        let path = std::env::temp_dir()
            .join("trivia-no-such-dir")
            .join("error.log");
        let result = file_layer::<tracing_subscriber::Registry>(&path);
        assert!(result.is_err());
    }
}

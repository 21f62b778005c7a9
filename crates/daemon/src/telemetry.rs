//! Logging and optional OpenTelemetry export

use crate::config::LogFormat;
use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Install the global subscriber
///
/// `RUST_LOG` overrides the default `foodq=info` filter.
pub fn init(format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("foodq=info"))?;

    let fmt_layer = match format {
        LogFormat::Json => fmt::layer().json().boxed(),
        LogFormat::Pretty => fmt::layer().pretty().boxed(),
    };

    tracing_subscriber::registry()
        .with(otel_layer())
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// OpenTelemetry layer, if an OTLP endpoint is configured
///
/// # Environment Variables
///
/// - `OTEL_EXPORTER_OTLP_ENDPOINT`: OTLP endpoint (e.g., http://localhost:4317)
/// - `OTEL_SERVICE_NAME`: Service name (default: foodq-server)
fn otel_layer() -> Option<BoxedLayer> {
    let endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT").ok()?;

    #[cfg(feature = "telemetry")]
    {
        match build_otel_layer(&endpoint) {
            Ok(layer) => Some(layer),
            Err(e) => {
                eprintln!("Failed to initialize OpenTelemetry (continuing without it): {e}");
                None
            }
        }
    }

    #[cfg(not(feature = "telemetry"))]
    {
        eprintln!(
            "OTEL_EXPORTER_OTLP_ENDPOINT={endpoint} is set but feature 'telemetry' is not enabled"
        );
        None
    }
}

#[cfg(feature = "telemetry")]
fn build_otel_layer(endpoint: &str) -> Result<BoxedLayer> {
    use opentelemetry::trace::TracerProvider as _;
    use opentelemetry::KeyValue;
    use opentelemetry_otlp::WithExportConfig;
    use opentelemetry_sdk::trace::TracerProvider;
    use opentelemetry_sdk::Resource;

    let service_name =
        std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| "foodq-server".to_string());

    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()?;

    let provider = TracerProvider::builder()
        .with_batch_exporter(exporter, opentelemetry_sdk::runtime::Tokio)
        .with_resource(Resource::new(vec![KeyValue::new(
            "service.name",
            service_name.clone(),
        )]))
        .build();

    let tracer = provider.tracer(service_name);
    opentelemetry::global::set_tracer_provider(provider);

    Ok(tracing_opentelemetry::layer().with_tracer(tracer).boxed())
}

/// Flush pending spans before exit
pub fn shutdown() {
    #[cfg(feature = "telemetry")]
    opentelemetry::global::shutdown_tracer_provider();
}

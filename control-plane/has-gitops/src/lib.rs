pub mod config;
pub mod error;
pub mod generate;
pub mod gitops;
pub mod load;

pub use error::GitopsError;
pub use generate::{
    ComponentManifests, Exposure, RenderedResource, generate_deployment,
    generate_route, generate_service,
};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, filter::Directive, layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Install the global subscriber. `RUST_LOG` wins over `default_env`.
/// Logs go to stderr so rendered manifests on stdout stay parseable.
pub fn init_tracing(default_env: &str) {
    let default_directive = default_env
        .parse::<Directive>()
        .unwrap_or_else(|_| LevelFilter::INFO.into());
    let filter = EnvFilter::builder()
        .with_default_directive(default_directive)
        .with_env_var("RUST_LOG")
        .from_env_lossy();

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

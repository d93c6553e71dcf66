use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use studygroups_it::models::HarnessConfig;
use studygroups_it::setup::run_initial_setup;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "studygroups_it=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = HarnessConfig::global();
    run_initial_setup(config, &mut std::io::stdout())
}

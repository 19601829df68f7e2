use kranos::commands::Cli;
use kranos::libs::messages::macros::is_debug_mode;

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "kranos=debug".into()))
            .init();
    }

    Cli::menu()
}

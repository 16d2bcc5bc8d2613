use sorare_export::export;
use tracing::error;

#[tokio::main]
async fn main() {
    #[cfg(debug_assertions)]
    tracing_subscriber::fmt()
        .compact()
        .with_ansi(true)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .without_time()
        .with_env_filter(tracing_subscriber::EnvFilter::new("sorare_export=debug"))
        .init();
    #[cfg(not(debug_assertions))]
    tracing_subscriber::fmt()
        .compact()
        .with_ansi(true)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .without_time()
        .with_env_filter(tracing_subscriber::EnvFilter::new("sorare_export=info"))
        .init();
    if let Err(err) = export::run().await {
        error!("{err}");
        std::process::exit(1);
    }
}

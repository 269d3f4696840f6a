use anyhow::{Context, Result};
use dotenvy::dotenv;
use signup_tui::models::config::{log_file_from_env, AppConfig};
use signup_tui::services::{HttpRegistration, NoopRegistration, RegistrationService};
use signup_tui::tui::App;
use std::fs::OpenOptions;
use std::sync::{Arc, Mutex};
use tracing::info;

async fn run<R: RegistrationService + 'static>(registrar: Arc<R>) -> Result<()> {
    // Initialize terminal
    let mut terminal = ratatui::init();
    terminal.clear()?;

    let mut app = App::new(registrar)?;
    let result = app.run(&mut terminal).await;

    // Restore terminal
    ratatui::restore();

    result
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    // The terminal belongs to the UI, so logs go to a file
    let log_file = log_file_from_env();
    let writer = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .with_context(|| format!("Failed to open log file {}", log_file))?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(Mutex::new(writer))
        .with_ansi(false)
        .init();

    // Load configuration
    let cfg = AppConfig::from_env()?;

    match &cfg.register_url {
        Some(url) => {
            info!(url = %url, "registering sign-ups over HTTP");
            let registrar = HttpRegistration::new(url.clone(), cfg.request_timeout)?;
            run(Arc::new(registrar)).await
        }
        None => {
            info!("no SIGNUP_REGISTER_URL set, sign-ups are not sent anywhere");
            run(Arc::new(NoopRegistration)).await
        }
    }
}

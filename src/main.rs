use jwt_roundtrip_check::check::TokenRoundTripCheck;
use jwt_roundtrip_check::AppConfig;
use std::process::ExitCode;
use tracing::{error, info, Level};

fn main() -> ExitCode {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("Starting JWT round-trip check...");

    // Load configuration from environment
    let config = AppConfig::from_env();
    info!("Configuration loaded (token TTL: {}s)", config.token_ttl_secs);

    let check = TokenRoundTripCheck::new(&config);
    match check.run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("❌ Token signing failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

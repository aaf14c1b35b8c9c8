//! # Mountain Vista Resort Booking Library
//!
//! Drives one booking session: suites, stay dates, checkout and the
//! confirmation receipt.
//!
//! ## Module Organization
//! ```text
//! resort_app/
//! ├── lib.rs          ◄─── You are here (logging & session driver)
//! ├── session.rs      ◄─── JSON command handling, current route
//! ├── routes.rs       ◄─── Path parsing
//! ├── views.rs        ◄─── View models and fallbacks
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── booking.rs  ◄─── Booking store
//! │   └── config.rs   ◄─── Configuration
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── list_suites, get_suite
//! │   ├── booking.rs  ◄─── select_dates, reserve
//! │   ├── checkout.rs ◄─── submit_checkout
//! │   └── confirmation.rs ◄─── get_confirmation, start_new_booking
//! └── error.rs        ◄─── ApiError for commands, AppError for the driver
//! ```

pub mod commands;
pub mod error;
pub mod routes;
pub mod session;
pub mod state;
pub mod views;

use std::path::PathBuf;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info, info_span, Instrument};
use tracing_subscriber::EnvFilter;

use error::{ApiError, AppError};
use session::{Session, SessionCommand, SessionResponse};
use state::AppConfig;

/// Runs a session over stdin/stdout until stdin closes.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • RESORT_CONFIG path, else the platform config dir                  │
/// │     • RESORT_* environment overrides                                    │
/// │                                                                         │
/// │  2. Create Session ───────────────────────────────────────────────────► │
/// │     • Empty booking, catalog route, fresh session id                    │
/// │                                                                         │
/// │  3. Write the catalog view, then answer one line per command           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), AppError> {
    let config_path = std::env::var_os("RESORT_CONFIG").map(PathBuf::from);
    let config = AppConfig::load(config_path)?;
    info!(resort = %config.resort_name, "Configuration loaded");

    let mut session = Session::new(config);
    let span = info_span!("session", id = %session.id());

    async move {
        info!("Session started");

        let mut stdout = tokio::io::stdout();
        let initial = SessionResponse::Ok {
            route: session.route().clone(),
            view: session.view(),
        };
        write_line(&mut stdout, &initial).await?;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let response = match serde_json::from_str::<SessionCommand>(line) {
                Ok(command) => session.handle(command).await,
                Err(e) => {
                    debug!(error = %e, "Unreadable command");
                    SessionResponse::Error {
                        route: session.route().clone(),
                        error: ApiError::bad_request(format!("Invalid command: {e}")),
                    }
                }
            };
            write_line(&mut stdout, &response).await?;
        }

        info!("Session ended");
        Ok::<(), AppError>(())
    }
    .instrument(span)
    .await
}

async fn write_line(
    out: &mut tokio::io::Stdout,
    response: &SessionResponse,
) -> Result<(), AppError> {
    let mut json = serde_json::to_vec(response)?;
    json.push(b'\n');
    out.write_all(&json).await?;
    out.flush().await?;
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr; stdout carries session responses.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=resort_app=trace` - Include booking change notifications
/// - Default: INFO, DEBUG for this crate
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,resort_app=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

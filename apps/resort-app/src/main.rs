//! # Mountain Vista Resort Session Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Mountain Vista Resort                            │
//! │                                                                         │
//! │  Front-end ──► JSON command per line ──► stdin                          │
//! │                                            │                            │
//! │                                            ▼                            │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  resort-app                                                      │  │
//! │  │  main.rs ────► logging, then lib::run()                          │  │
//! │  │  session ────► commands ──► BookingState ──► views               │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                            │                            │
//! │  Front-end ◄── JSON view per line ◄── stdout                            │
//! │  Logs ──────────────────────────────► stderr                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::error;

#[tokio::main]
async fn main() {
    resort_app::init_tracing();

    if let Err(e) = resort_app::run().await {
        error!(error = %e, "Session failed");
        std::process::exit(1);
    }
}

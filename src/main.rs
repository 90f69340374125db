//! Entry point for the Store Engine binary.
//!
//! Running this binary starts an HTTP server exposing the view engine
//! and the purchase calculator.  Configuration is read from `STORE_*`
//! environment variables (see `store_engine::config::Settings`).

use store_engine::config::Settings;
use tracing::error;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;
    store_engine::logging::init_tracing(&settings.log_level);
    if let Err(err) = store_engine::api::serve(&settings).await {
        error!(error = %err, "server exited with an error");
        return Err(err);
    }
    Ok(())
}

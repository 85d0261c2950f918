//! Webhook, event, event type and subscriber commands
//!
//! None of these talk to the API yet; each one resolves and validates the
//! configuration it would use and prints it.

use tracing::debug;
use xibugo_core::config::ConfigStore;
use xibugo_core::error::XibugoResult;

pub fn run(store: &ConfigStore, resource: &str, action: &str) -> XibugoResult<()> {
    let config = store.resolve(true)?;
    debug!(
        "{} {} against {}",
        resource,
        action,
        config.effective_base_url()
    );
    println!("{}", config);
    Ok(())
}

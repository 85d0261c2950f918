//! Identity check

use xibugo_core::config::ConfigStore;
use xibugo_core::error::XibugoResult;

/// Print the configuration requests would be made with
pub fn run(store: &ConfigStore) -> XibugoResult<()> {
    let config = store.resolve(true)?;
    println!("{}", config);
    Ok(())
}

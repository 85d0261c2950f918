//! Configuration management commands

use crate::console::{CliConsole, format};
use crate::prompter::TerminalPrompter;
use std::io::IsTerminal;
use xibugo_core::config::wizard::{Prompter, SetupWizard, profile_path, save_profile};
use xibugo_core::config::{ConfigProperty, ConfigStore};
use xibugo_core::error::{XibugoError, XibugoResult};

/// Print the current value of a property
pub fn show(store: &ConfigStore, property: &str) -> XibugoResult<()> {
    let property: ConfigProperty = property.parse()?;
    println!("{}", store.get(property));
    Ok(())
}

/// Change a property and write it to the active configuration file
pub fn set(store: &mut ConfigStore, property: &str, value: &str) -> XibugoResult<()> {
    let property: ConfigProperty = property.parse()?;
    store.set(property, value)
}

/// Run the setup wizard on the terminal and save the profile
pub fn init(store: &ConfigStore) -> XibugoResult<()> {
    if !std::io::stdin().is_terminal() {
        return Err(XibugoError::config(
            "config init needs an interactive terminal",
        ));
    }

    let mut prompter = TerminalPrompter::new();
    init_with(store, &mut prompter, &CliConsole::new(true))
}

fn init_with(
    store: &ConfigStore,
    prompter: &mut dyn Prompter,
    console: &CliConsole,
) -> XibugoResult<()> {
    let dir = store.user_config_dir().ok_or_else(|| {
        XibugoError::config("could not determine the user configuration directory")
    })?;

    console.info(&format!("Configuring profile '{}'", store.profile()));
    let outcome = SetupWizard::from_store(store)?.run(prompter)?;

    let target = profile_path(dir, store.profile(), outcome.format);
    if target.exists() {
        console.warn(&format!("Replacing {}", format::path(&target)));
    }

    let path = save_profile(dir, store.profile(), &outcome)?;
    console.success(&format!("Configuration saved to {}", format::path(&path)));
    Ok(())
}

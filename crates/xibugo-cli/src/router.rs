//! Command routing logic for CLI
//!
//! The configuration store is built once per invocation and passed to
//! whichever handler the command names.

use crate::args::{Cli, Commands, ConfigAction};
use crate::commands;
use tracing::debug;
use xibugo_core::config::{ConfigStore, EnvVars};
use xibugo_core::error::XibugoResult;

/// Route CLI commands to their respective handlers
pub fn route(cli: Cli) -> XibugoResult<()> {
    if matches!(cli.command, Commands::Version) {
        return commands::version::show();
    }

    let env = EnvVars::from_process();
    let mut store = ConfigStore::load(
        cli.global.flag_values(),
        &cli.global.locator_options(),
        &env,
    );
    debug!(
        "Profile '{}' using {:?}",
        store.profile(),
        store.location().file
    );

    match cli.command {
        Commands::Config { action } => route_config(action, &mut store),
        Commands::Webhook { action } => commands::resource::run(&store, "webhook", action.name()),
        Commands::Event { action } => commands::resource::run(&store, "event", action.name()),
        Commands::EventType { action } => {
            commands::resource::run(&store, "event-type", action.name())
        }
        Commands::Subscriber { action } => {
            commands::resource::run(&store, "subscriber", action.name())
        }
        Commands::Whoami => commands::whoami::run(&store),
        Commands::Version => commands::version::show(),
    }
}

fn route_config(action: ConfigAction, store: &mut ConfigStore) -> XibugoResult<()> {
    match action {
        ConfigAction::Show { property } => commands::config::show(store, &property),
        ConfigAction::Set { property, value } => commands::config::set(store, &property, &value),
        ConfigAction::Init => commands::config::init(store),
    }
}

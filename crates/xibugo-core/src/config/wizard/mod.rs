//! Interactive profile setup (`config init`)
//!
//! Asks for the account, the access token, the target environment (with a
//! custom endpoint for DEV) and a file format, then writes
//! `<profile>.<ext>` into the per-user configuration directory once the
//! user confirms.
//!
//! # Example
//!
//! ```no_run
//! use xibugo_core::config::wizard::{Prompter, SetupWizard, save_profile};
//! use xibugo_core::config::ConfigStore;
//! use xibugo_core::error::XibugoResult;
//!
//! fn init(store: &ConfigStore, prompter: &mut dyn Prompter) -> XibugoResult<()> {
//!     let outcome = SetupWizard::from_store(store)?.run(prompter)?;
//!     if let Some(dir) = store.user_config_dir() {
//!         save_profile(dir, store.profile(), &outcome)?;
//!     }
//!     Ok(())
//! }
//! ```

mod manager;
mod options;
mod prompter;
mod saver;
mod state;

pub use manager::{SetupWizard, WizardOutcome};
pub use options::Environment;
pub use prompter::Prompter;
pub use saver::{profile_path, save_profile};
pub use state::{WizardState, WizardStep};

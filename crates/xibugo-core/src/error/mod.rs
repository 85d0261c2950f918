//! Error types for the Xibugo CLI
//!
//! Every fallible operation in the workspace returns [`XibugoResult`]. The
//! variants map onto the failure kinds a command can end with:
//! - `NotFound`: an unregistered property name
//! - `Validation`: a missing required field or a value rejected by a parser
//! - `NotConfirmed`: the setup wizard's save step was declined
//! - `Io`: reading or writing a configuration file failed
//! - `FileNotFound`: no configuration file at the resolved location (the
//!   store swallows this one)

mod constructors;
mod conversions;
mod types;

pub use types::{XibugoError, XibugoResult};

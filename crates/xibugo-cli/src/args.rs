//! CLI argument definitions using clap
//!
//! Command tree:
//! - xibugo config show|set|init
//! - xibugo webhook|event|event-type|subscriber <action>
//! - xibugo whoami
//! - xibugo version

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use xibugo_core::config::property::parse_bool;
use xibugo_core::config::{ConfigValues, LocatorOptions};

#[derive(Parser, Debug)]
#[command(name = "xibugo")]
#[command(about = "Xibugo - manage webhooks, events and subscribers")]
#[command(
    long_about = r#"Xibugo - manage webhooks, events and subscribers

CONFIGURATION:
  xibugo config init                   # Create a profile interactively
  xibugo config show <property>        # Print a property
  xibugo config set <property> <value> # Change a property in the active file

Properties: account, access-token, base-url, sandbox
Environment: XIBUGO_ACCOUNT, XIBUGO_ACCESS_TOKEN, XIBUGO_BASE_URL,
             XIBUGO_SANDBOX, XIBUGO_PROFILE, XIBUGO_CONFIG_FILE"#
)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags accepted by every command
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Account
    #[arg(long, global = true)]
    pub account: Option<String>,

    /// Base URL
    #[arg(long, global = true, conflicts_with = "sandbox")]
    pub base_url: Option<String>,

    /// Access token
    #[arg(long, global = true)]
    pub access_token: Option<String>,

    /// Sandbox environment
    #[arg(
        long,
        global = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = parse_flag_bool
    )]
    pub sandbox: Option<bool>,

    /// Configuration file
    #[arg(short = 'c', long, global = true)]
    pub config_file: Option<PathBuf>,

    /// Profile [default: XIBUGO_PROFILE, then "default"]
    #[arg(long, global = true)]
    pub profile: Option<String>,
}

impl GlobalArgs {
    /// Values for the flag layer; flags that were not given stay unset
    pub fn flag_values(&self) -> ConfigValues {
        ConfigValues {
            account: self.account.clone(),
            access_token: self.access_token.clone(),
            base_url: self.base_url.clone(),
            sandbox: self.sandbox,
        }
    }

    pub fn locator_options(&self) -> LocatorOptions {
        LocatorOptions {
            config_file: self.config_file.clone(),
            profile: self.profile.clone(),
        }
    }
}

fn parse_flag_bool(raw: &str) -> Result<bool, String> {
    parse_bool(raw).ok_or_else(|| format!("'{}' is not a boolean", raw))
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configurations
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Manage webhooks
    #[command(alias = "webhooks")]
    Webhook {
        #[command(subcommand)]
        action: WebhookAction,
    },

    /// Manage events
    #[command(alias = "events")]
    Event {
        #[command(subcommand)]
        action: EventAction,
    },

    /// Manage event types
    #[command(name = "event-type", alias = "event-types")]
    EventType {
        #[command(subcommand)]
        action: EventTypeAction,
    },

    /// Manage subscribers
    #[command(alias = "subscribers")]
    Subscriber {
        #[command(subcommand)]
        action: SubscriberAction,
    },

    /// Check identity
    Whoami,

    /// Print version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Print the current value of a property
    Show {
        /// account, access-token, base-url or sandbox
        property: String,
    },

    /// Change a property and save it to the active configuration file
    Set {
        /// account, access-token, base-url or sandbox
        property: String,
        /// New value
        value: String,
    },

    /// Create a profile interactively
    Init,
}

#[derive(Subcommand, Debug, Clone)]
pub enum WebhookAction {
    /// List webhooks
    List,
    /// Delete a webhook
    Delete,
    /// Create a webhook
    Create { input: Option<String> },
    /// Retrieve a webhook
    Show,
}

impl WebhookAction {
    pub fn name(&self) -> &'static str {
        match self {
            WebhookAction::List => "list",
            WebhookAction::Delete => "delete",
            WebhookAction::Create { .. } => "create",
            WebhookAction::Show => "show",
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum EventAction {
    /// List events
    List,
    /// Delete an event
    Delete,
    /// Create an event
    Create { input: Option<String> },
    /// Retrieve an event
    Get,
}

impl EventAction {
    pub fn name(&self) -> &'static str {
        match self {
            EventAction::List => "list",
            EventAction::Delete => "delete",
            EventAction::Create { .. } => "create",
            EventAction::Get => "get",
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum EventTypeAction {
    /// List event types
    List,
    /// Delete an event type
    Delete,
    /// Create an event type
    Create { input: Option<String> },
    /// Retrieve an event type
    Get,
}

impl EventTypeAction {
    pub fn name(&self) -> &'static str {
        match self {
            EventTypeAction::List => "list",
            EventTypeAction::Delete => "delete",
            EventTypeAction::Create { .. } => "create",
            EventTypeAction::Get => "get",
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum SubscriberAction {
    /// List subscribers
    List,
    /// Delete a subscriber
    Delete,
    /// Create a subscriber
    Create { input: Option<String> },
    /// Retrieve a subscriber
    Show,
}

impl SubscriberAction {
    pub fn name(&self) -> &'static str {
        match self {
            SubscriberAction::List => "list",
            SubscriberAction::Delete => "delete",
            SubscriberAction::Create { .. } => "create",
            SubscriberAction::Show => "show",
        }
    }
}

//! CLI definition using clap

use clap::{ArgGroup, Args, Parser, Subcommand};

use fleetdesk_app::config::ENDPOINT_ENV;
use fleetdesk_types::{OutputFormat, Truck};

#[derive(Parser, Debug)]
#[command(name = "fleetdesk")]
#[command(version)]
#[command(about = "Manage truck records against a remote API")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the truck API. Overrides the config file.
    #[arg(long, global = true, env = ENDPOINT_ENV)]
    pub endpoint: Option<String>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

/// Truck fields as entered on the command line
#[derive(Args, Debug, Clone)]
pub struct TruckFields {
    /// Truck code (e.g., "T-01")
    #[arg(long)]
    pub code: String,

    /// Display name
    #[arg(long)]
    pub name: String,

    /// Status (active, inactive, maintenance)
    #[arg(long)]
    pub status: String,

    /// Free-form description
    #[arg(long)]
    pub description: Option<String>,
}

impl TruckFields {
    /// Unsaved truck from these fields; status is not checked here
    pub fn to_truck(&self) -> Truck {
        let mut truck = Truck {
            code: self.code.clone(),
            name: self.name.clone(),
            status: self.status.clone(),
            ..Default::default()
        };
        if let Some(description) = &self.description {
            truck.set_description(description.clone());
        }
        truck
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all trucks
    List,

    /// Create a truck
    Create {
        #[command(flatten)]
        fields: TruckFields,
    },

    /// Update an existing truck; only the given fields change
    #[command(group(ArgGroup::new("changes").required(true).multiple(true)))]
    Update {
        /// Truck id
        id: String,

        #[arg(long, group = "changes")]
        code: Option<String>,

        #[arg(long, group = "changes")]
        name: Option<String>,

        #[arg(long, group = "changes")]
        status: Option<String>,

        #[arg(long, group = "changes")]
        description: Option<String>,
    },

    /// Check truck fields without contacting the API
    Validate {
        #[command(flatten)]
        fields: TruckFields,
    },

    /// Show the allowed status values
    Statuses,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the API endpoint
        #[arg(long)]
        set_endpoint: Option<String>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

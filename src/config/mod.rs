use crate::core::client::DEFAULT_API_URL;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "habit")]
#[command(about = "A command-line client for the habit-tracker API")]
pub struct CliConfig {
    #[arg(long, env = "HABIT_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// One subcommand per API endpoint. Payload arguments are raw JSON strings;
/// the server owns the schemas.
#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum Command {
    /// List all habits
    List,
    /// Show a single habit
    Show { id: u64 },
    /// Create a habit from a JSON payload, e.g. '{"name":"Run"}'
    Add { habit: String },
    /// Update a habit from a JSON payload
    Update { id: u64, habit: String },
    /// Delete a habit
    Delete { id: u64 },
    /// List all entries for a habit
    Entries { id: u64 },
    /// Toggle a habit's entry for a date
    Toggle {
        id: u64,
        #[arg(long, help = "Date as YYYY-MM-DD, defaults to today")]
        date: Option<String>,
    },
    /// Create or update an entry from a JSON payload
    Log { id: u64, entry: String },
}

//! CLI commands and argument parsing

use clap::{Parser, Subcommand};

/// Hugging Face Space operations CLI
#[derive(Parser, Debug)]
#[command(name = "spacectl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Hugging Face access token (or set HF_TOKEN / HUGGINGFACE_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// API endpoint (or set HF_ENDPOINT)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List spaces
    List {
        /// Filter by author username
        #[arg(long)]
        author: Option<String>,

        /// Search term
        #[arg(long)]
        search: Option<String>,

        /// Maximum number of results
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Get space information
    Info {
        /// Space ID (username/space-name)
        space_id: String,
    },

    /// Restart a space
    Restart {
        /// Space ID (username/space-name)
        space_id: String,
    },

    /// Pause a space
    Pause {
        /// Space ID (username/space-name)
        space_id: String,
    },

    /// Get space runtime information
    Runtime {
        /// Space ID (username/space-name)
        space_id: String,
    },

    /// List spaces for a user
    User {
        /// Hugging Face username
        username: String,
    },
}

//! Command definitions and structures for the CLI
//!
//! Every option can also be set through a `MEMEBOT_*` environment variable;
//! an explicit flag wins over the environment.

use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_IMAGE_WIDTH, DEFAULT_LISTEN, DEFAULT_LOG, DEFAULT_MEMEGEN_URL};

/// Main CLI structure
#[derive(Parser, Debug)]
#[command(name = "memebot")]
#[command(about = "Slash-command webhook that renders meme images via memegen")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Server listen address
    #[arg(long, global = true, env = "MEMEBOT_LISTEN", default_value = DEFAULT_LISTEN)]
    pub listen: String,

    /// Path of logfile. Use 'syslog' for syslog, 'stdout' for standard
    /// output, or 'none' to disable logging.
    #[arg(long, global = true, env = "MEMEBOT_LOG", default_value = DEFAULT_LOG)]
    pub logfile: String,

    /// Width of image in pixels (empty to disable)
    #[arg(long, global = true, env = "MEMEBOT_IMGWIDTH", default_value = DEFAULT_IMAGE_WIDTH)]
    pub imgwidth: String,

    /// Base URL of the memegen service
    #[arg(long, global = true, env = "MEMEBOT_MEMEGEN_URL", default_value = DEFAULT_MEMEGEN_URL)]
    pub memegen_url: String,

    /// Slash-command token (accepted but not verified)
    #[arg(long, global = true, env = "MEMEBOT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the webhook server (default mode when no subcommand)
    Serve,

    /// Answer one slash command and print the JSON reply
    Render {
        /// Command text, e.g. "drake;top;bottom"
        #[arg(default_value = "")]
        text: String,
    },

    /// Fetch and print the template listing
    Templates,
}

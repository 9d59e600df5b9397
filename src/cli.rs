use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "opaque-facade",
    about = "Drive an opaque facade and its contract checks",
    version
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace); overrides RUST_LOG
    #[arg(long, global = true)]
    pub log_level: Option<Level>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Construct a facade, perform actions on it, then drop it
    Run {
        /// Value the hidden state is seeded with
        #[arg(long, default_value_t = 10, env = "FACADE_INIT", allow_negative_numbers = true)]
        init: i32,

        /// Number of actions to perform
        #[arg(long, default_value_t = 3, env = "FACADE_ACTIONS")]
        actions: u64,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Construct two facades and drive only the first
    Isolate {
        /// Seed of the facade that receives the actions
        #[arg(long, allow_negative_numbers = true)]
        first: i32,

        /// Seed of the facade that is left alone
        #[arg(long, allow_negative_numbers = true)]
        second: i32,

        /// Number of actions performed on the first facade
        #[arg(long, default_value_t = 3)]
        actions: u64,

        /// Print the summaries as JSON lines
        #[arg(long)]
        json: bool,
    },

    /// Evaluate the precondition `value > 0`; aborts the process if it fails
    Check {
        #[arg(long, allow_negative_numbers = true)]
        value: i64,
    },
}

pub mod check;
pub mod info;
pub mod is;
pub mod kinds;

use argtype_core::Kind;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "argtype")]
#[command(about = "Validate and convert command-line argument values.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Show debug output, repeat for more
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print nothing but errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Do not accept 0 as a positive integer
    #[arg(long, global = true)]
    pub strict_positive: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert values and report the invalid ones
    #[command(alias = "c")]
    Check {
        kind: Kind,
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },
    /// Tell whether values are valid, without converting them
    Is {
        kind: Kind,
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },
    /// List every supported kind
    #[command(alias = "k")]
    Kinds,
    /// Show local interfaces and gateways
    #[command(alias = "i")]
    Info,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

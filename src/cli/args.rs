//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand};

/// Zoo enclosure hierarchy manager: composite sections and enclosures with recursive display
#[derive(Parser, Debug)]
#[command(name = "zootree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging. Repeat for more verbosity (-d -d -d)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the recursive enclosure listing
    Show {
        /// Spaces per nesting level (overrides config)
        #[arg(short, long)]
        indent: Option<usize>,
    },

    /// Render the hierarchy with box-drawing glyphs
    Tree,

    /// List leaf enclosures
    Leaves,

    /// List every animal with its enclosure
    Animals,

    /// Show effective configuration
    Config,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

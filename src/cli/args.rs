//! Command line argument definitions.

use clap::{Parser, Subcommand};

/// Media Catalog - resolve titles against TMDB and keep a local library
#[derive(Parser, Debug)]
#[command(name = "media-catalog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a title against TMDB and store the match
    Scan {
        /// Expects TITLE YEAR; read from the current directory name
        /// ('TITLE (YEAR)') when missing
        #[arg(long, num_args = 2, value_names = ["TITLE", "YEAR"])]
        info: Option<Vec<String>>,

        /// Accepted distance between the requested and the matched year
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(i32).range(2..=5))]
        tolerance: i32,
    },

    /// List stored records
    List {
        /// Maximum number of records to print
        #[arg(short, long, value_name = "N")]
        limit: Option<usize>,
    },

    /// Write a stored poster to the current directory
    Poster {
        /// Media title, case insensitive; read from the cwd name when missing
        #[arg(short, long)]
        title: Option<String>,

        /// Replace the poster file if it already exists
        #[arg(short, long)]
        replace: bool,
    },

    /// Point a stored record's path at the current directory
    Relocate {
        /// TMDB id of the record
        #[arg(value_name = "ID")]
        id: u64,
    },
}

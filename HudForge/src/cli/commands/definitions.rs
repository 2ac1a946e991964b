//! Subcommand enum definitions for CLI

use clap::Subcommand;
use std::path::PathBuf;

/// Color conversion commands
#[derive(Subcommand)]
pub enum ColorCommands {
    /// Convert a hex color (#RGB, #RRGGBB, #RRGGBBAA) to "R G B A"
    Rgba {
        /// Hex color
        hex: String,
    },

    /// Lower alpha by 50 (unchanged below 50)
    Pulse {
        /// Color as "R G B A"
        rgba: String,
    },

    /// Set alpha to 100
    Dim {
        /// Color as "R G B A"
        rgba: String,
    },

    /// Quarter the color channels and make opaque
    Gray {
        /// Color as "R G B A"
        rgba: String,
    },

    /// Convert "R G B A" back to #RRGGBBAA
    Hex {
        /// Color as "R G B A"
        rgba: String,
    },
}

/// Text line commands
#[derive(Subcommand)]
pub enum LineCommands {
    /// Prefix a line with a single // marker
    Comment {
        /// Line to comment
        text: String,
    },

    /// Remove every // marker from a line
    Uncomment {
        /// Line to uncomment
        text: String,
    },

    /// Print the zero-based indices of lines containing a string
    Find {
        /// Text file to search
        path: PathBuf,

        /// String to look for (spaces also match tabs)
        needle: String,
    },
}

/// Item quality commands
#[derive(Subcommand)]
pub enum QualityCommands {
    /// List all quality color key triples
    List {
        /// Only list decorated weapon rarities
        #[arg(long, conflicts_with = "qualities")]
        rarities: bool,

        /// Only list item qualities
        #[arg(long)]
        qualities: bool,
    },

    /// Print the base, dimmed and greyed-out values for a quality color
    Derive {
        /// Any of the three keys (e.g., `QualityColorUnique`)
        key: String,

        /// Base color as "R G B A"
        rgba: String,
    },
}

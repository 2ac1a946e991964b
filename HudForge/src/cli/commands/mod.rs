use clap::Subcommand;
use std::path::PathBuf;

pub mod color;
pub mod definitions;
pub mod execute;
pub mod line;
pub mod merge;
pub mod quality;

use definitions::{ColorCommands, LineCommands, QualityCommands};

#[derive(Subcommand)]
pub enum Commands {
    /// Convert and derive HUD colors
    Color {
        #[command(subcommand)]
        command: ColorCommands,
    },

    /// Comment, uncomment or search text lines
    Line {
        #[command(subcommand)]
        command: LineCommands,
    },

    /// Deep-merge one JSON config into another
    Merge {
        /// JSON file merged into
        target: PathBuf,

        /// JSON file whose values win on scalar collisions
        source: PathBuf,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit compact JSON
        #[arg(short, long)]
        compact: bool,
    },

    /// Inspect item quality color keys
    Quality {
        #[command(subcommand)]
        command: QualityCommands,
    },
}

//! Command execution implementations

use super::Commands;
use super::definitions::{ColorCommands, LineCommands, QualityCommands};
use super::{color, line, merge, quality};

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Color { command } => command.execute(),
            Commands::Line { command } => command.execute(),
            Commands::Merge {
                target,
                source,
                output,
                compact,
            } => merge::execute(target, source, output.as_deref(), *compact),
            Commands::Quality { command } => command.execute(),
        }
    }
}

impl ColorCommands {
    /// Execute the selected color command.
    ///
    /// # Errors
    /// Returns an error if the color cannot be parsed.
    pub fn execute(&self) -> anyhow::Result<()> {
        let converted = match self {
            ColorCommands::Rgba { hex } => color::rgba(hex)?,
            ColorCommands::Pulse { rgba } => color::pulse(rgba)?,
            ColorCommands::Dim { rgba } => color::dim(rgba)?,
            ColorCommands::Gray { rgba } => color::gray(rgba)?,
            ColorCommands::Hex { rgba } => color::hex(rgba)?,
        };
        println!("{converted}");
        Ok(())
    }
}

impl LineCommands {
    /// Execute the selected line command.
    ///
    /// # Errors
    /// Returns an error if the searched file cannot be read.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            LineCommands::Comment { text } => println!("{}", line::comment(text)),
            LineCommands::Uncomment { text } => println!("{}", line::uncomment(text)),
            LineCommands::Find { path, needle } => {
                for index in line::find(path, needle)? {
                    println!("{index}");
                }
            }
        }
        Ok(())
    }
}

impl QualityCommands {
    /// Execute the selected quality command.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the color is malformed.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            QualityCommands::List {
                rarities,
                qualities,
            } => {
                for row in quality::list(*rarities, *qualities) {
                    println!("{row}");
                }
            }
            QualityCommands::Derive { key, rgba } => {
                println!("{}", quality::derive(key, rgba)?);
            }
        }
        Ok(())
    }
}

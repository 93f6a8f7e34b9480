use clap::Parser;
use thiserror::Error;

use crate::TermInt;
use crate::geometry::Bounds;

const DEFAULT_WIDTH: TermInt = 100;
const DEFAULT_HEIGHT: TermInt = 20;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("a {width}x{height} board is too small, it needs room for the snake and its food")]
    BoardTooSmall { width: TermInt, height: TermInt },
}

/// Snake in the terminal.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Width of the game board
    #[arg(long, value_name = "COLUMNS", default_value_t = DEFAULT_WIDTH,
          value_parser = clap::value_parser!(u16).range(1..))]
    pub width: TermInt,
    /// Height of the game board
    #[arg(long, value_name = "ROWS", default_value_t = DEFAULT_HEIGHT,
          value_parser = clap::value_parser!(u16).range(1..))]
    pub height: TermInt,
    /// Draw the board without colors
    #[arg(long)]
    pub no_color: bool,
}

impl CliArgs {
    pub fn bounds(&self) -> Result<Bounds, ConfigError> {
        Bounds::new(self.width, self.height)
    }
}

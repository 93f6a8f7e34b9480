mod clock;
mod config;
mod engine;
mod game;
mod geometry;
mod keys;
mod render;
mod snake;
mod state;
mod term;

use anyhow::Result;
use clap::Parser;

use config::CliArgs;
use render::Palette;

pub type TermInt = u16;
pub type Coords = (TermInt, TermInt);

fn main() -> Result<()> {
    pretty_env_logger::init();

    let args = CliArgs::parse();
    let bounds = args.bounds()?;
    let palette = if args.no_color { Palette::plain() } else { Palette::colored() };

    // The game loop returns once the player quits
    game::SnakeGame::new(bounds, palette).run()
}

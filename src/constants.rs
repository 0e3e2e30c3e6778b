// Uses
use lazy_static::lazy_static;
use poise::serenity_prelude::Colour;
use yansi::{Color, Style};

// Constants
pub const PROGRAM_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const MAIN_COLOUR: Colour = Colour(0xf2a1c4);

// Style Constants
lazy_static! {
	pub static ref HEADER_STYLE: Style = Style::new(Color::Cyan).bold().wrap();
	pub static ref OKAY_STYLE: Style = Style::new(Color::Green).bold();
	pub static ref ERROR_STYLE: Style = Style::new(Color::Red).bold();
}

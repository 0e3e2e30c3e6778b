// Modules
mod chance;
pub mod counting;
mod fun;
mod moderation;

// Uses
use poise::Command;

use self::{chance::*, counting::*, fun::*, moderation::*};
use crate::{Data, Error};

/// The list of commands supported by the bot.
pub fn commands() -> Vec<Command<Data, Error>> {
	vec![
		hi(),
		credits(),
		dice(),
		doubledice(),
		count(),
		countingsetup(),
		skipcount(),
		purge(),
		kick(),
		modpost(),
		cat(),
		pun(),
	]
}

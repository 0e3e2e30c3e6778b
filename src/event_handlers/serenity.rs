// Uses
use anyhow::Context;
use poise::serenity_prelude as serenity;

use super::greetings;
use crate::{
	commands::counting,
	config::Config,
	constants::{ERROR_STYLE, HEADER_STYLE, OKAY_STYLE},
	Data,
	Error,
};

/// Dispatch of inbound gateway events to their handlers.
pub async fn handle_event(
	ctx: &serenity::Context,
	event: &serenity::FullEvent,
	_framework: poise::FrameworkContext<'_, Data, Error>,
	data: &Data,
) -> Result<(), Error> {
	match event {
		serenity::FullEvent::GuildMemberAddition { new_member } => {
			greetings::member_joined(ctx, new_member, data.config.welcome_channel).await
		}
		serenity::FullEvent::GuildMemberRemoval { user, .. } => {
			greetings::member_left(ctx, user, data.config.goodbye_channel).await
		}
		serenity::FullEvent::Message { new_message } => {
			counting::handle_message(ctx, new_message, data).await
		}
		_ => Ok(()),
	}
}

/// Startup Function. Declares the command set to Discord and lists the
/// connected guilds.
pub async fn on_ready(
	ctx: &serenity::Context,
	ready: &serenity::Ready,
	framework: &poise::Framework<Data, Error>,
	config: &Config,
) -> Result<(), Error> {
	println!(
		"{}",
		OKAY_STYLE.paint(format!("{} is connected!", ready.user.name))
	);

	let commands = &framework.options().commands;
	match config.test_guild {
		Some(guild_id) => poise::builtins::register_in_guild(ctx, commands, guild_id)
			.await
			.with_context(|| format!("failed to register slash commands in guild {}", guild_id))?,
		None => poise::builtins::register_globally(ctx, commands)
			.await
			.with_context(|| "failed to register slash commands globally")?,
	}
	println!("{}", OKAY_STYLE.paint("Slash commands registered."));

	if ready.guilds.is_empty() {
		println!("{}", ERROR_STYLE.paint("No connected guilds."));
		return Ok(());
	}
	println!("{}", HEADER_STYLE.paint("Connected guilds:"));
	for guild in &ready.guilds {
		match guild.id.to_partial_guild(&ctx.http).await {
			Ok(guild_data) => println!("{} - {}", guild.id.get(), guild_data.name),
			Err(_) => println!("{}", guild.id.get()),
		}
	}

	Ok(())
}

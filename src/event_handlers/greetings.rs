// Uses
use anyhow::Context;
use poise::serenity_prelude::{self as serenity, Mentionable};

use crate::Error;

/// Welcome a new member in the given channel.
///
/// Which channel to use is the caller's decision; this only formats and sends
/// the one message.
pub async fn member_joined(
	ctx: &serenity::Context,
	member: &serenity::Member,
	channel: serenity::ChannelId,
) -> Result<(), Error> {
	channel
		.say(
			&ctx.http,
			format!(
				"Welcome to the server, {}! Say hi in the chat! UwU!",
				member.mention()
			),
		)
		.await
		.with_context(|| "failed to send the welcome message")?;
	Ok(())
}

/// Wave goodbye to a departed member in the given channel.
pub async fn member_left(
	ctx: &serenity::Context,
	user: &serenity::User,
	channel: serenity::ChannelId,
) -> Result<(), Error> {
	channel
		.say(
			&ctx.http,
			format!("Goodbye, {}. We'll miss you! 😢", user.name),
		)
		.await
		.with_context(|| "failed to send the goodbye message")?;
	Ok(())
}

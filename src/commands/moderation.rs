// Uses
use anyhow::Context;
use poise::serenity_prelude::{self as serenity, GetMessages, Mentionable, Permissions};

use crate::{
	constants::ERROR_STYLE,
	util::{reply, reply_ephemeral},
	Error,
	PoiseContext,
};

// Constants
const PURGE_MIN: i64 = 2;
const PURGE_MAX: i64 = 100;
const DEFAULT_KICK_REASON: &str = "No reason provided";

/// Whether `amount` is an acceptable number of messages to purge.
fn purge_amount_valid(amount: i64) -> bool {
	(PURGE_MIN..=PURGE_MAX).contains(&amount)
}

/// Whether a member's permission set includes `required`.
fn member_has_permission(member_permissions: Option<Permissions>, required: Permissions) -> bool {
	member_permissions.is_some_and(|permissions| permissions.contains(required))
}

/// Check the invoking member for `required`, sending an ephemeral denial if
/// they lack it. The caller must bail out without touching anything else when
/// this returns `false`.
async fn require_permission(
	ctx: PoiseContext<'_>,
	required: Permissions,
	name: &str,
) -> Result<bool, Error> {
	let member_permissions = ctx
		.author_member()
		.await
		.and_then(|member| member.permissions);
	if member_has_permission(member_permissions, required) {
		return Ok(true);
	}
	reply_ephemeral(
		ctx,
		format!("You need the {} permission to use this command.", name),
	)
	.await?;
	Ok(false)
}

// Commands

/// Delete a number of recent messages.
#[poise::command(slash_command, guild_only)]
pub async fn purge(
	ctx: PoiseContext<'_>,
	#[description = "Number of messages to delete (2-100)"] amount: i64,
) -> Result<(), Error> {
	if !require_permission(ctx, Permissions::MANAGE_MESSAGES, "Manage Messages").await? {
		return Ok(());
	}
	if !purge_amount_valid(amount) {
		reply_ephemeral(
			ctx,
			format!("Please enter a number between {} and {}.", PURGE_MIN, PURGE_MAX),
		)
		.await?;
		return Ok(());
	}

	// The fetch and bulk delete can take a moment
	ctx.defer_ephemeral().await?;

	let channel_id = ctx.channel_id();
	let deleted = match channel_id
		.messages(ctx.http(), GetMessages::new().limit(amount as u8))
		.await
	{
		Ok(messages) => {
			let message_ids = messages
				.iter()
				.map(|message| message.id)
				.collect::<Vec<_>>();
			let count = message_ids.len();
			channel_id
				.delete_messages(ctx.http(), message_ids)
				.await
				.map(|()| count)
		}
		Err(error) => Err(error),
	};

	match deleted {
		Ok(count) => {
			reply_ephemeral(ctx, format!("Deleted {} messages.", count)).await?;
		}
		Err(error) => {
			// Bulk deletes are rejected by Discord for messages over two weeks
			// old, among other things. One generic failure reply, no retry.
			eprintln!(
				"{}",
				ERROR_STYLE.paint(format!("Failed to purge messages: {}", error))
			);
			reply_ephemeral(
				ctx,
				"Failed to delete messages. Make sure I have permission and the messages are not \
				 older than 14 days.",
			)
			.await?;
		}
	}

	Ok(())
}

/// Kick a user from the server.
#[poise::command(slash_command, guild_only)]
pub async fn kick(
	ctx: PoiseContext<'_>,
	#[description = "The user to kick"] target: serenity::User,
	#[description = "Reason for kick"] reason: Option<String>,
) -> Result<(), Error> {
	if !require_permission(ctx, Permissions::KICK_MEMBERS, "Kick Members").await? {
		return Ok(());
	}

	let Some(guild_id) = ctx.guild_id() else {
		return Ok(());
	};
	let reason = reason.unwrap_or_else(|| DEFAULT_KICK_REASON.to_owned());

	let member = match guild_id.member(ctx.http(), target.id).await {
		Ok(member) => member,
		Err(_) => {
			reply_ephemeral(ctx, "User not found in this server.").await?;
			return Ok(());
		}
	};

	if let Err(error) = member.kick_with_reason(ctx.http(), &reason).await {
		eprintln!(
			"{}",
			ERROR_STYLE.paint(format!("Failed to kick {}: {}", target.tag(), error))
		);
		reply_ephemeral(ctx, "I cannot kick this user.").await?;
		return Ok(());
	}

	reply(ctx, format!("Kicked {}. Reason: {}", target.tag(), reason)).await?;
	Ok(())
}

/// Post a message as the bot in another channel.
#[poise::command(slash_command, guild_only)]
pub async fn modpost(
	ctx: PoiseContext<'_>,
	#[description = "The channel to post in"] channel: serenity::GuildChannel,
	#[description = "The message to post"] message: String,
) -> Result<(), Error> {
	if !require_permission(ctx, Permissions::MANAGE_MESSAGES, "Manage Messages").await? {
		return Ok(());
	}

	channel
		.id
		.say(ctx.http(), message)
		.await
		.with_context(|| format!("failed to post the message to {}", channel.id))?;
	reply_ephemeral(ctx, format!("Message sent to {}.", channel.mention())).await?;

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn purge_amounts_are_bounded() {
		assert!(!purge_amount_valid(1));
		assert!(purge_amount_valid(2));
		assert!(purge_amount_valid(50));
		assert!(purge_amount_valid(100));
		assert!(!purge_amount_valid(101));
		assert!(!purge_amount_valid(0));
		assert!(!purge_amount_valid(-5));
	}

	#[test]
	fn permission_gate_requires_the_exact_bit() {
		assert!(!member_has_permission(None, Permissions::KICK_MEMBERS));
		assert!(!member_has_permission(
			Some(Permissions::SEND_MESSAGES),
			Permissions::KICK_MEMBERS
		));
		assert!(member_has_permission(
			Some(Permissions::KICK_MEMBERS | Permissions::SEND_MESSAGES),
			Permissions::KICK_MEMBERS
		));
		assert!(member_has_permission(
			Some(Permissions::all()),
			Permissions::MANAGE_MESSAGES
		));
	}
}

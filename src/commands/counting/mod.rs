// Modules
mod game;

// Uses
use anyhow::Context;
use poise::serenity_prelude::{self as serenity, Mentionable};

pub use self::game::CountingGame;
use self::game::Outcome;
use crate::{
	util::{reply, reply_plain},
	Data,
	Error,
	PoiseContext,
};

// Constants
const ACCEPT_REACTION: char = '✅';

// Commands

/// Count from 1 to your number!
#[poise::command(slash_command)]
pub async fn count(
	ctx: PoiseContext<'_>,
	#[description = "The number to count to"] number: i64,
) -> Result<(), Error> {
	if number <= 0 {
		reply(ctx, "Please enter a number greater than 0.").await?;
		return Ok(());
	}

	reply_plain(ctx, "Counting:").await?;
	// Each follow-up is awaited before the next is issued, so the sequence
	// arrives in order
	for line in count_lines(number) {
		reply_plain(ctx, line).await?;
	}

	Ok(())
}

/// Setup counting game in this channel.
#[poise::command(slash_command, guild_only)]
pub async fn countingsetup(ctx: PoiseContext<'_>) -> Result<(), Error> {
	ctx.data().counting.lock().unwrap().arm(ctx.channel_id());
	reply(ctx, "Counting game started! The next number is 1.").await?;
	Ok(())
}

/// Skip the counting to a specific number.
#[poise::command(slash_command, guild_only)]
pub async fn skipcount(
	ctx: PoiseContext<'_>,
	#[description = "The number to skip the count to"] number: i64,
) -> Result<(), Error> {
	if number < 1 {
		reply(ctx, "Please provide a number greater than 0.").await?;
		return Ok(());
	}

	let skipped = {
		let mut game = ctx.data().counting.lock().unwrap();
		if game.channel() == Some(ctx.channel_id()) {
			game.skip_to(number as u64);
			true
		} else {
			false
		}
	};

	if skipped {
		reply(
			ctx,
			format!(
				"Counting has been skipped to {}. The next number is {}!",
				number,
				number + 1
			),
		)
		.await?;
	} else {
		reply(
			ctx,
			"Counting is not set up in this channel. Use /countingsetup to set it up.",
		)
		.await?;
	}

	Ok(())
}

// Message Handling

/// Feed an inbound chat message to the counting game and act on the outcome.
pub async fn handle_message(
	ctx: &serenity::Context,
	message: &serenity::Message,
	data: &Data,
) -> Result<(), Error> {
	// The lock is never held across an await
	let outcome = {
		let mut game = data.counting.lock().unwrap();
		game.observe(
			message.channel_id,
			message.author.id,
			message.author.bot,
			&message.content,
		)
	};

	match outcome {
		Some(Outcome::Accepted(_)) => {
			message
				.react(&ctx.http, ACCEPT_REACTION)
				.await
				.with_context(|| "failed to react to the counting message")?;
		}
		Some(Outcome::Broken { at }) => {
			message
				.channel_id
				.say(
					&ctx.http,
					format!(
						"❌ {} ruined the count at {}. The next number is 1.",
						message.author.mention(),
						at
					),
				)
				.await
				.with_context(|| "failed to announce the broken count")?;
		}
		None => {}
	}

	Ok(())
}

/// The follow-up messages for a count to `n`, in send order.
fn count_lines(n: i64) -> impl Iterator<Item = String> {
	(1..=n).map(|i| i.to_string())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn count_lines_are_sequential() {
		let lines = count_lines(5).collect::<Vec<_>>();
		assert_eq!(lines, ["1", "2", "3", "4", "5"]);
	}

	#[test]
	fn count_lines_for_one() {
		assert_eq!(count_lines(1).collect::<Vec<_>>(), ["1"]);
	}

	#[test]
	fn no_lines_below_one() {
		assert_eq!(count_lines(0).count(), 0);
		assert_eq!(count_lines(-3).count(), 0);
	}
}

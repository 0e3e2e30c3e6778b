// Uses
use anyhow::Context;
use poise::{serenity_prelude::CreateEmbed, CreateReply};

use crate::{constants::MAIN_COLOUR, PoiseContext};

/// Reply to the command with an embed containing the message.
pub async fn reply<S: Into<String>>(ctx: PoiseContext<'_>, msg: S) -> Result<(), anyhow::Error> {
	ctx.send(CreateReply::default().embed(CreateEmbed::new().colour(MAIN_COLOUR).description(msg)))
		.await
		.map(|_| ())
		.with_context(|| "failed to send the reply")
}

/// Reply to the command with plain message content. Gif and image links only
/// get their media previews when sent this way, not in an embed.
pub async fn reply_plain<S: Into<String>>(
	ctx: PoiseContext<'_>,
	msg: S,
) -> Result<(), anyhow::Error> {
	ctx.send(CreateReply::default().content(msg))
		.await
		.map(|_| ())
		.with_context(|| "failed to send the reply")
}

/// Reply with a message that only the invoking user can see.
pub async fn reply_ephemeral<S: Into<String>>(
	ctx: PoiseContext<'_>,
	msg: S,
) -> Result<(), anyhow::Error> {
	ctx.send(CreateReply::default().content(msg).ephemeral(true))
		.await
		.map(|_| ())
		.with_context(|| "failed to send the reply")
}

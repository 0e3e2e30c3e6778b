// Uses
use rand::{thread_rng, Rng};

use crate::{
	util::{reply, reply_plain},
	Error,
	PoiseContext,
};

// Constants
const CREDITS_TEXT: &str = "Follow @alexandrospanag on GitHub!";
const CAT_GIFS: [&str; 5] = [
	"https://media.giphy.com/media/JIX9t2j0ZTN9S/giphy.gif",
	"https://media.giphy.com/media/mlvseq9yvZhba/giphy.gif",
	"https://media.giphy.com/media/13borq7Zo2kulO/giphy.gif",
	"https://media.giphy.com/media/v6aOjy0Qo1fIA/giphy.gif",
	"https://media.giphy.com/media/3oriO0OEd9QIDdllqo/giphy.gif",
];
const PUNS: [&str; 10] = [
	"I'm reading a book on anti-gravity. It's impossible to put down!",
	"Did you hear about the mathematician who's afraid of negative numbers? He'll stop at nothing \
	 to avoid them.",
	"Why don't skeletons fight each other? They don't have the guts.",
	"I would tell you a joke about construction, but I'm still working on it.",
	"Why did the scarecrow win an award? Because he was outstanding in his field!",
	"I used to play piano by ear, but now I use my hands.",
	"What do you call fake spaghetti? An impasta!",
	"Why did the bicycle fall over? Because it was two-tired!",
	"I'm on a seafood diet. I see food and I eat it.",
	"Why can't you hear a pterodactyl go to the bathroom? Because the 'P' is silent.",
];

// Commands

/// Say hi to the bot!
#[poise::command(slash_command)]
pub async fn hi(ctx: PoiseContext<'_>) -> Result<(), Error> {
	reply(ctx, format!("Hi, {}! UwU!", ctx.author().name)).await?;
	Ok(())
}

/// Show the bot credits!
#[poise::command(slash_command)]
pub async fn credits(ctx: PoiseContext<'_>) -> Result<(), Error> {
	reply(ctx, CREDITS_TEXT).await?;
	Ok(())
}

/// Send a random cat gif!
#[poise::command(slash_command)]
pub async fn cat(ctx: PoiseContext<'_>) -> Result<(), Error> {
	// Sent plain so Discord renders the gif
	let gif = CAT_GIFS[thread_rng().gen_range(0..CAT_GIFS.len())];
	reply_plain(ctx, gif).await?;
	Ok(())
}

/// Send a random pun!
#[poise::command(slash_command)]
pub async fn pun(ctx: PoiseContext<'_>) -> Result<(), Error> {
	let pun = PUNS[thread_rng().gen_range(0..PUNS.len())];
	reply(ctx, pun).await?;
	Ok(())
}

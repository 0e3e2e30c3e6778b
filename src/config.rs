// Uses
use std::env;

use anyhow::{Context, Result};
use poise::serenity_prelude::{ChannelId, GuildId};

// Constants
const TOKEN_VAR: &str = "DISCORD_TOKEN";
const WELCOME_CHANNEL_VAR: &str = "WELCOME_CHANNEL_ID";
const GOODBYE_CHANNEL_VAR: &str = "GOODBYE_CHANNEL_ID";
const TEST_GUILD_VAR: &str = "TEST_GUILD_ID";

/// Bot configuration, loaded from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
	/// The Discord bot token. An invalid token fails startup when the gateway
	/// rejects the login.
	pub token: String,
	/// The channel that new members are welcomed in.
	pub welcome_channel: ChannelId,
	/// The channel that departed members are farewelled in.
	pub goodbye_channel: ChannelId,
	/// When set, slash commands are registered in this guild only, which
	/// updates instantly. Otherwise they are registered globally, which can
	/// take up to an hour to roll out.
	pub test_guild: Option<GuildId>,
}

impl Config {
	/// Load the configuration from the process environment.
	pub fn from_env() -> Result<Self> {
		Ok(Self {
			token: env::var(TOKEN_VAR)
				.with_context(|| format!("missing environment variable {}", TOKEN_VAR))?,
			welcome_channel: ChannelId::new(id_var(WELCOME_CHANNEL_VAR)?),
			goodbye_channel: ChannelId::new(id_var(GOODBYE_CHANNEL_VAR)?),
			test_guild: match env::var(TEST_GUILD_VAR) {
				Ok(value) => Some(GuildId::new(value.parse().with_context(|| {
					format!("environment variable {} is not a valid id", TEST_GUILD_VAR)
				})?)),
				Err(_) => None,
			},
		})
	}
}

/// Read an environment variable holding a Discord snowflake id.
fn id_var(name: &str) -> Result<u64> {
	env::var(name)
		.with_context(|| format!("missing environment variable {}", name))?
		.parse()
		.with_context(|| format!("environment variable {} is not a valid id", name))
}

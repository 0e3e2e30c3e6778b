// Modules
mod commands;
mod config;
mod constants;
mod event_handlers;
mod util;

// Uses
use std::sync::Mutex;

use anyhow::Context;
use poise::serenity_prelude as serenity;

use crate::{
	commands::counting::CountingGame,
	config::Config,
	constants::{ERROR_STYLE, HEADER_STYLE, PROGRAM_VERSION},
	event_handlers::{handle_event, on_ready},
};

// Types
pub type Error = anyhow::Error;
pub type PoiseContext<'a> = poise::Context<'a, Data, Error>;

/// Data shared by all command invocations and event handlers.
pub struct Data {
	pub config: Config,
	pub counting: Mutex<CountingGame>,
}

// Entry Point
#[tokio::main]
async fn main() -> Result<(), Error> {
	// Load the `.env` file if one is present
	dotenv::dotenv().ok();

	let config = Config::from_env()?;

	println!(
		"{}",
		HEADER_STYLE.paint(format!("Welcomechan v{}", PROGRAM_VERSION))
	);

	let token = config.token.clone();
	let intents = serenity::GatewayIntents::non_privileged()
		| serenity::GatewayIntents::GUILD_MEMBERS
		| serenity::GatewayIntents::MESSAGE_CONTENT;

	let framework = poise::Framework::builder()
		.options(poise::FrameworkOptions {
			commands: commands::commands(),
			event_handler: |ctx, event, framework, data| {
				Box::pin(handle_event(ctx, event, framework, data))
			},
			on_error: |error| Box::pin(on_error(error)),
			..Default::default()
		})
		.setup(move |ctx, ready, framework| {
			Box::pin(async move {
				on_ready(ctx, ready, framework, &config).await?;
				Ok(Data {
					config,
					counting: Mutex::new(CountingGame::default()),
				})
			})
		})
		.build();

	let mut client = serenity::ClientBuilder::new(token, intents)
		.framework(framework)
		.await
		.with_context(|| "failed to build the Discord client")?;

	client
		.start()
		.await
		.with_context(|| "failed to start the Discord client")?;

	Ok(())
}

/// Top-level error handler. Every error is terminal for the single event that
/// raised it and never brings down the process.
async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
	match error {
		poise::FrameworkError::Command { error, ctx, .. } => {
			eprintln!(
				"{}",
				ERROR_STYLE.paint(format!(
					"Error in command `{}`: {:?}",
					ctx.command().qualified_name,
					error
				))
			);
		}
		poise::FrameworkError::EventHandler { error, event, .. } => {
			eprintln!(
				"{}",
				ERROR_STYLE.paint(format!(
					"Error handling `{}` event: {:?}",
					event.snake_case_name(),
					error
				))
			);
		}
		error => {
			if let Err(e) = poise::builtins::on_error(error).await {
				eprintln!(
					"{}",
					ERROR_STYLE.paint(format!("Error while handling an error: {:?}", e))
				);
			}
		}
	}
}

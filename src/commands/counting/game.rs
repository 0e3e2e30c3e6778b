// Uses
use poise::serenity_prelude::{ChannelId, UserId};

/// State of the counting game. One session per process, armed in at most one
/// channel at a time.
#[derive(Debug, Default)]
pub struct CountingGame {
	channel: Option<ChannelId>,
	count: u64,
	last_contributor: Option<UserId>,
}

/// What a message in the armed channel did to the game.
#[derive(Debug, Eq, PartialEq)]
pub enum Outcome {
	/// The message carried the expected number; the value is the new count.
	Accepted(u64),
	/// The message broke the run at `at`. The channel stays armed and the
	/// count restarts from zero.
	Broken { at: u64 },
}

impl CountingGame {
	/// Arm the game in `channel`, restarting the count from zero.
	pub fn arm(&mut self, channel: ChannelId) {
		self.channel = Some(channel);
		self.count = 0;
		self.last_contributor = None;
	}

	/// The channel the game is armed in, if any.
	pub fn channel(&self) -> Option<ChannelId> {
		self.channel
	}

	/// The last confirmed count.
	pub fn count(&self) -> u64 {
		self.count
	}

	/// Jump the count to `n`, clearing the last contributor so that anyone may
	/// continue with `n + 1`.
	pub fn skip_to(&mut self, n: u64) {
		self.count = n;
		self.last_contributor = None;
	}

	/// Feed one chat message through the state machine.
	///
	/// Returns `None` when the message is not part of the game (game inactive,
	/// different channel, or a bot author); nothing changes in that case.
	///
	/// A message is accepted when its trimmed text is exactly the next number
	/// and its author is not the previous contributor. The two-contributor
	/// rule holds even when the number is correct; it is what keeps one player
	/// from running the count alone.
	pub fn observe(
		&mut self,
		channel: ChannelId,
		author: UserId,
		author_is_bot: bool,
		text: &str,
	) -> Option<Outcome> {
		let active = self.channel?;
		if channel != active || author_is_bot {
			return None;
		}

		let expected = self.count + 1;
		if text.trim() == expected.to_string() && Some(author) != self.last_contributor {
			self.count = expected;
			self.last_contributor = Some(author);
			Some(Outcome::Accepted(expected))
		} else {
			let at = self.count;
			self.count = 0;
			self.last_contributor = None;
			Some(Outcome::Broken { at })
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const GAME_CHANNEL: ChannelId = ChannelId::new(100);
	const OTHER_CHANNEL: ChannelId = ChannelId::new(200);
	const USER_1: UserId = UserId::new(1);
	const USER_2: UserId = UserId::new(2);

	/// A game armed in `GAME_CHANNEL` at count 5, last contributed by `USER_1`.
	fn mid_game() -> CountingGame {
		let mut game = CountingGame::default();
		game.arm(GAME_CHANNEL);
		assert_eq!(
			game.observe(GAME_CHANNEL, USER_1, false, "1"),
			Some(Outcome::Accepted(1))
		);
		assert_eq!(
			game.observe(GAME_CHANNEL, USER_2, false, "2"),
			Some(Outcome::Accepted(2))
		);
		assert_eq!(
			game.observe(GAME_CHANNEL, USER_1, false, "3"),
			Some(Outcome::Accepted(3))
		);
		assert_eq!(
			game.observe(GAME_CHANNEL, USER_2, false, "4"),
			Some(Outcome::Accepted(4))
		);
		assert_eq!(
			game.observe(GAME_CHANNEL, USER_1, false, "5"),
			Some(Outcome::Accepted(5))
		);
		game
	}

	#[test]
	fn arming_resets_everything() {
		let mut game = mid_game();
		game.arm(OTHER_CHANNEL);
		assert_eq!(game.channel(), Some(OTHER_CHANNEL));
		assert_eq!(game.count(), 0);
		assert_eq!(
			game.observe(OTHER_CHANNEL, USER_1, false, "1"),
			Some(Outcome::Accepted(1))
		);
	}

	#[test]
	fn correct_number_from_a_new_contributor_is_accepted() {
		let mut game = mid_game();
		assert_eq!(
			game.observe(GAME_CHANNEL, USER_2, false, "6"),
			Some(Outcome::Accepted(6))
		);
		assert_eq!(game.count(), 6);
	}

	#[test]
	fn surrounding_whitespace_is_ignored() {
		let mut game = mid_game();
		assert_eq!(
			game.observe(GAME_CHANNEL, USER_2, false, "  6 "),
			Some(Outcome::Accepted(6))
		);
	}

	#[test]
	fn same_contributor_twice_breaks_the_run_even_when_correct() {
		let mut game = mid_game();
		assert_eq!(
			game.observe(GAME_CHANNEL, USER_1, false, "6"),
			Some(Outcome::Broken { at: 5 })
		);
		// The channel stays armed for a fresh start at 1
		assert_eq!(game.channel(), Some(GAME_CHANNEL));
		assert_eq!(game.count(), 0);
		assert_eq!(
			game.observe(GAME_CHANNEL, USER_1, false, "1"),
			Some(Outcome::Accepted(1))
		);
	}

	#[test]
	fn wrong_number_breaks_the_run() {
		let mut game = mid_game();
		assert_eq!(
			game.observe(GAME_CHANNEL, USER_2, false, "7"),
			Some(Outcome::Broken { at: 5 })
		);
		assert_eq!(game.count(), 0);
	}

	#[test]
	fn chatter_breaks_the_run_too() {
		let mut game = mid_game();
		assert_eq!(
			game.observe(GAME_CHANNEL, USER_2, false, "six"),
			Some(Outcome::Broken { at: 5 })
		);
	}

	#[test]
	fn other_channels_are_ignored() {
		let mut game = mid_game();
		assert_eq!(game.observe(OTHER_CHANNEL, USER_2, false, "6"), None);
		assert_eq!(game.observe(OTHER_CHANNEL, USER_2, false, "anything"), None);
		assert_eq!(game.count(), 5);
	}

	#[test]
	fn bots_are_ignored() {
		let mut game = mid_game();
		assert_eq!(game.observe(GAME_CHANNEL, USER_2, true, "6"), None);
		assert_eq!(game.count(), 5);
	}

	#[test]
	fn inactive_game_ignores_everything() {
		let mut game = CountingGame::default();
		assert_eq!(game.observe(GAME_CHANNEL, USER_1, false, "1"), None);
		assert_eq!(game.count(), 0);
		assert_eq!(game.channel(), None);
	}

	#[test]
	fn skipping_clears_the_contributor() {
		let mut game = mid_game();
		game.skip_to(20);
		assert_eq!(game.count(), 20);
		// The previous contributor may continue after a skip
		assert_eq!(
			game.observe(GAME_CHANNEL, USER_1, false, "21"),
			Some(Outcome::Accepted(21))
		);
	}
}

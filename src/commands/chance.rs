// Uses
use rand::{distributions::Uniform, thread_rng, Rng};

use crate::{util::reply, Error, PoiseContext};

// Constants
const DIE_SIDES: u32 = 6;

/// Roll one six-sided die.
fn roll_die() -> u32 {
	thread_rng().sample(Uniform::new_inclusive(1, DIE_SIDES))
}

// Commands

/// Roll a dice (1-6)!
#[poise::command(slash_command)]
pub async fn dice(ctx: PoiseContext<'_>) -> Result<(), Error> {
	reply(ctx, format!("You rolled a: {}", roll_die())).await?;
	Ok(())
}

/// Roll two dice (1-6 each)!
#[poise::command(slash_command, rename = "2dice")]
pub async fn doubledice(ctx: PoiseContext<'_>) -> Result<(), Error> {
	reply(ctx, format!("You rolled: {} and {}", roll_die(), roll_die())).await?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn die_rolls_stay_in_range_and_look_uniform() {
		const ROLLS: usize = 10_000;

		let mut counts = [0_usize; DIE_SIDES as usize];
		for _ in 0..ROLLS {
			let roll = roll_die();
			assert!((1..=DIE_SIDES).contains(&roll), "roll out of range: {}", roll);
			counts[(roll - 1) as usize] += 1;
		}

		// Loose chi-square sanity bound, not an exact uniformity requirement.
		// 30.0 is far beyond the 99.9th percentile for 5 degrees of freedom.
		let expected = ROLLS as f64 / f64::from(DIE_SIDES);
		let chi_square = counts
			.iter()
			.map(|&observed| {
				let diff = observed as f64 - expected;
				diff * diff / expected
			})
			.sum::<f64>();
		assert!(
			chi_square < 30.0,
			"suspiciously non-uniform roll counts: {:?}",
			counts
		);
	}
}

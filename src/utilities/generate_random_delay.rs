use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::time::Duration;

/// Picks the pause before the next page fetch, anywhere in `min_delay..=max_delay` milliseconds.
/// A reversed or empty range yields `min_delay`.
pub fn generate_random_delay(min_delay: u64, max_delay: u64) -> Duration {
    if max_delay <= min_delay {
        return Duration::from_millis(min_delay);
    }

    let mut rng = StdRng::from_entropy();
    Duration::from_millis(rng.gen_range(min_delay..=max_delay))
}

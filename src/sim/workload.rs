use rand::Rng;

use crate::core::{Pid, Process, SimError, MAX_PROCESSES};

/// Draws `n` synthetic processes: arrival in [0, 10), burst in [5, 15),
/// priority in [0, 10). The RNG is caller-supplied so workloads are
/// reproducible from a seed.
pub fn random(n: usize, rng: &mut impl Rng) -> Result<Vec<Process>, SimError> {
    if n > MAX_PROCESSES {
        return Err(SimError::ProcessCapacity {
            requested: n,
            max: MAX_PROCESSES,
        });
    }

    Ok((0..n)
        .map(|i| {
            Process::new(
                i as Pid + 1,
                rng.random_range(0..10),
                rng.random_range(5..15),
                rng.random_range(0..10),
            )
        })
        .collect())
}

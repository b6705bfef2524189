use glam::Vec2;

use crate::gravity::Gravity;

/// A brute-force [`ComputeMethod`](super::ComputeMethod) using the CPU with [rayon](https://github.com/rayon-rs/rayon).
///
/// Each worker sums the acceleration of its own bodies from the shared, read-only snapshot.
/// Collecting the results is the barrier: nothing is written back until every body is done.
#[derive(Clone, Copy, Debug, Default)]
pub struct BruteForce;

impl super::ComputeMethod for BruteForce {
    #[inline]
    fn compute(&mut self, point_masses: &[(Vec2, f32)], gravity: &Gravity) -> Vec<Vec2> {
        use rayon::iter::{IntoParallelIterator, ParallelIterator};

        (0..point_masses.len())
            .into_par_iter()
            .map(|index| gravity.acceleration_at(index, point_masses))
            .collect()
    }
}

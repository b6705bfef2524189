use glam::Vec2;

use crate::gravity::Gravity;

/// A brute-force [`ComputeMethod`](super::ComputeMethod) using the CPU.
///
/// Every body is paired with every other body, `O(n²)` per step.
#[derive(Clone, Copy, Debug, Default)]
pub struct BruteForce;

impl super::ComputeMethod for BruteForce {
    #[inline]
    fn compute(&mut self, point_masses: &[(Vec2, f32)], gravity: &Gravity) -> Vec<Vec2> {
        (0..point_masses.len())
            .map(|index| gravity.acceleration_at(index, point_masses))
            .collect()
    }
}

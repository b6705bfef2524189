use glam::Vec2;

use crate::{body::PointMass, config::SimulationConfig, vector::safe_normal};

/// Softened inverse-square attraction between point masses.
///
/// The pairwise distance is floored at `minimum_distance` before it enters the force law, so two
/// bodies closing in on each other never produce an unbounded acceleration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gravity {
    /// Gravitational constant.
    pub force: f32,
    /// Softening floor applied to pairwise distances.
    pub minimum_distance: f32,
}

impl Gravity {
    /// Creates a force law from its constant and softening floor.
    #[inline]
    pub const fn new(force: f32, minimum_distance: f32) -> Self {
        Self {
            force,
            minimum_distance,
        }
    }

    /// Force law described by a configuration.
    #[inline]
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.gravity_force, config.minimum_gravity_distance)
    }

    /// Acceleration `affecting` exerts on `affected`.
    ///
    /// Coincident positions have no direction and yield zero.
    ///
    /// ```
    /// # use swarmfield::gravity::Gravity;
    /// # use glam::Vec2;
    /// let gravity = Gravity::new(1000.0, 10.0);
    /// let body: (Vec2, f32) = (Vec2::ZERO, 100.0);
    /// let other: (Vec2, f32) = (Vec2::new(100.0, 0.0), 100.0);
    ///
    /// let acceleration = gravity.acceleration_between(&body, &other);
    ///
    /// assert!((acceleration - Vec2::new(10.0, 0.0)).length() < 1e-4);
    /// ```
    #[inline]
    pub fn acceleration_between<A, B>(&self, affected: &A, affecting: &B) -> Vec2
    where
        A: PointMass + ?Sized,
        B: PointMass + ?Sized,
    {
        let dir = affecting.position() - affected.position();
        let normal = safe_normal(dir);

        if normal == Vec2::ZERO {
            return Vec2::ZERO;
        }

        let distance = dir.length().max(self.minimum_distance);

        affecting.mass() / (distance * distance) * self.force * normal
    }

    /// Sum of the accelerations every other entry of `point_masses` exerts on the one at `index`.
    ///
    /// Entries are matched by slot, so the body never attracts itself even when another body
    /// shares its position.
    #[inline]
    pub fn acceleration_at<P: PointMass>(&self, index: usize, point_masses: &[P]) -> Vec2 {
        let affected = &point_masses[index];

        point_masses
            .iter()
            .enumerate()
            .filter(|&(other, _)| other != index)
            .fold(Vec2::ZERO, |acceleration, (_, affecting)| {
                acceleration + self.acceleration_between(affected, affecting)
            })
    }
}

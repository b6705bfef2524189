#[cfg(feature = "parallel")]
/// Compute methods that use multiple CPU threads.
pub mod parallel;

/// Compute methods that use one CPU thread.
pub mod sequential;

use glam::Vec2;

use crate::gravity::Gravity;

/// Trait for algorithms computing the gravitational acceleration of every body in a snapshot.
///
/// The snapshot holds the position and mass of each body as they were at the start of the step.
/// The returned vector holds one acceleration per entry, in the same order. Implementations only
/// read the snapshot, so velocities can be updated from the result without disturbing the
/// computation of other bodies.
///
/// # Example
///
/// ```
/// # use swarmfield::prelude::*;
/// # use glam::Vec2;
/// struct NoGravity;
///
/// impl ComputeMethod for NoGravity {
///     fn compute(&mut self, point_masses: &[(Vec2, f32)], _: &Gravity) -> Vec<Vec2> {
///         vec![Vec2::ZERO; point_masses.len()]
///     }
/// }
/// ```
pub trait ComputeMethod {
    /// Computes the acceleration the other entries exert on each entry of `point_masses`.
    fn compute(&mut self, point_masses: &[(Vec2, f32)], gravity: &Gravity) -> Vec<Vec2>;
}

impl<C: ComputeMethod + ?Sized> ComputeMethod for &mut C {
    #[inline]
    fn compute(&mut self, point_masses: &[(Vec2, f32)], gravity: &Gravity) -> Vec<Vec2> {
        (**self).compute(point_masses, gravity)
    }
}

impl<C: ComputeMethod + ?Sized> ComputeMethod for Box<C> {
    #[inline]
    fn compute(&mut self, point_masses: &[(Vec2, f32)], gravity: &Gravity) -> Vec<Vec2> {
        (**self).compute(point_masses, gravity)
    }
}

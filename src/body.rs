use glam::{Vec2, Vec3};

use crate::vector::to_3d;

/// Position and mass of an object taking part in the gravity pass.
///
/// Implemented for [`Body`] and for tuples of a position and a mass so hand-built snapshots can
/// be fed to a [`ComputeMethod`](crate::compute_method::ComputeMethod) directly.
///
/// ```
/// # use swarmfield::prelude::*;
/// # use glam::Vec2;
/// let point_mass: (Vec2, f32) = (Vec2::new(1.0, 2.0), 5.0);
///
/// assert_eq!(point_mass.position(), Vec2::new(1.0, 2.0));
/// assert_eq!(point_mass.mass(), 5.0);
/// ```
pub trait PointMass {
    /// Position in world space.
    fn position(&self) -> Vec2;

    /// Mass of the object.
    fn mass(&self) -> f32;

    /// Both values as a tuple.
    #[inline]
    fn point_mass(&self) -> (Vec2, f32) {
        (self.position(), self.mass())
    }
}

impl PointMass for (Vec2, f32) {
    #[inline]
    fn position(&self) -> Vec2 {
        self.0
    }

    #[inline]
    fn mass(&self) -> f32 {
        self.1
    }
}

impl<P: PointMass> PointMass for &P {
    #[inline]
    fn position(&self) -> Vec2 {
        (**self).position()
    }

    #[inline]
    fn mass(&self) -> f32 {
        (**self).mass()
    }
}

/// A simulated point mass.
///
/// Bodies are created once and mutated in place every step. `index` is the slot the body
/// occupies in its [`BodyStore`](crate::body_store::BodyStore) and never changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    /// Position in world space.
    pub position: Vec2,
    /// Velocity in world units per second.
    pub velocity: Vec2,
    /// Mass, always greater than zero.
    pub mass: f32,
    /// Stable slot index.
    pub index: usize,
}

impl Body {
    /// Creates a body for the given slot.
    #[inline]
    pub fn new(index: usize, position: Vec2, velocity: Vec2, mass: f32) -> Self {
        Self {
            position,
            velocity,
            mass,
            index,
        }
    }
}

impl PointMass for Body {
    #[inline]
    fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    fn mass(&self) -> f32 {
        self.mass
    }
}

/// Where and how large a body is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Body position on the `z = 0` plane.
    pub translation: Vec3,
    /// Uniform scale, `sqrt(mass) * body_size`.
    pub scale: f32,
}

impl Placement {
    /// Placement of `body` drawn with the given size factor.
    #[inline]
    pub fn of(body: &Body, body_size: f32) -> Self {
        Self {
            translation: to_3d(body.position),
            scale: body.mass.sqrt() * body_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_point_mass() {
        let body = Body::new(3, Vec2::new(1.0, -1.0), Vec2::ONE, 4.0);

        assert_eq!(body.point_mass(), (Vec2::new(1.0, -1.0), 4.0));
        assert_eq!((&body).mass(), 4.0);
    }

    #[test]
    fn placement_scales_with_square_root_of_mass() {
        let body = Body::new(0, Vec2::new(5.0, 6.0), Vec2::ZERO, 64.0);
        let placement = Placement::of(&body, 0.5);

        assert_eq!(placement.translation, Vec3::new(5.0, 6.0, 0.0));
        assert_eq!(placement.scale, 4.0);
    }
}

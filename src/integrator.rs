//! The three passes of a simulation step.
//!
//! A step runs them strictly in order: [`apply_gravity`] updates velocities from a snapshot of the
//! positions, [`apply_repel`] adds the repel impulse, and [`advance`] moves and wraps the bodies.
//! Only the last pass writes positions.

use glam::Vec3;

use crate::{
    body::Body, bounds::Bounds, compute_method::ComputeMethod, gravity::Gravity, repel::RepelState,
    vector::to_3d,
};

/// Adds `acceleration * dt` to every body's velocity.
///
/// Accelerations are computed by `cm` from the positions as they are when the pass begins.
pub fn apply_gravity<C>(bodies: &mut [Body], cm: &mut C, gravity: &Gravity, dt: f32)
where
    C: ComputeMethod + ?Sized,
{
    let point_masses: Vec<_> = bodies.iter().map(|body| (body.position, body.mass)).collect();
    let accelerations = cm.compute(&point_masses, gravity);

    for (body, acceleration) in bodies.iter_mut().zip(accelerations) {
        body.velocity += acceleration * dt;
    }
}

/// Adds the repel impulse to every body's velocity. Does nothing while the field is inactive.
#[inline]
pub fn apply_repel(bodies: &mut [Body], repel: &RepelState) {
    repel.apply(bodies);
}

/// Moves every body by `velocity * dt`, wraps it into `bounds` and records its 3-D position in
/// `translations`, which is indexed by body slot.
pub fn advance(bodies: &mut [Body], translations: &mut [Vec3], dt: f32, bounds: &Bounds) {
    for (body, translation) in bodies.iter_mut().zip(translations.iter_mut()) {
        body.position += body.velocity * dt;
        bounds.wrap(&mut body.position);

        *translation = to_3d(body.position);
    }
}

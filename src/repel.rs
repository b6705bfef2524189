use glam::Vec2;

use crate::{body::Body, config::RepelConfig, vector::safe_normal};

/// Impulse a body one world unit away from the centre receives per step, before the multiplier.
pub const BASE_REPEL_FORCE: f32 = 1000.0;

/// A time-limited radial field pushing bodies away from a selected point.
///
/// Expiry is tracked as a timestamp on the simulation clock instead of a scheduled callback: the
/// owner calls [`RepelState::expire`] with the current time before each repel pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RepelState {
    /// Whether the field currently pushes bodies.
    pub active: bool,
    /// Centre of the field in world space.
    pub center: Vec2,
    /// Scale applied to the base impulse.
    pub force_multiplier: f32,
    /// Lifetime, in seconds, of a triggered field.
    pub duration: f32,
    /// Clock time at which the current field switches off.
    pub expires_at: f64,
}

impl Default for RepelState {
    fn default() -> Self {
        Self::from_config(&RepelConfig::default())
    }
}

impl RepelState {
    /// Inactive field carrying the configured tunables.
    #[inline]
    pub fn from_config(config: &RepelConfig) -> Self {
        Self {
            active: false,
            center: Vec2::ZERO,
            force_multiplier: config.force_multiplier,
            duration: config.duration,
            expires_at: 0.0,
        }
    }

    /// Activates the field at `center`.
    ///
    /// A new trigger replaces the previous centre and restarts the lifetime.
    ///
    /// ```
    /// # use swarmfield::repel::RepelState;
    /// # use glam::Vec2;
    /// let mut repel = RepelState::default();
    /// repel.trigger(Vec2::new(10.0, 0.0), 1.0);
    /// repel.trigger(Vec2::new(-5.0, 2.0), 3.0);
    ///
    /// assert!(repel.active);
    /// assert_eq!(repel.center, Vec2::new(-5.0, 2.0));
    /// assert_eq!(repel.expires_at, 3.0 + repel.duration as f64);
    /// ```
    #[inline]
    pub fn trigger(&mut self, center: Vec2, now: f64) {
        self.center = center;
        self.active = true;
        self.expires_at = now + f64::from(self.duration);
    }

    /// Deactivates the field once `now` reaches its expiry time. Returns whether it just expired.
    #[inline]
    pub fn expire(&mut self, now: f64) -> bool {
        if self.active && now >= self.expires_at {
            self.active = false;
            return true;
        }

        false
    }

    /// Deactivates the field immediately.
    #[inline]
    pub fn cancel(&mut self) {
        self.active = false;
    }

    /// Time left before the field switches off, zero when inactive.
    #[inline]
    pub fn remaining(&self, now: f64) -> f64 {
        if self.active {
            (self.expires_at - now).max(0.0)
        } else {
            0.0
        }
    }

    /// Velocity change the field imparts on a body at `position` in one step.
    ///
    /// The impulse falls off with the inverse of the distance, floored at one world unit. It is
    /// not scaled by the step duration.
    #[inline]
    pub fn force_at(&self, position: Vec2) -> Vec2 {
        if !self.active {
            return Vec2::ZERO;
        }

        let offset = position - self.center;
        let magnitude = BASE_REPEL_FORCE / offset.length().max(1.0) * self.force_multiplier;

        safe_normal(offset) * magnitude
    }

    /// Adds the field's impulse to every body's velocity. Does nothing while inactive.
    pub fn apply(&self, bodies: &mut [Body]) {
        if !self.active {
            return;
        }

        for body in bodies.iter_mut() {
            body.velocity += self.force_at(body.position);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1E-4;

    fn bodies() -> Vec<Body> {
        vec![
            Body::new(0, Vec2::new(10.0, 0.0), Vec2::new(1.0, 2.0), 5.0),
            Body::new(1, Vec2::new(0.0, -500.0), Vec2::ZERO, 50.0),
            Body::new(2, Vec2::ZERO, Vec2::new(-3.0, 0.0), 20.0),
        ]
    }

    #[test]
    fn inactive_field_is_noop() {
        let repel = RepelState {
            center: Vec2::new(3.0, 3.0),
            force_multiplier: 100.0,
            ..Default::default()
        };
        let mut moved = bodies();

        repel.apply(&mut moved);

        assert_eq!(moved, bodies());
    }

    #[test]
    fn pushes_away_from_center() {
        let mut repel = RepelState::default();
        repel.trigger(Vec2::ZERO, 0.0);
        let mut moved = bodies();

        repel.apply(&mut moved);

        assert!(moved[0].velocity.abs_diff_eq(Vec2::new(101.0, 2.0), EPSILON));
        assert!(moved[1].velocity.abs_diff_eq(Vec2::new(0.0, -2.0), EPSILON));
    }

    #[test]
    fn body_on_center_is_untouched() {
        let mut repel = RepelState::default();
        repel.trigger(Vec2::ZERO, 0.0);
        let mut moved = bodies();

        repel.apply(&mut moved);

        assert_eq!(moved[2].velocity, Vec2::new(-3.0, 0.0));
    }

    #[test]
    fn distance_floor_and_multiplier() {
        let mut repel = RepelState {
            force_multiplier: 2.5,
            ..Default::default()
        };
        repel.trigger(Vec2::new(1.0, 1.0), 0.0);

        let impulse = repel.force_at(Vec2::new(1.5, 1.0));

        assert!(impulse.abs_diff_eq(Vec2::new(2500.0, 0.0), EPSILON));
    }

    #[test]
    fn expires_after_duration() {
        let mut repel = RepelState {
            duration: 2.0,
            ..Default::default()
        };
        repel.trigger(Vec2::ZERO, 10.0);

        assert!(!repel.expire(11.5));
        assert!(repel.active);
        assert_eq!(repel.remaining(11.5), 0.5);

        assert!(repel.expire(12.0));
        assert!(!repel.active);
        assert_eq!(repel.remaining(12.0), 0.0);
        assert!(!repel.expire(13.0));
    }

    #[test]
    fn cancel_switches_field_off() {
        let mut repel = RepelState::default();
        repel.trigger(Vec2::ZERO, 0.0);

        repel.cancel();

        assert!(!repel.active);
        assert_eq!(repel.remaining(0.0), 0.0);
        assert_eq!(repel.force_at(Vec2::new(10.0, 0.0)), Vec2::ZERO);

        let mut moved = bodies();
        repel.apply(&mut moved);
        assert_eq!(moved, bodies());
    }

    #[test]
    fn retrigger_restarts_window() {
        let mut repel = RepelState {
            duration: 2.0,
            ..Default::default()
        };
        repel.trigger(Vec2::ZERO, 0.0);
        repel.trigger(Vec2::ONE, 1.5);

        assert!(!repel.expire(2.5));
        assert_eq!(repel.center, Vec2::ONE);
        assert!(repel.expire(3.5));
    }
}

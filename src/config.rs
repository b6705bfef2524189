#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{bounds::Bounds, error::ConfigError};

/// Width-to-height ratio of the simulated domain.
pub const ASPECT_RATIO: f32 = 1.777778;

/// Longest frame duration, in seconds, a driver should hand to a single step.
///
/// Bounding the step keeps per-step displacement small enough for the single wrap correction and
/// keeps the per-tick repel impulse calibrated.
pub const MAX_TICK_DURATION: f32 = 0.0167;

/// Clamps a raw frame delta to [`MAX_TICK_DURATION`].
///
/// ```
/// # use swarmfield::config::{clamp_delta, MAX_TICK_DURATION};
/// assert_eq!(clamp_delta(0.25), MAX_TICK_DURATION);
/// assert_eq!(clamp_delta(0.01), 0.01);
/// ```
#[inline]
pub fn clamp_delta(delta: f32) -> f32 {
    delta.min(MAX_TICK_DURATION)
}

/// Tunables of the pointer-triggered repel field.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RepelConfig {
    /// Whether selected world points trigger a repel field at all.
    pub interactive: bool,
    /// Scale applied to the base repel impulse.
    pub force_multiplier: f32,
    /// How long, in simulated seconds, a triggered field stays active.
    pub duration: f32,
}

impl Default for RepelConfig {
    fn default() -> Self {
        Self {
            interactive: true,
            force_multiplier: 1.0,
            duration: 5.0,
        }
    }
}

/// Parameter set of a run. Read once when the bodies are created.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulationConfig {
    /// Enables the pairwise gravity pass.
    pub gravity_enabled: bool,
    /// Number of bodies to simulate.
    pub num_bodies: usize,
    /// Radius of the disk, centred at the origin, bodies are spawned in.
    pub placement_radius: f32,
    /// Lower bound of the random spawn speed.
    pub min_velocity: f32,
    /// Upper bound of the random spawn speed.
    pub max_velocity: f32,
    /// Visual scale factor; a body is drawn at `sqrt(mass) * body_size`.
    pub body_size: f32,
    /// Gravitational constant of the simulation.
    pub gravity_force: f32,
    /// Lower bound of the random body mass.
    pub min_mass: f32,
    /// Upper bound of the random body mass.
    pub max_mass: f32,
    /// Softening floor substituted for shorter pairwise distances.
    pub minimum_gravity_distance: f32,
    /// Full width of the domain. The height follows from [`ASPECT_RATIO`].
    pub world_width: f32,
    /// Repel field tunables.
    pub repel: RepelConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity_enabled: true,
            num_bodies: 1000,
            placement_radius: 1000.0,
            min_velocity: 400.0,
            max_velocity: 600.0,
            body_size: 0.02,
            gravity_force: 1000.0,
            min_mass: 20.0,
            max_mass: 100.0,
            minimum_gravity_distance: 100.0,
            world_width: 8000.0,
            repel: RepelConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Full height of the domain.
    #[inline]
    pub fn world_height(&self) -> f32 {
        self.world_width / ASPECT_RATIO
    }

    /// Wrapping bounds derived from the configured width.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.world_width * 0.5, self.world_height() * 0.5)
    }

    /// Checks the parameter set for values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_bodies == 0 {
            return Err(ConfigError::NoBodies);
        }

        let scalars = [
            ("placement_radius", self.placement_radius),
            ("min_velocity", self.min_velocity),
            ("max_velocity", self.max_velocity),
            ("body_size", self.body_size),
            ("gravity_force", self.gravity_force),
            ("min_mass", self.min_mass),
            ("max_mass", self.max_mass),
            ("minimum_gravity_distance", self.minimum_gravity_distance),
            ("world_width", self.world_width),
            ("repel.force_multiplier", self.repel.force_multiplier),
            ("repel.duration", self.repel.duration),
        ];
        if let Some(&(parameter, _)) = scalars.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::NotFinite { parameter });
        }

        positive("min_mass", self.min_mass)?;
        positive("minimum_gravity_distance", self.minimum_gravity_distance)?;
        positive("world_width", self.world_width)?;

        non_negative("placement_radius", self.placement_radius)?;
        non_negative("body_size", self.body_size)?;
        non_negative("repel.duration", self.repel.duration)?;

        ordered("velocity", self.min_velocity, self.max_velocity)?;
        ordered("mass", self.min_mass, self.max_mass)?;

        Ok(())
    }
}

fn positive(parameter: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { parameter, value })
    }
}

fn non_negative(parameter: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { parameter, value })
    }
}

fn ordered(parameter: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    if min <= max {
        Ok(())
    } else {
        Err(ConfigError::InvertedRange { parameter, min, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(SimulationConfig::default().validate(), Ok(()));
    }

    #[test]
    fn bounds_follow_width_and_aspect_ratio() {
        let bounds = SimulationConfig::default().bounds();

        assert_eq!(bounds.half_width, 4000.0);
        assert!((bounds.half_height - 2250.0).abs() < 1e-2);
        assert_eq!(bounds.width(), 8000.0);
    }

    #[test]
    fn rejects_empty_population() {
        let config = SimulationConfig {
            num_bodies: 0,
            ..Default::default()
        };

        assert_eq!(config.validate(), Err(ConfigError::NoBodies));
    }

    #[test]
    fn rejects_inverted_ranges() {
        let config = SimulationConfig {
            min_mass: 50.0,
            max_mass: 10.0,
            ..Default::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::InvertedRange {
                parameter: "mass",
                min: 50.0,
                max: 10.0
            })
        );

        let config = SimulationConfig {
            min_velocity: 2.0,
            max_velocity: 1.0,
            ..Default::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedRange { parameter: "velocity", .. })
        ));
    }

    #[test]
    fn rejects_missing_softening_floor() {
        let config = SimulationConfig {
            minimum_gravity_distance: 0.0,
            ..Default::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive {
                parameter: "minimum_gravity_distance",
                ..
            })
        ));
    }

    #[test]
    fn rejects_non_finite_parameters() {
        let config = SimulationConfig {
            gravity_force: f32::NAN,
            ..Default::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::NotFinite {
                parameter: "gravity_force"
            })
        );
    }

    #[test]
    fn rejects_negative_repel_duration() {
        let config = SimulationConfig {
            repel: RepelConfig {
                duration: -1.0,
                ..Default::default()
            },
            ..Default::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative { parameter: "repel.duration", .. })
        ));
    }

    #[test]
    fn delta_clamp() {
        assert_eq!(clamp_delta(1.0), MAX_TICK_DURATION);
        assert_eq!(clamp_delta(0.0), 0.0);
    }
}

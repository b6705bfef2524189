use glam::{Vec2, Vec3};
use rand::Rng;

use crate::{
    body::{Body, Placement},
    bounds::Bounds,
    config::SimulationConfig,
    error::ConfigError,
    vector::rotated_degrees,
};

/// Fixed-size arena of bodies together with the domain they wrap around in.
///
/// Bodies are addressed by their stable slot index. The store also keeps the 3-D placement of every
/// body so that presentation updates can be published as one batch.
#[derive(Clone, Debug)]
pub struct BodyStore {
    bodies: Vec<Body>,
    bounds: Bounds,
    placements: Vec<Placement>,
    translations: Vec<Vec3>,
}

impl BodyStore {
    /// Creates `config.num_bodies` bodies spread over a disk of radius `config.placement_radius`.
    ///
    /// Each body starts with a velocity tangential to its radius vector, growing linearly with its
    /// distance from the origin, and a mass drawn uniformly from the configured range.
    ///
    /// The configuration is validated before anything is drawn from `rng`.
    ///
    /// ```
    /// # use swarmfield::prelude::*;
    /// # use rand::{rngs::StdRng, SeedableRng};
    /// let config = SimulationConfig { num_bodies: 16, ..Default::default() };
    /// let store = BodyStore::initialize(&config, &mut StdRng::seed_from_u64(1))?;
    ///
    /// assert_eq!(store.len(), 16);
    /// assert!(store.bodies().iter().all(|body| body.position.length() <= config.placement_radius));
    /// # Ok::<(), ConfigError>(())
    /// ```
    pub fn initialize<R: Rng + ?Sized>(config: &SimulationConfig, rng: &mut R) -> Result<Self, ConfigError> {
        config.validate()?;

        let bodies = (0..config.num_bodies)
            .map(|index| {
                let position = random_point_in_disk(rng, config.placement_radius);
                let velocity = tangential_velocity(rng, position, config);
                let mass = rng.gen_range(config.min_mass..=config.max_mass);

                Body::new(index, position, velocity, mass)
            })
            .collect();

        Ok(Self::from_bodies(bodies, config.bounds(), config.body_size))
    }

    /// Wraps hand-built bodies. Their `index` fields are rewritten to match their slots.
    pub fn from_bodies(mut bodies: Vec<Body>, bounds: Bounds, body_size: f32) -> Self {
        for (index, body) in bodies.iter_mut().enumerate() {
            body.index = index;
        }

        let placements: Vec<_> = bodies.iter().map(|body| Placement::of(body, body_size)).collect();
        let translations = placements.iter().map(|p| p.translation).collect();

        Self {
            bodies,
            bounds,
            placements,
            translations,
        }
    }

    /// All bodies, ordered by index.
    #[inline]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Mutable access to all bodies. The slice cannot grow or shrink.
    #[inline]
    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    /// The body in slot `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    /// Number of bodies.
    #[inline]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the store holds no bodies.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Domain the bodies wrap around in.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Placements computed when the bodies were created.
    #[inline]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Current 3-D position of every body, as last published.
    #[inline]
    pub fn translations(&self) -> &[Vec3] {
        &self.translations
    }

    /// Splits the store into the bodies and the translation buffer so both can be updated in the
    /// same pass.
    #[inline]
    pub(crate) fn bodies_and_translations(&mut self) -> (&mut [Body], &mut [Vec3]) {
        (&mut self.bodies, &mut self.translations)
    }
}

/// Uniform point inside a disk centred at the origin, by rejection sampling the enclosing square.
fn random_point_in_disk<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> Vec2 {
    if radius <= 0.0 {
        return Vec2::ZERO;
    }

    loop {
        let point = Vec2::new(rng.gen_range(-radius..=radius), rng.gen_range(-radius..=radius));

        if point.length_squared() <= radius * radius {
            return point;
        }
    }
}

/// Spawn velocity perpendicular to `position`, counter-clockwise around the origin.
///
/// The random speed is scaled by `|position| / placement_radius`. A body spawned exactly at the
/// origin has no radius vector to be tangential to and gets the limit of that scaling, zero.
fn tangential_velocity<R: Rng + ?Sized>(rng: &mut R, position: Vec2, config: &SimulationConfig) -> Vec2 {
    let speed = rng.gen_range(config.min_velocity..=config.max_velocity);
    let radial_speed_factor = config.placement_radius / position.length();

    if !radial_speed_factor.is_finite() || radial_speed_factor == 0.0 {
        return Vec2::ZERO;
    }

    let angle = 90.0 + position.y.atan2(position.x).to_degrees();

    rotated_degrees(Vec2::new(speed / radial_speed_factor, 0.0), angle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn config() -> SimulationConfig {
        SimulationConfig {
            num_bodies: 200,
            ..Default::default()
        }
    }

    #[test]
    fn allocates_exactly_num_bodies_with_stable_indices() {
        let store = BodyStore::initialize(&config(), &mut StdRng::seed_from_u64(3)).unwrap();

        assert_eq!(store.len(), 200);
        assert_eq!(store.placements().len(), 200);
        assert_eq!(store.translations().len(), 200);

        for (slot, body) in store.bodies().iter().enumerate() {
            assert_eq!(body.index, slot);
        }
    }

    #[test]
    fn bodies_respect_configured_ranges() {
        let config = config();
        let store = BodyStore::initialize(&config, &mut StdRng::seed_from_u64(4)).unwrap();

        for body in store.bodies() {
            assert!(body.position.length() <= config.placement_radius);
            assert!((config.min_mass..=config.max_mass).contains(&body.mass));

            let speed = body.velocity.length();
            let scale = body.position.length() / config.placement_radius;
            assert!(speed <= config.max_velocity * scale + 1E-2);
            assert!(speed >= config.min_velocity * scale - 1E-2);
        }
    }

    #[test]
    fn spawn_velocity_is_tangential_and_counter_clockwise() {
        let store = BodyStore::initialize(&config(), &mut StdRng::seed_from_u64(5)).unwrap();

        for body in store.bodies() {
            let radial = body.position.normalize_or_zero();
            let velocity = body.velocity.normalize_or_zero();

            assert!(radial.dot(velocity).abs() < 1E-3);
            assert!(radial.perp_dot(velocity) > 0.0 || velocity == Vec2::ZERO);
        }
    }

    #[test]
    fn same_seed_same_population() {
        let first = BodyStore::initialize(&config(), &mut StdRng::seed_from_u64(9)).unwrap();
        let second = BodyStore::initialize(&config(), &mut StdRng::seed_from_u64(9)).unwrap();

        assert_eq!(first.bodies(), second.bodies());
    }

    #[test]
    fn placements_match_bodies() {
        let config = config();
        let store = BodyStore::initialize(&config, &mut StdRng::seed_from_u64(6)).unwrap();

        for (body, placement) in store.bodies().iter().zip(store.placements()) {
            assert_eq!(placement.translation, body.position.extend(0.0));
            assert_eq!(placement.scale, body.mass.sqrt() * config.body_size);
        }
    }

    #[test]
    fn origin_spawn_gets_zero_velocity() {
        let config = SimulationConfig {
            placement_radius: 0.0,
            num_bodies: 3,
            ..Default::default()
        };
        let store = BodyStore::initialize(&config, &mut StdRng::seed_from_u64(0)).unwrap();

        for body in store.bodies() {
            assert_eq!(body.position, Vec2::ZERO);
            assert_eq!(body.velocity, Vec2::ZERO);
        }
    }

    #[test]
    fn rejects_invalid_config_before_sampling() {
        let config = SimulationConfig {
            min_mass: 50.0,
            max_mass: 10.0,
            ..Default::default()
        };

        assert!(matches!(
            BodyStore::initialize(&config, &mut StdRng::seed_from_u64(0)),
            Err(ConfigError::InvertedRange { parameter: "mass", .. })
        ));

        let config = SimulationConfig {
            placement_radius: f32::NAN,
            ..Default::default()
        };

        assert!(matches!(
            BodyStore::initialize(&config, &mut StdRng::seed_from_u64(0)),
            Err(ConfigError::NotFinite {
                parameter: "placement_radius"
            })
        ));
    }

    #[test]
    fn from_bodies_reindexes() {
        let bodies = vec![
            Body::new(7, Vec2::ZERO, Vec2::ZERO, 1.0),
            Body::new(7, Vec2::ONE, Vec2::ZERO, 1.0),
        ];
        let store = BodyStore::from_bodies(bodies, Bounds::new(10.0, 10.0), 1.0);

        assert_eq!(store.get(0).map(|b| b.index), Some(0));
        assert_eq!(store.get(1).map(|b| b.index), Some(1));
        assert!(store.get(2).is_none());
    }
}

use glam::{Vec2, Vec3};
use rand::Rng;

use crate::{
    body::{Body, Placement},
    body_store::BodyStore,
    bounds::Bounds,
    compute_method::{sequential, ComputeMethod},
    config::{clamp_delta, SimulationConfig},
    error::ConfigError,
    gravity::Gravity,
    integrator,
    repel::RepelState,
};

/// Receiver of body placements, typically a renderer drawing one instance per body.
///
/// Both methods default to doing nothing, and `()` is a presenter that ignores everything.
pub trait Presenter {
    /// Called once, when the bodies are created, with one placement per body in slot order.
    fn bodies_initialized(&mut self, placements: &[Placement]) {
        let _ = placements;
    }

    /// Called once per step, after every body has moved, with the new position of each body in
    /// slot order. `in_place` is true when the slots are unchanged since the previous call.
    fn bodies_updated(&mut self, translations: &[Vec3], in_place: bool) {
        let _ = (translations, in_place);
    }
}

impl Presenter for () {}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    #[inline]
    fn bodies_initialized(&mut self, placements: &[Placement]) {
        (**self).bodies_initialized(placements)
    }

    #[inline]
    fn bodies_updated(&mut self, translations: &[Vec3], in_place: bool) {
        (**self).bodies_updated(translations, in_place)
    }
}

/// A simulation session.
///
/// Owns the bodies, the repel field, the clock and the collaborators a run reports to. Sessions
/// are independent values; any number of them can run side by side.
///
/// ```
/// # use swarmfield::prelude::*;
/// # use rand::{rngs::StdRng, SeedableRng};
/// let config = SimulationConfig { num_bodies: 64, ..Default::default() };
/// let mut simulation = Simulation::new(config, &mut StdRng::seed_from_u64(0))?;
///
/// simulation.on_world_point_selected(0.0, 0.0);
/// for _ in 0..10 {
///     simulation.tick(1.0 / 60.0);
/// }
///
/// assert!(simulation.bodies().iter().all(|body| simulation.bounds().contains(body.position)));
/// # Ok::<(), ConfigError>(())
/// ```
#[derive(Debug)]
pub struct Simulation<C = sequential::BruteForce, P = ()> {
    config: SimulationConfig,
    store: BodyStore,
    gravity: Gravity,
    repel: RepelState,
    compute_method: C,
    presenter: P,
    elapsed: f64,
}

impl Simulation {
    /// Creates a session using the sequential brute-force gravity and no presenter.
    pub fn new<R: Rng + ?Sized>(config: SimulationConfig, rng: &mut R) -> Result<Self, ConfigError> {
        Self::with_parts(config, sequential::BruteForce, (), rng)
    }
}

impl<C: ComputeMethod, P: Presenter> Simulation<C, P> {
    /// Creates a session with the given gravity algorithm and presenter.
    ///
    /// Fails if the configuration does not validate. The presenter receives the initial
    /// placements before this returns.
    pub fn with_parts<R: Rng + ?Sized>(
        config: SimulationConfig,
        compute_method: C,
        presenter: P,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let store = BodyStore::initialize(&config, rng)?;

        Ok(Self::from_store(config, store, compute_method, presenter))
    }

    /// Creates a session around an existing body store, skipping random initialization.
    ///
    /// The store's bounds are used as-is.
    pub fn from_store(config: SimulationConfig, store: BodyStore, compute_method: C, mut presenter: P) -> Self {
        presenter.bodies_initialized(store.placements());

        Self {
            gravity: Gravity::from_config(&config),
            repel: RepelState::from_config(&config.repel),
            config,
            store,
            compute_method,
            presenter,
            elapsed: 0.0,
        }
    }

    /// Advances the simulation by `dt` seconds.
    ///
    /// `dt` is used as given; drivers feeding real frame times should go through
    /// [`Simulation::tick`] instead.
    pub fn step(&mut self, dt: f32) {
        self.repel.expire(self.elapsed);

        if self.config.gravity_enabled {
            integrator::apply_gravity(self.store.bodies_mut(), &mut self.compute_method, &self.gravity, dt);
        }

        integrator::apply_repel(self.store.bodies_mut(), &self.repel);

        let bounds = self.store.bounds();
        let (bodies, translations) = self.store.bodies_and_translations();
        integrator::advance(bodies, translations, dt, &bounds);

        self.presenter.bodies_updated(self.store.translations(), true);

        self.elapsed += f64::from(dt);
    }

    /// Advances the simulation by a frame delta clamped to
    /// [`MAX_TICK_DURATION`](crate::config::MAX_TICK_DURATION).
    #[inline]
    pub fn tick(&mut self, frame_delta: f32) {
        self.step(clamp_delta(frame_delta));
    }

    /// Starts a repel field centred on a selected world point.
    ///
    /// Ignored when the configuration disables interaction. A selection while a field is active
    /// moves it and restarts its lifetime.
    pub fn on_world_point_selected(&mut self, x: f32, y: f32) {
        if self.config.repel.interactive {
            self.repel.trigger(Vec2::new(x, y), self.elapsed);
        }
    }

    /// Turns the gravity pass on or off from the next step on.
    #[inline]
    pub fn set_gravity_enabled(&mut self, enabled: bool) {
        self.config.gravity_enabled = enabled;
    }

    /// Changes the repel strength, including for a field that is already active.
    #[inline]
    pub fn set_repel_force_multiplier(&mut self, force_multiplier: f32) {
        self.config.repel.force_multiplier = force_multiplier;
        self.repel.force_multiplier = force_multiplier;
    }

    /// Changes the lifetime of fields triggered from now on.
    #[inline]
    pub fn set_repel_duration(&mut self, duration: f32) {
        self.config.repel.duration = duration;
        self.repel.duration = duration;
    }

    /// All bodies, ordered by index.
    #[inline]
    pub fn bodies(&self) -> &[Body] {
        self.store.bodies()
    }

    /// The body store.
    #[inline]
    pub fn store(&self) -> &BodyStore {
        &self.store
    }

    /// Domain the bodies wrap around in.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.store.bounds()
    }

    /// Current state of the repel field.
    #[inline]
    pub fn repel(&self) -> &RepelState {
        &self.repel
    }

    /// Simulated seconds since the session started.
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Active configuration, including runtime changes.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The presenter receiving placements.
    #[inline]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Mutable access to the presenter.
    #[inline]
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Ends the session, returning the presenter.
    #[inline]
    pub fn into_presenter(self) -> P {
        self.presenter
    }
}

//! # Swarmfield
//!
//! Swarmfield simulates a population of point masses on a 2D torus. The bodies attract each
//! other through softened Newtonian gravity, and an external collaborator can push them apart
//! for a limited time by selecting a point in the world.
//!
//! ## Goals
//!
//! The crate only does the numeric part of such a simulation. Rendering, input devices and frame
//! scheduling belong to whoever drives it: the driver hands in frame durations, forwards selected
//! world points, and receives body placements through a [`Presenter`](simulation::Presenter).
//!
//! The gravity pass pairs every body with every other one. It can run on one thread or, with the
//! `parallel` feature, on all cores thanks to [rayon](https://github.com/rayon-rs/rayon).
//!
//! # Using Swarmfield
//!
//! ## Configuring a run
//!
//! A [`SimulationConfig`](config::SimulationConfig) holds every parameter of a run. Its
//! [`Default`] implementation describes a thousand bodies spread over a disk in an 8000 unit wide
//! domain.
//!
//! ```
//! # use swarmfield::prelude::*;
//! let config = SimulationConfig {
//!     num_bodies: 500,
//!     gravity_force: 800.0,
//!     ..Default::default()
//! };
//!
//! assert!(config.validate().is_ok());
//! ```
//!
//! ## Running a session
//!
//! A [`Simulation`](simulation::Simulation) owns the bodies and advances them one step at a time.
//! Randomness comes from the caller so a seeded generator reproduces a run exactly.
//!
//! ```
//! # use swarmfield::prelude::*;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let config = SimulationConfig { num_bodies: 100, ..Default::default() };
//! let mut simulation = Simulation::new(config, &mut StdRng::seed_from_u64(42))?;
//!
//! for _ in 0..60 {
//!     // `tick` clamps the frame time before stepping.
//!     simulation.tick(1.0 / 60.0);
//! }
//!
//! // Push everything away from the origin for the next few seconds.
//! simulation.on_world_point_selected(0.0, 0.0);
//! simulation.tick(1.0 / 60.0);
//!
//! assert!(simulation.repel().active);
//! # Ok::<(), ConfigError>(())
//! ```
//!
//! ## Presenting the bodies
//!
//! Implement [`Presenter`](simulation::Presenter) to receive the initial placements once and the
//! updated positions after every step.
//!
//! ```
//! # use swarmfield::prelude::*;
//! # use rand::{rngs::StdRng, SeedableRng};
//! use glam::Vec3;
//!
//! #[derive(Default)]
//! struct Instances(Vec<Vec3>);
//!
//! impl Presenter for Instances {
//!     fn bodies_initialized(&mut self, placements: &[Placement]) {
//!         self.0 = placements.iter().map(|p| p.translation).collect();
//!     }
//!
//!     fn bodies_updated(&mut self, translations: &[Vec3], _in_place: bool) {
//!         self.0.copy_from_slice(translations);
//!     }
//! }
//!
//! let config = SimulationConfig { num_bodies: 10, ..Default::default() };
//! let mut simulation = Simulation::with_parts(
//!     config,
//!     sequential::BruteForce,
//!     Instances::default(),
//!     &mut StdRng::seed_from_u64(0),
//! )?;
//! simulation.step(0.01);
//!
//! assert_eq!(simulation.presenter().0.len(), 10);
//! # Ok::<(), ConfigError>(())
//! ```

#![warn(missing_docs)]

/// Point masses and their presentation.
pub mod body;

/// Fixed-size storage of the simulated bodies.
pub mod body_store;

/// Toroidal domain.
pub mod bounds;

/// Trait for computing accelerations and types implementing it for the user to choose from.
pub mod compute_method;

/// Parameters of a run.
pub mod config;

/// Configuration errors.
pub mod error;

/// Softened gravity law.
pub mod gravity;

pub mod integrator;

/// Pointer-triggered repel field.
pub mod repel;

/// Simulation sessions and their collaborators.
pub mod simulation;

/// Small vector helpers.
pub mod vector;

/// Everything needed to use the crate.
pub mod prelude {
    pub use crate::body::{Body, Placement, PointMass};
    pub use crate::body_store::BodyStore;
    pub use crate::bounds::Bounds;
    pub use crate::compute_method::*;
    pub use crate::config::{RepelConfig, SimulationConfig};
    pub use crate::error::ConfigError;
    pub use crate::gravity::Gravity;
    pub use crate::repel::RepelState;
    pub use crate::simulation::{Presenter, Simulation};
}

use glam::Vec3;
use rand::{rngs::StdRng, SeedableRng};
use swarmfield::prelude::*;

const FRAME: f32 = 1.0 / 60.0;
const FRAMES: usize = 600;

/// Stands in for a renderer: keeps one instance per body and counts batch updates.
#[derive(Debug, Default)]
struct Instances {
    translations: Vec<Vec3>,
    scales: Vec<f32>,
    batches: usize,
}

impl Presenter for Instances {
    fn bodies_initialized(&mut self, placements: &[Placement]) {
        self.translations = placements.iter().map(|p| p.translation).collect();
        self.scales = placements.iter().map(|p| p.scale).collect();
    }

    fn bodies_updated(&mut self, translations: &[Vec3], _in_place: bool) {
        self.translations.copy_from_slice(translations);
        self.batches += 1;
    }
}

fn mean_speed(bodies: &[Body]) -> f32 {
    bodies.iter().map(|body| body.velocity.length()).sum::<f32>() / bodies.len() as f32
}

fn main() -> Result<(), ConfigError> {
    let config = SimulationConfig::default();
    let mut rng = StdRng::seed_from_u64(2024);

    #[cfg(feature = "parallel")]
    let cm = parallel::BruteForce;
    #[cfg(not(feature = "parallel"))]
    let cm = sequential::BruteForce;

    let mut simulation = Simulation::with_parts(config, cm, Instances::default(), &mut rng)?;

    for frame in 0..FRAMES {
        // A click at the centre of the domain two seconds in.
        if frame == 120 {
            simulation.on_world_point_selected(0.0, 0.0);
        }

        simulation.tick(FRAME);

        if frame % 60 == 59 {
            println!(
                "t = {:>5.2}s  mean speed = {:>8.2}  repel = {}",
                simulation.elapsed(),
                mean_speed(simulation.bodies()),
                if simulation.repel().active { "on" } else { "off" },
            );
        }
    }

    let instances = simulation.into_presenter();
    let largest = instances.scales.iter().copied().fold(0.0, f32::max);
    println!(
        "{} instances (largest scale {:.3}), {} batch updates",
        instances.translations.len(),
        largest,
        instances.batches
    );

    Ok(())
}

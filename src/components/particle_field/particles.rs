//! Ambient particles: spawning and per-frame motion.

use rand::Rng;

use super::types::FieldConfig;

/// A single floating particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	pub opacity: f64,
}

/// Fixed-size particle population confined to the surface bounds.
#[derive(Clone, Debug, Default)]
pub struct ParticleStore {
	pub particles: Vec<Particle>,
}

/// Uniform sample in `[min, max)`. Equal bounds yield `min`.
fn sample<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
	min + rng.r#gen::<f64>() * (max - min)
}

impl ParticleStore {
	/// Throw away the current population and spawn `config.count` fresh
	/// particles spread over a `width` x `height` surface.
	pub fn reinitialize<R: Rng>(
		&mut self,
		config: &FieldConfig,
		width: f64,
		height: f64,
		rng: &mut R,
	) {
		self.particles.clear();
		self.particles.reserve(config.count);

		for _ in 0..config.count {
			self.particles.push(Particle {
				x: sample(rng, 0.0, width),
				y: sample(rng, 0.0, height),
				vx: sample(rng, -config.speed, config.speed),
				vy: sample(rng, -config.speed, config.speed),
				radius: sample(rng, config.radius_min, config.radius_max),
				opacity: sample(rng, config.opacity_min, config.opacity_max),
			});
		}
	}

	/// Advance every particle by one frame.
	///
	/// Boundary checks use the moved position before clamping, so a particle
	/// that overshoots is pinned to the edge this frame and heads back inward
	/// from the next one.
	pub fn step(&mut self, width: f64, height: f64) {
		for p in &mut self.particles {
			p.x += p.vx;
			p.y += p.vy;

			if p.x < 0.0 || p.x > width {
				p.vx = -p.vx;
			}
			if p.y < 0.0 || p.y > height {
				p.vy = -p.vy;
			}

			p.x = p.x.clamp(0.0, width);
			p.y = p.y.clamp(0.0, height);
		}
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}
}

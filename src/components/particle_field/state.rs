//! Particle field state: surface, population and styling in one place.
//!
//! The field is what a single animation frame operates on. Resizing replaces
//! the whole population so the spread always matches the new bounds.

use log::debug;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::particles::ParticleStore;
use super::render::{self, DrawSurface};
use super::surface::Surface;
use super::types::FieldConfig;

pub struct ParticleField {
	pub config: FieldConfig,
	pub surface: Surface,
	pub store: ParticleStore,
	rng: SmallRng,
}

impl ParticleField {
	/// Build a field sized to the given viewport and spawn its particles.
	pub fn new(config: FieldConfig, seed: u64, width: f64, height: f64) -> Self {
		let mut field = Self {
			config,
			surface: Surface::default(),
			store: ParticleStore::default(),
			rng: SmallRng::seed_from_u64(seed),
		};
		field.resize(width, height);
		field
	}

	/// Resize the surface, then respawn the population inside the new bounds.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.surface.resize(width, height);
		let (w, h) = self.surface.bounds();
		self.store.reinitialize(&self.config, w, h, &mut self.rng);
		debug!(
			"hero-particles: surface {}x{}, {} particles",
			self.surface.width,
			self.surface.height,
			self.store.len()
		);
	}

	pub fn step(&mut self) {
		let (w, h) = self.surface.bounds();
		self.store.step(w, h);
	}

	pub fn draw<S: DrawSurface + ?Sized>(&self, target: &mut S) {
		let (w, h) = self.surface.bounds();
		render::render(target, &self.store.particles, w, h, &self.config);
	}

	/// One full frame: integrate, then render.
	pub fn frame<S: DrawSurface + ?Sized>(&mut self, target: &mut S) {
		self.step();
		self.draw(target);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::render::tests::{Op, Recorder};

	#[test]
	fn resize_respawns_inside_new_bounds() {
		let mut field = ParticleField::new(FieldConfig::default(), 11, 800.0, 600.0);
		assert_eq!(field.store.len(), 50);
		let before = field.store.particles.clone();

		field.resize(400.0, 300.0);
		assert_eq!(field.surface, Surface::new(400.0, 300.0));
		assert_eq!(field.store.len(), 50);
		assert_ne!(field.store.particles, before);
		for p in &field.store.particles {
			assert!((0.0..=400.0).contains(&p.x));
			assert!((0.0..=300.0).contains(&p.y));
		}
	}

	#[test]
	fn same_seed_same_layout() {
		let a = ParticleField::new(FieldConfig::default(), 42, 640.0, 480.0);
		let b = ParticleField::new(FieldConfig::default(), 42, 640.0, 480.0);
		assert_eq!(a.store.particles, b.store.particles);
	}

	#[test]
	fn frame_moves_before_drawing() {
		let config = FieldConfig {
			count: 1,
			..FieldConfig::default()
		};
		let mut field = ParticleField::new(config, 5, 800.0, 600.0);
		let mut moved = field.store.clone();
		moved.step(800.0, 600.0);

		let mut rec = Recorder::default();
		field.frame(&mut rec);

		let p = &moved.particles[0];
		assert_eq!(rec.ops[0], Op::Clear(800.0, 600.0));
		assert!(matches!(rec.ops[1], Op::Circle { x, y, .. } if x == p.x && y == p.y));
	}
}

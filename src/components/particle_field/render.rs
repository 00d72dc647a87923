//! Canvas rendering for the particle field.
//!
//! Each frame is two passes over a cleared surface:
//! 1. Particles as filled circles, each at its own opacity
//! 2. Connecting segments between every close pair, fading with distance

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::particles::Particle;
use super::theme::Color;
use super::types::FieldConfig;

/// The immediate-mode drawing operations the renderer needs.
pub trait DrawSurface {
	/// Set the pixel size of the backing surface. Drops whatever was drawn.
	fn resize(&mut self, width: u32, height: u32);
	fn clear(&mut self, width: f64, height: f64);
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
	fn stroke_segment(&mut self, from: (f64, f64), to: (f64, f64), color: Color);
}

impl DrawSurface for CanvasRenderingContext2d {
	fn resize(&mut self, width: u32, height: u32) {
		if let Some(canvas) = self.canvas() {
			canvas.set_width(width);
			canvas.set_height(height);
		}
	}

	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.set_fill_style_str(&color.to_css());
		self.fill();
	}

	fn stroke_segment(&mut self, from: (f64, f64), to: (f64, f64), color: Color) {
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.set_stroke_style_str(&color.to_css());
		self.stroke();
	}
}

/// A segment to draw between particles `a` and `b` (indices, `a < b`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	pub a: usize,
	pub b: usize,
	pub distance: f64,
	pub opacity: f64,
}

/// Every pair closer than `config.link_distance`, in index order.
///
/// Plain O(n²) scan: ~1.2k pairs at the default 50 particles. A larger field
/// would want a uniform grid with `link_distance`-sized cells so only
/// neighbouring buckets are compared.
pub fn links(particles: &[Particle], config: &FieldConfig) -> Vec<Link> {
	let mut out = Vec::new();
	for i in 0..particles.len() {
		let p1 = &particles[i];
		for j in (i + 1)..particles.len() {
			let p2 = &particles[j];
			let (dx, dy) = (p1.x - p2.x, p1.y - p2.y);
			let distance = (dx * dx + dy * dy).sqrt();

			if distance < config.link_distance {
				out.push(Link {
					a: i,
					b: j,
					distance,
					opacity: (config.link_alpha - distance / config.link_falloff).max(0.0),
				});
			}
		}
	}
	out
}

/// Draws one complete frame.
pub fn render<S: DrawSurface + ?Sized>(
	surface: &mut S,
	particles: &[Particle],
	width: f64,
	height: f64,
	config: &FieldConfig,
) {
	surface.clear(width, height);

	for p in particles {
		surface.fill_circle(
			p.x,
			p.y,
			p.radius,
			config.particle_color.with_alpha(p.opacity),
		);
	}

	for link in links(particles, config) {
		let (p1, p2) = (&particles[link.a], &particles[link.b]);
		surface.stroke_segment(
			(p1.x, p1.y),
			(p2.x, p2.y),
			config.link_color.with_alpha(link.opacity),
		);
	}
}

//! Colors used by the particle field.

use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	#[serde(default = "opaque")]
	pub a: f64,
}

fn opaque() -> f64 {
	1.0
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS `rgba(...)` string, always carrying the alpha channel.
	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Cyan used to fill particles.
pub const PARTICLE_COLOR: Color = Color::rgb(6, 182, 212);

/// Violet used to stroke connecting segments.
pub const LINK_COLOR: Color = Color::rgb(139, 92, 246);

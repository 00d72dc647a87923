//! Pixel dimensions of the drawing surface.

/// Canvas size in device pixels, mapped 1:1 from the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Surface {
	pub width: u32,
	pub height: u32,
}

impl Surface {
	pub fn new(width: f64, height: f64) -> Self {
		let mut surface = Self::default();
		surface.resize(width, height);
		surface
	}

	/// Match the surface to a viewport size. Fractional pixels are dropped, as
	/// the canvas `width`/`height` attributes do; negative or non-finite sizes
	/// collapse to zero. Returns whether the size changed.
	pub fn resize(&mut self, viewport_width: f64, viewport_height: f64) -> bool {
		let next = Self {
			width: to_pixels(viewport_width),
			height: to_pixels(viewport_height),
		};
		let changed = next != *self;
		*self = next;
		changed
	}

	/// Bounds used by physics and drawing.
	pub fn bounds(&self) -> (f64, f64) {
		(self.width as f64, self.height as f64)
	}
}

fn to_pixels(v: f64) -> u32 {
	if v.is_finite() && v > 0.0 {
		v as u32
	} else {
		0
	}
}

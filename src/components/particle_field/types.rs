//! Configuration accepted by the particle field component.

use serde::Deserialize;
use thiserror::Error;

use super::theme::{Color, LINK_COLOR, PARTICLE_COLOR};

/// Tunables for the particle field. Every field is optional in JSON; missing
/// fields take the defaults below.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
	/// Number of particles kept alive at all times.
	pub count: usize,
	/// Velocity components are drawn from `[-speed, speed)` units per frame.
	pub speed: f64,
	pub radius_min: f64,
	pub radius_max: f64,
	pub opacity_min: f64,
	pub opacity_max: f64,
	/// Pairs closer than this (in pixels) are joined by a segment.
	pub link_distance: f64,
	/// Segment opacity for coincident particles.
	pub link_alpha: f64,
	/// Segment opacity drops by `distance / link_falloff`.
	pub link_falloff: f64,
	pub particle_color: Color,
	pub link_color: Color,
	/// Fixed RNG seed. Unset means a fresh layout on every page load.
	pub seed: Option<u64>,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			count: 50,
			speed: 1.0,
			radius_min: 1.0,
			radius_max: 3.0,
			opacity_min: 0.1,
			opacity_max: 0.6,
			link_distance: 100.0,
			link_alpha: 0.1,
			link_falloff: 1000.0,
			particle_color: PARTICLE_COLOR,
			link_color: LINK_COLOR,
			seed: None,
		}
	}
}

/// Reasons a configuration document is rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("invalid config JSON: {0}")]
	Parse(#[from] serde_json::Error),
	#[error("{field}: min {min} is greater than max {max}")]
	InvalidRange {
		field: &'static str,
		min: f64,
		max: f64,
	},
	#[error("{field} must be a non-negative number, got {value}")]
	Negative { field: &'static str, value: f64 },
	#[error("{field} must lie in [0, 1], got {value}")]
	OpacityOutOfRange { field: &'static str, value: f64 },
}

impl FieldConfig {
	/// Parse and validate a JSON configuration document.
	pub fn from_json(json: &str) -> Result<Self, ConfigError> {
		let config: FieldConfig = serde_json::from_str(json)?;
		config.validate()?;
		Ok(config)
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		for (field, value) in [
			("speed", self.speed),
			("radius_min", self.radius_min),
			("link_distance", self.link_distance),
			("link_alpha", self.link_alpha),
		] {
			// `!(v >= 0)` also rejects NaN.
			if !(value >= 0.0) || value.is_infinite() {
				return Err(ConfigError::Negative { field, value });
			}
		}
		if !(self.link_falloff > 0.0) {
			return Err(ConfigError::Negative {
				field: "link_falloff",
				value: self.link_falloff,
			});
		}
		for (field, value) in [
			("opacity_min", self.opacity_min),
			("opacity_max", self.opacity_max),
		] {
			if !(0.0..=1.0).contains(&value) {
				return Err(ConfigError::OpacityOutOfRange { field, value });
			}
		}
		for (field, min, max) in [
			("radius", self.radius_min, self.radius_max),
			("opacity", self.opacity_min, self.opacity_max),
		] {
			if !(min <= max) {
				return Err(ConfigError::InvalidRange { field, min, max });
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_hero_constants() {
		let c = FieldConfig::default();
		assert_eq!(c.count, 50);
		assert_eq!((c.radius_min, c.radius_max), (1.0, 3.0));
		assert_eq!((c.opacity_min, c.opacity_max), (0.1, 0.6));
		assert_eq!(c.link_distance, 100.0);
		assert_eq!((c.link_alpha, c.link_falloff), (0.1, 1000.0));
		assert!(c.validate().is_ok());
	}

	#[test]
	fn partial_json_keeps_defaults() {
		let c = FieldConfig::from_json(r#"{ "count": 80, "seed": 7 }"#).unwrap();
		assert_eq!(c.count, 80);
		assert_eq!(c.seed, Some(7));
		assert_eq!(c.link_distance, 100.0);
		assert_eq!(c.particle_color, PARTICLE_COLOR);
	}

	#[test]
	fn rejects_inverted_radius_range() {
		let err = FieldConfig::from_json(r#"{ "radius_min": 4.0, "radius_max": 2.0 }"#)
			.unwrap_err();
		assert!(matches!(
			err,
			ConfigError::InvalidRange { field: "radius", .. }
		));
	}

	#[test]
	fn rejects_opacity_above_one() {
		let err = FieldConfig::from_json(r#"{ "opacity_max": 1.5 }"#).unwrap_err();
		assert!(matches!(
			err,
			ConfigError::OpacityOutOfRange {
				field: "opacity_max",
				..
			}
		));
	}

	#[test]
	fn rejects_zero_falloff_and_bad_json() {
		assert!(matches!(
			FieldConfig::from_json(r#"{ "link_falloff": 0 }"#),
			Err(ConfigError::Negative {
				field: "link_falloff",
				..
			})
		));
		assert!(matches!(
			FieldConfig::from_json("{ count: 3"),
			Err(ConfigError::Parse(_))
		));
	}
}

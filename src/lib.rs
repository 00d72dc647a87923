//! hero-particles: animated particle background for a portfolio hero section.
//!
//! This crate provides a WASM canvas component that fills the viewport with
//! drifting, softly connected particles, plus a minimal hero page that mounts it.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::particle_field::{
	AnimationLoop, Color, ConfigError, DrawSurface, FieldConfig, FieldEvent, FrameScheduler,
	Link, LoopState, Particle, ParticleCanvas, ParticleField, ParticleStore, Surface, links,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("hero-particles: logging initialized");
}

/// Load field settings from a script element with id="particle-config".
/// Expected format: JSON object with any subset of [`FieldConfig`] fields.
/// Falls back to defaults when the element is missing or invalid.
pub fn load_field_config() -> FieldConfig {
	let Some(json_text) = config_script_text() else {
		return FieldConfig::default();
	};

	match FieldConfig::from_json(&json_text) {
		Ok(config) => {
			info!(
				"hero-particles: loaded config ({} particles, link distance {})",
				config.count, config.link_distance
			);
			config
		}
		Err(e) => {
			warn!("hero-particles: ignoring particle config: {}", e);
			FieldConfig::default()
		}
	}
}

fn config_script_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("particle-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Main application component.
/// Renders the hero section with the particle field behind its content.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_field_config();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Portfolio" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<section id="home" class="hero" style="position: relative; min-height: 100vh; overflow: hidden;">
			<ParticleCanvas config=config />
			<div class="hero-content" style="position: relative;">
				<h1 class="hero-title">"Hi, I'm a developer"</h1>
				<p class="hero-subtitle">"Building things for the web."</p>
			</div>
		</section>
	}
}

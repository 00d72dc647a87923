//! Animated particle field for the hero section.
//!
//! Draws drifting points on an HTML canvas and joins close pairs with faint
//! segments:
//! - Fixed-size population, respawned whenever the viewport is resized
//! - Straight-line motion with reflective bounce at the canvas edges
//! - Segment opacity fading linearly with distance
//! - Frame loop paused while the page is hidden
//!
//! # Example
//!
//! ```ignore
//! use hero_particles::{FieldConfig, ParticleCanvas};
//!
//! let config = FieldConfig { count: 80, ..FieldConfig::default() };
//!
//! view! { <ParticleCanvas config=config /> }
//! ```

mod animation;
mod component;
mod particles;
mod render;
mod state;
mod surface;
pub mod theme;
mod types;

pub use animation::{AnimationLoop, FieldEvent, FrameScheduler, LoopState};
pub use component::{ParticleCanvas, RafScheduler};
pub use particles::{Particle, ParticleStore};
pub use render::{DrawSurface, Link, links, render};
pub use state::ParticleField;
pub use surface::Surface;
pub use theme::Color;
pub use types::{ConfigError, FieldConfig};

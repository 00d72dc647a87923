//! Leptos component wrapping the particle field canvas.
//!
//! The component creates a canvas element, sizes it to the viewport and runs
//! the field via `requestAnimationFrame`. Window `resize` and document
//! `visibilitychange` are forwarded to the loop as [`FieldEvent`]s.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, EventTarget, HtmlCanvasElement, Window};

use super::animation::{AnimationLoop, FieldEvent, FrameScheduler};
use super::state::ParticleField;
use super::types::FieldConfig;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;
type SharedLoop = Rc<RefCell<Option<AnimationLoop<RafScheduler, CanvasRenderingContext2d>>>>;

/// `requestAnimationFrame` bound to a single callback.
pub struct RafScheduler {
	window: Window,
	callback: FrameCallback,
}

impl FrameScheduler for RafScheduler {
	type Handle = i32;

	fn schedule(&mut self) -> Option<i32> {
		let callback = self.callback.borrow();
		let cb = (*callback).as_ref()?;
		self.window
			.request_animation_frame(cb.as_ref().unchecked_ref())
			.ok()
	}

	fn cancel(&mut self, handle: i32) {
		let _ = self.window.cancel_animation_frame(handle);
	}
}

fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

fn seed(config: &FieldConfig) -> u64 {
	config
		.seed
		.unwrap_or_else(|| (js_sys::Math::random() * u64::MAX as f64) as u64)
}

/// Registers a listener that lives as long as the page.
fn listen(target: &EventTarget, event: &str, handler: impl FnMut() + 'static) {
	let closure = Closure::<dyn FnMut()>::new(handler);
	if target
		.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
		.is_err()
	{
		error!("hero-particles: failed to listen for {event}");
	}
	closure.forget();
}

/// Renders the animated particle field on a full-viewport canvas.
///
/// The canvas tracks the window size; every resize respawns the population.
/// Animation pauses while the page is hidden.
#[component]
pub fn ParticleCanvas(
	#[prop(optional)] config: FieldConfig,
	#[prop(default = "particle-canvas")] class: &'static str,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let field_loop: SharedLoop = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if field_loop.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			error!("hero-particles: no window, particle field disabled");
			return;
		};
		let Some(document) = window.document() else {
			error!("hero-particles: no document, particle field disabled");
			return;
		};
		let Some(ctx) = context_2d(&canvas) else {
			error!("hero-particles: canvas 2d context unavailable, particle field disabled");
			return;
		};
		let (w, h) = viewport_size(&window).unwrap_or((0.0, 0.0));

		let callback: FrameCallback = Rc::new(RefCell::new(None));
		let scheduler = RafScheduler {
			window: window.clone(),
			callback: callback.clone(),
		};
		let field = ParticleField::new(config.clone(), seed(&config), w, h);
		info!(
			"hero-particles: {} particles on {}x{}",
			field.store.len(),
			field.surface.width,
			field.surface.height
		);
		*field_loop.borrow_mut() = Some(AnimationLoop::new(field, ctx, scheduler));

		let loop_frame = field_loop.clone();
		*callback.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut l) = *loop_frame.borrow_mut() {
				l.on_frame();
			}
		}));

		let (loop_resize, window_resize) = (field_loop.clone(), window.clone());
		listen(&window, "resize", move || {
			let Some((width, height)) = viewport_size(&window_resize) else {
				return;
			};
			if let Some(ref mut l) = *loop_resize.borrow_mut() {
				l.handle(FieldEvent::Resize { width, height });
			}
		});

		let (loop_visibility, document_visibility) = (field_loop.clone(), document.clone());
		listen(&document, "visibilitychange", move || {
			let hidden = document_visibility.hidden();
			if let Some(ref mut l) = *loop_visibility.borrow_mut() {
				l.handle(FieldEvent::Visibility { hidden });
			}
		});

		if !document.hidden() {
			if let Some(ref mut l) = *field_loop.borrow_mut() {
				l.start();
			}
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class=class
			aria-hidden="true"
			style="position: absolute; inset: 0; display: block; pointer-events: none;"
		/>
	}
}

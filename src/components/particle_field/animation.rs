//! Frame loop for the particle field.
//!
//! The loop is a two-state machine (`Paused`/`Running`) driven by explicit
//! [`FieldEvent`]s and by frame callbacks from a [`FrameScheduler`]. At most one
//! frame is ever pending; the next one is requested only after the current
//! frame has integrated and rendered.

use log::{debug, warn};

use super::render::DrawSurface;
use super::state::ParticleField;

/// Platform capability that calls a pre-bound frame callback once before the
/// next repaint.
pub trait FrameScheduler {
	type Handle: Copy + PartialEq + std::fmt::Debug;

	/// Request one frame. `None` if the platform refused.
	fn schedule(&mut self) -> Option<Self::Handle>;

	/// Cancel a frame previously returned by [`FrameScheduler::schedule`].
	fn cancel(&mut self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
	#[default]
	Paused,
	Running,
}

/// Page lifecycle signals, delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldEvent {
	Resize { width: f64, height: f64 },
	Visibility { hidden: bool },
}

/// Drives a [`ParticleField`] onto a [`DrawSurface`] one scheduled frame at a
/// time.
pub struct AnimationLoop<S: FrameScheduler, D: DrawSurface> {
	pub field: ParticleField,
	target: D,
	scheduler: S,
	state: LoopState,
	pending: Option<S::Handle>,
}

impl<S: FrameScheduler, D: DrawSurface> AnimationLoop<S, D> {
	/// Wrap a field. The target is sized to the field; the loop starts paused.
	pub fn new(field: ParticleField, mut target: D, scheduler: S) -> Self {
		target.resize(field.surface.width, field.surface.height);
		Self {
			field,
			target,
			scheduler,
			state: LoopState::Paused,
			pending: None,
		}
	}

	pub fn state(&self) -> LoopState {
		self.state
	}

	pub fn pending(&self) -> Option<S::Handle> {
		self.pending
	}

	pub fn scheduler(&self) -> &S {
		&self.scheduler
	}

	pub fn target(&self) -> &D {
		&self.target
	}

	pub fn start(&mut self) {
		if self.state == LoopState::Running {
			return;
		}
		self.state = LoopState::Running;
		self.request_frame();
	}

	/// Pause and cancel the pending frame. No-op when already paused.
	pub fn stop(&mut self) {
		if self.state == LoopState::Paused {
			return;
		}
		if let Some(handle) = self.pending.take() {
			self.scheduler.cancel(handle);
		}
		self.state = LoopState::Paused;
	}

	pub fn handle(&mut self, event: FieldEvent) {
		match event {
			FieldEvent::Resize { width, height } => {
				self.field.resize(width, height);
				self.target
					.resize(self.field.surface.width, self.field.surface.height);
			}
			FieldEvent::Visibility { hidden: true } => {
				debug!("hero-particles: page hidden, pausing");
				self.stop();
			}
			FieldEvent::Visibility { hidden: false } => {
				debug!("hero-particles: page visible, resuming");
				self.start();
			}
		}
	}

	/// Body of the scheduled callback. Returns whether a frame was produced;
	/// a callback arriving while paused is ignored.
	pub fn on_frame(&mut self) -> bool {
		if self.state != LoopState::Running {
			return false;
		}
		self.pending = None;
		self.field.frame(&mut self.target);
		self.request_frame();
		true
	}

	fn request_frame(&mut self) {
		match self.scheduler.schedule() {
			Some(handle) => self.pending = Some(handle),
			None => {
				warn!("hero-particles: could not schedule a frame, pausing");
				self.pending = None;
				self.state = LoopState::Paused;
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::render::tests::{Op, Recorder};
	use crate::components::particle_field::types::FieldConfig;

	/// Hands out increasing ids and remembers what was asked of it.
	#[derive(Default)]
	struct ManualScheduler {
		next: u32,
		scheduled: Vec<u32>,
		cancelled: Vec<u32>,
		refuse: bool,
	}

	impl FrameScheduler for ManualScheduler {
		type Handle = u32;

		fn schedule(&mut self) -> Option<u32> {
			if self.refuse {
				return None;
			}
			self.next += 1;
			self.scheduled.push(self.next);
			Some(self.next)
		}

		fn cancel(&mut self, handle: u32) {
			self.cancelled.push(handle);
		}
	}

	fn looped() -> AnimationLoop<ManualScheduler, Recorder> {
		let field = ParticleField::new(FieldConfig::default(), 9, 800.0, 600.0);
		AnimationLoop::new(field, Recorder::default(), ManualScheduler::default())
	}

	#[test]
	fn starts_paused_with_sized_target() {
		let l = looped();
		assert_eq!(l.state(), LoopState::Paused);
		assert_eq!(l.pending(), None);
		assert_eq!(l.target().ops, vec![Op::Resize(800, 600)]);
	}

	#[test]
	fn start_schedules_exactly_once() {
		let mut l = looped();
		l.start();
		l.start();
		assert_eq!(l.state(), LoopState::Running);
		assert_eq!(l.scheduler().scheduled, vec![1]);
		assert_eq!(l.pending(), Some(1));
	}

	#[test]
	fn frame_integrates_renders_and_reschedules() {
		let mut l = looped();
		l.start();
		let before = l.field.store.particles.clone();

		assert!(l.on_frame());
		assert_ne!(l.field.store.particles, before);
		assert_eq!(l.pending(), Some(2));
		assert!(matches!(l.target().ops[1], Op::Clear(..)));
	}

	#[test]
	fn stop_is_idempotent_and_cancels_the_pending_frame() {
		let mut l = looped();
		l.start();
		l.on_frame();
		l.stop();
		l.stop();
		assert_eq!(l.state(), LoopState::Paused);
		assert_eq!(l.pending(), None);
		assert_eq!(l.scheduler().cancelled, vec![2]);
	}

	#[test]
	fn hidden_page_freezes_particles_until_visible() {
		let mut l = looped();
		l.start();
		l.handle(FieldEvent::Visibility { hidden: true });
		assert_eq!(l.state(), LoopState::Paused);

		let frozen = l.field.store.particles.clone();
		assert!(!l.on_frame());
		assert_eq!(l.field.store.particles, frozen);

		l.handle(FieldEvent::Visibility { hidden: false });
		assert_eq!(l.state(), LoopState::Running);
		assert!(l.on_frame());
		assert_ne!(l.field.store.particles, frozen);
	}

	#[test]
	fn resize_respawns_without_touching_run_state() {
		let mut l = looped();
		l.handle(FieldEvent::Resize {
			width: 400.0,
			height: 300.0,
		});
		assert_eq!(l.state(), LoopState::Paused);
		assert_eq!(l.target().ops.last(), Some(&Op::Resize(400, 300)));
		assert_eq!(l.field.store.len(), 50);
		for p in &l.field.store.particles {
			assert!((0.0..=400.0).contains(&p.x));
			assert!((0.0..=300.0).contains(&p.y));
		}

		l.start();
		l.handle(FieldEvent::Resize {
			width: 1024.0,
			height: 768.0,
		});
		assert_eq!(l.state(), LoopState::Running);
		assert_eq!(l.pending(), Some(1));
	}

	#[test]
	fn refused_schedule_falls_back_to_paused() {
		let mut l = looped();
		l.scheduler.refuse = true;
		l.start();
		assert_eq!(l.state(), LoopState::Paused);

		l.scheduler.refuse = false;
		l.handle(FieldEvent::Visibility { hidden: false });
		assert_eq!(l.state(), LoopState::Running);
		assert_eq!(l.pending(), Some(1));
	}
}

// Per-frame flight stepping. At most one flight owns the camera at a time:
// beginning a new flight revokes the old handle, and a step presented with a
// revoked handle writes nothing. Stale frames are rejected structurally, not
// by scheduling luck.
// See README: Flight Rules

use crate::ease::Easing;
use crate::trajectory::Trajectory;
use crate::types::{CameraPose, FlightHandle};

/// Result of advancing the driver by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// No active flight (or a revoked handle); the camera was not touched.
    Idle,
    /// The flight advanced and wrote a new pose.
    Running,
    /// The flight finished this frame; the camera snapped to the exact
    /// final pose.
    Settled,
}

struct Flight {
    trajectory: Trajectory,
    progress: f32,
    handle: FlightHandle,
}

/// Advances the active trajectory over time and writes poses into the host
/// camera. The host's render loop calls `step` once per frame.
pub struct AnimationDriver {
    flight: Option<Flight>,
    issued: u64,
    progress_step: f32,
    look_at_lead: f32,
    easing: Easing,
}

impl AnimationDriver {
    /// `progress_step` is clamped to a sane per-frame range so a bad config
    /// can neither freeze a flight nor skip it entirely.
    pub fn new(progress_step: f32, look_at_lead: f32, easing: Easing) -> Self {
        AnimationDriver {
            flight: None,
            issued: 0,
            progress_step: progress_step.clamp(1e-4, 1.0),
            look_at_lead: look_at_lead.max(1.0),
            easing,
        }
    }

    /// Start a new flight, revoking any in-flight one first. The returned
    /// handle identifies the scheduled continuation; it dies with the flight.
    pub fn begin(&mut self, trajectory: Trajectory) -> FlightHandle {
        self.issued += 1;
        let handle = FlightHandle::new(self.issued);
        self.flight = Some(Flight {
            trajectory,
            progress: 0.0,
            handle,
        });
        handle
    }

    /// Revoke the active flight. Returns whether one was in flight.
    pub fn cancel(&mut self) -> bool {
        self.flight.take().is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.flight.is_some()
    }

    pub fn active_handle(&self) -> Option<FlightHandle> {
        self.flight.as_ref().map(|f| f.handle)
    }

    /// Advance the active flight by one frame.
    pub fn step(&mut self, camera: &mut CameraPose) -> FrameOutcome {
        match self.active_handle() {
            Some(handle) => self.step_flight(handle, camera),
            None => FrameOutcome::Idle,
        }
    }

    /// Advance the flight identified by `handle`. A stale handle belongs to a
    /// revoked continuation: the camera is left untouched.
    pub fn step_flight(&mut self, handle: FlightHandle, camera: &mut CameraPose) -> FrameOutcome {
        let Some(flight) = self.flight.as_mut() else {
            return FrameOutcome::Idle;
        };
        if flight.handle != handle {
            return FrameOutcome::Idle;
        }

        flight.progress += self.progress_step;
        if flight.progress <= 1.0 {
            let eased = self.easing.apply(flight.progress);
            camera.position = flight.trajectory.position_at(eased);

            // The gaze runs ahead of the position so the camera settles on
            // the target before it arrives.
            let gaze = self.easing.apply((flight.progress * self.look_at_lead).min(1.0));
            camera.look_at = flight.trajectory.look_target_at(gaze);
            FrameOutcome::Running
        } else {
            *camera = flight.trajectory.end_pose();
            self.flight = None;
            FrameOutcome::Settled
        }
    }
}

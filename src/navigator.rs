// Scroll and direct navigation converge here. One Navigator owns the section
// table, the authoritative current index, and the animation driver; the
// camera itself stays with the rendering host and is passed in by reference,
// never reached through a global.
// See README: Flight Rules

use glam::Vec3;

use crate::driver::{AnimationDriver, FrameOutcome};
use crate::error::NavError;
use crate::trajectory::plan_flight;
use crate::types::{CameraPose, FlightHandle, NavigatorSettings, SectionDescriptor, SectionIndex};

/// Vertical offset of the resting pose above the origin body's plane.
const RESTING_HEIGHT: f32 = 5.0;

/// What a navigation request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// A new flight toward the target began.
    Started(FlightHandle),
    /// Already at (or flying to) the target; nothing was restarted.
    Redundant,
}

/// Maps the two input channels (continuous scroll, discrete section
/// requests) onto camera flights.
pub struct Navigator {
    sections: Vec<SectionDescriptor>,
    settings: NavigatorSettings,
    current: usize,
    mobile: bool,
    driver: AnimationDriver,
}

impl Navigator {
    pub fn new(
        sections: Vec<SectionDescriptor>,
        settings: NavigatorSettings,
    ) -> Result<Self, NavError> {
        if sections.is_empty() {
            return Err(NavError::EmptySectionTable);
        }
        let driver = AnimationDriver::new(
            settings.progress_step,
            settings.look_at_lead,
            settings.easing,
        );
        Ok(Navigator {
            sections,
            settings,
            current: 0,
            mobile: false,
            driver,
        })
    }

    /// Resting pose framing the origin section. The host places the camera
    /// here on mount; the initial view is never animated into.
    pub fn resting_pose(&self) -> CameraPose {
        let origin = &self.sections[0];
        let d = origin.framing_distance(self.mobile);
        let position = Vec3::new(
            origin.position.x - d,
            origin.position.y + RESTING_HEIGHT,
            origin.position.z + d,
        );
        CameraPose::new(position, origin.position)
    }

    /// Narrow viewports switch to the mobile framing distances.
    pub fn set_viewport_width(&mut self, width: f32) {
        self.mobile = width <= self.settings.mobile_breakpoint;
    }

    pub fn is_mobile(&self) -> bool {
        self.mobile
    }

    /// The authoritative section index. Updated optimistically: it reads as
    /// the target the moment a navigation is accepted, before arrival.
    pub fn current_section(&self) -> SectionIndex {
        SectionIndex::new(self.current as u32)
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn sections(&self) -> &[SectionDescriptor] {
        &self.sections
    }

    pub fn is_animating(&self) -> bool {
        self.driver.is_animating()
    }

    pub fn active_flight(&self) -> Option<FlightHandle> {
        self.driver.active_handle()
    }

    /// Height the host should give its scroll container: one viewport per
    /// section, so the scroll channel and the table agree on the mapping.
    pub fn scroll_extent(&self, viewport_height: f32) -> f32 {
        self.sections.len() as f32 * viewport_height
    }

    /// Scroll channel. Derives the target from how many viewports have been
    /// scrolled past, clamped to the table; only an index *change* triggers
    /// a flight, so repeated scroll events inside one section are free.
    pub fn handle_scroll(
        &mut self,
        scroll_y: f32,
        viewport_height: f32,
        camera: &CameraPose,
    ) -> Result<NavOutcome, NavError> {
        if !viewport_height.is_finite() || viewport_height <= 0.0 {
            return Err(NavError::InvalidViewport {
                height: viewport_height,
            });
        }
        let crossed = (scroll_y.max(0.0) / viewport_height).floor() as usize;
        let target = crossed.min(self.sections.len() - 1);
        if target == self.current {
            return Ok(NavOutcome::Redundant);
        }
        self.navigate_to(SectionIndex::new(target as u32), camera)
    }

    /// Single entry point for both channels. Validates the target, updates
    /// the authoritative index immediately, revokes any in-flight animation,
    /// and plans a new flight from the live camera position, not from the
    /// previous flight's destination.
    pub fn navigate_to(
        &mut self,
        target: SectionIndex,
        camera: &CameraPose,
    ) -> Result<NavOutcome, NavError> {
        let idx = target.as_usize();
        if idx >= self.sections.len() {
            return Err(NavError::SectionOutOfRange {
                index: target.as_u32(),
                count: self.sections.len(),
            });
        }
        if idx == self.current {
            return Ok(NavOutcome::Redundant);
        }

        let previous = self.current;
        self.current = idx;
        let trajectory = plan_flight(
            camera.position,
            &self.sections[previous],
            &self.sections[idx],
            self.mobile,
            self.settings.control_height,
        );
        Ok(NavOutcome::Started(self.driver.begin(trajectory)))
    }

    /// Step one section back. A press at the first section is a no-op.
    pub fn navigate_previous(&mut self, camera: &CameraPose) -> Result<NavOutcome, NavError> {
        if self.current == 0 {
            return Ok(NavOutcome::Redundant);
        }
        self.navigate_to(SectionIndex::new(self.current as u32 - 1), camera)
    }

    /// Step one section forward. A press at the last section is a no-op.
    pub fn navigate_next(&mut self, camera: &CameraPose) -> Result<NavOutcome, NavError> {
        if self.current + 1 >= self.sections.len() {
            return Ok(NavOutcome::Redundant);
        }
        self.navigate_to(SectionIndex::new(self.current as u32 + 1), camera)
    }

    /// Advance the active flight by one frame, writing the new pose into the
    /// host camera.
    pub fn advance_frame(&mut self, camera: &mut CameraPose) -> FrameOutcome {
        self.driver.step(camera)
    }

    /// Revoke the active flight. The host calls this on teardown so a
    /// scheduled frame can never write into a camera that no longer exists.
    pub fn cancel(&mut self) -> bool {
        self.driver.cancel()
    }
}

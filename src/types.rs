// Strong typing over raw floats. Newtypes for section indices and flight handles.
// See README: Rust Rules (Engine)

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::ease::Easing;

/// Position of a section in the ordered table. Newtype for type safety.
/// Index 0 is always the origin body (the resting viewpoint).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct SectionIndex(u32);

impl SectionIndex {
    pub fn new(index: u32) -> Self {
        SectionIndex(index)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

/// Identity of one camera flight. Handed out when a flight begins; a frame
/// step presented with a stale handle is a revoked continuation and does
/// nothing. Newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightHandle(u64);

impl FlightHandle {
    pub fn new(id: u64) -> Self {
        FlightHandle(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// One navigable body in the scene. Immutable once the table is built;
/// the index is the slice position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionDescriptor {
    /// Body center in world space.
    pub position: Vec3,
    /// Scalar radius, used to derive the default framing distance.
    pub size: f32,
    /// Explicit framing distance, overriding the size-derived default.
    pub view_offset: Option<f32>,
    /// Framing distance on narrow viewports. Falls back to `view_offset`.
    pub mobile_view_offset: Option<f32>,
}

impl SectionDescriptor {
    pub fn new(position: Vec3, size: f32) -> Self {
        SectionDescriptor {
            position,
            size,
            view_offset: None,
            mobile_view_offset: None,
        }
    }

    /// Distance the camera stands off from the body center when fully
    /// arrived. Smaller bodies are framed closer, floored so the camera
    /// never sits inside the body.
    pub fn framing_distance(&self, mobile: bool) -> f32 {
        if mobile {
            if let Some(d) = self.mobile_view_offset {
                return d;
            }
        }
        self.view_offset
            .unwrap_or_else(|| (30.0 - self.size * 2.0).max(20.0))
    }
}

/// Camera position plus the world point the orientation is aimed at.
/// Owned by the rendering host; the engine only reads and writes it through
/// an explicitly passed reference.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl CameraPose {
    pub fn new(position: Vec3, look_at: Vec3) -> Self {
        CameraPose { position, look_at }
    }
}

/// Flight behavior settings, supplied from JS.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigatorSettings {
    /// Progress added per rendered frame (0.008 is ~2s at 60fps).
    #[serde(default = "default_progress_step")]
    pub progress_step: f32,
    /// Look-at progress multiplier: the gaze settles on the target slightly
    /// before the camera arrives.
    #[serde(default = "default_look_at_lead")]
    pub look_at_lead: f32,
    /// Vertical lift applied to the Bézier control points (world units).
    #[serde(default = "default_control_height")]
    pub control_height: f32,
    /// Viewport widths at or below this use the mobile framing distances.
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint: f32,
    /// Easing curve for flight progress.
    #[serde(default)]
    pub easing: Easing,
}

fn default_progress_step() -> f32 {
    0.008
}

fn default_look_at_lead() -> f32 {
    1.2
}

fn default_control_height() -> f32 {
    15.0
}

fn default_mobile_breakpoint() -> f32 {
    768.0
}

impl Default for NavigatorSettings {
    fn default() -> Self {
        NavigatorSettings {
            progress_step: default_progress_step(),
            look_at_lead: default_look_at_lead(),
            control_height: default_control_height(),
            mobile_breakpoint: default_mobile_breakpoint(),
            easing: Easing::default(),
        }
    }
}

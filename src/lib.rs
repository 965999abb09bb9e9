// nav_core: camera navigation engine for a scroll-driven solar-system site.
// See README for architecture rules. All motion decisions live here; JS is
// plumbing: it forwards scroll/click/resize input and copies the pose onto
// the real three.js camera each frame.

mod driver;
mod ease;
mod error;
mod navigator;
mod trajectory;
mod types;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

pub use driver::{AnimationDriver, FrameOutcome};
pub use ease::Easing;
pub use error::NavError;
pub use navigator::{NavOutcome, Navigator};
pub use trajectory::{plan_flight, Trajectory};
pub use types::{
    CameraPose, FlightHandle, NavigatorSettings, SectionDescriptor, SectionIndex,
};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// JSON wire shape for one section. Presentation fields in the host's table
/// (name, color, copy, textures) are ignored; the engine consumes geometry
/// only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionConfig {
    /// Body center in world space.
    pub position: [f32; 3],
    /// Scalar radius.
    pub size: f32,
    /// Explicit framing distance.
    #[serde(default)]
    pub view_offset: Option<f32>,
    /// Framing distance on narrow viewports.
    #[serde(default)]
    pub mobile_view_offset: Option<f32>,
}

impl From<&SectionConfig> for SectionDescriptor {
    fn from(config: &SectionConfig) -> Self {
        SectionDescriptor {
            position: Vec3::from(config.position),
            size: config.size,
            view_offset: config.view_offset,
            mobile_view_offset: config.mobile_view_offset,
        }
    }
}

/// Complete setup payload passed from JS.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    pub sections: Vec<SectionConfig>,
    #[serde(default)]
    pub settings: NavigatorSettings,
    #[serde(default = "default_viewport_width")]
    pub viewport_width: f32,
}

fn default_viewport_width() -> f32 {
    1920.0
}

/// Camera pose snapshot handed back to JS.
/// `{ position: [x, y, z], look_at: [x, y, z] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoseSnapshot {
    pub position: [f32; 3],
    pub look_at: [f32; 3],
}

impl From<&CameraPose> for PoseSnapshot {
    fn from(pose: &CameraPose) -> Self {
        PoseSnapshot {
            position: pose.position.to_array(),
            look_at: pose.look_at.to_array(),
        }
    }
}

/// Main engine interface exposed to JavaScript. Owns a mirror of the camera
/// pose; the host reads it after every call that reports movement and copies
/// it onto the real camera.
#[wasm_bindgen]
pub struct SceneNavigator {
    navigator: Navigator,
    camera: CameraPose,
}

#[wasm_bindgen]
impl SceneNavigator {
    /// Build the engine from a JSON `SceneConfig` and place the camera at
    /// the resting pose for section 0.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<SceneNavigator, JsValue> {
        let config: SceneConfig = serde_json::from_str(config_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;

        let sections = config.sections.iter().map(SectionDescriptor::from).collect();
        let mut navigator = Navigator::new(sections, config.settings)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        navigator.set_viewport_width(config.viewport_width);

        let camera = navigator.resting_pose();
        Ok(SceneNavigator { navigator, camera })
    }

    /// Current camera pose as JSON for the host to apply.
    pub fn camera_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&PoseSnapshot::from(&self.camera))
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Advance one frame. Returns `true` while a flight is writing poses;
    /// once it returns `false` the camera has settled.
    pub fn advance_frame(&mut self) -> bool {
        self.navigator.advance_frame(&mut self.camera) != FrameOutcome::Idle
    }

    /// Scroll channel. Returns `true` when the scroll crossed into a new
    /// section and a flight started. Degenerate viewport geometry is
    /// dropped without moving the camera.
    pub fn on_scroll(&mut self, scroll_y: f32, viewport_height: f32) -> bool {
        matches!(
            self.navigator.handle_scroll(scroll_y, viewport_height, &self.camera),
            Ok(NavOutcome::Started(_))
        )
    }

    /// Direct-navigation channel (control panel buttons). Out-of-range and
    /// redundant requests are dropped without moving the camera.
    pub fn navigate_to(&mut self, index: u32) -> bool {
        matches!(
            self.navigator.navigate_to(SectionIndex::new(index), &self.camera),
            Ok(NavOutcome::Started(_))
        )
    }

    /// PREV button: one section back, clamped at the first section.
    pub fn navigate_previous(&mut self) -> bool {
        matches!(
            self.navigator.navigate_previous(&self.camera),
            Ok(NavOutcome::Started(_))
        )
    }

    /// NEXT button: one section forward, clamped at the last section.
    pub fn navigate_next(&mut self) -> bool {
        matches!(
            self.navigator.navigate_next(&self.camera),
            Ok(NavOutcome::Started(_))
        )
    }

    /// The authoritative section index (optimistic during flights). The host
    /// uses it to highlight the active control and show section content.
    pub fn current_section(&self) -> u32 {
        self.navigator.current_section().as_u32()
    }

    pub fn section_count(&self) -> u32 {
        self.navigator.section_count() as u32
    }

    pub fn is_animating(&self) -> bool {
        self.navigator.is_animating()
    }

    /// Resize channel; switches mobile framing at the configured breakpoint.
    pub fn set_viewport_width(&mut self, width: f32) {
        self.navigator.set_viewport_width(width);
    }

    /// Scroll container height for the host: one viewport per section.
    pub fn scroll_extent(&self, viewport_height: f32) -> f32 {
        self.navigator.scroll_extent(viewport_height)
    }

    /// Revoke any in-flight animation. The host calls this before tearing
    /// down the canvas so no scheduled frame outlives the camera.
    pub fn dispose(&mut self) {
        self.navigator.cancel();
    }
}

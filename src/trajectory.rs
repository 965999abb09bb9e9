// Flight path construction. One cubic Bézier per transition, approaching the
// target roughly head-on so the camera never spins past the body or clips
// through intervening orbits the way a straight lerp would.
// See README: Flight Rules

use glam::Vec3;

use crate::types::{CameraPose, SectionDescriptor};

/// Fraction of the start→target distance used to reach the control points.
const CONTROL_REACH: f32 = 0.25;

/// The computed path for one navigation transition: a cubic Bézier for the
/// camera position plus look-at interpolation endpoints. Built fresh per
/// transition and never mutated; progress lives in the driver.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    p0: Vec3,
    p1: Vec3,
    p2: Vec3,
    p3: Vec3,
    look_from: Vec3,
    look_to: Vec3,
}

impl Trajectory {
    /// Sample the camera position at eased parameter `t` in [0,1].
    pub fn position_at(&self, t: f32) -> Vec3 {
        let u = 1.0 - t;
        self.p0 * (u * u * u)
            + self.p1 * (3.0 * u * u * t)
            + self.p2 * (3.0 * u * t * t)
            + self.p3 * (t * t * t)
    }

    /// Sample the look-at target at eased parameter `t` in [0,1].
    pub fn look_target_at(&self, t: f32) -> Vec3 {
        self.look_from.lerp(self.look_to, t)
    }

    /// Exact final pose. The driver snaps here on completion so accumulated
    /// floating-point drift never leaks into the resting view.
    pub fn end_pose(&self) -> CameraPose {
        CameraPose::new(self.p3, self.look_to)
    }
}

/// Build the flight path from the live camera position to a framed view of
/// `target`. The gaze pivots from the previous section's center to the
/// target's center while the position follows the curve.
///
/// A start position coinciding with the target center has no defined
/// approach direction; the path degenerates to a single point instead of
/// dividing by zero.
pub fn plan_flight(
    start: Vec3,
    previous: &SectionDescriptor,
    target: &SectionDescriptor,
    mobile: bool,
    control_height: f32,
) -> Trajectory {
    let target_center = target.position;
    let look_from = previous.position;

    let offset = target_center - start;
    let Some(direction) = offset.try_normalize() else {
        return Trajectory {
            p0: start,
            p1: start,
            p2: start,
            p3: start,
            look_from,
            look_to: target_center,
        };
    };

    let distance = offset.length();
    let framing = target.framing_distance(mobile);
    let reach = distance * CONTROL_REACH;

    // Control points push out along the approach direction in the orbital
    // plane, lifted to a fixed height: the path bows level rather than
    // swooping vertically.
    let p1 = start + Vec3::new(direction.x * reach, control_height, direction.z * reach);
    let p2 = target_center + Vec3::new(-direction.x * reach, control_height, -direction.z * reach);

    Trajectory {
        p0: start,
        p1,
        p2,
        p3: target_center - direction * framing,
        look_from,
        look_to: target_center,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn section_at(x: f32, y: f32, z: f32, size: f32) -> SectionDescriptor {
        SectionDescriptor::new(Vec3::new(x, y, z), size)
    }

    #[test]
    fn curve_starts_at_camera_and_ends_standing_off() {
        let previous = section_at(0.0, 0.0, 0.0, 20.0);
        let mut target = section_at(0.0, 0.0, 200.0, 5.0);
        target.view_offset = Some(10.0);

        let start = Vec3::new(-50.0, 0.0, 50.0);
        let path = plan_flight(start, &previous, &target, false, 15.0);

        assert!((path.position_at(0.0) - start).length() < 1e-4);

        let end = path.position_at(1.0);
        let standoff = (end - target.position).length();
        assert!((standoff - 10.0).abs() < 1e-3, "standoff was {standoff}");
    }

    #[test]
    fn end_point_lies_on_approach_line() {
        let previous = section_at(0.0, 0.0, 0.0, 20.0);
        let target = section_at(300.0, 0.0, 400.0, 3.0);

        let start = Vec3::new(0.0, 0.0, 0.0);
        let path = plan_flight(start, &previous, &target, false, 15.0);

        // Approach direction is (0.6, 0, 0.8); size 3 gives framing 24.
        let expected = target.position - Vec3::new(0.6, 0.0, 0.8) * 24.0;
        assert!((path.end_pose().position - expected).length() < 1e-3);
    }

    #[test]
    fn mobile_flag_switches_framing_distance() {
        let previous = section_at(0.0, 0.0, 0.0, 20.0);
        let mut target = section_at(100.0, 0.0, 0.0, 4.0);
        target.view_offset = Some(10.0);
        target.mobile_view_offset = Some(13.0);

        let start = Vec3::ZERO;
        let desktop = plan_flight(start, &previous, &target, false, 15.0);
        let mobile = plan_flight(start, &previous, &target, true, 15.0);

        assert!((desktop.end_pose().position.x - 90.0).abs() < 1e-4);
        assert!((mobile.end_pose().position.x - 87.0).abs() < 1e-4);
    }

    #[test]
    fn control_points_are_lifted_not_arced() {
        let previous = section_at(0.0, 0.0, 0.0, 20.0);
        let target = section_at(0.0, 0.0, 1000.0, 5.0);

        let start = Vec3::new(0.0, 0.0, -1000.0);
        let path = plan_flight(start, &previous, &target, false, 15.0);

        assert!((path.p1.y - 15.0).abs() < 1e-4);
        assert!((path.p2.y - 15.0).abs() < 1e-4);
        // Reach is a quarter of the 2000-unit span.
        assert!((path.p1.z - (-1000.0 + 500.0)).abs() < 1e-3);
        assert!((path.p2.z - (1000.0 - 500.0)).abs() < 1e-3);
    }

    #[test]
    fn coincident_start_degenerates_to_single_point() {
        let previous = section_at(0.0, 0.0, 0.0, 20.0);
        let target = section_at(100.0, 0.0, 0.0, 4.0);

        let path = plan_flight(target.position, &previous, &target, false, 15.0);
        for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_eq!(path.position_at(t), target.position);
        }
        assert_eq!(path.end_pose().look_at, target.position);
    }

    #[test]
    fn look_target_pivots_between_section_centers() {
        let previous = section_at(-40.0, 0.0, 0.0, 8.0);
        let target = section_at(60.0, 0.0, 0.0, 4.0);

        let path = plan_flight(Vec3::new(0.0, 5.0, 0.0), &previous, &target, false, 15.0);
        assert_eq!(path.look_target_at(0.0), previous.position);
        assert_eq!(path.look_target_at(1.0), target.position);
        assert_eq!(path.look_target_at(0.5), Vec3::new(10.0, 0.0, 0.0));
    }

    proptest! {
        /// The end point sits at exactly the framing distance from the target
        /// center, along the start→target line.
        #[test]
        fn standoff_distance_is_framing_distance(
            sx in -5000.0f32..5000.0,
            sy in -50.0f32..50.0,
            sz in -5000.0f32..5000.0,
            tx in -5000.0f32..5000.0,
            tz in -5000.0f32..5000.0,
            size in 1.0f32..20.0,
        ) {
            let start = Vec3::new(sx, sy, sz);
            let previous = section_at(0.0, 0.0, 0.0, 20.0);
            let target = section_at(tx, 0.0, tz, size);
            prop_assume!((target.position - start).length() > 1.0);

            let path = plan_flight(start, &previous, &target, false, 15.0);
            let framing = target.framing_distance(false);
            let standoff = (path.end_pose().position - target.position).length();
            prop_assert!(
                (standoff - framing).abs() < framing * 1e-4 + 1e-3,
                "standoff {} vs framing {}", standoff, framing
            );

            // And the end point is on the approach line through the center.
            let direction = (target.position - start).normalize();
            let reconstructed = target.position - direction * framing;
            prop_assert!((path.end_pose().position - reconstructed).length() < 1e-2);
        }

        /// Sampling anywhere on [0,1] stays finite.
        #[test]
        fn sampled_positions_are_finite(
            sx in -5000.0f32..5000.0,
            sz in -5000.0f32..5000.0,
            tx in -5000.0f32..5000.0,
            tz in -5000.0f32..5000.0,
            t in 0.0f32..=1.0,
        ) {
            let previous = section_at(0.0, 0.0, 0.0, 20.0);
            let target = section_at(tx, 0.0, tz, 4.0);
            let path = plan_flight(Vec3::new(sx, 5.0, sz), &previous, &target, false, 15.0);
            prop_assert!(path.position_at(t).is_finite());
            prop_assert!(path.look_target_at(t).is_finite());
        }
    }
}

//! Continuous rotation and zoom applied once per tick

use crate::config::ZoomMode;
use crate::item::{Item, Viewpoint};
use crate::math::{distance, rotate_about_world_axis, try_normalize, Vec3};

/// Which way a zoom moves relative to the viewpoint
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Shrink the item-to-viewpoint distance
    In,
    /// Grow the item-to-viewpoint distance
    Out,
}

/// Current rotation request
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationState {
    /// World-space axis exactly as requested
    pub axis: Vec3,
    pub enabled: bool,
}

impl Default for RotationState {
    fn default() -> Self {
        Self {
            axis: Vec3::zeros(),
            enabled: false,
        }
    }
}

/// Current zoom request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZoomState {
    pub enabled: bool,
    pub direction: ZoomDirection,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            enabled: false,
            direction: ZoomDirection::In,
        }
    }
}

/// Rotation and zoom state, captured as a unit across transitions
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContinuousOperations {
    pub rotation: RotationState,
    pub zoom: ZoomState,
}

impl ContinuousOperations {
    pub fn start_rotation(&mut self, axis: Vec3) {
        self.rotation = RotationState {
            axis,
            enabled: true,
        };
    }

    pub fn stop_rotation(&mut self) {
        self.rotation = RotationState::default();
    }

    /// Start zooming; replaces any zoom already running
    pub fn start_zoom(&mut self, direction: ZoomDirection) {
        self.zoom = ZoomState {
            enabled: true,
            direction,
        };
    }

    pub fn stop_zoom(&mut self) {
        self.zoom.enabled = false;
    }

    #[inline]
    pub fn is_rotating(&self) -> bool {
        self.rotation.enabled
    }

    #[inline]
    pub fn is_zooming(&self) -> bool {
        self.zoom.enabled
    }

    /// Snapshot the current state and clear it
    pub fn suspend(&mut self) -> ContinuousOperations {
        let saved = *self;
        self.stop_rotation();
        self.stop_zoom();
        saved
    }

    /// Re-apply whatever was enabled in `saved`
    pub fn resume(&mut self, saved: ContinuousOperations) {
        if saved.rotation.enabled {
            self.start_rotation(saved.rotation.axis);
        }
        if saved.zoom.enabled {
            self.start_zoom(saved.zoom.direction);
        }
    }
}

/// Speeds and bounds used by [`ContinuousOperations::apply`]
#[derive(Clone, Copy, Debug)]
pub struct OperationParams {
    /// Degrees per second
    pub rotation_speed: f64,
    /// Units per second
    pub zoom_speed: f64,
    /// `(min, max)` distance, or `None` when zoom is disabled
    pub zoom_range: Option<(f64, f64)>,
    pub zoom_mode: ZoomMode,
}

impl ContinuousOperations {
    /// Apply rotation, then zoom, to the active item for one tick
    ///
    /// Returns true if anything moved.
    pub fn apply(
        &self,
        item: &mut Item,
        viewpoint: &mut Viewpoint,
        params: &OperationParams,
        dt: f64,
    ) -> bool {
        let mut changed = false;
        if self.rotation.enabled {
            changed |= rotate(item, &self.rotation.axis, params.rotation_speed, dt);
        }
        if self.zoom.enabled {
            if let Some(range) = params.zoom_range {
                changed |= zoom(
                    params.zoom_mode,
                    item,
                    viewpoint,
                    params.zoom_speed,
                    dt,
                    self.zoom.direction,
                    range,
                );
            }
        }
        changed
    }
}

/// Rotate `item` about the world-space `axis` by `speed * dt` degrees
///
/// Returns false for a zero axis or a zero step.
pub fn rotate(item: &mut Item, axis: &Vec3, speed_deg_per_sec: f64, dt: f64) -> bool {
    let degrees = speed_deg_per_sec * dt;
    if degrees == 0.0 || !degrees.is_finite() || try_normalize(axis).is_none() {
        return false;
    }
    item.orientation = rotate_about_world_axis(&item.orientation, axis, degrees);
    true
}

/// Move the item or the viewpoint one zoom step along the line between them
///
/// The step is committed only if the resulting distance stays strictly above
/// `min` when zooming in, or strictly below `max` when zooming out; otherwise
/// the whole step is discarded and the distance stays where it was. Returns
/// true if the step was committed.
pub fn zoom(
    mode: ZoomMode,
    item: &mut Item,
    viewpoint: &mut Viewpoint,
    speed: f64,
    dt: f64,
    direction: ZoomDirection,
    (min, max): (f64, f64),
) -> bool {
    let step = speed * dt;
    if step <= 0.0 || !step.is_finite() {
        return false;
    }
    let Some(item_to_view) = try_normalize(&(viewpoint.position - item.position)) else {
        return false;
    };

    let proposed = match (mode, direction) {
        (ZoomMode::MoveItem, ZoomDirection::In) => item.position + item_to_view * step,
        (ZoomMode::MoveItem, ZoomDirection::Out) => item.position - item_to_view * step,
        (ZoomMode::MoveViewpoint, ZoomDirection::In) => viewpoint.position - item_to_view * step,
        (ZoomMode::MoveViewpoint, ZoomDirection::Out) => viewpoint.position + item_to_view * step,
    };
    let resulting = match mode {
        ZoomMode::MoveItem => distance(&proposed, &viewpoint.position),
        ZoomMode::MoveViewpoint => distance(&item.position, &proposed),
    };
    let allowed = match direction {
        ZoomDirection::In => resulting > min,
        ZoomDirection::Out => resulting < max,
    };
    if !allowed {
        return false;
    }

    match mode {
        ZoomMode::MoveItem => item.position = proposed,
        ZoomMode::MoveViewpoint => viewpoint.position = proposed,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Quat;

    fn setup(item_z: f64) -> (Item, Viewpoint) {
        (
            Item::at("a", Vec3::new(0.0, 0.0, item_z)),
            Viewpoint::default(),
        )
    }

    fn gap(item: &Item, view: &Viewpoint) -> f64 {
        distance(&item.position, &view.position)
    }

    #[test]
    fn test_rotate_speed() {
        let (mut item, _) = setup(-3.0);
        assert!(rotate(&mut item, &Vec3::y(), 90.0, 0.5));
        assert!((item.orientation.angle() - 45f64.to_radians()).abs() < 1e-9);
    }

    #[test]
    fn test_rotate_zero_axis_is_noop() {
        let (mut item, _) = setup(-3.0);
        assert!(!rotate(&mut item, &Vec3::zeros(), 90.0, 1.0));
        assert_eq!(item.orientation, Quat::identity());
    }

    #[test]
    fn test_zoom_in_moves_item_closer() {
        let (mut item, mut view) = setup(-3.0);
        assert!(zoom(ZoomMode::MoveItem, &mut item, &mut view, 2.0, 0.25, ZoomDirection::In, (1.0, 10.0)));
        assert!((gap(&item, &view) - 2.5).abs() < 1e-9);
        assert_eq!(view.position, Vec3::zeros());
    }

    #[test]
    fn test_zoom_out_moves_viewpoint_back() {
        let (mut item, mut view) = setup(-3.0);
        assert!(zoom(ZoomMode::MoveViewpoint, &mut item, &mut view, 2.0, 0.5, ZoomDirection::Out, (1.0, 10.0)));
        assert!((gap(&item, &view) - 4.0).abs() < 1e-9);
        assert!((view.position - Vec3::new(0.0, 0.0, 1.0)).norm() < 1e-9);
        assert_eq!(item.position, Vec3::new(0.0, 0.0, -3.0));
    }

    #[test]
    fn test_zoom_step_crossing_bound_is_discarded() {
        // 1.5 away, a 1.0 step would land at 0.5 < min
        let (mut item, mut view) = setup(-1.5);
        assert!(!zoom(ZoomMode::MoveItem, &mut item, &mut view, 1.0, 1.0, ZoomDirection::In, (1.0, 10.0)));
        assert!((gap(&item, &view) - 1.5).abs() < 1e-9);

        // Landing exactly on the bound is rejected as well
        assert!(!zoom(ZoomMode::MoveItem, &mut item, &mut view, 0.5, 1.0, ZoomDirection::In, (1.0, 10.0)));
        assert!((gap(&item, &view) - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_out_respects_max() {
        let (mut item, mut view) = setup(-9.5);
        assert!(!zoom(ZoomMode::MoveViewpoint, &mut item, &mut view, 1.0, 1.0, ZoomDirection::Out, (1.0, 10.0)));
        assert!((gap(&item, &view) - 9.5).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_with_coincident_positions_is_noop() {
        let (mut item, mut view) = setup(0.0);
        assert!(!zoom(ZoomMode::MoveItem, &mut item, &mut view, 1.0, 1.0, ZoomDirection::Out, (0.0, 10.0)));
        assert_eq!(item.position, Vec3::zeros());
    }

    #[test]
    fn test_start_zoom_replaces_direction() {
        let mut ops = ContinuousOperations::default();
        ops.start_zoom(ZoomDirection::In);
        ops.start_zoom(ZoomDirection::Out);
        assert!(ops.is_zooming());
        assert_eq!(ops.zoom.direction, ZoomDirection::Out);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut ops = ContinuousOperations::default();
        let before = ops;
        ops.stop_rotation();
        ops.stop_zoom();
        assert_eq!(ops, before);
    }

    #[test]
    fn test_suspend_and_resume() {
        let mut ops = ContinuousOperations::default();
        let axis = Vec3::new(0.0, -1.0, 0.0);
        ops.start_rotation(axis);
        ops.start_zoom(ZoomDirection::Out);

        let saved = ops.suspend();
        assert!(!ops.is_rotating());
        assert!(!ops.is_zooming());
        assert_eq!(ops.rotation.axis, Vec3::zeros());

        ops.resume(saved);
        assert_eq!(ops.rotation.axis, axis);
        assert!(ops.is_rotating());
        assert_eq!(ops.zoom.direction, ZoomDirection::Out);
    }

    #[test]
    fn test_apply_without_zoom_range_only_rotates() {
        let (mut item, mut view) = setup(-3.0);
        let mut ops = ContinuousOperations::default();
        ops.start_rotation(Vec3::x());
        ops.start_zoom(ZoomDirection::In);
        let params = OperationParams {
            rotation_speed: 90.0,
            zoom_speed: 2.0,
            zoom_range: None,
            zoom_mode: ZoomMode::MoveItem,
        };
        assert!(ops.apply(&mut item, &mut view, &params, 0.1));
        assert!((gap(&item, &view) - 3.0).abs() < 1e-9);
        assert!(item.orientation.angle() > 0.0);
    }
}

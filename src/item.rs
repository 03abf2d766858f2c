//! Carousel items and the viewpoint they are shown to

use crate::math::{try_normalize, world_up, Quat, Vec3};

/// One displayable object in the carousel
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    /// Identifier supplied by the caller
    pub id: String,
    /// World-space position
    pub position: Vec3,
    /// World-space orientation
    pub orientation: Quat,
    /// Whether the renderer should draw this item
    pub visible: bool,
}

impl Item {
    /// Create a hidden item at the origin
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            position: Vec3::zeros(),
            orientation: Quat::identity(),
            visible: false,
        }
    }

    /// Create a hidden item at a given position
    pub fn at(id: impl Into<String>, position: Vec3) -> Self {
        Self {
            position,
            ..Self::new(id)
        }
    }
}

/// Observation point the carousel is presented to
///
/// `forward` is always unit length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewpoint {
    pub position: Vec3,
    forward: Vec3,
}

impl Default for Viewpoint {
    /// Origin, looking down -Z
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            forward: -Vec3::z(),
        }
    }
}

impl Viewpoint {
    /// Create a viewpoint; a zero `forward` falls back to -Z
    pub fn new(position: Vec3, forward: Vec3) -> Self {
        Self {
            position,
            forward: try_normalize(&forward).unwrap_or(-Vec3::z()),
        }
    }

    /// Unit viewing direction
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    /// Unit vector pointing to the right of the view
    ///
    /// Uses world +X when looking straight up or down.
    pub fn right(&self) -> Vec3 {
        try_normalize(&self.forward.cross(&world_up())).unwrap_or_else(Vec3::x)
    }

    /// Unit vector pointing up in the view
    pub fn up(&self) -> Vec3 {
        self.right().cross(&self.forward)
    }

    /// Express a world point in view space as `(right, up, depth)`
    pub fn to_view_space(&self, point: &Vec3) -> Vec3 {
        let relative = point - self.position;
        Vec3::new(
            relative.dot(&self.right()),
            relative.dot(&self.up()),
            relative.dot(&self.forward),
        )
    }
}

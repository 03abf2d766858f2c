//! Carousel configuration

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::error::{CarouselError, Result};

/// Which entity a zoom moves
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoomMode {
    /// The active item slides along the line toward/away from the viewpoint
    #[default]
    MoveItem,
    /// The viewpoint slides toward/away from the fixed active item
    MoveViewpoint,
}

impl fmt::Display for ZoomMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ZoomMode::MoveItem => f.write_str("item"),
            ZoomMode::MoveViewpoint => f.write_str("viewpoint"),
        }
    }
}

impl FromStr for ZoomMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "item" | "move_item" => Ok(ZoomMode::MoveItem),
            "viewpoint" | "camera" | "move_viewpoint" => Ok(ZoomMode::MoveViewpoint),
            other => Err(format!("unknown zoom mode '{other}' (expected 'item' or 'viewpoint')")),
        }
    }
}

/// Tunables for rotation, zoom and transitions
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Rotation speed in degrees per second
    pub rotation_speed: f64,
    /// Zoom speed in units per second
    pub zoom_speed: f64,
    /// Zooming in stops before the distance drops to this value
    pub min_distance: f64,
    /// Zooming out stops before the distance reaches this value
    pub max_distance: f64,
    /// Distance from the viewpoint at which the active item is placed
    pub initial_distance: f64,
    /// Slide transition length in seconds
    pub transition_duration: f64,
    /// Lateral distance the items slide during a transition
    pub transition_offset: f64,
    /// Progress curve for slide transitions
    pub easing: Easing,
    /// Entity moved by zoom
    pub zoom_mode: ZoomMode,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            rotation_speed: 90.0,
            zoom_speed: 2.0,
            min_distance: 1.0,
            max_distance: 10.0,
            initial_distance: 3.0,
            transition_duration: 1.0,
            transition_offset: 5.0,
            easing: Easing::EaseInOut,
            zoom_mode: ZoomMode::MoveItem,
        }
    }
}

impl CarouselConfig {
    /// Parses a configuration from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// The `(min, max)` zoom distance range, if it is usable
    pub fn zoom_range(&self) -> Result<(f64, f64)> {
        let (min, max) = (self.min_distance, self.max_distance);
        // NaN fails this comparison too
        if min < max {
            Ok((min, max))
        } else {
            Err(CarouselError::InvalidZoomRange { min, max })
        }
    }
}

//! Interaction and animation core for a 3D object carousel
//!
//! Items are shown one at a time in front of a viewpoint. The active item
//! can be rotated and zoomed continuously, and a timed slide animation swaps
//! it for its neighbor. Input handling and rendering live outside this crate:
//! callers feed [`Intent`]s and per-frame time deltas into a
//! [`CarouselController`] and read back item and viewpoint transforms.
//!
//! ## Example
//!
//! ```rust
//! use carousel3d::{CarouselConfig, CarouselController, Intent, Item, Viewpoint};
//!
//! let items = vec![Item::new("teapot"), Item::new("bunny"), Item::new("dragon")];
//! let mut carousel =
//!     CarouselController::new(items, Viewpoint::default(), CarouselConfig::default()).unwrap();
//!
//! carousel.handle(Intent::Next);
//! for _ in 0..10 {
//!     carousel.tick(0.1);
//! }
//! assert_eq!(carousel.active_index(), 1);
//! assert!(!carousel.is_transitioning());
//! ```

pub mod config;
pub mod controller;
pub mod easing;
pub mod error;
pub mod intent;
pub mod item;
pub mod math;
pub mod operations;
pub mod store;
pub mod transition;

pub use config::{CarouselConfig, ZoomMode};
pub use controller::{CarouselController, IntentOutcome};
pub use easing::Easing;
pub use error::{CarouselError, Result};
pub use intent::{gesture_intent, Gesture, Hand, Intent, IntentSource};
pub use item::{Item, Viewpoint};
pub use math::{Quat, Vec3};
pub use operations::{ContinuousOperations, RotationState, ZoomDirection, ZoomState};
pub use store::{CarouselStore, SlideDirection};
pub use transition::{SlideTransition, TransitionEngine, TransitionState, TransitionTick};

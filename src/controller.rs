//! Carousel controller coordinating the store, continuous operations and
//! slide transitions
//!
//! Intents are applied immediately in arrival order; `tick` then advances
//! whichever behavior currently owns the active item.

use log::{debug, info, trace, warn};

use crate::config::CarouselConfig;
use crate::error::Result;
use crate::intent::{Intent, IntentSource};
use crate::item::{Item, Viewpoint};
use crate::math::distance;
use crate::operations::{ContinuousOperations, OperationParams, RotationState, ZoomState};
use crate::store::{CarouselStore, SlideDirection};
use crate::transition::{SlideRequest, SlideTransition, TransitionEngine, TransitionTick};

/// What happened to an intent passed to [`CarouselController::handle`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntentOutcome {
    /// Took effect immediately
    Applied,
    /// A slide is running; the rotation/zoom change takes effect when it ends
    Deferred,
    /// Ignored (change-item during a slide, or nothing to change to)
    Dropped,
}

/// Owns every piece of carousel state
#[derive(Clone, Debug)]
pub struct CarouselController {
    store: CarouselStore,
    viewpoint: Viewpoint,
    config: CarouselConfig,
    /// `None` when the configured distance range is unusable
    zoom_range: Option<(f64, f64)>,
    operations: ContinuousOperations,
    transition: TransitionEngine,
}

impl CarouselController {
    /// Build a controller and place the first item in front of `viewpoint`
    ///
    /// Fails only for an empty item list. An unusable zoom range is logged
    /// and disables zoom.
    pub fn new(items: Vec<Item>, viewpoint: Viewpoint, config: CarouselConfig) -> Result<Self> {
        let mut store = CarouselStore::new(items)?;
        let zoom_range = match config.zoom_range() {
            Ok(range) => Some(range),
            Err(err) => {
                warn!("{err}; zoom disabled");
                None
            }
        };
        store.position_active_at_viewpoint(&viewpoint, config.initial_distance);
        info!(
            "carousel ready: {} items, '{}' active, zoom mode {}",
            store.len(),
            store.active().id,
            config.zoom_mode
        );

        Ok(Self {
            store,
            viewpoint,
            transition: TransitionEngine::new(config.easing),
            config,
            zoom_range,
            operations: ContinuousOperations::default(),
        })
    }

    // =========================================================================
    // Intents
    // =========================================================================

    /// Apply a single intent
    pub fn handle(&mut self, intent: Intent) -> IntentOutcome {
        match intent {
            Intent::Next => self.change_item(SlideDirection::Next),
            Intent::Previous => self.change_item(SlideDirection::Previous),
            Intent::StartRotate(axis) => self.update_operations(|ops| ops.start_rotation(axis)),
            Intent::StopRotate => self.update_operations(ContinuousOperations::stop_rotation),
            Intent::StartZoom(direction) => self.update_operations(|ops| ops.start_zoom(direction)),
            Intent::StopZoom => self.update_operations(ContinuousOperations::stop_zoom),
        }
    }

    /// Apply everything `source` has queued since the last call
    ///
    /// Returns the number of intents that were not dropped.
    pub fn pump(&mut self, source: &mut impl IntentSource) -> usize {
        let mut accepted = 0;
        for intent in source.take_intents() {
            if self.handle(intent) != IntentOutcome::Dropped {
                accepted += 1;
            }
        }
        accepted
    }

    /// Rotation/zoom changes go to the live state, or to the state a running
    /// slide will restore
    fn update_operations(&mut self, update: impl FnOnce(&mut ContinuousOperations)) -> IntentOutcome {
        match self.transition.saved_operations_mut() {
            Some(saved) => {
                update(saved);
                IntentOutcome::Deferred
            }
            None => {
                update(&mut self.operations);
                IntentOutcome::Applied
            }
        }
    }

    fn change_item(&mut self, direction: SlideDirection) -> IntentOutcome {
        if self.transition.is_running() {
            debug!("{direction:?} dropped: transition in progress");
            return IntentOutcome::Dropped;
        }
        let from = self.store.active_index();
        let to = self.store.next_index(direction);
        if to == from {
            debug!("{direction:?} dropped: only one item");
            return IntentOutcome::Dropped;
        }

        self.store.activate(to);
        let started = self.transition.begin(
            &mut self.store,
            &mut self.operations,
            SlideRequest {
                from,
                to,
                direction,
                duration: self.config.transition_duration,
                right: self.viewpoint.right(),
                offset_magnitude: self.config.transition_offset,
            },
        );
        if started {
            IntentOutcome::Applied
        } else {
            // begin only refuses for reasons checked above; undo to stay consistent
            self.store.activate(from);
            if let Some(item) = self.store.get_mut(to) {
                item.visible = false;
            }
            IntentOutcome::Dropped
        }
    }

    // =========================================================================
    // Per-tick update
    // =========================================================================

    /// Advance the carousel by `dt` seconds
    ///
    /// A running slide takes the whole tick, including the one it completes
    /// on; otherwise rotation and then zoom are applied to the active item.
    /// Negative or non-finite `dt` is treated as zero.
    pub fn tick(&mut self, dt: f64) -> TransitionTick {
        let dt = if dt.is_finite() && dt >= 0.0 {
            dt
        } else {
            trace!("ignoring invalid time delta {dt}");
            0.0
        };

        if self.transition.is_running() {
            return self.transition.tick(&mut self.store, &mut self.operations, dt);
        }

        let params = OperationParams {
            rotation_speed: self.config.rotation_speed,
            zoom_speed: self.config.zoom_speed,
            zoom_range: self.zoom_range,
            zoom_mode: self.config.zoom_mode,
        };
        self.operations
            .apply(self.store.active_mut(), &mut self.viewpoint, &params, dt);
        TransitionTick::Idle
    }

    // =========================================================================
    // Runtime adjustments
    // =========================================================================

    /// Put the active item back in front of the viewpoint
    ///
    /// Refused while a slide is running. Returns true if the item moved.
    pub fn recenter(&mut self) -> bool {
        if self.transition.is_running() {
            debug!("recenter refused: transition in progress");
            return false;
        }
        self.store
            .position_active_at_viewpoint(&self.viewpoint, self.config.initial_distance);
        true
    }

    /// Replace the viewpoint pose, e.g. from head tracking
    pub fn set_viewpoint(&mut self, viewpoint: Viewpoint) {
        self.viewpoint = viewpoint;
    }

    /// Change the rotation speed (degrees per second)
    pub fn set_rotation_speed(&mut self, degrees_per_sec: f64) {
        if degrees_per_sec.is_finite() {
            self.config.rotation_speed = degrees_per_sec;
        } else {
            warn!("ignoring non-finite rotation speed {degrees_per_sec}");
        }
    }

    /// Change the zoom speed (units per second)
    pub fn set_zoom_speed(&mut self, units_per_sec: f64) {
        if units_per_sec.is_finite() {
            self.config.zoom_speed = units_per_sec;
        } else {
            warn!("ignoring non-finite zoom speed {units_per_sec}");
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn items(&self) -> &[Item] {
        self.store.items()
    }

    pub fn store(&self) -> &CarouselStore {
        &self.store
    }

    #[inline]
    pub fn active_index(&self) -> usize {
        self.store.active_index()
    }

    pub fn active_item(&self) -> &Item {
        self.store.active()
    }

    pub fn viewpoint(&self) -> &Viewpoint {
        &self.viewpoint
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_running()
    }

    /// The slide in flight, if any
    pub fn transition(&self) -> Option<&SlideTransition> {
        self.transition.current()
    }

    /// Live rotation state (always disabled while a slide runs)
    pub fn rotation(&self) -> RotationState {
        self.operations.rotation
    }

    /// Live zoom state (always disabled while a slide runs)
    pub fn zoom(&self) -> ZoomState {
        self.operations.zoom
    }

    /// Whether the configured distance range allows zooming at all
    pub fn zoom_available(&self) -> bool {
        self.zoom_range.is_some()
    }

    /// Distance between the active item and the viewpoint
    pub fn active_distance(&self) -> f64 {
        distance(&self.store.active().position, &self.viewpoint.position)
    }
}

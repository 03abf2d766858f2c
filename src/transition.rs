//! Timed slide transition between the outgoing and incoming item
//!
//! The engine is either `Idle` or `Running` a single [`SlideTransition`].
//! While running it owns the continuous operations: they are suspended when
//! the slide begins and handed back once it completes.

use log::debug;

use crate::easing::Easing;
use crate::math::{clamp01, lerp, Vec3};
use crate::operations::ContinuousOperations;
use crate::store::{CarouselStore, SlideDirection};

/// Slack when comparing accumulated time against the duration, so that
/// summing e.g. ten 0.1 s ticks still completes a 1 s slide
pub const COMPLETION_EPSILON: f64 = 1e-9;

/// Parameters for starting a slide
#[derive(Clone, Copy, Debug)]
pub struct SlideRequest {
    /// Index of the outgoing item
    pub from: usize,
    /// Index of the incoming item
    pub to: usize,
    pub direction: SlideDirection,
    /// Seconds; non-finite or negative values complete on the next tick
    pub duration: f64,
    /// Unit vector pointing to the right of the view
    pub right: Vec3,
    /// Lateral slide distance
    pub offset_magnitude: f64,
}

/// A slide in flight
#[derive(Clone, Debug)]
pub struct SlideTransition {
    pub from: usize,
    pub to: usize,
    pub direction: SlideDirection,
    /// Seconds accumulated so far
    pub elapsed: f64,
    pub duration: f64,
    /// Outgoing item's position when the slide began
    pub anchor: Vec3,
    /// Lateral displacement (right vector times magnitude)
    pub offset: Vec3,
    saved: ContinuousOperations,
}

impl SlideTransition {
    /// Linear progress in `[0, 1]`
    pub fn progress(&self) -> f64 {
        if self.duration <= 0.0 {
            1.0
        } else {
            clamp01(self.elapsed / self.duration)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed + COMPLETION_EPSILON >= self.duration
    }

    /// Operations that will be resumed when the slide completes
    pub fn saved_operations(&self) -> &ContinuousOperations {
        &self.saved
    }

    /// Where the incoming item starts
    pub fn incoming_start(&self) -> Vec3 {
        match self.direction {
            SlideDirection::Previous => self.anchor - self.offset,
            SlideDirection::Next => self.anchor + self.offset,
        }
    }

    /// Where the outgoing item ends up
    pub fn outgoing_end(&self) -> Vec3 {
        match self.direction {
            SlideDirection::Previous => self.anchor + self.offset,
            SlideDirection::Next => self.anchor - self.offset,
        }
    }

    /// `(outgoing, incoming)` positions at eased progress `t`
    pub fn positions_at(&self, t: f64) -> (Vec3, Vec3) {
        (
            lerp(&self.anchor, &self.outgoing_end(), t),
            lerp(&self.incoming_start(), &self.anchor, t),
        )
    }
}

/// Engine state
#[derive(Clone, Debug, Default)]
pub enum TransitionState {
    #[default]
    Idle,
    Running(SlideTransition),
}

/// Result of advancing the engine by one tick
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransitionTick {
    /// Nothing was running
    Idle,
    /// Still sliding; `progress` is the linear progress
    Running { progress: f64 },
    /// The slide finished this tick
    Completed { from: usize, to: usize },
}

/// Non-reentrant slide animator
#[derive(Clone, Debug, Default)]
pub struct TransitionEngine {
    state: TransitionState,
    easing: Easing,
}

impl TransitionEngine {
    pub fn new(easing: Easing) -> Self {
        Self {
            state: TransitionState::Idle,
            easing,
        }
    }

    pub fn state(&self) -> &TransitionState {
        &self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self.state, TransitionState::Running(_))
    }

    /// The slide in flight, if any
    pub fn current(&self) -> Option<&SlideTransition> {
        match &self.state {
            TransitionState::Running(slide) => Some(slide),
            TransitionState::Idle => None,
        }
    }

    /// Operations to resume after the running slide, for callers that
    /// change rotation or zoom mid-slide
    pub fn saved_operations_mut(&mut self) -> Option<&mut ContinuousOperations> {
        match &mut self.state {
            TransitionState::Running(slide) => Some(&mut slide.saved),
            TransitionState::Idle => None,
        }
    }

    /// Start a slide from `request.from` to `request.to`
    ///
    /// Rejected (returns false, nothing changes) while another slide runs,
    /// or when the indices are equal or out of range.
    pub fn begin(
        &mut self,
        store: &mut CarouselStore,
        ops: &mut ContinuousOperations,
        request: SlideRequest,
    ) -> bool {
        if self.is_running() {
            debug!("slide {} -> {} ignored: transition already running", request.from, request.to);
            return false;
        }
        let Some((outgoing, incoming)) = store.pair_mut(request.from, request.to) else {
            debug!("slide {} -> {} ignored: invalid item pair", request.from, request.to);
            return false;
        };

        let saved = ops.suspend();
        let duration = if request.duration.is_finite() {
            request.duration.max(0.0)
        } else {
            0.0
        };
        let slide = SlideTransition {
            from: request.from,
            to: request.to,
            direction: request.direction,
            elapsed: 0.0,
            duration,
            anchor: outgoing.position,
            offset: request.right * request.offset_magnitude,
            saved,
        };

        incoming.position = slide.incoming_start();
        incoming.visible = true;

        debug!(
            "slide {:?} from '{}' to '{}' over {:.2}s",
            slide.direction, outgoing.id, incoming.id, slide.duration
        );
        self.state = TransitionState::Running(slide);
        true
    }

    /// Advance the running slide by `dt` seconds
    ///
    /// Negative or non-finite `dt` stalls the slide instead of moving it.
    pub fn tick(
        &mut self,
        store: &mut CarouselStore,
        ops: &mut ContinuousOperations,
        dt: f64,
    ) -> TransitionTick {
        let slide = match &mut self.state {
            TransitionState::Idle => return TransitionTick::Idle,
            TransitionState::Running(slide) => slide,
        };
        if dt.is_finite() && dt > 0.0 {
            slide.elapsed += dt;
        }

        if slide.is_complete() {
            return self.finish(store, ops);
        }

        let progress = slide.progress();
        let (outgoing_pos, incoming_pos) = slide.positions_at(self.easing.evaluate(progress));
        if let Some((outgoing, incoming)) = store.pair_mut(slide.from, slide.to) {
            outgoing.position = outgoing_pos;
            incoming.position = incoming_pos;
        }
        TransitionTick::Running { progress }
    }

    fn finish(&mut self, store: &mut CarouselStore, ops: &mut ContinuousOperations) -> TransitionTick {
        let TransitionState::Running(slide) = std::mem::take(&mut self.state) else {
            return TransitionTick::Idle;
        };
        if let Some((outgoing, incoming)) = store.pair_mut(slide.from, slide.to) {
            outgoing.position = slide.anchor;
            outgoing.visible = false;
            incoming.position = slide.anchor;
        }
        ops.resume(slide.saved);
        debug!("slide {} -> {} complete", slide.from, slide.to);
        TransitionTick::Completed {
            from: slide.from,
            to: slide.to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;
    use crate::operations::ZoomDirection;

    fn store_at(anchor: Vec3) -> CarouselStore {
        let items = (0..3).map(|i| Item::at(format!("item-{i}"), anchor)).collect();
        CarouselStore::new(items).unwrap()
    }

    fn request(from: usize, to: usize, direction: SlideDirection) -> SlideRequest {
        SlideRequest {
            from,
            to,
            direction,
            duration: 1.0,
            right: Vec3::x(),
            offset_magnitude: 5.0,
        }
    }

    #[test]
    fn test_begin_places_incoming_offscreen() {
        let anchor = Vec3::new(0.0, 0.0, -3.0);
        let mut store = store_at(anchor);
        let mut ops = ContinuousOperations::default();
        let mut engine = TransitionEngine::new(Easing::Linear);

        assert!(engine.begin(&mut store, &mut ops, request(0, 1, SlideDirection::Next)));
        assert!(engine.is_running());
        assert!((store.items()[1].position - Vec3::new(5.0, 0.0, -3.0)).norm() < 1e-9);
        assert!(store.items()[1].visible);
        assert_eq!(store.visible_count(), 2);

        let mut store = store_at(anchor);
        let mut engine = TransitionEngine::new(Easing::Linear);
        assert!(engine.begin(&mut store, &mut ops, request(0, 2, SlideDirection::Previous)));
        assert!((store.items()[2].position - Vec3::new(-5.0, 0.0, -3.0)).norm() < 1e-9);
    }

    #[test]
    fn test_begin_is_not_reentrant() {
        let mut store = store_at(Vec3::zeros());
        let mut ops = ContinuousOperations::default();
        let mut engine = TransitionEngine::new(Easing::Linear);

        assert!(engine.begin(&mut store, &mut ops, request(0, 1, SlideDirection::Next)));
        assert!(!engine.begin(&mut store, &mut ops, request(1, 2, SlideDirection::Next)));
        assert_eq!(engine.current().unwrap().to, 1);
        assert!(!store.items()[2].visible);
    }

    #[test]
    fn test_begin_rejects_self_transition() {
        let mut store = store_at(Vec3::zeros());
        let mut ops = ContinuousOperations::default();
        let mut engine = TransitionEngine::new(Easing::Linear);
        assert!(!engine.begin(&mut store, &mut ops, request(1, 1, SlideDirection::Next)));
        assert!(!engine.is_running());
    }

    #[test]
    fn test_linear_midpoint_positions() {
        let mut store = store_at(Vec3::zeros());
        let mut ops = ContinuousOperations::default();
        let mut engine = TransitionEngine::new(Easing::Linear);
        engine.begin(&mut store, &mut ops, request(0, 1, SlideDirection::Next));

        let tick = engine.tick(&mut store, &mut ops, 0.5);
        assert_eq!(tick, TransitionTick::Running { progress: 0.5 });
        assert!((store.items()[0].position - Vec3::new(-2.5, 0.0, 0.0)).norm() < 1e-9);
        assert!((store.items()[1].position - Vec3::new(2.5, 0.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn test_previous_mirrors_next() {
        let mut store = store_at(Vec3::zeros());
        let mut ops = ContinuousOperations::default();
        let mut engine = TransitionEngine::new(Easing::Linear);
        engine.begin(&mut store, &mut ops, request(0, 2, SlideDirection::Previous));

        engine.tick(&mut store, &mut ops, 0.25);
        assert!((store.items()[0].position - Vec3::new(1.25, 0.0, 0.0)).norm() < 1e-9);
        assert!((store.items()[2].position - Vec3::new(-3.75, 0.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn test_completion_snaps_and_hides_outgoing() {
        let anchor = Vec3::new(1.0, 2.0, -3.0);
        let mut store = store_at(anchor);
        let mut ops = ContinuousOperations::default();
        let mut engine = TransitionEngine::new(Easing::EaseInOut);
        engine.begin(&mut store, &mut ops, request(0, 1, SlideDirection::Next));

        let mut last = TransitionTick::Idle;
        for _ in 0..10 {
            last = engine.tick(&mut store, &mut ops, 0.1);
        }
        assert_eq!(last, TransitionTick::Completed { from: 0, to: 1 });
        assert!(!engine.is_running());
        assert_eq!(store.items()[0].position, anchor);
        assert_eq!(store.items()[1].position, anchor);
        assert!(!store.items()[0].visible);
        assert!(store.items()[1].visible);
        assert_eq!(store.visible_count(), 1);
    }

    #[test]
    fn test_operations_suspended_and_restored() {
        let mut store = store_at(Vec3::zeros());
        let mut ops = ContinuousOperations::default();
        let axis = Vec3::new(0.3, -0.7, 0.1);
        ops.start_rotation(axis);
        ops.start_zoom(ZoomDirection::Out);

        let mut engine = TransitionEngine::new(Easing::Linear);
        engine.begin(&mut store, &mut ops, request(0, 1, SlideDirection::Next));
        assert!(!ops.is_rotating());
        assert!(!ops.is_zooming());

        engine.tick(&mut store, &mut ops, 2.0);
        assert!(ops.is_rotating());
        assert_eq!(ops.rotation.axis, axis);
        assert!(ops.is_zooming());
        assert_eq!(ops.zoom.direction, ZoomDirection::Out);
    }

    #[test]
    fn test_bad_dt_stalls() {
        let mut store = store_at(Vec3::zeros());
        let mut ops = ContinuousOperations::default();
        let mut engine = TransitionEngine::new(Easing::Linear);
        engine.begin(&mut store, &mut ops, request(0, 1, SlideDirection::Next));

        for dt in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            engine.tick(&mut store, &mut ops, dt);
        }
        assert_eq!(engine.current().unwrap().elapsed, 0.0);
        assert!(engine.is_running());
    }

    #[test]
    fn test_zero_duration_completes_on_first_tick() {
        let mut store = store_at(Vec3::zeros());
        let mut ops = ContinuousOperations::default();
        let mut engine = TransitionEngine::new(Easing::Linear);
        let req = SlideRequest {
            duration: f64::NAN,
            ..request(0, 1, SlideDirection::Next)
        };
        engine.begin(&mut store, &mut ops, req);
        assert_eq!(
            engine.tick(&mut store, &mut ops, 0.0),
            TransitionTick::Completed { from: 0, to: 1 }
        );
    }

    #[test]
    fn test_tick_when_idle() {
        let mut store = store_at(Vec3::zeros());
        let mut ops = ContinuousOperations::default();
        let mut engine = TransitionEngine::default();
        assert_eq!(engine.tick(&mut store, &mut ops, 0.1), TransitionTick::Idle);
    }
}

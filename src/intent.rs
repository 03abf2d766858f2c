//! User intents and the sources that produce them

use std::sync::mpsc::Receiver;

use crate::math::Vec3;
use crate::operations::ZoomDirection;

/// A discrete request from an input collaborator
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intent {
    /// Rotate the active item continuously about a world-space axis
    StartRotate(Vec3),
    StopRotate,
    /// Zoom continuously in the given direction
    StartZoom(ZoomDirection),
    StopZoom,
    /// Slide to the following item
    Next,
    /// Slide to the preceding item
    Previous,
}

/// Anything that can hand over the intents gathered since the last frame
pub trait IntentSource {
    /// Remove and return pending intents, oldest first
    fn take_intents(&mut self) -> Vec<Intent>;
}

impl IntentSource for Vec<Intent> {
    fn take_intents(&mut self) -> Vec<Intent> {
        std::mem::take(self)
    }
}

/// Lets a recognizer running elsewhere push intents through a channel
impl IntentSource for Receiver<Intent> {
    fn take_intents(&mut self) -> Vec<Intent> {
        self.try_iter().collect()
    }
}

/// Hand a microgesture was recognized on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hand {
    Left,
    Right,
}

/// Recognized thumb microgesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    SwipeLeft,
    SwipeRight,
    SwipeForward,
    SwipeBackward,
    ThumbTap,
}

/// Default hand-gesture bindings
///
/// The right hand drives rotation, the left hand navigation and zoom.
pub fn gesture_intent(hand: Hand, gesture: Gesture) -> Intent {
    match (hand, gesture) {
        (Hand::Right, Gesture::SwipeLeft) => Intent::StartRotate(Vec3::y()),
        (Hand::Right, Gesture::SwipeRight) => Intent::StartRotate(-Vec3::y()),
        (Hand::Right, Gesture::SwipeForward) => Intent::StartRotate(Vec3::x()),
        (Hand::Right, Gesture::SwipeBackward) => Intent::StartRotate(-Vec3::x()),
        (Hand::Right, Gesture::ThumbTap) => Intent::StopRotate,
        (Hand::Left, Gesture::SwipeLeft) => Intent::Previous,
        (Hand::Left, Gesture::SwipeRight) => Intent::Next,
        (Hand::Left, Gesture::SwipeForward) => Intent::StartZoom(ZoomDirection::In),
        (Hand::Left, Gesture::SwipeBackward) => Intent::StartZoom(ZoomDirection::Out),
        (Hand::Left, Gesture::ThumbTap) => Intent::StopZoom,
    }
}

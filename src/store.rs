//! Ordered item collection with a single active entry

use log::debug;

use crate::error::{CarouselError, Result};
use crate::item::{Item, Viewpoint};
use crate::math::{distance, look_rotation};

/// Direction of a change-item request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideDirection {
    /// Following item; the incoming item enters from the right
    Next,
    /// Preceding item; the incoming item enters from the left
    Previous,
}

/// Fixed-length sequence of items and the index of the active one
#[derive(Clone, Debug)]
pub struct CarouselStore {
    items: Vec<Item>,
    active_index: usize,
}

impl CarouselStore {
    /// Take ownership of `items`, showing the first one and hiding the rest
    pub fn new(mut items: Vec<Item>) -> Result<Self> {
        if items.is_empty() {
            return Err(CarouselError::NoItems);
        }
        for (index, item) in items.iter_mut().enumerate() {
            item.visible = index == 0;
        }
        Ok(Self {
            items,
            active_index: 0,
        })
    }

    /// Number of items
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; a store holds at least one item
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Item> {
        self.items.get_mut(index)
    }

    pub fn active(&self) -> &Item {
        &self.items[self.active_index]
    }

    pub fn active_mut(&mut self) -> &mut Item {
        &mut self.items[self.active_index]
    }

    /// Mutable access to two distinct items at once
    ///
    /// Returns `None` if either index is out of range or both are equal.
    pub fn pair_mut(&mut self, a: usize, b: usize) -> Option<(&mut Item, &mut Item)> {
        if a == b || a >= self.items.len() || b >= self.items.len() {
            return None;
        }
        if a < b {
            let (head, tail) = self.items.split_at_mut(b);
            Some((&mut head[a], &mut tail[0]))
        } else {
            let (head, tail) = self.items.split_at_mut(a);
            Some((&mut tail[0], &mut head[b]))
        }
    }

    /// Index that a change in `direction` would activate, wrapping around
    pub fn next_index(&self, direction: SlideDirection) -> usize {
        let len = self.items.len();
        match direction {
            SlideDirection::Next => (self.active_index + 1) % len,
            SlideDirection::Previous => (self.active_index + len - 1) % len,
        }
    }

    /// Make `index` the active item and reveal it
    ///
    /// The outgoing item stays visible; hiding it is left to whoever
    /// animates the change. Returns the previously active index.
    pub fn activate(&mut self, index: usize) -> usize {
        let previous = self.active_index;
        if index < self.items.len() {
            self.active_index = index;
            self.items[index].visible = true;
        }
        previous
    }

    /// Number of items currently flagged visible
    pub fn visible_count(&self) -> usize {
        self.items.iter().filter(|item| item.visible).count()
    }

    /// Place the active item `distance` units in front of the viewpoint,
    /// facing away from it
    pub fn position_active_at_viewpoint(&mut self, viewpoint: &Viewpoint, distance_ahead: f64) {
        let item = &mut self.items[self.active_index];
        item.position = viewpoint.position + viewpoint.forward() * distance_ahead;
        let to_viewpoint = viewpoint.position - item.position;
        if let Some(orientation) = look_rotation(&-to_viewpoint) {
            item.orientation = orientation;
        }
        debug!(
            "item '{}' placed {:.2} units in front of the viewpoint",
            item.id,
            distance(&item.position, &viewpoint.position)
        );
    }
}

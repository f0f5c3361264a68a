#![forbid(unsafe_code)]

//! Deck bookkeeping: the ordered item sequence, position, and buckets.
//!
//! [`DeckSession`] owns the fixed item sequence for one session, the current
//! position, and the two classification buckets. It performs no gesture or
//! timing logic; classification and advancement are driven from the outside
//! (see [`crate::session::SwipeSession`]).
//!
//! # Invariants
//!
//! 1. `items` is fixed at construction and never mutated; `reset()` re-shows
//!    the same deck in the same order.
//! 2. `0 <= position <= items.len()`; `position` is non-decreasing except on
//!    explicit reset, and advances by exactly 1 per `advance()`.
//! 3. `liked.len() + disliked.len() == position` after every completed
//!    classification (each advanced item is classified exactly once).
//! 4. `position == items.len()` is the terminal state: no current item, and
//!    `advance()` is a no-op.
//!
//! # Failure Modes
//!
//! - `classify()` past the end of the deck is silently ignored.
//! - `advance()` at the end of the deck is silently ignored.

use crate::event::SwipeDirection;

/// Ordered deck of items with position and liked/disliked buckets.
#[derive(Debug, Clone)]
pub struct DeckSession<T> {
    items: Vec<T>,
    position: usize,
    liked: Vec<T>,
    disliked: Vec<T>,
}

impl<T: Clone> DeckSession<T> {
    /// Create a session over a fixed item sequence, positioned at the start.
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            position: 0,
            liked: Vec::new(),
            disliked: Vec::new(),
        }
    }

    /// The item currently presented, or `None` once the deck is exhausted.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.items.get(self.position)
    }

    /// The item behind the current one, for a preview layer.
    #[must_use]
    pub fn next_up(&self) -> Option<&T> {
        self.items.get(self.position + 1)
    }

    /// Append the current item to the bucket for `direction`.
    ///
    /// Does not advance `position`; the visible card only changes after its
    /// exit transition completes. Returns false past the end of the deck.
    pub fn classify(&mut self, direction: SwipeDirection) -> bool {
        let Some(item) = self.items.get(self.position) else {
            return false;
        };
        let item = item.clone();
        match direction {
            SwipeDirection::Right => self.liked.push(item),
            SwipeDirection::Left => self.disliked.push(item),
        }
        true
    }

    /// Move to the next card. Returns false if already exhausted.
    pub fn advance(&mut self) -> bool {
        if self.position >= self.items.len() {
            return false;
        }
        self.position += 1;
        true
    }

    /// Restore position 0 and empty buckets. The item sequence is unaffected.
    pub fn reset(&mut self) {
        self.position = 0;
        self.liked.clear();
        self.disliked.clear();
    }

    /// Current index into the deck.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Total number of items in the deck.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True for a deck constructed over no items.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True once every card has been classified and advanced past.
    #[inline]
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.items.len()
    }

    /// Fraction of the deck already advanced past, in `[0.0, 1.0]`.
    ///
    /// An empty deck reports 1.0 (immediately complete).
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.items.is_empty() {
            1.0
        } else {
            self.position as f32 / self.items.len() as f32
        }
    }

    /// Items classified right, in classification order.
    #[must_use]
    pub fn liked(&self) -> &[T] {
        &self.liked
    }

    /// Items classified left, in classification order.
    #[must_use]
    pub fn disliked(&self) -> &[T] {
        &self.disliked
    }
}

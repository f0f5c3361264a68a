#![forbid(unsafe_code)]

//! Pointer events, swipe directions, and the dispatch-outcome taxonomy.
//!
//! Every call into the engine resolves to exactly one [`Outcome`]: either an
//! [`Applied`](Outcome::Applied) state transition or an
//! [`Ignored`](Outcome::Ignored) no-op with a deterministic reason. Ignored
//! calls leave all state unchanged; there are no error returns and no panics.
//!
//! # Invariants
//!
//! 1. An `Ignored` outcome implies no observable state change.
//! 2. `Committed` carries the direction that was classified; exactly one
//!    `Committed` is produced per card that leaves the deck.
//! 3. Every `Committed` is followed by exactly one `Settled` (unless the
//!    session is reset first).

use crate::geometry::Point;

// ---------------------------------------------------------------------------
// PointerId
// ---------------------------------------------------------------------------

/// Identity of a pointer as reported by the host input layer.
///
/// While a drag is active the engine only honors events carrying the pointer
/// id that started it — the explicit equivalent of pointer capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerId(pub u32);

// ---------------------------------------------------------------------------
// PointerEvent
// ---------------------------------------------------------------------------

/// Raw pointer lifecycle event routed from the host presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer pressed on the active card.
    Down { pointer: PointerId, at: Point },
    /// Pointer moved while pressed.
    Move { pointer: PointerId, at: Point },
    /// Pointer released.
    Up { pointer: PointerId },
    /// Pointer interrupted by the host. Routed identically to `Up`: the
    /// threshold is still evaluated against the last known offset.
    Cancel { pointer: PointerId },
}

impl PointerEvent {
    /// The pointer id carried by this event.
    #[must_use]
    pub const fn pointer(&self) -> PointerId {
        match self {
            Self::Down { pointer, .. }
            | Self::Move { pointer, .. }
            | Self::Up { pointer }
            | Self::Cancel { pointer } => *pointer,
        }
    }
}

// ---------------------------------------------------------------------------
// SwipeDirection
// ---------------------------------------------------------------------------

/// Horizontal decision direction for one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// Classify the current card as disliked.
    Left,
    /// Classify the current card as liked.
    Right,
}

impl SwipeDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Direction implied by a horizontal displacement's sign.
    #[must_use]
    pub fn from_dx(dx: f32) -> Self {
        if dx > 0.0 { Self::Right } else { Self::Left }
    }
}

// ---------------------------------------------------------------------------
// Outcome taxonomy
// ---------------------------------------------------------------------------

/// A state transition that was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A drag began on the active card; the pointer is now captured.
    DragStarted,
    /// The live offset was updated during a drag.
    DragMoved,
    /// The release crossed the threshold (or a direction command arrived):
    /// the card was classified and the settle lockout began.
    Committed(SwipeDirection),
    /// The release stayed under the threshold; the offset snapped back to
    /// zero with no classification.
    SnappedBack,
    /// The settle deadline fired: the deck advanced and input unlocked.
    Settled,
    /// All gesture and deck state returned to its initial values.
    ResetApplied,
}

/// Deterministic reason why a call was ignored.
///
/// These correspond to normal races between user input and animation timing
/// (a stray move after release, a button press mid-settle), not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredReason {
    /// A settle is in progress; no new gesture or commit is accepted.
    Locked,
    /// The deck is exhausted; there is no current card.
    Exhausted,
    /// A drag is already active for another pointer-down.
    AlreadyDragging,
    /// Move/up without an active drag.
    NotDragging,
    /// The event's pointer id does not match the captured one.
    PointerMismatch,
    /// The settle deadline has not been reached yet (or no settle is pending).
    NotDue,
}

/// Result of one call into the engine: applied or ignored, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied(Transition),
    Ignored(IgnoredReason),
}

impl Outcome {
    /// True when the call changed state.
    #[inline]
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    /// True when the call was a no-op.
    #[inline]
    #[must_use]
    pub const fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored(_))
    }
}

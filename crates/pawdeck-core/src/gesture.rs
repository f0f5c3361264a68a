#![forbid(unsafe_code)]

//! Swipe gesture engine: the per-card pointer-drag state machine.
//!
//! [`SwipeEngine`] converts pointer lifecycle calls into directional
//! decisions. A drag records an anchor and a live offset; release either
//! commits a direction (when `|dx|` crosses [`SwipeConfig::swipe_threshold`])
//! or snaps back. A commit starts the settle lockout: input is rejected until
//! the settle deadline fires, matching the card's exit animation.
//!
//! Time never comes from the wall clock. Every time-dependent entry point
//! takes an explicit `now`, and the settle "timer" is a stored deadline
//! polled via [`poll_settle`](SwipeEngine::poll_settle). This keeps the
//! engine deterministic under test and wasm-safe (`web_time::Instant`).
//!
//! # State Machine
//!
//! ```text
//! IDLE ── begin_drag ──▶ DRAGGING ── end_drag ≥ threshold ──▶ SETTLING
//!   ▲                        │                                    │
//!   │◀── end_drag < threshold┘ (snap back, same card)             │
//!   │◀──────────────── poll_settle at deadline (next card) ───────┘
//! ```
//!
//! # Invariants
//!
//! 1. `locked` and a pending direction are set together by a commit and
//!    cleared together by exactly one settle firing (or `reset()`).
//! 2. While `locked`, `begin_drag`/`update_drag`/`commit` are no-ops.
//! 3. While a drag is active, only the captured pointer id is honored.
//! 4. A snap-back zeroes the offset and mutates nothing else.
//!
//! # Failure Modes
//!
//! - All precondition violations are silent no-ops with an
//!   [`IgnoredReason`]; none of them disturb existing state.
//! - A settle deadline in the past fires on the next poll; it can never fire
//!   twice because the first firing clears the lock.

use std::time::Duration;

use tracing::{debug, trace};
use web_time::Instant;

use crate::event::{IgnoredReason, Outcome, PointerId, SwipeDirection, Transition};
use crate::geometry::{Offset, Point};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Tunables for swipe recognition and settle timing.
#[derive(Debug, Clone)]
pub struct SwipeConfig {
    /// Minimum `|dx|` at release to commit instead of snapping back
    /// (default: 120.0 distance units).
    pub swipe_threshold: f32,
    /// Lockout duration after a commit, matched to the exit-animation length
    /// so the deck never advances while a card is still departing
    /// (default: 260ms).
    pub settle_delay: Duration,
    /// Divisor mapping horizontal offset to card tilt in degrees
    /// (default: 18.0).
    pub tilt_divisor: f32,
    /// Horizontal distance at which the like/nope badge reaches full
    /// opacity (default: 140.0). Deliberately independent of
    /// `swipe_threshold`: the badge saturates shortly after the commit
    /// threshold is crossed, confirming the decision before release.
    pub badge_saturation: f32,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: 120.0,
            settle_delay: Duration::from_millis(260),
            tilt_divisor: 18.0,
            badge_saturation: 140.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Internal state
// ---------------------------------------------------------------------------

/// An active drag: the captured pointer and its anchor.
#[derive(Debug, Clone, Copy)]
struct DragState {
    pointer: PointerId,
    anchor: Point,
}

// ---------------------------------------------------------------------------
// SwipeEngine
// ---------------------------------------------------------------------------

/// Stateful pointer-drag state machine for the active card.
///
/// The engine knows nothing about the deck; [`crate::session::SwipeSession`]
/// pairs commits with classification and settles with advancement.
#[derive(Debug)]
pub struct SwipeEngine {
    config: SwipeConfig,
    drag: Option<DragState>,
    offset: Offset,
    pending: Option<SwipeDirection>,
    settle_deadline: Option<Instant>,
}

impl SwipeEngine {
    /// Create an idle engine with the given configuration.
    #[must_use]
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            drag: None,
            offset: Offset::ZERO,
            pending: None,
            settle_deadline: None,
        }
    }

    /// Begin a drag, capturing `pointer` and anchoring at `at`.
    ///
    /// Ignored while locked or while another drag is active.
    pub fn begin_drag(&mut self, pointer: PointerId, at: Point) -> Outcome {
        if self.is_locked() {
            return Outcome::Ignored(IgnoredReason::Locked);
        }
        if self.drag.is_some() {
            return Outcome::Ignored(IgnoredReason::AlreadyDragging);
        }
        self.drag = Some(DragState {
            pointer,
            anchor: at,
        });
        self.offset = Offset::ZERO;
        trace!(pointer = pointer.0, "drag started");
        Outcome::Applied(Transition::DragStarted)
    }

    /// Update the live offset from the captured pointer's position.
    ///
    /// Ignored for late or duplicate events: no active drag, a mismatched
    /// pointer id, or an in-progress settle.
    pub fn update_drag(&mut self, pointer: PointerId, at: Point) -> Outcome {
        if self.is_locked() {
            return Outcome::Ignored(IgnoredReason::Locked);
        }
        let Some(drag) = self.drag else {
            return Outcome::Ignored(IgnoredReason::NotDragging);
        };
        if drag.pointer != pointer {
            return Outcome::Ignored(IgnoredReason::PointerMismatch);
        }
        self.offset = at.offset_from(drag.anchor);
        Outcome::Applied(Transition::DragMoved)
    }

    /// Release the drag and evaluate the threshold.
    ///
    /// At or beyond the threshold this commits `sign(dx)` and starts the
    /// settle lockout; under it the offset snaps back to zero with no
    /// commitment. Pointer cancel is routed here as well.
    pub fn end_drag(&mut self, pointer: PointerId, now: Instant) -> Outcome {
        let Some(drag) = self.drag else {
            return Outcome::Ignored(IgnoredReason::NotDragging);
        };
        if drag.pointer != pointer {
            return Outcome::Ignored(IgnoredReason::PointerMismatch);
        }
        self.drag = None;
        if self.offset.abs_dx() >= self.config.swipe_threshold {
            self.commit(SwipeDirection::from_dx(self.offset.dx), now)
        } else {
            trace!(dx = self.offset.dx, "released under threshold, snap back");
            self.offset = Offset::ZERO;
            Outcome::Applied(Transition::SnappedBack)
        }
    }

    /// Commit a direction, from release or directly from a button press.
    ///
    /// Locks input, records the pending direction, and schedules the settle
    /// deadline at `now + settle_delay`. Any active drag is discarded; its
    /// offset is kept for the exit animation and zeroed on settle.
    pub fn commit(&mut self, direction: SwipeDirection, now: Instant) -> Outcome {
        if self.is_locked() {
            return Outcome::Ignored(IgnoredReason::Locked);
        }
        self.drag = None;
        self.pending = Some(direction);
        self.settle_deadline = Some(now + self.config.settle_delay);
        debug!(?direction, "swipe committed");
        Outcome::Applied(Transition::Committed(direction))
    }

    /// Fire the settle if its deadline has been reached.
    ///
    /// Clears the offset, pending direction, and lock in one step. Fires at
    /// most once per commit. Returns `Ignored(NotDue)` when no settle is
    /// pending or the deadline is still in the future.
    pub fn poll_settle(&mut self, now: Instant) -> Outcome {
        match self.settle_deadline {
            Some(deadline) if now >= deadline => {
                self.settle_deadline = None;
                self.pending = None;
                self.offset = Offset::ZERO;
                debug!("settle fired");
                Outcome::Applied(Transition::Settled)
            }
            _ => Outcome::Ignored(IgnoredReason::NotDue),
        }
    }

    /// Clear all gesture state and cancel any pending settle.
    pub fn reset(&mut self) {
        self.drag = None;
        self.offset = Offset::ZERO;
        self.pending = None;
        self.settle_deadline = None;
        debug!("gesture state reset");
    }

    /// Whether a drag is currently active.
    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Whether a settle is in progress (input rejected).
    #[inline]
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.pending.is_some()
    }

    /// The committed direction awaiting its settle, if any.
    #[inline]
    #[must_use]
    pub fn pending_direction(&self) -> Option<SwipeDirection> {
        self.pending
    }

    /// The live displacement of the active card.
    #[inline]
    #[must_use]
    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Card tilt in degrees, a linear function of the horizontal offset.
    #[must_use]
    pub fn tilt(&self) -> f32 {
        self.offset.dx / self.config.tilt_divisor
    }

    /// Opacity of the "like" badge: ramps over `[0, badge_saturation]`.
    #[must_use]
    pub fn like_opacity(&self) -> f32 {
        (self.offset.dx / self.config.badge_saturation).clamp(0.0, 1.0)
    }

    /// Opacity of the "nope" badge: ramps over `[0, -badge_saturation]`.
    #[must_use]
    pub fn nope_opacity(&self) -> f32 {
        (-self.offset.dx / self.config.badge_saturation).clamp(0.0, 1.0)
    }

    /// Current configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }
}

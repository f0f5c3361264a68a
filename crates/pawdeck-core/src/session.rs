#![forbid(unsafe_code)]

//! Session glue: one deck driven by one gesture engine.
//!
//! [`SwipeSession`] is the public entry point. It routes raw
//! [`PointerEvent`]s and direction commands into the [`SwipeEngine`], pairs
//! every commit with a synchronous classification into the
//! [`DeckSession`] buckets, and advances the deck position exactly once per
//! settle firing. Presentation reads state through the accessors or one
//! [`Snapshot`].
//!
//! # Invariants
//!
//! 1. `liked.len() + disliked.len() == position` after every settle: a card
//!    is classified at commit time and advanced past at settle time, and
//!    the lock forbids a second commit in between.
//! 2. The deck position changes only inside [`tick`](SwipeSession::tick)
//!    (and on [`reset`](SwipeSession::reset)).
//! 3. No call panics; precondition violations return
//!    [`Outcome::Ignored`] and leave state unchanged.

use tracing::debug;
use web_time::Instant;

use crate::deck::DeckSession;
use crate::event::{IgnoredReason, Outcome, PointerEvent, SwipeDirection, Transition};
use crate::geometry::Offset;
use crate::gesture::{SwipeConfig, SwipeEngine};

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// Read-only view of the session for a presentation layer.
#[derive(Debug)]
pub struct Snapshot<'a, T> {
    /// The card being presented, if any.
    pub current: Option<&'a T>,
    /// The card behind it, for a preview layer.
    pub next_up: Option<&'a T>,
    /// Live displacement of the current card.
    pub offset: Offset,
    /// Card rotation in degrees.
    pub tilt: f32,
    /// Opacity of the "like" badge in `[0.0, 1.0]`.
    pub like_opacity: f32,
    /// Opacity of the "nope" badge in `[0.0, 1.0]`.
    pub nope_opacity: f32,
    /// True while a settle is in progress; input should be disabled.
    pub locked: bool,
    /// Direction committed for the departing card, if any.
    pub pending: Option<SwipeDirection>,
    /// Cards already classified and advanced past.
    pub position: usize,
    /// Total cards in the deck.
    pub total: usize,
    /// Progress-bar fill fraction.
    pub progress: f32,
    /// Cards classified right so far.
    pub liked: &'a [T],
    /// Cards classified left so far.
    pub disliked: &'a [T],
    /// True once every card has been classified.
    pub exhausted: bool,
}

// ---------------------------------------------------------------------------
// SwipeSession
// ---------------------------------------------------------------------------

/// A deck of items classified one at a time by swipe or direction command.
#[derive(Debug)]
pub struct SwipeSession<T> {
    engine: SwipeEngine,
    deck: DeckSession<T>,
}

impl<T: Clone> SwipeSession<T> {
    /// Create a session over `items` with the default [`SwipeConfig`].
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self::with_config(items, SwipeConfig::default())
    }

    /// Create a session with explicit tunables.
    #[must_use]
    pub fn with_config(items: Vec<T>, config: SwipeConfig) -> Self {
        Self {
            engine: SwipeEngine::new(config),
            deck: DeckSession::new(items),
        }
    }

    /// Route one raw pointer event.
    ///
    /// Down begins a drag on the current card; Move updates the live offset;
    /// Up and Cancel both release the drag and evaluate the threshold. A
    /// release that crosses the threshold classifies the current card
    /// synchronously and starts the settle lockout.
    pub fn handle(&mut self, event: PointerEvent, now: Instant) -> Outcome {
        match event {
            PointerEvent::Down { pointer, at } => {
                if self.deck.is_exhausted() {
                    return Outcome::Ignored(IgnoredReason::Exhausted);
                }
                self.engine.begin_drag(pointer, at)
            }
            PointerEvent::Move { pointer, at } => self.engine.update_drag(pointer, at),
            PointerEvent::Up { pointer } | PointerEvent::Cancel { pointer } => {
                let outcome = self.engine.end_drag(pointer, now);
                if let Outcome::Applied(Transition::Committed(direction)) = outcome {
                    self.record_classification(direction);
                }
                outcome
            }
        }
    }

    /// Classify the current card as liked, bypassing any drag.
    pub fn like(&mut self, now: Instant) -> Outcome {
        self.commit(SwipeDirection::Right, now)
    }

    /// Classify the current card as disliked, bypassing any drag.
    pub fn dislike(&mut self, now: Instant) -> Outcome {
        self.commit(SwipeDirection::Left, now)
    }

    /// Commit a direction for the current card.
    ///
    /// Ignored while locked or once the deck is exhausted.
    pub fn commit(&mut self, direction: SwipeDirection, now: Instant) -> Outcome {
        if self.deck.is_exhausted() {
            return Outcome::Ignored(IgnoredReason::Exhausted);
        }
        let outcome = self.engine.commit(direction, now);
        if let Outcome::Applied(Transition::Committed(direction)) = outcome {
            self.record_classification(direction);
        }
        outcome
    }

    /// Fire a due settle: advance the deck and unlock input.
    ///
    /// This is the single point where the deck position changes. Call it on
    /// every host tick; it is a cheap no-op while nothing is due.
    pub fn tick(&mut self, now: Instant) -> Outcome {
        let outcome = self.engine.poll_settle(now);
        if let Outcome::Applied(Transition::Settled) = outcome {
            let advanced = self.deck.advance();
            debug_assert!(advanced, "a settle always has a card to advance past");
            debug!(position = self.deck.position(), "deck advanced");
        }
        outcome
    }

    /// Restart the same deck in the same order: position 0, empty buckets,
    /// idle gesture state, any pending settle cancelled.
    pub fn reset(&mut self) -> Outcome {
        self.engine.reset();
        self.deck.reset();
        Outcome::Applied(Transition::ResetApplied)
    }

    fn record_classification(&mut self, direction: SwipeDirection) {
        let recorded = self.deck.classify(direction);
        debug_assert!(recorded, "commit is refused on an exhausted deck");
    }

    // -- reads ---------------------------------------------------------

    /// The card being presented, or `None` once exhausted.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.deck.current()
    }

    /// The card behind the current one.
    #[must_use]
    pub fn next_up(&self) -> Option<&T> {
        self.deck.next_up()
    }

    /// Live displacement of the current card.
    #[inline]
    #[must_use]
    pub fn offset(&self) -> Offset {
        self.engine.offset()
    }

    /// Card tilt in degrees.
    #[must_use]
    pub fn tilt(&self) -> f32 {
        self.engine.tilt()
    }

    /// Opacity of the "like" badge.
    #[must_use]
    pub fn like_opacity(&self) -> f32 {
        self.engine.like_opacity()
    }

    /// Opacity of the "nope" badge.
    #[must_use]
    pub fn nope_opacity(&self) -> f32 {
        self.engine.nope_opacity()
    }

    /// True while a settle is in progress.
    #[inline]
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.engine.is_locked()
    }

    /// True while a drag is active.
    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.engine.is_dragging()
    }

    /// Direction committed for the departing card, if any.
    #[must_use]
    pub fn pending_direction(&self) -> Option<SwipeDirection> {
        self.engine.pending_direction()
    }

    /// Cards already advanced past.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.deck.position()
    }

    /// Total cards in the deck.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.deck.len()
    }

    /// True for a session over an empty deck.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// True once every card has been classified.
    #[inline]
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.deck.is_exhausted()
    }

    /// Progress-bar fill fraction.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.deck.progress()
    }

    /// Cards classified right, in classification order.
    #[must_use]
    pub fn liked(&self) -> &[T] {
        self.deck.liked()
    }

    /// Cards classified left, in classification order.
    #[must_use]
    pub fn disliked(&self) -> &[T] {
        self.deck.disliked()
    }

    /// One coherent read of everything presentation needs.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_, T> {
        Snapshot {
            current: self.deck.current(),
            next_up: self.deck.next_up(),
            offset: self.engine.offset(),
            tilt: self.engine.tilt(),
            like_opacity: self.engine.like_opacity(),
            nope_opacity: self.engine.nope_opacity(),
            locked: self.engine.is_locked(),
            pending: self.engine.pending_direction(),
            position: self.deck.position(),
            total: self.deck.len(),
            progress: self.deck.progress(),
            liked: self.deck.liked(),
            disliked: self.deck.disliked(),
            exhausted: self.deck.is_exhausted(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::PointerId;
    use crate::geometry::Point;
    use std::time::Duration;

    const SETTLE: Duration = Duration::from_millis(260);
    const P1: PointerId = PointerId(1);

    fn session() -> SwipeSession<&'static str> {
        SwipeSession::new(vec!["a", "b", "c"])
    }

    fn down(x: f32) -> PointerEvent {
        PointerEvent::Down {
            pointer: P1,
            at: Point::new(x, 0.0),
        }
    }

    fn mv(x: f32) -> PointerEvent {
        PointerEvent::Move {
            pointer: P1,
            at: Point::new(x, 0.0),
        }
    }

    fn up() -> PointerEvent {
        PointerEvent::Up { pointer: P1 }
    }

    #[test]
    fn swipe_right_classifies_after_settle() {
        let mut s = session();
        let t = Instant::now();

        s.handle(down(0.0), t);
        s.handle(mv(130.0), t);
        let outcome = s.handle(up(), t);
        assert_eq!(
            outcome,
            Outcome::Applied(Transition::Committed(SwipeDirection::Right))
        );

        // Classification is synchronous; advancement waits for the settle.
        assert_eq!(s.liked(), &["a"]);
        assert_eq!(s.position(), 0);
        assert_eq!(s.current(), Some(&"a"));
        assert!(s.is_locked());

        assert_eq!(s.tick(t + SETTLE), Outcome::Applied(Transition::Settled));
        assert_eq!(s.position(), 1);
        assert_eq!(s.current(), Some(&"b"));
        assert!(!s.is_locked());
    }

    #[test]
    fn sub_threshold_release_changes_nothing() {
        let mut s = session();
        let t = Instant::now();

        s.handle(down(0.0), t);
        s.handle(mv(50.0), t);
        assert_eq!(
            s.handle(up(), t),
            Outcome::Applied(Transition::SnappedBack)
        );

        assert_eq!(s.offset(), Offset::ZERO);
        assert_eq!(s.position(), 0);
        assert!(s.liked().is_empty());
        assert!(s.disliked().is_empty());
        assert_eq!(s.tick(t + SETTLE), Outcome::Ignored(IgnoredReason::NotDue));
    }

    #[test]
    fn button_commit_bypasses_drag() {
        let mut s = session();
        let t = Instant::now();

        assert_eq!(
            s.dislike(t),
            Outcome::Applied(Transition::Committed(SwipeDirection::Left))
        );
        assert_eq!(s.disliked(), &["a"]);
        s.tick(t + SETTLE);
        assert_eq!(s.current(), Some(&"b"));
    }

    #[test]
    fn commit_while_locked_is_a_pure_no_op() {
        let mut s = session();
        let t = Instant::now();
        s.like(t);

        let before = (s.position(), s.liked().len(), s.disliked().len());
        assert_eq!(s.like(t), Outcome::Ignored(IgnoredReason::Locked));
        assert_eq!(s.dislike(t), Outcome::Ignored(IgnoredReason::Locked));
        assert_eq!(
            s.handle(down(0.0), t),
            Outcome::Ignored(IgnoredReason::Locked)
        );
        assert_eq!(
            (s.position(), s.liked().len(), s.disliked().len()),
            before
        );
    }

    #[test]
    fn exhausted_deck_rejects_input() {
        let mut s = session();
        let mut t = Instant::now();
        for _ in 0..3 {
            s.like(t);
            t += SETTLE;
            s.tick(t);
        }
        assert!(s.is_exhausted());
        assert_eq!(s.like(t), Outcome::Ignored(IgnoredReason::Exhausted));
        assert_eq!(
            s.handle(down(0.0), t),
            Outcome::Ignored(IgnoredReason::Exhausted)
        );
        assert_eq!(s.liked().len(), 3);
    }

    #[test]
    fn pointer_cancel_is_routed_like_release() {
        let mut s = session();
        let t = Instant::now();
        s.handle(down(0.0), t);
        s.handle(mv(-150.0), t);
        assert_eq!(
            s.handle(PointerEvent::Cancel { pointer: P1 }, t),
            Outcome::Applied(Transition::Committed(SwipeDirection::Left))
        );
        assert_eq!(s.disliked(), &["a"]);
    }

    #[test]
    fn reset_restores_start_state() {
        let mut s = session();
        let t = Instant::now();
        s.like(t);
        // Reset mid-settle: the pending advance must be cancelled too.
        assert_eq!(s.reset(), Outcome::Applied(Transition::ResetApplied));
        assert_eq!(s.position(), 0);
        assert!(s.liked().is_empty());
        assert!(s.disliked().is_empty());
        assert!(!s.is_locked());
        assert_eq!(s.current(), Some(&"a"));
        assert_eq!(s.tick(t + SETTLE), Outcome::Ignored(IgnoredReason::NotDue));
    }

    #[test]
    fn snapshot_is_coherent() {
        let mut s = session();
        let t = Instant::now();
        s.handle(down(0.0), t);
        s.handle(mv(70.0), t);

        let snap = s.snapshot();
        assert_eq!(snap.current, Some(&"a"));
        assert_eq!(snap.next_up, Some(&"b"));
        assert_eq!(snap.offset, Offset::new(70.0, 0.0));
        assert!((snap.like_opacity - 0.5).abs() < f32::EPSILON);
        assert_eq!(snap.nope_opacity, 0.0);
        assert!(!snap.locked);
        assert_eq!(snap.position, 0);
        assert_eq!(snap.total, 3);
        assert!(!snap.exhausted);
    }

    #[test]
    fn early_tick_does_not_advance() {
        let mut s = session();
        let t = Instant::now();
        s.like(t);
        assert_eq!(
            s.tick(t + Duration::from_millis(259)),
            Outcome::Ignored(IgnoredReason::NotDue)
        );
        assert_eq!(s.position(), 0);
        assert_eq!(s.tick(t + SETTLE), Outcome::Applied(Transition::Settled));
        assert_eq!(s.position(), 1);
    }
}

#![forbid(unsafe_code)]

//! Core: swipe-gesture engine and deck-session bookkeeping for pawdeck.
//!
//! # Role in pawdeck
//! `pawdeck-core` is the interaction layer. It owns the pointer-drag state
//! machine, the commit/snap-back threshold policy, the settle lockout that
//! gates input while a card departs, and the deck position/bucket
//! bookkeeping. Presentation (layout, images, progress bars, the summary
//! grid) is an external collaborator that routes raw pointer events in and
//! reads state out.
//!
//! # Primary responsibilities
//! - **SwipeEngine**: drag start/move/release, threshold evaluation,
//!   settle deadline, derived tilt/badge-opacity outputs.
//! - **DeckSession**: the fixed item sequence, position, and the liked and
//!   disliked buckets.
//! - **SwipeSession**: the public contract pairing the two — commits
//!   classify synchronously, settles advance the deck exactly once.
//! - **CatCatalog**: deterministic index → image-URL deck construction.
//!
//! # How it fits in the system
//! Hosts feed [`event::PointerEvent`]s plus an explicit `now` into
//! [`session::SwipeSession::handle`] and poll
//! [`tick`](session::SwipeSession::tick) each frame; every call resolves to
//! an [`event::Outcome`] and no call panics.

pub mod catalog;
pub mod deck;
pub mod event;
pub mod geometry;
pub mod gesture;
pub mod session;

pub use catalog::CatCatalog;
pub use deck::DeckSession;
pub use event::{IgnoredReason, Outcome, PointerEvent, PointerId, SwipeDirection, Transition};
pub use geometry::{Offset, Point};
pub use gesture::{SwipeConfig, SwipeEngine};
pub use session::{Snapshot, SwipeSession};

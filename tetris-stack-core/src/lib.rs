//! Tetris piece queue and reserve stack.
//!
//! # Layout
//!
//! ```text
//! generator ──► queue (circular, FIFO, capacity N = 5)
//!                 │  ▲
//!        reserve  │  │ swap / multi-swap
//!                 ▼  │
//!               reserve stack (LIFO, capacity M = 3)
//! ```
//!
//! Pieces are plain `Copy` values `{ kind, id }`. Ids come from a
//! [`PieceGenerator`] and strictly increase; equality is by id.
//!
//! # Operations
//!
//! ```text
//! play        queue front is consumed, queue refilled
//! reserve     queue front moves onto the reserve, queue refilled
//! use         reserve top is consumed
//! swap        queue front <-> reserve top
//! multi-swap  queue[0..3] <-> reserve top[0..3], front pairs with top
//! ```
//!
//! Every operation checks its preconditions before mutating, so a failed
//! operation leaves both structures exactly as they were.

pub mod command;
pub mod error;
pub mod exchange;
pub mod piece;
pub mod queue;
pub mod rack;
pub mod stack;

pub use command::{Command, Outcome, ParseCommandError};
pub use error::{Area, Error, Result};
pub use exchange::{reserve, swap_front_top, swap_multi, use_reserved, MULTI_SWAP_DEPTH};
pub use piece::{Piece, PieceGenerator, PieceKind};
pub use queue::PieceQueue;
pub use rack::{Rack, RackConfig, Snapshot, DEFAULT_QUEUE_CAPACITY, DEFAULT_RESERVE_CAPACITY};
pub use stack::PieceStack;

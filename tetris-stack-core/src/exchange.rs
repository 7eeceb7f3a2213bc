//! Moves and swaps between the queue and the reserve stack.
//!
//! Each function checks all of its preconditions up front, so an `Err` means
//! neither structure was touched.
//!
//! ```text
//! swap_multi, depth 3:
//!
//!   queue (front..back)   [q0][q1][q2][q3][q4]
//!                          |   |   |
//!   stack (top..base)     [s0][s1][s2]
//!
//!   afterwards            [s0][s1][s2][q3][q4]
//!                         [q0][q1][q2]
//! ```

use std::mem;

use crate::error::{Area, Error, Result};
use crate::piece::Piece;
use crate::queue::PieceQueue;
use crate::stack::PieceStack;

/// Number of pieces exchanged by [`swap_multi`] on each side.
pub const MULTI_SWAP_DEPTH: usize = 3;

/// Move the front piece of the queue onto the reserve stack.
///
/// Does not refill the queue.
pub fn reserve(queue: &mut PieceQueue, stack: &mut PieceStack) -> Result<Piece> {
    if queue.is_empty() {
        return Err(Error::Empty(Area::Queue));
    }
    if stack.is_full() {
        return Err(Error::CapacityExceeded(Area::Reserve));
    }
    let piece = queue.dequeue()?;
    stack.push(piece)?;
    Ok(piece)
}

/// Pop and consume the top reserved piece.
pub fn use_reserved(stack: &mut PieceStack) -> Result<Piece> {
    stack.pop()
}

/// Exchange the queue's front piece with the stack's top piece in place.
pub fn swap_front_top(queue: &mut PieceQueue, stack: &mut PieceStack) -> Result<()> {
    swap_depth(queue, stack, 1)
}

/// Exchange the first [`MULTI_SWAP_DEPTH`] queue pieces with the same number
/// of stack pieces, front pairing with top.
pub fn swap_multi(queue: &mut PieceQueue, stack: &mut PieceStack) -> Result<()> {
    swap_depth(queue, stack, MULTI_SWAP_DEPTH)
}

/// Swap queue position `i` with stack depth `i` for every `i < depth`.
fn swap_depth(queue: &mut PieceQueue, stack: &mut PieceStack, depth: usize) -> Result<()> {
    if queue.len() < depth || stack.len() < depth {
        return Err(Error::Unavailable { needed: depth });
    }
    let pairs = queue.iter_mut().zip(stack.iter_mut()).take(depth);
    for (i, (q, s)) in pairs.enumerate() {
        log::debug!("swap queue[{i}] {q} <-> reserve[{i}] {s}");
        mem::swap(q, s);
    }
    Ok(())
}

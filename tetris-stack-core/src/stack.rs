//! Fixed-capacity reserve stack, LIFO.

use std::fmt;

use crate::error::{Area, Error, Result};
use crate::piece::Piece;
use crate::queue::write_pieces;

/// Stack of reserved pieces.
///
/// Slots `0..len` are occupied; the top is at `len - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceStack {
    slots: Box<[Option<Piece>]>,
    len: usize,
}

impl PieceStack {
    /// Create an empty stack.
    pub fn with_capacity(capacity: usize) -> PieceStack {
        PieceStack {
            slots: vec![None; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Index of the top slot, or `None` when empty.
    #[inline]
    pub fn top(&self) -> Option<usize> {
        self.len.checked_sub(1)
    }

    pub fn push(&mut self, piece: Piece) -> Result<()> {
        if self.is_full() {
            return Err(Error::CapacityExceeded(Area::Reserve));
        }
        self.slots[self.len] = Some(piece);
        self.len += 1;
        log::debug!("pushed {piece} ({}/{})", self.len, self.capacity());
        Ok(())
    }

    pub fn pop(&mut self) -> Result<Piece> {
        let top = self.top().ok_or(Error::Empty(Area::Reserve))?;
        let piece = self.slots[top].take().ok_or(Error::Empty(Area::Reserve))?;
        self.len = top;
        log::debug!("popped {piece} ({}/{})", self.len, self.capacity());
        Ok(piece)
    }

    #[inline]
    pub fn peek(&self) -> Option<&Piece> {
        self.get_from_top(0)
    }

    /// Piece `depth` places below the top (0 = top).
    pub fn get_from_top(&self, depth: usize) -> Option<&Piece> {
        let idx = self.top()?.checked_sub(depth)?;
        self.slots[idx].as_ref()
    }

    /// Mutable access to the piece `depth` places below the top.
    pub fn get_from_top_mut(&mut self, depth: usize) -> Option<&mut Piece> {
        let idx = self.top()?.checked_sub(depth)?;
        self.slots[idx].as_mut()
    }

    /// Iterate top to base.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.slots[..self.len].iter().rev().flatten()
    }

    /// Iterate top to base, mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Piece> + '_ {
        self.slots[..self.len].iter_mut().rev().flatten()
    }
}

impl fmt::Display for PieceStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_pieces(f, self.iter())
    }
}

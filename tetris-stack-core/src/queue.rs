//! Fixed-capacity circular queue of upcoming pieces.
//!
//! ```text
//!   slots:  [ c ][ d ][ - ][ a ][ b ]
//!                      ^tail ^head
//!   count = 4, tail = (head + count) % capacity
//! ```
//!
//! Full and empty are told apart by `count`, never by comparing head and tail.

use std::fmt;

use rand::Rng;

use crate::error::{Area, Error, Result};
use crate::piece::{Piece, PieceGenerator};

/// Queue of upcoming pieces, FIFO.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceQueue {
    slots: Box<[Option<Piece>]>,
    head: usize,
    count: usize,
}

impl PieceQueue {
    /// Create an empty queue.
    pub fn with_capacity(capacity: usize) -> PieceQueue {
        PieceQueue {
            slots: vec![None; capacity].into_boxed_slice(),
            head: 0,
            count: 0,
        }
    }

    /// Create a queue and top it up to capacity from `generator`.
    pub fn filled<R: Rng>(capacity: usize, generator: &mut PieceGenerator<R>) -> PieceQueue {
        let mut queue = PieceQueue::with_capacity(capacity);
        while !queue.is_full() {
            // Cannot fail: the queue is not full.
            let _ = queue.enqueue(generator.generate());
        }
        queue
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    /// Physical slot of logical position `pos` (0 = front).
    #[inline]
    fn slot(&self, pos: usize) -> usize {
        (self.head + pos) % self.capacity()
    }

    /// Append a piece at the back.
    ///
    /// When the queue is full the piece is dropped and nothing changes.
    pub fn enqueue(&mut self, piece: Piece) -> Result<()> {
        if self.is_full() {
            return Err(Error::CapacityExceeded(Area::Queue));
        }
        let tail = self.slot(self.count);
        self.slots[tail] = Some(piece);
        self.count += 1;
        log::debug!("enqueued {piece} ({}/{})", self.count, self.capacity());
        Ok(())
    }

    /// Remove and return the front piece.
    pub fn dequeue(&mut self) -> Result<Piece> {
        if self.is_empty() {
            return Err(Error::Empty(Area::Queue));
        }
        let piece = self.slots[self.head]
            .take()
            .ok_or(Error::Empty(Area::Queue))?;
        self.head = (self.head + 1) % self.capacity();
        self.count -= 1;
        log::debug!("dequeued {piece} ({}/{})", self.count, self.capacity());
        Ok(piece)
    }

    /// Piece at logical position `pos` from the front.
    pub fn get(&self, pos: usize) -> Option<&Piece> {
        if pos >= self.count {
            return None;
        }
        self.slots[self.slot(pos)].as_ref()
    }

    /// Mutable access to the piece at logical position `pos` from the front.
    pub fn get_mut(&mut self, pos: usize) -> Option<&mut Piece> {
        if pos >= self.count {
            return None;
        }
        let idx = self.slot(pos);
        self.slots[idx].as_mut()
    }

    #[inline]
    pub fn front(&self) -> Option<&Piece> {
        self.get(0)
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> + '_ {
        (0..self.count).filter_map(move |pos| self.get(pos))
    }

    /// Iterate front to back, mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Piece> + '_ {
        // Unoccupied slots are exactly those past the tail, so skipping them
        // keeps logical order.
        let (wrapped, from_head) = self.slots.split_at_mut(self.head);
        from_head
            .iter_mut()
            .chain(wrapped.iter_mut())
            .flatten()
            .take(self.count)
    }
}

impl fmt::Display for PieceQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_pieces(f, self.iter())
    }
}

/// Render pieces as `[K id] [K id] ...`, or `[empty]`.
pub(crate) fn write_pieces<'a>(
    f: &mut fmt::Formatter<'_>,
    pieces: impl Iterator<Item = &'a Piece>,
) -> fmt::Result {
    let mut any = false;
    for piece in pieces {
        if any {
            f.write_str(" ")?;
        }
        write!(f, "{piece}")?;
        any = true;
    }
    if !any {
        f.write_str("[empty]")?;
    }
    Ok(())
}

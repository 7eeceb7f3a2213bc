//! Pieces and the generator that hands them out.

use std::fmt;
use std::hash::{Hash, Hasher};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Piece type tag.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PieceKind {
    I = 0,
    O = 1,
    T = 2,
    L = 3,
}

impl PieceKind {
    /// Every kind, in tag order.
    pub const ALL: [PieceKind; 4] = [PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L];

    /// Convert from index (0-3) to a kind.
    #[inline]
    pub fn from_index(idx: usize) -> Option<PieceKind> {
        Self::ALL.get(idx).copied()
    }

    /// Single-letter tag.
    #[inline]
    pub fn as_char(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A single piece. Identity is the id alone; the kind is payload.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub id: u64,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, id: u64) -> Piece {
        Piece { kind, id }
    }
}

impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Piece {}

impl Hash for Piece {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind, self.id)
    }
}

// ============================================================================
// GENERATOR
// ============================================================================

/// Source of new pieces.
///
/// Owns the id counter, so ids are unique and strictly increasing for as long
/// as the same generator is used. Seeding the random source is up to the
/// caller; see [`PieceGenerator::seeded`].
#[derive(Debug, Clone)]
pub struct PieceGenerator<R = StdRng> {
    rng: R,
    next_id: u64,
}

impl PieceGenerator<StdRng> {
    /// Deterministic generator backed by a seeded `StdRng`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PieceGenerator<R> {
    /// Generator whose first piece gets id 0.
    pub fn new(rng: R) -> Self {
        PieceGenerator { rng, next_id: 0 }
    }

    /// Start the id counter at `next_id` instead of 0.
    pub fn with_next_id(mut self, next_id: u64) -> Self {
        self.next_id = next_id;
        self
    }

    /// Id the next generated piece will receive.
    #[inline]
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Produce a piece of uniformly random kind with the next id.
    pub fn generate(&mut self) -> Piece {
        let kind = PieceKind::ALL[self.rng.random_range(0..PieceKind::ALL.len())];
        let piece = Piece::new(kind, self.next_id);
        self.next_id += 1;
        piece
    }
}

//! Error type shared by the queue, the reserve stack and the exchange operations.

use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Which structure an error refers to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Area {
    /// The upcoming-piece queue.
    Queue,
    /// The reserve stack.
    Reserve,
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Area::Queue => f.write_str("queue"),
            Area::Reserve => f.write_str("reserve"),
        }
    }
}

/// Recoverable failure of a rack operation.
///
/// Every operation checks its preconditions before touching any state, so
/// receiving one of these means nothing was mutated.
#[derive(Clone, Copy, PartialEq, Eq, Debug, thiserror::Error)]
pub enum Error {
    /// Read or remove attempted on a structure with no pieces.
    #[error("{0} is empty")]
    Empty(Area),
    /// Insert attempted on a structure that is already at capacity.
    #[error("{0} is full")]
    CapacityExceeded(Area),
    /// A swap needs at least `needed` pieces in both the queue and the reserve.
    #[error("swap needs at least {needed} piece(s) in both the queue and the reserve")]
    Unavailable { needed: usize },
}

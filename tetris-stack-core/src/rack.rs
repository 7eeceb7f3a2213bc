//! The queue, reserve and generator owned together, as a driver sees them.

use std::fmt;

use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::command::{Command, Outcome};
use crate::error::Result;
use crate::exchange;
use crate::piece::{Piece, PieceGenerator};
use crate::queue::PieceQueue;
use crate::stack::PieceStack;

/// Default number of upcoming pieces.
pub const DEFAULT_QUEUE_CAPACITY: usize = 5;
/// Default number of reserve slots.
pub const DEFAULT_RESERVE_CAPACITY: usize = 3;

/// Capacities of the two structures. Fixed once the rack is built.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RackConfig {
    pub queue_capacity: usize,
    pub reserve_capacity: usize,
}

impl Default for RackConfig {
    fn default() -> Self {
        RackConfig {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            reserve_capacity: DEFAULT_RESERVE_CAPACITY,
        }
    }
}

/// Read-only copy of the rack contents.
///
/// `queue` is front to back, `reserve` is top to base.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub queue: Vec<Piece>,
    pub reserve: Vec<Piece>,
}

/// Upcoming-piece queue plus reserve stack, kept topped up from a generator.
///
/// Every method either applies fully or returns an error and leaves the rack
/// as it was. The queue is refilled only after a command that removed a
/// piece from it succeeded.
#[derive(Debug, Clone)]
pub struct Rack<R = StdRng> {
    queue: PieceQueue,
    reserve: PieceStack,
    generator: PieceGenerator<R>,
}

impl<R: Rng> Rack<R> {
    /// Build a rack with a full queue and an empty reserve.
    pub fn new(config: RackConfig, mut generator: PieceGenerator<R>) -> Self {
        let queue = PieceQueue::filled(config.queue_capacity, &mut generator);
        let reserve = PieceStack::with_capacity(config.reserve_capacity);
        log::debug!(
            "new rack: queue {}/{}, reserve 0/{}",
            queue.len(),
            queue.capacity(),
            reserve.capacity()
        );
        Rack {
            queue,
            reserve,
            generator,
        }
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn reserve_stack(&self) -> &PieceStack {
        &self.reserve
    }

    pub fn generator(&self) -> &PieceGenerator<R> {
        &self.generator
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            queue: self.queue.iter().copied().collect(),
            reserve: self.reserve.iter().copied().collect(),
        }
    }

    /// Consume the front piece, then refill.
    pub fn play(&mut self) -> Result<Piece> {
        let piece = self.queue.dequeue()?;
        self.refill();
        Ok(piece)
    }

    /// Move the front piece into the reserve, then refill.
    pub fn reserve(&mut self) -> Result<Piece> {
        let piece = exchange::reserve(&mut self.queue, &mut self.reserve)?;
        self.refill();
        Ok(piece)
    }

    pub fn use_reserved(&mut self) -> Result<Piece> {
        exchange::use_reserved(&mut self.reserve)
    }

    pub fn swap_front_top(&mut self) -> Result<()> {
        exchange::swap_front_top(&mut self.queue, &mut self.reserve)
    }

    pub fn swap_multi(&mut self) -> Result<()> {
        exchange::swap_multi(&mut self.queue, &mut self.reserve)
    }

    /// Dispatch a menu command.
    pub fn apply(&mut self, command: Command) -> Result<Outcome> {
        let outcome = match command {
            Command::Play => Outcome::Played(self.play()?),
            Command::Reserve => Outcome::Reserved(self.reserve()?),
            Command::UseReserved => Outcome::Used(self.use_reserved()?),
            Command::SwapFrontTop => {
                self.swap_front_top()?;
                Outcome::Swapped
            }
            Command::SwapMulti => {
                self.swap_multi()?;
                Outcome::MultiSwapped
            }
            Command::Quit => Outcome::Quit,
        };
        Ok(outcome)
    }

    fn refill(&mut self) {
        let piece = self.generator.generate();
        if let Err(e) = self.queue.enqueue(piece) {
            log::warn!("dropped {piece} on refill: {e}");
        }
    }
}

impl<R> fmt::Display for Rack<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Queue:                    {}", self.queue)?;
        write!(f, "Reserve (top -> base):    {}", self.reserve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Area, Error};

    fn rack() -> Rack {
        Rack::new(RackConfig::default(), PieceGenerator::seeded(11))
    }

    fn queue_ids<R: Rng>(rack: &Rack<R>) -> Vec<u64> {
        rack.queue().iter().map(|p| p.id).collect()
    }

    fn reserve_ids<R: Rng>(rack: &Rack<R>) -> Vec<u64> {
        rack.reserve_stack().iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_new_rack() {
        let rack = rack();
        assert_eq!(queue_ids(&rack), vec![0, 1, 2, 3, 4]);
        assert!(rack.reserve_stack().is_empty());
        assert_eq!(rack.reserve_stack().capacity(), DEFAULT_RESERVE_CAPACITY);
        assert_eq!(rack.generator().next_id(), 5);
    }

    #[test]
    fn test_play_refills() {
        let mut rack = rack();
        assert_eq!(rack.play().unwrap().id, 0);
        assert_eq!(queue_ids(&rack), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_reserve_refills() {
        let mut rack = rack();
        assert_eq!(rack.reserve().unwrap().id, 0);
        assert_eq!(rack.reserve().unwrap().id, 1);
        assert_eq!(queue_ids(&rack), vec![2, 3, 4, 5, 6]);
        assert_eq!(reserve_ids(&rack), vec![1, 0]);
    }

    #[test]
    fn test_failed_reserve_does_not_refill() {
        let mut rack = rack();
        for _ in 0..3 {
            rack.reserve().unwrap();
        }
        let before = rack.snapshot();
        let next_id = rack.generator().next_id();

        assert_eq!(rack.reserve(), Err(Error::CapacityExceeded(Area::Reserve)));
        assert_eq!(rack.snapshot(), before);
        assert_eq!(rack.generator().next_id(), next_id);
    }

    #[test]
    fn test_apply_dispatch() {
        let mut rack = rack();
        assert_eq!(
            rack.apply(Command::UseReserved),
            Err(Error::Empty(Area::Reserve))
        );
        assert!(matches!(rack.apply(Command::Reserve), Ok(Outcome::Reserved(p)) if p.id == 0));
        assert_eq!(rack.apply(Command::SwapFrontTop), Ok(Outcome::Swapped));
        assert_eq!(queue_ids(&rack), vec![0, 2, 3, 4, 5]);
        assert_eq!(reserve_ids(&rack), vec![1]);
        assert_eq!(
            rack.apply(Command::SwapMulti),
            Err(Error::Unavailable { needed: 3 })
        );
        assert!(matches!(rack.apply(Command::UseReserved), Ok(Outcome::Used(p)) if p.id == 1));
        assert!(matches!(rack.apply(Command::Play), Ok(Outcome::Played(p)) if p.id == 0));
    }

    #[test]
    fn test_quit_leaves_rack_untouched() {
        let mut rack = rack();
        let before = rack.snapshot();
        assert_eq!(rack.apply(Command::Quit), Ok(Outcome::Quit));
        assert_eq!(rack.snapshot(), before);
    }

    #[test]
    fn test_display() {
        let mut rack = Rack::new(
            RackConfig {
                queue_capacity: 2,
                reserve_capacity: 1,
            },
            PieceGenerator::seeded(0),
        );
        let text = rack.to_string();
        assert!(text.contains("[empty]"));
        rack.reserve().unwrap();
        assert!(!rack.to_string().contains("[empty]"));
    }
}

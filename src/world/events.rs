//! Deadline-ordered queue of world actions
//!
//! Actions are plain data rather than callbacks so the queue can be
//! cleared and inspected without touching world state. The queue orders
//! by due time on the simulation clock, with FIFO order between actions
//! that share a deadline.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;

use super::entities::EntityId;

/// A state change the world applies when its deadline passes
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Reinitialize the whole world
    Restart,
    /// The ball touched a tile
    BallHitTile(EntityId),
    /// The ball fell below the world
    BallLost,
    /// The paddle caught a pickup
    PickupPicked(EntityId),
    /// A pickup fell below the world
    PickupLost(EntityId),
    /// Set the world speed multiplier (timed effects expire through this)
    SetSpeed(f32),
    /// Multiply the ball radius
    ScaleBall(f32),
}

#[derive(Debug, Clone)]
struct Scheduled {
    due: Duration,
    seq: u64,
    action: Action,
}

impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl Eq for Scheduled {}

impl Ord for Scheduled {
    // reversed so the BinaryHeap pops the earliest deadline first,
    // lowest sequence number winning ties
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-heap of scheduled actions keyed by the simulation clock
#[derive(Debug, Default)]
pub struct ActionQueue {
    heap: BinaryHeap<Scheduled>,
    next_seq: u64,
}

impl ActionQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule an action for a clock deadline
    pub fn push(&mut self, due: Duration, action: Action) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Scheduled { due, seq, action });
    }

    /// Pop the next action whose deadline is at or before `now`.
    /// The action is removed before the caller applies it, so applying
    /// may clear or refill the queue safely.
    pub fn pop_due(&mut self, now: Duration) -> Option<Action> {
        if self.heap.peek().map_or(false, |s| s.due <= now) {
            self.heap.pop().map(|s| s.action)
        } else {
            None
        }
    }

    /// Drop all pending actions
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Number of pending actions
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// True if nothing is pending
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn test_pop_in_deadline_order() {
        let mut queue = ActionQueue::new();
        queue.push(secs(3), Action::Restart);
        queue.push(secs(1), Action::BallLost);
        queue.push(secs(2), Action::SetSpeed(1.0));

        assert_eq!(queue.pop_due(secs(10)), Some(Action::BallLost));
        assert_eq!(queue.pop_due(secs(10)), Some(Action::SetSpeed(1.0)));
        assert_eq!(queue.pop_due(secs(10)), Some(Action::Restart));
        assert_eq!(queue.pop_due(secs(10)), None);
    }

    #[test]
    fn test_fifo_on_equal_deadlines() {
        let mut queue = ActionQueue::new();
        queue.push(secs(1), Action::BallHitTile(1));
        queue.push(secs(1), Action::BallHitTile(2));
        queue.push(secs(1), Action::BallHitTile(3));

        assert_eq!(queue.pop_due(secs(1)), Some(Action::BallHitTile(1)));
        assert_eq!(queue.pop_due(secs(1)), Some(Action::BallHitTile(2)));
        assert_eq!(queue.pop_due(secs(1)), Some(Action::BallHitTile(3)));
    }

    #[test]
    fn test_future_actions_stay_queued() {
        let mut queue = ActionQueue::new();
        queue.push(secs(5), Action::Restart);

        assert_eq!(queue.pop_due(secs(4)), None);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.pop_due(secs(5)), Some(Action::Restart));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut queue = ActionQueue::new();
        queue.push(secs(1), Action::Restart);
        queue.push(secs(2), Action::BallLost);
        queue.clear();
        assert!(queue.is_empty());
    }
}

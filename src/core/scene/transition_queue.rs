//=========================================================================
// Transition Queue
//=========================================================================
//
// Stage switch requests issued from inside stage hooks.
//
// Stages cannot replace themselves while the manager is calling into
// them, so requests are queued here and applied by the manager as soon
// as the hook returns.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::VecDeque;

//=== Internal Dependencies ===============================================

use super::StageKey;

//=== TransitionQueue =====================================================

/// FIFO of pending stage activations.
#[derive(Debug)]
pub struct TransitionQueue<S: StageKey> {
    queue: VecDeque<S>,
}

impl<S: StageKey> TransitionQueue<S> {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Queues a stage to be started once the current hook returns.
    pub fn push(&mut self, stage: S) {
        self.queue.push_back(stage);
    }

    /// Removes the oldest request.
    pub fn pop(&mut self) -> Option<S> {
        self.queue.pop_front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.queue.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Drops every pending request.
    pub fn clear(&mut self) {
        self.queue.clear()
    }
}

impl<S: StageKey> Default for TransitionQueue<S> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

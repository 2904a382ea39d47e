//! Collaborators shared by every claim operation

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use core_kernel::{Clock, IdGenerator, RandomIdGenerator, SystemClock};
use crate::status::{ClaimStatus, PermissiveTransitions, TransitionPolicy};

/// Clock, id source and transition policy used by claim operations
///
/// Cloning is cheap; all three collaborators are shared.
#[derive(Clone)]
pub struct ClaimContext {
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    transitions: Arc<dyn TransitionPolicy>,
}

impl ClaimContext {
    /// Creates a context with the permissive transition policy
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            clock,
            ids,
            transitions: Arc::new(PermissiveTransitions),
        }
    }

    /// Wall clock and random identifiers
    pub fn system() -> Self {
        Self::new(Arc::new(SystemClock), Arc::new(RandomIdGenerator))
    }

    /// Replaces the transition policy
    pub fn with_transitions(mut self, transitions: Arc<dyn TransitionPolicy>) -> Self {
        self.transitions = transitions;
        self
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn next_id(&self) -> Uuid {
        self.ids.next_id()
    }

    pub fn permits(&self, from: ClaimStatus, to: ClaimStatus) -> bool {
        self.transitions.permits(from, to)
    }
}

impl Default for ClaimContext {
    fn default() -> Self {
        Self::system()
    }
}

impl fmt::Debug for ClaimContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClaimContext")
            .field("now", &self.clock.now())
            .finish_non_exhaustive()
    }
}

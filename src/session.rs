//! Per-chat sessions and the session store.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, RwLock};

use serde::{Deserialize, Serialize};

use crate::scenarios::ScenarioInstance;
use crate::states::StateId;

/// Sessions are keyed by the chat id the transport hands us.
pub type SessionId = i64;

/// Top-level task section a session is working in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    Vocabulary,
    Grammar,
    Reading,
}

impl std::fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Vocabulary => "vocabulary",
            Self::Grammar => "grammar",
            Self::Reading => "reading",
        };
        write!(f, "{s}")
    }
}

/// One user's conversational context.
///
/// Invariant: `current_state` is `Some` iff a scenario is in progress, and
/// then `active_scenario` is `Some` and of the kind that owns that state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    pub current_state: Option<StateId>,
    pub task_category: Option<TaskCategory>,
    pub active_scenario: Option<ScenarioInstance>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop any in-progress scenario, optionally switching section.
    pub fn reset(&mut self, category: Option<TaskCategory>) {
        self.current_state = None;
        self.active_scenario = None;
        self.task_category = category;
    }
}

/// Lock a session cell, recovering from a poisoned mutex.
pub fn lock(cell: &Mutex<Session>) -> MutexGuard<'_, Session> {
    cell.lock().unwrap_or_else(|e| e.into_inner())
}

/// Storage for sessions, injected into the engine.
///
/// Implementations must hand out one cell per id: the per-session mutex
/// serializes turns for that id, while turns for different ids never block
/// each other.
pub trait SessionStore: Send + Sync {
    /// Returns the existing session cell or creates a fresh one. Never fails.
    fn get_or_create(&self, id: SessionId) -> Arc<Mutex<Session>>;

    /// Full reset: clears state and scenario, optionally sets the category.
    fn reset(&self, id: SessionId, category: Option<TaskCategory>) {
        let cell = self.get_or_create(id);
        lock(&cell).reset(category);
    }

    /// The state the session expects input for, if any.
    fn state(&self, id: SessionId) -> Option<StateId> {
        let cell = self.get_or_create(id);
        let state = lock(&cell).current_state;
        state
    }

    fn set_task_category(&self, id: SessionId, category: TaskCategory) {
        let cell = self.get_or_create(id);
        lock(&cell).task_category = Some(category);
    }
}

/// In-memory session store. The outer lock is held only for map access.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<SessionId, Arc<Mutex<Session>>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions ever touched.
    pub fn len(&self) -> usize {
        self.sessions.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStore for InMemorySessionStore {
    fn get_or_create(&self, id: SessionId) -> Arc<Mutex<Session>> {
        if let Some(cell) = self
            .sessions
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&id)
        {
            return Arc::clone(cell);
        }
        let mut map = self.sessions.write().unwrap_or_else(|e| e.into_inner());
        Arc::clone(map.entry(id).or_default())
    }
}

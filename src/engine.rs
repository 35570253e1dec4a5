//! The dialogue engine.
//!
//! One synchronous `handle()` call per user turn. The engine loads the
//! session, runs the transition bound to its current state, and applies the
//! outcome. All I/O (transport, audit) happens outside.

use std::sync::Arc;

use crate::error::EngineError;
use crate::scenarios::{ScenarioKind, Step};
use crate::session::{lock, SessionId, SessionStore, TaskCategory};

/// What the transport should show for one turn.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// No scenario in progress; the caller decides which menu to show.
    NoScenario,
    /// A question (or a validation re-prompt) with its button rows, if any.
    Ask {
        text: String,
        options: Option<Vec<String>>,
    },
    /// Terminal: the assembled instruction plus the section to return to.
    Done {
        instruction: String,
        section: TaskCategory,
    },
    /// The scenario was left for a section menu.
    Menu(TaskCategory),
}

/// Dispatches inbound turns to scenario transitions.
pub struct DialogueEngine {
    sessions: Arc<dyn SessionStore>,
}

impl DialogueEngine {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    pub fn sessions(&self) -> &Arc<dyn SessionStore> {
        &self.sessions
    }

    /// Begin a scenario, replacing anything already in progress.
    pub fn start(&self, id: SessionId, kind: ScenarioKind) -> Response {
        let (instance, step) = kind.start();
        let cell = self.sessions.get_or_create(id);
        let mut session = lock(&cell);
        session.task_category = Some(kind.category());
        session.active_scenario = Some(instance);
        match step {
            Step::Ask { next, prompt, options } => {
                session.current_state = Some(next);
                Response::Ask { text: prompt, options }
            }
            // Root steps are always questions.
            other => {
                tracing::error!(scenario = %kind, ?other, "scenario root step is not a question");
                session.reset(Some(kind.category()));
                Response::Menu(kind.category())
            }
        }
    }

    /// Apply one turn of raw input to the session's current state.
    pub fn handle(&self, id: SessionId, input: &str) -> Result<Response, EngineError> {
        let cell = self.sessions.get_or_create(id);
        let mut session = lock(&cell);

        let Some(state) = session.current_state else {
            return Ok(Response::NoScenario);
        };

        let step = {
            let Some(instance) = session.active_scenario.as_mut() else {
                return Err(EngineError::CorruptSession { state });
            };
            if instance.kind() != state.scenario() {
                return Err(EngineError::CorruptSession { state });
            }
            instance.transition(state, input)?
        };

        match step {
            Step::Ask { next, prompt, options } => {
                session.current_state = Some(next);
                Ok(Response::Ask { text: prompt, options })
            }
            Step::Reject { message, options } => Ok(Response::Ask {
                text: message,
                options,
            }),
            Step::Finish => {
                let instance = session
                    .active_scenario
                    .as_ref()
                    .ok_or(EngineError::CorruptSession { state })?;
                let instruction = instance.assemble()?;
                let section = instance.kind().category();
                session.current_state = None;
                session.active_scenario = None;
                Ok(Response::Done { instruction, section })
            }
            Step::Navigate(section) => {
                session.current_state = None;
                session.active_scenario = None;
                Ok(Response::Menu(section))
            }
        }
    }
}

//! Reading: true/false.
//!
//! read-first yes/no → finish.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, IncompleteInstruction};
use crate::session::TaskCategory;
use crate::states::StateId;

use super::{
    ask, reject, require, Entry, OptionTable, ScenarioKind, Selection, Step, PICK_YES_NO, select,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadingTrueFalse {
    read_first: Option<bool>,
}

const READ_FIRST: OptionTable<bool> = &[
    ("Yes", Entry::Value(true)),
    ("No", Entry::Value(false)),
    ("Back to Reading", Entry::Back(TaskCategory::Reading)),
];

pub(crate) fn intro() -> Step {
    ask(
        StateId::ReadingTfReadFirst,
        "Ask to read the text first?",
        READ_FIRST,
    )
}

impl ReadingTrueFalse {
    pub(crate) fn transition(&mut self, state: StateId, input: &str) -> Result<Step, EngineError> {
        match state {
            StateId::ReadingTfReadFirst => Ok(match select(READ_FIRST, input) {
                Selection::Value(read_first) => {
                    self.read_first = Some(read_first);
                    Step::Finish
                }
                Selection::Back(cat) => Step::Navigate(cat),
                _ => reject(READ_FIRST, PICK_YES_NO),
            }),
            other => Err(EngineError::UnknownState { state: other }),
        }
    }

    pub fn assemble(&self) -> Result<String, IncompleteInstruction> {
        let read_first = *require(
            &self.read_first,
            ScenarioKind::ReadingTrueFalse,
            "read_first",
        )?;
        Ok(if read_first {
            "Read the text. Match the sentences T (true) or F (false).".to_string()
        } else {
            "Match the sentences T (true) or F (false).".to_string()
        })
    }
}

//! Reading: multiple choice.
//!
//! text-kind (with Other) → finish.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, IncompleteInstruction};
use crate::session::TaskCategory;
use crate::states::StateId;

use super::{
    ask, ask_text, custom_text, reject, reject_text, require, Choice, Entry, OptionTable,
    ScenarioKind, Selection, Step, PICK_ONE, select,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingTextKind {
    Text,
    Story,
    Dialogue,
}

impl ReadingTextKind {
    fn wording(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Story => "story",
            Self::Dialogue => "dialogue",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadingMultipleChoice {
    text_kind: Option<Choice<ReadingTextKind>>,
}

const TEXT_KINDS: OptionTable<ReadingTextKind> = &[
    ("Text", Entry::Value(ReadingTextKind::Text)),
    ("Story", Entry::Value(ReadingTextKind::Story)),
    ("Dialogue", Entry::Value(ReadingTextKind::Dialogue)),
    ("Other", Entry::Other),
    ("Back to Reading", Entry::Back(TaskCategory::Reading)),
];

pub(crate) fn intro() -> Step {
    ask(
        StateId::ReadingMcTextKind,
        "What type of text is given?",
        TEXT_KINDS,
    )
}

impl ReadingMultipleChoice {
    pub(crate) fn transition(&mut self, state: StateId, input: &str) -> Result<Step, EngineError> {
        match state {
            StateId::ReadingMcTextKind => Ok(match select(TEXT_KINDS, input) {
                Selection::Value(kind) => {
                    self.text_kind = Some(Choice::Fixed(kind));
                    Step::Finish
                }
                Selection::Other => ask_text(
                    StateId::ReadingMcTextKindOther,
                    "Please enter your own type:",
                ),
                Selection::Back(cat) => Step::Navigate(cat),
                Selection::Invalid => reject(TEXT_KINDS, PICK_ONE),
            }),
            StateId::ReadingMcTextKindOther => Ok(match custom_text(input) {
                Some(text) => {
                    self.text_kind = Some(Choice::Custom(text));
                    Step::Finish
                }
                None => reject_text("Please enter a non-empty type."),
            }),
            other => Err(EngineError::UnknownState { state: other }),
        }
    }

    pub fn assemble(&self) -> Result<String, IncompleteInstruction> {
        let text_kind = require(
            &self.text_kind,
            ScenarioKind::ReadingMultipleChoice,
            "text_kind",
        )?;
        let text = match text_kind {
            Choice::Fixed(kind) => kind.wording().to_string(),
            Choice::Custom(s) => s.clone(),
        };
        Ok(format!("Read the {text}. Circle a, b, or c."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn story_text_kind() {
        let mut scenario = ReadingMultipleChoice::default();
        let step = scenario
            .transition(StateId::ReadingMcTextKind, "Story")
            .unwrap();
        assert_eq!(step, Step::Finish);
        assert_eq!(
            scenario.assemble().unwrap(),
            "Read the story. Circle a, b, or c."
        );
    }

    #[test]
    fn custom_text_kind() {
        let mut scenario = ReadingMultipleChoice::default();
        scenario
            .transition(StateId::ReadingMcTextKind, "Other")
            .unwrap();
        scenario
            .transition(StateId::ReadingMcTextKindOther, "postcard")
            .unwrap();
        assert_eq!(
            scenario.assemble().unwrap(),
            "Read the postcard. Circle a, b, or c."
        );
    }

    #[test]
    fn back_to_reading() {
        let mut scenario = ReadingMultipleChoice::default();
        let step = scenario
            .transition(StateId::ReadingMcTextKind, "Back to Reading")
            .unwrap();
        assert_eq!(step, Step::Navigate(TaskCategory::Reading));
    }

    #[test]
    fn assemble_without_fields_fails() {
        let scenario = ReadingMultipleChoice::default();
        assert!(scenario.assemble().is_err());
    }
}

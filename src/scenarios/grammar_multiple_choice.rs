//! Grammar: multiple choice.
//!
//! kind → subject (with Other) → finish.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, IncompleteInstruction};
use crate::states::StateId;

use super::{
    ask, ask_text, custom_text, reject, reject_text, require, Choice, Entry, OptionTable,
    ScenarioKind, Selection, Step, select,
};

/// The task wording is fixed either way; "Other" is an accepted kind with no
/// custom text of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum McTask {
    CircleCorrect,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum McSubject {
    Word,
    Verb,
    Answer,
}

impl McSubject {
    fn wording(&self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::Verb => "verb",
            Self::Answer => "answer",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrammarMultipleChoice {
    task: Option<McTask>,
    subject: Option<Choice<McSubject>>,
}

const TASKS: OptionTable<McTask> = &[
    ("Circle the correct one", Entry::Value(McTask::CircleCorrect)),
    ("Other", Entry::Value(McTask::Other)),
];

const SUBJECTS: OptionTable<McSubject> = &[
    ("Word", Entry::Value(McSubject::Word)),
    ("Verb", Entry::Value(McSubject::Verb)),
    ("Answer", Entry::Value(McSubject::Answer)),
    ("Other", Entry::Other),
];

pub(crate) fn intro() -> Step {
    ask(StateId::GrammarMcKind, "Choose the type of task:", TASKS)
}

impl GrammarMultipleChoice {
    pub(crate) fn transition(&mut self, state: StateId, input: &str) -> Result<Step, EngineError> {
        match state {
            StateId::GrammarMcKind => Ok(match select(TASKS, input) {
                Selection::Value(task) => {
                    self.task = Some(task);
                    ask(StateId::GrammarMcSubject, "Choose the subject:", SUBJECTS)
                }
                _ => reject(TASKS, "Invalid task type. Please choose from the options."),
            }),
            StateId::GrammarMcSubject => Ok(match select(SUBJECTS, input) {
                Selection::Value(subject) => {
                    self.subject = Some(Choice::Fixed(subject));
                    Step::Finish
                }
                Selection::Other => {
                    ask_text(StateId::GrammarMcSubjectOther, "Please specify the subject:")
                }
                _ => reject(SUBJECTS, "Invalid subject. Please choose from the options."),
            }),
            StateId::GrammarMcSubjectOther => Ok(match custom_text(input) {
                Some(text) => {
                    self.subject = Some(Choice::Custom(text));
                    Step::Finish
                }
                None => reject_text("Please enter a non-empty value."),
            }),
            other => Err(EngineError::UnknownState { state: other }),
        }
    }

    pub fn assemble(&self) -> Result<String, IncompleteInstruction> {
        const SCENARIO: ScenarioKind = ScenarioKind::GrammarMultipleChoice;
        let subject = require(&self.subject, SCENARIO, "subject")?;
        let text = match subject {
            Choice::Fixed(s) => s.wording().to_string(),
            Choice::Custom(s) => s.clone(),
        };
        Ok(format!("Circle the correct {text}."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_the_correct_verb() {
        let mut scenario = GrammarMultipleChoice::default();
        scenario
            .transition(StateId::GrammarMcKind, "Circle the correct one")
            .unwrap();
        let step = scenario
            .transition(StateId::GrammarMcSubject, "Verb")
            .unwrap();
        assert_eq!(step, Step::Finish);
        assert_eq!(scenario.assemble().unwrap(), "Circle the correct verb.");
    }

    #[test]
    fn other_task_kind_still_asks_subject() {
        let mut scenario = GrammarMultipleChoice::default();
        let step = scenario.transition(StateId::GrammarMcKind, "Other").unwrap();
        assert!(matches!(
            step,
            Step::Ask { next: StateId::GrammarMcSubject, .. }
        ));
    }

    #[test]
    fn custom_subject_verbatim() {
        let mut scenario = GrammarMultipleChoice::default();
        scenario
            .transition(StateId::GrammarMcKind, "Circle the correct one")
            .unwrap();
        scenario
            .transition(StateId::GrammarMcSubject, "Other")
            .unwrap();
        scenario
            .transition(StateId::GrammarMcSubjectOther, "preposition")
            .unwrap();
        assert_eq!(
            scenario.assemble().unwrap(),
            "Circle the correct preposition."
        );
    }

    #[test]
    fn invalid_subject_message() {
        let mut scenario = GrammarMultipleChoice::default();
        scenario
            .transition(StateId::GrammarMcKind, "Circle the correct one")
            .unwrap();
        let step = scenario
            .transition(StateId::GrammarMcSubject, "word")
            .unwrap();
        match step {
            Step::Reject { message, .. } => {
                assert_eq!(message, "Invalid subject. Please choose from the options.");
            }
            other => panic!("expected Reject, got {other:?}"),
        }
    }
}

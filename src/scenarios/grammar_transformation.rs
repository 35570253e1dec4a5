//! Grammar: transformation.
//!
//! kind → {opposite-adjective: immediate finish; change-tense:
//! tense1 (with Other) → tense2 (with Other)} → finish.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, IncompleteInstruction};
use crate::session::TaskCategory;
use crate::states::StateId;

use super::{
    ask, ask_text, custom_text, reject, reject_text, require, Entry, OptionTable, ScenarioKind,
    Selection, Step, PICK_ONE, select,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformationTask {
    OppositeAdjective,
    ChangeTense,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrammarTransformation {
    task: Option<TransformationTask>,
    initial_tense: Option<String>,
    target_tense: Option<String>,
}

const TASKS: OptionTable<TransformationTask> = &[
    (
        "Opposite adjective",
        Entry::Value(TransformationTask::OppositeAdjective),
    ),
    ("Change tense", Entry::Value(TransformationTask::ChangeTense)),
    ("Back to Grammar", Entry::Back(TaskCategory::Grammar)),
];

/// Transformation offers a shorter tense list than completion does.
const TENSES: OptionTable<&'static str> = &[
    ("Present Simple", Entry::Value("Present Simple")),
    ("Present Continuous", Entry::Value("Present Continuous")),
    ("Past Simple", Entry::Value("Past Simple")),
    ("Past Continuous", Entry::Value("Past Continuous")),
    ("Present Perfect", Entry::Value("Present Perfect")),
    ("Other", Entry::Other),
];

const EMPTY_VALUE: &str = "Please enter a non-empty value.";

pub(crate) fn intro() -> Step {
    ask(
        StateId::TransformationKind,
        "What type of transformation do you want to create?",
        TASKS,
    )
}

impl GrammarTransformation {
    pub(crate) fn transition(&mut self, state: StateId, input: &str) -> Result<Step, EngineError> {
        match state {
            StateId::TransformationKind => Ok(match select(TASKS, input) {
                Selection::Value(task) => {
                    self.task = Some(task);
                    match task {
                        TransformationTask::OppositeAdjective => Step::Finish,
                        TransformationTask::ChangeTense => ask(
                            StateId::TransformationInitialTense,
                            "What is the initial tense?",
                            TENSES,
                        ),
                    }
                }
                Selection::Back(cat) => Step::Navigate(cat),
                _ => reject(TASKS, PICK_ONE),
            }),
            StateId::TransformationInitialTense => Ok(match select(TENSES, input) {
                Selection::Value(tense) => {
                    self.initial_tense = Some(tense.to_string());
                    ask_target_tense()
                }
                Selection::Other => ask_text(
                    StateId::TransformationInitialTenseCustom,
                    "Please enter the initial tense:",
                ),
                _ => reject(TENSES, PICK_ONE),
            }),
            StateId::TransformationInitialTenseCustom => Ok(match custom_text(input) {
                Some(tense) => {
                    self.initial_tense = Some(tense);
                    ask_target_tense()
                }
                None => reject_text(EMPTY_VALUE),
            }),
            StateId::TransformationTargetTense => Ok(match select(TENSES, input) {
                Selection::Value(tense) => {
                    self.target_tense = Some(tense.to_string());
                    Step::Finish
                }
                Selection::Other => ask_text(
                    StateId::TransformationTargetTenseCustom,
                    "Please enter the target tense:",
                ),
                _ => reject(TENSES, PICK_ONE),
            }),
            StateId::TransformationTargetTenseCustom => Ok(match custom_text(input) {
                Some(tense) => {
                    self.target_tense = Some(tense);
                    Step::Finish
                }
                None => reject_text(EMPTY_VALUE),
            }),
            other => Err(EngineError::UnknownState { state: other }),
        }
    }

    pub fn assemble(&self) -> Result<String, IncompleteInstruction> {
        const SCENARIO: ScenarioKind = ScenarioKind::GrammarTransformation;
        let task = *require(&self.task, SCENARIO, "task")?;

        Ok(match task {
            TransformationTask::OppositeAdjective => {
                "Rewrite the sentences using the opposite adjective.".to_string()
            }
            TransformationTask::ChangeTense => {
                let initial = require(&self.initial_tense, SCENARIO, "initial_tense")?;
                let target = require(&self.target_tense, SCENARIO, "target_tense")?;
                format!("Change the sentences from the {initial} to the {target}.")
            }
        })
    }
}

fn ask_target_tense() -> Step {
    ask(
        StateId::TransformationTargetTense,
        "What is the target tense?",
        TENSES,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_tense_past_simple_to_present_perfect() {
        let mut scenario = GrammarTransformation::default();
        scenario
            .transition(StateId::TransformationKind, "Change tense")
            .unwrap();
        scenario
            .transition(StateId::TransformationInitialTense, "Past Simple")
            .unwrap();
        let step = scenario
            .transition(StateId::TransformationTargetTense, "Present Perfect")
            .unwrap();
        assert_eq!(step, Step::Finish);
        assert_eq!(
            scenario.assemble().unwrap(),
            "Change the sentences from the Past Simple to the Present Perfect."
        );
    }

    #[test]
    fn opposite_adjective_finishes_immediately() {
        let mut scenario = GrammarTransformation::default();
        let step = scenario
            .transition(StateId::TransformationKind, "Opposite adjective")
            .unwrap();
        assert_eq!(step, Step::Finish);
        assert_eq!(
            scenario.assemble().unwrap(),
            "Rewrite the sentences using the opposite adjective."
        );
    }

    #[test]
    fn custom_tenses() {
        let mut scenario = GrammarTransformation::default();
        scenario
            .transition(StateId::TransformationKind, "Change tense")
            .unwrap();
        scenario
            .transition(StateId::TransformationInitialTense, "Other")
            .unwrap();
        scenario
            .transition(StateId::TransformationInitialTenseCustom, "Future Simple")
            .unwrap();
        scenario
            .transition(StateId::TransformationTargetTense, "Other")
            .unwrap();
        scenario
            .transition(StateId::TransformationTargetTenseCustom, "Future Perfect")
            .unwrap();
        assert_eq!(
            scenario.assemble().unwrap(),
            "Change the sentences from the Future Simple to the Future Perfect."
        );
    }

    #[test]
    fn unknown_tense_rejected_with_options() {
        let mut scenario = GrammarTransformation::default();
        scenario
            .transition(StateId::TransformationKind, "Change tense")
            .unwrap();
        let step = scenario
            .transition(StateId::TransformationInitialTense, "Past Perfect Continuous")
            .unwrap();
        match step {
            Step::Reject { options, .. } => {
                assert_eq!(options, Some(super::super::labels(TENSES)));
            }
            other => panic!("expected Reject, got {other:?}"),
        }
    }

    #[test]
    fn back_to_grammar() {
        let mut scenario = GrammarTransformation::default();
        let step = scenario
            .transition(StateId::TransformationKind, "Back to Grammar")
            .unwrap();
        assert_eq!(step, Step::Navigate(TaskCategory::Grammar));
    }
}

//! Vocabulary: labelling pictures.
//!
//! label-category → task-format → word-list yes/no → finish.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, IncompleteInstruction};
use crate::session::TaskCategory;
use crate::states::StateId;

use super::{
    ask, ask_text, custom_text, reject, reject_text, require, Choice, Entry, OptionTable,
    ScenarioKind, Selection, Step, PICK_ONE, PICK_YES_NO, select,
};

/// What the pictures show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelKind {
    Actions,
    Places,
    Objects,
}

/// How the labels are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelFormat {
    Plain,
    IngForm,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Labelling {
    label: Option<Choice<LabelKind>>,
    format: Option<LabelFormat>,
    word_list: Option<bool>,
}

const LABEL_KINDS: OptionTable<LabelKind> = &[
    ("Actions (verbs)", Entry::Value(LabelKind::Actions)),
    ("Places/buildings", Entry::Value(LabelKind::Places)),
    ("Objects/things", Entry::Value(LabelKind::Objects)),
    ("Other", Entry::Other),
    ("Back to vocabulary", Entry::Back(TaskCategory::Vocabulary)),
];

const FORMATS: OptionTable<LabelFormat> = &[
    ("Just label the pictures", Entry::Value(LabelFormat::Plain)),
    (
        "Label using the verb +ing form",
        Entry::Value(LabelFormat::IngForm),
    ),
];

const WORD_LIST: OptionTable<bool> = &[
    ("Yes", Entry::Value(true)),
    ("No", Entry::Value(false)),
];

pub(crate) fn intro() -> Step {
    ask(
        StateId::LabellingLabelType,
        "What do you want to label?",
        LABEL_KINDS,
    )
}

impl Labelling {
    pub(crate) fn transition(&mut self, state: StateId, input: &str) -> Result<Step, EngineError> {
        match state {
            StateId::LabellingLabelType => Ok(match select(LABEL_KINDS, input) {
                Selection::Value(kind) => {
                    self.label = Some(Choice::Fixed(kind));
                    self.ask_format()
                }
                Selection::Other => ask_text(
                    StateId::LabellingLabelTypeOther,
                    "Please enter your own type:",
                ),
                Selection::Back(cat) => Step::Navigate(cat),
                Selection::Invalid => reject(LABEL_KINDS, PICK_ONE),
            }),
            StateId::LabellingLabelTypeOther => Ok(match custom_text(input) {
                Some(text) => {
                    self.label = Some(Choice::Custom(text));
                    self.ask_format()
                }
                None => reject_text(
                    "Please enter a non-empty type (e.g., 'Food', 'Transportation').",
                ),
            }),
            StateId::LabellingTaskFormat => Ok(match select(FORMATS, input) {
                Selection::Value(format) => {
                    self.format = Some(format);
                    ask(
                        StateId::LabellingWordList,
                        "Do you want to provide a word list for students?",
                        WORD_LIST,
                    )
                }
                _ => reject(FORMATS, PICK_ONE),
            }),
            StateId::LabellingWordList => Ok(match select(WORD_LIST, input) {
                Selection::Value(with_list) => {
                    self.word_list = Some(with_list);
                    Step::Finish
                }
                _ => reject(WORD_LIST, PICK_YES_NO),
            }),
            other => Err(EngineError::UnknownState { state: other }),
        }
    }

    fn ask_format(&self) -> Step {
        ask(
            StateId::LabellingTaskFormat,
            "What is the format of the task?",
            FORMATS,
        )
    }

    pub fn assemble(&self) -> Result<String, IncompleteInstruction> {
        const SCENARIO: ScenarioKind = ScenarioKind::Labelling;
        let label = require(&self.label, SCENARIO, "label")?;
        let format = *require(&self.format, SCENARIO, "format")?;
        let with_list = *require(&self.word_list, SCENARIO, "word_list")?;

        let ing_verbs = matches!(label, Choice::Fixed(LabelKind::Actions))
            && format == LabelFormat::IngForm;

        let subject = match label {
            Choice::Fixed(LabelKind::Actions) if ing_verbs => "activities".to_string(),
            Choice::Fixed(LabelKind::Actions) => "actions".to_string(),
            Choice::Fixed(LabelKind::Places) => "places/buildings".to_string(),
            Choice::Fixed(LabelKind::Objects) => "objects".to_string(),
            Choice::Custom(text) => text.to_lowercase(),
        };

        let mut instruction = format!("Label {subject} in the pictures");
        if with_list {
            instruction.push_str(" using the words from the list");
        }
        if ing_verbs {
            instruction.push_str(" with the +ing form of the verbs");
        }
        instruction.push('.');
        Ok(instruction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(inputs: &[&str]) -> (Labelling, Step) {
        let mut scenario = Labelling::default();
        let mut state = StateId::LabellingLabelType;
        let mut last = intro();
        for input in inputs {
            last = scenario.transition(state, input).expect("transition");
            if let Step::Ask { next, .. } = &last {
                state = *next;
            }
        }
        (scenario, last)
    }

    #[test]
    fn ing_verbs_without_word_list() {
        let (scenario, step) = walk(&["Actions (verbs)", "Label using the verb +ing form", "No"]);
        assert_eq!(step, Step::Finish);
        assert_eq!(
            scenario.assemble().unwrap(),
            "Label activities in the pictures with the +ing form of the verbs."
        );
    }

    #[test]
    fn plain_actions_with_word_list() {
        let (scenario, _) = walk(&["Actions (verbs)", "Just label the pictures", "Yes"]);
        assert_eq!(
            scenario.assemble().unwrap(),
            "Label actions in the pictures using the words from the list."
        );
    }

    #[test]
    fn places_plain() {
        let (scenario, _) = walk(&["Places/buildings", "Just label the pictures", "No"]);
        assert_eq!(
            scenario.assemble().unwrap(),
            "Label places/buildings in the pictures."
        );
    }

    #[test]
    fn ing_format_without_verbs_adds_no_suffix() {
        let (scenario, _) = walk(&["Objects/things", "Label using the verb +ing form", "No"]);
        assert_eq!(scenario.assemble().unwrap(), "Label objects in the pictures.");
    }

    #[test]
    fn custom_label_is_lowercased() {
        let (scenario, _) = walk(&["Other", "Food", "Just label the pictures", "Yes"]);
        assert_eq!(
            scenario.assemble().unwrap(),
            "Label food in the pictures using the words from the list."
        );
    }

    #[test]
    fn custom_label_rejects_blank_and_keeps_going() {
        let mut scenario = Labelling::default();
        scenario
            .transition(StateId::LabellingLabelType, "Other")
            .unwrap();
        let step = scenario
            .transition(StateId::LabellingLabelTypeOther, "   ")
            .unwrap();
        assert!(matches!(step, Step::Reject { options: None, .. }));
        let step = scenario
            .transition(StateId::LabellingLabelTypeOther, "  Transportation ")
            .unwrap();
        assert!(matches!(step, Step::Ask { next: StateId::LabellingTaskFormat, .. }));
        assert_eq!(
            scenario.label,
            Some(Choice::Custom("Transportation".to_string()))
        );
    }

    #[test]
    fn invalid_label_reoffers_options() {
        let mut scenario = Labelling::default();
        let step = scenario
            .transition(StateId::LabellingLabelType, "actions (verbs)")
            .unwrap();
        match step {
            Step::Reject { options, .. } => {
                assert_eq!(options, Some(super::super::labels(LABEL_KINDS)));
            }
            other => panic!("expected Reject, got {other:?}"),
        }
    }

    #[test]
    fn back_leaves_for_vocabulary() {
        let mut scenario = Labelling::default();
        let step = scenario
            .transition(StateId::LabellingLabelType, "Back to vocabulary")
            .unwrap();
        assert_eq!(step, Step::Navigate(TaskCategory::Vocabulary));
    }

    #[test]
    fn assemble_requires_all_fields() {
        let scenario = Labelling::default();
        let err = scenario.assemble().unwrap_err();
        assert_eq!(err.scenario, ScenarioKind::Labelling);
        assert_eq!(err.field, "label");
    }

    #[test]
    fn foreign_state_is_unknown() {
        let mut scenario = Labelling::default();
        let err = scenario
            .transition(StateId::MatchingKind, "anything")
            .unwrap_err();
        assert!(matches!(err, EngineError::UnknownState { .. }));
    }
}

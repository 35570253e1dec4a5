//! Grammar: error correction.
//!
//! given-kind (with Other) → need-correction yes/no → prep-info yes/no →
//! {no: finish; yes: prep-kind → clarify (with Other)} → finish.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, IncompleteInstruction};
use crate::session::TaskCategory;
use crate::states::StateId;

use super::{
    ask, ask_text, custom_text, reject, reject_text, require, Choice, Entry, OptionTable,
    ScenarioKind, Selection, Step, PICK_ONE, PICK_YES_NO, select,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GivenKind {
    Phrases,
    Questions,
}

impl GivenKind {
    fn wording(&self) -> &'static str {
        match self {
            Self::Phrases => "phrases",
            Self::Questions => "questions",
        }
    }
}

/// What kind of preparatory material precedes the items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrepKind {
    Text,
    Audio,
    Picture,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrammarErrorCorrection {
    given: Option<Choice<GivenKind>>,
    need_correction: Option<bool>,
    prep_given: Option<bool>,
    prep_kind: Option<PrepKind>,
    clarify: Option<String>,
}

const GIVEN_KINDS: OptionTable<GivenKind> = &[
    ("Phrases", Entry::Value(GivenKind::Phrases)),
    ("Questions", Entry::Value(GivenKind::Questions)),
    ("Other", Entry::Other),
    ("Back to Grammar", Entry::Back(TaskCategory::Grammar)),
];

const YES_NO: OptionTable<bool> = &[
    ("Yes", Entry::Value(true)),
    ("No", Entry::Value(false)),
];

const PREP_KINDS: OptionTable<PrepKind> = &[
    ("Text", Entry::Value(PrepKind::Text)),
    ("Audio", Entry::Value(PrepKind::Audio)),
    ("Picture", Entry::Value(PrepKind::Picture)),
];

const CLARIFY_TEXT: OptionTable<&'static str> = &[
    ("Text", Entry::Value("Text")),
    ("Story", Entry::Value("Story")),
    ("Other", Entry::Other),
];

const CLARIFY_AUDIO: OptionTable<&'static str> = &[
    ("Dialogue", Entry::Value("Dialogue")),
    ("Other", Entry::Other),
];

const CLARIFY_PICTURE: OptionTable<&'static str> = &[
    ("Picture", Entry::Value("Picture")),
    ("Photo", Entry::Value("Photo")),
    ("Other", Entry::Other),
];

const CLARIFY_PROMPT: &str = "Clarify the preparatory information:";

pub(crate) fn intro() -> Step {
    ask(
        StateId::CorrectionGivenKind,
        "What is given? (in plural)",
        GIVEN_KINDS,
    )
}

impl GrammarErrorCorrection {
    pub(crate) fn transition(&mut self, state: StateId, input: &str) -> Result<Step, EngineError> {
        match state {
            StateId::CorrectionGivenKind => Ok(match select(GIVEN_KINDS, input) {
                Selection::Value(kind) => {
                    self.given = Some(Choice::Fixed(kind));
                    ask_need_correction(kind.wording())
                }
                Selection::Other => ask_text(
                    StateId::CorrectionGivenKindOther,
                    "Please enter your own type (in plural):",
                ),
                Selection::Back(cat) => Step::Navigate(cat),
                Selection::Invalid => reject(GIVEN_KINDS, PICK_ONE),
            }),
            StateId::CorrectionGivenKindOther => Ok(match custom_text(input) {
                Some(text) => {
                    let step = ask_need_correction(&text.to_lowercase());
                    self.given = Some(Choice::Custom(text));
                    step
                }
                None => reject_text("Please enter a non-empty type (in plural)."),
            }),
            StateId::CorrectionNeedCorrection => Ok(match select(YES_NO, input) {
                Selection::Value(need) => {
                    self.need_correction = Some(need);
                    ask(
                        StateId::CorrectionPrepGiven,
                        "Any preparatory information given?",
                        YES_NO,
                    )
                }
                _ => reject(YES_NO, PICK_YES_NO),
            }),
            StateId::CorrectionPrepGiven => Ok(match select(YES_NO, input) {
                Selection::Value(true) => {
                    self.prep_given = Some(true);
                    ask(
                        StateId::CorrectionPrepKind,
                        "Type of preparatory information:",
                        PREP_KINDS,
                    )
                }
                Selection::Value(false) => {
                    self.prep_given = Some(false);
                    Step::Finish
                }
                _ => reject(YES_NO, PICK_YES_NO),
            }),
            StateId::CorrectionPrepKind => Ok(match select(PREP_KINDS, input) {
                Selection::Value(kind) => {
                    self.prep_kind = Some(kind);
                    match kind {
                        PrepKind::Text => {
                            ask(StateId::CorrectionClarifyText, CLARIFY_PROMPT, CLARIFY_TEXT)
                        }
                        PrepKind::Audio => {
                            ask(StateId::CorrectionClarifyAudio, CLARIFY_PROMPT, CLARIFY_AUDIO)
                        }
                        PrepKind::Picture => ask(
                            StateId::CorrectionClarifyPicture,
                            CLARIFY_PROMPT,
                            CLARIFY_PICTURE,
                        ),
                    }
                }
                _ => reject(PREP_KINDS, PICK_ONE),
            }),
            StateId::CorrectionClarifyText => Ok(self.clarify_step(CLARIFY_TEXT, input)),
            StateId::CorrectionClarifyAudio => Ok(self.clarify_step(CLARIFY_AUDIO, input)),
            StateId::CorrectionClarifyPicture => Ok(self.clarify_step(CLARIFY_PICTURE, input)),
            StateId::CorrectionClarifyOther => Ok(match custom_text(input) {
                Some(text) => {
                    self.clarify = Some(text);
                    Step::Finish
                }
                None => reject_text("Please enter a non-empty value."),
            }),
            other => Err(EngineError::UnknownState { state: other }),
        }
    }

    fn clarify_step(&mut self, table: OptionTable<&'static str>, input: &str) -> Step {
        match select(table, input) {
            Selection::Value(label) => {
                self.clarify = Some(label.to_string());
                Step::Finish
            }
            Selection::Other => {
                ask_text(StateId::CorrectionClarifyOther, "Please enter your own type:")
            }
            _ => reject(table, PICK_ONE),
        }
    }

    pub fn assemble(&self) -> Result<String, IncompleteInstruction> {
        const SCENARIO: ScenarioKind = ScenarioKind::GrammarErrorCorrection;
        let given = require(&self.given, SCENARIO, "given")?;
        let need_correction = *require(&self.need_correction, SCENARIO, "need_correction")?;
        let prep_given = *require(&self.prep_given, SCENARIO, "prep_given")?;

        let items = match given {
            Choice::Fixed(kind) => kind.wording().to_string(),
            Choice::Custom(text) => text.clone(),
        };

        let mut instruction = if prep_given {
            let prep_kind = require(&self.prep_kind, SCENARIO, "prep_kind")?;
            let clarify = require(&self.clarify, SCENARIO, "clarify")?;
            let action = match prep_kind {
                PrepKind::Text => "Read the",
                PrepKind::Audio => "Listen to the",
                PrepKind::Picture => "Look at the",
            };
            format!(
                "{action} {}. Are the {items} right (✓) or wrong (✗)?",
                clarify.to_lowercase()
            )
        } else {
            format!("Are the {items} right (✓) or wrong (✗)?")
        };

        if need_correction {
            instruction.push_str(&format!(" Correct the wrong {items}."));
        }
        Ok(instruction)
    }
}

fn ask_need_correction(items: &str) -> Step {
    ask(
        StateId::CorrectionNeedCorrection,
        format!("Is it necessary to correct {items}?"),
        YES_NO,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(inputs: &[&str]) -> (GrammarErrorCorrection, Step) {
        let mut scenario = GrammarErrorCorrection::default();
        let mut state = StateId::CorrectionGivenKind;
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
    fn phrases_no_prep_no_correction() {
        let (scenario, step) = walk(&["Phrases", "No", "No"]);
        assert_eq!(step, Step::Finish);
        assert_eq!(
            scenario.assemble().unwrap(),
            "Are the phrases right (✓) or wrong (✗)?"
        );
    }

    #[test]
    fn questions_with_correction_no_prep() {
        let (scenario, _) = walk(&["Questions", "Yes", "No"]);
        assert_eq!(
            scenario.assemble().unwrap(),
            "Are the questions right (✓) or wrong (✗)? Correct the wrong questions."
        );
    }

    #[test]
    fn audio_dialogue_prep() {
        let (scenario, step) = walk(&["Phrases", "Yes", "Yes", "Audio", "Dialogue"]);
        assert_eq!(step, Step::Finish);
        assert_eq!(
            scenario.assemble().unwrap(),
            "Listen to the dialogue. Are the phrases right (✓) or wrong (✗)? \
             Correct the wrong phrases."
        );
    }

    #[test]
    fn picture_photo_prep_without_correction() {
        let (scenario, _) = walk(&["Questions", "No", "Yes", "Picture", "Photo"]);
        assert_eq!(
            scenario.assemble().unwrap(),
            "Look at the photo. Are the questions right (✓) or wrong (✗)?"
        );
    }

    #[test]
    fn text_story_prep() {
        let (scenario, _) = walk(&["Phrases", "No", "Yes", "Text", "Story"]);
        assert_eq!(
            scenario.assemble().unwrap(),
            "Read the story. Are the phrases right (✓) or wrong (✗)?"
        );
    }

    #[test]
    fn custom_given_kind_and_custom_clarify() {
        let (scenario, _) = walk(&[
            "Other",
            "Statements",
            "Yes",
            "Yes",
            "Text",
            "Other",
            "Postcard",
        ]);
        assert_eq!(
            scenario.assemble().unwrap(),
            "Read the postcard. Are the Statements right (✓) or wrong (✗)? \
             Correct the wrong Statements."
        );
    }

    #[test]
    fn need_correction_prompt_lowercases_custom_kind() {
        let (_, step) = walk(&["Other", "Statements"]);
        match step {
            Step::Ask { prompt, .. } => {
                assert_eq!(prompt, "Is it necessary to correct statements?");
            }
            other => panic!("expected Ask, got {other:?}"),
        }
    }

    #[test]
    fn clarify_options_depend_on_prep_kind() {
        let (_, step) = walk(&["Phrases", "No", "Yes", "Audio"]);
        match step {
            Step::Ask { options, .. } => {
                assert_eq!(
                    options,
                    Some(vec!["Dialogue".to_string(), "Other".to_string()])
                );
            }
            other => panic!("expected Ask, got {other:?}"),
        }
    }

    #[test]
    fn back_to_grammar() {
        let (_, step) = walk(&["Back to Grammar"]);
        assert_eq!(step, Step::Navigate(TaskCategory::Grammar));
    }
}

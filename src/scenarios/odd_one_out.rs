//! Vocabulary: odd one out.
//!
//! kind → {circle-different: criterion (with Other); circle-sound:
//! free-text sound} → finish.

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
pub enum OddKind {
    CircleDifferent,
    CircleSound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Sound,
    Meaning,
}

impl Criterion {
    fn wording(&self) -> &'static str {
        match self {
            Self::Sound => "sound",
            Self::Meaning => "meaning",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OddOneOut {
    kind: Option<OddKind>,
    criterion: Option<Choice<Criterion>>,
    sound: Option<String>,
}

const KINDS: OptionTable<OddKind> = &[
    (
        "Circle the different word",
        Entry::Value(OddKind::CircleDifferent),
    ),
    (
        "Circle the word with certain sound",
        Entry::Value(OddKind::CircleSound),
    ),
    ("Back to vocabulary", Entry::Back(TaskCategory::Vocabulary)),
];

const CRITERIA: OptionTable<Criterion> = &[
    ("Sound", Entry::Value(Criterion::Sound)),
    ("Meaning", Entry::Value(Criterion::Meaning)),
    ("Other", Entry::Other),
];

pub(crate) fn intro() -> Step {
    ask(
        StateId::OddOneOutKind,
        "What type of odd one out task do you want to create?",
        KINDS,
    )
}

impl OddOneOut {
    pub(crate) fn transition(&mut self, state: StateId, input: &str) -> Result<Step, EngineError> {
        match state {
            StateId::OddOneOutKind => Ok(match select(KINDS, input) {
                Selection::Value(kind) => {
                    self.kind = Some(kind);
                    match kind {
                        OddKind::CircleDifferent => {
                            ask(StateId::OddOneOutCriterion, "What is different?", CRITERIA)
                        }
                        OddKind::CircleSound => ask_text(
                            StateId::OddOneOutSound,
                            "Type the sound. Example: /iz/.",
                        ),
                    }
                }
                Selection::Back(cat) => Step::Navigate(cat),
                _ => reject(KINDS, PICK_ONE),
            }),
            StateId::OddOneOutCriterion => Ok(match select(CRITERIA, input) {
                Selection::Value(criterion) => {
                    self.criterion = Some(Choice::Fixed(criterion));
                    Step::Finish
                }
                Selection::Other => ask_text(
                    StateId::OddOneOutCriterionOther,
                    "Please enter your own criterion:",
                ),
                _ => reject(CRITERIA, PICK_ONE),
            }),
            StateId::OddOneOutCriterionOther => Ok(match custom_text(input) {
                Some(text) => {
                    self.criterion = Some(Choice::Custom(text));
                    Step::Finish
                }
                None => reject_text("Please enter a non-empty criterion."),
            }),
            StateId::OddOneOutSound => Ok(match custom_text(input) {
                Some(sound) => {
                    self.sound = Some(sound);
                    Step::Finish
                }
                None => reject_text("Please enter a non-empty sound (e.g., /iz/)."),
            }),
            other => Err(EngineError::UnknownState { state: other }),
        }
    }

    pub fn assemble(&self) -> Result<String, IncompleteInstruction> {
        const SCENARIO: ScenarioKind = ScenarioKind::OddOneOut;
        let kind = *require(&self.kind, SCENARIO, "kind")?;

        Ok(match kind {
            OddKind::CircleDifferent => {
                let criterion = require(&self.criterion, SCENARIO, "criterion")?;
                let text = match criterion {
                    Choice::Fixed(c) => c.wording().to_string(),
                    Choice::Custom(s) => s.clone(),
                };
                format!("Circle the word with a different {text}.")
            }
            OddKind::CircleSound => {
                let sound = require(&self.sound, SCENARIO, "sound")?;
                format!("Circle one word in each group which ends in {sound}.")
            }
        })
    }
}

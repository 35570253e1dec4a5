//! Vocabulary: word building.
//!
//! build-kind → {missing-letters: word-type → missing-kind;
//! words-from-letters: word-type; forms-of-words: build-type → given-type}
//! → finish.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, IncompleteInstruction};
use crate::session::TaskCategory;
use crate::states::StateId;

use super::{
    ask, ask_text, custom_text, reject, reject_text, require, Choice, Entry, OptionTable,
    ScenarioKind, Selection, Step, WordType, PICK_ONE, select,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildKind {
    MissingLetters,
    WordsFromLetters,
    FormsOfWords,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingKind {
    Letters,
    Vowels,
    Consonants,
}

impl MissingKind {
    fn wording(&self) -> &'static str {
        match self {
            Self::Letters => "letters",
            Self::Vowels => "vowels",
            Self::Consonants => "consonants",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordBuilding {
    kind: Option<BuildKind>,
    word_type: Option<Choice<WordType>>,
    missing: Option<MissingKind>,
    build_type: Option<Choice<WordType>>,
    given_type: Option<Choice<WordType>>,
}

const KINDS: OptionTable<BuildKind> = &[
    ("Missing letters", Entry::Value(BuildKind::MissingLetters)),
    ("Words from letters", Entry::Value(BuildKind::WordsFromLetters)),
    ("Forms of words", Entry::Value(BuildKind::FormsOfWords)),
    ("Back to vocabulary", Entry::Back(TaskCategory::Vocabulary)),
];

const MISSING_WORD_TYPES: OptionTable<WordType> = &[
    ("Words", Entry::Value(WordType::Words)),
    ("Adjectives", Entry::Value(WordType::Adjectives)),
    ("Nouns", Entry::Value(WordType::Nouns)),
    ("Verbs", Entry::Value(WordType::Verbs)),
    ("Other", Entry::Other),
];

const BUILD_WORD_TYPES: OptionTable<WordType> = &[
    ("Words", Entry::Value(WordType::Words)),
    ("Nouns", Entry::Value(WordType::Nouns)),
    ("Verbs", Entry::Value(WordType::Verbs)),
    ("Adjectives", Entry::Value(WordType::Adjectives)),
    ("Other", Entry::Other),
];

const MISSING_KINDS: OptionTable<MissingKind> = &[
    ("Letters", Entry::Value(MissingKind::Letters)),
    ("Vowels", Entry::Value(MissingKind::Vowels)),
    ("Consonants", Entry::Value(MissingKind::Consonants)),
];

const OWN_TYPE_PROMPT: &str = "Please enter your own type:";
const EMPTY_TYPE: &str = "Please enter a non-empty type.";

pub(crate) fn intro() -> Step {
    ask(
        StateId::WordBuildingKind,
        "What type of word-building task do you want to create?",
        KINDS,
    )
}

impl WordBuilding {
    pub(crate) fn transition(&mut self, state: StateId, input: &str) -> Result<Step, EngineError> {
        match state {
            StateId::WordBuildingKind => Ok(match select(KINDS, input) {
                Selection::Value(kind) => {
                    self.kind = Some(kind);
                    match kind {
                        BuildKind::MissingLetters => ask(
                            StateId::WordBuildingMissingWordType,
                            "What type of words?",
                            MISSING_WORD_TYPES,
                        ),
                        BuildKind::WordsFromLetters => ask(
                            StateId::WordBuildingLettersWordType,
                            "What type of words should students build?",
                            BUILD_WORD_TYPES,
                        ),
                        BuildKind::FormsOfWords => ask(
                            StateId::WordBuildingFormsBuildType,
                            "What type of words should students build?",
                            BUILD_WORD_TYPES,
                        ),
                    }
                }
                Selection::Back(cat) => Step::Navigate(cat),
                _ => reject(KINDS, PICK_ONE),
            }),

            // Missing letters
            StateId::WordBuildingMissingWordType => {
                Ok(match select(MISSING_WORD_TYPES, input) {
                    Selection::Value(wt) => {
                        self.word_type = Some(Choice::Fixed(wt));
                        self.ask_missing_kind()
                    }
                    Selection::Other => {
                        ask_text(StateId::WordBuildingMissingWordTypeOther, OWN_TYPE_PROMPT)
                    }
                    _ => reject(MISSING_WORD_TYPES, PICK_ONE),
                })
            }
            StateId::WordBuildingMissingWordTypeOther => Ok(match custom_text(input) {
                Some(text) => {
                    self.word_type = Some(Choice::Custom(text));
                    self.ask_missing_kind()
                }
                None => reject_text(EMPTY_TYPE),
            }),
            StateId::WordBuildingMissingKind => Ok(match select(MISSING_KINDS, input) {
                Selection::Value(missing) => {
                    self.missing = Some(missing);
                    Step::Finish
                }
                _ => reject(MISSING_KINDS, PICK_ONE),
            }),

            // Words from letters
            StateId::WordBuildingLettersWordType => {
                Ok(match select(BUILD_WORD_TYPES, input) {
                    Selection::Value(wt) => {
                        self.word_type = Some(Choice::Fixed(wt));
                        Step::Finish
                    }
                    Selection::Other => {
                        ask_text(StateId::WordBuildingLettersWordTypeOther, OWN_TYPE_PROMPT)
                    }
                    _ => reject(BUILD_WORD_TYPES, PICK_ONE),
                })
            }
            StateId::WordBuildingLettersWordTypeOther => Ok(match custom_text(input) {
                Some(text) => {
                    self.word_type = Some(Choice::Custom(text));
                    Step::Finish
                }
                None => reject_text(EMPTY_TYPE),
            }),

            // Forms of words
            StateId::WordBuildingFormsBuildType => {
                Ok(match select(BUILD_WORD_TYPES, input) {
                    Selection::Value(wt) => {
                        self.build_type = Some(Choice::Fixed(wt));
                        self.ask_given_type()
                    }
                    Selection::Other => {
                        ask_text(StateId::WordBuildingFormsBuildTypeOther, OWN_TYPE_PROMPT)
                    }
                    _ => reject(BUILD_WORD_TYPES, PICK_ONE),
                })
            }
            StateId::WordBuildingFormsBuildTypeOther => Ok(match custom_text(input) {
                Some(text) => {
                    self.build_type = Some(Choice::Custom(text));
                    self.ask_given_type()
                }
                None => reject_text(EMPTY_TYPE),
            }),
            StateId::WordBuildingFormsGivenType => {
                Ok(match select(BUILD_WORD_TYPES, input) {
                    Selection::Value(wt) => {
                        self.given_type = Some(Choice::Fixed(wt));
                        Step::Finish
                    }
                    Selection::Other => {
                        ask_text(StateId::WordBuildingFormsGivenTypeOther, OWN_TYPE_PROMPT)
                    }
                    _ => reject(BUILD_WORD_TYPES, PICK_ONE),
                })
            }
            StateId::WordBuildingFormsGivenTypeOther => Ok(match custom_text(input) {
                Some(text) => {
                    self.given_type = Some(Choice::Custom(text));
                    Step::Finish
                }
                None => reject_text(EMPTY_TYPE),
            }),

            other => Err(EngineError::UnknownState { state: other }),
        }
    }

    fn ask_missing_kind(&self) -> Step {
        ask(StateId::WordBuildingMissingKind, "What is missing?", MISSING_KINDS)
    }

    fn ask_given_type(&self) -> Step {
        ask(
            StateId::WordBuildingFormsGivenType,
            "What type of words is given?",
            BUILD_WORD_TYPES,
        )
    }

    pub fn assemble(&self) -> Result<String, IncompleteInstruction> {
        const SCENARIO: ScenarioKind = ScenarioKind::WordBuilding;
        let kind = *require(&self.kind, SCENARIO, "kind")?;

        Ok(match kind {
            BuildKind::MissingLetters => {
                let word_type = require(&self.word_type, SCENARIO, "word_type")?;
                let missing = require(&self.missing, SCENARIO, "missing")?;
                format!(
                    "Complete the {} with the missing {}.",
                    word_type.word_text(),
                    missing.wording()
                )
            }
            BuildKind::WordsFromLetters => {
                let word_type = require(&self.word_type, SCENARIO, "word_type")?;
                format!("Build {} from the letters.", word_type.word_text())
            }
            BuildKind::FormsOfWords => {
                let build = require(&self.build_type, SCENARIO, "build_type")?;
                let given = require(&self.given_type, SCENARIO, "given_type")?;
                format!(
                    "Make {} from {} in the list.",
                    build.word_text(),
                    given.word_text()
                )
            }
        })
    }
}

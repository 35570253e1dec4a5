//! Vocabulary: synonyms, antonyms, definitions and lexical sets.
//!
//! kind → {choose-pos: first-pos → second-pos; opposite/similar:
//! adjective-kind} → finish.

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
pub enum SynonymsTask {
    ChoosePartOfSpeech,
    OppositeSimilarAdjectives,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
    Nouns,
    Pronouns,
    Adjectives,
    Verbs,
    Adverbs,
}

impl PartOfSpeech {
    fn wording(&self) -> &'static str {
        match self {
            Self::Nouns => "nouns",
            Self::Pronouns => "pronouns",
            Self::Adjectives => "adjectives",
            Self::Verbs => "verbs",
            Self::Adverbs => "adverbs",
        }
    }
}

fn pos_text(choice: &Choice<PartOfSpeech>) -> String {
    match choice {
        Choice::Fixed(pos) => pos.wording().to_string(),
        Choice::Custom(s) => s.clone(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjectiveKind {
    Opposite,
    Similar,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Synonyms {
    task: Option<SynonymsTask>,
    first: Option<Choice<PartOfSpeech>>,
    second: Option<Choice<PartOfSpeech>>,
    adjective: Option<AdjectiveKind>,
}

const TASKS: OptionTable<SynonymsTask> = &[
    (
        "Choose part of speech out of two",
        Entry::Value(SynonymsTask::ChoosePartOfSpeech),
    ),
    (
        "Opposite/similar adjectives",
        Entry::Value(SynonymsTask::OppositeSimilarAdjectives),
    ),
    ("Back to vocabulary", Entry::Back(TaskCategory::Vocabulary)),
];

const PARTS_OF_SPEECH: OptionTable<PartOfSpeech> = &[
    ("Nouns", Entry::Value(PartOfSpeech::Nouns)),
    ("Pronouns", Entry::Value(PartOfSpeech::Pronouns)),
    ("Adjectives", Entry::Value(PartOfSpeech::Adjectives)),
    ("Verbs", Entry::Value(PartOfSpeech::Verbs)),
    ("Adverbs", Entry::Value(PartOfSpeech::Adverbs)),
    ("Other", Entry::Other),
];

const ADJECTIVE_KINDS: OptionTable<AdjectiveKind> = &[
    ("Opposite", Entry::Value(AdjectiveKind::Opposite)),
    ("Similar", Entry::Value(AdjectiveKind::Similar)),
];

const OWN_POS_PROMPT: &str = "Please enter your own part of speech:";
const EMPTY_POS: &str = "Please enter a non-empty part of speech.";

pub(crate) fn intro() -> Step {
    ask(
        StateId::SynonymsKind,
        "What type of task do you want to create?",
        TASKS,
    )
}

impl Synonyms {
    pub(crate) fn transition(&mut self, state: StateId, input: &str) -> Result<Step, EngineError> {
        match state {
            StateId::SynonymsKind => Ok(match select(TASKS, input) {
                Selection::Value(task) => {
                    self.task = Some(task);
                    match task {
                        SynonymsTask::ChoosePartOfSpeech => ask(
                            StateId::SynonymsFirstPos,
                            "Choose the first part of speech:",
                            PARTS_OF_SPEECH,
                        ),
                        SynonymsTask::OppositeSimilarAdjectives => ask(
                            StateId::SynonymsAdjectiveKind,
                            "What kind of adjectives?",
                            ADJECTIVE_KINDS,
                        ),
                    }
                }
                Selection::Back(cat) => Step::Navigate(cat),
                _ => reject(TASKS, PICK_ONE),
            }),
            StateId::SynonymsFirstPos => Ok(match select(PARTS_OF_SPEECH, input) {
                Selection::Value(pos) => {
                    self.first = Some(Choice::Fixed(pos));
                    self.ask_second_pos()
                }
                Selection::Other => ask_text(StateId::SynonymsFirstPosOther, OWN_POS_PROMPT),
                _ => reject(PARTS_OF_SPEECH, PICK_ONE),
            }),
            StateId::SynonymsFirstPosOther => Ok(match custom_text(input) {
                Some(text) => {
                    self.first = Some(Choice::Custom(text));
                    self.ask_second_pos()
                }
                None => reject_text(EMPTY_POS),
            }),
            StateId::SynonymsSecondPos => Ok(match select(PARTS_OF_SPEECH, input) {
                Selection::Value(pos) => {
                    self.second = Some(Choice::Fixed(pos));
                    Step::Finish
                }
                Selection::Other => ask_text(StateId::SynonymsSecondPosOther, OWN_POS_PROMPT),
                _ => reject(PARTS_OF_SPEECH, PICK_ONE),
            }),
            StateId::SynonymsSecondPosOther => Ok(match custom_text(input) {
                Some(text) => {
                    self.second = Some(Choice::Custom(text));
                    Step::Finish
                }
                None => reject_text(EMPTY_POS),
            }),
            StateId::SynonymsAdjectiveKind => Ok(match select(ADJECTIVE_KINDS, input) {
                Selection::Value(kind) => {
                    self.adjective = Some(kind);
                    Step::Finish
                }
                _ => reject(ADJECTIVE_KINDS, PICK_ONE),
            }),
            other => Err(EngineError::UnknownState { state: other }),
        }
    }

    fn ask_second_pos(&self) -> Step {
        ask(
            StateId::SynonymsSecondPos,
            "Choose the second part of speech:",
            PARTS_OF_SPEECH,
        )
    }

    pub fn assemble(&self) -> Result<String, IncompleteInstruction> {
        const SCENARIO: ScenarioKind = ScenarioKind::Synonyms;
        let task = *require(&self.task, SCENARIO, "task")?;

        Ok(match task {
            SynonymsTask::ChoosePartOfSpeech => {
                let first = require(&self.first, SCENARIO, "first")?;
                let second = require(&self.second, SCENARIO, "second")?;
                format!(
                    "Are the words in bold {} or {}?",
                    pos_text(first),
                    pos_text(second)
                )
            }
            SynonymsTask::OppositeSimilarAdjectives => {
                let adjective = require(&self.adjective, SCENARIO, "adjective")?;
                let kind = match adjective {
                    AdjectiveKind::Opposite => "opposite",
                    AdjectiveKind::Similar => "similar",
                };
                format!("Write the {kind} adjectives.")
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choose_parts_of_speech() {
        let mut scenario = Synonyms::default();
        scenario
            .transition(StateId::SynonymsKind, "Choose part of speech out of two")
            .unwrap();
        scenario
            .transition(StateId::SynonymsFirstPos, "Nouns")
            .unwrap();
        let step = scenario
            .transition(StateId::SynonymsSecondPos, "Verbs")
            .unwrap();
        assert_eq!(step, Step::Finish);
        assert_eq!(
            scenario.assemble().unwrap(),
            "Are the words in bold nouns or verbs?"
        );
    }

    #[test]
    fn custom_parts_of_speech() {
        let mut scenario = Synonyms::default();
        scenario
            .transition(StateId::SynonymsKind, "Choose part of speech out of two")
            .unwrap();
        scenario
            .transition(StateId::SynonymsFirstPos, "Other")
            .unwrap();
        scenario
            .transition(StateId::SynonymsFirstPosOther, "gerunds")
            .unwrap();
        scenario
            .transition(StateId::SynonymsSecondPos, "Other")
            .unwrap();
        scenario
            .transition(StateId::SynonymsSecondPosOther, "participles")
            .unwrap();
        assert_eq!(
            scenario.assemble().unwrap(),
            "Are the words in bold gerunds or participles?"
        );
    }

    #[test]
    fn opposite_adjectives() {
        let mut scenario = Synonyms::default();
        scenario
            .transition(StateId::SynonymsKind, "Opposite/similar adjectives")
            .unwrap();
        let step = scenario
            .transition(StateId::SynonymsAdjectiveKind, "Opposite")
            .unwrap();
        assert_eq!(step, Step::Finish);
        assert_eq!(scenario.assemble().unwrap(), "Write the opposite adjectives.");
    }

    #[test]
    fn similar_adjectives() {
        let mut scenario = Synonyms::default();
        scenario
            .transition(StateId::SynonymsKind, "Opposite/similar adjectives")
            .unwrap();
        scenario
            .transition(StateId::SynonymsAdjectiveKind, "Similar")
            .unwrap();
        assert_eq!(scenario.assemble().unwrap(), "Write the similar adjectives.");
    }

    #[test]
    fn adjective_kind_rejects_unknown() {
        let mut scenario = Synonyms::default();
        scenario
            .transition(StateId::SynonymsKind, "Opposite/similar adjectives")
            .unwrap();
        let step = scenario
            .transition(StateId::SynonymsAdjectiveKind, "opposite")
            .unwrap();
        assert!(matches!(step, Step::Reject { .. }));
    }
}

//! Vocabulary: matching.
//!
//! matching-kind → {sentences-to-pictures: two ranges;
//! descriptions-to-words: word-type; questions-to-answers: two ranges;
//! other: free-text anchor → word-type} → finish.

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
pub enum MatchingKind {
    SentencesToPictures,
    DescriptionsToWords,
    QuestionsToAnswers,
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Matching {
    kind: Option<MatchingKind>,
    sentences: Option<String>,
    pictures: Option<String>,
    description_words: Option<Choice<WordType>>,
    questions: Option<String>,
    answers: Option<String>,
    anchor: Option<String>,
    target: Option<Choice<WordType>>,
}

const KINDS: OptionTable<MatchingKind> = &[
    (
        "Sentences to pictures",
        Entry::Value(MatchingKind::SentencesToPictures),
    ),
    (
        "Descriptions to words",
        Entry::Value(MatchingKind::DescriptionsToWords),
    ),
    (
        "Questions to answers",
        Entry::Value(MatchingKind::QuestionsToAnswers),
    ),
    ("Other", Entry::Value(MatchingKind::Other)),
    ("Back to vocabulary", Entry::Back(TaskCategory::Vocabulary)),
];

const WORD_TYPES: OptionTable<WordType> = &[
    ("Words", Entry::Value(WordType::Words)),
    ("Nouns", Entry::Value(WordType::Nouns)),
    ("Adjectives", Entry::Value(WordType::Adjectives)),
    ("Verbs", Entry::Value(WordType::Verbs)),
    ("Other", Entry::Other),
];

const EMPTY_VALUE: &str = "Please enter a non-empty value.";

pub(crate) fn intro() -> Step {
    ask(
        StateId::MatchingKind,
        "What type of matching task do you want to create?",
        KINDS,
    )
}

impl Matching {
    pub(crate) fn transition(&mut self, state: StateId, input: &str) -> Result<Step, EngineError> {
        match state {
            StateId::MatchingKind => Ok(match select(KINDS, input) {
                Selection::Value(kind) => {
                    self.kind = Some(kind);
                    match kind {
                        MatchingKind::SentencesToPictures => ask_text(
                            StateId::MatchingSentencesRange,
                            "How many sentences? Example: 1-6",
                        ),
                        MatchingKind::DescriptionsToWords => ask(
                            StateId::MatchingDescriptionWordType,
                            "Descriptions for which kind of words?",
                            WORD_TYPES,
                        ),
                        MatchingKind::QuestionsToAnswers => ask_text(
                            StateId::MatchingQuestionsRange,
                            "How many questions? Example: 1-6",
                        ),
                        MatchingKind::Other => {
                            ask_text(StateId::MatchingOtherAnchor, "Match what?")
                        }
                    }
                }
                Selection::Back(cat) => Step::Navigate(cat),
                _ => reject(KINDS, PICK_ONE),
            }),

            StateId::MatchingSentencesRange => Ok(match custom_text(input) {
                Some(range) => {
                    self.sentences = Some(range);
                    ask_text(
                        StateId::MatchingPicturesRange,
                        "How many pictures? Example: a-f",
                    )
                }
                None => reject_text(EMPTY_VALUE),
            }),
            StateId::MatchingPicturesRange => Ok(match custom_text(input) {
                Some(range) => {
                    self.pictures = Some(range);
                    Step::Finish
                }
                None => reject_text(EMPTY_VALUE),
            }),

            StateId::MatchingDescriptionWordType => Ok(match select(WORD_TYPES, input) {
                Selection::Value(wt) => {
                    self.description_words = Some(Choice::Fixed(wt));
                    Step::Finish
                }
                Selection::Other => ask_text(
                    StateId::MatchingDescriptionWordTypeOther,
                    "Please enter your own type:",
                ),
                _ => reject(WORD_TYPES, PICK_ONE),
            }),
            StateId::MatchingDescriptionWordTypeOther => Ok(match custom_text(input) {
                Some(text) => {
                    self.description_words = Some(Choice::Custom(text));
                    Step::Finish
                }
                None => reject_text("Please enter a non-empty type."),
            }),

            StateId::MatchingQuestionsRange => Ok(match custom_text(input) {
                Some(range) => {
                    self.questions = Some(range);
                    ask_text(
                        StateId::MatchingAnswersRange,
                        "How many answers? Example: a-f",
                    )
                }
                None => reject_text(EMPTY_VALUE),
            }),
            StateId::MatchingAnswersRange => Ok(match custom_text(input) {
                Some(range) => {
                    self.answers = Some(range);
                    Step::Finish
                }
                None => reject_text(EMPTY_VALUE),
            }),

            StateId::MatchingOtherAnchor => Ok(match custom_text(input) {
                Some(anchor) => {
                    self.anchor = Some(anchor);
                    ask(StateId::MatchingOtherTarget, "Match to what?", WORD_TYPES)
                }
                None => reject_text(EMPTY_VALUE),
            }),
            StateId::MatchingOtherTarget => Ok(match select(WORD_TYPES, input) {
                Selection::Value(wt) => {
                    self.target = Some(Choice::Fixed(wt));
                    Step::Finish
                }
                Selection::Other => ask_text(
                    StateId::MatchingOtherTargetOther,
                    "Please enter your own type:",
                ),
                _ => reject(WORD_TYPES, PICK_ONE),
            }),
            StateId::MatchingOtherTargetOther => Ok(match custom_text(input) {
                Some(text) => {
                    self.target = Some(Choice::Custom(text));
                    Step::Finish
                }
                None => reject_text("Please enter a non-empty type."),
            }),

            other => Err(EngineError::UnknownState { state: other }),
        }
    }

    pub fn assemble(&self) -> Result<String, IncompleteInstruction> {
        const SCENARIO: ScenarioKind = ScenarioKind::Matching;
        let kind = *require(&self.kind, SCENARIO, "kind")?;

        Ok(match kind {
            MatchingKind::SentencesToPictures => {
                let sentences = require(&self.sentences, SCENARIO, "sentences")?;
                let pictures = require(&self.pictures, SCENARIO, "pictures")?;
                format!("Match sentences {sentences} to pictures {pictures}.")
            }
            MatchingKind::DescriptionsToWords => {
                let words = require(&self.description_words, SCENARIO, "description_words")?;
                format!("Match the descriptions to the {}.", words.word_text())
            }
            MatchingKind::QuestionsToAnswers => {
                let questions = require(&self.questions, SCENARIO, "questions")?;
                let answers = require(&self.answers, SCENARIO, "answers")?;
                format!("Match questions {questions} to answers {answers}.")
            }
            MatchingKind::Other => {
                let anchor = require(&self.anchor, SCENARIO, "anchor")?;
                let target = require(&self.target, SCENARIO, "target")?;
                format!("Match the {anchor} to the {}.", target.word_text())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentences_to_pictures() {
        let mut scenario = Matching::default();
        scenario
            .transition(StateId::MatchingKind, "Sentences to pictures")
            .unwrap();
        scenario
            .transition(StateId::MatchingSentencesRange, " 1-6 ")
            .unwrap();
        let step = scenario
            .transition(StateId::MatchingPicturesRange, "a-f")
            .unwrap();
        assert_eq!(step, Step::Finish);
        assert_eq!(
            scenario.assemble().unwrap(),
            "Match sentences 1-6 to pictures a-f."
        );
    }

    #[test]
    fn descriptions_to_words() {
        let mut scenario = Matching::default();
        scenario
            .transition(StateId::MatchingKind, "Descriptions to words")
            .unwrap();
        let step = scenario
            .transition(StateId::MatchingDescriptionWordType, "Adjectives")
            .unwrap();
        assert_eq!(step, Step::Finish);
        assert_eq!(
            scenario.assemble().unwrap(),
            "Match the descriptions to the adjectives."
        );
    }

    #[test]
    fn questions_to_answers() {
        let mut scenario = Matching::default();
        scenario
            .transition(StateId::MatchingKind, "Questions to answers")
            .unwrap();
        scenario
            .transition(StateId::MatchingQuestionsRange, "1-8")
            .unwrap();
        scenario
            .transition(StateId::MatchingAnswersRange, "a-h")
            .unwrap();
        assert_eq!(
            scenario.assemble().unwrap(),
            "Match questions 1-8 to answers a-h."
        );
    }

    #[test]
    fn other_anchor_to_custom_target() {
        let mut scenario = Matching::default();
        scenario.transition(StateId::MatchingKind, "Other").unwrap();
        scenario
            .transition(StateId::MatchingOtherAnchor, "signs")
            .unwrap();
        scenario
            .transition(StateId::MatchingOtherTarget, "Other")
            .unwrap();
        scenario
            .transition(StateId::MatchingOtherTargetOther, "warnings")
            .unwrap();
        assert_eq!(
            scenario.assemble().unwrap(),
            "Match the signs to the warnings."
        );
    }

    #[test]
    fn empty_range_rejected_without_options() {
        let mut scenario = Matching::default();
        scenario
            .transition(StateId::MatchingKind, "Sentences to pictures")
            .unwrap();
        let step = scenario
            .transition(StateId::MatchingSentencesRange, "   ")
            .unwrap();
        assert_eq!(
            step,
            Step::Reject {
                message: EMPTY_VALUE.to_string(),
                options: None,
            }
        );
        assert_eq!(scenario.sentences, None);
    }

    #[test]
    fn range_stored_trimmed_verbatim() {
        let mut scenario = Matching::default();
        scenario
            .transition(StateId::MatchingKind, "Questions to answers")
            .unwrap();
        scenario
            .transition(StateId::MatchingQuestionsRange, "  1-10  ")
            .unwrap();
        assert_eq!(scenario.questions, Some("1-10".to_string()));
    }
}

//! Grammar: sentence/dialogue completion.
//!
//! text-kind (with Other) → task-kind → {correct-form: given-yes/no → where;
//! certain-form: tense (with Other); choose-two: tense1 → tense2;
//! phrases: given-yes/no → where; other: free-text word → given-yes/no →
//! where} → finish.
//!
//! Both tense questions offer the identical tense list.

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
pub enum TextKind {
    Text,
    Sentences,
    Conversation,
}

impl TextKind {
    fn wording(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Sentences => "sentences",
            Self::Conversation => "conversation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionTask {
    CorrectForm,
    CertainForm,
    ChooseTwo,
    Phrases,
    Other,
}

/// Where the given verbs/phrases/words are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GivenWhere {
    InBrackets,
    InBox,
    InList,
}

impl GivenWhere {
    fn wording(&self) -> &'static str {
        match self {
            Self::InBrackets => "in brackets",
            Self::InBox => "in the box",
            Self::InList => "in the list",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrammarCompletion {
    text_kind: Option<Choice<TextKind>>,
    task: Option<CompletionTask>,
    tense: Option<String>,
    first_tense: Option<String>,
    second_tense: Option<String>,
    verbs_given: Option<bool>,
    phrases_given: Option<bool>,
    completion_word: Option<String>,
    word_given: Option<bool>,
    given_where: Option<GivenWhere>,
}

const TEXT_KINDS: OptionTable<TextKind> = &[
    ("Text", Entry::Value(TextKind::Text)),
    ("Sentences", Entry::Value(TextKind::Sentences)),
    ("Conversation", Entry::Value(TextKind::Conversation)),
    ("Other", Entry::Other),
    ("Back to grammar", Entry::Back(TaskCategory::Grammar)),
];

const TASKS: OptionTable<CompletionTask> = &[
    (
        "Correct form of the verbs",
        Entry::Value(CompletionTask::CorrectForm),
    ),
    (
        "Certain form of the verb",
        Entry::Value(CompletionTask::CertainForm),
    ),
    (
        "Choose one of two forms of the verb",
        Entry::Value(CompletionTask::ChooseTwo),
    ),
    ("Phrases", Entry::Value(CompletionTask::Phrases)),
    ("Other", Entry::Value(CompletionTask::Other)),
];

/// One tense list for every tense question in this scenario.
const TENSES: OptionTable<&'static str> = &[
    ("Present Simple", Entry::Value("Present Simple")),
    ("Present Continuous", Entry::Value("Present Continuous")),
    ("Past Simple", Entry::Value("Past Simple")),
    ("Past Continuous", Entry::Value("Past Continuous")),
    ("Present Perfect", Entry::Value("Present Perfect")),
    ("Past Perfect", Entry::Value("Past Perfect")),
    ("Future Simple", Entry::Value("Future Simple")),
    ("Other", Entry::Other),
];

const YES_NO: OptionTable<bool> = &[
    ("Yes", Entry::Value(true)),
    ("No", Entry::Value(false)),
];

const WHERE_OPTIONS: OptionTable<GivenWhere> = &[
    ("in brackets", Entry::Value(GivenWhere::InBrackets)),
    ("in the box", Entry::Value(GivenWhere::InBox)),
    ("in the list", Entry::Value(GivenWhere::InList)),
];

const EMPTY_VALUE: &str = "Please enter a non-empty value.";

pub(crate) fn intro() -> Step {
    ask(
        StateId::CompletionTextKind,
        "What should be completed?",
        TEXT_KINDS,
    )
}

impl GrammarCompletion {
    pub(crate) fn transition(&mut self, state: StateId, input: &str) -> Result<Step, EngineError> {
        match state {
            StateId::CompletionTextKind => Ok(match select(TEXT_KINDS, input) {
                Selection::Value(kind) => {
                    self.text_kind = Some(Choice::Fixed(kind));
                    ask_task_kind(kind.wording())
                }
                Selection::Other => ask_text(
                    StateId::CompletionTextKindOther,
                    "Please enter your own type:",
                ),
                Selection::Back(cat) => Step::Navigate(cat),
                Selection::Invalid => reject(TEXT_KINDS, PICK_ONE),
            }),
            StateId::CompletionTextKindOther => Ok(match custom_text(input) {
                Some(text) => {
                    let step = ask_task_kind(&text.to_lowercase());
                    self.text_kind = Some(Choice::Custom(text));
                    step
                }
                None => reject_text("Please enter a non-empty type."),
            }),
            StateId::CompletionTaskKind => Ok(match select(TASKS, input) {
                Selection::Value(task) => {
                    self.task = Some(task);
                    match task {
                        CompletionTask::CorrectForm => ask(
                            StateId::CompletionVerbsGiven,
                            "Are verbs given?",
                            YES_NO,
                        ),
                        CompletionTask::CertainForm => {
                            ask(StateId::CompletionTense, "What tense?", TENSES)
                        }
                        CompletionTask::ChooseTwo => {
                            ask(StateId::CompletionFirstTense, "First tense?", TENSES)
                        }
                        CompletionTask::Phrases => ask(
                            StateId::CompletionPhrasesGiven,
                            "Are phrases given?",
                            YES_NO,
                        ),
                        CompletionTask::Other => ask_text(
                            StateId::CompletionOtherWord,
                            "What should be completed with?",
                        ),
                    }
                }
                _ => reject(TASKS, PICK_ONE),
            }),

            StateId::CompletionVerbsGiven => Ok(match select(YES_NO, input) {
                Selection::Value(given) => {
                    self.verbs_given = Some(given);
                    if given { ask_where() } else { Step::Finish }
                }
                _ => reject(YES_NO, PICK_YES_NO),
            }),
            StateId::CompletionWhere => Ok(match select(WHERE_OPTIONS, input) {
                Selection::Value(place) => {
                    self.given_where = Some(place);
                    Step::Finish
                }
                _ => reject(WHERE_OPTIONS, PICK_ONE),
            }),

            StateId::CompletionTense => Ok(match select(TENSES, input) {
                Selection::Value(tense) => {
                    self.tense = Some(tense.to_string());
                    Step::Finish
                }
                Selection::Other => {
                    ask_text(StateId::CompletionTenseCustom, "Please enter the tense:")
                }
                _ => reject(TENSES, PICK_ONE),
            }),
            StateId::CompletionTenseCustom => Ok(match custom_text(input) {
                Some(tense) => {
                    self.tense = Some(tense);
                    Step::Finish
                }
                None => reject_text(EMPTY_VALUE),
            }),

            StateId::CompletionFirstTense => Ok(match select(TENSES, input) {
                Selection::Value(tense) => {
                    self.first_tense = Some(tense.to_string());
                    ask_second_tense()
                }
                Selection::Other => ask_text(
                    StateId::CompletionFirstTenseCustom,
                    "Please enter the first tense:",
                ),
                _ => reject(TENSES, PICK_ONE),
            }),
            StateId::CompletionFirstTenseCustom => Ok(match custom_text(input) {
                Some(tense) => {
                    self.first_tense = Some(tense);
                    ask_second_tense()
                }
                None => reject_text(EMPTY_VALUE),
            }),
            StateId::CompletionSecondTense => Ok(match select(TENSES, input) {
                Selection::Value(tense) => {
                    self.second_tense = Some(tense.to_string());
                    Step::Finish
                }
                Selection::Other => ask_text(
                    StateId::CompletionSecondTenseCustom,
                    "Please enter the second tense:",
                ),
                _ => reject(TENSES, PICK_ONE),
            }),
            StateId::CompletionSecondTenseCustom => Ok(match custom_text(input) {
                Some(tense) => {
                    self.second_tense = Some(tense);
                    Step::Finish
                }
                None => reject_text(EMPTY_VALUE),
            }),

            StateId::CompletionPhrasesGiven => Ok(match select(YES_NO, input) {
                Selection::Value(given) => {
                    self.phrases_given = Some(given);
                    if given { ask_where() } else { Step::Finish }
                }
                _ => reject(YES_NO, PICK_YES_NO),
            }),

            StateId::CompletionOtherWord => Ok(match custom_text(input) {
                Some(word) => {
                    let prompt = format!("{word} are given?");
                    self.completion_word = Some(word);
                    ask(StateId::CompletionOtherGiven, prompt, YES_NO)
                }
                None => reject_text(EMPTY_VALUE),
            }),
            StateId::CompletionOtherGiven => Ok(match select(YES_NO, input) {
                Selection::Value(given) => {
                    self.word_given = Some(given);
                    if given { ask_where() } else { Step::Finish }
                }
                _ => reject(YES_NO, PICK_YES_NO),
            }),

            other => Err(EngineError::UnknownState { state: other }),
        }
    }

    pub fn assemble(&self) -> Result<String, IncompleteInstruction> {
        const SCENARIO: ScenarioKind = ScenarioKind::GrammarCompletion;
        let text_kind = require(&self.text_kind, SCENARIO, "text_kind")?;
        let task = *require(&self.task, SCENARIO, "task")?;

        let base = match text_kind {
            Choice::Fixed(kind) => format!("Complete the {}", kind.wording()),
            Choice::Custom(text) => format!("Complete the {text}"),
        };

        Ok(match task {
            CompletionTask::CorrectForm => {
                let given = *require(&self.verbs_given, SCENARIO, "verbs_given")?;
                format!(
                    "{base} with the correct form of the verbs{}",
                    self.where_suffix(given, SCENARIO)?
                )
            }
            CompletionTask::CertainForm => {
                let tense = require(&self.tense, SCENARIO, "tense")?;
                format!("{base} with the {tense}.")
            }
            CompletionTask::ChooseTwo => {
                let first = require(&self.first_tense, SCENARIO, "first_tense")?;
                let second = require(&self.second_tense, SCENARIO, "second_tense")?;
                format!("{base} with the {first} or {second}.")
            }
            CompletionTask::Phrases => {
                let given = *require(&self.phrases_given, SCENARIO, "phrases_given")?;
                format!("{base} with the phrases{}", self.where_suffix(given, SCENARIO)?)
            }
            CompletionTask::Other => {
                let word = require(&self.completion_word, SCENARIO, "completion_word")?;
                let given = *require(&self.word_given, SCENARIO, "word_given")?;
                format!("{base} with the {word}{}", self.where_suffix(given, SCENARIO)?)
            }
        })
    }

    /// `" in brackets."`-style tail when the material is given, a bare period
    /// otherwise.
    fn where_suffix(
        &self,
        given: bool,
        scenario: ScenarioKind,
    ) -> Result<String, IncompleteInstruction> {
        if given {
            let place = require(&self.given_where, scenario, "given_where")?;
            Ok(format!(" {}.", place.wording()))
        } else {
            Ok(".".to_string())
        }
    }
}

fn ask_task_kind(text_kind: &str) -> Step {
    ask(
        StateId::CompletionTaskKind,
        format!("What type of completing the {text_kind} task do you want to create?"),
        TASKS,
    )
}

fn ask_where() -> Step {
    ask(StateId::CompletionWhere, "Where?", WHERE_OPTIONS)
}

fn ask_second_tense() -> Step {
    ask(StateId::CompletionSecondTense, "Second tense?", TENSES)
}

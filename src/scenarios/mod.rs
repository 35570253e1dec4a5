//! Scenario definitions — the twelve wizard graphs.
//!
//! Each submodule owns one scenario: its field set, its transition function
//! (an exhaustive match over this scenario's states), and its instruction
//! assembly. The shared "closed choice with an Other escape" question that
//! almost every scenario asks (a word type, a part of speech, a tense, a
//! table kind) is factored into the option-table machinery below instead of
//! being copied into each graph.

pub mod categorising;
pub mod grammar_completion;
pub mod grammar_error_correction;
pub mod grammar_multiple_choice;
pub mod grammar_transformation;
pub mod labelling;
pub mod matching;
pub mod odd_one_out;
pub mod reading_multiple_choice;
pub mod reading_true_false;
pub mod synonyms;
pub mod word_building;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, IncompleteInstruction};
use crate::session::TaskCategory;
use crate::states::StateId;

pub use categorising::Categorising;
pub use grammar_completion::GrammarCompletion;
pub use grammar_error_correction::GrammarErrorCorrection;
pub use grammar_multiple_choice::GrammarMultipleChoice;
pub use grammar_transformation::GrammarTransformation;
pub use labelling::Labelling;
pub use matching::Matching;
pub use odd_one_out::OddOneOut;
pub use reading_multiple_choice::ReadingMultipleChoice;
pub use reading_true_false::ReadingTrueFalse;
pub use synonyms::Synonyms;
pub use word_building::WordBuilding;

/// The twelve scenario kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    Labelling,
    Categorising,
    WordBuilding,
    Matching,
    OddOneOut,
    Synonyms,
    GrammarMultipleChoice,
    GrammarCompletion,
    GrammarTransformation,
    GrammarErrorCorrection,
    ReadingMultipleChoice,
    ReadingTrueFalse,
}

impl ScenarioKind {
    /// Which section menu this scenario lives under.
    pub fn category(&self) -> TaskCategory {
        use ScenarioKind::*;
        match self {
            Labelling | Categorising | WordBuilding | Matching | OddOneOut | Synonyms => {
                TaskCategory::Vocabulary
            }
            GrammarMultipleChoice | GrammarCompletion | GrammarTransformation
            | GrammarErrorCorrection => TaskCategory::Grammar,
            ReadingMultipleChoice | ReadingTrueFalse => TaskCategory::Reading,
        }
    }

    /// Fresh instance plus the root question of this scenario.
    pub fn start(&self) -> (ScenarioInstance, Step) {
        use ScenarioKind::*;
        match self {
            Labelling => (
                ScenarioInstance::Labelling(labelling::Labelling::default()),
                labelling::intro(),
            ),
            Categorising => (
                ScenarioInstance::Categorising(categorising::Categorising::default()),
                categorising::intro(),
            ),
            WordBuilding => (
                ScenarioInstance::WordBuilding(word_building::WordBuilding::default()),
                word_building::intro(),
            ),
            Matching => (
                ScenarioInstance::Matching(matching::Matching::default()),
                matching::intro(),
            ),
            OddOneOut => (
                ScenarioInstance::OddOneOut(odd_one_out::OddOneOut::default()),
                odd_one_out::intro(),
            ),
            Synonyms => (
                ScenarioInstance::Synonyms(synonyms::Synonyms::default()),
                synonyms::intro(),
            ),
            GrammarMultipleChoice => (
                ScenarioInstance::GrammarMultipleChoice(
                    grammar_multiple_choice::GrammarMultipleChoice::default(),
                ),
                grammar_multiple_choice::intro(),
            ),
            GrammarCompletion => (
                ScenarioInstance::GrammarCompletion(
                    grammar_completion::GrammarCompletion::default(),
                ),
                grammar_completion::intro(),
            ),
            GrammarTransformation => (
                ScenarioInstance::GrammarTransformation(
                    grammar_transformation::GrammarTransformation::default(),
                ),
                grammar_transformation::intro(),
            ),
            GrammarErrorCorrection => (
                ScenarioInstance::GrammarErrorCorrection(
                    grammar_error_correction::GrammarErrorCorrection::default(),
                ),
                grammar_error_correction::intro(),
            ),
            ReadingMultipleChoice => (
                ScenarioInstance::ReadingMultipleChoice(
                    reading_multiple_choice::ReadingMultipleChoice::default(),
                ),
                reading_multiple_choice::intro(),
            ),
            ReadingTrueFalse => (
                ScenarioInstance::ReadingTrueFalse(
                    reading_true_false::ReadingTrueFalse::default(),
                ),
                reading_true_false::intro(),
            ),
        }
    }
}

impl std::fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Labelling => "labelling",
            Self::Categorising => "categorising",
            Self::WordBuilding => "word-building",
            Self::Matching => "matching",
            Self::OddOneOut => "odd-one-out",
            Self::Synonyms => "synonyms",
            Self::GrammarMultipleChoice => "grammar multiple choice",
            Self::GrammarCompletion => "grammar completion",
            Self::GrammarTransformation => "grammar transformation",
            Self::GrammarErrorCorrection => "grammar error correction",
            Self::ReadingMultipleChoice => "reading multiple choice",
            Self::ReadingTrueFalse => "reading true/false",
        };
        write!(f, "{s}")
    }
}

/// The in-progress field set of one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ScenarioInstance {
    Labelling(Labelling),
    Categorising(Categorising),
    WordBuilding(WordBuilding),
    Matching(Matching),
    OddOneOut(OddOneOut),
    Synonyms(Synonyms),
    GrammarMultipleChoice(GrammarMultipleChoice),
    GrammarCompletion(GrammarCompletion),
    GrammarTransformation(GrammarTransformation),
    GrammarErrorCorrection(GrammarErrorCorrection),
    ReadingMultipleChoice(ReadingMultipleChoice),
    ReadingTrueFalse(ReadingTrueFalse),
}

impl ScenarioInstance {
    pub fn kind(&self) -> ScenarioKind {
        match self {
            Self::Labelling(_) => ScenarioKind::Labelling,
            Self::Categorising(_) => ScenarioKind::Categorising,
            Self::WordBuilding(_) => ScenarioKind::WordBuilding,
            Self::Matching(_) => ScenarioKind::Matching,
            Self::OddOneOut(_) => ScenarioKind::OddOneOut,
            Self::Synonyms(_) => ScenarioKind::Synonyms,
            Self::GrammarMultipleChoice(_) => ScenarioKind::GrammarMultipleChoice,
            Self::GrammarCompletion(_) => ScenarioKind::GrammarCompletion,
            Self::GrammarTransformation(_) => ScenarioKind::GrammarTransformation,
            Self::GrammarErrorCorrection(_) => ScenarioKind::GrammarErrorCorrection,
            Self::ReadingMultipleChoice(_) => ScenarioKind::ReadingMultipleChoice,
            Self::ReadingTrueFalse(_) => ScenarioKind::ReadingTrueFalse,
        }
    }

    /// Apply one turn of input to the current state.
    pub fn transition(&mut self, state: StateId, input: &str) -> Result<Step, EngineError> {
        match self {
            Self::Labelling(s) => s.transition(state, input),
            Self::Categorising(s) => s.transition(state, input),
            Self::WordBuilding(s) => s.transition(state, input),
            Self::Matching(s) => s.transition(state, input),
            Self::OddOneOut(s) => s.transition(state, input),
            Self::Synonyms(s) => s.transition(state, input),
            Self::GrammarMultipleChoice(s) => s.transition(state, input),
            Self::GrammarCompletion(s) => s.transition(state, input),
            Self::GrammarTransformation(s) => s.transition(state, input),
            Self::GrammarErrorCorrection(s) => s.transition(state, input),
            Self::ReadingMultipleChoice(s) => s.transition(state, input),
            Self::ReadingTrueFalse(s) => s.transition(state, input),
        }
    }

    /// Assemble the final instruction. Only reachable from a terminal state;
    /// a missing field indicates a wiring bug and is reported as such.
    pub fn assemble(&self) -> Result<String, IncompleteInstruction> {
        match self {
            Self::Labelling(s) => s.assemble(),
            Self::Categorising(s) => s.assemble(),
            Self::WordBuilding(s) => s.assemble(),
            Self::Matching(s) => s.assemble(),
            Self::OddOneOut(s) => s.assemble(),
            Self::Synonyms(s) => s.assemble(),
            Self::GrammarMultipleChoice(s) => s.assemble(),
            Self::GrammarCompletion(s) => s.assemble(),
            Self::GrammarTransformation(s) => s.assemble(),
            Self::GrammarErrorCorrection(s) => s.assemble(),
            Self::ReadingMultipleChoice(s) => s.assemble(),
            Self::ReadingTrueFalse(s) => s.assemble(),
        }
    }
}

/// Outcome of one transition, consumed by the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Move to `next` and show its question.
    Ask {
        next: StateId,
        prompt: String,
        options: Option<Vec<String>>,
    },
    /// Input rejected; state unchanged; the same options re-offered.
    Reject {
        message: String,
        options: Option<Vec<String>>,
    },
    /// Path complete — assemble the instruction and end the scenario.
    Finish,
    /// Leave the scenario and show the named section menu.
    Navigate(TaskCategory),
}

/// A closed-choice field value: one of the preset options, or the custom
/// text collected through the "Other" escape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Choice<T> {
    Fixed(T),
    Custom(String),
}

/// One row of a closed-choice question.
#[derive(Debug, Clone, Copy)]
pub enum Entry<T> {
    /// Selects a preset value.
    Value(T),
    /// Detours through the companion free-text state.
    Other,
    /// Leaves the scenario for a section menu.
    Back(TaskCategory),
}

/// An option table: button label → row, in display order.
pub(crate) type OptionTable<T> = &'static [(&'static str, Entry<T>)];

/// What an input resolved to against an option table.
pub(crate) enum Selection<T> {
    Value(T),
    Other,
    Back(TaskCategory),
    Invalid,
}

/// Exact-match lookup: labels are compared byte-for-byte, no trimming and no
/// case folding.
pub(crate) fn select<T: Copy>(table: OptionTable<T>, input: &str) -> Selection<T> {
    match table.iter().find(|(label, _)| *label == input) {
        Some((_, Entry::Value(v))) => Selection::Value(*v),
        Some((_, Entry::Other)) => Selection::Other,
        Some((_, Entry::Back(cat))) => Selection::Back(*cat),
        None => Selection::Invalid,
    }
}

/// The labels of a table, in display order.
pub(crate) fn labels<T>(table: OptionTable<T>) -> Vec<String> {
    table.iter().map(|(label, _)| (*label).to_string()).collect()
}

/// Trimmed free text, or `None` when nothing is left after trimming.
pub(crate) fn custom_text(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Ask a closed-choice question.
pub(crate) fn ask<T>(next: StateId, prompt: impl Into<String>, table: OptionTable<T>) -> Step {
    Step::Ask {
        next,
        prompt: prompt.into(),
        options: Some(labels(table)),
    }
}

/// Ask a free-text question.
pub(crate) fn ask_text(next: StateId, prompt: impl Into<String>) -> Step {
    Step::Ask {
        next,
        prompt: prompt.into(),
        options: None,
    }
}

/// Reject closed-choice input, re-offering the identical options.
pub(crate) fn reject<T>(table: OptionTable<T>, message: &str) -> Step {
    Step::Reject {
        message: message.to_string(),
        options: Some(labels(table)),
    }
}

/// Reject free-text input.
pub(crate) fn reject_text(message: &str) -> Step {
    Step::Reject {
        message: message.to_string(),
        options: None,
    }
}

/// Unwrap a required field during assembly.
pub(crate) fn require<'a, T>(
    field: &'a Option<T>,
    scenario: ScenarioKind,
    name: &'static str,
) -> Result<&'a T, IncompleteInstruction> {
    field.as_ref().ok_or(IncompleteInstruction {
        scenario,
        field: name,
    })
}

/// Standard validation message for closed-choice steps.
pub(crate) const PICK_ONE: &str = "Please select one of the options.";
/// Standard validation message for yes/no steps.
pub(crate) const PICK_YES_NO: &str = "Please select Yes or No.";

/// Word types shared by the word-building and matching graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordType {
    Words,
    Nouns,
    Adjectives,
    Verbs,
}

impl WordType {
    /// Wording used inside assembled instructions.
    pub fn wording(&self) -> &'static str {
        match self {
            Self::Words => "words",
            Self::Nouns => "nouns",
            Self::Adjectives => "adjectives",
            Self::Verbs => "verbs",
        }
    }
}

impl Choice<WordType> {
    /// Instruction wording: preset word types in lower case, custom text
    /// verbatim.
    pub fn word_text(&self) -> String {
        match self {
            Choice::Fixed(wt) => wt.wording().to_string(),
            Choice::Custom(s) => s.clone(),
        }
    }
}

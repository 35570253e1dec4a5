//! Wizard states.
//!
//! Every step of every scenario has an explicit identifier here, and each
//! identifier belongs to exactly one scenario kind. Dispatch is a static
//! exhaustive match — there is no name-based lookup anywhere.

use serde::{Deserialize, Serialize};

use crate::scenarios::ScenarioKind;

/// Identifier of the input a session expects next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateId {
    // Labelling
    LabellingLabelType,
    LabellingLabelTypeOther,
    LabellingTaskFormat,
    LabellingWordList,

    // Categorising
    CategorisingTaskKind,
    CategorisingTableKind,
    CategorisingTableKindOther,

    // Word-building
    WordBuildingKind,
    WordBuildingMissingWordType,
    WordBuildingMissingWordTypeOther,
    WordBuildingMissingKind,
    WordBuildingLettersWordType,
    WordBuildingLettersWordTypeOther,
    WordBuildingFormsBuildType,
    WordBuildingFormsBuildTypeOther,
    WordBuildingFormsGivenType,
    WordBuildingFormsGivenTypeOther,

    // Matching
    MatchingKind,
    MatchingSentencesRange,
    MatchingPicturesRange,
    MatchingDescriptionWordType,
    MatchingDescriptionWordTypeOther,
    MatchingQuestionsRange,
    MatchingAnswersRange,
    MatchingOtherAnchor,
    MatchingOtherTarget,
    MatchingOtherTargetOther,

    // Odd one out
    OddOneOutKind,
    OddOneOutCriterion,
    OddOneOutCriterionOther,
    OddOneOutSound,

    // Synonyms
    SynonymsKind,
    SynonymsFirstPos,
    SynonymsFirstPosOther,
    SynonymsSecondPos,
    SynonymsSecondPosOther,
    SynonymsAdjectiveKind,

    // Grammar multiple choice
    GrammarMcKind,
    GrammarMcSubject,
    GrammarMcSubjectOther,

    // Grammar completion
    CompletionTextKind,
    CompletionTextKindOther,
    CompletionTaskKind,
    CompletionVerbsGiven,
    CompletionWhere,
    CompletionTense,
    CompletionTenseCustom,
    CompletionFirstTense,
    CompletionFirstTenseCustom,
    CompletionSecondTense,
    CompletionSecondTenseCustom,
    CompletionPhrasesGiven,
    CompletionOtherWord,
    CompletionOtherGiven,

    // Grammar transformation
    TransformationKind,
    TransformationInitialTense,
    TransformationInitialTenseCustom,
    TransformationTargetTense,
    TransformationTargetTenseCustom,

    // Grammar error correction
    CorrectionGivenKind,
    CorrectionGivenKindOther,
    CorrectionNeedCorrection,
    CorrectionPrepGiven,
    CorrectionPrepKind,
    CorrectionClarifyText,
    CorrectionClarifyAudio,
    CorrectionClarifyPicture,
    CorrectionClarifyOther,

    // Reading multiple choice
    ReadingMcTextKind,
    ReadingMcTextKindOther,

    // Reading true/false
    ReadingTfReadFirst,
}

impl StateId {
    /// The scenario this state belongs to.
    pub fn scenario(&self) -> ScenarioKind {
        use StateId::*;
        match self {
            LabellingLabelType | LabellingLabelTypeOther | LabellingTaskFormat
            | LabellingWordList => ScenarioKind::Labelling,

            CategorisingTaskKind | CategorisingTableKind | CategorisingTableKindOther => {
                ScenarioKind::Categorising
            }

            WordBuildingKind
            | WordBuildingMissingWordType
            | WordBuildingMissingWordTypeOther
            | WordBuildingMissingKind
            | WordBuildingLettersWordType
            | WordBuildingLettersWordTypeOther
            | WordBuildingFormsBuildType
            | WordBuildingFormsBuildTypeOther
            | WordBuildingFormsGivenType
            | WordBuildingFormsGivenTypeOther => ScenarioKind::WordBuilding,

            MatchingKind
            | MatchingSentencesRange
            | MatchingPicturesRange
            | MatchingDescriptionWordType
            | MatchingDescriptionWordTypeOther
            | MatchingQuestionsRange
            | MatchingAnswersRange
            | MatchingOtherAnchor
            | MatchingOtherTarget
            | MatchingOtherTargetOther => ScenarioKind::Matching,

            OddOneOutKind | OddOneOutCriterion | OddOneOutCriterionOther | OddOneOutSound => {
                ScenarioKind::OddOneOut
            }

            SynonymsKind | SynonymsFirstPos | SynonymsFirstPosOther | SynonymsSecondPos
            | SynonymsSecondPosOther | SynonymsAdjectiveKind => ScenarioKind::Synonyms,

            GrammarMcKind | GrammarMcSubject | GrammarMcSubjectOther => {
                ScenarioKind::GrammarMultipleChoice
            }

            CompletionTextKind
            | CompletionTextKindOther
            | CompletionTaskKind
            | CompletionVerbsGiven
            | CompletionWhere
            | CompletionTense
            | CompletionTenseCustom
            | CompletionFirstTense
            | CompletionFirstTenseCustom
            | CompletionSecondTense
            | CompletionSecondTenseCustom
            | CompletionPhrasesGiven
            | CompletionOtherWord
            | CompletionOtherGiven => ScenarioKind::GrammarCompletion,

            TransformationKind
            | TransformationInitialTense
            | TransformationInitialTenseCustom
            | TransformationTargetTense
            | TransformationTargetTenseCustom => ScenarioKind::GrammarTransformation,

            CorrectionGivenKind
            | CorrectionGivenKindOther
            | CorrectionNeedCorrection
            | CorrectionPrepGiven
            | CorrectionPrepKind
            | CorrectionClarifyText
            | CorrectionClarifyAudio
            | CorrectionClarifyPicture
            | CorrectionClarifyOther => ScenarioKind::GrammarErrorCorrection,

            ReadingMcTextKind | ReadingMcTextKindOther => ScenarioKind::ReadingMultipleChoice,

            ReadingTfReadFirst => ScenarioKind::ReadingTrueFalse,
        }
    }
}

impl std::fmt::Display for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn states_map_to_their_scenario() {
        assert_eq!(
            StateId::LabellingWordList.scenario(),
            ScenarioKind::Labelling
        );
        assert_eq!(
            StateId::MatchingOtherTargetOther.scenario(),
            ScenarioKind::Matching
        );
        assert_eq!(
            StateId::CompletionSecondTenseCustom.scenario(),
            ScenarioKind::GrammarCompletion
        );
        assert_eq!(
            StateId::CorrectionClarifyAudio.scenario(),
            ScenarioKind::GrammarErrorCorrection
        );
        assert_eq!(
            StateId::ReadingTfReadFirst.scenario(),
            ScenarioKind::ReadingTrueFalse
        );
    }

    #[test]
    fn display_matches_debug() {
        assert_eq!(
            StateId::CompletionWhere.to_string(),
            format!("{:?}", StateId::CompletionWhere)
        );
    }
}

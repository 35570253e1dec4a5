//! Vocabulary: categorising into a table.
//!
//! task-kind → table-kind (with Other) → finish.

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
pub enum CategorisingTask {
    FillTable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    CountriesNationalities,
    Chart,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Categorising {
    task: Option<CategorisingTask>,
    table: Option<Choice<TableKind>>,
}

const TASKS: OptionTable<CategorisingTask> = &[
    ("Fill the table", Entry::Value(CategorisingTask::FillTable)),
    ("Back to vocabulary", Entry::Back(TaskCategory::Vocabulary)),
];

const TABLE_KINDS: OptionTable<TableKind> = &[
    (
        "Countries and nationalities",
        Entry::Value(TableKind::CountriesNationalities),
    ),
    ("Just a chart", Entry::Value(TableKind::Chart)),
    ("Other", Entry::Other),
];

pub(crate) fn intro() -> Step {
    ask(
        StateId::CategorisingTaskKind,
        "What type of categorising task do you want to create?",
        TASKS,
    )
}

impl Categorising {
    pub(crate) fn transition(&mut self, state: StateId, input: &str) -> Result<Step, EngineError> {
        match state {
            StateId::CategorisingTaskKind => Ok(match select(TASKS, input) {
                Selection::Value(task) => {
                    self.task = Some(task);
                    ask(
                        StateId::CategorisingTableKind,
                        "What do you want students to complete in the table?",
                        TABLE_KINDS,
                    )
                }
                Selection::Back(cat) => Step::Navigate(cat),
                _ => reject(TASKS, PICK_ONE),
            }),
            StateId::CategorisingTableKind => Ok(match select(TABLE_KINDS, input) {
                Selection::Value(kind) => {
                    self.table = Some(Choice::Fixed(kind));
                    Step::Finish
                }
                Selection::Other => ask_text(
                    StateId::CategorisingTableKindOther,
                    "Please enter your own type:",
                ),
                _ => reject(TABLE_KINDS, PICK_ONE),
            }),
            StateId::CategorisingTableKindOther => Ok(match custom_text(input) {
                Some(text) => {
                    self.table = Some(Choice::Custom(text));
                    Step::Finish
                }
                None => reject_text("Please enter a non-empty type."),
            }),
            other => Err(EngineError::UnknownState { state: other }),
        }
    }

    pub fn assemble(&self) -> Result<String, IncompleteInstruction> {
        const SCENARIO: ScenarioKind = ScenarioKind::Categorising;
        require(&self.task, SCENARIO, "task")?;
        let table = require(&self.table, SCENARIO, "table")?;

        Ok(match table {
            Choice::Fixed(TableKind::Chart) => "Complete the chart.".to_string(),
            Choice::Fixed(TableKind::CountriesNationalities) => {
                "Complete the chart with countries and nationalities.".to_string()
            }
            Choice::Custom(text) => {
                format!("Complete the chart with {}.", text.to_lowercase())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn just_a_chart() {
        let mut scenario = Categorising::default();
        scenario
            .transition(StateId::CategorisingTaskKind, "Fill the table")
            .unwrap();
        let step = scenario
            .transition(StateId::CategorisingTableKind, "Just a chart")
            .unwrap();
        assert_eq!(step, Step::Finish);
        assert_eq!(scenario.assemble().unwrap(), "Complete the chart.");
    }

    #[test]
    fn countries_and_nationalities() {
        let mut scenario = Categorising::default();
        scenario
            .transition(StateId::CategorisingTaskKind, "Fill the table")
            .unwrap();
        scenario
            .transition(StateId::CategorisingTableKind, "Countries and nationalities")
            .unwrap();
        assert_eq!(
            scenario.assemble().unwrap(),
            "Complete the chart with countries and nationalities."
        );
    }

    #[test]
    fn custom_table_kind_is_lowercased() {
        let mut scenario = Categorising::default();
        scenario
            .transition(StateId::CategorisingTaskKind, "Fill the table")
            .unwrap();
        scenario
            .transition(StateId::CategorisingTableKind, "Other")
            .unwrap();
        let step = scenario
            .transition(StateId::CategorisingTableKindOther, "Food Groups")
            .unwrap();
        assert_eq!(step, Step::Finish);
        assert_eq!(
            scenario.assemble().unwrap(),
            "Complete the chart with food groups."
        );
    }

    #[test]
    fn back_to_vocabulary() {
        let mut scenario = Categorising::default();
        let step = scenario
            .transition(StateId::CategorisingTaskKind, "Back to vocabulary")
            .unwrap();
        assert_eq!(step, Step::Navigate(TaskCategory::Vocabulary));
    }

    #[test]
    fn unknown_input_rejected() {
        let mut scenario = Categorising::default();
        let step = scenario
            .transition(StateId::CategorisingTaskKind, "Sort the cards")
            .unwrap();
        assert!(matches!(step, Step::Reject { .. }));
        assert_eq!(scenario.task, None);
    }
}

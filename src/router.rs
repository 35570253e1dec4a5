//! Menu router.
//!
//! Maps raw button text to engine actions and frames engine responses for
//! the transports: menu navigation, scenario starts, help, feedback, and the
//! wizard fallback.

use std::collections::HashSet;
use std::sync::Mutex;

use crate::engine::{DialogueEngine, Response};
use crate::scenarios::ScenarioKind;
use crate::session::{SessionId, TaskCategory};

pub const BOT_DESCRIPTION: &str = "Welcome to the Task Formulation Bot!

This bot helps English teachers and learners to quickly generate, practice, and manage various types of language tasks for lessons and self-study.

Main Features:
1. Create Task Formulation
   - Instantly generate clear and professional instructions for a wide variety of English tasks.
   - Supported task types include:
     • Vocabulary (labelling, categorisation, word-building, matching, odd one out, synonyms/antonyms/definitions/lexical sets)
     • Grammar (multiple choice, sentence/dialogue completion, transformation, error correction)
     • Reading (multiple choice questions)
   - The bot will guide you step by step, asking for all necessary parameters and helping you choose the right task format.

2. Practice Task Formulation (CURRENTLY UNAVAILABLE!!!)
   - Practice formulating instructions for different types of tasks.
   - The bot will show you a task body (e.g., a picture or text) and you will try to write the correct instruction.
   - After your attempt, you can check the correct answer and compare it with your own.

3. Feedback
   - You can send any feedback, suggestions, or questions to the developer at any time using the 'Feedback' button in the main menu.

4. Help
   - At any time, press the 'Help' button to see this description and get guidance on how to use the bot.

How to use:
- Use the main menu to select what you want to do: create a task, practice, get help, or send feedback.
- Follow the on-screen instructions and choose options using the provided buttons.
- For each task type, the bot will ask you a series of questions to clarify the details and then generate a ready-to-use instruction.
- In practice mode, try to formulate the instruction yourself and check your answer.

Who is this bot for?
- English teachers who want to save time and get high-quality task instructions.
- Students who want to practice understanding and formulating task instructions.
- Anyone interested in English language learning and teaching.

Your actions in the bot are logged for quality improvement and support. All feedback is welcome!

If you have any questions, just press 'Help' or 'Feedback'. Enjoy using the bot!";

const MAIN_MENU: &[&str] = &[
    "Create task formulation",
    "Practice task formulation",
    "Feedback",
    "Help",
];

const SECTIONS_MENU: &[&str] = &["Vocabulary", "Grammar", "Reading", "Back to main menu"];

const VOCABULARY_MENU: &[&str] = &[
    "Labelling",
    "Categorisation",
    "Word-building",
    "Matching",
    "Odd one out",
    "Synonyms/antonyms/definitions/lexical sets",
    "Back to sections",
];

const GRAMMAR_MENU: &[&str] = &[
    "Grammar Multiple Choice",
    "Sentence/dialogue completion",
    "Transformation",
    "Error Correction",
    "Back to sections",
];

const READING_MENU: &[&str] = &["Reading Multiple Choice", "True/False", "Back to sections"];

/// One framed reply for the transport to render.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    pub keyboard: Option<Vec<String>>,
    /// Feedback text recorded this turn, for the audit sink.
    pub recorded_feedback: Option<String>,
}

impl Reply {
    fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
            recorded_feedback: None,
        }
    }

    fn with_keyboard(text: impl Into<String>, keyboard: &[&str]) -> Self {
        Self {
            text: text.into(),
            keyboard: Some(keyboard.iter().map(|s| s.to_string()).collect()),
            recorded_feedback: None,
        }
    }
}

fn scenario_for_button(text: &str) -> Option<ScenarioKind> {
    Some(match text {
        "Labelling" => ScenarioKind::Labelling,
        "Categorisation" => ScenarioKind::Categorising,
        "Word-building" => ScenarioKind::WordBuilding,
        "Matching" => ScenarioKind::Matching,
        "Odd one out" => ScenarioKind::OddOneOut,
        "Synonyms/antonyms/definitions/lexical sets" => ScenarioKind::Synonyms,
        "Grammar Multiple Choice" => ScenarioKind::GrammarMultipleChoice,
        "Sentence/dialogue completion" => ScenarioKind::GrammarCompletion,
        "Transformation" => ScenarioKind::GrammarTransformation,
        "Error Correction" => ScenarioKind::GrammarErrorCorrection,
        "Reading Multiple Choice" => ScenarioKind::ReadingMultipleChoice,
        "True/False" => ScenarioKind::ReadingTrueFalse,
        _ => return None,
    })
}

fn section_menu(category: TaskCategory) -> Reply {
    match category {
        TaskCategory::Vocabulary => Reply::with_keyboard("Vocabulary tasks:", VOCABULARY_MENU),
        TaskCategory::Grammar => Reply::with_keyboard("Grammar tasks:", GRAMMAR_MENU),
        TaskCategory::Reading => Reply::with_keyboard("Reading tasks:", READING_MENU),
    }
}

fn done_keyboard(category: TaskCategory) -> Vec<String> {
    let back = match category {
        TaskCategory::Vocabulary => "Back to Vocabulary",
        TaskCategory::Grammar => "Back to Grammar",
        TaskCategory::Reading => "Back to Reading",
    };
    vec![
        back.to_string(),
        "Back to sections".to_string(),
        "Back to main menu".to_string(),
    ]
}

fn main_menu(text: impl Into<String>) -> Reply {
    Reply::with_keyboard(text, MAIN_MENU)
}

/// Routes one inbound turn.
pub struct Router {
    engine: DialogueEngine,
    feedback_waiting: Mutex<HashSet<SessionId>>,
}

impl Router {
    pub fn new(engine: DialogueEngine) -> Self {
        Self {
            engine,
            feedback_waiting: Mutex::new(HashSet::new()),
        }
    }

    pub fn engine(&self) -> &DialogueEngine {
        &self.engine
    }

    pub fn route(&self, id: SessionId, text: &str) -> Reply {
        // Commands and top-level navigation win over everything else, the
        // same way the button handlers are matched before the wizard step.
        match text {
            "/start" => return main_menu(BOT_DESCRIPTION),
            "/menu" | "Back to main menu" => {
                self.engine.sessions().reset(id, None);
                self.disarm_feedback(id);
                return main_menu("Main menu. Please select an option:");
            }
            "/cancel" => {
                if self.disarm_feedback(id) {
                    return Reply::text_only("Feedback cancelled. Back to main menu.");
                }
                return main_menu("Choose an option from the menu 🙂");
            }
            "Help" => return main_menu(BOT_DESCRIPTION),
            "Create task formulation" | "Back to sections" => {
                return Reply::with_keyboard("Select a section:", SECTIONS_MENU);
            }
            "Vocabulary" | "Back to Vocabulary" => {
                return self.open_section(id, TaskCategory::Vocabulary);
            }
            "Grammar" | "Back to Grammar" => {
                return self.open_section(id, TaskCategory::Grammar);
            }
            "Reading" | "Back to Reading" => {
                return self.open_section(id, TaskCategory::Reading);
            }
            "Feedback" => {
                self.arm_feedback(id);
                return Reply::text_only(
                    "We'd love to hear your thoughts!\n\n\
                     Please type your feedback below. Send /cancel to stop.",
                );
            }
            "Practice task formulation" => {
                return Reply::text_only("Currently unavailable.");
            }
            _ => {}
        }

        if let Some(kind) = scenario_for_button(text) {
            return self.frame(id, Ok(self.engine.start(id, kind)));
        }

        if self.is_feedback_armed(id) {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Reply::text_only("Please send text feedback or /cancel.");
            }
            self.disarm_feedback(id);
            return Reply {
                text: "Thank you! Your feedback has been recorded 🙌".to_string(),
                keyboard: None,
                recorded_feedback: Some(trimmed.to_string()),
            };
        }

        let result = self.engine.handle(id, text);
        self.frame(id, result)
    }

    fn frame(
        &self,
        id: SessionId,
        result: Result<Response, crate::error::EngineError>,
    ) -> Reply {
        match result {
            Ok(Response::NoScenario) => main_menu("Choose an option from the menu 🙂"),
            Ok(Response::Ask { text, options }) => Reply {
                text,
                keyboard: options,
                recorded_feedback: None,
            },
            Ok(Response::Done { instruction, section }) => Reply {
                text: format!("Task formulation:\n{instruction}"),
                keyboard: Some(done_keyboard(section)),
                recorded_feedback: None,
            },
            Ok(Response::Menu(category)) => section_menu(category),
            Err(e) => {
                tracing::error!(session = id, error = %e, "wizard dispatch failed");
                Reply::text_only("Something went wrong. Try /menu")
            }
        }
    }

    fn open_section(&self, id: SessionId, category: TaskCategory) -> Reply {
        self.engine.sessions().set_task_category(id, category);
        section_menu(category)
    }

    fn arm_feedback(&self, id: SessionId) {
        self.feedback_waiting
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(id);
    }

    fn disarm_feedback(&self, id: SessionId) -> bool {
        self.feedback_waiting
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&id)
    }

    fn is_feedback_armed(&self, id: SessionId) -> bool {
        self.feedback_waiting
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(&id)
    }
}

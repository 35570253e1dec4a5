//! End-to-end wizard flows through the router, the way a transport drives it.

use std::sync::Arc;

use formulator::engine::DialogueEngine;
use formulator::router::Router;
use formulator::session::InMemorySessionStore;

fn new_router() -> Router {
    Router::new(DialogueEngine::new(Arc::new(InMemorySessionStore::new())))
}

/// Drive a full path and return the final reply text.
fn drive(router: &Router, id: i64, inputs: &[&str]) -> String {
    let mut last = String::new();
    for input in inputs {
        last = router.route(id, input).text;
    }
    last
}

#[test]
fn labelling_ing_form_flow() {
    let router = new_router();
    let text = drive(
        &router,
        1,
        &[
            "Create task formulation",
            "Vocabulary",
            "Labelling",
            "Actions (verbs)",
            "Label using the verb +ing form",
            "No",
        ],
    );
    assert_eq!(
        text,
        "Task formulation:\nLabel activities in the pictures with the +ing form of the verbs."
    );
}

#[test]
fn categorising_chart_flow() {
    let router = new_router();
    let text = drive(
        &router,
        1,
        &["Vocabulary", "Categorisation", "Fill the table", "Just a chart"],
    );
    assert_eq!(text, "Task formulation:\nComplete the chart.");
}

#[test]
fn odd_one_out_sound_flow() {
    let router = new_router();
    let text = drive(
        &router,
        1,
        &[
            "Vocabulary",
            "Odd one out",
            "Circle the word with certain sound",
            "/iz/",
        ],
    );
    assert_eq!(
        text,
        "Task formulation:\nCircle one word in each group which ends in /iz/."
    );
}

#[test]
fn transformation_change_tense_flow() {
    let router = new_router();
    let text = drive(
        &router,
        1,
        &[
            "Grammar",
            "Transformation",
            "Change tense",
            "Past Simple",
            "Present Perfect",
        ],
    );
    assert_eq!(
        text,
        "Task formulation:\nChange the sentences from the Past Simple to the Present Perfect."
    );
}

#[test]
fn reading_true_false_flow() {
    let router = new_router();
    let text = drive(&router, 1, &["Reading", "True/False", "Yes"]);
    assert_eq!(
        text,
        "Task formulation:\nRead the text. Match the sentences T (true) or F (false)."
    );
}

#[test]
fn replaying_a_flow_gives_identical_output() {
    let router = new_router();
    let inputs = [
        "Grammar",
        "Sentence/dialogue completion",
        "Sentences",
        "Correct form of the verbs",
        "Yes",
        "in brackets",
    ];
    let first = drive(&router, 1, &inputs);
    router.route(1, "/menu");
    let second = drive(&router, 1, &inputs);
    assert_eq!(first, second);
    assert_eq!(
        first,
        "Task formulation:\nComplete the sentences with the correct form of the verbs in brackets."
    );
}

#[test]
fn invalid_input_reoffers_the_same_buttons() {
    let router = new_router();
    router.route(1, "Vocabulary");
    let offered = router.route(1, "Word-building").keyboard.unwrap();

    let reply = router.route(1, "Missing Letters"); // wrong case
    assert_eq!(reply.text, "Please select one of the options.");
    assert_eq!(reply.keyboard.unwrap(), offered);

    // The scenario still accepts the right answer.
    let reply = router.route(1, "Missing letters");
    assert_eq!(reply.text, "What type of words?");
}

#[test]
fn two_chats_run_independent_wizards() {
    let router = new_router();
    router.route(1, "Vocabulary");
    router.route(1, "Matching");
    router.route(2, "Reading");
    router.route(2, "Reading Multiple Choice");

    router.route(1, "Questions to answers");
    router.route(1, "1-5");

    let reply = router.route(2, "Dialogue");
    assert_eq!(
        reply.text,
        "Task formulation:\nRead the dialogue. Circle a, b, or c."
    );

    let reply = router.route(1, "a-e");
    assert_eq!(
        reply.text,
        "Task formulation:\nMatch questions 1-5 to answers a-e."
    );
}

#[test]
fn error_correction_full_path_with_prep_info() {
    let router = new_router();
    let text = drive(
        &router,
        1,
        &[
            "Grammar",
            "Error Correction",
            "Phrases",
            "Yes",
            "Yes",
            "Audio",
            "Dialogue",
        ],
    );
    assert_eq!(
        text,
        "Task formulation:\nListen to the dialogue. Are the phrases right (✓) or wrong (✗)? \
         Correct the wrong phrases."
    );
}

#[test]
fn word_building_forms_flow_with_other_escape() {
    let router = new_router();
    let text = drive(
        &router,
        1,
        &[
            "Vocabulary",
            "Word-building",
            "Forms of words",
            "Other",
            "negatives",
            "Adjectives",
        ],
    );
    assert_eq!(
        text,
        "Task formulation:\nMake negatives from adjectives in the list."
    );
}

#[test]
fn synonyms_pos_flow() {
    let router = new_router();
    let text = drive(
        &router,
        1,
        &[
            "Vocabulary",
            "Synonyms/antonyms/definitions/lexical sets",
            "Choose part of speech out of two",
            "Nouns",
            "Adjectives",
        ],
    );
    assert_eq!(
        text,
        "Task formulation:\nAre the words in bold nouns or adjectives?"
    );
}

#[test]
fn grammar_multiple_choice_flow() {
    let router = new_router();
    let text = drive(
        &router,
        1,
        &["Grammar", "Grammar Multiple Choice", "Circle the correct one", "Answer"],
    );
    assert_eq!(text, "Task formulation:\nCircle the correct answer.");
}

#[test]
fn completion_other_material_flow() {
    let router = new_router();
    let text = drive(
        &router,
        1,
        &[
            "Grammar",
            "Sentence/dialogue completion",
            "Conversation",
            "Other",
            "question tags",
            "Yes",
            "in the box",
        ],
    );
    assert_eq!(
        text,
        "Task formulation:\nComplete the conversation with the question tags in the box."
    );
}

#[test]
fn back_to_sections_after_finish() {
    let router = new_router();
    drive(&router, 1, &["Reading", "True/False", "No"]);
    let reply = router.route(1, "Back to sections");
    assert_eq!(reply.text, "Select a section:");
    let reply = router.route(1, "Back to main menu");
    assert_eq!(reply.text, "Main menu. Please select an option:");
}

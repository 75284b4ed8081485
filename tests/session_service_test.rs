//! Tests for SessionService: playing games and learning from wrong guesses

use std::io::{self, Cursor};

use animals::application::services::{GameOutcome, SessionService, SessionSummary};
use animals::application::ApplicationError;
use animals::domain::Node;
use animals::infrastructure::traits::LinePrompter;
use animals::util::testing;

type ScriptedPrompter = LinePrompter<Cursor<Vec<u8>>, Vec<u8>>;

fn session(lines: &[&str]) -> SessionService<ScriptedPrompter> {
    testing::init_test_setup();
    let mut input = lines.join("\n");
    input.push('\n');
    SessionService::new(LinePrompter::new(Cursor::new(input.into_bytes()), Vec::new()))
}

fn transcript(session: SessionService<ScriptedPrompter>) -> String {
    String::from_utf8(session.into_prompter().into_output()).expect("prompts are utf-8")
}

#[test]
fn given_fresh_database_when_guess_fails_then_learns_eagle() {
    let mut session = session(&["no", "eagle", "Can it fly?", "yes", "no"]);

    let (tree, summary) = session.play_session(Node::leaf("platypus")).unwrap();

    assert_eq!(
        tree,
        Node::question("Can it fly?", Node::leaf("platypus"), Node::leaf("eagle"))
    );
    assert_eq!(
        summary,
        SessionSummary {
            games: 1,
            guessed: 0,
            learned: 1
        }
    );
    assert_eq!(
        transcript(session),
        "Is it a platypus? \
         What is the animal I failed to find? \
         What question can distinguish a eagle from a platypus? \
         What answer is expected for a eagle? \
         Play another game? "
    );
}

#[test]
fn given_correct_guess_when_playing_game_then_tree_is_unchanged() {
    let mut session = session(&["y"]);
    let mut tree = Node::question("Can it fly?", Node::leaf("platypus"), Node::leaf("eagle"));
    let before = tree.clone();

    let outcome = session.play_game(&mut tree).unwrap();

    assert_eq!(
        outcome,
        GameOutcome::Guessed {
            animal: "platypus".to_string()
        }
    );
    assert_eq!(tree, before);
}

#[test]
fn given_answers_down_the_tree_when_guess_fails_then_learns_at_reached_leaf() {
    // Can it fly? yes -> eagle? no -> learn bat, "Is it a mammal?" yes
    let mut session = session(&["y", "n", "bat", "Is it a mammal?", "y"]);
    let mut tree = Node::question("Can it fly?", Node::leaf("platypus"), Node::leaf("eagle"));

    let outcome = session.play_game(&mut tree).unwrap();

    assert_eq!(
        outcome,
        GameOutcome::Learned {
            animal: "bat".to_string(),
            replaced: "eagle".to_string()
        }
    );
    assert_eq!(
        tree,
        Node::question(
            "Can it fly?",
            Node::leaf("platypus"),
            Node::question("Is it a mammal?", Node::leaf("eagle"), Node::leaf("bat")),
        )
    );
}

#[test]
fn given_new_animal_answers_no_when_learning_then_goes_to_no_branch() {
    let mut session = session(&["no", "snake", "Does it have fur?", "no"]);
    let mut tree = Node::leaf("platypus");

    session.play_game(&mut tree).unwrap();

    assert_eq!(
        tree,
        Node::question(
            "Does it have fur?",
            Node::leaf("snake"),
            Node::leaf("platypus")
        )
    );
}

#[test]
fn given_several_games_when_playing_session_then_counts_each_outcome() {
    let mut session = session(&[
        // game 1: learn eagle
        "no",
        "eagle",
        "Can it fly?",
        "yes",
        "yes",
        // game 2: flies, is eagle
        "yes",
        "yes",
        "y",
        // game 3: does not fly, is platypus
        "no",
        "maybe",
        "yes",
        "n",
    ]);

    let (tree, summary) = session.play_session(Node::leaf("platypus")).unwrap();

    assert_eq!(
        summary,
        SessionSummary {
            games: 3,
            guessed: 2,
            learned: 1
        }
    );
    assert_eq!(tree.leaf_count(), 2);
}

#[test]
fn given_input_closed_mid_game_when_playing_session_then_fails_with_input_error() {
    let mut session = session(&["no", "eagle"]);

    let err = session.play_session(Node::leaf("platypus")).unwrap_err();

    match err {
        ApplicationError::Input(source) => assert_eq!(source.kind(), io::ErrorKind::UnexpectedEof),
        other => panic!("expected input error, got {other:?}"),
    }
}

#[test]
fn given_empty_answers_when_learning_then_keeps_asking() {
    let mut session = session(&["n", "", "eagle", "", "Can it fly?", "", "y", "n"]);

    let (tree, _) = session.play_session(Node::leaf("platypus")).unwrap();

    assert!(tree.validate().is_ok());
    assert_eq!(tree.question_text(), Some("Can it fly?"));
}

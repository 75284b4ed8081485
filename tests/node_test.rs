//! Tests for the decision tree: traversal and learning

use std::convert::Infallible;

use rstest::rstest;

use animals::domain::{DomainError, Node};

/// Answer questions from a fixed script.
fn scripted(answers: &[bool]) -> impl FnMut(&str) -> Result<bool, Infallible> + '_ {
    let mut iter = answers.iter();
    move |_q: &str| Ok(*iter.next().expect("no scripted answer left"))
}

/// Asserts that every node is a leaf with an animal or a question with text.
fn assert_well_formed(node: &Node) {
    match node {
        Node::Leaf { animal } => assert!(!animal.is_empty(), "leaf without animal"),
        Node::Question { question, no, yes } => {
            assert!(!question.is_empty(), "question node without text");
            assert_well_formed(no);
            assert_well_formed(yes);
        }
    }
}

fn zoo() -> Node {
    Node::question(
        "Can it fly?",
        Node::question("Does it bark?", Node::leaf("cat"), Node::leaf("dog")),
        Node::leaf("eagle"),
    )
}

// ============================================================
// Traversal
// ============================================================

#[test]
fn given_single_leaf_when_traversing_then_returns_it_without_questions() {
    let mut tree = Node::leaf("platypus");
    let mut asked = 0;

    let leaf = tree
        .traverse(|_| -> Result<bool, Infallible> {
            asked += 1;
            Ok(true)
        })
        .unwrap();

    assert_eq!(leaf.animal(), Some("platypus"));
    assert_eq!(asked, 0);
}

#[rstest]
#[case(&[true], "eagle")]
#[case(&[false, true], "dog")]
#[case(&[false, false], "cat")]
fn given_answers_when_traversing_then_follows_branches(
    #[case] answers: &[bool],
    #[case] expected: &str,
) {
    let mut tree = zoo();
    let answer = scripted(answers);

    let leaf = tree.traverse(answer).unwrap();

    assert_eq!(leaf.animal(), Some(expected));
}

#[test]
fn given_question_tree_when_traversing_then_asks_questions_in_order() {
    let mut tree = zoo();
    let mut asked = Vec::new();

    tree.traverse(|q| -> Result<bool, Infallible> {
        asked.push(q.to_string());
        Ok(false)
    })
    .unwrap();

    assert_eq!(asked, vec!["Can it fly?", "Does it bark?"]);
}

#[test]
fn given_failing_answer_when_traversing_then_propagates_error() {
    let mut tree = zoo();

    let result = tree.traverse(|q| Err::<bool, String>(format!("no answer for {q}")));

    assert_eq!(result.unwrap_err(), "no answer for Can it fly?");
}

// ============================================================
// Learning
// ============================================================

#[test]
fn given_leaf_when_learning_yes_animal_then_new_animal_goes_yes() {
    let mut node = Node::leaf("cat");

    node.learn("dog".to_string(), "Does it bark?".to_string(), true)
        .unwrap();

    assert_eq!(
        node,
        Node::question("Does it bark?", Node::leaf("cat"), Node::leaf("dog"))
    );
}

#[test]
fn given_leaf_when_learning_no_animal_then_new_animal_goes_no() {
    let mut node = Node::leaf("cat");

    node.learn("dog".to_string(), "Does it meow?".to_string(), false)
        .unwrap();

    let Node::Question { question, no, yes } = &node else {
        panic!("expected question node, got {node:?}");
    };
    assert_eq!(question, "Does it meow?");
    assert_eq!(no.animal(), Some("dog"));
    assert_eq!(yes.animal(), Some("cat"));
}

#[test]
fn given_traversed_leaf_when_learning_then_tree_is_mutated_in_place() {
    let mut tree = zoo();

    let leaf = tree
        .traverse(|_| -> Result<bool, Infallible> { Ok(true) })
        .unwrap();
    leaf.learn("penguin".to_string(), "Can it swim?".to_string(), true)
        .unwrap();

    let Node::Question { yes, .. } = &tree else {
        panic!("root must stay a question");
    };
    assert_eq!(
        **yes,
        Node::question("Can it swim?", Node::leaf("eagle"), Node::leaf("penguin"))
    );
    assert_eq!(tree.leaf_count(), 4);
}

#[test]
fn given_question_node_when_learning_then_fails_with_not_a_leaf() {
    let mut tree = zoo();
    let before = tree.clone();

    let err = tree
        .learn("cow".to_string(), "Does it moo?".to_string(), true)
        .unwrap_err();

    assert_eq!(err, DomainError::NotALeaf);
    assert_eq!(tree, before);
}

#[rstest]
#[case("", "Does it moo?", "animal")]
#[case("cow", "", "question")]
fn given_empty_input_when_learning_then_fails_and_keeps_leaf(
    #[case] animal: &str,
    #[case] question: &str,
    #[case] field: &str,
) {
    let mut node = Node::leaf("cat");

    let err = node
        .learn(animal.to_string(), question.to_string(), true)
        .unwrap_err();

    assert!(matches!(err, DomainError::EmptyField { field: f } if f == field));
    assert_eq!(node, Node::leaf("cat"));
}

#[test]
fn given_many_learning_steps_when_checking_then_every_node_is_well_formed() {
    let mut tree = Node::leaf("platypus");
    let steps: [(&[bool], &str, &str, bool); 4] = [
        (&[], "eagle", "Can it fly?", true),
        (&[true], "bat", "Is it a mammal?", true),
        (&[false], "shark", "Does it live in water?", true),
        (&[false, false], "snake", "Does it have legs?", false),
    ];

    for (path, animal, question, is_yes) in steps {
        let answer = scripted(path);
        let leaf = tree.traverse(answer).unwrap();
        leaf.learn(animal.to_string(), question.to_string(), is_yes)
            .unwrap();
        assert_well_formed(&tree);
        assert!(tree.validate().is_ok());
    }

    assert_eq!(tree.leaf_count(), 5);
    assert_eq!(tree.question_count(), 4);
    assert_eq!(
        tree.animals(),
        vec!["bat", "eagle", "platypus", "shark", "snake"]
    );
}

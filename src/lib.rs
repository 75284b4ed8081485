//! animals: a guessing game that learns.
//!
//! The player thinks of an animal; the program walks a binary decision tree
//! of yes/no questions and guesses. A wrong guess grows the tree with a new
//! question that tells the two animals apart, and the tree is saved as JSON.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

//! # coutlet
//!
//! coutlet is a line-oriented interpreter for a tiny arithmetic teaching
//! language written in Rust. A line may contain arithmetic expressions over
//! `+ - * /`, variable assignments, and C++-style `cout <<` print statements.
//! Each line is validated, tokenized, parsed, and evaluated against a variable
//! environment that persists across lines, yielding one typed outcome per
//! statement that produces visible output.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::SyntaxError,
    interpreter::{
        environment::Environment, evaluator::core::evaluate, lexer::tokenize, outcome::Outcome,
        parser::statement::parse, validator::validate,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of one line of source as a tree. The AST is built by
/// the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Keeps trees immutable and exclusively owned once built.
pub mod ast;
/// Provides unified error types for validation, parsing and evaluation.
///
/// This module defines all errors that can be raised while interpreting a
/// line. It standardizes error reporting and carries human-readable messages
/// for user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (validator, parser, evaluator).
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of interpreting a line.
///
/// This module ties together the pre-parse validator, lexer, parser,
/// evaluator, variable environment and outcome types to provide a complete
/// runtime for the language.
///
/// # Responsibilities
/// - Coordinates all core components: validator, lexer, parser and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Interprets lines of source text against a persistent variable environment.
///
/// The environment starts empty and lives as long as the interpreter:
/// a variable assigned on one line can be read on every later line.
///
/// ## Usage
///
/// An `Interpreter` is created once and fed one line at a time through
/// [`Interpreter::interpret`]. The caller renders the returned outcomes;
/// the interpreter itself never prints.
pub struct Interpreter {
    env: Environment,
}

#[allow(clippy::new_without_default)]
impl Interpreter {
    /// Creates a new interpreter with an empty variable environment.
    #[must_use]
    pub fn new() -> Self {
        Self { env: Environment::new() }
    }

    /// Interprets one line of source text.
    ///
    /// The line is checked by the pre-parse validator, tokenized, parsed
    /// against the current environment, and evaluated. Validation and parse
    /// failures abort the whole line and are returned as `Err`; no statement
    /// of such a line is evaluated. Evaluation failures are reported per
    /// statement inside the `Ok` vector as [`Outcome::Errored`] records.
    ///
    /// # Returns
    /// One [`Outcome`] per statement that produces visible output, in source
    /// order. Bare assignments produce no outcome.
    ///
    /// # Errors
    /// Returns a [`SyntaxError`] if the line fails the textual pre-parse
    /// checks or does not parse under the grammar.
    ///
    /// # Examples
    /// ```
    /// use coutlet::{Interpreter, interpreter::outcome::Outcome};
    ///
    /// let mut interpreter = Interpreter::new();
    /// interpreter.interpret("x = 2 + 3").unwrap();
    ///
    /// let outcomes = interpreter.interpret("cout << x").unwrap();
    /// assert_eq!(outcomes, vec![Outcome::Printed(5.0)]);
    /// ```
    pub fn interpret(&mut self, line: &str) -> Result<Vec<Outcome>, SyntaxError> {
        validate(line)?;

        let tokens = tokenize(line);
        let statements = parse(&mut tokens.iter().peekable(), &self.env)?;

        Ok(evaluate(&statements, &mut self.env))
    }
}

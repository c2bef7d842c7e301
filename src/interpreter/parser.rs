/// Core expression parsing.
///
/// Implements the precedence-climbing expression grammar: additive terms,
/// multiplicative factors, parenthesized groups, variables and literals.
pub mod core;

/// Statement parsing.
///
/// Dispatches each statement on a line to the print, assignment, or
/// expression-statement rule.
pub mod statement;

/// Utility predicates for the parser.
///
/// Lexical checks shared by the statement and factor rules.
pub mod utils;

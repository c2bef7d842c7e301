/// The environment module stores the program's variables.
///
/// The environment is the mutable name-to-value store threaded through the
/// whole pipeline: the parser consults it (read-only) to decide whether a
/// bare word names a variable, and the evaluator reads and writes it.
///
/// # Responsibilities
/// - Defines the `Environment` store and its narrow read-only view.
/// - Keeps variable state alive across statements and lines.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic, manages variable state, and produces outcome records.
/// It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variable reads and assignments.
/// - Reports runtime errors, softening the print-of-unknown-name case into an
///   in-band outcome.
pub mod evaluator;
/// The lexer module tokenizes one line of source for further parsing.
///
/// The lexer reads the raw line and produces a sequence of tokens, each
/// corresponding to an identifier/number run or a single-character symbol.
/// This is the first stage of interpretation after validation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Handles numeric and identifier runs, operators, and delimiters.
/// - Never fails: unrecognized characters become single-character tokens.
pub mod lexer;
/// The outcome module defines the reportable results of evaluation.
///
/// One outcome is produced per top-level statement with visible output: a
/// printed value, a computed value, or an in-band error message.
pub mod outcome;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of the line's statements.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates correct grammar and syntax under a fixed precedence.
/// - Disambiguates bare words through environment membership.
pub mod parser;
/// The validator module screens raw lines before tokenization.
///
/// A cheap textual guard that rejects lines ending in a division operator and
/// lines containing a division by the literal zero.
pub mod validator;

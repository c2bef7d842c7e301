/// Syntax errors.
///
/// Defines all error types that can occur before evaluation: the textual
/// pre-parse checks and the parser itself. Syntax errors abort the whole
/// line; none of its statements are evaluated.
pub mod syntax_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// reading a variable that was never assigned.
pub mod runtime_error;

pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;

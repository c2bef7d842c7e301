/// Core evaluation logic and outcome production.
///
/// Contains the statement driver, expression evaluation, and error
/// propagation policy for one line.
pub mod core;

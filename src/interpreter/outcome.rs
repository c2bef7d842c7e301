/// One reportable result of evaluating a single top-level statement.
///
/// A line yields one outcome per statement that produces visible output, in
/// source order. Bare assignments are side effects only and yield nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A value emitted by a `cout` statement.
    Printed(f64),
    /// The numeric result of a bare expression statement.
    Computed(f64),
    /// A per-statement error, reported in-band rather than as a failure of
    /// the whole line.
    Errored(String),
}

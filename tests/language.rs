use coutlet::{Interpreter, error::SyntaxError, interpreter::outcome::Outcome};

/// Feeds every line to one interpreter and collects all outcomes, panicking
/// on any syntax error.
fn run_lines(lines: &[&str]) -> Vec<Outcome> {
    let mut interpreter = Interpreter::new();
    let mut outcomes = Vec::new();

    for line in lines {
        outcomes.extend(interpreter.interpret(line)
                                   .unwrap_or_else(|e| panic!("Line '{line}' failed: {e}")));
    }

    outcomes
}

/// Interprets one line on a fresh environment and returns its syntax error.
fn syntax_error_of(line: &str) -> SyntaxError {
    match Interpreter::new().interpret(line) {
        Ok(outcomes) => panic!("Line '{line}' succeeded with {outcomes:?}"),
        Err(e) => e,
    }
}

#[test]
fn literal_round_trips_through_assignment_and_print() {
    for (literal, expected) in
        [("0", 0.0), ("42", 42.0), ("-2", -2.0), ("3.25", 3.25), ("-0.5", -0.5)]
    {
        let assignment = format!("x = {literal}");
        let outcomes = run_lines(&[assignment.as_str(), "cout << x"]);
        assert_eq!(outcomes, vec![Outcome::Printed(expected)], "literal {literal}");
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(run_lines(&["2 + 3 * 4"]), vec![Outcome::Computed(14.0)]);
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(run_lines(&["(2 + 3) * 4"]), vec![Outcome::Computed(20.0)]);
}

#[test]
fn additive_and_multiplicative_operators_are_left_associative() {
    assert_eq!(run_lines(&["10 - 2 - 3"]), vec![Outcome::Computed(5.0)]);
    assert_eq!(run_lines(&["100 / 5 / 2"]), vec![Outcome::Computed(10.0)]);
}

#[test]
fn unmatched_parenthesis_is_a_syntax_error() {
    assert!(matches!(syntax_error_of("(1 + 2"), SyntaxError::UnterminatedParenthesis));
}

#[test]
fn unknown_name_fails_at_parse_time_not_evaluation_time() {
    // `y` is neither a defined variable nor a number, so the parser rejects
    // the line outright; nothing reaches the evaluator.
    assert!(matches!(syntax_error_of("y"), SyntaxError::ExpectedNumber { .. }));
}

#[test]
fn printing_an_undefined_variable_is_a_soft_error() {
    let mut interpreter = Interpreter::new();
    interpreter.interpret("x = 5").unwrap();

    let outcomes = interpreter.interpret("cout << z").unwrap();
    assert_eq!(outcomes.len(), 1);
    assert!(matches!(&outcomes[0],
                     Outcome::Errored(message) if message.contains("'z'")));
}

#[test]
fn soft_print_error_does_not_abort_the_rest_of_the_line() {
    let mut interpreter = Interpreter::new();
    interpreter.interpret("x = 5").unwrap();

    let outcomes = interpreter.interpret("cout << z cout << x").unwrap();
    assert_eq!(outcomes.len(), 2);
    assert!(matches!(&outcomes[0], Outcome::Errored(_)));
    assert_eq!(outcomes[1], Outcome::Printed(5.0));
}

#[test]
fn division_by_literal_zero_is_rejected_before_parsing() {
    assert!(matches!(syntax_error_of("5 / 0"), SyntaxError::DivisionByZero));

    // The guard is textual: it also fires on a fractional divisor.
    assert!(matches!(syntax_error_of("5 / 0.5"), SyntaxError::DivisionByZero));
}

#[test]
fn trailing_division_is_rejected_before_parsing() {
    assert!(matches!(syntax_error_of("5 /"), SyntaxError::IncompleteExpression));
    assert!(matches!(syntax_error_of("5 /   "), SyntaxError::IncompleteExpression));
}

#[test]
fn division_through_a_variable_follows_ieee_semantics() {
    // Only the literal `/ 0` pattern is screened; dividing by a variable
    // holding zero reaches the evaluator and yields an infinity.
    let outcomes = run_lines(&["x = 0", "5 / x"]);
    assert_eq!(outcomes, vec![Outcome::Computed(f64::INFINITY)]);
}

#[test]
fn printing_is_idempotent() {
    let mut interpreter = Interpreter::new();
    interpreter.interpret("x = 2").unwrap();

    let first = interpreter.interpret("cout << x").unwrap();
    let second = interpreter.interpret("cout << x").unwrap();
    assert_eq!(first, vec![Outcome::Printed(2.0)]);
    assert_eq!(first, second);
}

#[test]
fn assignments_persist_across_lines() {
    let outcomes = run_lines(&["x = 1", "x = x + 1", "cout << x"]);
    assert_eq!(outcomes, vec![Outcome::Printed(2.0)]);
}

#[test]
fn assignments_produce_no_outcome() {
    assert_eq!(run_lines(&["x = 7"]), vec![]);
}

#[test]
fn statements_on_one_line_evaluate_in_order() {
    assert_eq!(run_lines(&["x = 1 x = 2", "cout << x"]), vec![Outcome::Printed(2.0)]);
}

#[test]
fn same_line_forward_reference_fails_at_parse_time() {
    // The whole line is parsed before any statement is evaluated, so `x` is
    // still unknown while the second statement parses, even though the first
    // one would have assigned it.
    assert!(matches!(syntax_error_of("x = 1 x = x + 1"), SyntaxError::ExpectedNumber { .. }));
}

#[test]
fn print_accepts_a_full_expression() {
    assert_eq!(run_lines(&["x = 4", "cout << x * 2 + 1"]), vec![Outcome::Printed(9.0)]);
    assert_eq!(run_lines(&["cout << (1 + 2) * 3"]), vec![Outcome::Printed(9.0)]);
}

#[test]
fn malformed_print_operator_is_a_syntax_error() {
    assert!(matches!(syntax_error_of("cout 5"), SyntaxError::ExpectedInsertion { .. }));
    assert!(matches!(syntax_error_of("cout < 5"), SyntaxError::ExpectedInsertion { .. }));
}

#[test]
fn a_failed_parse_commits_nothing() {
    let mut interpreter = Interpreter::new();

    // The assignment parses, but the dangling `(` fails the line before
    // anything is evaluated, so `x` must remain unset.
    assert!(interpreter.interpret("x = 1 (").is_err());

    let outcomes = interpreter.interpret("cout << x").unwrap();
    assert!(matches!(&outcomes[0], Outcome::Errored(_)));
}

#[test]
fn glued_minus_splits_unspaced_subtraction() {
    // `3-2` lexes as the runs `3` and `-2`: two expression statements, not
    // one subtraction. With a space before the operand it parses as usual.
    assert_eq!(run_lines(&["3-2"]), vec![Outcome::Computed(3.0), Outcome::Computed(-2.0)]);
    assert_eq!(run_lines(&["3 - 2"]), vec![Outcome::Computed(1.0)]);
    assert_eq!(run_lines(&["3 -2"]), vec![Outcome::Computed(3.0), Outcome::Computed(-2.0)]);
}

#[test]
fn unary_minus_glues_to_identifiers_too() {
    // `-x` is one run; it has neither identifier syntax nor number syntax.
    assert!(matches!(syntax_error_of("-x"), SyntaxError::ExpectedNumber { .. }));
}

#[test]
fn empty_and_blank_lines_yield_no_outcomes() {
    let mut interpreter = Interpreter::new();
    assert_eq!(interpreter.interpret("").unwrap(), vec![]);
    assert_eq!(interpreter.interpret("   ").unwrap(), vec![]);
}

#[test]
fn stray_punctuation_is_a_syntax_error() {
    assert!(matches!(syntax_error_of("1 , 2"), SyntaxError::ExpectedNumber { .. }));
    assert!(matches!(syntax_error_of("1 + 2 !"), SyntaxError::ExpectedNumber { .. }));
}

#[test]
fn malformed_literals_are_rejected() {
    assert!(matches!(syntax_error_of("3."), SyntaxError::ExpectedNumber { .. }));
    assert!(matches!(syntax_error_of("1.2.3"), SyntaxError::ExpectedNumber { .. }));
}

#[test]
fn incomplete_expressions_run_out_of_input() {
    assert!(matches!(syntax_error_of("1 +"), SyntaxError::UnexpectedEndOfInput));
    assert!(matches!(syntax_error_of("x ="), SyntaxError::UnexpectedEndOfInput));
}

#[test]
fn cout_cannot_be_assigned() {
    assert!(matches!(syntax_error_of("cout = 5"), SyntaxError::ExpectedInsertion { .. }));
}

use crate::{
    ast::{BinaryOperator, Expr, Statement},
    error::RuntimeError,
    interpreter::{
        environment::{Environment, VariableLookup},
        outcome::Outcome,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates every statement parsed from one line.
///
/// Statements run in source order. A statement that produces visible output
/// appends one [`Outcome`]; a bare assignment appends nothing. A hard
/// evaluation failure is recorded as an [`Outcome::Errored`] for the failing
/// statement and aborts the remainder of the line, leaving the outcomes
/// queued so far untouched.
///
/// # Parameters
/// - `statements`: The line's parsed statements.
/// - `env`: The variable environment, mutated by assignments.
///
/// # Returns
/// The line's outcomes in source order.
pub fn evaluate(statements: &[Statement], env: &mut Environment) -> Vec<Outcome> {
    let mut outcomes = Vec::new();

    for statement in statements {
        match eval_statement(statement, env) {
            Ok(Some(outcome)) => outcomes.push(outcome),
            Ok(None) => {},
            Err(error) => {
                outcomes.push(Outcome::Errored(error.to_string()));
                break;
            },
        }
    }

    outcomes
}

/// Evaluates a single statement.
///
/// Assignments evaluate their right-hand side, store the value (overwriting
/// any previous one), and yield no outcome. Print statements yield a
/// `Printed` value, softened to an in-band `Errored` when the argument is a
/// bare name that is not defined. Expression statements yield a `Computed`
/// value.
///
/// # Parameters
/// - `statement`: Statement to evaluate.
/// - `env`: The variable environment.
///
/// # Returns
/// `Some(Outcome)` for statements with visible output, `None` otherwise.
fn eval_statement(statement: &Statement, env: &mut Environment) -> EvalResult<Option<Outcome>> {
    match statement {
        Statement::Assignment { name, value } => {
            let value = eval_expr(value, env)?;
            env.set(name, value);

            Ok(None)
        },
        Statement::Print { expr } => {
            // Printing a missing variable is recoverable: the statement
            // reports in-band and the rest of the line still runs.
            if let Expr::Variable(name) = expr
               && !env.is_defined(name)
            {
                let error = RuntimeError::UndefinedVariable { name: name.clone() };
                return Ok(Some(Outcome::Errored(error.to_string())));
            }

            Ok(Some(Outcome::Printed(eval_expr(expr, env)?)))
        },
        Statement::Expression { expr } => Ok(Some(Outcome::Computed(eval_expr(expr, env)?))),
    }
}

/// Evaluates an expression to its numeric value.
///
/// Tree-walking and depth-first; for binary operators the left operand is
/// evaluated strictly before the right one.
///
/// # Parameters
/// - `expr`: Expression to evaluate.
/// - `env`: The variable environment, read-only here.
///
/// # Returns
/// The expression's value.
///
/// # Errors
/// Returns [`RuntimeError::UndefinedVariable`] for a variable with no value.
/// The parser already guarantees committed variables were defined, so this
/// path is a safety net rather than an expected failure.
pub fn eval_expr(expr: &Expr, env: &Environment) -> EvalResult<f64> {
    match expr {
        Expr::Number(value) => Ok(*value),
        Expr::Variable(name) => {
            env.get(name)
               .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.clone() })
        },
        Expr::BinaryOp { left, op, right } => {
            let left = eval_expr(left, env)?;
            let right = eval_expr(right, env)?;

            Ok(apply_binary(*op, left, right))
        },
    }
}

/// Applies a binary arithmetic operator under IEEE-754 semantics.
///
/// Division by zero yields an infinity or NaN here; the textual guard that
/// rejects literal `/ 0` runs before parsing and never reaches this point.
const fn apply_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
    match op {
        BinaryOperator::Add => left + right,
        BinaryOperator::Sub => left - right,
        BinaryOperator::Mul => left * right,
        BinaryOperator::Div => left / right,
    }
}

use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    error::SyntaxError,
    interpreter::{
        environment::VariableLookup,
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::is_identifier,
        },
    },
};

/// Parses every statement on one line.
///
/// The cursor is advanced until it is exhausted; each loop iteration produces
/// one top-level statement. There is no recovery: the first failure aborts
/// parsing for the whole line and no statements are committed.
///
/// # Parameters
/// - `tokens`: Cursor over the line's token sequence.
/// - `names`: Membership view of the variable environment.
///
/// # Returns
/// The parsed statements in source order.
pub fn parse<'a, I>(tokens: &mut Peekable<I>,
                    names: &impl VariableLookup)
                    -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut statements = Vec::new();

    while tokens.peek().is_some() {
        statements.push(parse_statement(tokens, names)?);
    }

    Ok(statements)
}

/// Parses a single statement.
///
/// A statement may be one of:
/// - a print statement (`cout << ...`),
/// - an assignment (`<name> = ...`),
/// - an expression used as a statement.
///
/// Dispatch is attempted in that order. The word `cout` is checked first, so
/// it can never be assigned to; the assignment rule requires an identifier
/// followed immediately by `=`, detected with a one-token lookahead on a
/// cloned cursor.
///
/// # Parameters
/// - `tokens`: Cursor over the line's token sequence.
/// - `names`: Membership view of the variable environment.
///
/// # Returns
/// A parsed [`Statement`] node.
fn parse_statement<'a, I>(tokens: &mut Peekable<I>,
                          names: &impl VariableLookup)
                          -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(Token::Word(word)) = tokens.peek() {
        if word.as_str() == "cout" {
            return parse_print(tokens, names);
        }

        if is_identifier(word) {
            let mut lookahead = tokens.clone();
            lookahead.next();

            if let Some(Token::Equals) = lookahead.peek() {
                return parse_assignment(tokens, names);
            }
        }
    }

    let expr = parse_expression(tokens, names)?;
    Ok(Statement::Expression { expr })
}

/// Parses a print statement.
///
/// Syntax: `cout << <expression>`. The `<<` must arrive as two consecutive
/// `<` tokens. The argument is a full expression, with one special case: a
/// bare word with identifier syntax whose name is not currently defined is
/// committed as a variable reference anyway, so the evaluator can report it
/// as a soft, in-band error instead of a line-aborting one.
///
/// # Parameters
/// - `tokens`: Cursor positioned at the `cout` word.
/// - `names`: Membership view of the variable environment.
///
/// # Returns
/// A `Statement::Print` node.
///
/// # Errors
/// - `ExpectedInsertion` if either `<` is missing.
/// - Propagates any errors from argument parsing.
fn parse_print<'a, I>(tokens: &mut Peekable<I>,
                      names: &impl VariableLookup)
                      -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    tokens.next(); // the `cout` word

    expect_less(tokens)?;
    expect_less(tokens)?;

    if let Some(Token::Word(word)) = tokens.peek()
       && is_identifier(word)
       && !names.is_defined(word)
    {
        let name = word.clone();
        tokens.next();

        return Ok(Statement::Print { expr: Expr::Variable(name) });
    }

    let expr = parse_expression(tokens, names)?;
    Ok(Statement::Print { expr })
}

/// Parses an assignment statement.
///
/// Syntax: `<name> = <expression>`. The caller's lookahead guarantees the
/// leading identifier; the `=` is checked again here regardless.
///
/// # Parameters
/// - `tokens`: Cursor positioned at the variable name.
/// - `names`: Membership view of the variable environment.
///
/// # Returns
/// A `Statement::Assignment` node.
///
/// # Errors
/// - `ExpectedEquals` if the `=` is missing.
/// - Propagates any errors from the assigned expression.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>,
                           names: &impl VariableLookup)
                           -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let name = match tokens.next() {
        Some(Token::Word(word)) => word.clone(),
        _ => unreachable!(),
    };

    match tokens.next() {
        Some(Token::Equals) => {},
        Some(token) => {
            return Err(SyntaxError::ExpectedEquals { found: format!("{token:?}") });
        },
        None => return Err(SyntaxError::UnexpectedEndOfInput),
    }

    let value = parse_expression(tokens, names)?;
    Ok(Statement::Assignment { name, value })
}

/// Consumes one `<` token or reports the print operator as malformed.
fn expect_less<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<()>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(Token::Less) => Ok(()),
        Some(token) => Err(SyntaxError::ExpectedInsertion { found: format!("{token:?}") }),
        None => Err(SyntaxError::UnexpectedEndOfInput),
    }
}

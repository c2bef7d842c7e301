use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::SyntaxError,
    interpreter::{
        environment::VariableLookup,
        lexer::Token,
        parser::utils::is_number_literal,
    },
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, addition and subtraction, and
/// recursively descends through the precedence hierarchy. All binary
/// operators associate to the left.
///
/// Grammar: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Cursor over the line's token sequence.
/// - `names`: Membership view of the variable environment.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>,
                               names: &impl VariableLookup)
                               -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_term(tokens, names)?;
    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_term(tokens, names)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right) };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles the left-associative operators `*` and `/`.
///
/// Grammar: `term := factor (("*" | "/") factor)*`
///
/// # Parameters
/// - `tokens`: Cursor over the line's token sequence.
/// - `names`: Membership view of the variable environment.
///
/// # Returns
/// A binary expression tree combining factor-level nodes.
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>,
                         names: &impl VariableLookup)
                         -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_factor(tokens, names)?;
    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            tokens.next();
            let right = parse_factor(tokens, names)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right) };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses a single factor.
///
/// A factor is a parenthesized expression, a reference to a variable, or a
/// numeric literal. Resolution order matters for bare words: a word is a
/// variable reference only if the name is defined in the environment right
/// now; otherwise it must lexically match a signed float literal.
/// A name referenced before its first assignment therefore fails here, at
/// parse time, not during evaluation.
///
/// Grammar:
/// ```text
/// factor := "(" expression ")"
///         | <word defined in the environment>
///         | <word matching -?digits(.digits)?>
/// ```
///
/// # Parameters
/// - `tokens`: Cursor over the line's token sequence.
/// - `names`: Membership view of the variable environment.
///
/// # Returns
/// The parsed factor node.
///
/// # Errors
/// - `UnterminatedParenthesis` if a group is missing its `)`.
/// - `ExpectedNumber` if the factor is neither a known variable nor a
///   numeric literal.
/// - `UnexpectedEndOfInput` if the tokens run out.
fn parse_factor<'a, I>(tokens: &mut Peekable<I>,
                       names: &impl VariableLookup)
                       -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(Token::LParen) => {
            let expr = parse_expression(tokens, names)?;

            match tokens.next() {
                Some(Token::RParen) => Ok(expr),
                _ => Err(SyntaxError::UnterminatedParenthesis),
            }
        },
        Some(Token::Word(word)) => {
            if names.is_defined(word) {
                Ok(Expr::Variable(word.clone()))
            } else if is_number_literal(word) {
                // Accepted literals are a subset of the `f64::from_str` grammar.
                let found = format!("{word:?}");
                let value = word.parse()
                                .map_err(|_| SyntaxError::ExpectedNumber { found })?;
                Ok(Expr::Number(value))
            } else {
                Err(SyntaxError::ExpectedNumber { found: format!("{word:?}") })
            }
        },
        Some(token) => Err(SyntaxError::ExpectedNumber { found: format!("{token:?}") }),
        None => Err(SyntaxError::UnexpectedEndOfInput),
    }
}

/// Maps an operator token to its binary operator, if it is one.
fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}

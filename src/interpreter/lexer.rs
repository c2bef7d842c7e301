use logos::Logos;

/// Represents a lexical token in one line of source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// An identifier or numeric literal run, such as `x`, `cout`, `3.14` or
    /// `-2`. The raw text is kept as-is; only the parser decides whether it
    /// names a variable or spells a number.
    ///
    /// Two scanner quirks live in this pattern:
    /// - a `.` joins the run only directly after a digit (`3.14` is one run,
    ///   `x.y` is three tokens);
    /// - a leading `-` glues to the run when nothing separates them, so `3-2`
    ///   lexes as `3`, `-2` with no operator in between, while `3 - 2` does
    ///   not.
    #[regex(r"-?([A-Za-z_]|[0-9]\.?)+", |lex| lex.slice().to_string(), priority = 3)]
    Word(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Equals,
    /// `,`
    #[token(",")]
    Comma,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// Any other character, kept as its own single-character token.
    #[regex(r".", |lex| lex.slice().chars().next(), priority = 1)]
    Other(char),

    /// Spaces separate adjacent runs and are never emitted.
    #[regex(r" +", logos::skip)]
    Ignored,
}

/// Tokenizes one line of source text.
///
/// A pure function of its input: the environment plays no role here, and
/// there are no error conditions. Every character lands in a token or is a
/// separating space, so the returned sequence (possibly empty) covers the
/// whole line in left-to-right order.
///
/// # Parameters
/// - `line`: One line of raw source text.
///
/// # Returns
/// The ordered token sequence for the line.
#[must_use]
pub fn tokenize(line: &str) -> Vec<Token> {
    let mut lexer = Token::lexer(line);
    let mut tokens = Vec::new();

    while let Some(scanned) = lexer.next() {
        match scanned {
            Ok(token) => tokens.push(token),
            // Characters the patterns cannot reach, such as an embedded
            // newline, still become their own tokens.
            Err(()) => tokens.extend(lexer.slice().chars().map(Token::Other)),
        }
    }

    tokens
}

use std::fmt;

use log::{debug, trace};
use logos::Logos;

use crate::{
    ast::ArithmeticFunction,
    error::{EvalResult, EvaluationError},
};

/// Represents a lexical token of a normalised expression.
///
/// The expression is lower-cased and stripped of whitespace before it reaches
/// the lexer, so every maximal run of letters, digits and `-` is a single
/// [`Atom`].
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// `(`
    #[token("(", |lex| {
        lex.extras.depth += 1;
        Token::LParen
    })]
    LParen,
    /// `)`
    #[token(")", |lex| {
        lex.extras.depth -= 1;
        Token::RParen
    })]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// A keyword, an integer or an identifier.
    #[regex(r"[\p{L}\p{N}-]+", classify_atom)]
    Atom(Atom),
}

/// A classified run of letters, digits and `-`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Atom {
    /// `let`, `add`, `sub`, `multi` or `div`.
    Keyword(Keyword),
    /// A signed decimal integer such as `-12`. The value is range-checked
    /// during evaluation.
    Integer(String),
    /// A variable name made of letters only.
    Identifier(String),
}

/// Reserved words that open a call.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Keyword {
    /// `let`
    Let,
    /// One of the arithmetic functions.
    Function(ArithmeticFunction),
}

impl Keyword {
    /// Looks up a keyword by its lower-case spelling.
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        if word == "let" {
            Some(Self::Let)
        } else {
            ArithmeticFunction::from_name(word).map(Self::Function)
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
            Self::Comma => f.write_str(","),
            Self::Atom(Atom::Keyword(Keyword::Let)) => f.write_str("let"),
            Self::Atom(Atom::Keyword(Keyword::Function(function))) => write!(f, "{function}"),
            Self::Atom(Atom::Integer(text) | Atom::Identifier(text)) => f.write_str(text),
        }
    }
}

/// State carried by the lexer while it scans.
///
/// Tracks the parenthesis depth: `(` increments it and `)` decrements it. A
/// non-zero depth once the input is exhausted means the parentheses do not
/// pair up.
#[derive(Default)]
pub struct LexerExtras {
    /// Open parentheses minus closed parentheses seen so far.
    pub depth: isize,
}

/// Classifies the current run of letters, digits and `-`.
///
/// A run that is not a keyword must either be a complete signed integer, if
/// it contains any digit, or consist of letters only. `5a`, `a5`, `5-3` and a
/// lone `-` are all rejected.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(Atom)`: The classified atom.
/// - `None`: If the run is malformed; Logos then reports an error.
fn classify_atom(lex: &logos::Lexer<Token>) -> Option<Atom> {
    let word = lex.slice();

    if let Some(keyword) = Keyword::from_word(word) {
        return Some(Atom::Keyword(keyword));
    }

    if word.chars().any(char::is_numeric) {
        return is_integer(word).then(|| Atom::Integer(word.to_string()));
    }

    word.chars()
        .all(char::is_alphabetic)
        .then(|| Atom::Identifier(word.to_string()))
}

/// Checks for an optional leading `-` followed by at least one ASCII digit.
fn is_integer(word: &str) -> bool {
    let digits = word.strip_prefix('-').unwrap_or(word);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Lower-cases `raw` and removes every whitespace character.
///
/// # Examples
/// ```
/// use letcalc::interpreter::lexer::normalize;
///
/// assert_eq!(normalize(" LET (a , 5,\tADD(a, a))"), "let(a,5,add(a,a))");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.chars()
       .filter(|c| !c.is_whitespace())
       .flat_map(char::to_lowercase)
       .collect()
}

/// Returns `true` if `raw` mentions at least one arithmetic function name,
/// ignoring case.
///
/// This is a plain substring check on the raw input: `address` counts as a
/// mention of `add`.
#[must_use]
pub fn contains_arithmetic_function(raw: &str) -> bool {
    let lowered = raw.to_lowercase();
    ArithmeticFunction::ALL.iter()
                           .any(|function| lowered.contains(function.name()))
}

/// Validates and tokenizes a raw expression.
///
/// The input is first checked for emptiness and for the presence of an
/// arithmetic function, then normalised with [`normalize`] and scanned.
/// Each token is paired with its byte offset in the normalised expression.
///
/// # Parameters
/// - `raw`: The expression exactly as supplied by the caller.
///
/// # Returns
/// The ordered `(Token, offset)` pairs.
///
/// # Errors
/// - `InputMissing` if `raw` is empty.
/// - `NoArithmeticFunction` if no arithmetic function is mentioned.
/// - `InputInvalid` if a character is not allowed or an atom is malformed.
/// - `ParenthesisMismatch` if the parentheses are unbalanced.
///
/// # Examples
/// ```
/// use letcalc::interpreter::lexer::{Atom, Token, tokenize};
///
/// let tokens = tokenize("add(1, x)").unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|(token, _)| token).collect();
/// assert_eq!(kinds[2], Token::Atom(Atom::Integer("1".to_string())));
/// assert_eq!(kinds[4], Token::Atom(Atom::Identifier("x".to_string())));
/// assert_eq!(kinds.len(), 6);
/// ```
pub fn tokenize(raw: &str) -> EvalResult<Vec<(Token, usize)>> {
    if raw.is_empty() {
        return Err(EvaluationError::InputMissing);
    }

    if !contains_arithmetic_function(raw) {
        return Err(EvaluationError::NoArithmeticFunction);
    }

    let source = normalize(raw);
    let mut lexer = Token::lexer_with_extras(&source, LexerExtras::default());
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        if let Ok(tok) = token {
            trace!("token {tok} at {position}");
            tokens.push((tok, position));
        } else {
            return Err(EvaluationError::InputInvalid { fragment: lexer.slice().to_string(),
                                                       position });
        }
    }

    if lexer.extras.depth != 0 {
        return Err(EvaluationError::ParenthesisMismatch { position: source.len() });
    }

    debug!("tokenized '{source}' into {} tokens", tokens.len());
    Ok(tokens)
}

use std::iter::Peekable;

use crate::{
    ast::Node,
    error::{EvalResult, EvaluationError},
    interpreter::{lexer::Token, parser::core::parse_expression},
};

/// Consumes the `(` that must follow a keyword.
///
/// # Parameters
/// - `tokens`: Token iterator positioned right after the keyword.
/// - `keyword_at`: Offset of the keyword, reported on failure.
///
/// # Errors
/// `ParenthesisMismatch` if the next token is anything but `(`, or if the
/// input ends.
pub(in crate::interpreter::parser) fn expect_open<'a, I>(tokens: &mut Peekable<I>,
                                                         keyword_at: usize)
                                                         -> EvalResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::LParen, _)) => Ok(()),
        Some((_, position)) => Err(EvaluationError::ParenthesisMismatch { position: *position }),
        None => Err(EvaluationError::ParenthesisMismatch { position: keyword_at }),
    }
}

/// Consumes the `,` separating two arguments of a call.
///
/// # Parameters
/// - `tokens`: Token iterator positioned after an argument.
/// - `call`: Name of the call being parsed, used in the error message.
/// - `opened_at`: Offset of the call's keyword.
///
/// # Errors
/// - `InvalidArguments` if another token stands where the comma belongs,
///   which is how a missing argument shows up.
/// - `ParenthesisMismatch` if the input ends.
pub(in crate::interpreter::parser) fn expect_separator<'a, I>(tokens: &mut Peekable<I>,
                                                              call: &str,
                                                              opened_at: usize)
                                                              -> EvalResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Comma, _)) => Ok(()),
        Some((token, position)) => {
            Err(EvaluationError::invalid_arguments(format!("expected ',' in '{call}', found \
                                                            '{token}' at position {position}")))
        },
        None => Err(EvaluationError::ParenthesisMismatch { position: opened_at }),
    }
}

/// Consumes the `)` closing a call.
///
/// # Errors
/// - `InvalidArguments` if a comma follows the last argument (too many
///   arguments) or any other token stands where `)` belongs.
/// - `ParenthesisMismatch` if the input ends.
pub(in crate::interpreter::parser) fn expect_close<'a, I>(tokens: &mut Peekable<I>,
                                                          call: &str,
                                                          opened_at: usize)
                                                          -> EvalResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(()),
        Some((Token::Comma, position)) => {
            Err(EvaluationError::invalid_arguments(format!("too many arguments for '{call}' \
                                                            at position {position}")))
        },
        Some((token, position)) => {
            Err(EvaluationError::invalid_arguments(format!("expected ')' in '{call}', found \
                                                            '{token}' at position {position}")))
        },
        None => Err(EvaluationError::ParenthesisMismatch { position: opened_at }),
    }
}

/// Parses one argument of a call.
///
/// Running out of tokens inside a call means its `)` was never seen, so the
/// end of input is reported as a parenthesis mismatch at the call's keyword
/// rather than as missing input.
pub(in crate::interpreter::parser) fn parse_argument<'a, I>(tokens: &mut Peekable<I>,
                                                            opened_at: usize)
                                                            -> EvalResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if tokens.peek().is_none() {
        return Err(EvaluationError::ParenthesisMismatch { position: opened_at });
    }
    parse_expression(tokens)
}

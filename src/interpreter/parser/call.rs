use std::iter::Peekable;

use log::trace;

use crate::{
    ast::Node,
    error::EvalResult,
    interpreter::{
        lexer::{Keyword, Token},
        parser::utils::{expect_close, expect_open, expect_separator, parse_argument},
    },
};

/// Parses the parenthesised argument list following a keyword.
///
/// Syntax:
/// ```text
///     let(<name>, <value>, <body>)
///     add(<left>, <right>)      (likewise sub, multi, div)
/// ```
///
/// # Parameters
/// - `tokens`: Token stream positioned right after the keyword.
/// - `keyword`: The keyword that opened the call.
/// - `position`: Offset of the keyword.
///
/// # Returns
/// A `Node::Let` or `Node::Function`.
///
/// # Errors
/// - `ParenthesisMismatch` if the keyword is not followed by `(`, or the
///   input ends inside the call.
/// - `InvalidArguments` if a separator is missing or misplaced, or the call
///   has too many arguments.
pub fn parse_call<'a, I>(tokens: &mut Peekable<I>,
                         keyword: Keyword,
                         position: usize)
                         -> EvalResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    expect_open(tokens, position)?;

    let node = match keyword {
        Keyword::Let => parse_let_arguments(tokens, position)?,
        Keyword::Function(function) => {
            let call = function.name();
            let left = parse_argument(tokens, position)?;
            expect_separator(tokens, call, position)?;
            let right = parse_argument(tokens, position)?;
            expect_close(tokens, call, position)?;

            Node::Function { function,
                             left: Box::new(left),
                             right: Box::new(right) }
        },
    };

    trace!("parsed call at {position}: {node}");
    Ok(node)
}

fn parse_let_arguments<'a, I>(tokens: &mut Peekable<I>, position: usize) -> EvalResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let name = parse_argument(tokens, position)?;
    expect_separator(tokens, "let", position)?;
    let value = parse_argument(tokens, position)?;
    expect_separator(tokens, "let", position)?;
    let body = parse_argument(tokens, position)?;
    expect_close(tokens, "let", position)?;

    Ok(Node::Let { name:  Box::new(name),
                   value: Box::new(value),
                   body:  Box::new(body), })
}

use std::iter::Peekable;

use log::debug;

use crate::{
    ast::Node,
    error::{EvalResult, EvaluationError},
    interpreter::{
        lexer::{Atom, Token},
        parser::call::parse_call,
    },
    stack::ensure_sufficient_stack,
};

/// Parses a complete token sequence into a call tree.
///
/// Exactly one expression must be present: tokens left over after the root
/// expression are reported as invalid arguments.
///
/// # Parameters
/// - `tokens`: The `(Token, offset)` pairs produced by the lexer.
///
/// # Returns
/// The root node of the call tree.
///
/// # Errors
/// Propagates the first error met while building the tree, or
/// `InvalidArguments` if tokens remain after the root expression.
///
/// # Examples
/// ```
/// use letcalc::interpreter::{lexer::tokenize, parser::core::parse_tree};
///
/// let tokens = tokenize("let(a, 5, add(a, a))").unwrap();
/// let tree = parse_tree(&tokens).unwrap();
/// assert_eq!(tree.to_string(), "let(a,5,add(a,a))");
/// assert_eq!(tree.node_count(), 6);
/// ```
pub fn parse_tree(tokens: &[(Token, usize)]) -> EvalResult<Node> {
    let mut iter = tokens.iter().peekable();
    let root = parse_expression(&mut iter)?;

    if let Some((token, position)) = iter.next() {
        return Err(EvaluationError::invalid_arguments(format!("unexpected '{token}' after the \
                                                               end of the expression at \
                                                               position {position}")));
    }

    debug!("built call tree {root}");
    Ok(root)
}

/// Parses one expression: a call, an integer literal or a variable.
///
/// Grammar:
/// ```text
///     expression := call | integer | identifier
///     call       := keyword "(" arguments ")"
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of the expression.
///
/// # Returns
/// The parsed node.
///
/// # Errors
/// - `InvalidArguments` if a delimiter stands where an argument belongs.
/// - `InputMissing` if there are no tokens left.
/// - Propagates any error from [`parse_call`].
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> EvalResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    ensure_sufficient_stack(|| match tokens.next() {
        Some((Token::Atom(Atom::Keyword(keyword)), position)) => {
            parse_call(tokens, *keyword, *position)
        },
        Some((Token::Atom(Atom::Integer(text)), _)) => Ok(Node::Literal(text.clone())),
        Some((Token::Atom(Atom::Identifier(name)), _)) => Ok(Node::Variable(name.clone())),
        Some((token, position)) => {
            Err(EvaluationError::invalid_arguments(format!("expected an argument, found \
                                                            '{token}' at position {position}")))
        },
        None => Err(EvaluationError::InputMissing),
    })
}

/// The evaluator module reduces call trees to integers.
///
/// The evaluator walks the call tree post-order, applies `let` bindings by
/// substituting the bound value into the body, and replaces arithmetic nodes
/// by literal results until a single literal remains.
///
/// # Responsibilities
/// - Computes `add`, `sub`, `multi` and `div` with 32-bit wrapping semantics.
/// - Resolves `let` bindings with correct shadowing.
/// - Reports division by zero, free variables and non-integer results.
pub mod evaluator;
/// The lexer module validates and tokenizes raw expressions.
///
/// The lexer normalises the input (lower case, no whitespace), then produces a
/// stream of tokens: parentheses, commas, keywords, integers and identifiers.
/// This is the first stage of evaluation.
///
/// # Responsibilities
/// - Rejects empty input and input that mentions no arithmetic function.
/// - Rejects disallowed characters and malformed atoms such as `5a`.
/// - Checks that parentheses are balanced.
pub mod lexer;
/// The parser module builds the call tree from tokens.
///
/// The parser is a recursive-descent parser over the lexer's token stream. It
/// checks the delimiters and the exact arity of every call.
///
/// # Responsibilities
/// - Converts tokens into `Node` trees.
/// - Reports misplaced separators and wrong argument counts.
pub mod parser;

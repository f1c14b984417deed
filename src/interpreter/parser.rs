/// Entry points of the tree builder.
///
/// Contains [`core::parse_tree`], which turns a whole token sequence into a
/// call tree, and [`core::parse_expression`], which parses one argument.
pub mod core;

/// Parsing of `let` bindings and arithmetic function calls.
///
/// Checks the delimiters and the exact arity of each call.
pub mod call;

/// Token-level helpers shared by the parser.
pub mod utils;

use log::{debug, trace};

use crate::{
    ast::Node,
    error::{EvalResult, EvaluationError},
    stack::ensure_sufficient_stack,
};

/// Reduces call trees to literals.
///
/// Arithmetic nodes are reduced post-order: operands first, then the node
/// itself. A `let` works outside in. Its value is reduced, then substituted
/// into the body, and only then are the bindings inside the body reduced.
/// A closed value is therefore a literal by the time it is copied, and each
/// copy is a single leaf.
#[derive(Debug, Default)]
pub struct Reducer {
    /// Interior nodes replaced by their results so far.
    pub reductions: usize,
}

impl Reducer {
    /// Creates a reducer that has not performed any reduction yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reduces `node` as far as possible.
    ///
    /// Leaves are returned unchanged. An arithmetic node whose operands do not
    /// both reduce to literals is kept as it is: one of its operands still
    /// refers to a variable that an enclosing `let` will substitute.
    ///
    /// # Parameters
    /// - `node`: The tree to reduce. It is consumed and rebuilt.
    ///
    /// # Returns
    /// The reduced tree.
    ///
    /// # Errors
    /// - `CalculationError` on division by zero.
    /// - `InvalidArguments` if an operand literal does not fit in 32 bits or a
    ///   `let` binds something other than a name.
    pub fn reduce(&mut self, node: Node) -> EvalResult<Node> {
        ensure_sufficient_stack(|| match node {
            Node::Literal(_) | Node::Variable(_) => Ok(node),
            Node::Function { function,
                             left,
                             right, } => {
                let left = self.reduce(*left)?;
                let right = self.reduce(*right)?;
                self.eval_function(function, left, right)
            },
            Node::Let { name, value, body } => self.eval_let(*name, *value, *body),
        })
    }

    pub(in crate::interpreter::evaluator) fn record(&mut self, reduced: &Node) {
        self.reductions += 1;
        trace!("reduction {}: {reduced}", self.reductions);
    }
}

/// Evaluates a call tree to a single integer.
///
/// # Parameters
/// - `root`: The tree built by the parser.
///
/// # Returns
/// The integer the tree reduces to.
///
/// # Errors
/// - Propagates errors from [`Reducer::reduce`].
/// - `InvalidArguments` if the tree still contains a free variable after
///   every binding has been applied.
/// - `CalculationError` if the tree reduces to a leaf that is not a 32-bit
///   integer.
///
/// # Examples
/// ```
/// use letcalc::{
///     ast::{ArithmeticFunction, Node},
///     interpreter::evaluator::core::evaluate_tree,
/// };
///
/// let tree = Node::Function { function: ArithmeticFunction::Multi,
///                             left:     Box::new(Node::literal(6)),
///                             right:    Box::new(Node::literal(7)), };
/// assert_eq!(evaluate_tree(tree).unwrap(), 42);
/// ```
pub fn evaluate_tree(root: Node) -> EvalResult<i32> {
    let size = root.node_count();
    let mut reducer = Reducer::new();
    let reduced = reducer.reduce(root)?;

    debug!("reduced {size} nodes with {} reductions to {reduced}", reducer.reductions);

    match reduced {
        Node::Literal(text) => text.parse().map_err(|_| {
            EvaluationError::calculation(format!("result '{text}' is not a 32-bit integer"))
        }),
        Node::Variable(name) => {
            Err(EvaluationError::calculation(format!("result '{name}' is not an integer")))
        },
        pending @ (Node::Function { .. } | Node::Let { .. }) => {
            let details = pending.first_variable().map_or_else(
                || format!("'{pending}' could not be reduced"),
                |name| format!("variable '{name}' is not bound by any let"),
            );
            Err(EvaluationError::invalid_arguments(details))
        },
    }
}

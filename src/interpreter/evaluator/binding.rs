use log::trace;

use crate::{
    ast::Node,
    error::{EvalResult, EvaluationError},
    interpreter::evaluator::core::Reducer,
    stack::ensure_sufficient_stack,
};

impl Reducer {
    /// Evaluates `let(name, value, body)`.
    ///
    /// The name and the value are reduced first. The value is then
    /// substituted into the body with [`Reducer::substitute`], and the
    /// resulting body is reduced. The reduced body replaces the `let`.
    ///
    /// # Errors
    /// - `InvalidArguments` if the name does not reduce to a leaf.
    /// - Propagates errors from reducing the children.
    pub(in crate::interpreter::evaluator) fn eval_let(&mut self,
                                                      name: Node,
                                                      value: Node,
                                                      body: Node)
                                                      -> EvalResult<Node> {
        let name = self.reduce(name)?;
        if !name.is_leaf() {
            return Err(EvaluationError::invalid_arguments(format!("let cannot bind '{name}', \
                                                                   expected a variable name")));
        }

        let value = self.reduce(value)?;
        trace!("binding {name} to {value}");

        let substituted = self.substitute(body, &name, &value)?;
        let reduced = self.reduce(substituted)?;

        self.record(&reduced);
        Ok(reduced)
    }

    /// Replaces every leaf of `tree` whose label equals `name`'s by `value`.
    ///
    /// Matching uses [`Node::same_label`]. If `tree` itself matches, `value`
    /// is returned directly.
    ///
    /// An inner `let` is handled according to its name:
    /// - it rebinds `name`: only its value is substituted, its body keeps the
    ///   inner binding;
    /// - it binds a label that `value` mentions, or its name is not a leaf
    ///   yet: the inner `let` is reduced first and `value` is substituted into
    ///   the result, so the inner binding cannot capture any part of `value`;
    /// - otherwise the substitution continues into its body.
    ///
    /// # Errors
    /// Propagates errors from reducing an inner `let` reduced early.
    ///
    /// # Examples
    /// ```
    /// use letcalc::{
    ///     ast::{ArithmeticFunction, Node},
    ///     interpreter::evaluator::core::Reducer,
    /// };
    ///
    /// let a = Node::Variable("a".to_string());
    /// let body = Node::Function { function: ArithmeticFunction::Add,
    ///                             left:     Box::new(a.clone()),
    ///                             right:    Box::new(Node::Variable("b".to_string())), };
    ///
    /// let result = Reducer::new().substitute(body, &a, &Node::literal(5)).unwrap();
    /// assert_eq!(result.to_string(), "add(5,b)");
    /// ```
    pub fn substitute(&mut self, tree: Node, name: &Node, value: &Node) -> EvalResult<Node> {
        if tree.same_label(name) {
            return Ok(value.clone());
        }

        ensure_sufficient_stack(|| match tree {
            Node::Literal(_) | Node::Variable(_) => Ok(tree),
            Node::Function { function,
                             left,
                             right, } => {
                Ok(Node::Function { function,
                                    left: Box::new(self.substitute(*left, name, value)?),
                                    right: Box::new(self.substitute(*right, name, value)?) })
            },
            Node::Let { name: inner,
                        value: bound,
                        body, } => {
                let bound = self.substitute(*bound, name, value)?;

                if inner.same_label(name) {
                    Ok(Node::Let { name:  inner,
                                   value: Box::new(bound),
                                   body, })
                } else if !inner.is_leaf() || value.mentions(&inner) {
                    let reduced = self.eval_let(*inner, bound, *body)?;
                    self.substitute(reduced, name, value)
                } else {
                    Ok(Node::Let { name:  inner,
                                   value: Box::new(bound),
                                   body:  Box::new(self.substitute(*body, name, value)?), })
                }
            },
        })
    }
}

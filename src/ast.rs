use std::fmt;

use crate::stack::ensure_sufficient_stack;

/// One of the four two-operand arithmetic functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticFunction {
    /// `add(a, b)`
    Add,
    /// `sub(a, b)`
    Sub,
    /// `multi(a, b)`
    Multi,
    /// `div(a, b)`, truncating toward zero.
    Div,
}

impl ArithmeticFunction {
    /// Every arithmetic function, in declaration order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::Multi, Self::Div];

    /// Returns the lower-case keyword naming this function.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Multi => "multi",
            Self::Div => "div",
        }
    }

    /// Looks up a function by its lower-case keyword.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for ArithmeticFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A node of the call tree built by the parser and reduced by the evaluator.
///
/// Leaves are integer literals and variable references. Interior nodes are
/// arithmetic function calls and `let` bindings; their arity is fixed by the
/// variant, the delimiters that surrounded them in the source are checked by
/// the parser and not kept.
///
/// Each node owns its children, so the tree can be consumed and rebuilt
/// during reduction without any sharing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Decimal text of an integer, e.g. `-42`.
    Literal(String),
    /// A variable reference, e.g. `a`.
    Variable(String),
    /// `function(left, right)`
    Function {
        /// The function applied to the operands.
        function: ArithmeticFunction,
        /// First operand.
        left:     Box<Self>,
        /// Second operand.
        right:    Box<Self>,
    },
    /// `let(name, value, body)`
    Let {
        /// The bound name. Normally a variable.
        name:  Box<Self>,
        /// The expression bound to `name`.
        value: Box<Self>,
        /// The scope in which `name` is visible.
        body:  Box<Self>,
    },
}

impl Node {
    /// Builds a literal leaf holding `value`.
    #[must_use]
    pub fn literal(value: i32) -> Self {
        Self::Literal(value.to_string())
    }

    /// Returns the text of a leaf, or `None` for interior nodes.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Literal(text) | Self::Variable(text) => Some(text),
            Self::Function { .. } | Self::Let { .. } => None,
        }
    }

    /// Returns `true` if this node is a literal or a variable.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Literal(_) | Self::Variable(_))
    }

    /// Compares the labels of two leaves, ignoring case.
    ///
    /// This is a shallow check: the kind of leaf is not taken into account,
    /// so a literal `5` matches a binding named `5`. Interior nodes never
    /// match anything.
    ///
    /// # Examples
    /// ```
    /// use letcalc::ast::Node;
    ///
    /// let a = Node::Variable("a".to_string());
    /// assert!(a.same_label(&Node::Variable("A".to_string())));
    /// assert!(!a.same_label(&Node::literal(5)));
    /// ```
    #[must_use]
    pub fn same_label(&self, other: &Self) -> bool {
        match (self.label(), other.label()) {
            (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
            _ => false,
        }
    }

    /// Counts the nodes of this tree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        ensure_sufficient_stack(|| match self {
            Self::Literal(_) | Self::Variable(_) => 1,
            Self::Function { left, right, .. } => 1 + left.node_count() + right.node_count(),
            Self::Let { name, value, body } => {
                1 + name.node_count() + value.node_count() + body.node_count()
            },
        })
    }

    /// Returns `true` if some leaf of this tree has the same label as `leaf`,
    /// as decided by [`Node::same_label`].
    #[must_use]
    pub fn mentions(&self, leaf: &Self) -> bool {
        ensure_sufficient_stack(|| match self {
            Self::Literal(_) | Self::Variable(_) => self.same_label(leaf),
            Self::Function { left, right, .. } => left.mentions(leaf) || right.mentions(leaf),
            Self::Let { name, value, body } => {
                name.mentions(leaf) || value.mentions(leaf) || body.mentions(leaf)
            },
        })
    }

    /// Returns the first variable found in a depth-first, left-to-right walk.
    #[must_use]
    pub fn first_variable(&self) -> Option<&str> {
        ensure_sufficient_stack(|| match self {
            Self::Literal(_) => None,
            Self::Variable(name) => Some(name.as_str()),
            Self::Function { left, right, .. } => {
                left.first_variable().or_else(|| right.first_variable())
            },
            Self::Let { name, value, body } => name.first_variable()
                                                   .or_else(|| value.first_variable())
                                                   .or_else(|| body.first_variable()),
        })
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Self::Literal(text) | Self::Variable(text) => f.write_str(text),
            Self::Function { function, left, right } => write!(f, "{function}({left},{right})"),
            Self::Let { name, value, body } => write!(f, "let({name},{value},{body})"),
        })
    }
}

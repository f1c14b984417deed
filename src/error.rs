use thiserror::Error;

/// Result type used across the lexer, parser and evaluator.
pub type EvalResult<T> = Result<T, EvaluationError>;

/// Represents every failure the evaluation pipeline can report.
///
/// The set is closed: each variant is a terminal outcome for the given input
/// and the pipeline stops at the first one it encounters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// The expression is absent or empty.
    #[error("Input expression to be evaluated is either missing or empty.")]
    InputMissing,
    /// A character or atomic token is not allowed.
    #[error("Input expression is not valid: unexpected '{fragment}' at position {position}.")]
    InputInvalid {
        /// The offending text.
        fragment: String,
        /// Byte offset in the normalised expression.
        position: usize,
    },
    /// The expression does not mention any arithmetic function. Reported as
    /// [`ErrorKind::InputInvalid`].
    #[error("Input expression is not valid: it names none of add, sub, multi or div.")]
    NoArithmeticFunction,
    /// Opening and closing parentheses do not pair up.
    #[error("Parenthesis mismatch at position {position}.")]
    ParenthesisMismatch {
        /// Byte offset in the normalised expression.
        position: usize,
    },
    /// Wrong arity, a misplaced separator, or a variable that no `let` binds.
    #[error("Invalid/Missing arguments for let operator or arithmetic function: {details}.")]
    InvalidArguments {
        /// What was wrong with the arguments.
        details: String,
    },
    /// Division by zero, or the expression did not reduce to an integer.
    #[error("Error encountered in calculation: {details}.")]
    CalculationError {
        /// What went wrong during the calculation.
        details: String,
    },
}

/// The category of an [`EvaluationError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InputMissing,
    InputInvalid,
    ParenthesisMismatch,
    InvalidArguments,
    CalculationError,
}

impl EvaluationError {
    /// Returns the category of this error.
    ///
    /// # Examples
    /// ```
    /// use letcalc::error::{ErrorKind, EvaluationError};
    ///
    /// let err = EvaluationError::ParenthesisMismatch { position: 3 };
    /// assert_eq!(err.kind(), ErrorKind::ParenthesisMismatch);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InputMissing => ErrorKind::InputMissing,
            Self::InputInvalid { .. } | Self::NoArithmeticFunction => ErrorKind::InputInvalid,
            Self::ParenthesisMismatch { .. } => ErrorKind::ParenthesisMismatch,
            Self::InvalidArguments { .. } => ErrorKind::InvalidArguments,
            Self::CalculationError { .. } => ErrorKind::CalculationError,
        }
    }

    pub(crate) fn invalid_arguments(details: impl Into<String>) -> Self {
        Self::InvalidArguments { details: details.into() }
    }

    pub(crate) fn calculation(details: impl Into<String>) -> Self {
        Self::CalculationError { details: details.into() }
    }
}

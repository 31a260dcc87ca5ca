use thiserror::Error;

/// Why an expression could not be evaluated. Offsets count characters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("malformed number '{literal}' at {offset}")]
    MalformedNumber { literal: String, offset: usize },

    #[error("unknown character '{ch}' at {offset}")]
    UnknownCharacter { ch: char, offset: usize },

    // only raised in strict mode
    #[error("not enough operands for '{op}'")]
    InsufficientOperands { op: char },

    #[error("unbalanced parenthesis at {offset}")]
    UnbalancedParens { offset: usize },
}

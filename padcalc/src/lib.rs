//! Keypad calculator core. `evaluate` turns text like `(2+3)*4` into an
//! `f64` with a two-stack, shunting-yard style reducer, `Keypad` keeps the
//! expression buffer a calculator front end edits and evaluates.

pub use error::EvalError;
pub use evaluator::{evaluate, BinOp, Evaluator, Mode};
pub use format::ResultFormat;
pub use keypad::{Key, Keypad, ERROR_INDICATOR};

mod error;
mod evaluator;

mod format;

mod keypad;

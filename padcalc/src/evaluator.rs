use lexers::{CalcToken, CalcTokenizer};
use tracing::{debug, trace};

use crate::error::EvalError;

/// How the evaluator reacts to expressions it can't fully make sense of.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Skip reductions that lack operands and ignore unbalanced parens.
    #[default]
    Lenient,
    /// Report those as `InsufficientOperands` and `UnbalancedParens`.
    Strict,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl BinOp {
    pub fn from_char(c: char) -> Option<BinOp> {
        match c {
            '+' => Some(BinOp::Add),
            '-' => Some(BinOp::Sub),
            '*' => Some(BinOp::Mul),
            '/' => Some(BinOp::Div),
            '%' => Some(BinOp::Rem),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
            BinOp::Rem => '%',
        }
    }

    pub fn precedence(self) -> usize {
        match self {
            BinOp::Add | BinOp::Sub => 1,
            BinOp::Mul | BinOp::Div | BinOp::Rem => 2,
        }
    }

    /// Division by zero yields 0 instead of an infinity.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            BinOp::Add => a + b,
            BinOp::Sub => a - b,
            BinOp::Mul => a * b,
            BinOp::Div if b == 0.0 => 0.0,
            BinOp::Div => a / b,
            BinOp::Rem => a % b,
        }
    }
}

// Open parens sit on the operator stack with precedence 0, so the
// precedence rule never pops them, only ')' or the end of input does.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Pending {
    Op(BinOp),
    OParen,
}

/// Two-stack infix evaluator. Tokens are pulled one at a time and reduced
/// as soon as precedence allows, no syntax tree is built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Evaluator {
    mode: Mode,
}

impl Evaluator {
    pub fn new(mode: Mode) -> Evaluator {
        Evaluator { mode }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn eval(&self, input: &str) -> Result<f64, EvalError> {
        let mut lex = CalcTokenizer::new(input.chars());
        let mut operands = Vec::new();
        let mut stack = Vec::new();

        while let Some(token) = lex.next() {
            match token {
                CalcToken::Number(num) => operands.push(num),
                CalcToken::OParen => stack.push(Pending::OParen),
                CalcToken::CParen => loop {
                    match stack.pop() {
                        Some(Pending::OParen) => break,
                        Some(Pending::Op(op)) => self.reduce(&mut operands, op)?,
                        None => {
                            self.unbalanced(lex.offset())?;
                            break;
                        }
                    }
                },
                CalcToken::Op(c) => {
                    let op = BinOp::from_char(c).ok_or(EvalError::UnknownCharacter {
                        ch: c,
                        offset: lex.offset(),
                    })?;
                    // left associative: equal precedence reduces first
                    while let Some(&Pending::Op(top)) = stack.last() {
                        if top.precedence() < op.precedence() {
                            break;
                        }
                        stack.pop();
                        self.reduce(&mut operands, top)?;
                    }
                    stack.push(Pending::Op(op));
                }
                CalcToken::BadNumber(literal) => {
                    return Err(EvalError::MalformedNumber {
                        literal,
                        offset: lex.offset(),
                    })
                }
                CalcToken::Unknown(ch) => {
                    return Err(EvalError::UnknownCharacter {
                        ch,
                        offset: lex.offset(),
                    })
                }
            }
        }
        while let Some(top) = stack.pop() {
            match top {
                Pending::Op(op) => self.reduce(&mut operands, op)?,
                // an unclosed '(' counts as closed, it never pops operands
                Pending::OParen => self.unbalanced(input.chars().count())?,
            }
        }
        Ok(operands.pop().unwrap_or(0.0))
    }

    fn reduce(&self, operands: &mut Vec<f64>, op: BinOp) -> Result<(), EvalError> {
        let n = operands.len();
        if n < 2 {
            if self.mode == Mode::Strict {
                return Err(EvalError::InsufficientOperands { op: op.symbol() });
            }
            debug!(op = %op.symbol(), operands = n, "skipping reduction");
            return Ok(());
        }
        let (a, b) = (operands[n - 2], operands[n - 1]);
        operands.truncate(n - 2);
        let result = op.apply(a, b);
        trace!("{} {} {} = {}", a, op.symbol(), b, result);
        operands.push(result);
        Ok(())
    }

    fn unbalanced(&self, offset: usize) -> Result<(), EvalError> {
        if self.mode == Mode::Strict {
            return Err(EvalError::UnbalancedParens { offset });
        }
        debug!(offset, "ignoring unbalanced parenthesis");
        Ok(())
    }
}

/// Evaluate `input` leniently, the way the keypad does by default.
pub fn evaluate(input: &str) -> Result<f64, EvalError> {
    Evaluator::default().eval(input)
}

use tracing::debug;

use crate::evaluator::Evaluator;
use crate::format::ResultFormat;

/// What the display shows after a failed evaluation.
pub const ERROR_INDICATOR: &str = "Error";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    Dot,
    Op(char),
    OParen,
    CParen,
    Clear,
    Backspace,
    Equals,
}

impl Key {
    pub fn from_char(c: char) -> Option<Key> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| Key::Digit(d as u8)),
            '.' => Some(Key::Dot),
            '+' | '-' | '*' | '/' | '%' => Some(Key::Op(c)),
            '(' => Some(Key::OParen),
            ')' => Some(Key::CParen),
            'C' | 'c' => Some(Key::Clear),
            '<' => Some(Key::Backspace),
            '=' => Some(Key::Equals),
            _ => None,
        }
    }

    /// Button labels are single characters: "7", "/", "C", "<", "=" ...
    pub fn from_label(label: &str) -> Option<Key> {
        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Key::from_char(c),
            _ => None,
        }
    }

    // the text a key appends to the buffer, if any
    fn input(self) -> Option<char> {
        match self {
            Key::Digit(d) => char::from_digit(u32::from(d), 10),
            Key::Dot => Some('.'),
            Key::Op(op) => Some(op),
            Key::OParen => Some('('),
            Key::CParen => Some(')'),
            Key::Clear | Key::Backspace | Key::Equals => None,
        }
    }
}

/// Expression buffer behind a calculator keypad. Results replace the
/// buffer so the next expression chains off them.
#[derive(Clone, Debug, Default)]
pub struct Keypad {
    evaluator: Evaluator,
    format: ResultFormat,
    buffer: String,
    failed: bool,
}

impl Keypad {
    pub fn new(evaluator: Evaluator, format: ResultFormat) -> Keypad {
        Keypad { evaluator, format, buffer: String::new(), failed: false }
    }

    pub fn display(&self) -> &str {
        if self.failed { ERROR_INDICATOR } else { &self.buffer }
    }

    pub fn is_error(&self) -> bool {
        self.failed
    }

    pub fn press(&mut self, key: Key) -> &str {
        match key {
            Key::Clear => self.reset(),
            Key::Backspace if self.failed => self.reset(),
            Key::Backspace => {
                self.buffer.pop();
            }
            Key::Equals if self.failed => (),
            Key::Equals => self.evaluate(),
            _ => {
                // typing over the error indicator starts over
                if self.failed {
                    self.reset();
                }
                if let Some(c) = key.input() {
                    self.buffer.push(c);
                }
            }
        }
        self.display()
    }

    /// Press a key for every character of `keys`, skipping non-keys.
    pub fn press_all(&mut self, keys: &str) -> &str {
        for key in keys.chars().filter_map(Key::from_char) {
            self.press(key);
        }
        self.display()
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.failed = false;
    }

    fn evaluate(&mut self) {
        match self.evaluator.eval(&self.buffer) {
            Ok(value) if value.is_finite() => self.buffer = self.format.render(value),
            Ok(value) => {
                debug!(%value, expr = %self.buffer, "result can't be displayed");
                self.failed = true;
            }
            Err(e) => {
                debug!(error = %e, expr = %self.buffer, "evaluation failed");
                self.failed = true;
            }
        }
    }
}

#![deny(warnings)]

use crate::scanner::Scanner;


#[derive(Clone, PartialEq, Debug)]
pub enum CalcToken {
    Number(f64),
    Op(char),
    OParen, CParen,
    BadNumber(String), // a [0-9.]+ run that isn't a decimal
    Unknown(char),
}

/// Lazily splits calculator input into tokens. There are no signed
/// literals, '-' is always yielded as an operator.
pub struct CalcTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
    offset: usize,
}

impl<I: Iterator<Item=char>> CalcTokenizer<I> {
    pub fn new(source: I) -> Self {
        CalcTokenizer{src: Scanner::new(source), offset: 0}
    }

    /// Character offset where the last returned token starts.
    pub fn offset(&self) -> usize { self.offset }

    fn get_token(&mut self) -> Option<CalcToken> {
        self.src.skip_ws();
        self.src.ignore();
        self.offset = self.src.offset();
        if let Some(num) = self.src.scan_decimal() {
            match num.parse::<f64>() {
                Ok(n) => Some(CalcToken::Number(n)),
                Err(_) => Some(CalcToken::BadNumber(num)),
            }
        } else if let Some(op) = self.src.scan_calc_op() {
            match op {
                '(' => Some(CalcToken::OParen),
                ')' => Some(CalcToken::CParen),
                _ => Some(CalcToken::Op(op)),
            }
        } else if let Some(c) = self.src.next() {
            self.src.ignore();
            Some(CalcToken::Unknown(c))
        } else {
            None
        }
    }
}

impl<I: Iterator<Item=char>> Iterator for CalcTokenizer<I> {
    type Item = CalcToken;
    fn next(&mut self) -> Option<Self::Item> {
        self.get_token()
    }
}

///////////////////////////////////////////////////////////////////////////////

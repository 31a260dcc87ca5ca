#![deny(warnings)]

use crate::scanner::Scanner;

static DECIMAL: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.'];
static CALC_OPS: &[char] = &['+', '-', '*', '/', '%', '(', ')'];


impl<I: Iterator<Item=char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    // any unicode whitespace, not just the ascii set
    pub fn skip_ws(&mut self) -> bool {
        let mut advanced = false;
        while self.accept_if(|c| c.is_whitespace()).is_some() { advanced = true; }
        advanced
    }

    // scan a maximal run like [0-9.]+, validity is up to the caller
    pub fn scan_decimal(&mut self) -> Option<String> {
        self.accept_any(DECIMAL)?;
        self.skip_all(DECIMAL);
        Some(self.extract_string())
    }

    pub fn scan_calc_op(&mut self) -> Option<char> {
        let op = self.accept_any(CALC_OPS)?;
        self.ignore();
        Some(op)
    }
}

///////////////////////////////////////////////////////////////////////////////

/// How evaluation results are turned back into text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResultFormat {
    /// Fewest digits that read back as the same value, never in exponent
    /// form, so the text can be evaluated again.
    #[default]
    Shortest,
    /// Exactly this many decimals, `Fixed(6)` looks like C's `%f`.
    Fixed(usize),
}

impl ResultFormat {
    pub fn render(&self, value: f64) -> String {
        // don't show "-0"
        let value = if value == 0.0 { 0.0 } else { value };
        match *self {
            ResultFormat::Shortest => format!("{}", value),
            ResultFormat::Fixed(decimals) => format!("{:.*}", decimals, value),
        }
    }
}

///////////////////////////////////////////////////////////////////////////////

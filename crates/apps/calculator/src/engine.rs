const MAX_ENTRY_DIGITS: usize = 16;
const DISPLAY_PRECISION: f64 = 1e10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    pub(crate) fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    fn apply(self, lhs: f64, rhs: f64) -> Result<f64, &'static str> {
        let result = match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide if rhs == 0.0 => return Err("Cannot divide by zero"),
            Self::Divide => lhs / rhs,
        };
        if result.is_finite() {
            Ok(result)
        } else {
            Err("Overflow")
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CalcKey {
    Digit(char),
    Decimal,
    Operator(BinaryOp),
    Equals,
    Clear,
    Backspace,
    ToggleSign,
    Percent,
}

/// Accumulator-style calculator: the entry is combined with the accumulator whenever an
/// operator or equals is pressed.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct CalculatorState {
    entry: String,
    accumulator: Option<f64>,
    pending_op: Option<BinaryOp>,
    fresh_entry: bool,
    error: Option<&'static str>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            entry: "0".to_string(),
            accumulator: None,
            pending_op: None,
            fresh_entry: false,
            error: None,
        }
    }
}

impl CalculatorState {
    pub(crate) fn press(&mut self, key: CalcKey) {
        if self.error.is_some() {
            match key {
                CalcKey::Digit(_) | CalcKey::Decimal | CalcKey::Clear | CalcKey::Backspace => {
                    *self = Self::default();
                }
                _ => return,
            }
        }

        match key {
            CalcKey::Digit(digit) => self.push_digit(digit),
            CalcKey::Decimal => self.push_decimal(),
            CalcKey::Operator(op) => self.set_operator(op),
            CalcKey::Equals => self.equals(),
            CalcKey::Clear => *self = Self::default(),
            CalcKey::Backspace => self.backspace(),
            CalcKey::ToggleSign => self.toggle_sign(),
            CalcKey::Percent => self.percent(),
        }
    }

    pub(crate) fn display_text(&self) -> String {
        self.error
            .map(str::to_string)
            .unwrap_or_else(|| self.entry.clone())
    }

    pub(crate) fn expression_text(&self) -> String {
        match (self.accumulator, self.pending_op) {
            (Some(acc), Some(op)) => format!("{} {}", format_number(acc), op.symbol()),
            _ => String::new(),
        }
    }

    pub(crate) fn has_error(&self) -> bool {
        self.error.is_some()
    }

    fn entry_value(&self) -> f64 {
        self.entry.parse::<f64>().unwrap_or(0.0)
    }

    fn take_fresh_entry(&mut self) {
        if self.fresh_entry {
            self.entry = "0".to_string();
            self.fresh_entry = false;
        }
    }

    fn push_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            return;
        }
        self.take_fresh_entry();
        if self.entry.chars().filter(char::is_ascii_digit).count() >= MAX_ENTRY_DIGITS {
            return;
        }
        match self.entry.as_str() {
            "0" => self.entry = digit.to_string(),
            "-0" => self.entry = format!("-{digit}"),
            _ => self.entry.push(digit),
        }
    }

    fn push_decimal(&mut self) {
        self.take_fresh_entry();
        if !self.entry.contains('.') {
            self.entry.push('.');
        }
    }

    fn backspace(&mut self) {
        if self.fresh_entry {
            return;
        }
        self.entry.pop();
        if self.entry.is_empty() || self.entry == "-" {
            self.entry = "0".to_string();
        }
    }

    fn toggle_sign(&mut self) {
        if let Some(stripped) = self.entry.strip_prefix('-') {
            self.entry = stripped.to_string();
        } else if self.entry != "0" {
            self.entry.insert(0, '-');
        }
    }

    fn percent(&mut self) {
        let value = self.entry_value();
        let result = match (self.accumulator, self.pending_op) {
            (Some(acc), Some(_)) => acc * value / 100.0,
            _ => value / 100.0,
        };
        if !result.is_finite() {
            *self = Self::default();
            self.error = Some("Overflow");
            return;
        }
        self.entry = format_number(result);
        self.fresh_entry = true;
    }

    /// Folds the current entry into the accumulator using the pending operator.
    fn fold_pending(&mut self) -> bool {
        let rhs = self.entry_value();
        let folded = match (self.accumulator, self.pending_op) {
            (Some(acc), Some(op)) => op.apply(acc, rhs),
            _ => Ok(rhs),
        };
        match folded {
            Ok(value) => {
                self.accumulator = Some(value);
                self.entry = format_number(value);
                true
            }
            Err(message) => {
                *self = Self::default();
                self.error = Some(message);
                false
            }
        }
    }

    fn set_operator(&mut self, op: BinaryOp) {
        // Pressing a second operator before any new digits only swaps the operator.
        if self.fresh_entry && self.pending_op.is_some() {
            self.pending_op = Some(op);
            return;
        }
        if self.fold_pending() {
            self.pending_op = Some(op);
            self.fresh_entry = true;
        }
    }

    fn equals(&mut self) {
        if self.pending_op.is_none() {
            return;
        }
        if self.fold_pending() {
            self.accumulator = None;
            self.pending_op = None;
            self.fresh_entry = true;
        }
    }
}

pub(crate) fn keyboard_key(key: &str) -> Option<CalcKey> {
    let mut chars = key.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        if ch.is_ascii_digit() {
            return Some(CalcKey::Digit(ch));
        }
    }
    match key {
        "." | "," => Some(CalcKey::Decimal),
        "+" => Some(CalcKey::Operator(BinaryOp::Add)),
        "-" => Some(CalcKey::Operator(BinaryOp::Subtract)),
        "*" | "x" => Some(CalcKey::Operator(BinaryOp::Multiply)),
        "/" => Some(CalcKey::Operator(BinaryOp::Divide)),
        "%" => Some(CalcKey::Percent),
        "=" | "Enter" => Some(CalcKey::Equals),
        "Backspace" => Some(CalcKey::Backspace),
        "Escape" | "Delete" => Some(CalcKey::Clear),
        _ => None,
    }
}

pub(crate) fn format_number(value: f64) -> String {
    let scaled = value * DISPLAY_PRECISION;
    // Values this large have no fractional part left to round.
    let rounded = if scaled.is_finite() {
        scaled.round() / DISPLAY_PRECISION
    } else {
        value
    };
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{rounded}")
}

//! Pattern-driven decimal formatting
//!
//! Supports the commonly used subset of decimal-format patterns:
//! - literal prefix and suffix text, with `'` quoting (`''` for a quote)
//! - `0` (required digit) and `#` (optional digit) in the integer and
//!   fraction parts
//! - `,` grouping in the integer part; the group size is the number of
//!   digits after the last comma
//! - `.` decimal separator
//! - `%` anywhere in the prefix or suffix scales the value by 100
//!
//! Output is locale-agnostic: separators come from [`NumberSymbols`], which
//! defaults to `.` and `,`. Negative subpatterns (`;`) are not supported.

use crate::error::{ToolkitError, ToolkitResult};

/// Separator characters used when formatting and parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberSymbols {
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub minus_sign: char,
}

impl Default for NumberSymbols {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: ',',
            minus_sign: '-',
        }
    }
}

/// Compiled number pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    prefix: String,
    suffix: String,
    min_integer_digits: usize,
    min_fraction_digits: usize,
    max_fraction_digits: usize,
    /// Zero disables grouping
    grouping_size: usize,
    multiplier: u32,
    decimal_separator_always_shown: bool,
    symbols: NumberSymbols,
}

/// Equivalent to the pattern `#,##0.###`
impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            suffix: String::new(),
            min_integer_digits: 1,
            min_fraction_digits: 0,
            max_fraction_digits: 3,
            grouping_size: 3,
            multiplier: 1,
            decimal_separator_always_shown: false,
            symbols: NumberSymbols::default(),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Phase {
    Prefix,
    Integer,
    Fraction,
    Suffix,
}

fn malformed(pattern: &str, reason: &str) -> ToolkitError {
    ToolkitError::InvalidArgument(format!("Malformed number pattern \"{pattern}\": {reason}"))
}

impl NumberFormat {
    /// Compile `pattern`
    ///
    /// # Errors
    /// Returns [`ToolkitError::InvalidArgument`] if the pattern has no digit
    /// placeholders, an unterminated quote, misplaced `0`/`#`/`,`/`.`
    /// characters, or a negative subpattern.
    pub fn parse_pattern(pattern: &str) -> ToolkitResult<Self> {
        let mut format = Self {
            min_integer_digits: 0,
            max_fraction_digits: 0,
            grouping_size: 0,
            ..Self::default()
        };

        let mut phase = Phase::Prefix;
        let mut in_quote = false;
        let mut integer_digits = 0usize;
        let mut optional_integer_seen = false;
        let mut last_comma: Option<usize> = None;
        let mut optional_fraction_seen = false;

        let mut chars = pattern.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '\'' {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    if phase == Phase::Prefix {
                        format.prefix.push('\'');
                    } else {
                        phase = Phase::Suffix;
                        format.suffix.push('\'');
                    }
                } else {
                    in_quote = !in_quote;
                    if matches!(phase, Phase::Integer | Phase::Fraction) {
                        phase = Phase::Suffix;
                    }
                }
                continue;
            }

            if in_quote {
                match phase {
                    Phase::Prefix => format.prefix.push(c),
                    _ => format.suffix.push(c),
                }
                continue;
            }

            if c == ';' {
                return Err(malformed(pattern, "negative subpatterns are not supported"));
            }

            let is_digit_syntax = matches!(c, '0' | '#' | ',' | '.');
            if phase == Phase::Prefix && is_digit_syntax {
                phase = Phase::Integer;
            }

            match phase {
                Phase::Prefix => {
                    if c == '%' {
                        format.multiplier = 100;
                    }
                    format.prefix.push(c);
                }
                Phase::Integer => match c {
                    '#' => {
                        if format.min_integer_digits > 0 {
                            return Err(malformed(pattern, "'#' after '0' in integer part"));
                        }
                        optional_integer_seen = true;
                        integer_digits += 1;
                    }
                    '0' => {
                        format.min_integer_digits += 1;
                        integer_digits += 1;
                    }
                    ',' => last_comma = Some(integer_digits),
                    '.' => phase = Phase::Fraction,
                    _ => {
                        phase = Phase::Suffix;
                        format.push_suffix_char(c);
                    }
                },
                Phase::Fraction => match c {
                    '0' => {
                        if optional_fraction_seen {
                            return Err(malformed(pattern, "'0' after '#' in fraction part"));
                        }
                        format.min_fraction_digits += 1;
                        format.max_fraction_digits += 1;
                    }
                    '#' => {
                        optional_fraction_seen = true;
                        format.max_fraction_digits += 1;
                    }
                    ',' | '.' => {
                        return Err(malformed(pattern, "separator inside fraction part"));
                    }
                    _ => {
                        phase = Phase::Suffix;
                        format.push_suffix_char(c);
                    }
                },
                Phase::Suffix => {
                    if is_digit_syntax {
                        return Err(malformed(pattern, "digit syntax inside suffix"));
                    }
                    format.push_suffix_char(c);
                }
            }
        }

        if in_quote {
            return Err(malformed(pattern, "unterminated quote"));
        }
        if integer_digits == 0 && format.max_fraction_digits == 0 {
            return Err(malformed(pattern, "no digit placeholders"));
        }
        if let Some(comma_at) = last_comma {
            let group = integer_digits - comma_at;
            if group == 0 {
                return Err(malformed(pattern, "grouping separator at end of integer part"));
            }
            format.grouping_size = group;
        }
        if integer_digits > 0 && format.min_integer_digits == 0 && !optional_integer_seen {
            format.min_integer_digits = 1;
        }

        Ok(format)
    }

    fn push_suffix_char(&mut self, c: char) {
        if c == '%' {
            self.multiplier = 100;
        }
        self.suffix.push(c);
    }

    /// Replace the separator symbols
    pub fn with_symbols(mut self, symbols: NumberSymbols) -> Self {
        self.symbols = symbols;
        self
    }

    pub fn with_decimal_separator_always_shown(mut self, shown: bool) -> Self {
        self.decimal_separator_always_shown = shown;
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn min_integer_digits(&self) -> usize {
        self.min_integer_digits
    }

    pub fn max_fraction_digits(&self) -> usize {
        self.max_fraction_digits
    }

    /// Render `value` according to the pattern
    ///
    /// Rounds to the maximum fraction digits. A value that rounds to zero is
    /// rendered without a minus sign.
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return format!("{}NaN{}", self.prefix, self.suffix);
        }

        let scaled = value * f64::from(self.multiplier);
        if scaled.is_infinite() {
            let sign = if scaled < 0.0 {
                self.symbols.minus_sign.to_string()
            } else {
                String::new()
            };
            return format!("{sign}{}∞{}", self.prefix, self.suffix);
        }

        let rendered = format!("{:.*}", self.max_fraction_digits, scaled.abs());
        let (integer_raw, fraction_raw) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));

        let mut fraction = fraction_raw.to_owned();
        while fraction.len() > self.min_fraction_digits && fraction.ends_with('0') {
            fraction.pop();
        }

        let significant = integer_raw.trim_start_matches('0');
        let mut integer = String::with_capacity(self.min_integer_digits.max(significant.len()));
        for _ in significant.len()..self.min_integer_digits {
            integer.push('0');
        }
        integer.push_str(significant);
        if integer.is_empty() && fraction.is_empty() {
            integer.push('0');
        }

        let is_zero = !rendered.bytes().any(|b| matches!(b, b'1'..=b'9'));
        let mut out = String::new();
        if scaled < 0.0 && !is_zero {
            out.push(self.symbols.minus_sign);
        }
        out.push_str(&self.prefix);
        out.push_str(&self.group(&integer));
        if !fraction.is_empty() || self.decimal_separator_always_shown {
            out.push(self.symbols.decimal_separator);
            out.push_str(&fraction);
        }
        out.push_str(&self.suffix);
        out
    }

    fn group(&self, integer: &str) -> String {
        if self.grouping_size == 0 || integer.len() <= self.grouping_size {
            return integer.to_owned();
        }

        let mut out = String::with_capacity(integer.len() + integer.len() / self.grouping_size);
        let lead = integer.len() % self.grouping_size;
        for (i, c) in integer.chars().enumerate() {
            if i > 0 && (i + self.grouping_size - lead) % self.grouping_size == 0 {
                out.push(self.symbols.grouping_separator);
            }
            out.push(c);
        }
        out
    }

    /// Parse text produced by [`Self::format`] back into a number
    ///
    /// # Errors
    /// Returns [`ToolkitError::InvalidArgument`] when the prefix or suffix is
    /// missing or the remaining text is not a number.
    pub fn parse(&self, text: &str) -> ToolkitResult<f64> {
        let (negative, body) = match text.strip_prefix(self.symbols.minus_sign) {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let digits = body
            .strip_prefix(self.prefix.as_str())
            .and_then(|rest| rest.strip_suffix(self.suffix.as_str()))
            .ok_or_else(|| {
                ToolkitError::InvalidArgument(format!(
                    "\"{text}\" does not match prefix \"{}\" and suffix \"{}\"",
                    self.prefix, self.suffix
                ))
            })?;

        let normalized: String = digits
            .chars()
            .filter(|&c| c != self.symbols.grouping_separator)
            .map(|c| if c == self.symbols.decimal_separator { '.' } else { c })
            .collect();

        let magnitude: f64 = normalized
            .parse()
            .map_err(|_| ToolkitError::InvalidArgument(format!("\"{text}\" is not a number")))?;

        let value = magnitude / f64::from(self.multiplier);
        Ok(if negative { -value } else { value })
    }
}

/// Format for name uniquefiers: an underscore and at least three digits
///
/// Three digits keep table rows sorting numerically without a grouping
/// separator creeping in.
pub fn uniquefier_number_format() -> NumberFormat {
    NumberFormat {
        prefix: "_".to_owned(),
        min_integer_digits: 3,
        max_fraction_digits: 0,
        grouping_size: 0,
        ..NumberFormat::default()
    }
}

/// Decimal format with a measurement unit appended to the pattern
///
/// A missing or blank unit leaves the pattern undecorated.
///
/// # Errors
/// Returns [`ToolkitError::InvalidArgument`] if the combined pattern is
/// malformed.
pub fn unit_decorated_decimal_format(
    numeric_pattern: &str,
    measurement_unit: Option<&str>,
) -> ToolkitResult<NumberFormat> {
    match measurement_unit {
        Some(unit) if !unit.trim().is_empty() => {
            NumberFormat::parse_pattern(&format!("{numeric_pattern}{unit}"))
        }
        _ => NumberFormat::parse_pattern(numeric_pattern),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniquefier_pads_to_three_digits() {
        let format = uniquefier_number_format();
        assert_eq!(format.format(7.0), "_007");
        assert_eq!(format.format(42.0), "_042");
        assert_eq!(format.format(1234.0), "_1234");
        assert_eq!(format.format(0.0), "_000");
    }

    #[test]
    fn test_uniquefier_matches_pattern_form() {
        let compiled = NumberFormat::parse_pattern("_000").unwrap();
        assert_eq!(compiled, uniquefier_number_format());
    }

    #[test]
    fn test_unit_decorated_format() {
        let format = unit_decorated_decimal_format("0.0", Some(" m")).unwrap();
        assert_eq!(format.suffix(), " m");
        assert_eq!(format.format(12.34), "12.3 m");
        assert_eq!(format.format(3.0), "3.0 m");

        let pressure = unit_decorated_decimal_format("#,##0.##", Some(" Pa")).unwrap();
        assert_eq!(pressure.format(101_325.0), "101,325 Pa");
        assert_eq!(pressure.format(1234.5), "1,234.5 Pa");
    }

    #[test]
    fn test_blank_unit_is_ignored() {
        let blank = unit_decorated_decimal_format("0.00", Some("   ")).unwrap();
        let none = unit_decorated_decimal_format("0.00", None).unwrap();
        assert_eq!(blank, none);
        assert_eq!(none.format(3.14159), "3.14");
    }

    #[test]
    fn test_decimal_separator_hidden_without_fraction() {
        let format = NumberFormat::parse_pattern("0.##").unwrap();
        assert_eq!(format.format(2.0), "2");
        assert_eq!(format.format(2.5), "2.5");

        let shown = format.with_decimal_separator_always_shown(true);
        assert_eq!(shown.format(2.0), "2.");
    }

    #[test]
    fn test_negative_values() {
        let format = NumberFormat::parse_pattern("0.0").unwrap();
        assert_eq!(format.format(-12.76), "-12.8");
        assert_eq!(format.format(-0.01), "0.0");
    }

    #[test]
    fn test_percent_scales() {
        let format = NumberFormat::parse_pattern("0%").unwrap();
        assert_eq!(format.format(0.25), "25%");
        assert!((format.parse("25%").unwrap() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_quoted_literals() {
        let format = NumberFormat::parse_pattern("0' #'").unwrap();
        assert_eq!(format.format(5.0), "5 #");
    }

    #[test]
    fn test_custom_symbols() {
        let format = NumberFormat::parse_pattern("#,##0.00").unwrap().with_symbols(NumberSymbols {
            decimal_separator: ',',
            grouping_separator: '.',
            minus_sign: '-',
        });
        assert_eq!(format.format(1_234_567.891), "1.234.567,89");
        assert!((format.parse("1.234.567,89").unwrap() - 1_234_567.89).abs() < 1e-6);
    }

    #[test]
    fn test_parse_round_trip() {
        let format = unit_decorated_decimal_format("#,##0.##", Some(" Pa")).unwrap();
        assert_eq!(format.parse("101,325 Pa").unwrap(), 101_325.0);
        assert_eq!(format.parse("-1.5 Pa").unwrap(), -1.5);
        assert_eq!(uniquefier_number_format().parse("_007").unwrap(), 7.0);
        assert!(format.parse("101325 kPa").is_err());
        assert!(format.parse("abc Pa").is_err());
    }

    #[test]
    fn test_malformed_patterns() {
        for pattern in ["abc", "0#", "#,##0,", "0.#0", "'0", "0;-0", "0.0 m.s"] {
            let err = NumberFormat::parse_pattern(pattern).unwrap_err();
            assert!(
                matches!(err, ToolkitError::InvalidArgument(_)),
                "pattern {pattern} should be rejected"
            );
        }
    }
}

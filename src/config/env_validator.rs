//! Environment variable validation with helpful warnings
//!
//! An invalid override is reported (with a typo suggestion when one is close
//! enough) and then ignored, so the next source in the precedence chain wins.

use std::io::Write;
use std::str::FromStr;

use tracing::warn;

use crate::domain::value_objects::ValidationMode;

/// Name of the validation mode override
pub const VALIDATION_MODE_VAR: &str = "FPSYNC_VALIDATION_MODE";

/// Validator for one environment variable's value
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Validator for `FPSYNC_VALIDATION_MODE`
    pub fn validation_mode() -> EnvVarValidator<'static> {
        EnvVarValidator::new(VALIDATION_MODE_VAR, &ValidationMode::NAMES)
    }

    /// Parse `value`, warning on stderr and returning `None` if it is invalid
    pub fn parse<T: FromStr>(&self, value: &str) -> Option<T> {
        self.parse_with_writer(value, &mut std::io::stderr())
    }

    /// Parse with a custom writer (for testing)
    pub fn parse_with_writer<T: FromStr, W: Write>(&self, value: &str, writer: &mut W) -> Option<T> {
        match value.trim().parse::<T>() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                let suggestion = self.suggest(value);
                warn!(var = self.var_name, value, "ignoring invalid environment override");
                let _ = writeln!(
                    writer,
                    "Warning: Invalid {} value '{}'{}",
                    self.var_name, value, suggestion
                );
                let _ = writeln!(writer, "Valid values: {}", self.valid_values.join(", "));
                None
            }
        }
    }

    /// Suggest a valid value within two edits
    fn suggest(&self, value: &str) -> String {
        let input = value.trim().to_lowercase();
        let best = self
            .valid_values
            .iter()
            .map(|&valid| (valid, levenshtein(&input, valid)))
            .min_by_key(|&(_, dist)| dist);

        match best {
            Some((suggested, dist)) if dist <= 2 && dist > 0 => {
                format!(". Did you mean '{}'?", suggested)
            }
            _ => String::new(),
        }
    }
}

/// Levenshtein distance over bytes, for typo detection
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    if a_bytes.is_empty() {
        return b_bytes.len();
    }
    if b_bytes.is_empty() {
        return a_bytes.len();
    }

    let mut prev_row: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr_row: Vec<usize> = vec![0; b_bytes.len() + 1];

    for (i, a_char) in a_bytes.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, b_char) in b_bytes.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_bytes.len()]
}

//! Provides the line item data structures stored in shopping lists along with
//! the numeric coercion used when totaling amounts

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt::Display;

/// The literal quantity applied when none is provided at creation
pub const DEFAULT_QUANTITY: u64 = 1;

/// The literal amount applied when none is provided at creation
pub const DEFAULT_AMOUNT: u64 = 0;

const INFINITY: &str = "Infinity";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
/// A quantity or amount exactly as it was entered
///
/// Values typed by a user are kept as text so they display the way they were
/// entered, while defaults and values loaded from numeric JSON stay numbers.
pub enum FieldValue {
    /// A JSON number
    Number(Number),
    /// Free-form text such as "Derica", "2kg" or "500"
    Text(String),
}

impl FieldValue {
    /// Returns the default quantity value
    pub fn default_quantity() -> Self {
        Self::Number(DEFAULT_QUANTITY.into())
    }

    /// Returns the default amount value
    pub fn default_amount() -> Self {
        Self::Number(DEFAULT_AMOUNT.into())
    }

    /// Returns true if this value is text containing only whitespace
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Number(_) => false,
            Self::Text(t) => t.trim().is_empty(),
        }
    }

    /// Returns the numeric value used for aggregation. See [`coerce_amount`]
    pub fn as_amount(&self) -> f64 {
        match self {
            Self::Number(n) => n.as_f64().unwrap_or(0.0),
            Self::Text(t) => coerce_amount(t),
        }
    }
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(t) => write!(f, "{t}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Number(i64::from(value).into())
    }
}

/// Coerces free-form amount text into a number for totaling
///
/// Mirrors the lenient parsing shoppers expect from a web form: leading
/// whitespace is skipped and the longest leading decimal number is used, so
/// `"12abc"` becomes `12.0`. Text with no leading number (including the empty
/// string) falls back to `0.0`, as does anything that would evaluate to NaN.
/// The stored text is never modified by this conversion.
///
/// # Examples
///
/// ```
/// # use r_cartlib::item::coerce_amount;
/// assert_eq!(coerce_amount("500"), 500.0);
/// assert_eq!(coerce_amount(" 12.5 naira"), 12.5);
/// assert_eq!(coerce_amount("-3"), -3.0);
/// assert_eq!(coerce_amount("free"), 0.0);
/// assert_eq!(coerce_amount(""), 0.0);
/// ```
pub fn coerce_amount(text: &str) -> f64 {
    numeric_prefix(text.trim_start())
        .parse::<f64>()
        .ok()
        .filter(|v| !v.is_nan())
        .unwrap_or(0.0)
}

fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with(INFINITY) {
        return &s[..end + INFINITY.len()];
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return "";
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    &s[..end]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A single row in a shopping list
pub struct LineItem {
    /// The length of the list at the time this item was appended. Purely
    /// informational, the position in the list is the only ordering signal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sn: Option<usize>,
    /// The item label i.e. "Rice", "Milk"
    pub name: String,
    /// Quantity label with no enforced unit i.e. "Derica", "2", 1
    #[serde(default = "FieldValue::default_quantity")]
    pub quantity: FieldValue,
    /// Price of the item, possibly entered as text
    #[serde(default = "FieldValue::default_amount")]
    pub amount: FieldValue,
    /// Any additional fields found in persisted data, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LineItem {
    /// Returns a new line item applying default quantity and amount for any
    /// value that is absent or blank
    pub fn new(
        sn: usize,
        name: impl Into<String>,
        quantity: Option<FieldValue>,
        amount: Option<FieldValue>,
    ) -> Self {
        Self {
            sn: Some(sn),
            name: name.into(),
            quantity: quantity
                .filter(|q| !q.is_blank())
                .unwrap_or_else(FieldValue::default_quantity),
            amount: amount
                .filter(|a| !a.is_blank())
                .unwrap_or_else(FieldValue::default_amount),
            extra: Map::new(),
        }
    }

    /// Returns the amount coerced for aggregation
    pub fn amount_value(&self) -> f64 {
        self.amount.as_amount()
    }
}

/// Sums the coerced amounts of all provided items
pub fn total_amount(items: &[LineItem]) -> f64 {
    items
        .iter()
        .map(LineItem::amount_value)
        .fold(0.0, |total, amount| total + amount)
}

#[cfg(test)]
#[path = "./item_tests.rs"]
mod tests;

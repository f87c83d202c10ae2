//! Common serde helpers for tolerant request payloads
//!
//! 数值字段同时支持两种格式的反序列化：
//! - JSON 数字 (`10`, `2.5`)
//! - 数字字符串 (`"10"`, `"2.50"`, 来自 HTML 表单)
//!
//! Coercion to the target type happens explicitly in validation, never in
//! serde: a non-numeric string must surface as a validation failure, not a
//! silent `NaN` or zero.

use serde::{Deserialize, Deserializer};

use super::{StoreError, StoreResult};

/// A request field that is either a JSON number or a numeric string.
#[derive(Debug, Clone)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for NumericInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};
        use std::fmt;

        struct NumericVisitor;

        impl<'de> Visitor<'de> for NumericVisitor {
            type Value = NumericInput;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a number or a numeric string")
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(NumericInput::Number(value as f64))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(NumericInput::Number(value as f64))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(NumericInput::Number(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(NumericInput::Text(value.to_owned()))
            }
        }

        deserializer.deserialize_any(NumericVisitor)
    }
}

impl NumericInput {
    /// Coerce to `f64`. Non-numeric text and non-finite values (a string
    /// body can smuggle in `"NaN"` / `"Infinity"`) are validation failures.
    pub fn to_f64(&self, field: &str) -> StoreResult<f64> {
        let value = match self {
            NumericInput::Number(n) => *n,
            NumericInput::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| StoreError::Validation(format!("{field} must be a number")))?,
        };
        if !value.is_finite() {
            return Err(StoreError::Validation(format!(
                "{field} must be a finite number"
            )));
        }
        Ok(value)
    }

    /// Coerce to `i64`, truncating any fractional part toward zero.
    pub fn to_i64(&self, field: &str) -> StoreResult<i64> {
        Ok(self.to_f64(field)?.trunc() as i64)
    }
}

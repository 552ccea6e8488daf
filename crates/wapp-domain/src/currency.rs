//! Currency metadata attached to a wallet.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Unit-of-account metadata for a wallet. The exchange rate is carried
/// through serialization but never applied to balance arithmetic.
pub struct Currency {
    pub name: String,
    pub sign: String,
    #[serde(rename = "exchangeRate")]
    pub exchange_rate: f64,
}

impl Currency {
    pub fn new(
        name: impl Into<String>,
        sign: impl Into<String>,
        exchange_rate: f64,
    ) -> Result<Self, CurrencyError> {
        let name = name.into();
        let sign = sign.into();
        if name.trim().is_empty() {
            return Err(CurrencyError::EmptyName);
        }
        if sign.trim().is_empty() {
            return Err(CurrencyError::EmptySign);
        }
        if !exchange_rate.is_finite() || exchange_rate <= 0.0 {
            return Err(CurrencyError::InvalidRate(exchange_rate));
        }
        Ok(Self {
            name,
            sign,
            exchange_rate,
        })
    }

    /// Derives an acronym from the first letter of each word in the name.
    ///
    /// "United States Dollar" yields "USD"; an empty name yields "".
    pub fn short_name(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(|c| c.to_uppercase())
            .collect()
    }

    /// United States Dollar preset.
    pub fn usd() -> Self {
        Self {
            name: "United States Dollar".into(),
            sign: "$".into(),
            exchange_rate: 1.0,
        }
    }

    /// Iraqi Dinar preset.
    pub fn iqd() -> Self {
        Self {
            name: "Iraqi Dinars".into(),
            sign: "IQD".into(),
            exchange_rate: 1200.0,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.sign)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Errors that can occur when constructing [`Currency`] values.
pub enum CurrencyError {
    EmptyName,
    EmptySign,
    InvalidRate(f64),
}

impl fmt::Display for CurrencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyError::EmptyName => f.write_str("currency name must not be empty"),
            CurrencyError::EmptySign => f.write_str("currency sign must not be empty"),
            CurrencyError::InvalidRate(rate) => {
                write!(f, "exchange rate must be a positive number, got {rate}")
            }
        }
    }
}

impl std::error::Error for CurrencyError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_name_takes_word_initials() {
        assert_eq!(Currency::usd().short_name(), "USD");
        assert_eq!(Currency::iqd().short_name(), "ID");
    }

    #[test]
    fn short_name_of_empty_name_is_empty() {
        let currency = Currency {
            name: String::new(),
            sign: "$".into(),
            exchange_rate: 1.0,
        };
        assert_eq!(currency.short_name(), "");
    }

    #[test]
    fn new_rejects_blank_fields() {
        assert_eq!(Currency::new("", "$", 1.0), Err(CurrencyError::EmptyName));
        assert_eq!(
            Currency::new("Euro", "  ", 1.0),
            Err(CurrencyError::EmptySign)
        );
        assert_eq!(
            Currency::new("Euro", "€", 0.0),
            Err(CurrencyError::InvalidRate(0.0))
        );
    }

    #[test]
    fn serde_round_trip_preserves_all_fields() {
        let currency = Currency::iqd();
        let json = serde_json::to_string(&currency).unwrap();
        assert!(json.contains("\"exchangeRate\":1200.0"));
        let back: Currency = serde_json::from_str(&json).unwrap();
        assert_eq!(back, currency);
    }
}

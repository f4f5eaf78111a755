//! Currency selection offered to the user

use serde::{Deserialize, Serialize};

use crate::TripPlannerError;

/// Currencies the fare and hotel estimates can be requested in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "INR")]
    Inr,
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "JPY")]
    Jpy,
}

impl Currency {
    /// ISO 4217 code, the form advisory operations receive
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Inr => "INR",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Jpy => "JPY",
        }
    }

    /// Display symbol for presentation
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Inr => "₹",
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Jpy => "¥",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = TripPlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INR" => Ok(Currency::Inr),
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "JPY" => Ok(Currency::Jpy),
            other => Err(TripPlannerError::validation(format!(
                "Unsupported currency: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Currency::Inr, "INR", "₹")]
    #[case(Currency::Usd, "USD", "$")]
    #[case(Currency::Eur, "EUR", "€")]
    #[case(Currency::Jpy, "JPY", "¥")]
    fn test_codes_and_symbols(
        #[case] currency: Currency,
        #[case] code: &str,
        #[case] symbol: &str,
    ) {
        assert_eq!(currency.code(), code);
        assert_eq!(currency.symbol(), symbol);
        assert_eq!(code.parse::<Currency>().unwrap(), currency);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!(" jpy ".parse::<Currency>().unwrap(), Currency::Jpy);
    }

    #[test]
    fn test_parse_rejects_unknown_code() {
        assert!("GBP".parse::<Currency>().is_err());
    }

    #[test]
    fn test_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Currency::Eur).unwrap(), "\"EUR\"");
    }
}

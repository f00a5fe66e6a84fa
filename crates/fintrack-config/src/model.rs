use serde::{Deserialize, Serialize};

/// Stores user-configurable display and diagnostics preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "Config::default_locale")]
    pub locale: String,
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    #[serde(default = "Config::default_decimal_places")]
    pub decimal_places: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Extra `tracing` directive appended to the default filter, e.g. `fintrack_core=debug`.
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Self::default_locale(),
            currency: Self::default_currency(),
            decimal_places: Self::default_decimal_places(),
            log_filter: None,
        }
    }
}

impl Config {
    pub fn default_locale() -> String {
        "en-US".into()
    }

    pub fn default_currency() -> String {
        "USD".into()
    }

    pub fn default_decimal_places() -> u32 {
        2
    }

    /// Display symbol for the configured currency code.
    pub fn currency_symbol(&self) -> String {
        match self.currency.trim().to_ascii_uppercase().as_str() {
            "USD" | "CAD" | "AUD" => "$".into(),
            "EUR" => "€".into(),
            "GBP" => "£".into(),
            "JPY" => "¥".into(),
            other => format!("{other} "),
        }
    }
}

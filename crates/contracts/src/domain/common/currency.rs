use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "HTG")]
    Htg,
    #[serde(rename = "USD")]
    Usd,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Htg => "HTG",
            Currency::Usd => "USD",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Currency::Htg => "HTG - Haitian Gourde",
            Currency::Usd => "USD - US Dollar",
        }
    }

    pub fn all() -> [Currency; 2] {
        [Currency::Htg, Currency::Usd]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "HTG" => Some(Currency::Htg),
            "USD" => Some(Currency::Usd),
            _ => None,
        }
    }
}

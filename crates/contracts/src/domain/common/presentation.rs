use serde::{Deserialize, Serialize};

/// Visual priority of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    Positive,
    Neutral,
    Negative,
    Outline,
}

/// Display label and emphasis for one enum value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub label: &'static str,
    pub emphasis: Emphasis,
}

impl Presentation {
    pub const fn new(label: &'static str, emphasis: Emphasis) -> Self {
        Self { label, emphasis }
    }
}

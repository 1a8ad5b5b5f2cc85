use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// KPI cards
// ---------------------------------------------------------------------------

/// Change relative to a previous period, shown next to a KPI value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub percent: f64,
    pub is_positive: bool,
}

impl Trend {
    pub fn up(percent: f64) -> Self {
        Self { percent, is_positive: true }
    }

    pub fn down(percent: f64) -> Self {
        Self { percent, is_positive: false }
    }
}

/// A single aggregate scalar rendered as a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    pub title: String,
    /// Pre-formatted value.
    pub value: String,
    /// Icon name understood by the frontend icon helper.
    pub icon: String,
    pub subtitle: Option<String>,
    pub trend: Option<Trend>,
}

impl Kpi {
    pub fn new(title: &str, value: impl Into<String>, icon: &str) -> Self {
        Self {
            title: title.to_string(),
            value: value.into(),
            icon: icon.to_string(),
            subtitle: None,
            trend: None,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_trend(mut self, trend: Trend) -> Self {
        self.trend = Some(trend);
        self
    }

    /// Stable identifier derived from the title: "Occupancy Rate" -> "occupancy-rate".
    pub fn slug(&self) -> String {
        self.title
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_from_title() {
        let kpi = Kpi::new("Check-ins  Today", "7", "users");
        assert_eq!(kpi.slug(), "check-ins-today");
    }

    #[test]
    fn test_builder() {
        let kpi = Kpi::new("Occupancy Rate", "88%", "calendar")
            .with_trend(Trend::up(12.0))
            .with_subtitle("vs last month");
        assert_eq!(kpi.subtitle.as_deref(), Some("vs last month"));
        assert_eq!(kpi.trend, Some(Trend { percent: 12.0, is_positive: true }));
    }
}

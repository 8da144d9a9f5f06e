//! Dashboard time ranges and the selectable presets offered by the range picker.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeRangeKind {
    SelectableDuration,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    #[serde(rename = "type")]
    pub kind: TimeRangeKind,
    pub lower: String,
    pub upper: Option<String>,
    pub seconds: Option<u64>,
    pub label: String,
    pub duration: Option<String>,
}

impl TimeRange {
    /// A fixed window between two absolute timestamps.
    pub fn custom(lower: impl Into<String>, upper: impl Into<String>) -> Self {
        let lower = lower.into();
        let upper = upper.into();
        Self {
            kind: TimeRangeKind::Custom,
            label: format!("{lower} - {upper}"),
            lower,
            upper: Some(upper),
            seconds: None,
            duration: None,
        }
    }

    fn selectable(duration: &str, seconds: u64, label: &str) -> Self {
        Self {
            kind: TimeRangeKind::SelectableDuration,
            lower: format!("now() - {duration}"),
            upper: None,
            seconds: Some(seconds),
            label: label.to_string(),
            duration: Some(duration.to_string()),
        }
    }
}

pub fn past_fifteen_minutes() -> TimeRange {
    TimeRange::selectable("15m", 900, "Past 15m")
}

pub fn past_hour() -> TimeRange {
    TimeRange::selectable("1h", 3600, "Past 1h")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn past_fifteen_minutes_is_a_relative_selectable_range() {
        let range = past_fifteen_minutes();

        assert_eq!(range.kind, TimeRangeKind::SelectableDuration);
        assert_eq!(range.lower, "now() - 15m");
        assert_eq!(range.upper, None);
        assert_eq!(range.seconds, Some(900));
        assert_eq!(range.label, "Past 15m");
    }

    #[test]
    fn time_range_kind_uses_kebab_case_tag() {
        let json = serde_json::to_value(past_hour()).expect("serialize range");

        assert_eq!(json["type"], "selectable-duration");
        assert_eq!(json["duration"], "1h");
    }

    #[test]
    fn custom_range_labels_both_bounds() {
        let range = TimeRange::custom("2026-01-01T00:00:00Z", "2026-01-02T00:00:00Z");

        assert_eq!(range.upper.as_deref(), Some("2026-01-02T00:00:00Z"));
        assert_eq!(range.label, "2026-01-01T00:00:00Z - 2026-01-02T00:00:00Z");
    }
}

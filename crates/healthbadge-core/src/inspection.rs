//! Restaurant identity and health-inspection record types shared by the
//! API client and the overlay renderer.

use chrono::{NaiveDate, NaiveDateTime};

use crate::score::{classify, BadgeColor, OperatingCondition};

/// Restaurant identity extracted from a delivery-site page.
///
/// `address` is best-effort: some sites never expose it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantIdentity {
    pub name: String,
    pub address: Option<String>,
}

impl RestaurantIdentity {
    #[must_use]
    pub fn new(name: impl Into<String>, address: Option<String>) -> Self {
        Self {
            name: name.into(),
            address,
        }
    }
}

/// Risk category attached to an individual violation line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskCategory {
    Low,
    Moderate,
    High,
}

impl RiskCategory {
    /// Parses the dataset's label (`"Low Risk"`, `"Moderate Risk"`, `"High Risk"`).
    ///
    /// Returns `None` for any other value.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Low Risk" => Some(Self::Low),
            "Moderate Risk" => Some(Self::Moderate),
            "High Risk" => Some(Self::High),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Moderate => "Moderate Risk",
            Self::High => "High Risk",
        }
    }

    #[must_use]
    pub fn color(self) -> BadgeColor {
        match self {
            Self::Low => BadgeColor::Green,
            Self::Moderate => BadgeColor::Orange,
            Self::High => BadgeColor::Red,
        }
    }
}

/// One row of inspection history, in the order the API returned it.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectionRecord {
    pub business_name: String,
    pub business_id: String,
    pub business_address: Option<String>,
    /// Raw date as served by the dataset (`2016-09-22T00:00:00.000`).
    pub inspection_date: String,
    /// Score as served; may be fractional.
    pub inspection_score: Option<f64>,
    pub inspection_type: String,
    pub risk_category: Option<RiskCategory>,
    pub violation_description: Option<String>,
}

impl InspectionRecord {
    /// Calendar day of the inspection, if the raw date parses.
    ///
    /// Accepts floating timestamps with or without fractional seconds, and
    /// plain `YYYY-MM-DD` dates.
    #[must_use]
    pub fn inspection_day(&self) -> Option<NaiveDate> {
        let raw = self.inspection_date.trim();
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|dt| dt.date())
            .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
            .ok()
    }
}

/// What the badge shows. Derived fresh per render, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HealthBadgeState {
    Scored {
        score: f64,
        category: OperatingCondition,
        color: BadgeColor,
    },
    Unscored,
    Error,
}

impl HealthBadgeState {
    /// Builds the badge state from the first record that carries a score.
    ///
    /// Later records are ignored once a scored one is found, even if they
    /// are also scored.
    #[must_use]
    pub fn from_records(records: &[InspectionRecord]) -> Self {
        match records.iter().find_map(|r| r.inspection_score) {
            Some(score) => {
                let class = classify(score);
                Self::Scored {
                    score,
                    category: class.category,
                    color: class.color,
                }
            }
            None => Self::Unscored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, score: Option<f64>) -> InspectionRecord {
        InspectionRecord {
            business_name: "Tasty Place".to_string(),
            business_id: "1234".to_string(),
            business_address: Some("123 Main St".to_string()),
            inspection_date: date.to_string(),
            inspection_score: score,
            inspection_type: "Routine - Unscheduled".to_string(),
            risk_category: None,
            violation_description: None,
        }
    }

    #[test]
    fn first_scored_record_wins() {
        let records = vec![
            record("2017-03-01T00:00:00.000", None),
            record("2016-09-22T00:00:00.000", Some(92.0)),
            record("2016-01-04T00:00:00.000", Some(64.0)),
        ];
        assert_eq!(
            HealthBadgeState::from_records(&records),
            HealthBadgeState::Scored {
                score: 92.0,
                category: OperatingCondition::Good,
                color: BadgeColor::Green,
            }
        );
    }

    #[test]
    fn no_scored_records_is_unscored() {
        let records = vec![record("2017-03-01T00:00:00.000", None)];
        assert_eq!(
            HealthBadgeState::from_records(&records),
            HealthBadgeState::Unscored
        );
        assert_eq!(HealthBadgeState::from_records(&[]), HealthBadgeState::Unscored);
    }

    #[test]
    fn inspection_day_accepts_floating_timestamps_and_dates() {
        let expected = NaiveDate::from_ymd_opt(2016, 9, 22);
        assert_eq!(record("2016-09-22T00:00:00.000", None).inspection_day(), expected);
        assert_eq!(record("2016-09-22T00:00:00", None).inspection_day(), expected);
        assert_eq!(record("2016-09-22", None).inspection_day(), expected);
        assert_eq!(record("last tuesday", None).inspection_day(), None);
    }

    #[test]
    fn risk_category_labels_round_trip_and_color() {
        assert_eq!(RiskCategory::from_label("Low Risk"), Some(RiskCategory::Low));
        assert_eq!(RiskCategory::from_label(" High Risk "), Some(RiskCategory::High));
        assert_eq!(RiskCategory::from_label("Severe"), None);
        assert_eq!(RiskCategory::Moderate.label(), "Moderate Risk");
        assert_eq!(RiskCategory::Low.color(), BadgeColor::Green);
        assert_eq!(RiskCategory::Moderate.color(), BadgeColor::Orange);
        assert_eq!(RiskCategory::High.color(), BadgeColor::Red);
    }

    #[test]
    fn fractional_score_is_classified_unrounded() {
        let records = vec![record("2016-09-22T00:00:00.000", Some(85.6))];
        assert_eq!(
            HealthBadgeState::from_records(&records),
            HealthBadgeState::Scored {
                score: 85.6,
                category: OperatingCondition::NeedsImprovement,
                color: BadgeColor::Orange,
            }
        );
    }
}

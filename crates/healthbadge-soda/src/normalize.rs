//! Normalization of raw dataset rows into [`InspectionRecord`]s.

use healthbadge_core::{InspectionRecord, RiskCategory};

use crate::types::InspectionRow;

/// Converts API rows into domain records, preserving order.
#[must_use]
pub fn normalize_rows(rows: Vec<InspectionRow>) -> Vec<InspectionRecord> {
    rows.into_iter().map(normalize_row).collect()
}

fn normalize_row(row: InspectionRow) -> InspectionRecord {
    let risk_category = row.risk_category.as_deref().and_then(|label| {
        let parsed = RiskCategory::from_label(label);
        if parsed.is_none() {
            tracing::debug!(label, "unrecognized risk category; leaving blank");
        }
        parsed
    });

    InspectionRecord {
        business_name: row.business_name.unwrap_or_default(),
        business_id: row.business_id.as_ref().map(value_to_string).unwrap_or_default(),
        business_address: row.business_address,
        inspection_date: row.inspection_date.unwrap_or_default(),
        inspection_score: row.inspection_score.as_ref().and_then(parse_score),
        inspection_type: row.inspection_type.unwrap_or_default(),
        risk_category,
        violation_description: row.violation_description.filter(|d| !d.trim().is_empty()),
    }
}

/// Parses a score served either as a JSON number or a numeric string.
///
/// The value is kept as served, fractions included, so classification sees
/// the same number the dataset holds. `null`, non-numeric and non-finite
/// values yield `None`.
pub(crate) fn parse_score(value: &serde_json::Value) -> Option<f64> {
    let parsed = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|score| score.is_finite())
}

fn value_to_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn row(value: serde_json::Value) -> InspectionRow {
        serde_json::from_value(value).expect("fixture row should deserialize")
    }

    #[test]
    fn parses_string_and_number_scores() {
        assert_eq!(parse_score(&json!("92")), Some(92.0));
        assert_eq!(parse_score(&json!(" 88 ")), Some(88.0));
        assert_eq!(parse_score(&json!(71)), Some(71.0));
        assert_eq!(parse_score(&json!("96.0")), Some(96.0));
    }

    #[test]
    fn fractional_scores_are_not_rounded() {
        assert_eq!(parse_score(&json!("85.6")), Some(85.6));
        assert_eq!(parse_score(&json!(70.5)), Some(70.5));
        let class = healthbadge_core::classify(parse_score(&json!("85.6")).unwrap_or_default());
        assert_eq!(class.category, healthbadge_core::OperatingCondition::NeedsImprovement);
    }

    #[test]
    fn null_and_garbage_scores_are_absent() {
        assert_eq!(parse_score(&json!(null)), None);
        assert_eq!(parse_score(&json!("n/a")), None);
        assert_eq!(parse_score(&json!(true)), None);
        assert_eq!(parse_score(&json!("NaN")), None);
        assert_eq!(parse_score(&json!("inf")), None);
    }

    #[test]
    fn normalizes_a_full_row() {
        let records = normalize_rows(vec![row(json!({
            "business_address": "123 Main St",
            "business_id": "4794",
            "business_name": "Tasty Place",
            "inspection_date": "2016-09-22T00:00:00.000",
            "inspection_score": "92",
            "inspection_type": "Routine - Unscheduled",
            "risk_category": "Low Risk",
            "violation_description": "Inadequately cleaned or sanitized food contact surfaces"
        }))]);
        let r = &records[0];
        assert_eq!(r.business_name, "Tasty Place");
        assert_eq!(r.business_id, "4794");
        assert_eq!(r.inspection_score, Some(92.0));
        assert_eq!(r.risk_category, Some(RiskCategory::Low));
        assert_eq!(r.inspection_type, "Routine - Unscheduled");
        assert!(r.violation_description.is_some());
    }

    #[test]
    fn missing_columns_become_absent() {
        let records = normalize_rows(vec![row(json!({
            "business_id": 4794,
            "business_name": "Tasty Place",
            "inspection_date": "2016-09-22T00:00:00.000",
            "inspection_type": "Reinspection/Followup",
            "risk_category": "Unknown Risk",
            "violation_description": ""
        }))]);
        let r = &records[0];
        assert_eq!(r.business_id, "4794");
        assert_eq!(r.inspection_score, None);
        assert_eq!(r.risk_category, None);
        assert_eq!(r.violation_description, None);
        assert_eq!(r.business_address, None);
    }

    #[test]
    fn preserves_row_order() {
        let records = normalize_rows(vec![
            row(json!({"inspection_date": "2017-01-01T00:00:00.000"})),
            row(json!({"inspection_date": "2016-01-01T00:00:00.000"})),
        ]);
        assert_eq!(records[0].inspection_date, "2017-01-01T00:00:00.000");
        assert_eq!(records[1].inspection_date, "2016-01-01T00:00:00.000");
    }
}

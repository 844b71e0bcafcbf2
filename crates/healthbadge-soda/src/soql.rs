//! `SoQL` query fragments for the restaurant inspection dataset.

/// Columns requested from the dataset, in projection order.
pub const SELECT_FIELDS: [&str; 8] = [
    "business_address",
    "business_id",
    "business_name",
    "inspection_date",
    "inspection_score",
    "inspection_type",
    "risk_category",
    "violation_description",
];

/// Most recent inspection first.
pub const ORDER_BY: &str = "inspection_date DESC";

/// Escapes a value for use inside a `SoQL` string literal.
///
/// `SoQL` does not use backslash escapes: a literal apostrophe is written as
/// two apostrophes. Every occurrence is doubled.
#[must_use]
pub fn escape_soql_literal(value: &str) -> String {
    value.replace('\'', "''")
}

/// `$select` parameter value.
#[must_use]
pub fn select_clause() -> String {
    SELECT_FIELDS.join(",")
}

/// `$where` parameter value matching `business_name` exactly.
#[must_use]
pub fn business_name_filter(restaurant_name: &str) -> String {
    format!("business_name = '{}'", escape_soql_literal(restaurant_name))
}

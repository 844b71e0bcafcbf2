//! HTML fragments injected into the host page.
//!
//! The badge, the detail table, and the modal wiring share one identifier
//! convention: the detail container is `#modal-1`, the badge's toggle link
//! points at it with `data-modal-open`, and the modal widget is attached to
//! `.healthScoreModal`.

use healthbadge_core::{HealthBadgeState, InspectionRecord};
use html_escape::encode_double_quoted_attribute;

pub const DETAIL_ANCHOR_ID: &str = "modal-1";
pub const MODAL_CONTAINER_SELECTOR: &str = ".healthScoreModal";
pub const UNSCORED_MESSAGE: &str = "No health score on record.";
pub const ERROR_MESSAGE: &str = "Error loading health data.";

const TABLE_HEADER: &str = "<tr><th>Date</th><th>Inspection Type</th><th>Risk Category</th>\
                            <th>Description</th><th>Score</th></tr>";

/// Badge fragment for a given state.
#[must_use]
pub fn badge_markup(state: HealthBadgeState) -> String {
    match state {
        HealthBadgeState::Scored {
            score,
            category,
            color,
        } => format!(
            r##"<div class="healthBadge {color}"><div class="label">Health Score</div><div class="score">{score}</div><div class="score-description">{category}</div><div class="deets-button"><a href="#{DETAIL_ANCHOR_ID}" data-modal-open>View Details</a></div></div>"##
        ),
        HealthBadgeState::Unscored => format!(
            r#"<div class="healthBadge gray"><div class="label">Health Score</div>{UNSCORED_MESSAGE}</div>"#
        ),
        HealthBadgeState::Error => format!(r#"<div class="healthBadge">{ERROR_MESSAGE}</div>"#),
    }
}

/// Inspection history table, one row per record in the given order.
#[must_use]
pub fn inspection_table(records: &[InspectionRecord]) -> String {
    let mut out = String::from(r#"<table class="healthRecordsTable">"#);
    out.push_str(TABLE_HEADER);
    for record in records {
        out.push_str(&table_row(record));
    }
    out.push_str("</table>");
    out
}

fn table_row(record: &InspectionRecord) -> String {
    let risk_cell = match record.risk_category {
        Some(risk) => format!(r#"<td class="{}">{}</td>"#, risk.color(), risk.label()),
        None => "<td></td>".to_string(),
    };
    let description = record
        .violation_description
        .as_deref()
        .map(encode_text)
        .unwrap_or_default();
    let score = record
        .inspection_score
        .map(|s| s.to_string())
        .unwrap_or_default();
    format!(
        r#"<tr><td>{date}</td><td>{kind}</td>{risk_cell}<td class="hbleft">{description}</td><td>{score}</td></tr>"#,
        date = format_inspection_date(record),
        kind = encode_text(&record.inspection_type),
    )
}

/// `Sep 22 2016`; the raw value if it does not parse as a date.
#[must_use]
pub fn format_inspection_date(record: &InspectionRecord) -> String {
    record.inspection_day().map_or_else(
        || encode_text(&record.inspection_date),
        |day| day.format("%b %-d %Y").to_string(),
    )
}

/// Empty modal frame the modal widget renders into.
#[must_use]
pub fn modal_shell() -> String {
    r#"<div class="healthScoreModal"><div class="modal-inner"><div class="modal-content"></div></div></div>"#
        .to_string()
}

/// Hidden container holding the detail table, addressed by the badge link.
#[must_use]
pub fn detail_container(table_markup: &str) -> String {
    format!(r#"<div id="{DETAIL_ANCHOR_ID}" class="modal-hider">{table_markup}</div>"#)
}

/// Encodes record text so it is safe as element content or attribute value.
fn encode_text(text: &str) -> String {
    encode_double_quoted_attribute(text).into_owned()
}

use serde::{Deserialize, Serialize};

pub const VERIFICATION_TYPE_COMPANY: &str = "company";

/// Prefixes Sumsub puts in front of the company document number.
const DOCUMENT_MARKERS: [&str; 2] = ["cnpj_", "unil-"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReviewAnswer {
    Green,
    Red,
}

impl ReviewAnswer {
    /// Anything other than an exact `GREEN` collapses to `RED`.
    pub fn from_review_status(status: &str) -> Self {
        if status == "GREEN" {
            ReviewAnswer::Green
        } else {
            ReviewAnswer::Red
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPayload {
    pub country: String,
    pub phone: String,
    pub platform: String,
    pub imported_from_csv: bool,
}

/// Row of the `onboarding_notifications` table, keyed by `applicant_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub applicant_id: String,
    pub external_user_id: String,
    pub name: String,
    pub email: String,
    pub document: String,
    pub verification_type: String,
    pub review_answer: ReviewAnswer,
    pub level_name: String,
    pub created_at: Option<String>,
    pub reviewed_at: Option<String>,
    pub payload: NotificationPayload,
}

pub fn document_from_external_id(external_user_id: &str) -> String {
    DOCUMENT_MARKERS
        .iter()
        .fold(external_user_id.to_string(), |acc, marker| acc.replace(marker, ""))
}

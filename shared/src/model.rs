use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::case_store::CaseStore;
use crate::event::{CaseId, UserId};
use crate::selection::SelectionCoordinator;
use crate::AppError;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SlaStatus {
    #[serde(rename = "On Track")]
    OnTrack,
    #[serde(rename = "At Risk")]
    AtRisk,
    Breached,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ProcessingStage {
    Ingestion,
    Classification,
    Validation,
    Fulfilment,
    Processing,
    Complete,
    #[default]
    #[serde(other)]
    Unrecognized,
}

/// The fixed lifecycle, in order. Progress is measured against this list.
pub const CANONICAL_STAGES: [ProcessingStage; 6] = [
    ProcessingStage::Ingestion,
    ProcessingStage::Classification,
    ProcessingStage::Validation,
    ProcessingStage::Fulfilment,
    ProcessingStage::Processing,
    ProcessingStage::Complete,
];

impl ProcessingStage {
    #[must_use]
    pub fn position(self) -> Option<usize> {
        CANONICAL_STAGES.iter().position(|s| *s == self)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum IntegrationStatus {
    Complete,
    Partial,
    Failed,
    #[serde(rename = "Not Started")]
    NotStarted,
    Sent,
    #[default]
    #[serde(other)]
    Unknown,
}

impl IntegrationStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Complete => "Complete",
            Self::Partial => "Partial",
            Self::Failed => "Failed",
            Self::NotStarted => "Not Started",
            Self::Sent => "Sent",
            Self::Unknown => "Unknown",
        }
    }
}

/// Document pipeline state. Text outside the known set is kept verbatim so it
/// can still be shown.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum DocumentStatus {
    Processed,
    Processing,
    Uploaded,
    Failed,
    Other(String),
}

impl Default for DocumentStatus {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for DocumentStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "processed" => Self::Processed,
            "processing" => Self::Processing,
            "uploaded" => Self::Uploaded,
            "failed" => Self::Failed,
            _ => Self::Other(raw),
        }
    }
}

impl From<DocumentStatus> for String {
    fn from(status: DocumentStatus) -> Self {
        match status {
            DocumentStatus::Other(raw) => raw,
            known => known.label().to_string(),
        }
    }
}

impl DocumentStatus {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Processed => "processed",
            Self::Processing => "processing",
            Self::Uploaded => "uploaded",
            Self::Failed => "failed",
            Self::Other(raw) => raw,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct InteractionRecord {
    pub record_id: String,
    pub record_status: String,
    pub contact_id: String,
    pub stage: String,
    pub documents_ingested: bool,
    pub documents_ingested_count: u32,
    pub ingestion_status: String,
    pub short_description: Option<String>,
    pub email_body: Option<String>,
    pub work_notes: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub name: String,
    #[serde(default, rename = "type")]
    pub doc_type: Option<String>,
    #[serde(default)]
    pub status: DocumentStatus,
    #[serde(default)]
    pub is_email: bool,
    #[serde(default)]
    pub mea_doc_ref: Option<String>,
    #[serde(default)]
    pub mea_extraction_status: Option<String>,
    #[serde(default)]
    pub dms_doc_ref: Option<String>,
    #[serde(default)]
    pub dms_link: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub event_type: String,
    pub description: String,
    pub source: String,
    pub date_time: DateTime<Utc>,
    pub generated_by: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassificationDetails {
    pub status: String,
    pub transaction_type: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    pub classified_by: Option<String>,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Integrations {
    pub ao_send_status: IntegrationStatus,
    pub ao_last_attempt: Option<DateTime<Utc>>,
    pub ao_correlation_id: Option<String>,
    pub dms_send_status: IntegrationStatus,
    pub dms_last_attempt: Option<DateTime<Utc>>,
    pub last_error: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminMetadata {
    pub created_by: String,
    pub created_date: Option<DateTime<Utc>>,
    pub last_updated: Option<DateTime<Utc>>,
    pub internal_case_id: String,
    pub workflow_id: String,
    pub feature_flags: Vec<String>,
    pub environment: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct MeaClassification {
    pub document_type: Option<String>,
    /// Percent, 0-100.
    pub confidence_score: Option<u8>,
    pub attachment_count: u32,
    pub messages: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CaseNote {
    pub source: String,
    #[serde(default)]
    pub text: Option<String>,
}

/// One submission-intake case. Read-only for the whole session.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    pub id: CaseId,
    pub queue: String,
    pub broker: String,
    #[serde(default)]
    pub broker_id: String,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub transaction_type: Option<String>,
    #[serde(default)]
    pub sla_status: SlaStatus,
    #[serde(default)]
    pub sla_remaining: String,
    pub received_date: DateTime<Utc>,
    #[serde(default)]
    pub channel: String,
    #[serde(default)]
    pub classification_status: String,
    #[serde(default)]
    pub processing_stage: ProcessingStage,
    #[serde(default)]
    pub interaction: InteractionRecord,
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub dms_library_address: Option<String>,
    #[serde(default)]
    pub timeline: Vec<TimelineEvent>,
    #[serde(default)]
    pub classification: ClassificationDetails,
    #[serde(default)]
    pub integrations: Integrations,
    #[serde(default)]
    pub admin: AdminMetadata,
    #[serde(default)]
    pub mea_classification: MeaClassification,
    #[serde(default)]
    pub notes: Vec<CaseNote>,
}

/// Identity handed over by the login stub.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub domain: String,
    pub role: String,
}

impl User {
    /// The login stub: any non-blank credentials resolve to the same identity.
    #[must_use]
    pub fn stub(user_id: &str) -> Self {
        Self {
            user_id: UserId::new(user_id),
            name: crate::STUB_USER_NAME.into(),
            email: crate::STUB_USER_EMAIL.into(),
            domain: crate::STUB_USER_DOMAIN.into(),
            role: crate::STUB_USER_ROLE.into(),
        }
    }

    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub user_id: String,
    pub password: String,
    pub remember_me: bool,
}

impl LoginForm {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.user_id.trim().is_empty() && !self.password.is_empty()
    }
}

// Keep the password out of logs.
impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("user_id", &self.user_id)
            .field("password_present", &!self.password.is_empty())
            .field("remember_me", &self.remember_me)
            .finish()
    }
}

#[derive(Debug, Default)]
pub struct Model {
    pub store: CaseStore,
    pub login: LoginForm,
    pub coordinator: SelectionCoordinator,
    pub active_error: Option<AppError>,
}

impl Model {
    #[must_use]
    pub fn with_store(store: CaseStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }

    pub fn set_error(&mut self, error: AppError) {
        self.active_error = Some(error);
    }

    pub fn clear_error(&mut self) {
        self.active_error = None;
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.coordinator.user().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sla_status_wire_values() {
        let parsed: Vec<SlaStatus> =
            serde_json::from_str(r#"["On Track", "At Risk", "Breached", "Paused"]"#).unwrap();
        assert_eq!(
            parsed,
            vec![
                SlaStatus::OnTrack,
                SlaStatus::AtRisk,
                SlaStatus::Breached,
                SlaStatus::Unknown
            ]
        );
    }

    #[test]
    fn test_stage_positions() {
        assert_eq!(ProcessingStage::Ingestion.position(), Some(0));
        assert_eq!(ProcessingStage::Validation.position(), Some(2));
        assert_eq!(ProcessingStage::Complete.position(), Some(5));
        assert_eq!(ProcessingStage::Unrecognized.position(), None);

        let stage: ProcessingStage = serde_json::from_str(r#""Archived""#).unwrap();
        assert_eq!(stage, ProcessingStage::Unrecognized);
    }

    #[test]
    fn test_integration_status_wire_values() {
        let parsed: IntegrationStatus = serde_json::from_str(r#""Not Started""#).unwrap();
        assert_eq!(parsed, IntegrationStatus::NotStarted);
        assert_eq!(parsed.label(), "Not Started");
    }

    #[test]
    fn test_document_status_keeps_unknown_text() {
        let parsed: Vec<DocumentStatus> =
            serde_json::from_str(r#"["uploaded", "quarantined"]"#).unwrap();
        assert_eq!(parsed[0], DocumentStatus::Uploaded);
        assert_eq!(parsed[1], DocumentStatus::Other("quarantined".into()));
        assert_eq!(parsed[1].label(), "quarantined");
        assert_eq!(
            serde_json::to_string(&parsed).unwrap(),
            r#"["uploaded","quarantined"]"#
        );
    }

    #[test]
    fn test_user_initials() {
        let user = User::stub("jsmith");
        assert_eq!(user.initials(), "JS");
        assert_eq!(user.name, crate::STUB_USER_NAME);
    }

    #[test]
    fn test_login_form_requires_both_fields() {
        let mut form = LoginForm::default();
        assert!(!form.is_complete());
        form.user_id = "jsmith".into();
        assert!(!form.is_complete());
        form.password = "secret".into();
        assert!(form.is_complete());
        assert!(!format!("{form:?}").contains("secret"));
    }
}

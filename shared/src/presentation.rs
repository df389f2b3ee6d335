//! Case → detail view.
//!
//! [`present`] is pure: it reads a [`Case`] and returns display-ready groups
//! for the header, the progress strip and each of the six tabs. Nothing here
//! writes back to the case.

use serde::Serialize;

use crate::model::{Case, CANONICAL_STAGES};
use crate::sla::{document_status_color, integration_status_color, Color, SlaBadge};
use crate::{
    format_date_time, format_optional_date_time, or_placeholder, truncate_label,
    DOCUMENT_LABEL_MAX_CHARS, FALLBACK_PROGRESS, PLACEHOLDER, UNASSIGNED_LABEL,
};

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DetailView {
    pub header: HeaderView,
    pub progress: ProgressView,
    pub overview: OverviewTab,
    pub documents: DocumentsTab,
    pub timeline: Vec<TimelineRow>,
    pub classification: ClassificationTab,
    pub integrations: IntegrationsTab,
    pub admin: AdminTab,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct HeaderView {
    pub case_id: String,
    pub sla: SlaBadge,
    pub summary: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ProgressView {
    /// In (0, 1].
    pub fraction: f64,
    pub percent: u8,
    pub classification_status: String,
    pub transaction_type: String,
    pub sla_remaining: String,
    pub received: String,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct LabeledValue {
    pub label: String,
    pub value: String,
}

fn field(label: &str, value: impl Into<String>) -> LabeledValue {
    LabeledValue {
        label: label.to_string(),
        value: value.into(),
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DocumentChip {
    pub label: String,
    pub full_name: String,
    pub is_email: bool,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct MeaPanel {
    pub document_type: String,
    pub confidence: String,
    pub attachment_count: u32,
    pub messages: Vec<String>,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct OverviewTab {
    pub ingestion_complete: bool,
    pub banner: String,
    pub record_fields: Vec<LabeledValue>,
    pub short_description: String,
    pub email_body: String,
    pub document_chips: Vec<DocumentChip>,
    /// "SOURCE WROTE:" lines for the notes already on record.
    pub notes: Vec<String>,
    pub mea: MeaPanel,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DocumentRow {
    pub name: String,
    pub is_email: bool,
    pub doc_type: String,
    pub status: String,
    pub status_color: Color,
    pub mea_doc_ref: String,
    pub mea_extraction_status: String,
    pub dms_doc_ref: String,
    /// Link text; the placeholder when no link is on record.
    pub dms_link_label: String,
    /// Target for the link, only when one exists.
    pub dms_link: Option<String>,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DocumentsTab {
    pub dms_library_address: String,
    pub rows: Vec<DocumentRow>,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TimelineRow {
    pub icon: &'static str,
    pub event_type: String,
    pub description: String,
    pub source: String,
    pub date_time: String,
    pub generated_by: String,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ClassificationTab {
    pub fields: Vec<LabeledValue>,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct IntegrationPanel {
    pub status: String,
    pub status_color: Color,
    pub last_attempt: String,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct IntegrationsTab {
    pub ao: IntegrationPanel,
    pub ao_correlation_id: String,
    pub dms: IntegrationPanel,
    pub last_error: Option<String>,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct AdminTab {
    pub fields: Vec<LabeledValue>,
    pub environment: String,
}

/// `(position + 1) / 6`, or [`FALLBACK_PROGRESS`] off the canonical list.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn progress_fraction(case: &Case) -> f64 {
    case.processing_stage.position().map_or(FALLBACK_PROGRESS, |idx| {
        (idx + 1) as f64 / CANONICAL_STAGES.len() as f64
    })
}

const TIMELINE_ICONS: [(&str, &str); 8] = [
    ("Created", "add_circle"),
    ("Assigned", "person"),
    ("Classification", "label"),
    ("Queue", "swap_horiz"),
    ("DMS", "cloud_upload"),
    ("SLA", "timer"),
    ("Document", "attach_file"),
    ("AO", "send"),
];

fn timeline_icon(event_type: &str) -> &'static str {
    TIMELINE_ICONS
        .iter()
        .find(|(needle, _)| event_type.contains(needle))
        .map_or("event", |(_, icon)| *icon)
}

#[must_use]
pub fn present(case: &Case) -> DetailView {
    DetailView {
        header: header(case),
        progress: progress(case),
        overview: overview(case),
        documents: documents(case),
        timeline: timeline(case),
        classification: classification(case),
        integrations: integrations(case),
        admin: admin(case),
    }
}

fn assignee_label(case: &Case) -> &str {
    case.assignee.as_deref().unwrap_or(UNASSIGNED_LABEL)
}

fn header(case: &Case) -> HeaderView {
    HeaderView {
        case_id: case.id.to_string(),
        sla: SlaBadge::from(case.sla_status),
        summary: format!(
            "Broker: {} \u{b7} Queue: {} \u{b7} Assignee: {}",
            case.broker,
            case.queue,
            assignee_label(case)
        ),
    }
}

fn progress(case: &Case) -> ProgressView {
    let fraction = progress_fraction(case);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let percent = (fraction * 100.0).round().clamp(0.0, 100.0) as u8;
    ProgressView {
        fraction,
        percent,
        classification_status: or_placeholder(Some(&case.classification_status)),
        transaction_type: or_placeholder(case.transaction_type.as_deref()),
        sla_remaining: or_placeholder(Some(&case.sla_remaining)),
        received: format_date_time(&case.received_date),
    }
}

fn overview(case: &Case) -> OverviewTab {
    let record = &case.interaction;
    let ingestion_complete = record.ingestion_status == "Completed";
    let banner = if ingestion_complete {
        "SUBMISSION INTAKE \u{2013} SUCCESSFULLY INGESTED"
    } else {
        "SUBMISSION INTAKE \u{2013} INGESTION IN PROGRESS"
    };

    let record_fields = vec![
        field("Interaction Record ID", or_placeholder(Some(&record.record_id))),
        field("Record Status", or_placeholder(Some(&record.record_status))),
        field("Contact ID", or_placeholder(Some(&record.contact_id))),
        field("Broker", or_placeholder(Some(&case.broker))),
        field("Stage", or_placeholder(Some(&record.stage))),
        field(
            "Documents Ingested",
            format!(
                "{} {}",
                if record.documents_ingested { "Yes" } else { "No" },
                record.documents_ingested_count
            ),
        ),
        field("Status", or_placeholder(Some(&record.ingestion_status))),
        field("Channel", or_placeholder(Some(&case.channel))),
    ];

    let document_chips = case
        .documents
        .iter()
        .map(|doc| DocumentChip {
            label: truncate_label(&doc.name, DOCUMENT_LABEL_MAX_CHARS),
            full_name: doc.name.clone(),
            is_email: doc.is_email,
        })
        .collect();

    let notes = case
        .notes
        .iter()
        .map(|note| format!("{} WROTE: {}", note.source, note.text.as_deref().unwrap_or_default()))
        .collect();

    let mea = &case.mea_classification;
    OverviewTab {
        ingestion_complete,
        banner: banner.to_string(),
        record_fields,
        short_description: or_placeholder(record.short_description.as_deref()),
        email_body: or_placeholder(record.email_body.as_deref()),
        document_chips,
        notes,
        mea: MeaPanel {
            document_type: or_placeholder(mea.document_type.as_deref()),
            confidence: mea
                .confidence_score
                .filter(|score| *score > 0)
                .map_or_else(|| PLACEHOLDER.to_string(), |score| format!("{score}%")),
            attachment_count: mea.attachment_count,
            messages: mea.messages.clone(),
        },
    }
}

fn documents(case: &Case) -> DocumentsTab {
    let rows = case
        .documents
        .iter()
        .map(|doc| DocumentRow {
            name: doc.name.clone(),
            is_email: doc.is_email,
            doc_type: or_placeholder(doc.doc_type.as_deref()),
            status: or_placeholder(Some(doc.status.label())),
            status_color: document_status_color(&doc.status),
            mea_doc_ref: or_placeholder(doc.mea_doc_ref.as_deref()),
            mea_extraction_status: or_placeholder(doc.mea_extraction_status.as_deref()),
            dms_doc_ref: or_placeholder(doc.dms_doc_ref.as_deref()),
            dms_link_label: or_placeholder(doc.dms_link.as_deref()),
            dms_link: doc.dms_link.clone().filter(|l| !l.trim().is_empty()),
        })
        .collect();

    DocumentsTab {
        dms_library_address: or_placeholder(case.dms_library_address.as_deref()),
        rows,
    }
}

/// Most recent first, whatever order the case stores them in.
fn timeline(case: &Case) -> Vec<TimelineRow> {
    let mut events: Vec<_> = case.timeline.iter().enumerate().collect();
    // Ties keep reverse storage order, matching a plain reversal of a sorted list.
    events.sort_by(|(ia, a), (ib, b)| b.date_time.cmp(&a.date_time).then(ib.cmp(ia)));

    events
        .into_iter()
        .map(|(_, evt)| TimelineRow {
            icon: timeline_icon(&evt.event_type),
            event_type: evt.event_type.clone(),
            description: or_placeholder(Some(&evt.description)),
            source: or_placeholder(Some(&evt.source)),
            date_time: format_date_time(&evt.date_time),
            generated_by: or_placeholder(Some(&evt.generated_by)),
        })
        .collect()
}

fn classification(case: &Case) -> ClassificationTab {
    let c = &case.classification;
    ClassificationTab {
        fields: vec![
            field("Classification status", or_placeholder(Some(&c.status))),
            field(
                "Transaction type (ABE Name)",
                or_placeholder(c.transaction_type.as_deref()),
            ),
            field(
                "Classification timestamp",
                format_optional_date_time(c.timestamp.as_ref()),
            ),
            field("Classified by", or_placeholder(c.classified_by.as_deref())),
            field("Notes / rationale", or_placeholder(c.notes.as_deref())),
        ],
    }
}

fn integrations(case: &Case) -> IntegrationsTab {
    let i = &case.integrations;
    IntegrationsTab {
        ao: IntegrationPanel {
            status: i.ao_send_status.label().to_string(),
            status_color: integration_status_color(i.ao_send_status),
            last_attempt: format_optional_date_time(i.ao_last_attempt.as_ref()),
        },
        ao_correlation_id: or_placeholder(i.ao_correlation_id.as_deref()),
        dms: IntegrationPanel {
            status: i.dms_send_status.label().to_string(),
            status_color: integration_status_color(i.dms_send_status),
            last_attempt: format_optional_date_time(i.dms_last_attempt.as_ref()),
        },
        last_error: i.last_error.clone().filter(|e| !e.trim().is_empty()),
    }
}

fn admin(case: &Case) -> AdminTab {
    let a = &case.admin;
    let mut fields = vec![
        field("Created by", or_placeholder(Some(&a.created_by))),
        field(
            "Created date/time",
            format_optional_date_time(a.created_date.as_ref()),
        ),
        field(
            "Last updated date/time",
            format_optional_date_time(a.last_updated.as_ref()),
        ),
        field("Broker ID", or_placeholder(Some(&case.broker_id))),
        field("Internal Case ID", or_placeholder(Some(&a.internal_case_id))),
        field("Workflow ID", or_placeholder(Some(&a.workflow_id))),
    ];
    if !a.feature_flags.is_empty() {
        fields.push(field("Feature flags", a.feature_flags.join(", ")));
    }
    AdminTab {
        fields,
        environment: or_placeholder(Some(&a.environment)),
    }
}

//! Status → color resolution for SLA badges, document pills and integration pills.
//!
//! Every resolver is total: anything it does not recognise gets [`Color::NEUTRAL`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::{DocumentStatus, IntegrationStatus, SlaStatus};

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Color(&'static str);

impl Color {
    pub const GREEN: Self = Self("#24A148");
    pub const BLUE: Self = Self("#0095FF");
    pub const ORANGE: Self = Self("#FF6B00");
    pub const RED: Self = Self("#D0021B");
    pub const NEUTRAL: Self = Self("#999999");

    #[must_use]
    pub const fn hex(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SlaSeverity {
    Normal,
    Warning,
    Critical,
    Neutral,
}

impl SlaStatus {
    #[must_use]
    pub const fn severity(self) -> SlaSeverity {
        match self {
            Self::OnTrack => SlaSeverity::Normal,
            Self::AtRisk => SlaSeverity::Warning,
            Self::Breached => SlaSeverity::Critical,
            Self::Unknown => SlaSeverity::Neutral,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OnTrack => "On Track",
            Self::AtRisk => "At Risk",
            Self::Breached => "Breached",
            Self::Unknown => "Unknown",
        }
    }
}

#[must_use]
pub const fn resolve(status: SlaStatus) -> Color {
    match status.severity() {
        SlaSeverity::Normal => Color::GREEN,
        SlaSeverity::Warning => Color::ORANGE,
        SlaSeverity::Critical => Color::RED,
        SlaSeverity::Neutral => Color::NEUTRAL,
    }
}

#[must_use]
pub fn document_status_color(status: &DocumentStatus) -> Color {
    match status {
        DocumentStatus::Processed => Color::GREEN,
        DocumentStatus::Processing => Color::BLUE,
        DocumentStatus::Uploaded => Color::ORANGE,
        DocumentStatus::Failed => Color::RED,
        DocumentStatus::Other(_) => Color::NEUTRAL,
    }
}

#[must_use]
pub const fn integration_status_color(status: IntegrationStatus) -> Color {
    match status {
        IntegrationStatus::Complete | IntegrationStatus::Sent => Color::GREEN,
        IntegrationStatus::Partial => Color::ORANGE,
        IntegrationStatus::Failed => Color::RED,
        IntegrationStatus::NotStarted | IntegrationStatus::Unknown => Color::NEUTRAL,
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SlaBadge {
    pub label: String,
    pub severity: SlaSeverity,
    pub color: Color,
}

impl From<SlaStatus> for SlaBadge {
    fn from(status: SlaStatus) -> Self {
        Self {
            label: status.label().to_string(),
            severity: status.severity(),
            color: resolve(status),
        }
    }
}

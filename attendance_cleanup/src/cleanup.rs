use log::{error, info};
use oauth2::AccessToken;

use crate::firestore::{self, AttendanceRecord, Document};
use crate::json;
use crate::retrieve::transport::Transport;
use crate::settings::Settings;
use crate::window::TimeWindow;

#[derive(Debug, thiserror::Error)]
pub enum DeleteFailed {
    #[error("FAIL: {status} {message}")]
    Status { status: u16, message: String },
    #[error("FAIL: {0}")]
    Request(String),
}

#[derive(Debug)]
pub enum DeleteOutcome {
    Deleted,
    Failed(DeleteFailed),
}

impl DeleteOutcome {
    pub fn is_deleted(&self) -> bool {
        matches!(self, DeleteOutcome::Deleted)
    }
}

#[derive(Debug)]
pub struct CleanupReport {
    pub window: TimeWindow,
    /// Documents in the fetched page, matching or not.
    pub fetched: usize,
    /// One entry per targeted record, in fetch order.
    pub outcomes: Vec<(AttendanceRecord, DeleteOutcome)>,
}

impl CleanupReport {
    pub fn targeted(&self) -> usize {
        self.outcomes.len()
    }

    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| !outcome.is_deleted())
            .count()
    }
}

/// Records whose `checkIn` lies inside `window`, in the order given.
pub fn select_in_window(documents: &[Document], window: &TimeWindow) -> Vec<AttendanceRecord> {
    documents
        .iter()
        .filter_map(AttendanceRecord::from_document)
        .filter(|record| window.contains(&record.check_in))
        .collect()
}

/// Deletes each record in turn. A failure is logged and recorded against
/// its record; the loop always runs to the end.
pub fn delete_records<T: Transport>(
    transport: &T,
    settings: &Settings,
    access_token: &AccessToken,
    records: Vec<AttendanceRecord>,
) -> Vec<(AttendanceRecord, DeleteOutcome)> {
    records
        .into_iter()
        .map(|record| {
            info!(
                "  - {} | user: {} | checkIn: {}",
                record.id,
                record.user_id.as_deref().unwrap_or("?"),
                record.check_in_raw
            );
            let outcome = delete_record(transport, settings, access_token, &record);
            if let DeleteOutcome::Failed(e) = &outcome {
                error!("    {}", e);
            }
            (record, outcome)
        })
        .collect()
}

fn delete_record<T: Transport>(
    transport: &T,
    settings: &Settings,
    access_token: &AccessToken,
    record: &AttendanceRecord,
) -> DeleteOutcome {
    match firestore::delete_document(transport, settings, access_token, &record.id) {
        Ok(response) if response.status == 200 || response.status == 204 => DeleteOutcome::Deleted,
        Ok(response) => DeleteOutcome::Failed(DeleteFailed::Status {
            status: response.status,
            message: json::error_message(&response.body).unwrap_or_else(|| response.text()),
        }),
        Err(e) => DeleteOutcome::Failed(DeleteFailed::Request(e.to_string())),
    }
}

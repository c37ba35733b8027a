mod authentication;
mod endpoints;
pub mod json;
mod retrieve;

pub mod cleanup;
pub mod credentials;
pub mod error;
pub mod firestore;
pub mod settings;
pub mod token;
pub mod window;

pub use cleanup::{CleanupReport, DeleteFailed, DeleteOutcome};
pub use error::Error;
pub use retrieve::transport::{HttpTransport, Request, Response, Transport, TransportError};
pub use settings::Settings;
pub use window::TimeWindow;

use log::info;

/// Deletes every attendance log in the first page of the collection whose
/// `checkIn` falls inside `window`.
///
/// Setup, token and listing failures abort the run. Individual delete
/// failures do not; they are reported in the returned `CleanupReport`.
pub fn reset_today_logs<T: Transport>(
    transport: &T,
    settings: &Settings,
    window: &TimeWindow,
) -> Result<CleanupReport, Error> {
    let refresh_token = credentials::load(&settings.credentials_path)?;

    info!("Refreshing access token...");
    let access_token = token::exchange(transport, settings, &refresh_token)?;
    info!("Got access token.");

    info!("Fetching attendance_logs...");
    let documents = firestore::list_documents(transport, settings, &access_token)?;
    let fetched = documents.len();

    let records = cleanup::select_in_window(&documents, window);
    if records.is_empty() {
        info!("No logs for today. Already neutral!");
        return Ok(CleanupReport {
            window: *window,
            fetched,
            outcomes: Vec::new(),
        });
    }

    info!(
        "Found {} log(s) for today ({}). Deleting...",
        records.len(),
        window.date()
    );
    let outcomes = cleanup::delete_records(transport, settings, &access_token, records);
    info!(
        "Done! Deleted {} log(s). All employees are neutral.",
        outcomes.len()
    );

    Ok(CleanupReport {
        window: *window,
        fetched,
        outcomes,
    })
}

use chrono::{DateTime, Utc};
use log::{info, warn};
use oauth2::AccessToken;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::authentication;
use crate::endpoints::firestore;
use crate::error::Error;
use crate::json;
use crate::retrieve::fetch;
use crate::retrieve::transport::{Response, Transport};
use crate::settings::Settings;

#[derive(Clone, Debug, Deserialize)]
pub struct Document {
    /// Full resource path, `projects/<p>/databases/(default)/documents/attendance_logs/<id>`.
    pub name: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl Document {
    pub fn id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListDocumentsResponse {
    #[serde(default)]
    documents: Vec<Document>,
    next_page_token: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AttendanceRecord {
    pub id: String,
    pub user_id: Option<String>,
    pub check_in: DateTime<Utc>,
    /// `checkIn` exactly as the server sent it.
    pub check_in_raw: String,
}

impl AttendanceRecord {
    /// `None` when the document has no parseable `checkIn` timestamp.
    pub fn from_document(document: &Document) -> Option<Self> {
        let check_in = json::timestamp_from_value(&document.fields, "checkIn")?;
        let check_in_raw = json::typed_value(&document.fields, "checkIn", "timestampValue")?;
        Some(AttendanceRecord {
            id: document.id().to_string(),
            user_id: json::typed_value(&document.fields, "userId", "stringValue").map(String::from),
            check_in,
            check_in_raw: check_in_raw.to_string(),
        })
    }
}

// [Retrieval]
pub fn list_documents<T: Transport>(
    transport: &T,
    settings: &Settings,
    access_token: &AccessToken,
) -> Result<Vec<Document>, Error> {
    let endpoint = firestore::attendance_logs(&settings.firestore_base_url, &settings.project_id);
    let authentication = authentication::firestore(access_token);
    let response = fetch::get(transport, &endpoint, &authentication)?;
    if response.status != 200 {
        return Err(Error::FetchFailed {
            status: response.status,
            body: response.text(),
        });
    }

    let page: ListDocumentsResponse = serde_json::from_slice(&response.body)?;
    info!("Total docs: {}", page.documents.len());
    if page.next_page_token.is_some() {
        warn!(
            "attendance_logs holds more than {} documents; only the first page was considered",
            firestore::PAGE_SIZE
        );
    }
    Ok(page.documents)
}

// [Removal]
pub fn delete_document<T: Transport>(
    transport: &T,
    settings: &Settings,
    access_token: &AccessToken,
    id: &str,
) -> Result<Response, Error> {
    let endpoint = firestore::attendance_log(&settings.firestore_base_url, &settings.project_id, id);
    let authentication = authentication::firestore(access_token);
    fetch::delete(transport, &endpoint, &authentication)
}

pub mod firestore {
    use crate::retrieve::endpoint::{BasicEndpoint, PagedEndpoint};

    pub static BASE_URL: &str = "https://firestore.googleapis.com/v1";
    static COLLECTION: &str = "attendance_logs";

    /// Upper bound on documents returned by one list call. Nothing past the
    /// first page is ever requested.
    pub const PAGE_SIZE: u32 = 500;

    fn collection_url(base_url: &str, project_id: &str) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents/{}",
            base_url.trim_end_matches('/'),
            project_id,
            COLLECTION
        )
    }

    pub fn attendance_logs(base_url: &str, project_id: &str) -> PagedEndpoint {
        let base_url = collection_url(base_url, project_id);
        PagedEndpoint {
            base_url,
            page_size: PAGE_SIZE,
        }
    }

    pub fn attendance_log(base_url: &str, project_id: &str, id: &str) -> BasicEndpoint {
        let base_url = format!("{}/{}", collection_url(base_url, project_id), id);
        BasicEndpoint { base_url }
    }
}

pub mod google {
    pub static AUTH_URL: &str = "https://accounts.google.com/o/oauth2/auth";
    pub static TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
}

pub mod firebase_tools {
    /// Where `firebase-tools login` keeps its tokens, relative to the home directory.
    pub static CONFIG_PATH: &str = ".config/configstore/firebase-tools.json";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retrieve::endpoint::Endpoint;

    #[test]
    fn attendance_logs_url() {
        let endpoint = firestore::attendance_logs("https://firestore.googleapis.com/v1/", "demo");
        assert_eq!(
            endpoint.url().unwrap().as_str(),
            "https://firestore.googleapis.com/v1/projects/demo/databases/(default)/documents/attendance_logs?pageSize=500"
        );
    }

    #[test]
    fn attendance_log_url() {
        let endpoint = firestore::attendance_log(firestore::BASE_URL, "demo", "abc123");
        assert_eq!(
            endpoint.url().unwrap().as_str(),
            "https://firestore.googleapis.com/v1/projects/demo/databases/(default)/documents/attendance_logs/abc123"
        );
    }
}

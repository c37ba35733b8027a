use std::env;
use std::path::PathBuf;

use crate::endpoints;
use crate::error::Error;

pub struct Settings {
    pub project_id: String,
    pub client_id: String,
    pub client_secret: String,
    pub credentials_path: PathBuf,
    pub firestore_base_url: String,
    pub token_url: String,
}

impl Settings {
    /// Reads settings from the process environment. Call `dotenv` first if a
    /// `.env` file should be honoured.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<Self, Error> {
        let required = |name: &'static str| -> Result<String, Error> {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or(Error::SettingMissing(name))
        };

        let credentials_path = match lookup("FIREBASE_TOOLS_CONFIG") {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => dirs::home_dir()
                .ok_or(Error::SettingMissing("FIREBASE_TOOLS_CONFIG"))?
                .join(endpoints::firebase_tools::CONFIG_PATH),
        };

        Ok(Settings {
            project_id: required("FIRESTORE_PROJECT_ID")?,
            client_id: required("FIREBASE_CLIENT_ID")?,
            client_secret: required("FIREBASE_CLIENT_SECRET")?,
            credentials_path,
            firestore_base_url: lookup("FIRESTORE_BASE_URL")
                .unwrap_or_else(|| endpoints::firestore::BASE_URL.to_string()),
            token_url: lookup("GOOGLE_TOKEN_URL")
                .unwrap_or_else(|| endpoints::google::TOKEN_URL.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn reads_required_and_defaults() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("FIRESTORE_PROJECT_ID", "demo-project"),
            ("FIREBASE_CLIENT_ID", "client"),
            ("FIREBASE_CLIENT_SECRET", "secret"),
            ("FIREBASE_TOOLS_CONFIG", "/tmp/firebase-tools.json"),
        ]))
        .unwrap();

        assert_eq!(settings.project_id, "demo-project");
        assert_eq!(settings.client_secret, "secret");
        assert_eq!(
            settings.credentials_path,
            PathBuf::from("/tmp/firebase-tools.json")
        );
        assert_eq!(settings.firestore_base_url, endpoints::firestore::BASE_URL);
        assert_eq!(settings.token_url, endpoints::google::TOKEN_URL);
    }

    #[test]
    fn missing_secret_is_reported_by_name() {
        let result = Settings::from_lookup(lookup_from(&[
            ("FIRESTORE_PROJECT_ID", "demo-project"),
            ("FIREBASE_CLIENT_ID", "client"),
            ("FIREBASE_TOOLS_CONFIG", "/tmp/firebase-tools.json"),
        ]));
        assert!(matches!(
            result,
            Err(Error::SettingMissing("FIREBASE_CLIENT_SECRET"))
        ));
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let result = Settings::from_lookup(lookup_from(&[
            ("FIRESTORE_PROJECT_ID", ""),
            ("FIREBASE_CLIENT_ID", "client"),
            ("FIREBASE_CLIENT_SECRET", "secret"),
            ("FIREBASE_TOOLS_CONFIG", "/tmp/firebase-tools.json"),
        ]));
        assert!(matches!(
            result,
            Err(Error::SettingMissing("FIRESTORE_PROJECT_ID"))
        ));
    }
}

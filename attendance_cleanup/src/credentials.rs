use std::fs;
use std::path::Path;

use oauth2::RefreshToken;
use serde::Deserialize;

use crate::error::Error;

#[derive(Deserialize)]
struct FirebaseToolsConfig {
    tokens: Option<Tokens>,
}

#[derive(Deserialize)]
struct Tokens {
    refresh_token: Option<String>,
}

/// Reads the refresh token that `firebase-tools login` left behind.
pub fn load(path: &Path) -> Result<RefreshToken, Error> {
    if !path.exists() {
        return Err(Error::ConfigMissing {
            path: path.to_path_buf(),
        });
    }
    let contents = fs::read_to_string(path)?;
    let config: FirebaseToolsConfig = serde_json::from_str(&contents)?;
    config
        .tokens
        .and_then(|tokens| tokens.refresh_token)
        .filter(|token| !token.is_empty())
        .map(RefreshToken::new)
        .ok_or(Error::CredentialMissing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_refresh_token() {
        let file = config_file(r#"{"user": {"email": "a@b.c"}, "tokens": {"refresh_token": "1//abc", "access_token": "old"}}"#);
        let token = load(file.path()).unwrap();
        assert_eq!(token.secret(), "1//abc");
    }

    #[test]
    fn missing_file_is_config_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("firebase-tools.json");
        match load(&path) {
            Err(Error::ConfigMissing { path: reported }) => assert_eq!(reported, path),
            other => panic!("expected ConfigMissing, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn missing_tokens_is_credential_missing() {
        let file = config_file(r#"{"user": {"email": "a@b.c"}}"#);
        assert!(matches!(load(file.path()), Err(Error::CredentialMissing)));
    }

    #[test]
    fn empty_refresh_token_is_credential_missing() {
        let file = config_file(r#"{"tokens": {"refresh_token": ""}}"#);
        assert!(matches!(load(file.path()), Err(Error::CredentialMissing)));
    }

    #[test]
    fn malformed_file_is_unexpected() {
        let file = config_file("not json");
        assert!(matches!(load(file.path()), Err(Error::Unexpected(_))));
    }
}

use std::path::{Path, PathBuf};

use secrecy::SecretString;
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://api.trello.com/1";
pub const SETTINGS_FILE_NAME: &str = ".burnlogrc";

pub const ENV_API_KEY: &str = "BURNLOG_API_KEY";
pub const ENV_API_TOKEN: &str = "BURNLOG_API_TOKEN";
pub const ENV_BASE_URL: &str = "BURNLOG_BASE_URL";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("cannot read settings {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings {}: {message}", path.display())]
    Malformed { path: PathBuf, message: String },

    #[error("missing {key}: set it in {file} or via {env}")]
    Missing {
        key: &'static str,
        file: String,
        env: &'static str,
    },
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    developer_public_key: Option<String>,
    member_token: Option<String>,
    base_url: Option<String>,
}

/// Credentials and endpoint for the hosting service.
///
/// Passed explicitly into [`crate::TrelloClient::new`]; nothing reads
/// credentials from process-wide state after startup.
#[derive(Debug)]
pub struct Settings {
    pub developer_public_key: String,
    pub member_token: SecretString,
    pub base_url: String,
}

impl Settings {
    pub fn new(key: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            developer_public_key: key.into(),
            member_token: SecretString::from(token.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// `~/.burnlogrc`
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(SETTINGS_FILE_NAME))
    }

    /// Load from `path` (or the default file) and apply environment overrides.
    ///
    /// An explicit path must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let (path, required) = match path {
            Some(p) => (Some(p.to_path_buf()), true),
            None => (Self::default_path(), false),
        };
        let file = match &path {
            Some(p) if required || p.is_file() => read_settings_file(p)?,
            _ => SettingsFile::default(),
        };
        let file_label = path
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| SETTINGS_FILE_NAME.to_string());
        resolve(file, &file_label, |name| std::env::var(name).ok())
    }
}

fn read_settings_file(path: &Path) -> Result<SettingsFile, SettingsError> {
    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if content.trim().is_empty() {
        return Ok(SettingsFile::default());
    }
    serde_yaml::from_str(&content).map_err(|e| SettingsError::Malformed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn resolve(
    file: SettingsFile,
    file_label: &str,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Settings, SettingsError> {
    let pick = |from_env: Option<String>, from_file: Option<String>| {
        from_env
            .or(from_file)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };
    let key = pick(env(ENV_API_KEY), file.developer_public_key).ok_or_else(|| {
        SettingsError::Missing {
            key: "developer_public_key",
            file: file_label.to_string(),
            env: ENV_API_KEY,
        }
    })?;
    let token = pick(env(ENV_API_TOKEN), file.member_token).ok_or_else(|| {
        SettingsError::Missing {
            key: "member_token",
            file: file_label.to_string(),
            env: ENV_API_TOKEN,
        }
    })?;
    let base_url =
        pick(env(ENV_BASE_URL), file.base_url).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    Ok(Settings::new(key, token).with_base_url(base_url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    fn file(key: Option<&str>, token: Option<&str>) -> SettingsFile {
        SettingsFile {
            developer_public_key: key.map(String::from),
            member_token: token.map(String::from),
            base_url: None,
        }
    }

    #[test]
    fn file_values_are_used() {
        let s = resolve(file(Some("mykey"), Some("mytoken")), "rc", env_of(&[])).unwrap();
        assert_eq!(s.developer_public_key, "mykey");
        assert_eq!(s.member_token.expose_secret(), "mytoken");
        assert_eq!(s.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn environment_overrides_file() {
        let s = resolve(
            file(Some("mykey"), Some("mytoken")),
            "rc",
            env_of(&[(ENV_API_TOKEN, "envtoken"), (ENV_BASE_URL, "http://localhost:9/1")]),
        )
        .unwrap();
        assert_eq!(s.developer_public_key, "mykey");
        assert_eq!(s.member_token.expose_secret(), "envtoken");
        assert_eq!(s.base_url, "http://localhost:9/1");
    }

    #[test]
    fn missing_token_names_file_and_variable() {
        let err = resolve(file(Some("mykey"), Some("  ")), "/home/u/.burnlogrc", env_of(&[]))
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("member_token"));
        assert!(msg.contains("/home/u/.burnlogrc"));
        assert!(msg.contains(ENV_API_TOKEN));
    }

    #[test]
    fn token_is_redacted_in_debug_output() {
        let s = Settings::new("k", "very-secret");
        assert!(!format!("{s:?}").contains("very-secret"));
    }

    #[test]
    fn explicit_path_must_exist() {
        let tmp = tempfile::tempdir().unwrap();
        let err = Settings::load(Some(&tmp.path().join("missing"))).unwrap_err();
        assert!(matches!(err, SettingsError::Read { .. }));
    }

    #[test]
    fn reads_yaml_settings_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("rc");
        std::fs::write(
            &path,
            "developer_public_key: mykey\nmember_token: mytoken\nbase_url: http://x/1\n",
        )
        .unwrap();
        let f = read_settings_file(&path).unwrap();
        assert_eq!(f.developer_public_key.as_deref(), Some("mykey"));
        assert_eq!(f.base_url.as_deref(), Some("http://x/1"));

        std::fs::write(&path, "- a list\n").unwrap();
        assert!(matches!(
            read_settings_file(&path),
            Err(SettingsError::Malformed { .. })
        ));
    }
}

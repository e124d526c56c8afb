use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::ConfigError;

/// One board to snapshot and where its charts live.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BoardEntry {
    #[serde(rename = "board-id")]
    pub board_id: String,
    #[serde(rename = "output-directory")]
    pub output_directory: PathBuf,
}

/// Group name → board entry, in file order.
///
/// ```yaml
/// orange:
///   board-id: 53186e8391ef8671265eba9d
///   output-directory: orange
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardListConfig {
    boards: IndexMap<String, BoardEntry>,
}

impl BoardListConfig {
    /// Load and validate a board list from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::Missing {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|message| ConfigError::Malformed {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parse a board list from YAML text.
    pub fn parse(yaml: &str) -> Result<Self, String> {
        if yaml.trim().is_empty() {
            return Err("no boards configured".to_string());
        }
        let boards: IndexMap<String, BoardEntry> =
            serde_yaml::from_str(yaml).map_err(|e| e.to_string())?;
        if boards.is_empty() {
            return Err("no boards configured".to_string());
        }
        for (group, entry) in &boards {
            if entry.board_id.trim().is_empty() {
                return Err(format!("{group}: board-id must not be empty"));
            }
            if entry.output_directory.as_os_str().is_empty() {
                return Err(format!("{group}: output-directory must not be empty"));
            }
        }
        Ok(Self { boards })
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, BoardEntry)>,
        S: Into<String>,
    {
        Self {
            boards: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Entries in the order they appear in the file.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BoardEntry)> {
        self.boards.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub(crate) fn len(&self) -> usize {
        self.boards.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOARD_LIST: &str = "\
orange:
  board-id: 53186e8391ef8671265eba9d
  output-directory: orange
blue:
  board-id: 7a3f
  output-directory: /srv/charts/blue
  owner: ignored
";

    #[test]
    fn parses_entries_in_file_order() {
        let cfg = BoardListConfig::parse(BOARD_LIST).unwrap();
        assert_eq!(cfg.len(), 2);
        let groups: Vec<_> = cfg.iter().map(|(g, _)| g).collect();
        assert_eq!(groups, vec!["orange", "blue"]);
        let (_, blue) = cfg.iter().nth(1).unwrap();
        assert_eq!(blue.board_id, "7a3f");
        assert_eq!(blue.output_directory, PathBuf::from("/srv/charts/blue"));
    }

    #[test]
    fn missing_field_is_malformed() {
        let err = BoardListConfig::parse("orange:\n  board-id: abc\n").unwrap_err();
        assert!(err.contains("output-directory"));
    }

    #[test]
    fn empty_values_are_rejected() {
        let err =
            BoardListConfig::parse("orange:\n  board-id: ''\n  output-directory: o\n").unwrap_err();
        assert!(err.contains("board-id"));
    }

    #[test]
    fn empty_file_is_rejected() {
        assert!(BoardListConfig::parse("").is_err());
        assert!(BoardListConfig::parse("{}").is_err());
    }

    #[test]
    fn load_reports_missing_and_malformed_files() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("board-list.yaml");
        assert!(matches!(
            BoardListConfig::load(&missing),
            Err(ConfigError::Missing { .. })
        ));

        std::fs::write(&missing, "- not\n- a\n- mapping\n").unwrap();
        let err = BoardListConfig::load(&missing).unwrap_err();
        assert!(matches!(err, ConfigError::Malformed { .. }));
        assert!(err.to_string().contains("board-list.yaml"));

        std::fs::write(&missing, BOARD_LIST).unwrap();
        assert_eq!(BoardListConfig::load(&missing).unwrap().len(), 2);
    }
}

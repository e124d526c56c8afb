//! Chart files: `burndown-data-NN.yaml`, one per user-managed chart.
//!
//! The engine always writes into the highest-numbered chart in a board's
//! output directory. Rolling over to a new chart is a manual step (the user
//! creates the next number); only `01` is ever created automatically.

use std::io;
use std::path::{Path, PathBuf};

pub const CHART_PREFIX: &str = "burndown-data-";
pub const CHART_EXTENSION: &str = "yaml";

/// Chart used when a directory has none yet.
pub const FIRST_CHART: u32 = 1;

/// `burndown-data-01.yaml`; indexes past 99 simply widen.
pub fn chart_file_name(index: u32) -> String {
    format!("{CHART_PREFIX}{index:02}.{CHART_EXTENSION}")
}

/// Index encoded in a chart file name, or `None` for unrelated files.
pub fn chart_index(file_name: &str) -> Option<u32> {
    let digits = file_name
        .strip_prefix(CHART_PREFIX)?
        .strip_suffix(CHART_EXTENSION)?
        .strip_suffix('.')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// The chart a run should merge into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartFile {
    pub index: u32,
    pub path: PathBuf,
    /// False when no chart existed and `path` is the first one to create.
    pub exists: bool,
}

/// Pick the highest-numbered chart in `dir`, defaulting to chart `01`.
///
/// A missing directory is treated like an empty one.
pub fn latest_chart(dir: &Path) -> io::Result<ChartFile> {
    let mut best: Option<u32> = None;
    if dir.is_dir() {
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name();
            if let Some(index) = name.to_str().and_then(chart_index) {
                best = Some(best.map_or(index, |b| b.max(index)));
            }
        }
    }
    let index = best.unwrap_or(FIRST_CHART);
    tracing::debug!(dir = %dir.display(), index, existing = best.is_some(), "selected chart");
    Ok(ChartFile {
        index,
        path: dir.join(chart_file_name(index)),
        exists: best.is_some(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn file_names_are_zero_padded() {
        assert_eq!(chart_file_name(1), "burndown-data-01.yaml");
        assert_eq!(chart_file_name(12), "burndown-data-12.yaml");
        assert_eq!(chart_file_name(100), "burndown-data-100.yaml");
    }

    #[test]
    fn index_parsing_rejects_unrelated_names() {
        assert_eq!(chart_index("burndown-data-03.yaml"), Some(3));
        assert_eq!(chart_index("burndown-data-3.yaml"), Some(3));
        assert_eq!(chart_index("burndown-data-.yaml"), None);
        assert_eq!(chart_index("burndown-data-0x.yaml"), None);
        assert_eq!(chart_index("burndown-data-03.yml"), None);
        assert_eq!(chart_index("burndown-data-03yaml"), None);
        assert_eq!(chart_index("other-03.yaml"), None);
    }

    #[test]
    fn empty_directory_defaults_to_first_chart() {
        let tmp = tempfile::tempdir().unwrap();
        let chart = latest_chart(tmp.path()).unwrap();
        assert_eq!(chart.index, 1);
        assert!(!chart.exists);
        assert_eq!(chart.path, tmp.path().join("burndown-data-01.yaml"));
    }

    #[test]
    fn missing_directory_defaults_to_first_chart() {
        let tmp = tempfile::tempdir().unwrap();
        let chart = latest_chart(&tmp.path().join("not-yet")).unwrap();
        assert_eq!(chart.index, 1);
        assert!(!chart.exists);
    }

    #[test]
    fn highest_numeric_suffix_wins() {
        let tmp = tempfile::tempdir().unwrap();
        for name in [
            "burndown-data-01.yaml",
            "burndown-data-09.yaml",
            "burndown-data-10.yaml",
            "burndown-data-11.bak",
            "notes.txt",
        ] {
            fs::write(tmp.path().join(name), "").unwrap();
        }
        fs::create_dir(tmp.path().join("burndown-data-99.yaml")).unwrap();

        let chart = latest_chart(tmp.path()).unwrap();
        assert_eq!(chart.index, 10);
        assert!(chart.exists);
        assert_eq!(chart.path, tmp.path().join("burndown-data-10.yaml"));
    }
}

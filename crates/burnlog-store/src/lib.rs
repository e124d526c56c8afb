use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Environment variable overriding the per-user store root.
pub const STORE_ROOT_ENV: &str = "BURNLOG_HOME";

/// Return the per-user store root: `$BURNLOG_HOME`, else `~/.burnlog/`.
pub fn store_root() -> PathBuf {
    if let Some(dir) = std::env::var_os(STORE_ROOT_ENV).filter(|v| !v.is_empty()) {
        PathBuf::from(dir)
    } else if let Some(home) = dirs::home_dir() {
        home.join(".burnlog")
    } else {
        PathBuf::from(".burnlog")
    }
}

/// Atomic write: write to temp file in same dir, then rename.
///
/// Readers see either the previous content or the new content, never a
/// partially written file.
pub fn write_atomic(path: &Path, data: &[u8]) -> anyhow::Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| anyhow::anyhow!("no parent dir for {}", path.display()))?;
    fs::create_dir_all(parent)?;
    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(data)?;
    tmp.flush()?;
    tmp.persist(path)?;
    Ok(())
}

/// Well-known paths under the store root.
#[derive(Debug, Clone)]
pub struct StorePaths {
    pub root: PathBuf,
    pub backup_dir: PathBuf,
}

impl StorePaths {
    /// Derive all paths from a store root. Pure computation, no I/O.
    pub fn discover(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            backup_dir: root.join("backup"),
            root,
        }
    }

    /// `backup/<board-id>/`
    pub fn board_backup_dir(&self, board_id: &str) -> PathBuf {
        self.backup_dir.join(board_id)
    }

    /// `backup/<board-id>/board.json`
    pub fn board_backup_file(&self, board_id: &str) -> PathBuf {
        self.board_backup_dir(board_id).join("board.json")
    }

    /// Persist a raw board document as pretty JSON.
    pub fn write_backup(
        &self,
        board_id: &str,
        board: &serde_json::Value,
    ) -> anyhow::Result<PathBuf> {
        let path = self.board_backup_file(board_id);
        let data = serde_json::to_string_pretty(board)?;
        write_atomic(&path, data.as_bytes())?;
        Ok(path)
    }

    /// Raw JSON text of a board backup.
    pub fn read_backup(&self, board_id: &str) -> anyhow::Result<String> {
        let path = self.board_backup_file(board_id);
        if !path.is_file() {
            anyhow::bail!("no backup for board {board_id} at {}", path.display());
        }
        Ok(fs::read_to_string(&path)?)
    }

    /// Board ids that have a backup, sorted.
    pub fn list_backups(&self) -> anyhow::Result<Vec<String>> {
        if !self.backup_dir.is_dir() {
            return Ok(Vec::new());
        }
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.backup_dir)? {
            let entry = entry?;
            if !entry.path().join("board.json").is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                ids.push(name.to_string());
            }
        }
        ids.sort();
        Ok(ids)
    }
}

//! Reads and writes the task list as a JSON array.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::TaskbookError;
use crate::models::Task;

/// Loads every task from `path`. A missing file is an empty list.
pub fn load_tasks(path: &Path) -> Result<Vec<Task>, TaskbookError> {
    if !path.exists() {
        debug!(path = %path.display(), "task file missing, starting empty");
        return Ok(Vec::new());
    }
    let raw = fs::read_to_string(path)
        .map_err(|e| TaskbookError::storage(format!("Cannot read {}: {e}", path.display())))?;
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    let tasks: Vec<Task> = serde_json::from_str(&raw)
        .map_err(|e| TaskbookError::storage(format!("Invalid task file {}: {e}", path.display())))?;
    let mut seen = HashSet::with_capacity(tasks.len());
    if let Some(dup) = tasks.iter().find(|t| !seen.insert(*t)) {
        return Err(TaskbookError::storage(format!(
            "Invalid task file {}: task listed more than once: {}",
            path.display(),
            dup.name()
        )));
    }
    debug!(path = %path.display(), count = tasks.len(), "loaded tasks");
    Ok(tasks)
}

pub fn save_tasks(path: &Path, tasks: &[Task]) -> Result<(), TaskbookError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut body = serde_json::to_string_pretty(tasks)?;
    body.push('\n');
    fs::write(path, body)
        .map_err(|e| TaskbookError::storage(format!("Cannot write {}: {e}", path.display())))?;
    debug!(path = %path.display(), count = tasks.len(), "saved tasks");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::models::task::fixtures::{backend_task, frontend_task};
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(load_tasks(&dir.path().join("none.json")).unwrap().is_empty());
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("tasks.json");
        let tasks = vec![backend_task(), frontend_task()];
        save_tasks(&path, &tasks).unwrap();
        assert_eq!(load_tasks(&path).unwrap(), tasks);
    }

    #[test]
    fn repeated_tasks_are_storage_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        let body = serde_json::to_string(&[backend_task(), frontend_task(), backend_task()]).unwrap();
        fs::write(&path, body).unwrap();
        let err = load_tasks(&path).unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert!(err.message.contains("more than once: Build API"));
    }

    #[test]
    fn malformed_values_are_storage_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        fs::write(
            &path,
            r#"[{"name":"x","category":{"level":0,"type":"others"},"description":"d",
                "priority":"low","deadline":"2022-01-01","email":"not-an-email"}]"#,
        )
        .unwrap();
        let err = load_tasks(&path).unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert!(err.message.contains("Emails should be"));
    }
}

use serde_json::{json, Value};

use crate::error::TaskbookError;
use crate::models::Task;

pub fn success(data: Value) -> Value {
    json!({
        "success": true,
        "data": data
    })
}

pub fn error(err: &TaskbookError) -> Value {
    json!({
        "success": false,
        "error": {
            "code": err.code.as_str(),
            "message": err.message
        }
    })
}

pub fn task_json(t: &Task) -> Value {
    json!({
        "name": t.name().as_str(),
        "category": {
            "level": t.category().level,
            "type": t.category().kind.as_str()
        },
        "description": t.description().as_str(),
        "priority": t.priority().as_str(),
        "deadline": t.deadline().to_string(),
        "email": t.email().map(|e| e.as_str()),
        "done": t.is_done()
    })
}

/// Visible tasks with the 1-based index commands accept.
pub fn task_list_json(tasks: &[&Task]) -> Value {
    Value::Array(
        tasks
            .iter()
            .enumerate()
            .map(|(i, t)| {
                let mut v = task_json(t);
                v["index"] = json!(i + 1);
                v
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::task::fixtures::{backend_task, frontend_task};

    #[test]
    fn list_entries_carry_index() {
        let (a, b) = (backend_task(), frontend_task());
        let v = task_list_json(&[&a, &b]);
        assert_eq!(v[0]["index"], 1);
        assert_eq!(v[1]["index"], 2);
        assert_eq!(v[1]["email"], Value::Null);
        assert_eq!(v[0]["category"]["type"], "backend");
    }

    #[test]
    fn error_envelope() {
        let v = error(&TaskbookError::empty_filter());
        assert_eq!(v["success"], false);
        assert_eq!(v["error"]["code"], "EMPTY_FILTER");
    }
}

//! Task repository backed by the tasks record file.

use std::collections::HashMap;
use std::sync::Arc;

use crate::storage::{RecordFile, split_fields};
use crate::task::{
    domain::{Assignee, PersistedTaskData, Task, TaskCode, TaskName, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use crate::user::{domain::UserCode, ports::UserRepository};

/// Header row of the tasks file.
pub const TASKS_HEADER: &str = "Code,Name,Status,RepUser";

/// Task repository scanning and rewriting a flat record file.
///
/// Reads resolve each row's assignee code through the user repository.
/// Writes are not locked: one process, one writer.
#[derive(Debug, Clone)]
pub struct FlatFileTaskRepository<U>
where
    U: UserRepository,
{
    file: RecordFile,
    users: Arc<U>,
}

/// Fields of one well-formed task row, before assignee resolution.
struct TaskRow<'a> {
    code: TaskCode,
    name: &'a str,
    status: TaskStatus,
    assignee: UserCode,
}

fn parse_row(row: &str) -> Result<TaskRow<'_>, &'static str> {
    let [raw_code, name, raw_status, raw_assignee] =
        split_fields::<4>(row).ok_or("wrong field count")?;
    let code = raw_code
        .parse::<TaskCode>()
        .map_err(|_| "non-numeric task code")?;
    let status = raw_status
        .trim()
        .parse::<u8>()
        .ok()
        .and_then(TaskStatus::from_code)
        .ok_or("unknown status code")?;
    let assignee = raw_assignee
        .parse::<UserCode>()
        .map_err(|_| "non-numeric assignee code")?;
    Ok(TaskRow {
        code,
        name,
        status,
        assignee,
    })
}

/// Reads the code field of a row, even when the rest of the row is malformed.
fn raw_code(row: &str) -> Option<TaskCode> {
    row.split(',').next()?.parse().ok()
}

fn format_row(task: &Task) -> String {
    format!(
        "{},{},{},{}",
        task.code(),
        task.name(),
        task.status().code(),
        task.assignee().code()
    )
}

impl<U> FlatFileTaskRepository<U>
where
    U: UserRepository,
{
    /// Creates a repository over `file`, resolving assignees via `users`.
    #[must_use]
    pub const fn new(file: RecordFile, users: Arc<U>) -> Self {
        Self { file, users }
    }

    fn read_rows(&self) -> TaskRepositoryResult<Vec<String>> {
        self.file
            .read_rows()
            .map_err(TaskRepositoryError::persistence)
    }

    fn parse_logged<'a>(&self, row: &'a str) -> Option<TaskRow<'a>> {
        match parse_row(row) {
            Ok(parsed) => Some(parsed),
            Err(reason) => {
                tracing::warn!(
                    file = self.file.file_name(),
                    row,
                    reason,
                    "skipping malformed task row"
                );
                None
            }
        }
    }

    fn resolve(
        &self,
        code: UserCode,
        cache: &mut HashMap<UserCode, Assignee>,
    ) -> TaskRepositoryResult<Assignee> {
        if let Some(assignee) = cache.get(&code) {
            return Ok(assignee.clone());
        }
        let assignee = match self
            .users
            .find_by_code(code)
            .map_err(TaskRepositoryError::persistence)?
        {
            Some(user) => Assignee::Resolved(user),
            None => {
                tracing::warn!(assignee = %code, "task assignee does not resolve to a user");
                Assignee::Unresolved(code)
            }
        };
        cache.insert(code, assignee.clone());
        Ok(assignee)
    }

    fn materialize(
        &self,
        row: &TaskRow<'_>,
        cache: &mut HashMap<UserCode, Assignee>,
    ) -> TaskRepositoryResult<Task> {
        let assignee = self.resolve(row.assignee, cache)?;
        Ok(Task::from_persisted(PersistedTaskData {
            code: row.code,
            name: TaskName::from_persisted(row.name),
            status: row.status,
            assignee,
        }))
    }
}

impl<U> TaskRepository for FlatFileTaskRepository<U>
where
    U: UserRepository,
{
    fn find_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let rows = self.read_rows()?;
        let mut cache = HashMap::new();
        rows.iter()
            .filter_map(|row| self.parse_logged(row))
            .map(|parsed| self.materialize(&parsed, &mut cache))
            .collect()
    }

    fn find_by_code(&self, code: TaskCode) -> TaskRepositoryResult<Option<Task>> {
        let rows = self.read_rows()?;
        let Some(parsed) = rows
            .iter()
            .filter_map(|row| self.parse_logged(row))
            .rfind(|parsed| parsed.code == code)
        else {
            return Ok(None);
        };
        self.materialize(&parsed, &mut HashMap::new()).map(Some)
    }

    fn save(&self, task: &Task) -> TaskRepositoryResult<()> {
        self.file
            .append_row(&format_row(task))
            .map_err(TaskRepositoryError::persistence)
    }

    fn code_in_use(&self, code: TaskCode) -> TaskRepositoryResult<bool> {
        let rows = self.read_rows()?;
        Ok(rows.iter().any(|row| raw_code(row) == Some(code)))
    }

    fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let replacement = format_row(task);
        let matched = self
            .file
            .rewrite_rows(|row| {
                parse_row(row)
                    .is_ok_and(|parsed| parsed.code == task.code())
                    .then(|| replacement.clone())
            })
            .map_err(TaskRepositoryError::persistence)?;

        if matched == 0 {
            return Err(TaskRepositoryError::NotFound(task.code()));
        }
        tracing::debug!(task = %task.code(), records = matched, "updated task records");
        Ok(())
    }
}

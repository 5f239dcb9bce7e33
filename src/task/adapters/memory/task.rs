//! In-memory repository for task lifecycle tests.

use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Task, TaskCode},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding `tasks` in storage order.
    #[must_use]
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        Self {
            tasks: Arc::new(RwLock::new(tasks.into_iter().collect())),
        }
    }
}

fn lock_err(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

impl TaskRepository for InMemoryTaskRepository {
    fn find_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.tasks.read().map_err(lock_err)?;
        Ok(tasks.clone())
    }

    fn find_by_code(&self, code: TaskCode) -> TaskRepositoryResult<Option<Task>> {
        let tasks = self.tasks.read().map_err(lock_err)?;
        Ok(tasks.iter().rfind(|task| task.code() == code).cloned())
    }

    fn code_in_use(&self, code: TaskCode) -> TaskRepositoryResult<bool> {
        let tasks = self.tasks.read().map_err(lock_err)?;
        Ok(tasks.iter().any(|task| task.code() == code))
    }

    fn save(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.tasks.write().map_err(lock_err)?;
        tasks.push(task.clone());
        Ok(())
    }

    fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.tasks.write().map_err(lock_err)?;
        let mut matched = false;
        for stored in tasks.iter_mut().filter(|stored| stored.code() == task.code()) {
            stored.clone_from(task);
            matched = true;
        }
        if matched {
            Ok(())
        } else {
            Err(TaskRepositoryError::NotFound(task.code()))
        }
    }
}

//! Read-only projection of tasks for display.

use crate::task::domain::{Assignee, Task, TaskCode, TaskStatus};
use crate::user::domain::{User, UserCode};
use minijinja::{Environment, context};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

const TASK_LIST_TEMPLATE: &str = "\
{%- for task in tasks -%}
{{ task.code }}. {{ task.name }} | assignee: {{ task.assignee }} | status: {{ task.status }}
{% else -%}
No tasks registered.
{% endfor -%}";

/// How a task's assignee is shown to the viewing actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum AssigneeLabel {
    /// The task is assigned to the viewer.
    You,
    /// The task is assigned to another, named user.
    Named(String),
    /// The stored assignee code does not resolve to a user.
    Unknown(UserCode),
}

impl AssigneeLabel {
    fn for_viewer(assignee: &Assignee, actor: &User) -> Self {
        match assignee {
            _ if assignee.code() == actor.code() => Self::You,
            Assignee::Resolved(user) => Self::Named(user.name().to_owned()),
            Assignee::Unresolved(code) => Self::Unknown(*code),
        }
    }
}

impl fmt::Display for AssigneeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::You => f.write_str("you"),
            Self::Named(name) => f.write_str(name),
            Self::Unknown(code) => write!(f, "unknown user #{code}"),
        }
    }
}

impl From<AssigneeLabel> for String {
    fn from(label: AssigneeLabel) -> Self {
        label.to_string()
    }
}

/// One task as seen by a particular actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskView {
    /// Task code.
    pub code: TaskCode,
    /// Task name.
    pub name: String,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// Assignee as shown to the viewer.
    pub assignee: AssigneeLabel,
}

impl TaskView {
    /// Projects `task` for display to `actor`.
    #[must_use]
    pub fn project(task: &Task, actor: &User) -> Self {
        Self {
            code: task.code(),
            name: task.name().as_str().to_owned(),
            status: task.status(),
            assignee: AssigneeLabel::for_viewer(task.assignee(), actor),
        }
    }
}

/// Error returned when the task list template cannot be rendered.
#[derive(Debug, Error)]
#[error("failed to render task list: {0}")]
pub struct RenderError(#[from] minijinja::Error);

/// Renders tasks as one human-readable line each.
///
/// # Errors
///
/// Returns [`RenderError`] when template rendering fails.
pub fn render_task_list(views: &[TaskView]) -> Result<String, RenderError> {
    let tasks: Vec<minijinja::Value> = views
        .iter()
        .map(|view| {
            context! {
                code => view.code.value(),
                name => view.name,
                status => view.status.label(),
                assignee => view.assignee.to_string(),
            }
        })
        .collect();
    let environment = Environment::new();
    Ok(environment.render_str(TASK_LIST_TEMPLATE, context! { tasks })?)
}

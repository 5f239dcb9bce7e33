//! Application services for task lifecycle orchestration.

mod lifecycle;
mod listing;

pub use lifecycle::{
    ChangeStatusRequest, CreateTaskRequest, ErrorKind, TaskLifecycleError, TaskLifecycleResult,
    TaskLifecycleService,
};
pub use listing::{AssigneeLabel, RenderError, TaskView, render_task_list};

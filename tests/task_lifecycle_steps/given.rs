//! Given steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, parse_status};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use tasktrack::task::{
    domain::TaskCode,
    services::{ChangeStatusRequest, CreateTaskRequest},
};
use tasktrack::user::domain::UserCode;

#[given(r#"the user "{email}" with password "{password}" is logged in"#)]
fn user_is_logged_in(
    world: &mut TaskLifecycleWorld,
    email: String,
    password: String,
) -> Result<(), eyre::Report> {
    let user = world
        .authentication
        .login(email, password)
        .wrap_err("log in scenario user")?;
    world.actor = Some(user);
    Ok(())
}

#[given(r#"task {code:u32} named "{name}" exists for user {assignee:u32}"#)]
fn task_exists(
    world: &mut TaskLifecycleWorld,
    code: u32,
    name: String,
    assignee: u32,
) -> Result<(), eyre::Report> {
    let actor = world.actor()?.clone();
    world
        .service
        .create_task(
            CreateTaskRequest::new(TaskCode::new(code), name, UserCode::new(assignee)),
            &actor,
        )
        .wrap_err("create task in scenario setup")?;
    Ok(())
}

#[given(r#"task {code:u32} has been moved to "{status}""#)]
fn task_has_been_moved(
    world: &mut TaskLifecycleWorld,
    code: u32,
    status: String,
) -> Result<(), eyre::Report> {
    let target = parse_status(&status)?;
    let actor = world.actor()?.clone();
    world
        .service
        .change_status(ChangeStatusRequest::new(TaskCode::new(code), target), &actor)
        .wrap_err("change task status in scenario setup")?;
    Ok(())
}

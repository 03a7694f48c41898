//! Given steps for task service BDD scenarios.

use super::world::{TaskServiceWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::task::domain::{CreateTaskRequest, TaskId};

#[given(r#"a task titled "{title}" described as "{description}" has been created"#)]
fn task_has_been_created(
    world: &mut TaskServiceWorld,
    title: String,
    description: String,
) -> Result<(), eyre::Report> {
    let request = CreateTaskRequest::new(world.owner, title, description);
    let created = run_async(world.service.create_task(request))
        .wrap_err("create task for scenario setup")?;

    world.target_id = Some(created.id());
    world.last_created_task = Some(created);
    Ok(())
}

#[given(r#"a creation request titled "{title}" described as "{description}""#)]
fn creation_request(world: &mut TaskServiceWorld, title: String, description: String) {
    world.pending_request = Some(CreateTaskRequest::new(world.owner, title, description));
}

#[given("an identifier that no task uses")]
fn unused_identifier(world: &mut TaskServiceWorld) {
    world.target_id = Some(TaskId::new());
}

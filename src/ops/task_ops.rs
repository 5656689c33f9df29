use chrono::NaiveDate;
use rusqlite::Connection;

use crate::db::task_repo;
use crate::error::{JoinError, JoinResult};
use crate::model::{Category, Priority, Subtask, Task, TaskStatus, Uid};
use crate::validation::{self, trim_optional};

pub fn add_task(
    conn: &Connection,
    owner_uid: &Uid,
    title: &str,
    description: Option<&str>,
    due_date: Option<NaiveDate>,
    priority: Option<Priority>,
    category: Option<Category>,
    assigned: Vec<Uid>,
) -> JoinResult<Task> {
    let valid_title = validation::non_blank(title, "title")?;

    let mut task = Task::create(valid_title);
    task.description = trim_optional(description);
    task.due_date = due_date;
    task.priority = priority;
    task.category = category;
    task.assigned = assigned;

    task_repo::insert(conn, owner_uid, &task)?;
    Ok(task)
}

/// Move a task to another board column.
pub fn move_task(conn: &Connection, task_id: &Uid, status: TaskStatus) -> JoinResult<Task> {
    let mut task = get_task(conn, task_id)?;
    task.status = status;
    task_repo::update(conn, &task)?;
    Ok(task)
}

/// Set the task priority; re-selecting the current one clears it, like
/// the priority buttons on the task form.
pub fn set_priority(conn: &Connection, task_id: &Uid, priority: Priority) -> JoinResult<Task> {
    let mut task = get_task(conn, task_id)?;
    task.priority = if task.priority == Some(priority) {
        None
    } else {
        Some(priority)
    };
    task_repo::update(conn, &task)?;
    Ok(task)
}

pub fn add_subtask(conn: &Connection, task_id: &Uid, name: &str) -> JoinResult<Task> {
    let valid_name = validation::non_blank(name, "subtask name")?;
    let mut task = get_task(conn, task_id)?;
    task.subtasks.push(Subtask::create(valid_name));
    task_repo::update(conn, &task)?;
    Ok(task)
}

pub fn toggle_subtask(conn: &Connection, task_id: &Uid, index: usize) -> JoinResult<Task> {
    let mut task = get_task(conn, task_id)?;
    let subtask = task
        .subtasks
        .get_mut(index)
        .ok_or_else(|| JoinError::NotFound {
            entity_type: "Subtask".into(),
            id: index.to_string(),
        })?;
    subtask.done = !subtask.done;
    task_repo::update(conn, &task)?;
    Ok(task)
}

pub fn delete_subtask(conn: &Connection, task_id: &Uid, index: usize) -> JoinResult<Task> {
    let mut task = get_task(conn, task_id)?;
    if index >= task.subtasks.len() {
        return Err(JoinError::NotFound {
            entity_type: "Subtask".into(),
            id: index.to_string(),
        });
    }
    task.subtasks.remove(index);
    task_repo::update(conn, &task)?;
    Ok(task)
}

/// Assign or unassign a contact on a task.
pub fn toggle_assignment(conn: &Connection, task_id: &Uid, uid: &Uid) -> JoinResult<Task> {
    let mut task = get_task(conn, task_id)?;
    match task.assigned.iter().position(|a| a == uid) {
        Some(pos) => {
            task.assigned.remove(pos);
        }
        None => task.assigned.push(uid.clone()),
    }
    task_repo::update(conn, &task)?;
    Ok(task)
}

pub fn delete_task(conn: &Connection, task_id: &Uid) -> JoinResult<()> {
    // Unknown ids must surface as NotFound, not as a silent no-op.
    get_task(conn, task_id)?;
    task_repo::delete(conn, task_id)
}

fn get_task(conn: &Connection, task_id: &Uid) -> JoinResult<Task> {
    task_repo::find_by_id(conn, task_id)?.ok_or_else(|| JoinError::NotFound {
        entity_type: "Task".into(),
        id: task_id.to_string(),
    })
}

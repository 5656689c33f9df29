use rusqlite::Connection;

use crate::db::task_repo;
use crate::error::JoinResult;
use crate::model::{Task, TaskStatus, Uid};

/// A user's tasks bucketed into board columns, columns in board order.
pub fn tasks_by_status(
    conn: &Connection,
    owner_uid: &Uid,
) -> JoinResult<Vec<(TaskStatus, Vec<Task>)>> {
    let tasks = task_repo::find_by_owner(conn, owner_uid)?;
    let mut columns: Vec<(TaskStatus, Vec<Task>)> = TaskStatus::ALL
        .iter()
        .map(|status| (*status, Vec::new()))
        .collect();
    for task in tasks {
        if let Some((_, column)) = columns.iter_mut().find(|(s, _)| *s == task.status) {
            column.push(task);
        }
    }
    Ok(columns)
}

pub fn tasks_assigned_to(
    conn: &Connection,
    owner_uid: &Uid,
    uid: &Uid,
) -> JoinResult<Vec<Task>> {
    Ok(task_repo::find_by_owner(conn, owner_uid)?
        .into_iter()
        .filter(|t| t.assigned.contains(uid))
        .collect())
}

/// Open (not done) tasks, for the summary screen counters.
pub fn open_task_count(conn: &Connection, owner_uid: &Uid) -> JoinResult<usize> {
    Ok(task_repo::find_by_owner(conn, owner_uid)?
        .iter()
        .filter(|t| t.status != TaskStatus::Done)
        .count())
}

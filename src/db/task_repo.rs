use rusqlite::{params, Connection};

use crate::error::{JoinError, JoinResult};
use crate::model::{Category, Priority, Subtask, Task, TaskStatus, Uid};

pub fn insert(conn: &Connection, owner_uid: &Uid, task: &Task) -> JoinResult<()> {
    conn.execute(
        "INSERT INTO tasks (id, owner_uid, title, description, due_date, priority, category, status)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            task.id.as_str(),
            owner_uid.as_str(),
            task.title,
            task.description,
            task.due_date.map(|d| d.to_string()),
            task.priority.map(|p| p.to_db_str()),
            task.category.map(|c| c.to_db_str()),
            task.status.to_db_str(),
        ],
    )?;
    write_children(conn, task)?;
    Ok(())
}

pub fn update(conn: &Connection, task: &Task) -> JoinResult<()> {
    conn.execute(
        "UPDATE tasks SET title = ?1, description = ?2, due_date = ?3, priority = ?4,
         category = ?5, status = ?6 WHERE id = ?7",
        params![
            task.title,
            task.description,
            task.due_date.map(|d| d.to_string()),
            task.priority.map(|p| p.to_db_str()),
            task.category.map(|c| c.to_db_str()),
            task.status.to_db_str(),
            task.id.as_str(),
        ],
    )?;
    conn.execute(
        "DELETE FROM task_assignments WHERE task_id = ?1",
        params![task.id.as_str()],
    )?;
    conn.execute(
        "DELETE FROM subtasks WHERE task_id = ?1",
        params![task.id.as_str()],
    )?;
    write_children(conn, task)?;
    Ok(())
}

pub fn delete(conn: &Connection, task_id: &Uid) -> JoinResult<()> {
    conn.execute("DELETE FROM tasks WHERE id = ?1", params![task_id.as_str()])?;
    Ok(())
}

pub fn find_by_id(conn: &Connection, task_id: &Uid) -> JoinResult<Option<Task>> {
    let mut stmt = conn.prepare(
        "SELECT id, title, description, due_date, priority, category, status
         FROM tasks WHERE id = ?1",
    )?;

    let result = stmt.query_row(params![task_id.as_str()], |row| row_to_task_row(row));

    match result {
        Ok(raw) => Ok(Some(hydrate(conn, raw?)?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn find_by_owner(conn: &Connection, owner_uid: &Uid) -> JoinResult<Vec<Task>> {
    let mut stmt = conn.prepare(
        "SELECT id, title, description, due_date, priority, category, status
         FROM tasks WHERE owner_uid = ?1 ORDER BY created_at, rowid",
    )?;

    let rows = stmt
        .query_map(params![owner_uid.as_str()], |row| row_to_task_row(row))?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .collect::<JoinResult<Vec<_>>>()?;

    let mut tasks = Vec::with_capacity(rows.len());
    for raw in rows {
        tasks.push(hydrate(conn, raw)?);
    }
    Ok(tasks)
}

/// Row shape before its child tables are loaded.
struct TaskRow {
    id: Uid,
    title: String,
    description: Option<String>,
    due_date: Option<chrono::NaiveDate>,
    priority: Option<Priority>,
    category: Option<Category>,
    status: TaskStatus,
}

fn row_to_task_row(row: &rusqlite::Row) -> rusqlite::Result<JoinResult<TaskRow>> {
    let id: String = row.get(0)?;
    let title: String = row.get(1)?;
    let description: Option<String> = row.get(2)?;
    let due_date: Option<String> = row.get(3)?;
    let priority: Option<String> = row.get(4)?;
    let category: Option<String> = row.get(5)?;
    let status: String = row.get(6)?;

    Ok(build_task_row(
        id,
        title,
        description,
        due_date,
        priority,
        category,
        status,
    ))
}

fn build_task_row(
    id: String,
    title: String,
    description: Option<String>,
    due_date: Option<String>,
    priority: Option<String>,
    category: Option<String>,
    status: String,
) -> JoinResult<TaskRow> {
    let priority = match priority {
        Some(p) => Some(
            Priority::from_db_str(&p)
                .ok_or_else(|| JoinError::Other(format!("Unknown priority: {}", p)))?,
        ),
        None => None,
    };
    let category = match category {
        Some(c) => Some(
            Category::from_db_str(&c)
                .ok_or_else(|| JoinError::Other(format!("Unknown category: {}", c)))?,
        ),
        None => None,
    };
    let status = TaskStatus::from_db_str(&status)
        .ok_or_else(|| JoinError::Other(format!("Unknown task status: {}", status)))?;

    Ok(TaskRow {
        id: Uid::new(id),
        title,
        description,
        due_date: due_date.and_then(|s| chrono::NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()),
        priority,
        category,
        status,
    })
}

fn hydrate(conn: &Connection, raw: TaskRow) -> JoinResult<Task> {
    let assigned = assignments_for(conn, &raw.id)?;
    let subtasks = subtasks_for(conn, &raw.id)?;
    Ok(Task {
        id: raw.id,
        title: raw.title,
        description: raw.description,
        due_date: raw.due_date,
        priority: raw.priority,
        category: raw.category,
        status: raw.status,
        assigned,
        subtasks,
    })
}

fn assignments_for(conn: &Connection, task_id: &Uid) -> JoinResult<Vec<Uid>> {
    let mut stmt = conn.prepare(
        "SELECT uid FROM task_assignments WHERE task_id = ?1 ORDER BY position",
    )?;
    let uids = stmt
        .query_map(params![task_id.as_str()], |row| {
            Ok(Uid::new(row.get::<_, String>(0)?))
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(uids)
}

fn subtasks_for(conn: &Connection, task_id: &Uid) -> JoinResult<Vec<Subtask>> {
    let mut stmt = conn.prepare(
        "SELECT name, done FROM subtasks WHERE task_id = ?1 ORDER BY position",
    )?;
    let subtasks = stmt
        .query_map(params![task_id.as_str()], |row| {
            Ok(Subtask {
                name: row.get(0)?,
                done: row.get::<_, i32>(1)? != 0,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(subtasks)
}

fn write_children(conn: &Connection, task: &Task) -> JoinResult<()> {
    let mut assign_stmt = conn.prepare(
        "INSERT INTO task_assignments (task_id, uid, position) VALUES (?1, ?2, ?3)",
    )?;
    for (position, uid) in task.assigned.iter().enumerate() {
        assign_stmt.execute(params![task.id.as_str(), uid.as_str(), position as i64])?;
    }

    let mut sub_stmt = conn.prepare(
        "INSERT INTO subtasks (task_id, position, name, done) VALUES (?1, ?2, ?3, ?4)",
    )?;
    for (position, subtask) in task.subtasks.iter().enumerate() {
        sub_stmt.execute(params![
            task.id.as_str(),
            position as i64,
            subtask.name,
            subtask.done as i32,
        ])?;
    }
    Ok(())
}

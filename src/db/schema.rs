use rusqlite::Connection;

use crate::error::JoinResult;

/// Initialize the database schema. Creates all tables if they don't exist.
///
/// Contacts are child rows of their owning user and are rewritten wholesale
/// whenever the user record is persisted, mirroring a full-document write
/// against the remote store.
pub fn initialize(conn: &Connection) -> JoinResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            uid TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            color TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS contacts (
            owner_uid TEXT NOT NULL REFERENCES users(uid) ON DELETE CASCADE,
            uid TEXT NOT NULL,
            position INTEGER NOT NULL,
            name TEXT NOT NULL,
            color TEXT NOT NULL,
            email TEXT,
            phone TEXT,
            PRIMARY KEY (owner_uid, uid)
        );

        CREATE TABLE IF NOT EXISTS tasks (
            id TEXT PRIMARY KEY NOT NULL,
            owner_uid TEXT NOT NULL REFERENCES users(uid) ON DELETE CASCADE,
            title TEXT NOT NULL,
            description TEXT,
            due_date TEXT,
            priority TEXT,
            category TEXT,
            status TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS task_assignments (
            task_id TEXT NOT NULL REFERENCES tasks(id) ON DELETE CASCADE,
            uid TEXT NOT NULL,
            position INTEGER NOT NULL,
            PRIMARY KEY (task_id, uid)
        );

        CREATE TABLE IF NOT EXISTS subtasks (
            task_id TEXT NOT NULL REFERENCES tasks(id) ON DELETE CASCADE,
            position INTEGER NOT NULL,
            name TEXT NOT NULL,
            done INTEGER NOT NULL DEFAULT 0,
            PRIMARY KEY (task_id, position)
        );

        PRAGMA foreign_keys = ON;
        ",
    )?;
    Ok(())
}

/// Create an in-memory connection for testing. Available in test builds.
pub fn test_connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    initialize(&conn).unwrap();
    conn
}

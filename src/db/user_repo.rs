use rusqlite::{params, Connection};

use crate::error::JoinResult;
use crate::model::{Contact, Uid, User};

pub fn insert(conn: &Connection, user: &User) -> JoinResult<()> {
    conn.execute(
        "INSERT INTO users (uid, name, color) VALUES (?1, ?2, ?3)",
        params![user.uid.as_str(), user.name, user.color],
    )?;
    write_contacts(conn, user)?;
    Ok(())
}

/// Persist a full user record, contact list included. The contact rows are
/// rewritten wholesale so their stored order always matches the in-memory
/// insertion order.
pub fn update(conn: &Connection, user: &User) -> JoinResult<()> {
    conn.execute(
        "UPDATE users SET name = ?1, color = ?2 WHERE uid = ?3",
        params![user.name, user.color, user.uid.as_str()],
    )?;
    conn.execute(
        "DELETE FROM contacts WHERE owner_uid = ?1",
        params![user.uid.as_str()],
    )?;
    write_contacts(conn, user)?;
    Ok(())
}

pub fn exists(conn: &Connection, uid: &Uid) -> JoinResult<bool> {
    let mut stmt = conn.prepare("SELECT 1 FROM users WHERE uid = ?1")?;
    Ok(stmt.exists(params![uid.as_str()])?)
}

pub fn find_by_uid(conn: &Connection, uid: &Uid) -> JoinResult<Option<User>> {
    let mut stmt = conn.prepare("SELECT uid, name, color FROM users WHERE uid = ?1")?;

    let result = stmt.query_row(params![uid.as_str()], |row| {
        let uid: String = row.get(0)?;
        let name: String = row.get(1)?;
        let color: String = row.get(2)?;
        Ok((uid, name, color))
    });

    match result {
        Ok((uid, name, color)) => {
            let uid = Uid::new(uid);
            let contacts = contacts_for(conn, &uid)?;
            Ok(Some(User {
                uid,
                name,
                color,
                contacts,
            }))
        }
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// The full roster in sign-up order.
pub fn all(conn: &Connection) -> JoinResult<Vec<User>> {
    let mut stmt = conn.prepare("SELECT uid, name, color FROM users ORDER BY rowid")?;

    let rows = stmt
        .query_map([], |row| {
            let uid: String = row.get(0)?;
            let name: String = row.get(1)?;
            let color: String = row.get(2)?;
            Ok((uid, name, color))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut users = Vec::with_capacity(rows.len());
    for (uid, name, color) in rows {
        let uid = Uid::new(uid);
        let contacts = contacts_for(conn, &uid)?;
        users.push(User {
            uid,
            name,
            color,
            contacts,
        });
    }
    Ok(users)
}

fn contacts_for(conn: &Connection, owner_uid: &Uid) -> JoinResult<Vec<Contact>> {
    let mut stmt = conn.prepare(
        "SELECT uid, name, color, email, phone FROM contacts
         WHERE owner_uid = ?1 ORDER BY position",
    )?;

    let contacts = stmt
        .query_map(params![owner_uid.as_str()], |row| {
            Ok(Contact {
                uid: Uid::new(row.get::<_, String>(0)?),
                name: row.get(1)?,
                color: row.get(2)?,
                email: row.get(3)?,
                phone: row.get(4)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(contacts)
}

fn write_contacts(conn: &Connection, user: &User) -> JoinResult<()> {
    let mut stmt = conn.prepare(
        "INSERT INTO contacts (owner_uid, uid, position, name, color, email, phone)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )?;
    for (position, contact) in user.contacts.iter().enumerate() {
        stmt.execute(params![
            user.uid.as_str(),
            contact.uid.as_str(),
            position as i64,
            contact.name,
            contact.color,
            contact.email,
            contact.phone,
        ])?;
    }
    Ok(())
}

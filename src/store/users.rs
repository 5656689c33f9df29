use std::cell::RefCell;
use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};

use log::debug;
use rusqlite::Connection;

use crate::db::user_repo;
use crate::error::{JoinError, JoinResult};
use crate::model::{Uid, User};

/// The user store collaborator: a read snapshot of the full roster plus a
/// change notification stream. Stands in for the remote document store.
///
/// Updates are delivered serially on the calling thread; persistence is
/// fire-and-forget from the consumer's perspective beyond the synchronous
/// `Result`.
pub struct UsersService {
    conn: Connection,
    subscribers: RefCell<Vec<Sender<()>>>,
}

impl UsersService {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn,
            subscribers: RefCell::new(Vec::new()),
        }
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Current roster snapshot, in sign-up order.
    pub fn users(&self) -> JoinResult<Vec<User>> {
        user_repo::all(&self.conn)
    }

    pub fn get_user_by_uid(&self, uid: &Uid) -> JoinResult<User> {
        user_repo::find_by_uid(&self.conn, uid)?.ok_or_else(|| JoinError::NotFound {
            entity_type: "User".into(),
            id: uid.to_string(),
        })
    }

    pub fn add_user(&self, user: &User) -> JoinResult<()> {
        if user_repo::exists(&self.conn, &user.uid)? {
            return Err(JoinError::AlreadyExists {
                entity_type: "User".into(),
                identifier: user.uid.to_string(),
            });
        }
        user_repo::insert(&self.conn, user)?;
        debug!("user added: {}", user.uid);
        self.notify();
        Ok(())
    }

    /// Persist a full user record including its contact list.
    pub fn update_user(&self, user: &User) -> JoinResult<()> {
        if !user_repo::exists(&self.conn, &user.uid)? {
            return Err(JoinError::NotFound {
                entity_type: "User".into(),
                id: user.uid.to_string(),
            });
        }
        user_repo::update(&self.conn, user)?;
        debug!("user updated: {}", user.uid);
        self.notify();
        Ok(())
    }

    /// Register for roster-change notifications. The returned subscription
    /// is a scoped resource: dropping it releases the slot, and the dead
    /// sender is pruned on the next notification.
    pub fn subscribe(&self) -> UsersSubscription {
        let (tx, rx) = channel();
        self.subscribers.borrow_mut().push(tx);
        UsersSubscription { rx }
    }

    fn notify(&self) {
        self.subscribers
            .borrow_mut()
            .retain(|tx| tx.send(()).is_ok());
    }

    #[cfg(test)]
    pub(crate) fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

/// A live registration on the roster notification stream. Consumers poll
/// it between events; views hold at most one and release it on teardown.
pub struct UsersSubscription {
    rx: Receiver<()>,
}

impl UsersSubscription {
    /// Drain pending notifications. Returns true if any arrived since the
    /// last poll.
    pub fn poll(&self) -> bool {
        let mut seen = false;
        loop {
            match self.rx.try_recv() {
                Ok(()) => seen = true,
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema;

    fn service() -> UsersService {
        UsersService::new(schema::test_connection())
    }

    #[test]
    fn add_and_fetch_user() {
        let service = service();
        let user = User::create("Anna".into(), Uid::new("u1"));
        service.add_user(&user).unwrap();
        let fetched = service.get_user_by_uid(&user.uid).unwrap();
        assert_eq!(fetched.name, "Anna");
    }

    #[test]
    fn duplicate_uid_is_rejected() {
        let service = service();
        let user = User::create("Anna".into(), Uid::new("u1"));
        service.add_user(&user).unwrap();
        assert!(matches!(
            service.add_user(&user),
            Err(JoinError::AlreadyExists { .. })
        ));
    }

    #[test]
    fn update_unknown_user_is_not_found() {
        let service = service();
        let user = User::create("Anna".into(), Uid::new("u1"));
        assert!(matches!(
            service.update_user(&user),
            Err(JoinError::NotFound { .. })
        ));
    }

    #[test]
    fn subscription_sees_roster_changes() {
        let service = service();
        let sub = service.subscribe();
        assert!(!sub.poll());

        let user = User::create("Anna".into(), Uid::new("u1"));
        service.add_user(&user).unwrap();
        assert!(sub.poll());
        // Drained: nothing further without a new change.
        assert!(!sub.poll());
    }

    #[test]
    fn dropped_subscription_is_pruned_on_next_notify() {
        let service = service();
        let sub = service.subscribe();
        assert_eq!(service.subscriber_count(), 1);
        drop(sub);

        let user = User::create("Anna".into(), Uid::new("u1"));
        service.add_user(&user).unwrap();
        assert_eq!(service.subscriber_count(), 0);
    }
}

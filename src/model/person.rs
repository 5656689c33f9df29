use serde::{Deserialize, Serialize};

use super::ids::Uid;
use super::palette::color_for;

/// A single entry in a user's contact list. Contacts are value-like
/// records: an edit replaces the fields in place, keeping uid and color.
///
/// The uid either references a registered user or is a locally generated
/// id for a standalone contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub uid: Uid,
    pub name: String,
    pub color: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Contact {
    /// Create a standalone contact with a fresh local uid.
    pub fn create(name: String, email: Option<String>, phone: Option<String>) -> Self {
        let uid = Uid::generate();
        let color = color_for(&uid).to_string();
        Self {
            uid,
            name,
            color,
            email,
            phone,
        }
    }

}

/// A registered account. The password lives with the authentication
/// provider; the record here carries only the provider-issued uid.
///
/// `contacts` insertion order is meaningful: index 0 is the user's own
/// self-contact, the only entry that carries their email address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub uid: Uid,
    pub name: String,
    pub color: String,
    pub contacts: Vec<Contact>,
}

impl User {
    pub fn create(name: String, uid: Uid) -> Self {
        let color = color_for(&uid).to_string();
        Self {
            uid,
            name,
            color,
            contacts: Vec::new(),
        }
    }

    /// The contact-shaped projection of this user shown to everyone else.
    /// The email is dismissed for privacy; only the user's own
    /// self-contact carries it.
    pub fn as_contact(&self) -> Contact {
        Contact {
            uid: self.uid.clone(),
            name: self.name.clone(),
            color: self.color.clone(),
            email: None,
            phone: None,
        }
    }

    /// Whether this user's contact list already represents `user`,
    /// checked by identifier equality.
    pub fn has_user_in_contacts(&self, user: &User) -> bool {
        self.contacts.iter().any(|c| c.uid == user.uid)
    }

    pub fn add_contact(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// Position of a contact in the owned list, by uid.
    pub fn contact_position(&self, uid: &Uid) -> Option<usize> {
        self.contacts.iter().position(|c| &c.uid == uid)
    }

    /// Replace the owned contact with the same uid. Returns false if no
    /// such contact exists.
    pub fn replace_contact(&mut self, contact: Contact) -> bool {
        match self.contact_position(&contact.uid) {
            Some(pos) => {
                self.contacts[pos] = contact;
                true
            }
            None => false,
        }
    }

    /// Remove an owned contact by uid. Returns the removed entry.
    pub fn remove_contact(&mut self, uid: &Uid) -> Option<Contact> {
        self.contact_position(uid).map(|pos| self.contacts.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_contact_drops_email() {
        let user = User::create("Anna".into(), Uid::new("u1"));
        let contact = user.as_contact();
        assert_eq!(contact.uid, user.uid);
        assert_eq!(contact.name, "Anna");
        assert_eq!(contact.color, user.color);
        assert_eq!(contact.email, None);
    }

    #[test]
    fn has_user_in_contacts_checks_by_uid() {
        let other = User::create("Carl".into(), Uid::new("u2"));
        let mut user = User::create("Anna".into(), Uid::new("u1"));
        assert!(!user.has_user_in_contacts(&other));
        user.add_contact(other.as_contact());
        assert!(user.has_user_in_contacts(&other));
    }

    #[test]
    fn replace_contact_keeps_list_length() {
        let mut user = User::create("Anna".into(), Uid::new("u1"));
        user.add_contact(Contact::create("Bea".into(), None, None));
        let mut edited = user.contacts[0].clone();
        edited.name = "Beate".into();
        assert!(user.replace_contact(edited));
        assert_eq!(user.contacts.len(), 1);
        assert_eq!(user.contacts[0].name, "Beate");
    }

    #[test]
    fn replace_contact_rejects_unknown_uid() {
        let mut user = User::create("Anna".into(), Uid::new("u1"));
        let stray = Contact::create("Bea".into(), None, None);
        assert!(!user.replace_contact(stray));
    }

    #[test]
    fn remove_contact_by_uid() {
        let mut user = User::create("Anna".into(), Uid::new("u1"));
        let contact = Contact::create("Bea".into(), None, None);
        let uid = contact.uid.clone();
        user.add_contact(contact);
        assert!(user.remove_contact(&uid).is_some());
        assert!(user.contacts.is_empty());
        assert!(user.remove_contact(&uid).is_none());
    }
}

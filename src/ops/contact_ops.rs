use log::debug;

use crate::error::{JoinError, JoinResult};
use crate::model::{Contact, Uid};
use crate::store::UsersService;
use crate::validation::{self, trim_optional};

/// Append a new standalone contact to a user's owned list and persist the
/// full record.
pub fn add_contact(
    service: &UsersService,
    owner_uid: &Uid,
    name: &str,
    email: Option<&str>,
    phone: Option<&str>,
) -> JoinResult<Contact> {
    let valid_name = validation::non_blank(name, "name")?;
    let valid_email = validation::optional_email(email, "email")?;

    let mut user = service.get_user_by_uid(owner_uid)?;
    let contact = Contact::create(valid_name, valid_email, trim_optional(phone));
    user.add_contact(contact.clone());
    service.update_user(&user)?;
    debug!("contact {} added for {}", contact.uid, owner_uid);
    Ok(contact)
}

/// Replace an owned contact in place, keyed by uid. Uid and color are
/// kept; name, email and phone come from the form. Edits never address a
/// position in the derived view, so roster changes between render and
/// submit cannot redirect them.
pub fn edit_contact(
    service: &UsersService,
    owner_uid: &Uid,
    contact_uid: &Uid,
    name: &str,
    email: Option<&str>,
    phone: Option<&str>,
) -> JoinResult<Contact> {
    let valid_name = validation::non_blank(name, "name")?;
    let valid_email = validation::optional_email(email, "email")?;

    let mut user = service.get_user_by_uid(owner_uid)?;
    let existing = user
        .contacts
        .iter()
        .find(|c| &c.uid == contact_uid)
        .ok_or_else(|| contact_not_found(contact_uid))?;

    let replacement = Contact {
        uid: existing.uid.clone(),
        color: existing.color.clone(),
        name: valid_name,
        email: valid_email,
        phone: trim_optional(phone),
    };
    user.replace_contact(replacement.clone());
    service.update_user(&user)?;
    Ok(replacement)
}

/// Remove an owned contact by uid. The self-contact is protected, and
/// roster-derived entries are not in the owned list to begin with.
pub fn delete_contact(
    service: &UsersService,
    owner_uid: &Uid,
    contact_uid: &Uid,
) -> JoinResult<()> {
    if contact_uid == owner_uid {
        return Err(JoinError::CannotDeleteSelf);
    }

    let mut user = service.get_user_by_uid(owner_uid)?;
    user.remove_contact(contact_uid)
        .ok_or_else(|| contact_not_found(contact_uid))?;
    service.update_user(&user)?;
    debug!("contact {} deleted for {}", contact_uid, owner_uid);
    Ok(())
}

fn contact_not_found(uid: &Uid) -> JoinError {
    JoinError::NotFound {
        entity_type: "Contact".into(),
        id: uid.to_string(),
    }
}

use log::info;

use crate::error::JoinResult;
use crate::model::{Uid, User};
use crate::store::UsersService;
use crate::validation;

/// Register a new account. The uid comes from the authentication
/// provider; the password never reaches this layer.
///
/// The new user's contact list starts with their self-contact at index 0,
/// the only contact entry that carries their email address.
pub fn sign_up(
    service: &UsersService,
    provider_uid: &str,
    name: &str,
    email: &str,
) -> JoinResult<User> {
    let valid_name = validation::non_blank(name, "name")?;
    let valid_email = validation::email(email, "email")?;

    let mut user = User::create(valid_name, Uid::new(provider_uid));
    let mut self_contact = user.as_contact();
    self_contact.email = Some(valid_email);
    user.add_contact(self_contact);

    service.add_user(&user)?;
    info!("signed up {} ({})", user.name, user.uid);
    Ok(user)
}

/// Rename an account. Contacts held by other users referencing this uid
/// pick the change up through the roster projection on their next
/// recompute.
pub fn rename_user(service: &UsersService, uid: &Uid, name: &str) -> JoinResult<User> {
    let valid_name = validation::non_blank(name, "name")?;
    let mut user = service.get_user_by_uid(uid)?;
    user.name = valid_name.clone();
    // The self-contact shares the user's uid and mirrors the name.
    if let Some(pos) = user.contact_position(uid) {
        user.contacts[pos].name = valid_name;
    }
    service.update_user(&user)?;
    Ok(user)
}

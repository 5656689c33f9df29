use crate::model::{Contact, User};

/// Combine a user's own contact list with every roster user not already
/// represented in it, the latter transformed to contact shape (email
/// dismissed for privacy).
///
/// The owned list is copied, never aliased; the result length is
/// |own| + number of unmatched roster users, and no two entries share an
/// underlying user identity.
pub fn contacts_with_users(own: &[Contact], roster: &[User]) -> Vec<Contact> {
    let mut contacts = own.to_vec();
    for user in roster {
        if !contacts.iter().any(|c| c.uid == user.uid) {
            contacts.push(user.as_contact());
        }
    }
    contacts
}

/// The merged list sorted ascending by case-insensitive name. The sort is
/// stable, so equal names keep their merge order, and re-sorting an
/// already sorted list is a no-op.
pub fn sorted_contacts(own: &[Contact], roster: &[User]) -> Vec<Contact> {
    let mut contacts = contacts_with_users(own, roster);
    contacts.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    contacts
}

/// Uppercased first letter of a contact name, used for section headers.
/// Uses Unicode uppercasing so grouping agrees with the sort's case
/// folding for non-ASCII initials.
pub fn first_letter(contact: &Contact) -> char {
    contact
        .name
        .chars()
        .next()
        .and_then(|c| c.to_uppercase().next())
        .unwrap_or('#')
}

/// Whether the entry at `index` opens a new alphabetical section, i.e.
/// its first letter differs from the previous entry's. Index 0 always
/// starts a section. Grouping is derived lazily from the flat sorted
/// sequence; no group structure is stored.
pub fn starts_new_letter(sorted: &[Contact], index: usize) -> bool {
    if index == 0 {
        return true;
    }
    first_letter(&sorted[index]) != first_letter(&sorted[index - 1])
}

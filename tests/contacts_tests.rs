use join::contacts::{ContactDraft, ContactsView, OverlayMode};
use join::db::schema;
use join::error::JoinError;
use join::layout::LayoutMode;
use join::model::*;
use join::ops::user_ops;
use join::store::UsersService;

fn setup() -> (UsersService, User) {
    let service = UsersService::new(schema::test_connection());
    let bea = user_ops::sign_up(&service, "bea-uid", "Bea", "bea@example.com").unwrap();
    user_ops::sign_up(&service, "u1", "Anna", "anna@example.com").unwrap();
    user_ops::sign_up(&service, "u2", "Carl", "carl@example.com").unwrap();
    (service, bea)
}

fn view_for(service: &UsersService, user: &User) -> ContactsView {
    ContactsView::activate(service, &user.uid).unwrap()
}

// ==========================================================================
// MERGED, SORTED VIEW
// ==========================================================================

#[test]
fn view_merges_roster_into_own_contacts() {
    let (service, bea) = setup();
    let view = view_for(&service, &bea);

    // Own self-contact plus the two other registered users.
    let names: Vec<&str> = view
        .sorted_contacts()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, ["Anna", "Bea", "Carl"]);
}

#[test]
fn roster_derived_contacts_carry_no_email() {
    let (service, bea) = setup();
    let view = view_for(&service, &bea);

    for contact in view.sorted_contacts() {
        if contact.uid == bea.uid {
            assert_eq!(contact.email.as_deref(), Some("bea@example.com"));
        } else {
            assert_eq!(contact.email, None, "{} leaked an email", contact.name);
        }
    }
}

#[test]
fn view_never_duplicates_a_user_identity() {
    let (service, bea) = setup();
    let view = view_for(&service, &bea);

    let contacts = view.sorted_contacts();
    for (i, a) in contacts.iter().enumerate() {
        for b in &contacts[i + 1..] {
            assert_ne!(a.uid, b.uid);
        }
    }
}

// ==========================================================================
// SELECTION
// ==========================================================================

#[test]
fn selecting_twice_returns_to_no_selection() {
    let (service, bea) = setup();
    let mut view = view_for(&service, &bea);

    view.select_contact(2);
    assert_eq!(view.selection(), Some(2));
    view.select_contact(2);
    assert_eq!(view.selection(), None);
}

#[test]
fn selecting_another_index_replaces_selection() {
    let (service, bea) = setup();
    let mut view = view_for(&service, &bea);

    view.select_contact(0);
    view.select_contact(1);
    assert_eq!(view.selection(), Some(1));
}

#[test]
fn out_of_range_selection_is_ignored() {
    let (service, bea) = setup();
    let mut view = view_for(&service, &bea);

    view.select_contact(99);
    assert_eq!(view.selection(), None);
}

#[test]
fn unselect_also_closes_edit_menu() {
    let (service, bea) = setup();
    let mut view = view_for(&service, &bea);

    view.select_contact(1);
    view.toggle_edit_menu(Some(true));
    assert!(view.edit_menu_open());

    view.unselect_contact();
    assert_eq!(view.selection(), None);
    assert!(!view.edit_menu_open());
}

#[test]
fn selection_follows_contact_across_recompute() {
    let (service, bea) = setup();
    let mut view = view_for(&service, &bea);

    // Select Carl (index 2), then a new user sorts in front of him.
    view.select_contact(2);
    user_ops::sign_up(&service, "u3", "Berta", "berta@example.com").unwrap();
    assert!(view.poll(&service).unwrap());

    assert_eq!(view.selected_contact().unwrap().name, "Carl");
    assert_eq!(view.selection(), Some(3));
}

// ==========================================================================
// SUBMIT / DELETE
// ==========================================================================

#[test]
fn add_mode_grows_owned_list_by_one() {
    let (service, bea) = setup();
    let mut view = view_for(&service, &bea);
    let before = view.current_user().contacts.len();

    view.open_overlay(OverlayMode::Add);
    view.submit_contact(
        &service,
        &ContactDraft {
            name: "Dora".into(),
            email: None,
            phone: Some("555-1234".into()),
        },
    )
    .unwrap();

    assert_eq!(view.current_user().contacts.len(), before + 1);
    assert_eq!(view.overlay(), None);
    let names: Vec<&str> = view
        .sorted_contacts()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, ["Anna", "Bea", "Carl", "Dora"]);
}

#[test]
fn edit_mode_keeps_owned_list_length() {
    let (service, bea) = setup();
    let mut view = view_for(&service, &bea);

    // Add an owned contact, then edit it.
    view.open_overlay(OverlayMode::Add);
    view.submit_contact(
        &service,
        &ContactDraft {
            name: "Dora".into(),
            email: None,
            phone: None,
        },
    )
    .unwrap();
    let before = view.current_user().contacts.len();

    let index = view
        .sorted_contacts()
        .iter()
        .position(|c| c.name == "Dora")
        .unwrap();
    view.select_contact(index);
    view.open_overlay(OverlayMode::Edit);
    view.submit_contact(
        &service,
        &ContactDraft {
            name: "Dorothea".into(),
            email: Some("dora@example.com".into()),
            phone: None,
        },
    )
    .unwrap();

    assert_eq!(view.current_user().contacts.len(), before);
    assert!(view
        .current_user()
        .contacts
        .iter()
        .any(|c| c.name == "Dorothea"));
}

#[test]
fn edit_writes_back_to_the_persisted_record() {
    let (service, bea) = setup();
    let mut view = view_for(&service, &bea);

    view.open_overlay(OverlayMode::Add);
    view.submit_contact(
        &service,
        &ContactDraft {
            name: "Dora".into(),
            email: None,
            phone: None,
        },
    )
    .unwrap();
    let index = view
        .sorted_contacts()
        .iter()
        .position(|c| c.name == "Dora")
        .unwrap();
    view.select_contact(index);
    view.open_overlay(OverlayMode::Edit);
    view.submit_contact(
        &service,
        &ContactDraft {
            name: "Dorothea".into(),
            email: None,
            phone: None,
        },
    )
    .unwrap();

    // Not just the derived view: the store has the edit too.
    let stored = service.get_user_by_uid(&bea.uid).unwrap();
    assert!(stored.contacts.iter().any(|c| c.name == "Dorothea"));
    assert!(!stored.contacts.iter().any(|c| c.name == "Dora"));
}

#[test]
fn edit_keeps_uid_and_color() {
    let (service, bea) = setup();
    let mut view = view_for(&service, &bea);

    view.open_overlay(OverlayMode::Add);
    view.submit_contact(
        &service,
        &ContactDraft {
            name: "Dora".into(),
            email: None,
            phone: None,
        },
    )
    .unwrap();
    let original = view
        .sorted_contacts()
        .iter()
        .find(|c| c.name == "Dora")
        .cloned()
        .unwrap();

    let index = view
        .sorted_contacts()
        .iter()
        .position(|c| c.name == "Dora")
        .unwrap();
    view.select_contact(index);
    view.open_overlay(OverlayMode::Edit);
    view.submit_contact(
        &service,
        &ContactDraft {
            name: "Dorothea".into(),
            email: None,
            phone: None,
        },
    )
    .unwrap();

    let edited = view
        .sorted_contacts()
        .iter()
        .find(|c| c.name == "Dorothea")
        .unwrap();
    assert_eq!(edited.uid, original.uid);
    assert_eq!(edited.color, original.color);
}

#[test]
fn submit_without_overlay_fails() {
    let (service, bea) = setup();
    let mut view = view_for(&service, &bea);

    let result = view.submit_contact(
        &service,
        &ContactDraft {
            name: "Dora".into(),
            email: None,
            phone: None,
        },
    );
    assert!(matches!(result, Err(JoinError::NoOverlay)));
}

#[test]
fn delete_removes_owned_contact_and_clears_selection() {
    let (service, bea) = setup();
    let mut view = view_for(&service, &bea);

    view.open_overlay(OverlayMode::Add);
    view.submit_contact(
        &service,
        &ContactDraft {
            name: "Dora".into(),
            email: None,
            phone: None,
        },
    )
    .unwrap();
    let index = view
        .sorted_contacts()
        .iter()
        .position(|c| c.name == "Dora")
        .unwrap();
    view.select_contact(index);

    view.delete_selected_contact(&service).unwrap();
    assert_eq!(view.selection(), None);
    assert!(!view.sorted_contacts().iter().any(|c| c.name == "Dora"));
    let stored = service.get_user_by_uid(&bea.uid).unwrap();
    assert!(!stored.contacts.iter().any(|c| c.name == "Dora"));
}

#[test]
fn deleting_self_contact_is_rejected() {
    let (service, bea) = setup();
    let mut view = view_for(&service, &bea);

    let index = view
        .sorted_contacts()
        .iter()
        .position(|c| c.uid == bea.uid)
        .unwrap();
    view.select_contact(index);

    let result = view.delete_selected_contact(&service);
    assert!(matches!(result, Err(JoinError::CannotDeleteSelf)));
}

#[test]
fn deleting_roster_derived_contact_is_rejected() {
    let (service, bea) = setup();
    let mut view = view_for(&service, &bea);

    // Anna comes from the roster, not from Bea's owned list.
    let index = view
        .sorted_contacts()
        .iter()
        .position(|c| c.name == "Anna")
        .unwrap();
    view.select_contact(index);

    let result = view.delete_selected_contact(&service);
    assert!(matches!(result, Err(JoinError::NotFound { .. })));
}

#[test]
fn delete_without_selection_fails() {
    let (service, bea) = setup();
    let mut view = view_for(&service, &bea);
    assert!(matches!(
        view.delete_selected_contact(&service),
        Err(JoinError::NoSelection)
    ));
}

// ==========================================================================
// SUBSCRIPTION / RESYNC
// ==========================================================================

#[test]
fn poll_picks_up_new_roster_members() {
    let (service, bea) = setup();
    let mut view = view_for(&service, &bea);
    assert_eq!(view.sorted_contacts().len(), 3);

    user_ops::sign_up(&service, "u3", "Dana", "dana@example.com").unwrap();
    assert!(view.poll(&service).unwrap());
    assert_eq!(view.sorted_contacts().len(), 4);
}

#[test]
fn poll_picks_up_a_roster_rename() {
    let (service, bea) = setup();
    let mut view = view_for(&service, &bea);

    user_ops::rename_user(&service, &Uid::new("u1"), "Annika").unwrap();
    assert!(view.poll(&service).unwrap());
    let names: Vec<&str> = view
        .sorted_contacts()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, ["Annika", "Bea", "Carl"]);
}

#[test]
fn poll_without_changes_does_nothing() {
    let (service, bea) = setup();
    let mut view = view_for(&service, &bea);
    assert!(!view.poll(&service).unwrap());
}

// ==========================================================================
// RESPONSIVE LAYOUT
// ==========================================================================

#[test]
fn viewer_width_drives_layout_mode() {
    let (service, bea) = setup();
    let mut view = view_for(&service, &bea);

    view.set_viewer_width(697);
    assert_eq!(view.layout(), LayoutMode::Mobile);
    view.set_viewer_width(698);
    assert_eq!(view.layout(), LayoutMode::Desktop);
}

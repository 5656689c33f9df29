use log::debug;

use crate::contacts::merge;
use crate::error::{JoinError, JoinResult};
use crate::layout::LayoutMode;
use crate::model::{Contact, Uid, User};
use crate::ops::contact_ops;
use crate::store::{UsersService, UsersSubscription};

/// Which contact form is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayMode {
    Add,
    Edit,
}

/// Form data for adding or editing a contact.
#[derive(Debug, Clone)]
pub struct ContactDraft {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// The contacts screen state for one active user: the sorted derived view
/// over their owned contacts and the roster, plus selection, overlay and
/// responsive state.
///
/// The owned contact list (inside the persisted user record) is the
/// source of truth; the sorted view is recomputed from it and never
/// edited directly. Mutations address owned contacts by uid.
pub struct ContactsView {
    current_user: User,
    users: Vec<User>,
    sorted: Vec<Contact>,
    selection: Option<usize>,
    overlay: Option<OverlayMode>,
    edit_menu_open: bool,
    layout: LayoutMode,
    subscription: UsersSubscription,
}

impl ContactsView {
    /// Load the active user, register the view's single roster
    /// subscription and compute the initial sorted view. The subscription
    /// is released when the view is dropped.
    pub fn activate(service: &UsersService, uid: &Uid) -> JoinResult<Self> {
        let subscription = service.subscribe();
        let current_user = service.get_user_by_uid(uid)?;
        let users = service.users()?;
        let sorted = merge::sorted_contacts(&current_user.contacts, &users);
        Ok(Self {
            current_user,
            users,
            sorted,
            selection: None,
            overlay: None,
            edit_menu_open: false,
            layout: LayoutMode::Desktop,
            subscription,
        })
    }

    pub fn current_user(&self) -> &User {
        &self.current_user
    }

    pub fn sorted_contacts(&self) -> &[Contact] {
        &self.sorted
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn selected_contact(&self) -> Option<&Contact> {
        self.selection.and_then(|i| self.sorted.get(i))
    }

    pub fn overlay(&self) -> Option<OverlayMode> {
        self.overlay
    }

    pub fn edit_menu_open(&self) -> bool {
        self.edit_menu_open
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    /// Re-read roster and current user if the subscription observed a
    /// change since the last poll. Returns true if the view refreshed.
    pub fn poll(&mut self, service: &UsersService) -> JoinResult<bool> {
        if self.subscription.poll() {
            self.refresh(service)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Re-read store state and recompute the sorted view. The selection
    /// follows the selected contact's uid into the new sequence and is
    /// cleared if that contact disappeared.
    pub fn refresh(&mut self, service: &UsersService) -> JoinResult<()> {
        self.current_user = service.get_user_by_uid(&self.current_user.uid)?;
        self.users = service.users()?;
        self.recompute();
        Ok(())
    }

    fn recompute(&mut self) {
        let selected_uid = self.selected_contact().map(|c| c.uid.clone());
        self.sorted = merge::sorted_contacts(&self.current_user.contacts, &self.users);
        self.selection = selected_uid
            .and_then(|uid| self.sorted.iter().position(|c| c.uid == uid));
        if self.selection.is_none() {
            self.edit_menu_open = false;
        }
    }

    /// Toggle selection: selecting the already-selected index clears it,
    /// any other valid index replaces it. Out-of-range indices are
    /// ignored.
    pub fn select_contact(&mut self, index: usize) {
        if index >= self.sorted.len() {
            return;
        }
        self.selection = if self.selection == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    /// Clear the selection and close the responsive edit menu; the detail
    /// view and its action menu close together.
    pub fn unselect_contact(&mut self) {
        self.selection = None;
        self.edit_menu_open = false;
    }

    pub fn open_overlay(&mut self, mode: OverlayMode) {
        self.overlay = Some(mode);
    }

    pub fn cancel_overlay(&mut self) {
        self.overlay = None;
    }

    /// Submit the contact form according to the open overlay mode. Add
    /// appends to the owned list; Edit writes back to the owned contact
    /// with the selected entry's uid. Either way the record is persisted,
    /// the sorted view recomputed and the overlay closed.
    pub fn submit_contact(&mut self, service: &UsersService, draft: &ContactDraft) -> JoinResult<()> {
        let mode = self.overlay.ok_or(JoinError::NoOverlay)?;
        match mode {
            OverlayMode::Add => {
                contact_ops::add_contact(
                    service,
                    &self.current_user.uid,
                    &draft.name,
                    draft.email.as_deref(),
                    draft.phone.as_deref(),
                )?;
            }
            OverlayMode::Edit => {
                let uid = self
                    .selected_contact()
                    .map(|c| c.uid.clone())
                    .ok_or(JoinError::NoSelection)?;
                contact_ops::edit_contact(
                    service,
                    &self.current_user.uid,
                    &uid,
                    &draft.name,
                    draft.email.as_deref(),
                    draft.phone.as_deref(),
                )?;
            }
        }
        self.refresh(service)?;
        self.overlay = None;
        debug!("contact form submitted ({:?})", mode);
        Ok(())
    }

    /// Delete the selected contact from the owned list. Roster-derived
    /// entries are not owned and cannot be deleted; neither can the
    /// user's own self-contact.
    pub fn delete_selected_contact(&mut self, service: &UsersService) -> JoinResult<()> {
        let uid = self
            .selected_contact()
            .map(|c| c.uid.clone())
            .ok_or(JoinError::NoSelection)?;
        contact_ops::delete_contact(service, &self.current_user.uid, &uid)?;
        self.refresh(service)?;
        self.unselect_contact();
        Ok(())
    }

    /// Show, hide or flip the responsive edit menu.
    pub fn toggle_edit_menu(&mut self, show: Option<bool>) {
        self.edit_menu_open = show.unwrap_or(!self.edit_menu_open);
    }

    /// Apply the layout policy for a freshly measured viewer width.
    /// Called once after the first layout pass and on every resize.
    pub fn set_viewer_width(&mut self, width: u32) {
        self.layout = LayoutMode::from_width(width);
    }
}

pub mod merge;
pub mod view;

pub use view::{ContactDraft, ContactsView, OverlayMode};

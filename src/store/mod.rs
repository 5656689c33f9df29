pub mod users;

pub use users::{UsersService, UsersSubscription};

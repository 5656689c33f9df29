pub mod ids;
pub mod palette;
pub mod person;
pub mod task;

// Re-exports for convenience
pub use ids::Uid;
pub use palette::{color_for, USER_COLORS};
pub use person::{Contact, User};
pub use task::{Category, Priority, Subtask, Task, TaskStatus};

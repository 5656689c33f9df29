pub mod schema;
pub mod task_repo;
pub mod user_repo;

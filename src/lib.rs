#![allow(clippy::too_many_arguments, clippy::type_complexity)]

pub mod error;
pub mod validation;
pub mod logging;
pub mod model;
pub mod db;
pub mod store;
pub mod contacts;
pub mod layout;
pub mod ops;
pub mod queries;
pub mod cli;

pub mod error;
pub mod page;
pub mod repo;
pub mod service;

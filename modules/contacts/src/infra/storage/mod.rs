pub mod memory_repo;
pub mod seed;

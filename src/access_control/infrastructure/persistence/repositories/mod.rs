pub mod access_control_entry_repository;
pub mod in_memory;
pub mod postgres;
pub mod restriction_cache_repository;
pub mod role_assignment_repository;

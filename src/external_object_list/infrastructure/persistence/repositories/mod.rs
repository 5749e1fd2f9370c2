pub mod object_repository;
pub mod postgres;

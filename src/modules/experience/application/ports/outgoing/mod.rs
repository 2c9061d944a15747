pub mod experience_query;
pub mod experience_repository;

pub mod certificate_query;
pub mod certificate_repository;

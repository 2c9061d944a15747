mod certificate_query_postgres;
mod certificate_repository_postgres;
pub mod sea_orm_entity;

pub use certificate_query_postgres::CertificateQueryPostgres;
pub use certificate_repository_postgres::CertificateRepositoryPostgres;

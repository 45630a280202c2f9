mod catalog_repo;
#[cfg(test)]
mod mock;
mod repo_error;

pub use catalog_repo::*;
#[cfg(test)]
pub use mock::MockCatalogRepository;
pub use repo_error::RepositoryError;

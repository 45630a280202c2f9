mod listing;
mod product;
mod publication;
mod solution;

pub use listing::RepositoryListing;
pub use product::Product;
pub use publication::Publication;
pub use solution::Solution;

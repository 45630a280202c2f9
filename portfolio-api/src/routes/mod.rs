pub(crate) mod error;
pub(crate) mod listings;
pub(crate) mod products;
pub(crate) mod publications;
pub(crate) mod search;
pub(crate) mod solutions;
#[cfg(test)]
pub(crate) mod test_support;

pub(crate) use error::ApiError;

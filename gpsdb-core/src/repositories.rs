// Low-level database access traits.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait AddressRepo {
    /// Fails with [`Error::AlreadyExists`] if the address text is already stored.
    fn create_address(&self, record: &AddressRecord) -> Result<()>;

    // Unordered
    fn all_addresses(&self) -> Result<Vec<AddressRecord>>;
    fn count_addresses(&self) -> Result<usize>;

    /// Deleting a non-existent record is not an error.
    fn delete_address(&self, id: &str) -> Result<()>;
}

use super::prelude::*;

pub fn load_addresses<R: AddressRepo>(repo: &R) -> Result<Vec<AddressRecord>> {
    Ok(repo.all_addresses()?)
}

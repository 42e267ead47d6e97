use super::prelude::*;

pub fn delete_address<R: AddressRepo>(repo: &R, id: &str) -> Result<()> {
    repo.delete_address(id)?;
    log::info!("Deleted address record {id}");
    Ok(())
}

use super::prelude::*;

pub fn delete_activity<R: ActivityRepo>(repo: &R, id: &str) -> Result<()> {
    repo.delete_activity(id)?;
    log::info!("Deleted activity {id}");
    Ok(())
}

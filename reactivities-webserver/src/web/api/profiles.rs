use super::*;

#[get("/profiles/<username>")]
pub fn get_profile(
    db: &State<sqlite::Connections>,
    _account: Account,
    username: &str,
) -> Result<json::Profile> {
    let profile = usecases::get_profile(&db.shared()?, username)?;
    Ok(Json(to_json::profile(profile)))
}

#[put("/profiles", format = "application/json", data = "<update>")]
pub fn put_profile(
    db: &State<sqlite::Connections>,
    account: Account,
    update: JsonResult<json::UpdateProfile>,
) -> Result<()> {
    let update = from_json::profile_update(update?.into_inner());
    flows::edit_profile(db, account.username(), update)?;
    Ok(Json(()))
}

use super::*;

#[get("/activities")]
pub fn get_activities(
    db: &State<sqlite::Connections>,
    _account: Account,
) -> Result<Vec<json::Activity>> {
    let activities = usecases::list_activities(&db.shared()?)?;
    Ok(Json(activities.into_iter().map(to_json::activity).collect()))
}

#[get("/activities/<id>")]
pub fn get_activity(
    db: &State<sqlite::Connections>,
    _account: Account,
    id: &str,
) -> Result<json::Activity> {
    let details = usecases::load_activity_details(&db.shared()?, id)?;
    Ok(Json(to_json::activity(details)))
}

#[post("/activities", format = "application/json", data = "<activity>")]
pub fn post_activity(
    db: &State<sqlite::Connections>,
    account: Account,
    activity: JsonResult<json::NewActivity>,
) -> Result<String> {
    let new_activity = from_json::new_activity(activity?.into_inner());
    let activity = flows::create_activity(db, account.username(), new_activity)?;
    Ok(Json(activity.id.into()))
}

#[put("/activities/<id>", format = "application/json", data = "<update>")]
pub fn put_activity(
    db: &State<sqlite::Connections>,
    host: Host,
    id: &str,
    update: JsonResult<json::UpdateActivity>,
) -> Result<()> {
    let update = from_json::update_activity(update?.into_inner());
    flows::update_activity(db, id, update)?;
    debug!("Activity {id} updated by '{}'", host.username());
    Ok(Json(()))
}

#[delete("/activities/<id>")]
pub fn delete_activity(db: &State<sqlite::Connections>, host: Host, id: &str) -> Result<()> {
    flows::delete_activity(db, id)?;
    info!("Activity {id} deleted by '{}'", host.username());
    Ok(Json(()))
}

#[post("/activities/<id>/attend")]
pub fn post_attend(db: &State<sqlite::Connections>, account: Account, id: &str) -> Result<()> {
    flows::attend_activity(db, id, account.username())?;
    Ok(Json(()))
}

#[delete("/activities/<id>/attend")]
pub fn delete_attend(db: &State<sqlite::Connections>, account: Account, id: &str) -> Result<()> {
    flows::unattend_activity(db, id, account.username())?;
    Ok(Json(()))
}

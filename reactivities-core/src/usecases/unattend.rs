use super::prelude::*;

pub fn unattend_activity<R>(repo: &R, activity_id: &str, username: &str) -> Result<()>
where
    R: ActivityRepo + AttendanceRepo,
{
    // Fails if the activity doesn't exist
    repo.get_activity(activity_id)?;
    let attendance = repo
        .try_get_attendance(activity_id, username)?
        .ok_or(Error::NotAttending)?;
    if attendance.is_host {
        return Err(Error::HostCannotUnattend);
    }
    repo.remove_attendance(activity_id, username)?;
    Ok(())
}

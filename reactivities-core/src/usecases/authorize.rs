use super::prelude::*;

/// Grants access only if the given user hosts the activity.
///
/// Every failure, including a missing activity, is reported
/// as [`Error::Forbidden`]. Nothing is cached, the host is
/// read from the database on every call.
pub fn authorize_host<R>(repo: &R, activity_id: &str, username: &str) -> Result<()>
where
    R: ActivityRepo + AttendanceRepo,
{
    if repo.try_get_activity(activity_id)?.is_none() {
        log::debug!("Host check for missing activity {activity_id}");
        return Err(Error::Forbidden);
    }
    match repo.try_get_host_of_activity(activity_id)? {
        Some(host) if host.username == username => Ok(()),
        _ => Err(Error::Forbidden),
    }
}

use super::prelude::*;
use crate::repositories::Error as RepoError;

pub fn attend_activity<R>(repo: &R, activity_id: &str, username: &str) -> Result<Attendance>
where
    R: ActivityRepo + AttendanceRepo,
{
    let activity = repo.get_activity(activity_id)?;
    if repo.try_get_attendance(activity_id, username)?.is_some() {
        return Err(Error::AlreadyAttending);
    }
    let attendance = Attendance {
        activity_id: activity.id,
        username: username.to_owned(),
        is_host: false,
        joined_at: Timestamp::now(),
    };
    repo.add_attendance(&attendance).map_err(|err| match err {
        // Lost a race against a concurrent request
        RepoError::AlreadyExists => Error::AlreadyAttending,
        err => err.into(),
    })?;
    Ok(attendance)
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::*, *},
        *,
    };

    #[test]
    fn attend_an_activity() {
        let db = MockDb::default();
        add_user(&db, "bob");
        add_user(&db, "tom");
        let id = add_hosted_activity(&db, "bob");
        let attendance = attend_activity(&db, &id, "tom").unwrap();
        assert!(!attendance.is_host);
        assert_eq!(2, db.load_attendances_of_activity(&id).unwrap().len());
    }

    #[test]
    fn attending_twice_is_rejected() {
        let db = MockDb::default();
        add_user(&db, "bob");
        add_user(&db, "tom");
        let id = add_hosted_activity(&db, "bob");
        assert!(attend_activity(&db, &id, "tom").is_ok());
        assert!(matches!(
            attend_activity(&db, &id, "tom"),
            Err(Error::AlreadyAttending)
        ));
        assert!(matches!(
            attend_activity(&db, &id, "bob"),
            Err(Error::AlreadyAttending)
        ));
        assert_eq!(2, db.load_attendances_of_activity(&id).unwrap().len());
    }

    #[test]
    fn attend_missing_activity() {
        let db = MockDb::default();
        add_user(&db, "tom");
        assert!(matches!(
            attend_activity(&db, "missing", "tom"),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }
}

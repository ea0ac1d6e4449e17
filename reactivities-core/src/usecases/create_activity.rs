use super::prelude::*;
use crate::util::validate::Validate;

#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct NewActivity {
    /// Chosen by the client or generated if missing
    pub id          : Option<String>,
    pub title       : String,
    pub description : String,
    pub category    : String,
    pub date        : Timestamp,
    pub city        : String,
    pub venue       : String,
}

/// Create a new activity that is hosted by the given user.
pub fn create_activity<R>(repo: &R, host_username: &str, new: NewActivity) -> Result<Activity>
where
    R: UserRepo + ActivityRepo + AttendanceRepo,
{
    let host = repo
        .try_get_user_by_username(host_username)?
        .ok_or(Error::Unauthorized)?;
    let NewActivity {
        id,
        title,
        description,
        category,
        date,
        city,
        venue,
    } = new;
    let activity = Activity {
        id: id.map(Id::from).unwrap_or_else(Id::new),
        title,
        description,
        category,
        date,
        city,
        venue,
    };
    activity.validate()?;
    if repo.try_get_activity(activity.id.as_ref())?.is_some() {
        return Err(Error::ActivityExists);
    }
    log::debug!("Creating new activity {}", activity.id);
    repo.create_activity(&activity)?;
    let attendance = Attendance {
        activity_id: activity.id.clone(),
        username: host.username,
        is_host: true,
        joined_at: Timestamp::now(),
    };
    repo.add_attendance(&attendance)?;
    Ok(activity)
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::*, *},
        *,
    };

    fn new_activity(id: Option<&str>) -> NewActivity {
        NewActivity {
            id: id.map(Into::into),
            title: "Future activity".into(),
            description: "Activity in 2 months".into(),
            category: "culture".into(),
            date: Timestamp::from_millis(1_600_000_000_000),
            city: "Paris".into(),
            venue: "Louvre".into(),
        }
    }

    #[test]
    fn create_activity_with_host() {
        let db = MockDb::default();
        add_user(&db, "bob");
        let activity = create_activity(&db, "bob", new_activity(None)).unwrap();
        assert!(activity.id.is_valid());
        let stored = db.get_activity(activity.id.as_ref()).unwrap();
        assert_eq!(activity, stored);
        let host = db
            .try_get_host_of_activity(activity.id.as_ref())
            .unwrap()
            .unwrap();
        assert_eq!("bob", host.username);
    }

    #[test]
    fn create_activity_with_client_id() {
        let db = MockDb::default();
        add_user(&db, "bob");
        let activity = create_activity(&db, "bob", new_activity(Some("a1"))).unwrap();
        assert_eq!("a1", activity.id.as_str());
        assert!(matches!(
            create_activity(&db, "bob", new_activity(Some("a1"))),
            Err(Error::ActivityExists)
        ));
    }

    #[test]
    fn create_invalid_activity() {
        let db = MockDb::default();
        add_user(&db, "bob");
        let mut new = new_activity(None);
        new.city = "".into();
        assert!(matches!(
            create_activity(&db, "bob", new),
            Err(Error::Activity(_))
        ));
        assert!(db.activities.borrow().is_empty());
        assert!(db.attendances.borrow().is_empty());
    }

    #[test]
    fn create_activity_as_unknown_user() {
        let db = MockDb::default();
        assert!(matches!(
            create_activity(&db, "ghost", new_activity(None)),
            Err(Error::Unauthorized)
        ));
    }
}

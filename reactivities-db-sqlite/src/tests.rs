use super::*;
use reactivities_core::{
    entities::*,
    repositories::{self as repo, *},
};
use reactivities_entities::builders::*;

fn setup() -> Connections {
    let connections = Connections::init(":memory:", 1).unwrap();
    run_embedded_database_migrations(connections.exclusive().unwrap()).unwrap();
    connections
}

fn new_user(username: &str) -> User {
    User::build()
        .username(username)
        .display_name(&username.to_uppercase())
        .email(&format!("{username}@test.com"))
        .finish()
}

fn attendance(activity: &Activity, username: &str, is_host: bool, joined_at: i64) -> Attendance {
    Attendance {
        activity_id: activity.id.clone(),
        username: username.into(),
        is_host,
        joined_at: Timestamp::from_millis(joined_at),
    }
}

#[test]
fn migrations_are_applied_only_once() {
    let connections = setup();
    connections
        .exclusive()
        .unwrap()
        .create_user(&new_user("bob"))
        .unwrap();
    run_embedded_database_migrations(connections.exclusive().unwrap()).unwrap();
    assert_eq!(1, connections.shared().unwrap().count_users().unwrap());
}

#[test]
fn create_and_update_user() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    let mut bob = new_user("bob");
    db.create_user(&bob).unwrap();
    assert_eq!(1, db.count_users().unwrap());
    assert!(matches!(
        db.create_user(&bob),
        Err(repo::Error::AlreadyExists)
    ));

    bob.bio = Some("Hi".into());
    db.update_user(&bob).unwrap();
    assert_eq!(bob, db.get_user_by_username("bob").unwrap());

    let email = "bob@test.com".parse().unwrap();
    assert_eq!(Some(bob), db.try_get_user_by_email(&email).unwrap());
    assert!(db.try_get_user_by_username("tom").unwrap().is_none());
}

#[test]
fn activities_are_ordered_by_date() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    let later = Activity::build()
        .title("later")
        .date(Timestamp::from_millis(2_000))
        .finish();
    let earlier = Activity::build()
        .title("earlier")
        .date(Timestamp::from_millis(1_000))
        .finish();
    db.create_activity(&later).unwrap();
    db.create_activity(&earlier).unwrap();
    let titles: Vec<_> = db
        .all_activities_chronologically()
        .unwrap()
        .into_iter()
        .map(|a| a.title)
        .collect();
    assert_eq!(vec!["earlier", "later"], titles);
}

#[test]
fn update_missing_activity() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    let activity = Activity::build().finish();
    assert!(matches!(
        db.update_activity(&activity),
        Err(repo::Error::NotFound)
    ));
    assert!(matches!(
        db.delete_activity(activity.id.as_str()),
        Err(repo::Error::NotFound)
    ));
}

#[test]
fn delete_activity_with_attendances_and_comments() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    db.create_user(&new_user("bob")).unwrap();
    let activity = Activity::build().finish();
    db.create_activity(&activity).unwrap();
    db.add_attendance(&attendance(&activity, "bob", true, 1))
        .unwrap();
    db.create_comment(&Comment {
        id: Id::new(),
        activity_id: activity.id.clone(),
        author: "bob".into(),
        body: "Hello".into(),
        created_at: Timestamp::from_millis(5),
    })
    .unwrap();

    db.delete_activity(activity.id.as_str()).unwrap();
    assert!(db.try_get_activity(activity.id.as_str()).unwrap().is_none());
    assert!(db
        .try_get_attendance(activity.id.as_str(), "bob")
        .unwrap()
        .is_none());
    // The activity is re-created to check that no orphans remain
    db.create_activity(&activity).unwrap();
    assert!(db
        .load_comments_of_activity(activity.id.as_str())
        .unwrap()
        .is_empty());
    assert!(db
        .load_attendances_of_activity(activity.id.as_str())
        .unwrap()
        .is_empty());
}

#[test]
fn attendances() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    db.create_user(&new_user("bob")).unwrap();
    db.create_user(&new_user("tom")).unwrap();
    let activity = Activity::build().finish();
    db.create_activity(&activity).unwrap();
    db.add_attendance(&attendance(&activity, "tom", false, 20))
        .unwrap();
    db.add_attendance(&attendance(&activity, "bob", true, 10))
        .unwrap();
    assert!(matches!(
        db.add_attendance(&attendance(&activity, "bob", false, 30)),
        Err(repo::Error::AlreadyExists)
    ));

    let attendances = db
        .load_attendances_of_activity(activity.id.as_str())
        .unwrap();
    assert_eq!(2, attendances.len());
    assert_eq!("bob", attendances[0].username);
    assert!(attendances[0].is_host);
    assert_eq!(
        "bob",
        db.try_get_host_of_activity(activity.id.as_str())
            .unwrap()
            .unwrap()
            .username
    );

    db.remove_attendance(activity.id.as_str(), "tom").unwrap();
    assert!(matches!(
        db.remove_attendance(activity.id.as_str(), "tom"),
        Err(repo::Error::NotFound)
    ));
}

#[test]
fn attendance_of_unknown_user() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    let activity = Activity::build().finish();
    db.create_activity(&activity).unwrap();
    assert!(matches!(
        db.add_attendance(&attendance(&activity, "nobody", false, 1)),
        Err(repo::Error::NotFound)
    ));
}

#[test]
fn switch_main_photo() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    db.create_user(&new_user("bob")).unwrap();
    for (id, is_main) in [("a", true), ("b", false)] {
        db.add_photo(&Photo {
            id: id.into(),
            owner: "bob".into(),
            url: format!("http://localhost/photos/{id}.jpg").parse().unwrap(),
            is_main,
        })
        .unwrap();
    }
    assert_eq!(
        "a",
        db.try_get_main_photo_of_user("bob")
            .unwrap()
            .unwrap()
            .id
            .as_str()
    );
    db.set_main_photo("bob", "b").unwrap();
    let photos = db.load_photos_of_user("bob").unwrap();
    assert_eq!(2, photos.len());
    assert!(!photos[0].is_main);
    assert!(photos[1].is_main);
    assert!(matches!(
        db.set_main_photo("bob", "x"),
        Err(repo::Error::NotFound)
    ));

    db.delete_photo("a").unwrap();
    assert_eq!(1, db.load_photos_of_user("bob").unwrap().len());
}

#[test]
fn comments_are_ordered_by_creation() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    db.create_user(&new_user("bob")).unwrap();
    let activity = Activity::build().finish();
    db.create_activity(&activity).unwrap();
    for (body, created_at) in [("second", 20), ("first", 10)] {
        db.create_comment(&Comment {
            id: Id::new(),
            activity_id: activity.id.clone(),
            author: "bob".into(),
            body: body.into(),
            created_at: Timestamp::from_millis(created_at),
        })
        .unwrap();
    }
    let bodies: Vec<_> = db
        .load_comments_of_activity(activity.id.as_str())
        .unwrap()
        .into_iter()
        .map(|c| c.body)
        .collect();
    assert_eq!(vec!["first", "second"], bodies);
}

#[test]
fn rollback_failed_transaction() {
    let connections = setup();
    let result = connections
        .exclusive()
        .unwrap()
        .transaction(|conn| {
            conn.create_user(&new_user("bob"))?;
            Err::<(), _>(reactivities_core::usecases::Error::Forbidden)
        });
    assert!(matches!(
        result,
        Err(reactivities_core::usecases::Error::Forbidden)
    ));
    let db = connections.shared().unwrap();
    assert_eq!(0, db.count_users().unwrap());
}

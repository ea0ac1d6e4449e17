use super::{prelude::*, user_image};
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct Profile {
    pub username: String,
    pub display_name: String,
    pub bio: Option<String>,
    pub image: Option<Url>,
    pub photos: Vec<Photo>,
}

#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub display_name: String,
    pub bio: Option<String>,
}

pub fn get_profile<R>(repo: &R, username: &str) -> Result<Profile>
where
    R: UserRepo + PhotoRepo,
{
    let User {
        username,
        display_name,
        bio,
        ..
    } = repo.get_user_by_username(username)?;
    let image = user_image(repo, &username)?;
    let photos = repo.load_photos_of_user(&username)?;
    Ok(Profile {
        username,
        display_name,
        bio,
        image,
        photos,
    })
}

/// Users can only edit their own profile.
pub fn edit_profile<R: UserRepo>(repo: &R, username: &str, update: ProfileUpdate) -> Result<User> {
    let ProfileUpdate { display_name, bio } = update;
    if !validate::is_valid_display_name(&display_name) {
        return Err(Error::DisplayName);
    }
    let mut user = repo.get_user_by_username(username)?;
    user.display_name = display_name.trim().to_owned();
    user.bio = bio.filter(|bio| !bio.trim().is_empty());
    repo.update_user(&user)?;
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::*, *},
        *,
    };
    use crate::repositories::Error as RepoError;

    #[test]
    fn get_profile_with_photos() {
        let db = MockDb::default();
        add_user(&db, "bob");
        for (id, is_main) in [("p1", false), ("p2", true)] {
            db.add_photo(&Photo {
                id: id.into(),
                owner: "bob".into(),
                url: format!("http://localhost/photos/{id}.jpg").parse().unwrap(),
                is_main,
            })
            .unwrap();
        }
        let profile = get_profile(&db, "bob").unwrap();
        assert_eq!("BOB", profile.display_name);
        assert_eq!(2, profile.photos.len());
        assert_eq!(
            "http://localhost/photos/p2.jpg",
            profile.image.unwrap().as_str()
        );
    }

    #[test]
    fn get_missing_profile() {
        let db = MockDb::default();
        assert!(matches!(
            get_profile(&db, "ghost"),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }

    #[test]
    fn edit_own_profile() {
        let db = MockDb::default();
        add_user(&db, "bob");
        let update = ProfileUpdate {
            display_name: "Bobby".into(),
            bio: Some("Likes pubs".into()),
        };
        edit_profile(&db, "bob", update).unwrap();
        let user = db.get_user_by_username("bob").unwrap();
        assert_eq!("Bobby", user.display_name);
        assert_eq!(Some("Likes pubs".to_string()), user.bio);
    }

    #[test]
    fn display_name_is_required() {
        let db = MockDb::default();
        add_user(&db, "bob");
        let update = ProfileUpdate {
            display_name: "".into(),
            bio: None,
        };
        assert!(matches!(
            edit_profile(&db, "bob", update),
            Err(Error::DisplayName)
        ));
    }
}

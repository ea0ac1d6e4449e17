pub use reactivities_boundary::*;

use crate::core::{prelude as e, usecases};

pub mod from_json {
    //! JSON -> Entity

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the use case parameters both are outside this crate.

    pub fn new_activity(from: NewActivity) -> usecases::NewActivity {
        let NewActivity {
            id,
            title,
            description,
            category,
            date,
            city,
            venue,
        } = from;
        usecases::NewActivity {
            id,
            title,
            description,
            category,
            date: date.into(),
            city,
            venue,
        }
    }

    pub fn update_activity(from: UpdateActivity) -> usecases::UpdateActivity {
        let UpdateActivity {
            title,
            description,
            category,
            date,
            city,
            venue,
        } = from;
        usecases::UpdateActivity {
            title,
            description,
            category,
            date: date.map(Into::into),
            city,
            venue,
        }
    }

    pub fn new_user(from: NewUser) -> usecases::NewUser {
        let NewUser {
            display_name,
            username,
            email,
            password,
        } = from;
        usecases::NewUser {
            display_name,
            username,
            email,
            password,
        }
    }

    pub fn profile_update(from: UpdateProfile) -> usecases::ProfileUpdate {
        let UpdateProfile { display_name, bio } = from;
        usecases::ProfileUpdate { display_name, bio }
    }
}

pub mod to_json {
    //! Entity -> JSON

    use super::*;

    fn image(url: Option<e::Url>) -> Option<String> {
        url.map(Into::into)
    }

    pub fn user(from: usecases::UserWithImage, token: String) -> User {
        let usecases::UserWithImage { user, image: img } = from;
        User {
            display_name: user.display_name,
            token,
            username: user.username,
            image: image(img),
        }
    }

    pub fn attendee(from: usecases::Attendee) -> Attendee {
        let usecases::Attendee {
            username,
            display_name,
            image: img,
            is_host,
        } = from;
        Attendee {
            username,
            display_name,
            image: image(img),
            is_host,
        }
    }

    pub fn comment(from: usecases::CommentDetails) -> Comment {
        let usecases::CommentDetails {
            comment,
            display_name,
            image: img,
        } = from;
        Comment {
            id: comment.id.into(),
            body: comment.body,
            created_at: comment.created_at.into(),
            username: comment.author,
            display_name,
            image: image(img),
        }
    }

    pub fn activity(from: usecases::ActivityDetails) -> Activity {
        let usecases::ActivityDetails {
            activity,
            attendees,
            comments,
        } = from;
        let e::Activity {
            id,
            title,
            description,
            category,
            date,
            city,
            venue,
        } = activity;
        Activity {
            id: id.into(),
            title,
            description,
            category,
            date: date.into(),
            city,
            venue,
            attendees: attendees.into_iter().map(attendee).collect(),
            comments: comments.into_iter().map(comment).collect(),
        }
    }

    pub fn profile(from: usecases::Profile) -> Profile {
        let usecases::Profile {
            username,
            display_name,
            bio,
            image: img,
            photos,
        } = from;
        Profile {
            username,
            display_name,
            bio,
            image: image(img),
            photos: photos.into_iter().map(Into::into).collect(),
        }
    }
}

pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{activity_builder::*, user_builder::*};

pub mod activity_builder {

    use super::*;
    use crate::{activity::*, id::*, time::*};

    #[derive(Debug)]
    pub struct ActivityBuild {
        activity: Activity,
    }

    impl ActivityBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.activity.id = id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.activity.title = title.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.activity.description = desc.into();
            self
        }
        pub fn category(mut self, category: &str) -> Self {
            self.activity.category = category.into();
            self
        }
        pub fn date(mut self, date: Timestamp) -> Self {
            self.activity.date = date;
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.activity.city = city.into();
            self
        }
        pub fn venue(mut self, venue: &str) -> Self {
            self.activity.venue = venue.into();
            self
        }
        pub fn finish(self) -> Activity {
            self.activity
        }
    }

    impl Builder for Activity {
        type Build = ActivityBuild;
        fn build() -> ActivityBuild {
            ActivityBuild {
                activity: Activity {
                    id: Id::new(),
                    title: "Past activity".into(),
                    description: "Activity 2 months ago".into(),
                    category: "drinks".into(),
                    date: Timestamp::now(),
                    city: "London".into(),
                    venue: "Pub".into(),
                },
            }
        }
    }
}

pub mod user_builder {

    use super::*;
    use crate::{email::*, id::*, password::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn username(mut self, username: &str) -> Self {
            self.user.username = username.into();
            self
        }
        pub fn display_name(mut self, display_name: &str) -> Self {
            self.user.display_name = display_name.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = email.parse().unwrap();
            self
        }
        pub fn password(mut self, pw: &str) -> Self {
            self.user.password = pw.parse().unwrap();
            self
        }
        pub fn bio(mut self, bio: Option<&str>) -> Self {
            self.user.bio = bio.map(Into::into);
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> UserBuild {
            UserBuild {
                user: User {
                    id: Id::new(),
                    username: "bob".into(),
                    display_name: "Bob".into(),
                    email: EmailAddress::new_unchecked("bob@test.com".into()),
                    // Not a valid hash, use `password()` if a login is required
                    password: Password::from(String::new()),
                    bio: None,
                },
            }
        }
    }
}

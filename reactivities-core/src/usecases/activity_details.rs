use std::collections::HashMap;

use super::{prelude::*, user_image};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attendee {
    pub username: String,
    pub display_name: String,
    pub image: Option<Url>,
    pub is_host: bool,
}

/// A comment together with its author's profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDetails {
    pub comment: Comment,
    pub display_name: String,
    pub image: Option<Url>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityDetails {
    pub activity: Activity,
    pub attendees: Vec<Attendee>,
    pub comments: Vec<CommentDetails>,
}

/// Caches user lookups while assembling details.
struct Profiles<'r, R> {
    repo: &'r R,
    loaded: HashMap<String, (String, Option<Url>)>,
}

impl<'r, R> Profiles<'r, R>
where
    R: UserRepo + PhotoRepo,
{
    fn new(repo: &'r R) -> Self {
        Self {
            repo,
            loaded: HashMap::new(),
        }
    }

    fn get(&mut self, username: &str) -> Result<(String, Option<Url>)> {
        if let Some(profile) = self.loaded.get(username) {
            return Ok(profile.clone());
        }
        let user = self.repo.get_user_by_username(username)?;
        let image = user_image(self.repo, username)?;
        let profile = (user.display_name, image);
        self.loaded.insert(username.to_owned(), profile.clone());
        Ok(profile)
    }
}

pub(crate) fn comment_details<R>(repo: &R, comment: Comment) -> Result<CommentDetails>
where
    R: UserRepo + PhotoRepo,
{
    let (display_name, image) = Profiles::new(repo).get(&comment.author)?;
    Ok(CommentDetails {
        comment,
        display_name,
        image,
    })
}

fn details<R: Db>(
    repo: &R,
    profiles: &mut Profiles<'_, R>,
    activity: Activity,
) -> Result<ActivityDetails> {
    let id = activity.id.as_str();
    let attendees = repo
        .load_attendances_of_activity(id)?
        .into_iter()
        .map(|attendance| {
            let (display_name, image) = profiles.get(&attendance.username)?;
            Ok(Attendee {
                username: attendance.username,
                display_name,
                image,
                is_host: attendance.is_host,
            })
        })
        .collect::<Result<_>>()?;
    let comments = repo
        .load_comments_of_activity(id)?
        .into_iter()
        .map(|comment| {
            let (display_name, image) = profiles.get(&comment.author)?;
            Ok(CommentDetails {
                comment,
                display_name,
                image,
            })
        })
        .collect::<Result<_>>()?;
    Ok(ActivityDetails {
        activity,
        attendees,
        comments,
    })
}

pub fn load_activity_details<R: Db>(repo: &R, id: &str) -> Result<ActivityDetails> {
    let activity = repo.get_activity(id)?;
    details(repo, &mut Profiles::new(repo), activity)
}

/// All activities, ordered by date.
pub fn list_activities<R: Db>(repo: &R) -> Result<Vec<ActivityDetails>> {
    let mut profiles = Profiles::new(repo);
    repo.all_activities_chronologically()?
        .into_iter()
        .map(|activity| details(repo, &mut profiles, activity))
        .collect()
}

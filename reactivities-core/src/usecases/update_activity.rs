use super::prelude::*;
use crate::util::validate::Validate;

/// Only the given fields are changed.
#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct UpdateActivity {
    pub title       : Option<String>,
    pub description : Option<String>,
    pub category    : Option<String>,
    pub date        : Option<Timestamp>,
    pub city        : Option<String>,
    pub venue       : Option<String>,
}

pub fn update_activity<R: ActivityRepo>(
    repo: &R,
    id: &str,
    update: UpdateActivity,
) -> Result<Activity> {
    let mut activity = repo.get_activity(id)?;
    let UpdateActivity {
        title,
        description,
        category,
        date,
        city,
        venue,
    } = update;
    if let Some(title) = title {
        activity.title = title;
    }
    if let Some(description) = description {
        activity.description = description;
    }
    if let Some(category) = category {
        activity.category = category;
    }
    if let Some(date) = date {
        activity.date = date;
    }
    if let Some(city) = city {
        activity.city = city;
    }
    if let Some(venue) = venue {
        activity.venue = venue;
    }
    activity.validate()?;
    repo.update_activity(&activity)?;
    Ok(activity)
}

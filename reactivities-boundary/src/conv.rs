use super::*;
use reactivities_entities as e;

impl From<e::photo::Photo> for Photo {
    fn from(from: e::photo::Photo) -> Self {
        let e::photo::Photo {
            id,
            owner: _,
            url,
            is_main,
        } = from;
        Self {
            id: id.into(),
            url: url.into(),
            is_main,
        }
    }
}

impl From<e::activity::Activity> for NewActivity {
    fn from(from: e::activity::Activity) -> Self {
        let e::activity::Activity {
            id,
            title,
            description,
            category,
            date,
            city,
            venue,
        } = from;
        Self {
            id: Some(id.into()),
            title,
            description,
            category,
            date: date.into(),
            city,
            venue,
        }
    }
}

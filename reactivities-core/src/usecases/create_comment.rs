use super::{activity_details::comment_details, prelude::*, CommentDetails};

#[derive(Debug, Clone)]
pub struct NewComment {
    pub activity_id: String,
    pub body: String,
}

pub fn create_comment<R: Db>(repo: &R, author: &str, new: NewComment) -> Result<CommentDetails> {
    let NewComment { activity_id, body } = new;
    let activity = repo.get_activity(&activity_id)?;
    let body = body.trim();
    if body.is_empty() {
        return Err(Error::EmptyComment);
    }
    let author = repo
        .try_get_user_by_username(author)?
        .ok_or(Error::Unauthorized)?;
    let comment = Comment {
        id: Id::new(),
        activity_id: activity.id,
        author: author.username,
        body: body.to_owned(),
        created_at: Timestamp::now(),
    };
    repo.create_comment(&comment)?;
    comment_details(repo, comment)
}

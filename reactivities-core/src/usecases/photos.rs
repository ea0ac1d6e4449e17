use super::prelude::*;
use crate::gateways::photo::{PhotoUpload, PhotoUploadResult};

/// Lowercase extensions of the image formats that can be uploaded.
pub const SUPPORTED_PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// Reject uploads that are no image or carry no data
/// before they are handed to a gateway.
pub fn validate_photo_upload(upload: &PhotoUpload<'_>) -> Result<()> {
    let supported = upload.extension.is_some_and(|ext| {
        SUPPORTED_PHOTO_EXTENSIONS
            .iter()
            .any(|supported| supported.eq_ignore_ascii_case(ext))
    });
    if !supported {
        return Err(Error::PhotoFormat);
    }
    if upload.data.is_empty() {
        return Err(Error::EmptyPhoto);
    }
    Ok(())
}

/// Store an uploaded photo. The first photo of a user becomes the main photo.
pub fn add_photo<R: PhotoRepo>(
    repo: &R,
    username: &str,
    upload: PhotoUploadResult,
) -> Result<Photo> {
    let is_main = repo.try_get_main_photo_of_user(username)?.is_none();
    let photo = Photo {
        id: upload.public_id.into(),
        owner: username.to_owned(),
        url: upload.url,
        is_main,
    };
    repo.add_photo(&photo)?;
    Ok(photo)
}

fn find_photo_of_user<R: PhotoRepo>(repo: &R, username: &str, id: &str) -> Result<Photo> {
    repo.load_photos_of_user(username)?
        .into_iter()
        .find(|p| p.id.as_str() == id)
        .ok_or_else(|| crate::repositories::Error::NotFound.into())
}

/// Returns the deleted photo. The main photo cannot be deleted.
pub fn delete_photo<R: PhotoRepo>(repo: &R, username: &str, id: &str) -> Result<Photo> {
    let photo = find_photo_of_user(repo, username, id)?;
    if photo.is_main {
        return Err(Error::MainPhoto);
    }
    repo.delete_photo(id)?;
    Ok(photo)
}

pub fn set_main_photo<R: PhotoRepo>(repo: &R, username: &str, id: &str) -> Result<Photo> {
    let mut photo = find_photo_of_user(repo, username, id)?;
    repo.set_main_photo(username, id)?;
    photo.is_main = true;
    Ok(photo)
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::*, *},
        *,
    };
    use crate::repositories::Error as RepoError;

    fn upload(id: &str) -> PhotoUploadResult {
        PhotoUploadResult {
            public_id: id.into(),
            url: format!("http://localhost/photos/{id}.png").parse().unwrap(),
        }
    }

    fn upload_of<'a>(extension: Option<&'a str>, data: &'a [u8]) -> PhotoUpload<'a> {
        PhotoUpload {
            file_name: "upload",
            extension,
            data,
        }
    }

    #[test]
    fn only_non_empty_images_are_accepted() {
        assert!(validate_photo_upload(&upload_of(Some("png"), b"data")).is_ok());
        assert!(validate_photo_upload(&upload_of(Some("JPG"), b"data")).is_ok());
        assert!(matches!(
            validate_photo_upload(&upload_of(Some("txt"), b"data")),
            Err(Error::PhotoFormat)
        ));
        assert!(matches!(
            validate_photo_upload(&upload_of(None, b"data")),
            Err(Error::PhotoFormat)
        ));
        assert!(matches!(
            validate_photo_upload(&upload_of(Some("gif"), b"")),
            Err(Error::EmptyPhoto)
        ));
    }

    #[test]
    fn first_photo_becomes_main() {
        let db = MockDb::default();
        add_user(&db, "bob");
        assert!(add_photo(&db, "bob", upload("p1")).unwrap().is_main);
        assert!(!add_photo(&db, "bob", upload("p2")).unwrap().is_main);
        assert_eq!(
            "p1",
            db.try_get_main_photo_of_user("bob")
                .unwrap()
                .unwrap()
                .id
                .as_str()
        );
    }

    #[test]
    fn main_photo_cannot_be_deleted() {
        let db = MockDb::default();
        add_user(&db, "bob");
        add_photo(&db, "bob", upload("p1")).unwrap();
        add_photo(&db, "bob", upload("p2")).unwrap();
        assert!(matches!(
            delete_photo(&db, "bob", "p1"),
            Err(Error::MainPhoto)
        ));
        assert_eq!("p2", delete_photo(&db, "bob", "p2").unwrap().id.as_str());
        assert_eq!(1, db.load_photos_of_user("bob").unwrap().len());
    }

    #[test]
    fn photos_of_other_users_are_not_found() {
        let db = MockDb::default();
        add_user(&db, "bob");
        add_user(&db, "tom");
        add_photo(&db, "bob", upload("p1")).unwrap();
        add_photo(&db, "bob", upload("p2")).unwrap();
        assert!(matches!(
            delete_photo(&db, "tom", "p2"),
            Err(Error::Repo(RepoError::NotFound))
        ));
        assert!(matches!(
            set_main_photo(&db, "tom", "p2"),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }

    #[test]
    fn exactly_one_main_photo() {
        let db = MockDb::default();
        add_user(&db, "bob");
        add_photo(&db, "bob", upload("p1")).unwrap();
        add_photo(&db, "bob", upload("p2")).unwrap();
        set_main_photo(&db, "bob", "p2").unwrap();
        let photos = db.load_photos_of_user("bob").unwrap();
        let main: Vec<_> = photos.iter().filter(|p| p.is_main).collect();
        assert_eq!(1, main.len());
        assert_eq!("p2", main[0].id.as_str());
    }
}

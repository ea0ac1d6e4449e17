use rocket::{
    form::{Form, FromForm},
    fs::TempFile,
    tokio::{io::AsyncReadExt, task},
};

use super::*;
use crate::core::gateways::photo::PhotoUpload;

#[derive(FromForm)]
pub struct Upload<'r> {
    file: TempFile<'r>,
}

async fn read_upload(file: &TempFile<'_>) -> std::io::Result<Vec<u8>> {
    let mut data = Vec::with_capacity(file.len() as usize);
    let reader = file.open().await?;
    rocket::tokio::pin!(reader);
    reader.read_to_end(&mut data).await?;
    Ok(data)
}

#[post("/photos", data = "<upload>")]
pub async fn post_photo(
    db: &State<sqlite::Connections>,
    photos: &State<Photos>,
    account: Account,
    upload: Form<Upload<'_>>,
) -> Result<json::Photo> {
    let file = &upload.file;
    let data = read_upload(file).await.map_err(anyhow::Error::from)?;
    let file_name = file.name().unwrap_or("photo").to_owned();
    let extension = file
        .content_type()
        .and_then(|content_type| content_type.extension())
        .map(|ext| ext.as_str().to_ascii_lowercase());

    let db = db.inner().clone();
    let photos = photos.inner().clone();
    let username = account.username().to_owned();
    let photo = task::spawn_blocking(move || {
        let upload = PhotoUpload {
            file_name: &file_name,
            extension: extension.as_deref(),
            data: &data,
        };
        flows::add_photo(&db, &*photos, &username, upload)
    })
    .await
    .map_err(anyhow::Error::from)??;
    Ok(Json(photo.into()))
}

#[delete("/photos/<id>")]
pub fn delete_photo(
    db: &State<sqlite::Connections>,
    photos: &State<Photos>,
    account: Account,
    id: &str,
) -> Result<()> {
    flows::delete_photo(db, &***photos, account.username(), id)?;
    Ok(Json(()))
}

#[post("/photos/<id>/setmain")]
pub fn post_main_photo(
    db: &State<sqlite::Connections>,
    account: Account,
    id: &str,
) -> Result<()> {
    flows::set_main_photo(db, account.username(), id)?;
    Ok(Json(()))
}

use anyhow::Result as Fallible;

use crate::entities::Url;

/// Where an uploaded photo ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoUploadResult {
    pub public_id: String,
    pub url: Url,
}

#[derive(Debug, Clone, Copy)]
pub struct PhotoUpload<'a> {
    pub file_name: &'a str,
    /// Lowercase file extension without a leading dot
    pub extension: Option<&'a str>,
    pub data: &'a [u8],
}

pub trait PhotoGateway {
    fn add_photo(&self, upload: PhotoUpload<'_>) -> Fallible<PhotoUploadResult>;
    fn delete_photo(&self, public_id: &str) -> Fallible<()>;
}

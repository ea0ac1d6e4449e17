use anyhow::{anyhow, bail, Result as Fallible};
use reactivities_core::{
    entities::{Id, Url},
    gateways::photo::{PhotoGateway, PhotoUpload, PhotoUploadResult},
    usecases::SUPPORTED_PHOTO_EXTENSIONS,
};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Stores uploaded photos as files in a local directory.
///
/// The directory is expected to be served under `base_url`.
#[derive(Debug, Clone)]
pub struct PhotoToDirectory {
    dir: PathBuf,
    base_url: Url,
}

impl PhotoToDirectory {
    pub fn try_new<P: AsRef<Path>>(dir: P, base_url: Url) -> io::Result<Self> {
        let dir = dir.as_ref().to_owned();
        fs::create_dir_all(&dir)?;
        let base_url = with_trailing_slash(base_url);
        Ok(Self { dir, base_url })
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    fn find_file(&self, public_id: &str) -> io::Result<Option<PathBuf>> {
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.file_stem().and_then(|s| s.to_str()) == Some(public_id) {
                return Ok(Some(path));
            }
        }
        Ok(None)
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

impl PhotoGateway for PhotoToDirectory {
    fn add_photo(&self, upload: PhotoUpload<'_>) -> Fallible<PhotoUploadResult> {
        let extension = upload
            .extension
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        if !SUPPORTED_PHOTO_EXTENSIONS.contains(&extension.as_str()) {
            bail!("Unsupported image type of '{}'", upload.file_name);
        }
        if upload.data.is_empty() {
            bail!("Empty image '{}'", upload.file_name);
        }
        let public_id = Id::new().to_string();
        let file_name = format!("{public_id}.{extension}");
        fs::write(self.dir.join(&file_name), upload.data)?;
        let url = self.base_url.join(&file_name)?;
        log::debug!("Stored photo '{}' as {}", upload.file_name, url);
        Ok(PhotoUploadResult { public_id, url })
    }

    fn delete_photo(&self, public_id: &str) -> Fallible<()> {
        let path = self
            .find_file(public_id)?
            .ok_or_else(|| anyhow!("Photo {public_id} not found"))?;
        fs::remove_file(&path)?;
        log::debug!("Deleted photo {}", path.display());
        Ok(())
    }
}

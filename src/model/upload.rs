//! Upload descriptors and the storage location accepted images are written to.

use std::{
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

/// Multipart field name the upload stage accepts a file under.
pub const UPLOAD_FIELD_NAME: &str = "image";

/// URL prefix stored uploads are served under.
pub const UPLOAD_PUBLIC_PREFIX: &str = "/images";

/// Mime types an upload must have to be stored, with the extension used for the stored file.
pub const ACCEPTED_IMAGE_TYPES: [(&str, &str); 3] = [
    ("image/png", "png"),
    ("image/jpg", "jpg"),
    ("image/jpeg", "jpeg"),
];

/// Metadata of a file stored by the upload stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadDescriptor {
    /// File name as sent by the client.
    pub original_name: String,
    /// Random name the file was stored under.
    pub storage_name: String,
    /// Lowercase mime type, one of [`ACCEPTED_IMAGE_TYPES`].
    pub mime_type: String,
    /// Full path of the stored file.
    pub path: PathBuf,
}

impl UploadDescriptor {
    /// URL the stored file is served at, e.g. `/images/3f2a...c1.png`.
    pub fn public_url(&self) -> String {
        format!("{}/{}", UPLOAD_PUBLIC_PREFIX, self.storage_name)
    }
}

/// Request extension set by the upload stage.
///
/// Holds the descriptor of the accepted image, or `None` if the request carried
/// no acceptable file.
#[derive(Clone, Debug, Default)]
pub struct UploadedFile(pub Option<UploadDescriptor>);

/// Request extension set by the upload stage next to [`UploadedFile`].
///
/// A stored upload is removed again once the response is produced unless a
/// handler called [`UploadClaim::claim`] for it.
#[derive(Clone, Debug, Default)]
pub struct UploadClaim(Arc<AtomicBool>);

impl UploadClaim {
    /// Keeps the stored upload after the request.
    pub fn claim(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Whether a handler kept the stored upload.
    pub fn is_claimed(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Directory accepted uploads are stored in.
#[derive(Clone, Debug)]
pub struct UploadStorage {
    dir: PathBuf,
}

impl UploadStorage {
    /// Creates a storage handle for `dir`. The directory is created by the startup code.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory uploads are written to.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Whether a file with `mime_type` is stored at all.
    pub fn accepts(mime_type: &str) -> bool {
        Self::extension_for(mime_type).is_some()
    }

    /// Accepted mime type matching `mime_type` case-insensitively, `None` for rejected types.
    pub fn canonical_type(mime_type: &str) -> Option<&'static str> {
        Self::accepted_entry(mime_type).map(|(accepted, _)| accepted)
    }

    /// File extension stored files of `mime_type` get, `None` for rejected types.
    pub fn extension_for(mime_type: &str) -> Option<&'static str> {
        Self::accepted_entry(mime_type).map(|(_, extension)| extension)
    }

    fn accepted_entry(mime_type: &str) -> Option<(&'static str, &'static str)> {
        let mime_type = mime_type.trim().to_ascii_lowercase();

        ACCEPTED_IMAGE_TYPES
            .iter()
            .find(|(accepted, _)| *accepted == mime_type)
            .copied()
    }

    /// Generates a random storage name for an upload of `mime_type`.
    ///
    /// The name never contains the client supplied file name, so two uploads of
    /// `photo.png` don't overwrite each other.
    pub fn storage_name_for(mime_type: &str) -> Option<String> {
        let extension = Self::extension_for(mime_type)?;
        let id: String = rand::random::<[u8; 16]>()
            .iter()
            .map(|byte| format!("{:02x}", byte))
            .collect();

        Some(format!("{}.{}", id, extension))
    }

    /// Full path a file named `storage_name` is stored at.
    pub fn path_for(&self, storage_name: &str) -> PathBuf {
        self.dir.join(storage_name)
    }

    /// Removes the stored file a public upload URL points to.
    ///
    /// URLs outside of [`UPLOAD_PUBLIC_PREFIX`] and files that are already gone are ignored.
    pub async fn remove_by_url(&self, url: &str) -> Result<(), std::io::Error> {
        let Some(storage_name) = Self::storage_name_from_url(url) else {
            tracing::warn!("Not removing {:?}: not a stored upload URL", url);

            return Ok(());
        };

        match tokio::fs::remove_file(self.path_for(storage_name)).await {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }

    fn storage_name_from_url(url: &str) -> Option<&str> {
        let storage_name = url
            .strip_prefix(UPLOAD_PUBLIC_PREFIX)?
            .strip_prefix('/')?;

        let is_plain_name = !storage_name.is_empty()
            && !storage_name.contains(['/', '\\'])
            && storage_name != ".."
            && storage_name != ".";

        is_plain_name.then_some(storage_name)
    }
}

//! Static asset and user-uploaded media locations.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::constants::{
    MEDIA_DIR_NAME, MEDIA_URL, STATIC_DIR_NAME, STATIC_ROOT_DIR_NAME, STATIC_URL,
    STATICFILES_FINDERS,
};

/// Static and media file settings.
#[derive(Debug, Clone, Serialize)]
pub struct FileSettings {
    pub static_url: String,
    /// Directory static assets are collected into for serving.
    pub static_root: PathBuf,
    /// Extra source directories searched for static assets.
    pub staticfiles_dirs: Vec<PathBuf>,
    pub staticfiles_finders: Vec<String>,
    pub media_url: String,
    pub media_root: PathBuf,
}

impl FileSettings {
    /// Build file settings, deriving unset roots from `apps_dir`.
    pub(crate) fn new(
        apps_dir: &Path,
        static_root: Option<PathBuf>,
        media_root: Option<PathBuf>,
    ) -> Self {
        Self {
            static_url: STATIC_URL.to_string(),
            static_root: static_root.unwrap_or_else(|| default_static_root(apps_dir)),
            staticfiles_dirs: vec![apps_dir.join(STATIC_DIR_NAME)],
            staticfiles_finders: STATICFILES_FINDERS.iter().map(|s| s.to_string()).collect(),
            media_url: MEDIA_URL.to_string(),
            media_root: media_root.unwrap_or_else(|| default_media_root(apps_dir)),
        }
    }
}

pub(crate) fn default_static_root(apps_dir: &Path) -> PathBuf {
    apps_dir.join(STATIC_ROOT_DIR_NAME)
}

pub(crate) fn default_media_root(apps_dir: &Path) -> PathBuf {
    apps_dir.join(MEDIA_DIR_NAME)
}

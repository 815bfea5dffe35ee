// modver-rs: Starsector mod metadata and update checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Metadata extraction from a mod's descriptor files.
//!
//! ```text
//! candidate files
//!    |
//!    +-- mod_info.json (exact name) ---- missing --> MissingPrimary (fatal)
//!    |      parse ---------------------- malformed -> warn, keys unset
//!    |      id ------------------------- missing --> Invalid (fatal)
//!    |      modSharedId modVariantId modName author gameVersion displayVersion
//!    |
//!    +-- *.version (first match) ------- missing --> done
//!           parse ---------------------- malformed -> warn, keys unset
//!           forumThreadId source localVersionCheckerVersion onlineVersionUrl
//! ```
//!
//! If several `.version` files are present the first in input order wins.
//! Nothing depends on that choice beyond being deterministic.

pub mod attributes;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use bon::Builder;
use tracing::{debug, warn};

use crate::config::types::{DescriptorConfig, ForumConfig};
use crate::descriptor::{self, Descriptor};
use crate::error::DescriptorError;
use crate::host::{FileReader, Notification, Notifier};
use crate::version::{Version, VersionDescriptor};

pub use attributes::{AttributeKey, ModAttributes};

/// Default file name of the primary descriptor.
pub const PRIMARY_DESCRIPTOR: &str = "mod_info.json";

/// Default extension of the version-checker descriptor.
pub const VERSION_EXTENSION: &str = "version";

/// Default forum base URL used as a mod's browsable source.
pub const FORUM_BASE_URL: &str = "https://fractalsoftworks.com/forum/index.php?topic=";

/// Where descriptors are found and how the source page is formed.
#[derive(Debug, Clone, Builder)]
pub struct MetadataOptions {
    #[builder(setters(name = with_primary_name), into, default = PRIMARY_DESCRIPTOR.to_string())]
    primary_name: String,
    #[builder(setters(name = with_version_extension), into, default = VERSION_EXTENSION.to_string())]
    version_extension: String,
    #[builder(setters(name = with_forum_base_url), into, default = FORUM_BASE_URL.to_string())]
    forum_base_url: String,
}

impl Default for MetadataOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl MetadataOptions {
    /// Options taken from the `[descriptors]` and `[forum]` config sections.
    #[must_use]
    pub fn from_config(descriptors: &DescriptorConfig, forum: &ForumConfig) -> Self {
        Self::builder()
            .with_primary_name(descriptors.primary.clone())
            .with_version_extension(descriptors.secondary_extension.clone())
            .with_forum_base_url(forum.base_url.clone())
            .build()
    }

    #[must_use]
    pub fn primary_name(&self) -> &str {
        &self.primary_name
    }

    #[must_use]
    pub fn version_extension(&self) -> &str {
        &self.version_extension
    }

    #[must_use]
    pub fn forum_base_url(&self) -> &str {
        &self.forum_base_url
    }
}

/// Reads descriptor files of one mod installation into [`ModAttributes`].
pub struct MetadataReader {
    files: Arc<dyn FileReader>,
    notifier: Arc<dyn Notifier>,
    options: MetadataOptions,
}

impl MetadataReader {
    #[must_use]
    pub fn new(files: Arc<dyn FileReader>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            files,
            notifier,
            options: MetadataOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: MetadataOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub const fn options(&self) -> &MetadataOptions {
        &self.options
    }

    /// Build the attribute mapping for a mod from its candidate files.
    ///
    /// A malformed descriptor only leaves its keys unset and posts a warning;
    /// the read itself still succeeds.
    ///
    /// # Errors
    ///
    /// - [`DescriptorError::MissingPrimary`] if no primary descriptor is listed.
    /// - [`DescriptorError::Invalid`] if the primary descriptor has no `id`.
    pub fn read_metadata(
        &self,
        candidate_files: &[PathBuf],
    ) -> Result<ModAttributes, DescriptorError> {
        let primary = self.find_primary(candidate_files).ok_or_else(|| {
            DescriptorError::MissingPrimary {
                file_name: self.options.primary_name.clone(),
                searched: candidate_files.len(),
            }
        })?;

        let mut attributes = ModAttributes::new();

        match self.load(primary) {
            Ok(info) => apply_mod_info(&mut attributes, &info, primary)?,
            Err(e) => self.report(&e),
        }

        let Some(version_file) = self.find_version_file(candidate_files) else {
            debug!(mod_info = %primary.display(), "no version file, skipping update metadata");
            return Ok(attributes);
        };

        match self.load(version_file) {
            Ok(parsed) => {
                let version = VersionDescriptor::from_descriptor(&parsed);
                apply_version_file(&mut attributes, &version, &self.options.forum_base_url);
            }
            Err(e) => self.report(&e),
        }

        Ok(attributes)
    }

    fn find_primary<'a>(&self, candidates: &'a [PathBuf]) -> Option<&'a Path> {
        candidates
            .iter()
            .find(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name == self.options.primary_name)
            })
            .map(PathBuf::as_path)
    }

    fn find_version_file<'a>(&self, candidates: &'a [PathBuf]) -> Option<&'a Path> {
        candidates
            .iter()
            .find(|path| {
                path.extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.options.version_extension))
            })
            .map(PathBuf::as_path)
    }

    fn load(&self, path: &Path) -> Result<Descriptor, DescriptorError> {
        let text = self
            .files
            .read_text(path)
            .map_err(|source| DescriptorError::Unreadable {
                path: path.display().to_string(),
                source,
            })?;
        descriptor::parse(&text).map_err(|source| DescriptorError::Malformed {
            path: path.display().to_string(),
            source,
        })
    }

    fn report(&self, error: &DescriptorError) {
        warn!(error = %error, "descriptor ignored");
        self.notifier.post(Notification::warning(error.to_string()));
    }
}

fn apply_mod_info(
    attributes: &mut ModAttributes,
    info: &Descriptor,
    path: &Path,
) -> Result<(), DescriptorError> {
    let id = descriptor::string_field(info, "id")
        .filter(|id| !id.is_empty())
        .ok_or_else(|| DescriptorError::Invalid {
            path: path.display().to_string(),
            reason: "missing or non-string 'id'".to_string(),
        })?;

    let name = descriptor::string_field(info, "name").unwrap_or_default();
    let author = descriptor::string_field(info, "author").unwrap_or_default();
    let game_version = descriptor::string_field(info, "gameVersion").unwrap_or_default();

    attributes.set(AttributeKey::ModSharedId, id);
    attributes.set(AttributeKey::ModVariantId, name.clone());
    attributes.set(AttributeKey::ModName, name);
    attributes.set(AttributeKey::Author, author);
    attributes.set(AttributeKey::GameVersion, game_version);
    attributes.set_opt(
        AttributeKey::DisplayVersion,
        normalized_field(info, "version", path),
    );
    Ok(())
}

fn apply_version_file(attributes: &mut ModAttributes, version: &VersionDescriptor, forum: &str) {
    if let Some(thread) = version.mod_thread_id.as_deref().filter(|t| !t.is_empty()) {
        attributes.set(AttributeKey::ForumThreadId, thread);
        attributes.set(AttributeKey::Source, forum);
    }
    attributes.set_opt(
        AttributeKey::LocalVersionCheckerVersion,
        version.normalized_version(),
    );
    attributes.set_opt(
        AttributeKey::OnlineVersionUrl,
        version.master_version_file.clone(),
    );
}

/// Normalized version under `key`, `None` if absent or not a version shape.
fn normalized_field(info: &Descriptor, key: &str, path: &Path) -> Option<String> {
    let value = info.get(key)?;
    let version = Version::from_value(value);
    if version.is_none() {
        debug!(file = %path.display(), key, value = %value, "unusable version value");
    }
    version.map(|v| v.normalize())
}

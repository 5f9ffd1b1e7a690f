//! TOML setup manifest loading.
//!
//! A manifest declares the script title and description, the selectable
//! `[[options]]` and the always-applied `[[defaults]]`.  Table order in the
//! file is the order options appear in help and are applied.
use std::path::Path;

use serde::Deserialize;

use super::{FileAction, JsonPatch, SetupDefinition, SetupOption, Transform};
use crate::error::ConfigError;

/// Root of a setup manifest.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestFile {
    title: String,
    description: String,
    #[serde(default)]
    options: Vec<OptionSection>,
    #[serde(default)]
    defaults: Vec<OptionSection>,
}

/// One `[[options]]` or `[[defaults]]` table.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OptionSection {
    name: String,
    #[serde(default)]
    alternate_names: Vec<String>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    files: Vec<FileSection>,
    #[serde(default)]
    json: Vec<JsonSection>,
}

/// One `[[options.files]]` entry: exactly one of `content` or `append`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSection {
    path: String,
    content: Option<String>,
    append: Option<String>,
}

/// One `[[options.json]]` entry.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct JsonSection {
    path: String,
    data: serde_json::Value,
}

/// Load a [`SetupDefinition`] from the manifest at `path`.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read,
/// [`ConfigError::Parse`] if it is not a valid manifest, and
/// [`ConfigError::InvalidAction`] if a file entry has neither or both of
/// `content` and `append`.
pub fn load(path: &Path) -> Result<SetupDefinition, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content, path)
}

/// Parse manifest text; `origin` is only used in error messages.
///
/// # Errors
///
/// See [`load`].
pub fn parse(content: &str, origin: &Path) -> Result<SetupDefinition, ConfigError> {
    let manifest: ManifestFile = toml::from_str(content).map_err(|e| ConfigError::Parse {
        path: origin.to_path_buf(),
        message: e.message().to_string(),
    })?;

    let convert = |sections: Vec<OptionSection>| -> Result<Vec<SetupOption>, ConfigError> {
        sections.into_iter().map(into_option).collect()
    };

    Ok(SetupDefinition {
        title: manifest.title,
        description: manifest.description,
        options: convert(manifest.options)?,
        defaults: convert(manifest.defaults)?,
    })
}

fn into_option(section: OptionSection) -> Result<SetupOption, ConfigError> {
    let configuration_files = section
        .files
        .into_iter()
        .map(|file| into_file_action(&section.name, file))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SetupOption {
        json_data: section
            .json
            .into_iter()
            .map(|j| JsonPatch::new(j.path, j.data))
            .collect(),
        name: section.name,
        alternate_names: section.alternate_names,
        description: section.description,
        configuration_files,
    })
}

fn into_file_action(option: &str, file: FileSection) -> Result<FileAction, ConfigError> {
    match (file.content, file.append) {
        (Some(content), None) => Ok(FileAction::Write {
            path: file.path,
            content,
        }),
        (None, Some(line)) => Ok(FileAction::Modify {
            path: file.path,
            transform: Transform::append_line(line),
        }),
        (content, _) => Err(ConfigError::InvalidAction {
            option: option.to_string(),
            path: file.path,
            reason: if content.is_some() {
                "`content` and `append` are mutually exclusive".to_string()
            } else {
                "expected one of `content` or `append`".to_string()
            },
        }),
    }
}

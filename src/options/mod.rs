//! Setup options: the data model the engine resolves and applies.
//!
//! - [`registry`] — canonical-name lookup with alternate names and conflict checks
//! - [`manifest`] — load a [`SetupDefinition`] from a TOML setup manifest
pub mod manifest;
pub mod registry;

use std::fmt;
use std::sync::Arc;

/// Content transform used by [`FileAction::Modify`].
///
/// Receives the current file content and returns the content to write back.
#[derive(Clone)]
pub struct Transform(Arc<dyn Fn(&str) -> String + Send + Sync>);

impl Transform {
    /// Wrap a closure as a transform.
    pub fn new(f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Apply the transform to `current`.
    #[must_use]
    pub fn apply(&self, current: &str) -> String {
        (self.0)(current)
    }

    /// A transform that appends `line` unless a line with exactly that text
    /// is already present.
    ///
    /// A missing trailing newline is added before appending.
    ///
    /// # Examples
    ///
    /// ```
    /// use project_setup::options::Transform;
    ///
    /// let t = Transform::append_line("node_modules");
    /// assert_eq!(t.apply("dist\n"), "dist\nnode_modules\n");
    /// assert_eq!(t.apply("dist"), "dist\nnode_modules\n");
    /// assert_eq!(t.apply("node_modules\n"), "node_modules\n");
    /// assert_eq!(t.apply(""), "node_modules\n");
    /// ```
    #[must_use]
    pub fn append_line(line: impl Into<String>) -> Self {
        let line = line.into();
        Self::new(move |current| {
            if current.lines().any(|l| l == line) {
                return current.to_string();
            }
            let mut out = current.to_string();
            if !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
            out.push_str(&line);
            out.push('\n');
            out
        })
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Transform(<fn>)")
    }
}

/// A configuration file produced by an option.
#[derive(Debug, Clone)]
pub enum FileAction {
    /// Overwrite `path` with literal `content`.
    Write {
        /// Target path, relative to the working directory or absolute.
        path: String,
        /// Content to write.
        content: String,
    },
    /// Read `path`, apply `transform`, and write the result back.
    ///
    /// The file must already exist.
    Modify {
        /// Target path, relative to the working directory or absolute.
        path: String,
        /// Transform applied to the current content.
        transform: Transform,
    },
}

impl FileAction {
    /// Build a [`FileAction::Write`].
    pub fn write(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Write {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Build a [`FileAction::Modify`] from a closure.
    pub fn modify(
        path: impl Into<String>,
        transform: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        Self::Modify {
            path: path.into(),
            transform: Transform::new(transform),
        }
    }

    /// Target path as declared.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Write { path, .. } | Self::Modify { path, .. } => path,
        }
    }
}

/// A JSON document patch: `data` is deep-merged into the file at `path`.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonPatch {
    /// Target path, relative to the working directory or absolute.
    pub path: String,
    /// Value merged into the existing document.
    pub data: serde_json::Value,
}

impl JsonPatch {
    /// Build a patch.
    pub fn new(path: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            path: path.into(),
            data,
        }
    }
}

/// A named, selectable unit of configuration.
#[derive(Debug, Clone)]
pub struct SetupOption {
    /// Canonical name, shown in help and used in reports.
    pub name: String,
    /// Additional names that resolve to this option.
    pub alternate_names: Vec<String>,
    /// One-line description shown in help.
    pub description: String,
    /// File actions, applied in order.
    pub configuration_files: Vec<FileAction>,
    /// JSON patches, applied in order after the file actions.
    pub json_data: Vec<JsonPatch>,
}

impl SetupOption {
    /// Create an option with no alternate names and no actions.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alternate_names: Vec::new(),
            description: description.into(),
            configuration_files: Vec::new(),
            json_data: Vec::new(),
        }
    }

    /// Add an alternate name.
    #[must_use]
    pub fn with_alternate_name(mut self, name: impl Into<String>) -> Self {
        self.alternate_names.push(name.into());
        self
    }

    /// Append a file action.
    #[must_use]
    pub fn with_file(mut self, action: FileAction) -> Self {
        self.configuration_files.push(action);
        self
    }

    /// Append a JSON patch.
    #[must_use]
    pub fn with_json(mut self, patch: JsonPatch) -> Self {
        self.json_data.push(patch);
        self
    }

    /// Canonical name followed by every alternate name.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.alternate_names.iter().map(String::as_str))
    }
}

/// Everything the host supplies for one invocation.
#[derive(Debug, Clone, Default)]
pub struct SetupDefinition {
    /// Script title, first line of every help block.
    pub title: String,
    /// Script description, shown after the title.
    pub description: String,
    /// Selectable options, in help order.
    pub options: Vec<SetupOption>,
    /// Entries applied on every successful run regardless of selection.
    pub defaults: Vec<SetupOption>,
}

impl SetupDefinition {
    /// Create a definition with no options.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            options: Vec::new(),
            defaults: Vec::new(),
        }
    }

    /// Append a selectable option.
    #[must_use]
    pub fn with_option(mut self, option: SetupOption) -> Self {
        self.options.push(option);
        self
    }

    /// Append an always-applied default entry.
    #[must_use]
    pub fn with_default(mut self, option: SetupOption) -> Self {
        self.defaults.push(option);
        self
    }
}

use serde::{Deserialize, Serialize};

/// How a submission reacts to a file that cannot be decoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileErrorPolicy {
    /// The first failing file (in submission order) fails the whole submission.
    #[default]
    AbortAll,
    /// A failing file is logged and treated as having no matches.
    SkipFile,
}

/// Options for a search session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct SearchOptions {
    pub on_file_error: FileErrorPolicy,
}

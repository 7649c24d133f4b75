use thiserror::Error;

/// Failures while resolving or composing extensions. These abort parsing
/// before any output is produced; Markdown content itself never fails.
#[derive(Debug, Error)]
pub enum ExtensionError {
    #[error("unknown extension `{0}`")]
    Unknown(String),
    #[error("extension `{name}` registered element kind `{kind}` twice")]
    DuplicateKind { name: String, kind: &'static str },
}

#[derive(Debug, Error)]
pub enum RenderError {
    /// No render method exists for an element kind. Reported once with the
    /// kind name; built-in kinds can never miss.
    #[error("no render method for element kind `{kind}`")]
    DispatchMiss { kind: String },
}

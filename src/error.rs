use crate::build::output_manager::OutputError;
use crate::interface::config::ConfigError;
use serde::{ser::Serializer, Serialize};

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of failures; none of them is retried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Host setup or configuration is missing, generation never starts
    Configuration,
    /// A function's parameter list cannot be bridged
    ShapeValidation,
    /// No framework name could be derived for a function
    OriginResolution,
    Io,
    Generation,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    #[error("Parse error in {path}:{line}: {message}")]
    Parse {
        path: String,
        line: usize,
        message: String,
    },

    #[error(
        "Function `{function}` has more than one parameter annotated with @ComposeUIViewControllerState: {}",
        .parameters.join(", ")
    )]
    MultipleStateMarkers {
        function: String,
        parameters: Vec<String>,
    },

    #[error("Function `{function}` has an invalid parameter list: {message}")]
    InvalidParameterShape { function: String, message: String },

    #[error(
        "Function `{function}` has no framework base name: set @ComposeUIViewController(frameworkBaseName = \"...\") \
         or register its package in the module metadata"
    )]
    EmptyFrameworkBaseName { function: String },

    #[error("Artifact written twice in one pass: {0}")]
    DuplicateArtifact(String),

    #[error("Code generation failed: {0}")]
    CodeGeneration(String),
}

impl Error {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Config(_) | Error::Configuration(_) | Error::Json(_) => {
                ErrorCategory::Configuration
            }
            Error::Parse { .. }
            | Error::MultipleStateMarkers { .. }
            | Error::InvalidParameterShape { .. } => ErrorCategory::ShapeValidation,
            Error::EmptyFrameworkBaseName { .. } => ErrorCategory::OriginResolution,
            Error::Io(_) | Error::Output(_) => ErrorCategory::Io,
            Error::DuplicateArtifact(_) | Error::CodeGeneration(_) => ErrorCategory::Generation,
        }
    }
}

impl From<tera::Error> for Error {
    fn from(e: tera::Error) -> Self {
        let mut message = e.to_string();
        if let Some(source) = std::error::Error::source(&e) {
            message.push_str(&format!("\nSource: {}", source));
        }
        Error::CodeGeneration(message)
    }
}

impl From<walkdir::Error> for Error {
    fn from(e: walkdir::Error) -> Self {
        Error::Io(e.into())
    }
}

impl Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

use std::io;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    Io(String),
    Validation(String),
    /// A script or stylesheet could not be attached to the document.
    ResourceLoad(String),
    /// The content server answered with a non-success status.
    ContentFetch {
        path: String,
        status: u16,
    },
    /// A collaborator the content pipeline depends on is missing.
    Configuration(String),
    Server(String),
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(msg) => write!(f, "IO Error: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation Error: {}", msg),
            AppError::ResourceLoad(url) => write!(f, "Failed to load resource: {}", url),
            AppError::ContentFetch { path, status } => {
                write!(f, "Failed to load content {} (HTTP {})", path, status)
            }
            AppError::Configuration(msg) => write!(f, "Configuration Error: {}", msg),
            AppError::Server(msg) => write!(f, "Server Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}
pub type Result<T> = std::result::Result<T, AppError>;

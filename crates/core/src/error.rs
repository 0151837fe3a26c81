use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot use repository directory `{}`: {}", .path, .original)]
    Directory {
        path: String,
        original: std::io::Error,
    },

    #[error("Repository path `{}` is not a directory", .path)]
    NotADirectory { path: String },

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("Invalid timeout of {} seconds: must be at least 1", .0)]
    InvalidTimeout(u64),
}

impl Error {
    pub fn directory_error(path: String, original: std::io::Error) -> Self {
        Self::Directory { path, original }
    }

    pub fn not_a_directory(path: String) -> Self {
        Self::NotADirectory { path }
    }
}

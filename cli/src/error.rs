use std::fmt::Display;
use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("File error `{}`: {error}", path.display())]
    File { path: PathBuf, error: io::Error },
    #[error("Could not read the call log from standard in: {0}")]
    Stdin(io::Error),
    #[error("Could not price `{name}`: {error}")]
    Calculation {
        name: String,
        error: phone_bill::Error,
    },
    #[error("Could not serialize report: {0}")]
    Serialize(serde_json::Error),
}

impl Error {
    pub fn file(path: PathBuf, error: io::Error) -> Self {
        Self::File { path, error }
    }

    pub fn calculation(name: impl Display, error: phone_bill::Error) -> Self {
        Self::Calculation {
            name: name.to_string(),
            error,
        }
    }
}

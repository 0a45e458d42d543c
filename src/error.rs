use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// The upload's columns do not normalize to the required set.
///
/// Fatal to the current view: nothing downstream runs on a table that failed
/// validation, and the message names the three required columns so the user
/// can fix the file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "file format is not correct: expected exactly the columns 'Customer Name', \
     'Sales' and 'Sales With Tax' (missing {missing:?}, unexpected {unexpected:?})"
)]
pub struct FormatError {
    pub missing: Vec<String>,
    pub unexpected: Vec<String>,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("could not read workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("could not read delimited input: {0}")]
    Delimited(#[from] csv::Error),

    #[error("input has no header row")]
    EmptyInput,

    #[error("invalid controls: {0}")]
    Config(String),

    #[error("could not parse controls file: {0}")]
    ControlsFile(#[from] serde_yaml::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MazoError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("CSV error: {0}")]
    Csv(Box<csv::Error>),

    #[error("Workbook sheet not found: {0}")]
    MissingSheet(String),

    #[error("MazoError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for MazoError {
    fn from(error: std::io::Error) -> Self {
        MazoError::Io(Box::new(error))
    }
}

impl From<csv::Error> for MazoError {
    fn from(error: csv::Error) -> Self {
        MazoError::Csv(Box::new(error))
    }
}

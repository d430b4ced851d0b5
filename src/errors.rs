use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Csv error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Io error: {0}")]
    IoError(#[from] std::io::Error),
}

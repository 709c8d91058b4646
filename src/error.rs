#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("SOFA container error: {0}")]
    Hdf5(#[from] hdf5::Error),
    #[error("WAV encode error: {0}")]
    Wav(#[from] hound::Error),
    #[error("file has no `{0}` dataset")]
    MissingDataset(&'static str),
    #[error("dataset `{0}` has invalid dimensions")]
    InvalidDimensions(&'static str),
    #[error("file contains no measurements")]
    Empty,
}

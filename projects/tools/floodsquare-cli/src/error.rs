use floodsquare::FloodSquareError;
use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Cipher(#[from] FloodSquareError),
    #[error("Failed to write bitmap dump to {}: {source}", path.display())]
    Dump { path: PathBuf, source: io::Error },
}

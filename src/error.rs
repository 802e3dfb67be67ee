use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

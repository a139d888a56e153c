mod parse;
mod profile;

use thiserror::Error;

pub(crate) use profile::ProfileV1;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid actions for {0}")]
    InvalidActions(String),
    #[error("key parse error for {0}: {1}")]
    KeyParse(String, String),
}

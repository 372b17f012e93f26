//! Error taxonomy for loading comparison sources
//!
//! Both variants that matter to callers are terminal for a comparison run:
//! nothing is retried and no partial report is produced.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("source not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("source is not valid UTF-8 text: {name} ({source})")]
    EncodingError {
        name: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("failed to read source {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

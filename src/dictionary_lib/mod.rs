//! Dictionary utilities for the zhoconv conversion engine.
//!
//! The central type is [`DictionaryMaxlength`], the fixed set of lexicon
//! tables ([`DictEntry`]) used by the converter, together with the starter
//! metadata ([`StarterIndex`], [`StarterUnion`]) that accelerates
//! longest-match segmentation and the JSON snapshot codec.

mod dict_entry;
mod dictionary_maxlength;
mod snapshot;
mod starter_index;
mod starter_union;

pub use dict_entry::DictEntry;
pub use dictionary_maxlength::DictionaryMaxlength;
pub use dictionary_maxlength::UnionKey;
pub use starter_index::{StarterIndex, LEN_MASK_BITS};
pub use starter_union::StarterUnion;

use std::io;
use thiserror::Error;

/// Errors surfaced while loading, parsing or writing dictionary data.
///
/// Both variants carry a preformatted message: loaders decorate low-level
/// failures with file names or parse context before wrapping them.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// File or stream access failed.
    #[error("I/O Error: {0}")]
    IoError(String),
    /// Snapshot or dictionary text violated the expected schema.
    #[error("Parse Error: {0}")]
    ParseError(String),
}

impl From<io::Error> for DictionaryError {
    fn from(err: io::Error) -> Self {
        DictionaryError::IoError(err.to_string())
    }
}

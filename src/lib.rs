/// Delimiters helper for splitting and matching delimiters.
pub mod delimiter_set;
/// Bridge helper carrying the dictionaries and starter union of each round.
mod dict_refs;
/// Dictionary tables, starter indexes and the JSON snapshot codec.
pub mod dictionary_lib;
/// Core converter and public facade.
mod opencc;
/// Conversion configurations.
mod opencc_config;
/// Common helpers for zhoconv.
mod utils;

pub use crate::delimiter_set::{is_delimiter, DelimiterSet, FULL_DELIMITERS, FULL_DELIMITER_SET};
pub use crate::dict_refs::{DictRefs, DictRound};
pub use crate::opencc::{set_verbose_logging, zho_check, OpenCC};
pub use crate::opencc_config::{OpenccConfig, CONFIG_LIST};
pub use crate::utils::for_each_len_desc;

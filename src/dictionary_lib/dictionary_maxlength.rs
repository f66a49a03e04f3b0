//! The fixed set of lexicon tables used by the conversion engine.
//!
//! [`DictionaryMaxlength`] owns the eighteen named [`DictEntry`] slots and
//! the lazily built [`StarterUnion`](super::StarterUnion) cache. It loads
//! from the JSON snapshot (filesystem or embedded) or from plain-text
//! dictionary files, and can write both forms back out.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, RwLock};

use super::dict_entry::DictEntry;
use super::snapshot::parse_error_with_context;
use super::DictionaryError;
use crate::utils::info;

mod union_cache;
pub use union_cache::UnionKey;

// Last load/save failure, readable after constructors that cannot return
// an error themselves.
static LAST_ERROR: Mutex<Option<String>> = Mutex::new(None);

/// Slot name → dictionary text filename, in snapshot order.
const DICT_FILES: [(&str, &str); 18] = [
    ("st_characters", "STCharacters.txt"),
    ("st_phrases", "STPhrases.txt"),
    ("st_punctuations", "STPunctuations.txt"),
    ("ts_characters", "TSCharacters.txt"),
    ("ts_phrases", "TSPhrases.txt"),
    ("ts_punctuations", "TSPunctuations.txt"),
    ("tw_phrases", "TWPhrases.txt"),
    ("tw_phrases_rev", "TWPhrasesRev.txt"),
    ("tw_variants", "TWVariants.txt"),
    ("tw_variants_rev", "TWVariantsRev.txt"),
    ("tw_variants_rev_phrases", "TWVariantsRevPhrases.txt"),
    ("hk_variants", "HKVariants.txt"),
    ("hk_variants_rev", "HKVariantsRev.txt"),
    ("hk_variants_rev_phrases", "HKVariantsRevPhrases.txt"),
    ("jps_characters", "JPShinjitaiCharacters.txt"),
    ("jps_phrases", "JPShinjitaiPhrases.txt"),
    ("jp_variants", "JPVariants.txt"),
    ("jp_variants_rev", "JPVariantsRev.txt"),
];

/// Container of all lexicon tables used by the converter, each paired with
/// its exact key-length bounds for longest-match probing.
///
/// Slots are populated once by a loader and never mutated afterwards; the
/// union cache is the only interior-mutable state and is safe to share
/// across threads.
#[derive(Debug)]
pub struct DictionaryMaxlength {
    pub st_characters: DictEntry,
    pub st_phrases: DictEntry,
    pub st_punctuations: DictEntry,
    pub ts_characters: DictEntry,
    pub ts_phrases: DictEntry,
    pub ts_punctuations: DictEntry,
    pub tw_phrases: DictEntry,
    pub tw_phrases_rev: DictEntry,
    pub tw_variants: DictEntry,
    pub tw_variants_rev: DictEntry,
    pub tw_variants_rev_phrases: DictEntry,
    pub hk_variants: DictEntry,
    pub hk_variants_rev: DictEntry,
    pub hk_variants_rev_phrases: DictEntry,
    pub jps_characters: DictEntry,
    pub jps_phrases: DictEntry,
    pub jp_variants: DictEntry,
    pub jp_variants_rev: DictEntry,

    pub(crate) unions: RwLock<Arc<union_cache::Unions>>,
}

impl DictionaryMaxlength {
    /// Default filesystem location of the JSON snapshot, probed before
    /// falling back to the embedded copy.
    pub const DEFAULT_SNAPSHOT_PATH: &'static str = "dicts/dictionary_maxlength.json";

    /// Loads the default dictionary set: the filesystem snapshot when
    /// present, otherwise the snapshot embedded at compile time.
    pub fn new() -> Result<Self, DictionaryError> {
        let fs_path = Path::new(Self::DEFAULT_SNAPSHOT_PATH);
        let result = if fs_path.exists() {
            info(&format!(
                "loading dictionary snapshot from {}",
                fs_path.display()
            ));
            Self::from_json(fs_path)
        } else {
            info("loading embedded dictionary snapshot");
            Self::from_json_str(include_str!("dicts/dictionary_maxlength.json"))
        };
        result.map_err(|err| {
            Self::set_last_error(&format!("Failed to load dictionary: {err}"));
            err
        })
    }

    /// Loads a snapshot from a JSON file (UTF-8).
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| {
            DictionaryError::IoError(format!("Failed to read {}: {}", path.display(), err))
        })?;
        Self::from_json_str(&text)
    }

    /// Parses a snapshot from JSON text. Fails fast on schema violations;
    /// no partially populated container is ever returned.
    pub fn from_json_str(text: &str) -> Result<Self, DictionaryError> {
        serde_json::from_str::<Self>(text)
            .map(Self::finish)
            .map_err(|err| parse_error_with_context(text, &err))
    }

    /// Loads the plain-text dictionary files from the default `dicts`
    /// directory.
    pub fn from_dicts() -> Result<Self, DictionaryError> {
        Self::from_dicts_in("dicts")
    }

    /// Loads the plain-text dictionary files (filename table above) from
    /// `base_dir`. Malformed lines are skipped with a warning; a missing
    /// file fails the whole load.
    pub fn from_dicts_in<P: AsRef<Path>>(base_dir: P) -> Result<Self, DictionaryError> {
        let base = base_dir.as_ref();
        let mut out = Self::empty();
        for (name, filename) in DICT_FILES {
            let path = base.join(filename);
            let content = fs::read_to_string(&path).map_err(|err| {
                DictionaryError::IoError(format!("Failed to read {}: {}", path.display(), err))
            })?;
            if let Some(slot) = out.slot_mut(name) {
                *slot = DictEntry::from_dict_text(&content);
            }
        }
        Ok(out.finish())
    }

    /// Writes every slot back out as `key TAB value` text files under
    /// `base_dir` (regeneration helper, the inverse of
    /// [`from_dicts_in`](Self::from_dicts_in)).
    pub fn to_dicts<P: AsRef<Path>>(&self, base_dir: P) -> Result<(), DictionaryError> {
        let base = base_dir.as_ref();
        fs::create_dir_all(base)?;
        for ((_, filename), (_, entry)) in DICT_FILES.iter().zip(self.slots()) {
            let path = base.join(filename);
            let mut file = BufWriter::new(File::create(&path)?);
            for (key, value) in &entry.dict {
                writeln!(file, "{}\t{}", String::from_utf16_lossy(key), value)?;
            }
        }
        Ok(())
    }

    /// Serializes the snapshot to `path` in the canonical pretty form.
    pub fn serialize_to_json<P: AsRef<Path>>(&self, path: P) -> Result<(), DictionaryError> {
        fs::write(path.as_ref(), self.to_json_string(true)?).map_err(|err| {
            let err = DictionaryError::IoError(format!(
                "Failed to write {}: {}",
                path.as_ref().display(),
                err
            ));
            Self::set_last_error(&err.to_string());
            err
        })
    }

    /// Serializes the snapshot to `path` in compact form (no whitespace).
    pub fn serialize_to_json_compact<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<(), DictionaryError> {
        fs::write(path.as_ref(), self.to_json_string(false)?).map_err(|err| {
            DictionaryError::IoError(format!(
                "Failed to write {}: {}",
                path.as_ref().display(),
                err
            ))
        })
    }

    /// Renders the snapshot as a JSON string. Both modes emit entries in
    /// the canonical `(UTF-16 length, key)` order.
    pub fn to_json_string(&self, pretty: bool) -> Result<String, DictionaryError> {
        let rendered = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        rendered.map_err(|err| DictionaryError::ParseError(err.to_string()))
    }

    /// Rebuilds the starter indexes of every slot.
    pub fn populate_all(&mut self) {
        for entry in self.slots_mut() {
            entry.populate_starter_index();
        }
    }

    /// Finisher chained after deserialization or loading.
    #[inline]
    pub fn finish(mut self) -> Self {
        self.populate_all();
        self
    }

    /// Records the last dictionary load/save failure.
    pub fn set_last_error(err_msg: &str) {
        let mut last_error = LAST_ERROR.lock().unwrap();
        *last_error = Some(err_msg.to_string());
    }

    /// Returns the last recorded dictionary failure, if any.
    pub fn get_last_error() -> Option<String> {
        LAST_ERROR.lock().unwrap().clone()
    }

    /// All slots with their snapshot names, in canonical order.
    pub(crate) fn slots(&self) -> [(&'static str, &DictEntry); 18] {
        [
            ("st_characters", &self.st_characters),
            ("st_phrases", &self.st_phrases),
            ("st_punctuations", &self.st_punctuations),
            ("ts_characters", &self.ts_characters),
            ("ts_phrases", &self.ts_phrases),
            ("ts_punctuations", &self.ts_punctuations),
            ("tw_phrases", &self.tw_phrases),
            ("tw_phrases_rev", &self.tw_phrases_rev),
            ("tw_variants", &self.tw_variants),
            ("tw_variants_rev", &self.tw_variants_rev),
            ("tw_variants_rev_phrases", &self.tw_variants_rev_phrases),
            ("hk_variants", &self.hk_variants),
            ("hk_variants_rev", &self.hk_variants_rev),
            ("hk_variants_rev_phrases", &self.hk_variants_rev_phrases),
            ("jps_characters", &self.jps_characters),
            ("jps_phrases", &self.jps_phrases),
            ("jp_variants", &self.jp_variants),
            ("jp_variants_rev", &self.jp_variants_rev),
        ]
    }

    fn slots_mut(&mut self) -> [&mut DictEntry; 18] {
        [
            &mut self.st_characters,
            &mut self.st_phrases,
            &mut self.st_punctuations,
            &mut self.ts_characters,
            &mut self.ts_phrases,
            &mut self.ts_punctuations,
            &mut self.tw_phrases,
            &mut self.tw_phrases_rev,
            &mut self.tw_variants,
            &mut self.tw_variants_rev,
            &mut self.tw_variants_rev_phrases,
            &mut self.hk_variants,
            &mut self.hk_variants_rev,
            &mut self.hk_variants_rev_phrases,
            &mut self.jps_characters,
            &mut self.jps_phrases,
            &mut self.jp_variants,
            &mut self.jp_variants_rev,
        ]
    }

    /// Mutable slot access by snapshot name; `None` for unknown names.
    pub(crate) fn slot_mut(&mut self, name: &str) -> Option<&mut DictEntry> {
        Some(match name {
            "st_characters" => &mut self.st_characters,
            "st_phrases" => &mut self.st_phrases,
            "st_punctuations" => &mut self.st_punctuations,
            "ts_characters" => &mut self.ts_characters,
            "ts_phrases" => &mut self.ts_phrases,
            "ts_punctuations" => &mut self.ts_punctuations,
            "tw_phrases" => &mut self.tw_phrases,
            "tw_phrases_rev" => &mut self.tw_phrases_rev,
            "tw_variants" => &mut self.tw_variants,
            "tw_variants_rev" => &mut self.tw_variants_rev,
            "tw_variants_rev_phrases" => &mut self.tw_variants_rev_phrases,
            "hk_variants" => &mut self.hk_variants,
            "hk_variants_rev" => &mut self.hk_variants_rev,
            "hk_variants_rev_phrases" => &mut self.hk_variants_rev_phrases,
            "jps_characters" => &mut self.jps_characters,
            "jps_phrases" => &mut self.jps_phrases,
            "jp_variants" => &mut self.jp_variants,
            "jp_variants_rev" => &mut self.jp_variants_rev,
            _ => return None,
        })
    }

    /// Bare container with every slot empty and no starter indexes built;
    /// loaders fill the slots and call [`finish`](Self::finish).
    pub(crate) fn empty() -> Self {
        Self {
            st_characters: DictEntry::default(),
            st_phrases: DictEntry::default(),
            st_punctuations: DictEntry::default(),
            ts_characters: DictEntry::default(),
            ts_phrases: DictEntry::default(),
            ts_punctuations: DictEntry::default(),
            tw_phrases: DictEntry::default(),
            tw_phrases_rev: DictEntry::default(),
            tw_variants: DictEntry::default(),
            tw_variants_rev: DictEntry::default(),
            tw_variants_rev_phrases: DictEntry::default(),
            hk_variants: DictEntry::default(),
            hk_variants_rev: DictEntry::default(),
            hk_variants_rev_phrases: DictEntry::default(),
            jps_characters: DictEntry::default(),
            jps_phrases: DictEntry::default(),
            jp_variants: DictEntry::default(),
            jp_variants_rev: DictEntry::default(),
            unions: RwLock::new(Arc::new(union_cache::Unions::default())),
        }
    }
}

impl Default for DictionaryMaxlength {
    /// An empty but structurally complete container, used as the fallback
    /// when dictionary loading fails and in tests that bring their own
    /// tables.
    fn default() -> Self {
        Self::empty().finish()
    }
}

impl PartialEq for DictionaryMaxlength {
    /// Data equality across all slots; the union cache is derived state.
    fn eq(&self, other: &Self) -> bool {
        self.slots()
            .iter()
            .zip(other.slots().iter())
            .all(|((_, a), (_, b))| a == b)
    }
}

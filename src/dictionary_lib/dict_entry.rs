use rustc_hash::FxHashMap;

use super::starter_index::StarterIndex;

/// A single lexicon table: `source → target` mappings plus the exact
/// maximum and minimum key length, measured in **UTF-16 code units**
/// (a non-BMP code point counts as 2).
///
/// Keys are stored pre-encoded as `Box<[u16]>` so the segmentation engine
/// can probe candidate windows with zero-allocation `&[u16]` lookups.
/// Values stay as `Box<str>` and are appended to the output verbatim.
///
/// Entries are immutable once built. The [`index`](Self::index) field is a
/// runtime-only accelerator: it is never serialized and is rebuilt by
/// [`populate_starter_index`](Self::populate_starter_index) after any load
/// path that bypasses [`build_from_pairs`](Self::build_from_pairs).
#[derive(Debug)]
pub struct DictEntry {
    /// Mapping from UTF-16 encoded source key to target text.
    pub dict: FxHashMap<Box<[u16]>, Box<str>>,
    /// Exact maximum key length when the table is non-empty; `1` for an
    /// empty table (defensive default).
    pub max_key_len: usize,
    /// Exact minimum key length when the table is non-empty; `1` for an
    /// empty table.
    pub min_key_len: usize,
    /// Runtime starter metadata; see [`StarterIndex`].
    pub index: StarterIndex,
}

impl DictEntry {
    /// Builds an entry from `(key, value)` string pairs, computing the
    /// length bounds and the starter index eagerly.
    ///
    /// Duplicate keys keep the last value. Empty keys or values are the
    /// loader's concern and are not expected here.
    ///
    /// # Example
    /// ```
    /// use zhoconv::dictionary_lib::DictEntry;
    ///
    /// let entry = DictEntry::build_from_pairs(vec![
    ///     ("汉".to_string(), "漢".to_string()),
    ///     ("汉字".to_string(), "漢字".to_string()),
    /// ]);
    /// assert_eq!(entry.max_key_len, 2);
    /// assert_eq!(entry.min_key_len, 1);
    /// ```
    pub fn build_from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut dict: FxHashMap<Box<[u16]>, Box<str>> = FxHashMap::default();
        let mut max_key_len = 0usize;
        let mut min_key_len = usize::MAX;

        for (k, v) in pairs {
            let key: Box<[u16]> = k.encode_utf16().collect::<Vec<_>>().into_boxed_slice();
            let len = key.len();
            max_key_len = max_key_len.max(len);
            min_key_len = min_key_len.min(len);
            dict.insert(key, v.into_boxed_str());
        }

        if dict.is_empty() {
            max_key_len = 1;
            min_key_len = 1;
        }

        let mut entry = Self {
            dict,
            max_key_len,
            min_key_len,
            index: StarterIndex::default(),
        };
        entry.populate_starter_index();
        entry
    }

    /// Parses plain-text dictionary content into an entry.
    ///
    /// Line format: `key TAB value`, where only the first
    /// whitespace-separated token after the TAB is kept as the value.
    /// Blank lines and lines starting with `#` or `//` are skipped. A BOM
    /// on the first line's key is stripped. Malformed lines (no TAB, empty
    /// key or value) are skipped with a warning on stderr.
    pub fn from_dict_text(content: &str) -> Self {
        let mut pairs: Vec<(String, String)> = Vec::new();

        for (lineno, raw) in content.lines().enumerate() {
            let mut line = raw.trim();
            if lineno == 0 {
                if let Some(rest) = line.strip_prefix('\u{FEFF}') {
                    line = rest.trim_start();
                }
            }
            if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
                continue;
            }

            let Some((key, rest)) = line.split_once('\t') else {
                eprintln!(
                    "Warning: malformed (no TAB) at line {}: {}",
                    lineno + 1,
                    raw
                );
                continue;
            };
            // Only the first token of the value field counts; extra
            // tokens after a space or TAB are alternatives we ignore.
            let value = rest
                .trim_start_matches([' ', '\t'])
                .split([' ', '\t'])
                .next()
                .unwrap_or("");

            if key.is_empty() || value.is_empty() {
                eprintln!(
                    "Warning: empty key/value at line {}: {}",
                    lineno + 1,
                    raw
                );
                continue;
            }
            pairs.push((key.to_owned(), value.to_owned()));
        }

        Self::build_from_pairs(pairs)
    }

    /// Rebuilds the runtime starter index from the current map.
    pub fn populate_starter_index(&mut self) {
        self.index = StarterIndex::build(&self.dict);
    }

    /// Number of mappings in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.dict.len()
    }

    /// `true` when the table holds no mappings.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dict.is_empty()
    }
}

impl PartialEq for DictEntry {
    /// Data equality: mapping and length bounds. The runtime starter
    /// index is derived state and does not participate.
    fn eq(&self, other: &Self) -> bool {
        self.max_key_len == other.max_key_len
            && self.min_key_len == other.min_key_len
            && self.dict == other.dict
    }
}

impl Default for DictEntry {
    fn default() -> Self {
        Self {
            dict: FxHashMap::default(),
            max_key_len: 1,
            min_key_len: 1,
            index: StarterIndex::default(),
        }
    }
}

//! JSON snapshot codec for [`DictionaryMaxlength`].
//!
//! Schema: a single top-level object whose values are three-element
//! arrays, one per dictionary slot:
//!
//! ```json
//! {
//!   "st_characters": [ { "汉": "漢", "...": "..." }, 2, 1 ],
//!   "st_phrases":    [ { "头发": "頭髮" }, 16, 2 ]
//! }
//! ```
//!
//! The writer always emits the three-element form and writes map entries
//! sorted by `(UTF-16 length asc, key asc)` so snapshots are reproducible
//! in both pretty and compact modes. The reader rejects the legacy
//! two-element `[dict, maxLen]` form, ignores unknown top-level keys with
//! a warning, and validates `minLen <= maxLen` for non-empty bounds.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use super::dict_entry::DictEntry;
use super::dictionary_maxlength::DictionaryMaxlength;
use super::starter_index::StarterIndex;
use super::DictionaryError;

impl Serialize for DictEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Wrapper so the mapping serializes as a nested JSON object with
        // deterministic entry order. Sorting by raw UTF-16 units matches
        // the canonical snapshot order exactly.
        struct MapObj<'a>(&'a FxHashMap<Box<[u16]>, Box<str>>);
        impl Serialize for MapObj<'_> {
            fn serialize<S2>(&self, serializer: S2) -> Result<S2::Ok, S2::Error>
            where
                S2: Serializer,
            {
                let mut entries: Vec<(&[u16], &str)> =
                    self.0.iter().map(|(k, v)| (&**k, &**v)).collect();
                entries.sort_unstable_by(|(a, _), (b, _)| {
                    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
                });
                let mut inner = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    inner.serialize_entry(&String::from_utf16_lossy(k), v)?;
                }
                inner.end()
            }
        }

        let mut seq = serializer.serialize_seq(Some(3))?;
        seq.serialize_element(&MapObj(&self.dict))?;
        seq.serialize_element(&self.max_key_len)?;
        seq.serialize_element(&self.min_key_len)?;
        seq.end()
    }
}

impl<'de> Deserialize<'de> for DictEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntryVisitor;

        impl<'de> Visitor<'de> for EntryVisitor {
            type Value = DictEntry;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a `[ { key: value, ... }, maxLength, minLength ]` array")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<DictEntry, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let map: FxHashMap<String, String> = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::custom("missing mapping object"))?;
                let max_key_len: usize = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::custom("missing maxLength"))?;
                let min_key_len: usize = seq.next_element()?.ok_or_else(|| {
                    de::Error::custom(
                        "legacy two-element dictionary entry (missing minLength)",
                    )
                })?;
                if seq.next_element::<IgnoredAny>()?.is_some() {
                    return Err(de::Error::custom(
                        "dictionary entry has more than three elements",
                    ));
                }
                if max_key_len > 0 && min_key_len > max_key_len {
                    return Err(de::Error::custom("minLength cannot exceed maxLength"));
                }

                let mut dict: FxHashMap<Box<[u16]>, Box<str>> = FxHashMap::default();
                for (k, v) in map {
                    dict.insert(
                        k.encode_utf16().collect::<Vec<_>>().into_boxed_slice(),
                        v.into_boxed_str(),
                    );
                }

                Ok(DictEntry {
                    dict,
                    max_key_len,
                    min_key_len,
                    index: StarterIndex::default(),
                })
            }
        }

        deserializer.deserialize_seq(EntryVisitor)
    }
}

impl Serialize for DictionaryMaxlength {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let slots = self.slots();
        let mut map = serializer.serialize_map(Some(slots.len()))?;
        for (name, entry) in slots {
            map.serialize_entry(name, entry)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for DictionaryMaxlength {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DictsVisitor;

        impl<'de> Visitor<'de> for DictsVisitor {
            type Value = DictionaryMaxlength;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a top-level object of named dictionary entries")
            }

            fn visit_map<A>(self, mut map: A) -> Result<DictionaryMaxlength, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut out = DictionaryMaxlength::empty();
                while let Some(name) = map.next_key::<String>()? {
                    match out.slot_mut(&name) {
                        Some(slot) => *slot = map.next_value()?,
                        None => {
                            eprintln!("Warning: unknown dictionary key in snapshot: {name}");
                            let _: IgnoredAny = map.next_value()?;
                        }
                    }
                }
                Ok(out)
            }
        }

        deserializer.deserialize_map(DictsVisitor)
    }
}

/// Wraps a serde_json failure into a [`DictionaryError::ParseError`]
/// carrying the parse position and ~16 characters of surrounding context.
pub(crate) fn parse_error_with_context(src: &str, err: &serde_json::Error) -> DictionaryError {
    let line = err.line();
    let mut offset = if line == 0 {
        src.len()
    } else {
        let mut off = 0usize;
        for (idx, l) in src.split_inclusive('\n').enumerate() {
            if idx + 1 == line {
                off += err.column().saturating_sub(1).min(l.len());
                break;
            }
            off += l.len();
        }
        off.min(src.len())
    };
    while offset > 0 && !src.is_char_boundary(offset) {
        offset -= 1;
    }
    let start = src[..offset]
        .char_indices()
        .rev()
        .nth(15)
        .map(|(i, _)| i)
        .unwrap_or(0);
    let end = src[offset..]
        .char_indices()
        .nth(16)
        .map(|(i, _)| offset + i)
        .unwrap_or(src.len());
    let context = src[start..end].replace('\n', "\\n");
    DictionaryError::ParseError(format!("{err} near: \"{context}\""))
}

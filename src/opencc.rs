//! Core converter: the longest-match segment-replacement engine, the
//! per-config round pipelines and the public [`OpenCC`] facade.

use std::ops::Range;
use std::sync::atomic::Ordering;
use std::sync::{Arc, Mutex, OnceLock};

use rayon::prelude::*;

use crate::delimiter_set::FULL_DELIMITER_SET;
use crate::dict_refs::DictRefs;
use crate::dictionary_lib::{DictEntry, DictionaryMaxlength, StarterUnion, UnionKey};
use crate::opencc_config::{OpenccConfig, CONFIG_LIST};
use crate::utils::{code_point_at, for_each_len_desc, push_code_point, VERBOSE};

/// Inputs at or above this many UTF-16 code units are converted in
/// parallel chunks.
const PARALLEL_THRESHOLD: usize = 2048;
/// Code points examined by [`zho_check`].
const ZHO_CHECK_CODE_POINTS: usize = 100;

static SHARED_DICTIONARY: OnceLock<Arc<DictionaryMaxlength>> = OnceLock::new();

/// Toggles informational diagnostics (dictionary load source, fallback
/// transitions) on stderr. Off by default; warnings about malformed data
/// are emitted regardless.
pub fn set_verbose_logging(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

/// The process-wide dictionary set, loaded on first touch. A load failure
/// publishes an empty container and records the reason in the dictionary
/// error channel; conversion then degrades to identity.
fn shared_dictionary() -> Arc<DictionaryMaxlength> {
    SHARED_DICTIONARY
        .get_or_init(|| match DictionaryMaxlength::new() {
            Ok(d) => Arc::new(d),
            Err(_) => Arc::new(DictionaryMaxlength::default()),
        })
        .clone()
}

/// Classifies `input` as Traditional (1), Simplified (2) or neither (0).
///
/// Only the first 100 code points are examined, reduced to BMP CJK
/// Unified Ideographs (U+4E00–U+9FFF and Extension A). The reduced text
/// is converted both directions; a text that only the t2s direction
/// changes is Traditional, one that only the s2t direction changes is
/// Simplified, anything else (mixed, non-Chinese, empty) is 0.
///
/// ```
/// use zhoconv::zho_check;
/// assert_eq!(zho_check("繁體中文"), 1);
/// assert_eq!(zho_check("简体中文"), 2);
/// assert_eq!(zho_check("hello world!"), 0);
/// ```
pub fn zho_check(input: &str) -> i32 {
    zho_check_with(&shared_dictionary(), input)
}

#[inline]
fn is_cjk_ideograph(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}')
}

fn zho_check_with(dictionary: &DictionaryMaxlength, input: &str) -> i32 {
    let stripped: String = input
        .chars()
        .take(ZHO_CHECK_CODE_POINTS)
        .filter(|&c| is_cjk_ideograph(c))
        .collect();
    if stripped.is_empty() {
        return 0;
    }
    let a = OpenCC::segment_replace(
        &stripped,
        &dictionary.dicts_for(UnionKey::T2s),
        &dictionary.union_for(UnionKey::T2s),
    );
    let b = OpenCC::segment_replace(
        &stripped,
        &dictionary.dicts_for(UnionKey::S2t),
        &dictionary.union_for(UnionKey::S2t),
    );
    if a != stripped && b == stripped {
        1
    } else if b != stripped && a == stripped {
        2
    } else {
        0
    }
}

/// The conversion facade.
///
/// Holds the shared dictionary set, the currently selected config and the
/// last error. Construction never fails: an unknown config name falls
/// back to `s2t` and a dictionary load failure falls back to an empty
/// (identity) dictionary set; both record the reason in
/// [`get_last_error`](Self::get_last_error).
pub struct OpenCC {
    /// The shared dictionary set backing this instance.
    pub dictionary: Arc<DictionaryMaxlength>,
    config: OpenccConfig,
    last_error: Mutex<Option<String>>,
}

impl OpenCC {
    /// Creates a converter with the default `s2t` config.
    pub fn new() -> Self {
        Self::from_config("s2t")
    }

    /// Creates a converter for `config`. Unknown names select `s2t` and
    /// record the reason instead of failing.
    pub fn from_config(config: &str) -> Self {
        let dictionary = shared_dictionary();
        let mut instance = Self {
            dictionary,
            config: OpenccConfig::S2t,
            last_error: Mutex::new(DictionaryMaxlength::get_last_error()),
        };
        instance.set_config(config);
        instance
    }

    /// Selects the config used by [`convert`](Self::convert). Unknown
    /// names keep `s2t` and record the reason; valid names clear the last
    /// error.
    pub fn set_config(&mut self, config: &str) {
        match OpenccConfig::try_from(config) {
            Ok(cfg) => {
                self.config = cfg;
                *self.last_error.lock().unwrap() = None;
            }
            Err(()) => {
                self.config = OpenccConfig::S2t;
                *self.last_error.lock().unwrap() =
                    Some(format!("Invalid config: {config}; using s2t"));
            }
        }
    }

    /// Name of the currently selected config.
    pub fn get_config(&self) -> &'static str {
        self.config.as_str()
    }

    /// Last recorded error (unknown config, dictionary load failure), if
    /// any.
    pub fn get_last_error(&self) -> Option<String> {
        self.last_error.lock().unwrap().clone()
    }

    /// The supported config names, in canonical order.
    pub fn get_supported_configs() -> &'static [&'static str] {
        &CONFIG_LIST
    }

    /// Whether `config` names a supported conversion (case-insensitive).
    pub fn is_supported_config(config: &str) -> bool {
        OpenccConfig::try_from(config).is_ok()
    }

    /// Drops the cached starter unions of the shared dictionary; they
    /// rebuild lazily on next use. Safe concurrently with conversions.
    pub fn clear_unions(&self) {
        self.dictionary.clear_unions();
    }

    /// Classifies `input` script; see the free function [`zho_check`].
    pub fn zho_check(&self, input: &str) -> i32 {
        zho_check_with(&self.dictionary, input)
    }

    /// Converts `input` with the currently selected config.
    pub fn convert(&self, input: &str, punctuation: bool) -> String {
        self.convert_with_config(input, self.config, punctuation)
    }

    /// Converts `input` with an explicit typed config, bypassing string
    /// parsing.
    pub fn convert_with_config(
        &self,
        input: &str,
        config: OpenccConfig,
        punctuation: bool,
    ) -> String {
        match config {
            OpenccConfig::S2t => self.s2t(input, punctuation),
            OpenccConfig::T2s => self.t2s(input, punctuation),
            OpenccConfig::S2tw => self.s2tw(input, punctuation),
            OpenccConfig::Tw2s => self.tw2s(input, punctuation),
            OpenccConfig::S2twp => self.s2twp(input, punctuation),
            OpenccConfig::Tw2sp => self.tw2sp(input, punctuation),
            OpenccConfig::S2hk => self.s2hk(input, punctuation),
            OpenccConfig::Hk2s => self.hk2s(input, punctuation),
            OpenccConfig::T2tw => self.t2tw(input, punctuation),
            OpenccConfig::T2twp => self.t2twp(input, punctuation),
            OpenccConfig::T2hk => self.t2hk(input, punctuation),
            OpenccConfig::Tw2t => self.tw2t(input, punctuation),
            OpenccConfig::Tw2tp => self.tw2tp(input, punctuation),
            OpenccConfig::Hk2t => self.hk2t(input, punctuation),
            OpenccConfig::T2jp => self.t2jp(input, punctuation),
            OpenccConfig::Jp2t => self.jp2t(input, punctuation),
        }
    }

    // ---- per-direction pipelines -------------------------------------

    /// Simplified → Traditional.
    pub fn s2t(&self, input: &str, punctuation: bool) -> String {
        let d = &*self.dictionary;
        let key = if punctuation {
            UnionKey::S2tPunct
        } else {
            UnionKey::S2t
        };
        let round_1 = d.dicts_for(key);
        DictRefs::new(&round_1, d.union_for(key))
            .apply_segment_replace(input, Self::segment_replace)
    }

    /// Traditional → Simplified.
    pub fn t2s(&self, input: &str, punctuation: bool) -> String {
        let d = &*self.dictionary;
        let key = if punctuation {
            UnionKey::T2sPunct
        } else {
            UnionKey::T2s
        };
        let round_1 = d.dicts_for(key);
        DictRefs::new(&round_1, d.union_for(key))
            .apply_segment_replace(input, Self::segment_replace)
    }

    /// Simplified → Traditional (Taiwan standard).
    pub fn s2tw(&self, input: &str, punctuation: bool) -> String {
        let d = &*self.dictionary;
        let key = if punctuation {
            UnionKey::S2tPunct
        } else {
            UnionKey::S2t
        };
        let round_1 = d.dicts_for(key);
        let round_2 = d.dicts_for(UnionKey::TwVariantsOnly);
        DictRefs::new(&round_1, d.union_for(key))
            .with_round_2(&round_2, d.union_for(UnionKey::TwVariantsOnly))
            .apply_segment_replace(input, Self::segment_replace)
    }

    /// Traditional (Taiwan) → Simplified.
    pub fn tw2s(&self, input: &str, punctuation: bool) -> String {
        let d = &*self.dictionary;
        let key = if punctuation {
            UnionKey::T2sPunct
        } else {
            UnionKey::T2s
        };
        let round_1 = d.dicts_for(UnionKey::TwRevPair);
        let round_2 = d.dicts_for(key);
        DictRefs::new(&round_1, d.union_for(UnionKey::TwRevPair))
            .with_round_2(&round_2, d.union_for(key))
            .apply_segment_replace(input, Self::segment_replace)
    }

    /// Simplified → Traditional (Taiwan standard, with phrase mappings).
    pub fn s2twp(&self, input: &str, punctuation: bool) -> String {
        let d = &*self.dictionary;
        let key = if punctuation {
            UnionKey::S2tPunct
        } else {
            UnionKey::S2t
        };
        let round_1 = d.dicts_for(key);
        let round_2 = d.dicts_for(UnionKey::TwPhrasesOnly);
        let round_3 = d.dicts_for(UnionKey::TwVariantsOnly);
        DictRefs::new(&round_1, d.union_for(key))
            .with_round_2(&round_2, d.union_for(UnionKey::TwPhrasesOnly))
            .with_round_3(&round_3, d.union_for(UnionKey::TwVariantsOnly))
            .apply_segment_replace(input, Self::segment_replace)
    }

    /// Traditional (Taiwan, with phrase mappings) → Simplified.
    pub fn tw2sp(&self, input: &str, punctuation: bool) -> String {
        let d = &*self.dictionary;
        let key = if punctuation {
            UnionKey::T2sPunct
        } else {
            UnionKey::T2s
        };
        let round_1 = d.dicts_for(UnionKey::Tw2SpR1TwRevTriple);
        let round_2 = d.dicts_for(key);
        DictRefs::new(&round_1, d.union_for(UnionKey::Tw2SpR1TwRevTriple))
            .with_round_2(&round_2, d.union_for(key))
            .apply_segment_replace(input, Self::segment_replace)
    }

    /// Simplified → Traditional (Hong Kong standard).
    pub fn s2hk(&self, input: &str, punctuation: bool) -> String {
        let d = &*self.dictionary;
        let key = if punctuation {
            UnionKey::S2tPunct
        } else {
            UnionKey::S2t
        };
        let round_1 = d.dicts_for(key);
        let round_2 = d.dicts_for(UnionKey::HkVariantsOnly);
        DictRefs::new(&round_1, d.union_for(key))
            .with_round_2(&round_2, d.union_for(UnionKey::HkVariantsOnly))
            .apply_segment_replace(input, Self::segment_replace)
    }

    /// Traditional (Hong Kong) → Simplified.
    pub fn hk2s(&self, input: &str, punctuation: bool) -> String {
        let d = &*self.dictionary;
        let key = if punctuation {
            UnionKey::T2sPunct
        } else {
            UnionKey::T2s
        };
        let round_1 = d.dicts_for(UnionKey::HkRevPair);
        let round_2 = d.dicts_for(key);
        DictRefs::new(&round_1, d.union_for(UnionKey::HkRevPair))
            .with_round_2(&round_2, d.union_for(key))
            .apply_segment_replace(input, Self::segment_replace)
    }

    /// Traditional → Taiwan variants. The punctuation flag is accepted
    /// for signature uniformity and ignored.
    pub fn t2tw(&self, input: &str, _punctuation: bool) -> String {
        let d = &*self.dictionary;
        let round_1 = d.dicts_for(UnionKey::TwVariantsOnly);
        DictRefs::new(&round_1, d.union_for(UnionKey::TwVariantsOnly))
            .apply_segment_replace(input, Self::segment_replace)
    }

    /// Traditional → Taiwan variants with phrase mappings. Punctuation
    /// flag ignored.
    pub fn t2twp(&self, input: &str, _punctuation: bool) -> String {
        let d = &*self.dictionary;
        let round_1 = d.dicts_for(UnionKey::TwPhrasesOnly);
        let round_2 = d.dicts_for(UnionKey::TwVariantsOnly);
        DictRefs::new(&round_1, d.union_for(UnionKey::TwPhrasesOnly))
            .with_round_2(&round_2, d.union_for(UnionKey::TwVariantsOnly))
            .apply_segment_replace(input, Self::segment_replace)
    }

    /// Traditional → Hong Kong variants. Punctuation flag ignored.
    pub fn t2hk(&self, input: &str, _punctuation: bool) -> String {
        let d = &*self.dictionary;
        let round_1 = d.dicts_for(UnionKey::HkVariantsOnly);
        DictRefs::new(&round_1, d.union_for(UnionKey::HkVariantsOnly))
            .apply_segment_replace(input, Self::segment_replace)
    }

    /// Taiwan variants → Traditional. Punctuation flag ignored.
    pub fn tw2t(&self, input: &str, _punctuation: bool) -> String {
        let d = &*self.dictionary;
        let round_1 = d.dicts_for(UnionKey::TwRevPair);
        DictRefs::new(&round_1, d.union_for(UnionKey::TwRevPair))
            .apply_segment_replace(input, Self::segment_replace)
    }

    /// Taiwan variants and phrases → Traditional. Punctuation flag
    /// ignored.
    pub fn tw2tp(&self, input: &str, _punctuation: bool) -> String {
        let d = &*self.dictionary;
        let round_1 = d.dicts_for(UnionKey::TwRevPair);
        let round_2 = d.dicts_for(UnionKey::TwPhrasesRevOnly);
        DictRefs::new(&round_1, d.union_for(UnionKey::TwRevPair))
            .with_round_2(&round_2, d.union_for(UnionKey::TwPhrasesRevOnly))
            .apply_segment_replace(input, Self::segment_replace)
    }

    /// Hong Kong variants → Traditional. Punctuation flag ignored.
    pub fn hk2t(&self, input: &str, _punctuation: bool) -> String {
        let d = &*self.dictionary;
        let round_1 = d.dicts_for(UnionKey::HkRevPair);
        DictRefs::new(&round_1, d.union_for(UnionKey::HkRevPair))
            .apply_segment_replace(input, Self::segment_replace)
    }

    /// Traditional → Japanese Shinjitai. Punctuation flag ignored.
    pub fn t2jp(&self, input: &str, _punctuation: bool) -> String {
        let d = &*self.dictionary;
        let round_1 = d.dicts_for(UnionKey::JpVariantsOnly);
        DictRefs::new(&round_1, d.union_for(UnionKey::JpVariantsOnly))
            .apply_segment_replace(input, Self::segment_replace)
    }

    /// Japanese Shinjitai → Traditional. Punctuation flag ignored.
    pub fn jp2t(&self, input: &str, _punctuation: bool) -> String {
        let d = &*self.dictionary;
        let round_1 = d.dicts_for(UnionKey::JpRevTriple);
        DictRefs::new(&round_1, d.union_for(UnionKey::JpRevTriple))
            .apply_segment_replace(input, Self::segment_replace)
    }

    // ---- segmentation engine -----------------------------------------

    /// Runs one replacement round over `input`: every position is
    /// rewritten with the longest key of any dictionary in `dicts`
    /// starting there (ties broken by dictionary order), scanning left to
    /// right. Large inputs are processed as independent delimiter-bounded
    /// chunks; the result is identical to the sequential scan.
    pub fn segment_replace(input: &str, dicts: &[&DictEntry], union: &StarterUnion) -> String {
        if input.is_empty() {
            return String::new();
        }
        let units: Vec<u16> = input.encode_utf16().collect();
        if units.len() >= PARALLEL_THRESHOLD {
            let target = units.len().div_ceil(rayon::current_num_threads().max(1));
            let ranges = Self::split_ranges(&units, target);
            let pieces: Vec<String> = ranges
                .into_par_iter()
                .map(|range| {
                    let mut out = String::with_capacity(range.len() * 3);
                    Self::convert_segment(&units[range], dicts, union, &mut out);
                    out
                })
                .collect();
            let mut out = String::with_capacity(input.len() + (input.len() >> 4));
            for piece in &pieces {
                out.push_str(piece);
            }
            out
        } else {
            let mut out = String::with_capacity(input.len() + (input.len() >> 4));
            Self::convert_segment(&units, dicts, union, &mut out);
            out
        }
    }

    /// Greedy longest-match scan over one chunk of the UTF-16 buffer.
    fn convert_segment(units: &[u16], dicts: &[&DictEntry], union: &StarterUnion, out: &mut String) {
        let n = units.len();
        let mut i = 0usize;
        while i < n {
            let (cp, step) = code_point_at(units, i);
            if !union.starts_with(cp) {
                push_code_point(out, cp);
                i += step;
                continue;
            }
            let cap_here = union.max_cap.min(n - i);
            let mask = union.mask(cp);
            let long_lens = union.long_lens_for(cp);

            let mut matched_len = 0usize;
            let mut matched_val: Option<&str> = None;
            for_each_len_desc(mask, long_lens, cap_here, |len| {
                // A one-unit candidate at a surrogate pair would split it.
                if len == 1 && step == 2 {
                    return false;
                }
                let window = &units[i..i + len];
                for d in dicts {
                    if len < d.min_key_len || len > d.max_key_len {
                        continue;
                    }
                    if let Some(value) = d.dict.get(window).map(|v| &**v) {
                        matched_len = len;
                        matched_val = Some(value);
                        return true;
                    }
                }
                false
            });

            match matched_val {
                Some(value) => {
                    out.push_str(value);
                    i += matched_len;
                }
                None => {
                    push_code_point(out, cp);
                    i += step;
                }
            }
        }
    }

    /// Splits the buffer into chunks of roughly `target` code units for
    /// parallel conversion. Every cut lands immediately after a delimiter
    /// code unit; a stretch without delimiters extends its chunk past
    /// `target` until the next delimiter, or to the end of input.
    ///
    /// Multi-unit keys never contain delimiters and delimiters are never
    /// surrogate halves, so no dictionary match and no surrogate pair can
    /// straddle a chunk boundary: converting the chunks independently
    /// yields exactly the sequential result.
    pub fn split_ranges(units: &[u16], target: usize) -> Vec<Range<usize>> {
        let n = units.len();
        let target = target.max(1);
        let mut ranges = Vec::with_capacity(n / target + 1);
        let mut start = 0usize;
        while start < n {
            let mut end = (start + target).min(n);
            if end < n {
                // First delimiter at or after end-1: the chunk runs
                // through it.
                end = (end - 1..n)
                    .find(|&j| FULL_DELIMITER_SET.contains_unit(units[j]))
                    .map_or(n, |j| j + 1);
            }
            ranges.push(start..end);
            start = end;
        }
        ranges
    }
}

impl Default for OpenCC {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary_lib::DictEntry;

    fn union_of(dicts: &[&DictEntry]) -> StarterUnion {
        StarterUnion::build(dicts)
    }

    #[test]
    fn longest_match_wins() {
        let d = DictEntry::build_from_pairs(vec![
            ("你".into(), "X".into()),
            ("你好".into(), "Y".into()),
        ]);
        let dicts = [&d];
        let u = union_of(&dicts);
        assert_eq!(OpenCC::segment_replace("你好你", &dicts, &u), "YX");
    }

    #[test]
    fn dictionary_order_breaks_ties() {
        let first = DictEntry::build_from_pairs(vec![("你好".into(), "A".into())]);
        let second = DictEntry::build_from_pairs(vec![("你好".into(), "B".into())]);
        let dicts = [&first, &second];
        let u = union_of(&dicts);
        assert_eq!(OpenCC::segment_replace("你好", &dicts, &u), "A");

        let dicts_rev = [&second, &first];
        let u = union_of(&dicts_rev);
        assert_eq!(OpenCC::segment_replace("你好", &dicts_rev, &u), "B");
    }

    #[test]
    fn unmatched_text_passes_through() {
        let d = DictEntry::build_from_pairs(vec![("你".into(), "您".into())]);
        let dicts = [&d];
        let u = union_of(&dicts);
        assert_eq!(
            OpenCC::segment_replace("abc 好 123", &dicts, &u),
            "abc 好 123"
        );
        assert_eq!(OpenCC::segment_replace("", &dicts, &u), "");
    }

    #[test]
    fn surrogate_pairs_convert_atomically() {
        let d = DictEntry::build_from_pairs(vec![
            ("𠮷".into(), "吉".into()),
            ("𠮷野家".into(), "吉野家".into()),
        ]);
        let dicts = [&d];
        let u = union_of(&dicts);
        // phrase containing the pair, then the bare pair at the boundary
        assert_eq!(OpenCC::segment_replace("去𠮷野家𠮷", &dicts, &u), "去吉野家吉");
        // an astral code point with no mapping survives untouched
        assert_eq!(OpenCC::segment_replace("𠀀𠮷", &dicts, &u), "𠀀吉");
    }

    #[test]
    fn keys_beyond_mask_width_still_match() {
        let long_key: String = "长".repeat(70);
        let d = DictEntry::build_from_pairs(vec![
            (long_key.clone(), "LONG".into()),
            ("长".into(), "長".into()),
        ]);
        let dicts = [&d];
        let u = union_of(&dicts);
        let input = format!("{long_key}长");
        assert_eq!(OpenCC::segment_replace(&input, &dicts, &u), "LONG長");
    }

    #[test]
    fn split_ranges_cover_buffer_exactly() {
        let text = "你好，世界！".repeat(600);
        let units: Vec<u16> = text.encode_utf16().collect();
        let ranges = OpenCC::split_ranges(&units, 512);
        assert_eq!(ranges.first().map(|r| r.start), Some(0));
        assert_eq!(ranges.last().map(|r| r.end), Some(units.len()));
        for pair in ranges.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        // every internal cut sits right after a delimiter
        for r in &ranges[..ranges.len() - 1] {
            assert!(FULL_DELIMITER_SET.contains_unit(units[r.end - 1]));
        }
    }

    #[test]
    fn split_ranges_never_cut_runs_or_surrogate_pairs() {
        use crate::utils::is_low_surrogate;
        // Delimiter-free astral text must stay a single chunk.
        let text = "𠮷".repeat(500);
        let units: Vec<u16> = text.encode_utf16().collect();
        for target in [3, 7, 64, 101] {
            assert_eq!(OpenCC::split_ranges(&units, target), vec![0..units.len()]);
        }
        // With delimiters interspersed, cuts land after them only and
        // never on a low surrogate.
        let text = "𠮷𠮷𠮷，".repeat(200);
        let units: Vec<u16> = text.encode_utf16().collect();
        for target in [3, 7, 64, 101] {
            for r in OpenCC::split_ranges(&units, target) {
                assert!(!is_low_surrogate(units[r.start]), "cut inside a pair");
                assert!(FULL_DELIMITER_SET.contains_unit(units[r.end - 1]) || r.end == units.len());
            }
        }
    }

    #[test]
    fn delimiter_free_phrase_run_converts_like_sequential() {
        // A phrase-forming run with no delimiters anywhere: the parallel
        // driver must not introduce a cut that splits a match.
        let d = DictEntry::build_from_pairs(vec![
            ("好好".into(), "X".into()),
            ("好".into(), "佳".into()),
        ]);
        let dicts = [&d];
        let u = union_of(&dicts);
        let text = "好好".repeat(1500); // 3000 units, above the threshold

        let parallel = OpenCC::segment_replace(&text, &dicts, &u);

        let units: Vec<u16> = text.encode_utf16().collect();
        let mut sequential = String::new();
        OpenCC::convert_segment(&units, &dicts, &u, &mut sequential);
        assert_eq!(parallel, sequential);
        assert_eq!(parallel, "X".repeat(1500));
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let d = DictEntry::build_from_pairs(vec![
            ("你好".into(), "您好".into()),
            ("世界".into(), "世間".into()),
            ("好".into(), "佳".into()),
        ]);
        let dicts = [&d];
        let u = union_of(&dicts);
        let text = "你好，世界！好text。".repeat(400); // well above the threshold

        let parallel = OpenCC::segment_replace(&text, &dicts, &u);

        let units: Vec<u16> = text.encode_utf16().collect();
        let mut sequential = String::new();
        OpenCC::convert_segment(&units, &dicts, &u, &mut sequential);
        assert_eq!(parallel, sequential);
    }
}

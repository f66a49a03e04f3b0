//! Cached [`StarterUnion`] instances for the fixed conversion groups.

use std::sync::{Arc, OnceLock};

use super::DictionaryMaxlength;
use crate::dictionary_lib::{DictEntry, StarterUnion};

/// One cache generation: a slot per [`UnionKey`]. Each slot publishes its
/// union exactly once; a reset swaps in a whole new generation, so readers
/// holding the old one stay valid.
#[derive(Default, Debug)]
pub(crate) struct Unions {
    s2t: OnceLock<Arc<StarterUnion>>,
    s2t_punct: OnceLock<Arc<StarterUnion>>,
    t2s: OnceLock<Arc<StarterUnion>>,
    t2s_punct: OnceLock<Arc<StarterUnion>>,

    tw_phrases_only: OnceLock<Arc<StarterUnion>>,
    tw_variants_only: OnceLock<Arc<StarterUnion>>,
    tw_phrases_rev_only: OnceLock<Arc<StarterUnion>>,
    tw_rev_pair: OnceLock<Arc<StarterUnion>>,
    tw2sp_r1_tw_rev_triple: OnceLock<Arc<StarterUnion>>,

    hk_variants_only: OnceLock<Arc<StarterUnion>>,
    hk_rev_pair: OnceLock<Arc<StarterUnion>>,

    jp_variants_only: OnceLock<Arc<StarterUnion>>,
    jp_rev_triple: OnceLock<Arc<StarterUnion>>,
}

/// Logical keys for the cached unions. Each key names a fixed, ordered
/// group of dictionary slots; the order is the probe precedence the
/// segmentation engine uses on length ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnionKey {
    /// `st_phrases, st_characters`
    S2t,
    /// `st_phrases, st_characters, st_punctuations`
    S2tPunct,
    /// `ts_phrases, ts_characters`
    T2s,
    /// `ts_phrases, ts_characters, ts_punctuations`
    T2sPunct,
    /// `tw_phrases`
    TwPhrasesOnly,
    /// `tw_variants`
    TwVariantsOnly,
    /// `tw_phrases_rev`
    TwPhrasesRevOnly,
    /// `tw_variants_rev_phrases, tw_variants_rev`
    TwRevPair,
    /// `tw_phrases_rev, tw_variants_rev_phrases, tw_variants_rev`
    Tw2SpR1TwRevTriple,
    /// `hk_variants`
    HkVariantsOnly,
    /// `hk_variants_rev_phrases, hk_variants_rev`
    HkRevPair,
    /// `jp_variants`
    JpVariantsOnly,
    /// `jps_phrases, jps_characters, jp_variants_rev`
    JpRevTriple,
}

impl DictionaryMaxlength {
    /// The ordered dictionary group behind a [`UnionKey`]. Rounds built by
    /// the facade use exactly this list, which keeps the cached union and
    /// the probe order in lockstep.
    pub fn dicts_for(&self, key: UnionKey) -> Vec<&DictEntry> {
        match key {
            UnionKey::S2t => vec![&self.st_phrases, &self.st_characters],
            UnionKey::S2tPunct => vec![
                &self.st_phrases,
                &self.st_characters,
                &self.st_punctuations,
            ],
            UnionKey::T2s => vec![&self.ts_phrases, &self.ts_characters],
            UnionKey::T2sPunct => vec![
                &self.ts_phrases,
                &self.ts_characters,
                &self.ts_punctuations,
            ],
            UnionKey::TwPhrasesOnly => vec![&self.tw_phrases],
            UnionKey::TwVariantsOnly => vec![&self.tw_variants],
            UnionKey::TwPhrasesRevOnly => vec![&self.tw_phrases_rev],
            UnionKey::TwRevPair => vec![&self.tw_variants_rev_phrases, &self.tw_variants_rev],
            UnionKey::Tw2SpR1TwRevTriple => vec![
                &self.tw_phrases_rev,
                &self.tw_variants_rev_phrases,
                &self.tw_variants_rev,
            ],
            UnionKey::HkVariantsOnly => vec![&self.hk_variants],
            UnionKey::HkRevPair => vec![&self.hk_variants_rev_phrases, &self.hk_variants_rev],
            UnionKey::JpVariantsOnly => vec![&self.jp_variants],
            UnionKey::JpRevTriple => vec![
                &self.jps_phrases,
                &self.jps_characters,
                &self.jp_variants_rev,
            ],
        }
    }

    /// Returns the cached `StarterUnion` for `key`, building and
    /// publishing it on first use. Later callers share the installed
    /// value.
    pub fn union_for(&self, key: UnionKey) -> Arc<StarterUnion> {
        let unions = self.unions.read().unwrap().clone();
        let slot = match key {
            UnionKey::S2t => &unions.s2t,
            UnionKey::S2tPunct => &unions.s2t_punct,
            UnionKey::T2s => &unions.t2s,
            UnionKey::T2sPunct => &unions.t2s_punct,
            UnionKey::TwPhrasesOnly => &unions.tw_phrases_only,
            UnionKey::TwVariantsOnly => &unions.tw_variants_only,
            UnionKey::TwPhrasesRevOnly => &unions.tw_phrases_rev_only,
            UnionKey::TwRevPair => &unions.tw_rev_pair,
            UnionKey::Tw2SpR1TwRevTriple => &unions.tw2sp_r1_tw_rev_triple,
            UnionKey::HkVariantsOnly => &unions.hk_variants_only,
            UnionKey::HkRevPair => &unions.hk_rev_pair,
            UnionKey::JpVariantsOnly => &unions.jp_variants_only,
            UnionKey::JpRevTriple => &unions.jp_rev_triple,
        };
        slot.get_or_init(|| Arc::new(StarterUnion::build(&self.dicts_for(key))))
            .clone()
    }

    /// Drops every cached union; each rebuilds lazily on next use. Safe to
    /// call while conversions are running — they keep the generation they
    /// already hold.
    pub fn clear_unions(&self) {
        *self.unions.write().unwrap() = Arc::new(Unions::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_cached() {
        let d = DictionaryMaxlength::default();
        let a = d.union_for(UnionKey::S2t);
        let b = d.union_for(UnionKey::S2t);
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn union_init_once_parallel() {
        use rayon::prelude::*;
        let d = DictionaryMaxlength::default();
        (0..32).into_par_iter().for_each(|_| {
            let _ = d.union_for(UnionKey::T2s);
        });
        let a = d.union_for(UnionKey::T2s);
        let b = d.union_for(UnionKey::T2s);
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn union_clear_invalidates() {
        let d = DictionaryMaxlength::default();
        let a = d.union_for(UnionKey::S2t);
        d.clear_unions();
        let c = d.union_for(UnionKey::S2t);
        assert!(!Arc::ptr_eq(&a, &c));
    }

    #[test]
    fn union_keys_distinct() {
        let d = DictionaryMaxlength::default();
        let a = d.union_for(UnionKey::S2t);
        let b = d.union_for(UnionKey::S2tPunct);
        assert!(!Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn groups_follow_the_fixed_table() {
        let d = DictionaryMaxlength::default();
        assert_eq!(d.dicts_for(UnionKey::S2t).len(), 2);
        assert_eq!(d.dicts_for(UnionKey::S2tPunct).len(), 3);
        assert_eq!(d.dicts_for(UnionKey::Tw2SpR1TwRevTriple).len(), 3);
        assert_eq!(d.dicts_for(UnionKey::JpRevTriple).len(), 3);
        assert_eq!(d.dicts_for(UnionKey::TwVariantsOnly).len(), 1);
        // Probe precedence: phrases before characters.
        let s2t = d.dicts_for(UnionKey::S2t);
        assert!(std::ptr::eq(s2t[0], &d.st_phrases));
        assert!(std::ptr::eq(s2t[1], &d.st_characters));
    }
}

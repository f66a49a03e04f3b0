use rustc_hash::FxHashMap;

use super::dict_entry::DictEntry;

/// Merged starter metadata for an ordered group of dictionaries.
///
/// A `StarterUnion` ORs the per-dictionary length masks of a conversion
/// round into one lookup structure so the segmentation engine can answer
/// "can any dictionary of this round match a key of length `L` starting
/// here?" with a couple of bit tests. The dictionary order of the group is
/// not stored here; the round carries it and uses it to break length ties
/// by probing dictionaries in priority order.
///
/// # Layout
///
/// BMP starters (`U+0000..=U+FFFF`) use dense arrays indexed by code
/// point; astral starters are rare and live in sparse maps:
///
/// - [`bmp_mask`](Self::bmp_mask) / [`astral_mask`](Self::astral_mask) —
///   length bitmask per starter (bit `L` ⇒ some key of UTF-16 length `L`).
/// - [`bmp_starts`](Self::bmp_starts) — one bit per BMP code point: "some
///   key starts here". This is the O(1) early-reject gate probed before
///   anything else; for astral starters the gate is `astral_mask`
///   membership itself.
/// - [`long_lens`](Self::long_lens) — merged key lengths at or above the
///   mask width ([`LEN_MASK_BITS`](super::LEN_MASK_BITS)), sorted
///   descending.
/// - [`max_cap`](Self::max_cap) — max `max_key_len` across the group.
///
/// Unions are built lazily per [`UnionKey`](super::UnionKey), cached, and
/// immutable once installed.
#[derive(Debug, Default)]
pub struct StarterUnion {
    /// Dense BMP per-starter length bitmask (`0x10000` entries).
    pub bmp_mask: Vec<u64>,
    /// Dense BMP membership bitset (`0x10000 / 64` words): bit set iff any
    /// key of the group starts with that code point.
    pub bmp_starts: Vec<u64>,
    /// Sparse length bitmask for astral starters.
    pub astral_mask: FxHashMap<u32, u64>,
    /// Merged overflow key lengths (at or above the mask width) per
    /// starter, sorted descending.
    pub long_lens: FxHashMap<u32, Vec<u16>>,
    /// Maximum key length across the whole group.
    pub max_cap: usize,
}

impl StarterUnion {
    /// Merges the starter indexes of `dicts` (a round's ordered group).
    ///
    /// Every dictionary must have its starter index populated, which all
    /// load paths guarantee. Only starters that actually occur are
    /// visited, so building is linear in the number of distinct starters.
    pub fn build(dicts: &[&DictEntry]) -> Self {
        const N: usize = 0x10000;
        let mut bmp_mask = vec![0u64; N];
        let mut bmp_starts = vec![0u64; N / 64];
        let mut astral_mask: FxHashMap<u32, u64> = FxHashMap::default();
        let mut long_lens: FxHashMap<u32, Vec<u16>> = FxHashMap::default();
        let mut max_cap = 0usize;

        for d in dicts {
            max_cap = max_cap.max(d.max_key_len);

            for (&cp, &mask) in &d.index.starters {
                if mask == 0 {
                    continue;
                }
                if cp <= 0xFFFF {
                    bmp_mask[cp as usize] |= mask;
                    bmp_starts[(cp >> 6) as usize] |= 1u64 << (cp & 63);
                } else {
                    *astral_mask.entry(cp).or_insert(0) |= mask;
                }
            }

            for (&cp, lens) in &d.index.long_lens {
                long_lens.entry(cp).or_default().extend_from_slice(lens);
                if cp <= 0xFFFF {
                    bmp_starts[(cp >> 6) as usize] |= 1u64 << (cp & 63);
                } else {
                    astral_mask.entry(cp).or_insert(0);
                }
            }
        }

        for lens in long_lens.values_mut() {
            lens.sort_unstable_by(|a, b| b.cmp(a));
            lens.dedup();
        }

        Self {
            bmp_mask,
            bmp_starts,
            astral_mask,
            long_lens,
            max_cap,
        }
    }

    /// O(1) gate: does any key of the group start with `cp`?
    #[inline(always)]
    pub fn starts_with(&self, cp: u32) -> bool {
        if cp <= 0xFFFF {
            self.bmp_starts
                .get((cp >> 6) as usize)
                .is_some_and(|w| (w >> (cp & 63)) & 1 == 1)
        } else {
            self.astral_mask.contains_key(&cp)
        }
    }

    /// Length bitmask for `cp` (0 when no key of mask-range length starts
    /// with it).
    #[inline(always)]
    pub fn mask(&self, cp: u32) -> u64 {
        if cp <= 0xFFFF {
            self.bmp_mask.get(cp as usize).copied().unwrap_or(0)
        } else {
            self.astral_mask.get(&cp).copied().unwrap_or(0)
        }
    }

    /// Overflow lengths (at or above the mask width) for `cp`, longest
    /// first.
    #[inline(always)]
    pub fn long_lens_for(&self, cp: u32) -> Option<&[u16]> {
        self.long_lens.get(&cp).map(|v| v.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary_lib::LEN_MASK_BITS;
    use crate::utils::code_point_at;

    #[test]
    fn union_ors_masks_across_group() {
        let a = DictEntry::build_from_pairs(vec![("你".into(), "您".into())]);
        let b = DictEntry::build_from_pairs(vec![("你好".into(), "您好".into())]);
        let u = StarterUnion::build(&[&a, &b]);

        let cp = '你' as u32;
        assert!(u.starts_with(cp));
        assert_eq!(u.mask(cp), (1 << 1) | (1 << 2));
        assert_eq!(u.max_cap, 2);
        assert!(!u.starts_with('好' as u32));
    }

    #[test]
    fn astral_starters_are_sparse() {
        let d = DictEntry::build_from_pairs(vec![("𠮷野".into(), "吉野".into())]);
        let u = StarterUnion::build(&[&d]);

        assert!(u.starts_with(0x20BB7));
        assert_eq!(u.mask(0x20BB7), 1 << 3);
        assert!(!u.starts_with(0x20BB8));
    }

    #[test]
    fn overflow_lengths_gate_membership() {
        let key: String = "龙".repeat(64);
        let d = DictEntry::build_from_pairs(vec![(key, "龍".into())]);
        let u = StarterUnion::build(&[&d]);

        let cp = '龙' as u32;
        assert!(u.starts_with(cp));
        assert_eq!(u.mask(cp), 0);
        assert_eq!(u.long_lens_for(cp), Some(&[64u16][..]));
        assert_eq!(u.max_cap, 64);
        assert!(u.max_cap >= LEN_MASK_BITS);
    }

    #[test]
    fn every_union_bit_is_backed_by_some_dict() {
        let a = DictEntry::build_from_pairs(vec![
            ("汉".into(), "漢".into()),
            ("汉字".into(), "漢字".into()),
        ]);
        let b = DictEntry::build_from_pairs(vec![("字".into(), "字".into())]);
        let u = StarterUnion::build(&[&a, &b]);
        let group = [&a, &b];

        for (cp, mask) in u.bmp_mask.iter().enumerate().filter(|(_, &m)| m != 0) {
            for len in 1..LEN_MASK_BITS {
                if mask & (1 << len) != 0 {
                    let backed = group.iter().any(|d| {
                        d.dict
                            .keys()
                            .any(|k| k.len() == len && code_point_at(k, 0).0 == cp as u32)
                    });
                    assert!(backed, "bit {len} for U+{cp:04X} has no backing key");
                }
            }
        }
    }

    #[test]
    fn default_union_rejects_everything() {
        let u = StarterUnion::default();
        assert!(!u.starts_with('你' as u32));
        assert_eq!(u.mask('你' as u32), 0);
    }
}

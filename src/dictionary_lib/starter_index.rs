use rustc_hash::FxHashMap;

use crate::utils::code_point_at;

/// Width of the per-starter key-length bitmask.
///
/// Bit `L` of a mask (for `1 <= L <= LEN_MASK_BITS - 1`) records that some
/// key of UTF-16 length `L` begins with the starter. Lengths at or above
/// the width land in the sparse overflow set instead of the mask.
pub const LEN_MASK_BITS: usize = 64;

/// Per-dictionary starter metadata: for every first code point of a key,
/// which key lengths (in UTF-16 code units) begin with it.
///
/// Built once after a [`DictEntry`](super::DictEntry) is loaded and never
/// mutated afterwards. The segmentation engine does not consult indexes of
/// individual dictionaries directly; it works through the merged
/// [`StarterUnion`](super::StarterUnion) of a conversion round, which ORs
/// these masks together.
#[derive(Debug, Default, Clone)]
pub struct StarterIndex {
    /// Starter code point → length bitmask. No entry is ever present with
    /// an all-zero mask.
    pub starters: FxHashMap<u32, u64>,
    /// Starter code point → key lengths at or above [`LEN_MASK_BITS`],
    /// sorted descending and deduplicated.
    pub long_lens: FxHashMap<u32, Vec<u16>>,
    /// Maximum key length observed for any starter. No mask bit is ever
    /// set above it.
    pub cap: usize,
}

impl StarterIndex {
    /// Builds the index from a dictionary map. Keys are UTF-16 encoded;
    /// the starter of a key beginning with a surrogate pair is the full
    /// astral code point, not the lone high surrogate.
    pub fn build(dict: &FxHashMap<Box<[u16]>, Box<str>>) -> Self {
        let mut starters: FxHashMap<u32, u64> = FxHashMap::default();
        let mut long_lens: FxHashMap<u32, Vec<u16>> = FxHashMap::default();
        let mut cap = 0usize;

        for key in dict.keys() {
            if key.is_empty() {
                continue;
            }
            let (cp, _) = code_point_at(key, 0);
            let len = key.len();
            cap = cap.max(len);
            if len < LEN_MASK_BITS {
                *starters.entry(cp).or_insert(0) |= 1u64 << len;
            } else {
                long_lens.entry(cp).or_default().push(len as u16);
            }
        }

        for lens in long_lens.values_mut() {
            lens.sort_unstable_by(|a, b| b.cmp(a));
            lens.dedup();
        }

        Self {
            starters,
            long_lens,
            cap,
        }
    }
}

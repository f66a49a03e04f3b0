use std::sync::Arc;

use crate::dictionary_lib::{DictEntry, StarterUnion};

/// One conversion round: the ordered dictionaries to probe plus the
/// prebuilt [`StarterUnion`] merged from exactly those dictionaries.
///
/// Probe order is precedence: on a length tie the first dictionary that
/// holds the key wins.
pub struct DictRound<'a> {
    pub dicts: &'a [&'a DictEntry],
    pub union: Arc<StarterUnion>,
}

/// Holds up to three conversion rounds. Round 1 is required, rounds 2 and
/// 3 optional; the output of each round feeds the next.
///
/// The struct is a small orchestrator: assemble the rounds, then call
/// [`apply_segment_replace`](Self::apply_segment_replace) with the
/// engine's segment/replace closure.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use zhoconv::dictionary_lib::{DictEntry, StarterUnion};
/// use zhoconv::DictRefs;
///
/// let d = DictEntry::build_from_pairs(vec![("你".into(), "您".into())]);
/// let dicts: Vec<&DictEntry> = vec![&d];
/// let union = Arc::new(StarterUnion::build(&dicts));
///
/// let refs = DictRefs::new(&dicts, union);
/// let out = refs.apply_segment_replace("你好", |input, _dicts, _union| {
///     input.to_string() // a real caller runs the segment engine here
/// });
/// assert_eq!(out, "你好");
/// ```
pub struct DictRefs<'a> {
    round_1: DictRound<'a>,
    round_2: Option<DictRound<'a>>,
    round_3: Option<DictRound<'a>>,
}

impl<'a> DictRefs<'a> {
    /// Creates a `DictRefs` with the required round 1. `union` must be
    /// built from exactly `dicts` (the cached per-key unions guarantee
    /// this when both come from the same key).
    pub fn new(dicts: &'a [&'a DictEntry], union: Arc<StarterUnion>) -> Self {
        Self {
            round_1: DictRound { dicts, union },
            round_2: None,
            round_3: None,
        }
    }

    /// Adds optional round 2.
    pub fn with_round_2(mut self, dicts: &'a [&'a DictEntry], union: Arc<StarterUnion>) -> Self {
        self.round_2 = Some(DictRound { dicts, union });
        self
    }

    /// Adds optional round 3.
    pub fn with_round_3(mut self, dicts: &'a [&'a DictEntry], union: Arc<StarterUnion>) -> Self {
        self.round_3 = Some(DictRound { dicts, union });
        self
    }

    /// Runs the rounds sequentially through `segment_replace`, feeding
    /// each round's output into the next.
    pub fn apply_segment_replace<F>(&self, input: &str, segment_replace: F) -> String
    where
        F: Fn(&str, &[&DictEntry], &StarterUnion) -> String,
    {
        let mut out = segment_replace(input, self.round_1.dicts, &self.round_1.union);
        if let Some(r2) = &self.round_2 {
            out = segment_replace(&out, r2.dicts, &r2.union);
        }
        if let Some(r3) = &self.round_3 {
            out = segment_replace(&out, r3.dicts, &r3.union);
        }
        out
    }
}

use once_cell::sync::Lazy;

/// Full delimiter table used by the parallel split driver.
///
/// Contains ASCII whitespace and punctuation, CJK punctuation (comma,
/// ideographic period, corner brackets, book-title marks), full-width
/// marks and line terminators. The segmentation engine may cut the input
/// into independent chunks immediately after any of these code points.
pub const FULL_DELIMITERS: &str =
    " \t\n\r!\"#$%&'()*+,-./:;<=>?@[\\]^_{}|~＝、。﹁﹂—－（）《》〈〉？！…／＼︒︑︔︓︿﹀︹︺︙︐［﹇］﹈︕︖︰︳︴︽︾︵︶｛︷｝︸﹃﹄【︻】︼　～．，；：";

/// Compact delimiter set optimized for per-code-unit membership tests.
///
/// ASCII lives in a single `u128` mask; the rest of the BMP in a
/// 65,536-bit table (`[u64; 1024]`, ~8 KB). Astral code points are never
/// delimiters, so surrogate units always test negative.
#[derive(Copy, Clone)]
pub struct DelimiterSet {
    ascii_mask: u128,      // bits 0..=127
    bmp_bits: [u64; 1024], // 0x0000..=0xFFFF
}

impl DelimiterSet {
    /// Tests whether the given [`char`] is a delimiter.
    ///
    /// ```
    /// use zhoconv::delimiter_set::is_delimiter;
    /// assert!(is_delimiter('。'));
    /// assert!(!is_delimiter('你'));
    /// ```
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        let u = c as u32;
        if u <= 0x7F {
            return ((self.ascii_mask >> u) & 1) == 1;
        }
        if u <= 0xFFFF {
            return ((self.bmp_bits[(u >> 6) as usize] >> (u & 63)) & 1) == 1;
        }
        false
    }

    /// Tests a raw UTF-16 code unit. Surrogate units are never delimiters,
    /// so this is safe to call at any buffer position.
    #[inline]
    pub fn contains_unit(&self, u: u16) -> bool {
        let u = u as u32;
        if u <= 0x7F {
            return ((self.ascii_mask >> u) & 1) == 1;
        }
        ((self.bmp_bits[(u >> 6) as usize] >> (u & 63)) & 1) == 1
    }
}

/// Global [`DelimiterSet`] built once from [`FULL_DELIMITERS`]; all
/// lookups afterwards are lock-free bit tests.
pub static FULL_DELIMITER_SET: Lazy<DelimiterSet> = Lazy::new(|| {
    let mut ascii: u128 = 0;
    let mut bmp = [0u64; 1024];

    for ch in FULL_DELIMITERS.chars() {
        let u = ch as u32;
        if u <= 0x7F {
            ascii |= 1u128 << u;
        }
        if u <= 0xFFFF {
            bmp[(u >> 6) as usize] |= 1u64 << (u & 63);
        }
    }

    DelimiterSet {
        ascii_mask: ascii,
        bmp_bits: bmp,
    }
});

/// Checks whether a character acts as a segmentation boundary.
#[inline]
pub fn is_delimiter(c: char) -> bool {
    FULL_DELIMITER_SET.contains(c)
}

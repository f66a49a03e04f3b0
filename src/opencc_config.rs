/// Supported conversion configuration names, in canonical order.
pub const CONFIG_LIST: [&str; 16] = [
    "s2t", "t2s", "s2tw", "tw2s", "s2twp", "tw2sp", "s2hk", "hk2s", "t2tw", "t2twp", "t2hk",
    "tw2t", "tw2tp", "hk2t", "t2jp", "jp2t",
];

/// Strongly-typed conversion configuration.
///
/// Each variant names one conversion direction; the `p` suffix means
/// region-specific phrase mappings are applied as an extra round. Use
/// [`OpenCC::convert_with_config`](crate::OpenCC::convert_with_config)
/// with these to skip string parsing in hot paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpenccConfig {
    /// Simplified → Traditional.
    S2t,
    /// Traditional → Simplified.
    T2s,
    /// Simplified → Traditional (Taiwan).
    S2tw,
    /// Traditional (Taiwan) → Simplified.
    Tw2s,
    /// Simplified → Traditional (Taiwan, with phrases).
    S2twp,
    /// Traditional (Taiwan, with phrases) → Simplified.
    Tw2sp,
    /// Simplified → Traditional (Hong Kong).
    S2hk,
    /// Traditional (Hong Kong) → Simplified.
    Hk2s,
    /// Traditional → Traditional (Taiwan).
    T2tw,
    /// Traditional → Traditional (Taiwan, with phrases).
    T2twp,
    /// Traditional → Traditional (Hong Kong).
    T2hk,
    /// Traditional (Taiwan) → Traditional.
    Tw2t,
    /// Traditional (Taiwan, with phrases) → Traditional.
    Tw2tp,
    /// Traditional (Hong Kong) → Traditional.
    Hk2t,
    /// Traditional → Japanese Shinjitai.
    T2jp,
    /// Japanese Shinjitai → Traditional.
    Jp2t,
}

impl OpenccConfig {
    /// Lowercase name of this config (`S2twp` → `"s2twp"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S2t => "s2t",
            Self::T2s => "t2s",
            Self::S2tw => "s2tw",
            Self::Tw2s => "tw2s",
            Self::S2twp => "s2twp",
            Self::Tw2sp => "tw2sp",
            Self::S2hk => "s2hk",
            Self::Hk2s => "hk2s",
            Self::T2tw => "t2tw",
            Self::T2twp => "t2twp",
            Self::T2hk => "t2hk",
            Self::Tw2t => "tw2t",
            Self::Tw2tp => "tw2tp",
            Self::Hk2t => "hk2t",
            Self::T2jp => "t2jp",
            Self::Jp2t => "jp2t",
        }
    }
}

impl std::fmt::Display for OpenccConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for OpenccConfig {
    type Error = ();

    /// Parses a configuration name, ignoring case and surrounding
    /// whitespace (`"s2t"`, `"T2Twp"`, `" tw2sp "` all parse).
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s2t" => Ok(Self::S2t),
            "t2s" => Ok(Self::T2s),
            "s2tw" => Ok(Self::S2tw),
            "tw2s" => Ok(Self::Tw2s),
            "s2twp" => Ok(Self::S2twp),
            "tw2sp" => Ok(Self::Tw2sp),
            "s2hk" => Ok(Self::S2hk),
            "hk2s" => Ok(Self::Hk2s),
            "t2tw" => Ok(Self::T2tw),
            "t2twp" => Ok(Self::T2twp),
            "t2hk" => Ok(Self::T2hk),
            "tw2t" => Ok(Self::Tw2t),
            "tw2tp" => Ok(Self::Tw2tp),
            "hk2t" => Ok(Self::Hk2t),
            "t2jp" => Ok(Self::T2jp),
            "jp2t" => Ok(Self::Jp2t),
            _ => Err(()),
        }
    }
}

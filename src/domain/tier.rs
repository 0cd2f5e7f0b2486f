//! Recommendation tiers derived from confidence.

/// How strongly the digest recommends a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationTier {
    /// Confidence 8 and above.
    Strong,
    /// Confidence 6 to 7.
    Caution,
    /// Confidence below 6.
    Avoid,
}

impl RecommendationTier {
    #[must_use]
    pub const fn from_confidence(confidence: u32) -> Self {
        match confidence {
            8.. => Self::Strong,
            6..=7 => Self::Caution,
            _ => Self::Avoid,
        }
    }

    /// Tier text as shown in the digest.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "⭐️ แนะนำให้เดิมพัน - ความมั่นใจสูง",
            Self::Caution => "⚠️ พิจารณาตามความเหมาะสม",
            Self::Avoid => "❌ ไม่แนะนำให้เดิมพัน - ความเสี่ยงสูง",
        }
    }
}

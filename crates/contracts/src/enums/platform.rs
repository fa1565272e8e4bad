use serde::{Deserialize, Serialize};

/// Marketplace platforms an order line can originate from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Shopee,
    TikTok,
    Lazada,
    Other,
}

impl Platform {
    /// Wire value as stored on order lines
    pub fn code(&self) -> &'static str {
        match self {
            Platform::Shopee => "Shopee",
            Platform::TikTok => "TikTok",
            Platform::Lazada => "Lazada",
            Platform::Other => "อื่นๆ",
        }
    }

    /// Human-readable name shown in filters and the table
    pub fn display_name(&self) -> &'static str {
        self.code()
    }

    /// All platforms, in dispatch-priority order
    pub fn all() -> Vec<Platform> {
        vec![
            Platform::Shopee,
            Platform::TikTok,
            Platform::Lazada,
            Platform::Other,
        ]
    }

    /// SLA cutoff hour for this platform (local time).
    /// Orders placed at or before the cutoff are due the same day.
    pub fn cutoff_hour(&self) -> u32 {
        match self {
            Platform::Lazada => 11,
            _ => 12,
        }
    }

    /// Normalize a raw platform string from an import feed.
    ///
    /// Strips everything that is not a Latin or Thai letter, lowercases, and
    /// resolves the alias table used by the import pipeline. Anything
    /// unrecognized is grouped under `Other`.
    pub fn normalize(input: &str) -> Platform {
        let key: String = input
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphabetic() || ('ก'..='๙').contains(c))
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "shopee" | "shoppee" | "spx" => Platform::Shopee,
            "tiktok" | "tiktokshop" | "tiktk" => Platform::TikTok,
            "lazada" | "lz" => Platform::Lazada,
            _ => Platform::Other,
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_aliases() {
        assert_eq!(Platform::normalize("Shopee"), Platform::Shopee);
        assert_eq!(Platform::normalize("shoppee"), Platform::Shopee);
        assert_eq!(Platform::normalize("SPX"), Platform::Shopee);
        assert_eq!(Platform::normalize("Tik Tok"), Platform::TikTok);
        assert_eq!(Platform::normalize("TikTokShop"), Platform::TikTok);
        assert_eq!(Platform::normalize("lz"), Platform::Lazada);
        assert_eq!(Platform::normalize(" Lazada "), Platform::Lazada);
        assert_eq!(Platform::normalize("อื่นๆ"), Platform::Other);
    }

    #[test]
    fn test_normalize_unknown_is_other() {
        assert_eq!(Platform::normalize("JD Central"), Platform::Other);
        assert_eq!(Platform::normalize(""), Platform::Other);
    }

    #[test]
    fn test_cutoff_hours() {
        assert_eq!(Platform::Lazada.cutoff_hour(), 11);
        assert_eq!(Platform::Shopee.cutoff_hour(), 12);
        assert_eq!(Platform::TikTok.cutoff_hour(), 12);
        assert_eq!(Platform::Other.cutoff_hour(), 12);
    }
}

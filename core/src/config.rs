use serde::Deserialize;

pub const DEFAULT_SHEET_ID: &str = "1WWipqOsFrscrngCbqn1L_LZdwLL6rZIrM-XSjOiO_j4";
pub const DEFAULT_IMAGE: &str = "danialLogo-BG.png";

/// Page-level settings, fixed for the page's lifetime once resolved. A host
/// page can override individual fields through the embedded `#page-config`
/// JSON element; omitted fields keep their defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub sheet_id: String,
    pub default_image: String,
    pub rules_refresh_ms: u32,
    pub momaiz_refresh_ms: u32,
    pub rank_refresh_ms: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            sheet_id: DEFAULT_SHEET_ID.to_string(),
            default_image: DEFAULT_IMAGE.to_string(),
            rules_refresh_ms: 5_000,
            momaiz_refresh_ms: 10_000,
            rank_refresh_ms: 15_000,
        }
    }
}

impl PageConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// CSV export URL for one tab of the configured spreadsheet.
    pub fn csv_url(&self, sheet: &str) -> String {
        format!(
            "https://docs.google.com/spreadsheets/d/{}/gviz/tq?tqx=out:csv&sheet={}",
            self.sheet_id, sheet
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_SHEET_ID, PageConfig};

    #[test]
    fn defaults_match_the_published_page() {
        let config = PageConfig::default();
        assert_eq!(config.sheet_id, DEFAULT_SHEET_ID);
        assert_eq!(config.default_image, "danialLogo-BG.png");
        assert_eq!(config.rules_refresh_ms, 5_000);
        assert_eq!(config.momaiz_refresh_ms, 10_000);
        assert_eq!(config.rank_refresh_ms, 15_000);
    }

    #[test]
    fn csv_url_targets_one_sheet_tab() {
        let url = PageConfig::default().csv_url("rank");
        assert_eq!(
            url,
            format!(
                "https://docs.google.com/spreadsheets/d/{DEFAULT_SHEET_ID}/gviz/tq?tqx=out:csv&sheet=rank"
            )
        );
    }

    #[test]
    fn partial_override_keeps_remaining_defaults() {
        let config =
            PageConfig::from_json(r#"{"sheet_id":"abc","rank_refresh_ms":60000}"#).unwrap();
        assert_eq!(config.sheet_id, "abc");
        assert_eq!(config.rank_refresh_ms, 60_000);
        assert_eq!(config.default_image, "danialLogo-BG.png");
        assert_eq!(config.rules_refresh_ms, 5_000);
    }

    #[test]
    fn invalid_override_is_an_error() {
        assert!(PageConfig::from_json("not json").is_err());
    }
}

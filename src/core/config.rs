use super::date_index::BoardLayout;

pub const DEFAULT_DATA_URL: &str = "data.json";
pub const DEFAULT_EXPORT_FILENAME: &str = "data.json";
pub const DEFAULT_THEME_KEY: &str = "kanbanTheme";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Relative path of the board file fetched at startup.
    pub data_url: String,
    pub export_filename: String,
    /// `localStorage` key holding the theme preference.
    pub theme_key: String,
    pub layout: BoardLayout,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            export_filename: DEFAULT_EXPORT_FILENAME.to_string(),
            theme_key: DEFAULT_THEME_KEY.to_string(),
            layout: BoardLayout::TwoWeek,
        }
    }
}

impl BoardConfig {
    /// Reads overrides from a `location.search` string such as
    /// `?view=week&data=board.json`.
    pub fn from_query(search: &str) -> Self {
        let mut config = Self::default();
        for pair in search.trim_start_matches('?').split('&') {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            match (name, value) {
                ("view", "week") | ("view", "single") => config.layout = BoardLayout::SingleWeek,
                ("view", _) => config.layout = BoardLayout::TwoWeek,
                ("data", path) if !path.is_empty() => config.data_url = path.to_string(),
                _ => {}
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_uses_defaults() {
        assert_eq!(BoardConfig::from_query(""), BoardConfig::default());
        assert_eq!(BoardConfig::from_query("?"), BoardConfig::default());
    }

    #[test]
    fn view_selects_layout() {
        assert_eq!(BoardConfig::from_query("?view=week").layout, BoardLayout::SingleWeek);
        assert_eq!(BoardConfig::from_query("?view=single").layout, BoardLayout::SingleWeek);
        assert_eq!(BoardConfig::from_query("?view=two").layout, BoardLayout::TwoWeek);
    }

    #[test]
    fn data_path_override() {
        let config = BoardConfig::from_query("?data=boards/june.json&view=week");
        assert_eq!(config.data_url, "boards/june.json");
        assert_eq!(config.layout, BoardLayout::SingleWeek);
        assert_eq!(config.export_filename, DEFAULT_EXPORT_FILENAME);
        assert_eq!(BoardConfig::from_query("?data=").data_url, DEFAULT_DATA_URL);
    }
}

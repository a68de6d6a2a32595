use chrono::{DateTime, Local, Locale};
use timeago::Language;

/// Locale preferences for both formatting paths.
///
/// Relative phrases ("3 minutes ago") come from `timeago`'s language tables;
/// absolute date/times use chrono's localized `%c` rendering. Both default to
/// English / `en_US`.
///
/// # Example
/// ```rust,ignore
/// let prefs = LocalePrefs::from_language_tag("fr");
/// let board = Board::new().locale(prefs);
/// ```
pub struct LocalePrefs {
    relative: Box<dyn Language + Send + Sync>,
    absolute: Locale,
}

impl LocalePrefs {
    pub fn new() -> Self {
        Self {
            relative: Box::new(timeago::English),
            absolute: Locale::en_US,
        }
    }

    /// Builds preferences from a user-language tag ("en", "ru", "pt-BR").
    ///
    /// The primary subtag selects the relative-phrase language; the full tag
    /// selects the absolute locale. Unknown tags fall back to English /
    /// `en_US` rather than failing — a board with slightly wrong phrasing
    /// beats no board.
    pub fn from_language_tag(tag: &str) -> Self {
        let primary = tag.split(['-', '_']).next().unwrap_or(tag);
        let relative = timeago::languages::IsolangLanguage::from_639_1(primary)
            .and_then(timeago::from_isolang)
            .unwrap_or_else(|| {
                log::debug!("no relative-time language for tag '{tag}', using English");
                Box::new(timeago::English)
            });

        let absolute = Locale::try_from(tag.replace('-', "_").as_str()).unwrap_or_else(|_| {
            log::debug!("no absolute locale for tag '{tag}', using en_US");
            Locale::en_US
        });

        Self { relative, absolute }
    }

    /// Overrides the locale used for absolute date/time strings.
    pub fn absolute_locale(mut self, locale: Locale) -> Self {
        self.absolute = locale;
        self
    }

    /// Language table used for relative phrases.
    pub fn language(&self) -> &dyn Language {
        self.relative.as_ref()
    }

    /// Locale-formatted absolute date/time, the board's equivalent of a
    /// "fixed" timestamp string.
    pub fn format_absolute(&self, at: DateTime<Local>) -> String {
        at.format_localized("%c", self.absolute).to_string()
    }
}

impl Default for LocalePrefs {
    fn default() -> Self {
        Self::new()
    }
}

//! Request path resolution
//!
//! Maps a decoded request path to an indexed asset by trying an ordered
//! list of candidate keys. The first key present in the table wins; later
//! candidates are never tried once one matches.

use std::borrow::Cow;

use crate::assets::{Asset, AssetTable};

/// One step of the lookup chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// The path exactly as requested
    Exact,
    /// `/about` -> `/about.html`
    HtmlSuffix,
    /// `/docs/` -> `/docs`, only for paths that end in `/`
    TrimSlash,
}

/// Lookup order
pub const FALLBACKS: [Fallback; 3] = [Fallback::Exact, Fallback::HtmlSuffix, Fallback::TrimSlash];

impl Fallback {
    /// Table key this step tries for `path`, if the step applies at all
    pub fn candidate(self, path: &str) -> Option<Cow<'_, str>> {
        match self {
            Self::Exact => Some(Cow::Borrowed(path)),
            Self::HtmlSuffix => Some(Cow::Owned(format!("{path}.html"))),
            Self::TrimSlash => path.strip_suffix('/').map(Cow::Borrowed),
        }
    }
}

/// Resolve `path` against `table`, returning the asset and the step that found it
pub fn resolve<'t>(table: &'t AssetTable, path: &str) -> Option<(&'t Asset, Fallback)> {
    FALLBACKS.into_iter().find_map(|step| {
        let key = step.candidate(path)?;
        table.get(&key).map(|asset| (asset, step))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetTableBuilder;

    fn table(paths: &[&str]) -> AssetTable {
        let mut builder = AssetTableBuilder::new();
        for path in paths {
            builder.insert((*path).to_string(), Asset::new(path.to_string(), "text/html"));
        }
        builder.finish()
    }

    fn resolved(table: &AssetTable, path: &str) -> Option<(String, Fallback)> {
        resolve(table, path).map(|(asset, step)| {
            (String::from_utf8(asset.content().to_vec()).unwrap(), step)
        })
    }

    #[test]
    fn test_exact_match() {
        let t = table(&["/style.css"]);
        assert_eq!(
            resolved(&t, "/style.css"),
            Some(("/style.css".to_string(), Fallback::Exact))
        );
    }

    #[test]
    fn test_html_suffix() {
        let t = table(&["/about.html"]);
        assert_eq!(
            resolved(&t, "/about"),
            Some(("/about.html".to_string(), Fallback::HtmlSuffix))
        );
    }

    #[test]
    fn test_exact_beats_html_suffix() {
        let t = table(&["/about", "/about.html"]);
        assert_eq!(resolved(&t, "/about").unwrap().1, Fallback::Exact);
    }

    #[test]
    fn test_trailing_slash() {
        let t = table(&["/docs/index.html"]);
        assert_eq!(
            resolved(&t, "/docs/"),
            Some(("/docs/index.html".to_string(), Fallback::TrimSlash))
        );
    }

    #[test]
    fn test_trailing_slash_is_not_suffixed() {
        // `/about/` must not fall through to `/about.html`
        let t = table(&["/about.html"]);
        assert_eq!(resolved(&t, "/about/"), None);
    }

    #[test]
    fn test_html_suffix_before_trim() {
        let t = table(&["/docs/.html", "/docs"]);
        assert_eq!(resolved(&t, "/docs/").unwrap().1, Fallback::HtmlSuffix);
    }

    #[test]
    fn test_root_index() {
        let t = table(&["/index.html"]);
        assert_eq!(resolved(&t, "/").unwrap().1, Fallback::TrimSlash);
        assert_eq!(resolved(&t, "/index").unwrap().1, Fallback::HtmlSuffix);
    }

    #[test]
    fn test_slash_only_strips_once() {
        let t = table(&["/docs"]);
        assert_eq!(resolved(&t, "/docs//"), None);
    }

    #[test]
    fn test_not_found() {
        let t = table(&["/index.html"]);
        assert_eq!(resolved(&t, "/does-not-exist"), None);
    }

    #[test]
    fn test_candidates() {
        assert_eq!(Fallback::Exact.candidate("/a").unwrap(), "/a");
        assert_eq!(Fallback::HtmlSuffix.candidate("/a").unwrap(), "/a.html");
        assert_eq!(Fallback::TrimSlash.candidate("/a"), None);
        assert_eq!(Fallback::TrimSlash.candidate("/a/").unwrap(), "/a");
    }
}

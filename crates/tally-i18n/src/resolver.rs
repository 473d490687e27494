//! Dotted-key resolution against a dictionary snapshot.

use tally_core::dictionary::{ResolutionMiss, TranslationDictionary};
use tracing::debug;

/// Resolve `key`, reporting why nothing was found.
pub fn resolve<'a>(dict: &'a TranslationDictionary, key: &str) -> Result<&'a str, ResolutionMiss> {
    dict.lookup(key)
}

/// Resolve `key` to display text.
///
/// A miss yields `fallback` when given, otherwise the key itself so that
/// missing translations stay visible.
pub fn t(dict: &TranslationDictionary, key: &str, fallback: Option<&str>) -> String {
    match resolve(dict, key) {
        Ok(value) => value.to_string(),
        Err(miss) => {
            debug!("t: '{key}' unresolved ({miss})");
            fallback.unwrap_or(key).to_string()
        }
    }
}

/// Replace `{name}` tokens in one pass. Unknown tokens are left untouched and
/// substituted values are never rescanned.
pub fn interpolate(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match vars.iter().find(|(k, _)| *k == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict() -> TranslationDictionary {
        TranslationDictionary::from_pairs([("a.b.c", "X"), ("greet", "Hi {name}, {name}!")])
    }

    #[test]
    fn test_t_resolves_leaf() {
        assert_eq!(t(&dict(), "a.b.c", None), "X");
    }

    #[test]
    fn test_t_miss_uses_fallback_text() {
        assert_eq!(t(&dict(), "a.b.missing", Some("F")), "F");
    }

    #[test]
    fn test_t_miss_without_fallback_returns_key() {
        assert_eq!(t(&dict(), "a.b.missing", None), "a.b.missing");
        assert_eq!(t(&dict(), "a.b", None), "a.b");
        assert_eq!(t(&dict(), "", None), "");
    }

    #[test]
    fn test_t_is_idempotent() {
        let d = dict();
        assert_eq!(t(&d, "a.b.c", None), t(&d, "a.b.c", None));
        assert_eq!(t(&d, "x.y", None), t(&d, "x.y", None));
    }

    #[test]
    fn test_resolve_reports_reason() {
        assert_eq!(resolve(&dict(), "a.b"), Err(ResolutionMiss::NotALeaf));
        assert!(matches!(
            resolve(&dict(), "nope"),
            Err(ResolutionMiss::MissingSegment { depth: 0, .. })
        ));
    }

    #[test]
    fn test_interpolate_single_pass() {
        assert_eq!(
            interpolate("Hi {name}, {name}!", &[("name", "Ana")]),
            "Hi Ana, Ana!"
        );
        // Substituted text is not rescanned.
        assert_eq!(interpolate("{a}", &[("a", "{b}"), ("b", "no")]), "{b}");
        assert_eq!(interpolate("{unknown} stays", &[]), "{unknown} stays");
        assert_eq!(interpolate("open { brace", &[]), "open { brace");
        assert_eq!(interpolate("", &[("a", "b")]), "");
    }
}

//! Display names and descriptions for expense categories.
//!
//! Precedence, first hit wins:
//! 1. blank input is returned as-is;
//! 2. the category's own database translation for the session language;
//! 3. the static `categoryNames` / `categoryDescriptions` tables;
//! 4. the raw input.
//!
//! Without a category list, step 3 only applies to known system names so an
//! unrelated user string is never "translated" by accident.

use std::fmt;
use tally_core::category::{find_by_name, CategoryEntity};
use tally_core::dictionary::{TranslationDictionary, TranslationNode};
use tally_core::language::LanguageCode;
use tracing::debug;

/// Names of the categories the platform ships with.
pub const SYSTEM_CATEGORY_NAMES: &[&str] = &[
    "Food & Dining",
    "Groceries",
    "Transportation",
    "Housing",
    "Bills & Utilities",
    "Healthcare",
    "Entertainment",
    "Shopping",
    "Travel",
    "Education",
    "Personal Care",
    "Other",
];

/// Placeholder descriptions that never beat a real description. Lowercase.
pub const GENERIC_DESCRIPTIONS: &[&str] = &[
    "uncategorized",
    "no description",
    "sin categoría",
    "sin categoria",
    "sin descripción",
    "sin descripcion",
    "sem categoria",
    "sem descrição",
    "sem descricao",
];

const NAMES_NAMESPACE: &str = "categoryNames";
const DESCRIPTIONS_NAMESPACE: &str = "categoryDescriptions";

/// Where a category string came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategorySource {
    /// The category record's own translations.
    Database,
    /// The static table in the merged dictionary.
    Dictionary,
}

/// A successful category resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub text: &'a str,
    pub source: CategorySource,
}

/// Why the raw input was kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryMiss {
    /// Nothing to translate.
    Blank,
    /// No category list was given and the name is not a system category.
    NotAllowListed,
    /// The database translation was a generic placeholder and nothing else matched.
    GenericDescription,
    /// Neither the record nor the static table had a translation.
    Untranslated,
}

impl fmt::Display for CategoryMiss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => f.write_str("blank input"),
            Self::NotAllowListed => f.write_str("not a system category and no category list"),
            Self::GenericDescription => f.write_str("database description is a placeholder"),
            Self::Untranslated => f.write_str("no translation available"),
        }
    }
}

/// Whether `name` is one of the shipped system categories.
pub fn is_system_category(name: &str) -> bool {
    SYSTEM_CATEGORY_NAMES.contains(&name)
}

/// Whether `text` is a placeholder description in any supported language.
pub fn is_generic_description(text: &str) -> bool {
    let lowered = text.trim().to_lowercase();
    GENERIC_DESCRIPTIONS.contains(&lowered.as_str())
}

/// Resolve a category name, reporting the source or the reason for a miss.
pub fn resolve_category_name<'a>(
    dict: &'a TranslationDictionary,
    lang: LanguageCode,
    name: &'a str,
    categories: Option<&'a [CategoryEntity]>,
) -> Result<Resolved<'a>, CategoryMiss> {
    if name.trim().is_empty() {
        return Err(CategoryMiss::Blank);
    }

    if let Some(entity) = categories.and_then(|cats| find_by_name(cats, name)) {
        if let Some(text) = entity
            .translations
            .as_ref()
            .and_then(|tr| tr.name_for(lang))
        {
            return Ok(Resolved {
                text,
                source: CategorySource::Database,
            });
        }
    }

    if categories.is_none() && !is_system_category(name) {
        return Err(CategoryMiss::NotAllowListed);
    }

    static_entry(dict, NAMES_NAMESPACE, name)
        .map(|text| Resolved {
            text,
            source: CategorySource::Dictionary,
        })
        .ok_or(CategoryMiss::Untranslated)
}

/// Resolve a category description, reporting the source or the reason for a miss.
pub fn resolve_category_description<'a>(
    dict: &'a TranslationDictionary,
    lang: LanguageCode,
    description: &'a str,
    category_name: &'a str,
    categories: Option<&'a [CategoryEntity]>,
) -> Result<Resolved<'a>, CategoryMiss> {
    if description.trim().is_empty() {
        return Err(CategoryMiss::Blank);
    }

    let mut rejected_generic = false;
    if let Some(entity) = categories.and_then(|cats| find_by_name(cats, category_name)) {
        if let Some(text) = entity
            .translations
            .as_ref()
            .and_then(|tr| tr.description_for(lang))
        {
            if is_generic_description(text) {
                debug!("tCategoryDescription: ignoring placeholder '{text}' for '{category_name}'");
                rejected_generic = true;
            } else {
                return Ok(Resolved {
                    text,
                    source: CategorySource::Database,
                });
            }
        }
    }

    let miss = if rejected_generic {
        CategoryMiss::GenericDescription
    } else {
        CategoryMiss::Untranslated
    };

    if categories.is_none() && !is_system_category(category_name) {
        return Err(CategoryMiss::NotAllowListed);
    }

    static_entry(dict, DESCRIPTIONS_NAMESPACE, category_name)
        .map(|text| Resolved {
            text,
            source: CategorySource::Dictionary,
        })
        .ok_or(miss)
}

/// Display name for a category. Never fails; a miss returns `name`.
pub fn t_category(
    dict: &TranslationDictionary,
    lang: LanguageCode,
    name: &str,
    categories: Option<&[CategoryEntity]>,
) -> String {
    match resolve_category_name(dict, lang, name, categories) {
        Ok(resolved) => resolved.text.to_string(),
        Err(miss) => {
            debug!("tCategory: '{name}' kept as-is ({miss})");
            name.to_string()
        }
    }
}

/// Display description for a category. Never fails; a miss returns `description`.
pub fn t_category_description(
    dict: &TranslationDictionary,
    lang: LanguageCode,
    description: &str,
    category_name: &str,
    categories: Option<&[CategoryEntity]>,
) -> String {
    match resolve_category_description(dict, lang, description, category_name, categories) {
        Ok(resolved) => resolved.text.to_string(),
        Err(miss) => {
            debug!("tCategoryDescription: '{category_name}' kept as-is ({miss})");
            description.to_string()
        }
    }
}

/// Names are looked up as a single segment so they may contain dots or spaces.
fn static_entry<'a>(dict: &'a TranslationDictionary, namespace: &str, name: &str) -> Option<&'a str> {
    match dict.namespace(namespace)?.get(name)? {
        TranslationNode::Leaf(text) if !text.trim().is_empty() => Some(text.as_str()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict() -> TranslationDictionary {
        TranslationDictionary::from_pairs([
            ("categoryNames.Groceries", "Supermercado"),
            ("categoryNames.Travel", "Viajes"),
            ("categoryNames.Pets", "Mascotas"),
            ("categoryDescriptions.Groceries", "Supermercado y hogar"),
        ])
    }

    const ES: LanguageCode = LanguageCode::Es;

    #[test]
    fn test_blank_name_returned_unchanged() {
        assert_eq!(t_category(&dict(), ES, "", None), "");
        assert_eq!(t_category(&dict(), ES, "   ", None), "   ");
        assert_eq!(
            resolve_category_name(&dict(), ES, " ", None),
            Err(CategoryMiss::Blank)
        );
    }

    #[test]
    fn test_database_translation_beats_static_entry() {
        let cats = vec![CategoryEntity::new("Groceries", true).with_name_translation(ES, "Mercado")];
        let d = dict();
        let resolved = resolve_category_name(&d, ES, "Groceries", Some(cats.as_slice())).unwrap();
        assert_eq!(resolved.text, "Mercado");
        assert_eq!(resolved.source, CategorySource::Database);
    }

    #[test]
    fn test_user_category_database_translation_applies() {
        let cats = vec![CategoryEntity::new("Gym", false).with_name_translation(ES, "Gimnasio")];
        assert_eq!(t_category(&dict(), ES, "Gym", Some(cats.as_slice())), "Gimnasio");
    }

    #[test]
    fn test_translation_for_other_language_is_ignored() {
        let cats = vec![
            CategoryEntity::new("Groceries", true).with_name_translation(LanguageCode::Pt, "Mercado")
        ];
        let d = dict();
        let resolved = resolve_category_name(&d, ES, "Groceries", Some(cats.as_slice())).unwrap();
        assert_eq!(resolved.text, "Supermercado");
        assert_eq!(resolved.source, CategorySource::Dictionary);
    }

    #[test]
    fn test_untranslated_custom_category_keeps_raw_name() {
        let cats = vec![CategoryEntity::new("Gym", false)];
        assert_eq!(
            resolve_category_name(&dict(), ES, "Gym", Some(cats.as_slice())),
            Err(CategoryMiss::Untranslated)
        );
        assert_eq!(t_category(&dict(), ES, "Gym", Some(cats.as_slice())), "Gym");
    }

    #[test]
    fn test_without_context_only_system_names_are_translated() {
        assert_eq!(t_category(&dict(), ES, "Travel", None), "Viajes");
        // "Pets" has a dictionary entry but is not a system category.
        assert_eq!(
            resolve_category_name(&dict(), ES, "Pets", None),
            Err(CategoryMiss::NotAllowListed)
        );
        assert_eq!(t_category(&dict(), ES, "Pets", None), "Pets");
        // With a category list the table applies to any name.
        assert_eq!(t_category(&dict(), ES, "Pets", Some(&[][..])), "Mascotas");
    }

    #[test]
    fn test_name_with_dots_is_a_single_segment() {
        let mut names = TranslationDictionary::new();
        names.insert("Dr. Visits", TranslationNode::Leaf("Médico".into()));
        let mut d = TranslationDictionary::new();
        d.insert("categoryNames", TranslationNode::Branch(names));
        assert_eq!(t_category(&d, ES, "Dr. Visits", Some(&[][..])), "Médico");
    }

    #[test]
    fn test_description_database_translation() {
        let cats = vec![CategoryEntity::new("Groceries", true)
            .with_description_translation(ES, "Compras del súper")];
        assert_eq!(
            t_category_description(&dict(), ES, "Food at home", "Groceries", Some(cats.as_slice())),
            "Compras del súper"
        );
    }

    #[test]
    fn test_generic_description_is_rejected() {
        let cats = vec![CategoryEntity::new("Gym", false)
            .with_description_translation(ES, "Sin Descripción")];
        assert_eq!(
            resolve_category_description(&dict(), ES, "Monthly membership", "Gym", Some(cats.as_slice())),
            Err(CategoryMiss::GenericDescription)
        );
        assert_eq!(
            t_category_description(&dict(), ES, "Monthly membership", "Gym", Some(cats.as_slice())),
            "Monthly membership"
        );
    }

    #[test]
    fn test_generic_description_falls_through_to_static_table() {
        let cats = vec![CategoryEntity::new("Groceries", true)
            .with_description_translation(ES, "UNCATEGORIZED")];
        let d = dict();
        let resolved =
            resolve_category_description(&d, ES, "Food at home", "Groceries", Some(cats.as_slice()))
                .unwrap();
        assert_eq!(resolved.text, "Supermercado y hogar");
        assert_eq!(resolved.source, CategorySource::Dictionary);
    }

    #[test]
    fn test_description_without_context() {
        assert_eq!(
            t_category_description(&dict(), ES, "Food at home", "Groceries", None),
            "Supermercado y hogar"
        );
        assert_eq!(
            t_category_description(&dict(), ES, "Kibble", "Pets", None),
            "Kibble"
        );
        assert_eq!(t_category_description(&dict(), ES, "", "Groceries", None), "");
    }

    #[test]
    fn test_is_generic_description_is_case_insensitive() {
        assert!(is_generic_description("No Description"));
        assert!(is_generic_description("  SEM DESCRIÇÃO "));
        assert!(!is_generic_description("Groceries and more"));
    }
}

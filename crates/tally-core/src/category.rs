//! Category records as delivered by the category domain.
//!
//! The engine only reads these. `name` is the unique display key of the
//! category, not a translation key.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::language::LanguageCode;

/// Per-language strings embedded in a category record.
pub type LocalizedText = BTreeMap<String, String>;

/// Optional translation payload carried by a category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryTranslations {
    #[serde(default)]
    pub name: Option<LocalizedText>,
    #[serde(default)]
    pub description: Option<LocalizedText>,
}

impl CategoryTranslations {
    /// Non-blank translated name for `language`.
    pub fn name_for(&self, language: LanguageCode) -> Option<&str> {
        pick(self.name.as_ref(), language)
    }

    /// Non-blank translated description for `language`.
    pub fn description_for(&self, language: LanguageCode) -> Option<&str> {
        pick(self.description.as_ref(), language)
    }
}

fn pick(text: Option<&LocalizedText>, language: LanguageCode) -> Option<&str> {
    text?
        .get(language.as_str())
        .map(String::as_str)
        .filter(|s| !s.trim().is_empty())
}

/// An expense category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryEntity {
    pub name: String,
    /// System-owned (`true`) vs. user-owned.
    #[serde(default, alias = "isDefault")]
    pub is_default: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub translations: Option<CategoryTranslations>,
}

impl CategoryEntity {
    pub fn new(name: impl Into<String>, is_default: bool) -> Self {
        Self {
            name: name.into(),
            is_default,
            description: None,
            translations: None,
        }
    }

    /// Attach a translated name.
    pub fn with_name_translation(mut self, language: LanguageCode, text: &str) -> Self {
        self.translations
            .get_or_insert_with(CategoryTranslations::default)
            .name
            .get_or_insert_with(BTreeMap::new)
            .insert(language.as_str().to_string(), text.to_string());
        self
    }

    /// Attach a translated description.
    pub fn with_description_translation(mut self, language: LanguageCode, text: &str) -> Self {
        self.translations
            .get_or_insert_with(CategoryTranslations::default)
            .description
            .get_or_insert_with(BTreeMap::new)
            .insert(language.as_str().to_string(), text.to_string());
        self
    }
}

/// Find the category whose name matches exactly.
pub fn find_by_name<'a>(categories: &'a [CategoryEntity], name: &str) -> Option<&'a CategoryEntity> {
    categories.iter().find(|c| c.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_category_with_translations() {
        let json = r#"{
            "name": "Groceries",
            "is_default": true,
            "translations": {"name": {"es": "Supermercado", "pt": ""}}
        }"#;
        let cat: CategoryEntity = serde_json::from_str(json).unwrap();
        assert!(cat.is_default);
        let tr = cat.translations.unwrap();
        assert_eq!(tr.name_for(LanguageCode::Es), Some("Supermercado"));
        // Blank translations count as absent.
        assert_eq!(tr.name_for(LanguageCode::Pt), None);
        assert_eq!(tr.description_for(LanguageCode::Es), None);
    }

    #[test]
    fn test_deserialize_minimal_and_camel_case() {
        let cat: CategoryEntity = serde_json::from_str(r#"{"name": "Pets"}"#).unwrap();
        assert!(!cat.is_default);
        assert!(cat.translations.is_none());

        let cat: CategoryEntity =
            serde_json::from_str(r#"{"name": "Travel", "isDefault": true}"#).unwrap();
        assert!(cat.is_default);
    }

    #[test]
    fn test_find_by_name_is_exact() {
        let cats = vec![CategoryEntity::new("Travel", true), CategoryEntity::new("travel", false)];
        assert!(!find_by_name(&cats, "travel").unwrap().is_default);
        assert!(find_by_name(&cats, "Trave").is_none());
    }
}

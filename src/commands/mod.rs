//! CLI subcommand handlers. Each one renders its output as a string.


use anyhow::Context as _;
use clap::ValueEnum;
use tally_core::category::CategoryEntity;
use tally_core::language::LanguageCode;
use tally_i18n::I18nService;

/// How `date` renders its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DateStyle {
    Short,
    Long,
    Datetime,
    Relative,
}

/// Split a `name=value` pair.
pub fn parse_var(raw: &str) -> anyhow::Result<(String, String)> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => anyhow::bail!("invalid --var '{raw}', expected name=value"),
    }
}

/// Read a JSON array of categories.
pub fn load_categories(path: Option<&str>) -> anyhow::Result<Option<Vec<CategoryEntity>>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let content =
        std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
    let categories: Vec<CategoryEntity> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse categories in {path}"))?;
    Ok(Some(categories))
}

pub fn translate(
    i18n: &I18nService,
    key: &str,
    fallback: Option<&str>,
    vars: &[String],
) -> anyhow::Result<String> {
    if vars.is_empty() {
        return Ok(i18n.t(key, fallback));
    }
    let pairs = vars
        .iter()
        .map(|raw| parse_var(raw))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let borrowed: Vec<(&str, &str)> = pairs
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();
    let template = i18n.t(key, fallback);
    Ok(tally_i18n::resolver::interpolate(&template, &borrowed))
}

pub fn category(i18n: &I18nService, name: &str, categories: Option<&[CategoryEntity]>) -> String {
    i18n.t_category(name, categories)
}

pub fn describe(
    i18n: &I18nService,
    description: &str,
    name: &str,
    categories: Option<&[CategoryEntity]>,
) -> String {
    i18n.t_category_description(description, name, categories)
}

pub fn date(i18n: &I18nService, value: &str, style: DateStyle) -> String {
    match style {
        DateStyle::Short => i18n.format_short_date(value),
        DateStyle::Long => i18n.format_long_date(value),
        DateStyle::Datetime => i18n.format_date_time(value),
        DateStyle::Relative => i18n.format_relative_date(value),
    }
}

/// One line per language, the session language starred.
pub async fn languages(i18n: &I18nService) -> String {
    let current = i18n.language();
    i18n.available_languages()
        .await
        .iter()
        .map(|(code, name)| {
            let marker = if code == current.as_str() { "*" } else { " " };
            format!("{marker} {code}  {name}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Show the session language, or switch it first when `code` is given.
pub fn session(i18n: &I18nService, code: Option<&str>) -> anyhow::Result<String> {
    if let Some(code) = code {
        let language = LanguageCode::parse(code)
            .with_context(|| format!("unsupported language '{code}'"))?;
        i18n.set_session_language(language);
    }
    let state = i18n.session_state();
    Ok(format!(
        "session: {} ({})\npreference: {} ({})",
        state.session_language,
        state.session_language.display_name(),
        state.persisted_language,
        state.persisted_language.display_name(),
    ))
}

/// Dotted keys of the served dictionary, optionally under `prefix`.
pub fn keys(i18n: &I18nService, prefix: Option<&str>) -> String {
    let dictionary = i18n.snapshot().dictionary;
    dictionary
        .flatten()
        .into_iter()
        .filter(|(key, _)| match prefix {
            Some(p) => key == p || key.starts_with(&format!("{p}.")),
            None => true,
        })
        .map(|(key, value)| format!("{key} = {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

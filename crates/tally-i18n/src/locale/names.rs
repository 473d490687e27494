//! Per-language month, weekday, and relative-time vocabulary.

use tally_core::language::LanguageCode;

use super::RelativeUnit;

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];
const MONTHS_ES: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre",
    "octubre", "noviembre", "diciembre",
];
const MONTHS_PT: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto", "setembro",
    "outubro", "novembro", "dezembro",
];

const WEEKDAYS_EN: [&str; 7] = [
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];
const WEEKDAYS_ES: [&str; 7] = [
    "lunes", "martes", "miércoles", "jueves", "viernes", "sábado", "domingo",
];
const WEEKDAYS_PT: [&str; 7] = [
    "segunda-feira", "terça-feira", "quarta-feira", "quinta-feira", "sexta-feira", "sábado",
    "domingo",
];

/// Full month name; `month0` is 0-based.
pub(super) fn month_long(lang: LanguageCode, month0: u32) -> &'static str {
    let table = match lang {
        LanguageCode::Es => &MONTHS_ES,
        LanguageCode::Pt => &MONTHS_PT,
        LanguageCode::En => &MONTHS_EN,
    };
    table.get(month0 as usize).copied().unwrap_or_default()
}

/// Abbreviated month name.
pub(super) fn month_short(lang: LanguageCode, month0: u32) -> String {
    let long = month_long(lang, month0);
    let short: String = long.chars().take(3).collect();
    if lang == LanguageCode::Pt {
        format!("{short}.")
    } else {
        short
    }
}

/// Weekday name; `weekday0` counts from Monday.
pub(super) fn weekday(lang: LanguageCode, weekday0: u32) -> &'static str {
    let table = match lang {
        LanguageCode::Es => &WEEKDAYS_ES,
        LanguageCode::Pt => &WEEKDAYS_PT,
        LanguageCode::En => &WEEKDAYS_EN,
    };
    table.get(weekday0 as usize).copied().unwrap_or_default()
}

/// Unit word agreeing with `count`.
pub(super) fn unit_word(lang: LanguageCode, unit: RelativeUnit, count: i64) -> &'static str {
    let one = count == 1;
    match (lang, unit) {
        (LanguageCode::Es, RelativeUnit::Minute) => if one { "minuto" } else { "minutos" },
        (LanguageCode::Es, RelativeUnit::Hour) => if one { "hora" } else { "horas" },
        (LanguageCode::Es, RelativeUnit::Day) => if one { "día" } else { "días" },
        (LanguageCode::Es, RelativeUnit::Week) => if one { "semana" } else { "semanas" },
        (LanguageCode::Es, RelativeUnit::Month) => if one { "mes" } else { "meses" },
        (LanguageCode::Es, RelativeUnit::Year) => if one { "año" } else { "años" },
        (LanguageCode::Pt, RelativeUnit::Minute) => if one { "minuto" } else { "minutos" },
        (LanguageCode::Pt, RelativeUnit::Hour) => if one { "hora" } else { "horas" },
        (LanguageCode::Pt, RelativeUnit::Day) => if one { "dia" } else { "dias" },
        (LanguageCode::Pt, RelativeUnit::Week) => if one { "semana" } else { "semanas" },
        (LanguageCode::Pt, RelativeUnit::Month) => if one { "mês" } else { "meses" },
        (LanguageCode::Pt, RelativeUnit::Year) => if one { "ano" } else { "anos" },
        (LanguageCode::En, RelativeUnit::Minute) => if one { "minute" } else { "minutes" },
        (LanguageCode::En, RelativeUnit::Hour) => if one { "hour" } else { "hours" },
        (LanguageCode::En, RelativeUnit::Day) => if one { "day" } else { "days" },
        (LanguageCode::En, RelativeUnit::Week) => if one { "week" } else { "weeks" },
        (LanguageCode::En, RelativeUnit::Month) => if one { "month" } else { "months" },
        (LanguageCode::En, RelativeUnit::Year) => if one { "year" } else { "years" },
    }
}

/// Wrap `amount` ("3 hours") in past or future phrasing.
pub(super) fn relative_phrase(lang: LanguageCode, amount: &str, past: bool) -> String {
    match (lang, past) {
        (LanguageCode::Es, true) => format!("hace {amount}"),
        (LanguageCode::Es, false) => format!("dentro de {amount}"),
        (LanguageCode::Pt, true) => format!("há {amount}"),
        (LanguageCode::Pt, false) => format!("em {amount}"),
        (LanguageCode::En, true) => format!("{amount} ago"),
        (LanguageCode::En, false) => format!("in {amount}"),
    }
}

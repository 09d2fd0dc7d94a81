use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("EUR")
    }
}

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "en-US".into(),
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormatOptions {
    pub currency_display: CurrencyDisplay,
    pub negative_style: NegativeStyle,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            currency_display: CurrencyDisplay::Symbol,
            negative_style: NegativeStyle::Sign,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NegativeStyle {
    Sign,
    Parentheses,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CurrencyDisplay {
    Symbol,
    Code,
    SymbolAndCode,
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "CAD" => "CAD".into(),
        "AUD" => "A$".into(),
        "CHF" => "CHF".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let mut body = format!("{:.*}", precision as usize, value);
    if locale.decimal_separator != '.' {
        if let Some(pos) = body.find('.') {
            body.replace_range(pos..=pos, &locale.decimal_separator.to_string());
        }
    }
    if let Some(pos) = body.find(locale.decimal_separator) {
        let mut int_part = body[..pos].to_string();
        insert_grouping(&mut int_part, locale.grouping_separator);
        body = format!("{}{}", int_part, &body[pos..]);
    } else {
        insert_grouping(&mut body, locale.grouping_separator);
    }
    body
}

fn insert_grouping(int_part: &mut String, separator: char) {
    let mut cleaned = int_part.replace(separator, "");
    if cleaned.starts_with('-') {
        let sign = cleaned.remove(0);
        let grouped = group_digits(&cleaned, separator);
        *int_part = format!("{}{}", sign, grouped);
    } else {
        *int_part = group_digits(&cleaned, separator);
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}

/// Formats an exact engine value for display at the currency's minor-unit
/// precision. The engine never calls this itself; it exists for the display
/// collaborator.
pub fn format_currency_value(
    amount: f64,
    code: &CurrencyCode,
    locale: &LocaleConfig,
    options: &FormatOptions,
) -> String {
    let precision = minor_units_for(code.as_str());
    let abs_value = amount.abs();
    let mut body = format_number(locale, abs_value, precision);
    if amount < 0.0 {
        body = match options.negative_style {
            NegativeStyle::Sign => format!("-{}", body),
            NegativeStyle::Parentheses => format!("({})", body),
        };
    }
    let symbol = symbol_for(code.as_str());
    let mut rendered_body = body.clone();
    if rendered_body.starts_with('(') {
        rendered_body = format!(" {}", body);
    }
    match options.currency_display {
        CurrencyDisplay::Symbol => format!("{}{}", symbol, rendered_body),
        CurrencyDisplay::Code => format!("{} {}", code.as_str(), body),
        CurrencyDisplay::SymbolAndCode => {
            format!("{} {} ({})", symbol, rendered_body, code.as_str())
        }
    }
}

use serde::{Deserialize, Deserializer, Serialize};

/// One vacancy in the shape shared by every source.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Vacancy {
    pub title: String,
    pub employer: String,
    pub url: String,
    pub description: Option<String>,
    pub salary_from: Option<f64>,
    pub salary_to: Option<f64>,
    /// Upper-cased three letter code, e.g. `RUR` or `USD`.
    pub currency: Option<String>,
}

/// Upper-cases a currency code, mapping blanks to `None`.
pub(crate) fn normalize_currency(code: Option<String>) -> Option<String> {
    code.map(|c| c.trim().to_ascii_uppercase())
        .filter(|c| !c.is_empty())
}

/// Reads an explicit `null` the same way as an absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_is_upper_cased() {
        assert_eq!(normalize_currency(Some("rub".into())), Some("RUB".into()));
        assert_eq!(normalize_currency(Some(" ".into())), None);
        assert_eq!(normalize_currency(None), None);
    }
}

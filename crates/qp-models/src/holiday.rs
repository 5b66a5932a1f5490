//! Holiday model
//!
//! A calendar exclusion. No country codes means it applies to everyone.

use chrono::NaiveDate;
use qp_core::types::Period;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: String,
    #[serde(default)]
    pub country_codes: Vec<String>,
}

impl Holiday {
    pub fn new(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
            country_codes: Vec::new(),
        }
    }

    pub fn for_countries<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.country_codes = codes.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_global(&self) -> bool {
        self.country_codes.is_empty()
    }

    /// A member without a country only gets global holidays
    pub fn applies_to(&self, country: Option<&str>) -> bool {
        if self.is_global() {
            return true;
        }
        match country.map(str::trim).filter(|c| !c.is_empty()) {
            Some(country) => self
                .country_codes
                .iter()
                .any(|code| code.trim().eq_ignore_ascii_case(country)),
            None => false,
        }
    }

    pub fn falls_within(&self, period: &Period) -> bool {
        period.contains(self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_global_holiday_applies_to_everyone() {
        let h = Holiday::new(date(2025, 1, 1), "New Year");
        assert!(h.applies_to(None));
        assert!(h.applies_to(Some("DE")));
    }

    #[test]
    fn test_country_holiday() {
        let h = Holiday::new(date(2025, 10, 3), "German Unity Day").for_countries(["DE", "AT"]);
        assert!(h.applies_to(Some("DE")));
        assert!(h.applies_to(Some("de")));
        assert!(!h.applies_to(Some("US")));
        assert!(!h.applies_to(None));
        assert!(!h.applies_to(Some("  ")));
    }

    #[test]
    fn test_falls_within() {
        let period = Period::new(date(2025, 1, 1), date(2025, 3, 31));
        assert!(Holiday::new(date(2025, 3, 31), "x").falls_within(&period));
        assert!(!Holiday::new(date(2025, 4, 1), "y").falls_within(&period));
    }
}

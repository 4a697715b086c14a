use chrono::Month;
use serde::{Deserialize, Serialize};

/// Month the "spend this month" rule reports on.
pub const DEFAULT_SPEND_MONTH: YearMonth = YearMonth {
    year: 2024,
    month: 11,
};

/// A calendar month, written `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    /// English month name, e.g. `November`.
    #[must_use]
    pub fn month_name(&self) -> &'static str {
        u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map_or("Unknown", |m| m.name())
    }
}

impl Default for YearMonth {
    fn default() -> Self {
        DEFAULT_SPEND_MONTH
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl std::str::FromStr for YearMonth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| format!("expected YYYY-MM, got '{s}'"))?;
        let year: i32 = year
            .parse()
            .map_err(|_| format!("invalid year in '{s}'"))?;
        let month: u32 = month
            .parse()
            .map_err(|_| format!("invalid month in '{s}'"))?;
        if !(1..=12).contains(&month) {
            return Err(format!("month {month} out of range in '{s}'"));
        }
        Ok(Self { year, month })
    }
}

impl TryFrom<String> for YearMonth {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_year_month() {
        assert_eq!("2024-11".parse::<YearMonth>(), Ok(DEFAULT_SPEND_MONTH));
        assert_eq!(
            "2025-03".parse::<YearMonth>(),
            Ok(YearMonth {
                year: 2025,
                month: 3
            })
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert!("2024".parse::<YearMonth>().is_err());
        assert!("2024-13".parse::<YearMonth>().is_err());
        assert!("2024-00".parse::<YearMonth>().is_err());
        assert!("nov-2024".parse::<YearMonth>().is_err());
    }

    #[test]
    fn displays_zero_padded() {
        let ym = YearMonth {
            year: 2025,
            month: 3,
        };
        assert_eq!(ym.to_string(), "2025-03");
        assert_eq!(ym.month_name(), "March");
        assert_eq!(DEFAULT_SPEND_MONTH.month_name(), "November");
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn serializes_as_string() {
        let json = serde_json::to_string(&DEFAULT_SPEND_MONTH).expect("should serialize");
        assert_eq!(json, "\"2024-11\"");
        let back: YearMonth = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(back, DEFAULT_SPEND_MONTH);
        assert!(serde_json::from_str::<YearMonth>("\"2024-99\"").is_err());
    }
}

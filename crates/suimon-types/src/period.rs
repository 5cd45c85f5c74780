//! User-entered ranges and month arithmetic.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Axis, InputError};

/// A calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct YearMonth {
    /// Calendar year.
    pub year: i32,
    /// Month, 1 through 12.
    pub month: u32,
}

impl YearMonth {
    /// Creates a month, validating that `month` is in 1..=12.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidMonth`] for any other month.
    pub fn new(year: i32, month: u32) -> Result<Self, InputError> {
        if !(1..=12).contains(&month) {
            return Err(InputError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// Returns the last calendar day of the month (28-31).
    #[must_use]
    pub fn last_day(&self) -> u32 {
        self.checked_succ()
            .and_then(|next| NaiveDate::from_ymd_opt(next.year, next.month, 1))
            .and_then(|d| d.pred_opt())
            .map_or(31, |d| chrono::Datelike::day(&d))
    }

    /// Returns the following month, or `None` past December of `i32::MAX`.
    #[must_use]
    pub const fn checked_succ(&self) -> Option<Self> {
        if self.month == 12 {
            match self.year.checked_add(1) {
                Some(year) => Some(Self { year, month: 1 }),
                None => None,
            }
        } else {
            Some(Self {
                year: self.year,
                month: self.month + 1,
            })
        }
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{:02}", self.year, self.month)
    }
}

/// A validated, non-inverted range entered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "lowercase")]
pub enum PlanBounds {
    /// Month-granular bounds, both inclusive.
    Months {
        /// First month.
        start: YearMonth,
        /// Last month.
        end: YearMonth,
    },
    /// Year-granular bounds, both inclusive.
    Years {
        /// First year.
        start: i32,
        /// Last year.
        end: i32,
    },
}

impl PlanBounds {
    /// Creates month bounds, rejecting an inverted range.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidRange`] if `start` is after `end`.
    pub fn months(start: YearMonth, end: YearMonth) -> Result<Self, InputError> {
        if start > end {
            return Err(InputError::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self::Months { start, end })
    }

    /// Creates year bounds, rejecting an inverted range.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidRange`] if `start > end`.
    pub fn years(start: i32, end: i32) -> Result<Self, InputError> {
        if start > end {
            return Err(InputError::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self::Years { start, end })
    }

    /// Parses the two strings entered for a plan on the given axis.
    ///
    /// Month axes take `YYYY/MM`; year and period axes take bare years.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] describing the first problem found.
    pub fn parse(axis: Axis, start: &str, end: &str) -> Result<Self, InputError> {
        if axis.takes_months() {
            Self::parse_months(start, end)
        } else {
            Self::parse_years(start, end)
        }
    }

    /// Parses `YYYY/MM` bounds.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] describing the first problem found.
    pub fn parse_months(start: &str, end: &str) -> Result<Self, InputError> {
        if let Some(bad) = [start, end]
            .into_iter()
            .find(|s| !s.chars().all(|c| c.is_ascii_digit() || c == '/'))
        {
            return Err(InputError::InvalidCharacters(bad.to_string()));
        }

        let (start_year, start_month) = split_year_month(start)?;
        let (end_year, end_month) = split_year_month(end)?;
        let start = YearMonth::new(start_year, start_month)?;
        let end = YearMonth::new(end_year, end_month)?;

        Self::months(start, end)
    }

    /// Parses bare-year bounds.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] describing the first problem found.
    pub fn parse_years(start: &str, end: &str) -> Result<Self, InputError> {
        let start_year = parse_year(start)?;
        let end_year = parse_year(end)?;
        Self::years(start_year, end_year)
    }

    /// Returns the first calendar year covered.
    #[must_use]
    pub const fn start_year(&self) -> i32 {
        match self {
            Self::Months { start, .. } => start.year,
            Self::Years { start, .. } => *start,
        }
    }

    /// Returns the last calendar year covered.
    #[must_use]
    pub const fn end_year(&self) -> i32 {
        match self {
            Self::Months { end, .. } => end.year,
            Self::Years { end, .. } => *end,
        }
    }
}

impl std::fmt::Display for PlanBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Months { start, end } => write!(f, "{start} to {end}"),
            Self::Years { start, end } => write!(f, "{start} to {end}"),
        }
    }
}

fn split_year_month(s: &str) -> Result<(i32, u32), InputError> {
    let invalid = || InputError::InvalidFormat(s.to_string());
    let (year, month) = s.split_once('/').ok_or_else(invalid)?;
    let year = year.parse::<i32>().map_err(|_| invalid())?;
    let month = month.parse::<u32>().map_err(|_| invalid())?;
    Ok((year, month))
}

fn parse_year(s: &str) -> Result<i32, InputError> {
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
        return Err(InputError::InvalidCharacters(s.to_string()));
    }
    s.parse::<i32>()
        .map_err(|_| InputError::InvalidCharacters(s.to_string()))
}

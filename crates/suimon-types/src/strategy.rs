//! Strategy descriptors for decomposing a range into portal queries.

use serde::{Deserialize, Serialize};

/// Time axis a plan walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// One query per calendar month.
    Month,
    /// One query per calendar year.
    Year,
    /// A single query spanning the whole range.
    Period,
}

impl Axis {
    /// Returns true if bounds are entered as `YYYY/MM`.
    #[must_use]
    pub const fn takes_months(&self) -> bool {
        matches!(self, Self::Month)
    }
}

/// Rule for the `ENDDATE` sent with each query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndDatePolicy {
    /// Last calendar day of the month, leap-year aware.
    ExactLastDay,
    /// Day 31 regardless of month length. The portal accepts it.
    PaddedDay31,
    /// December 31 of the (last) year.
    FixedYearEnd,
}

/// Rule for naming the file a query's payload is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileNaming {
    /// `<year>_<MM>.dat`
    YearMonth,
    /// `<year>.dat`
    Year,
    /// `<start>-<end>.dat`
    Span,
}

/// How one data kind turns a validated range into queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Strategy {
    /// Time axis walked by the planner.
    pub axis: Axis,
    /// End-date rule per query.
    pub end_date: EndDatePolicy,
}

impl Strategy {
    /// Monthly queries ending on the true last day of each month.
    pub const MONTHLY_EXACT: Self = Self {
        axis: Axis::Month,
        end_date: EndDatePolicy::ExactLastDay,
    };

    /// Monthly queries always ending on day 31.
    pub const MONTHLY_PADDED: Self = Self {
        axis: Axis::Month,
        end_date: EndDatePolicy::PaddedDay31,
    };

    /// Yearly queries from January 31 to December 31.
    pub const YEARLY: Self = Self {
        axis: Axis::Year,
        end_date: EndDatePolicy::FixedYearEnd,
    };

    /// One query from January 31 of the start year to December 31 of the end year.
    pub const PERIOD: Self = Self {
        axis: Axis::Period,
        end_date: EndDatePolicy::FixedYearEnd,
    };

    /// Returns the file naming rule, which follows from the axis.
    #[must_use]
    pub const fn naming(&self) -> FileNaming {
        match self.axis {
            Axis::Month => FileNaming::YearMonth,
            Axis::Year => FileNaming::Year,
            Axis::Period => FileNaming::Span,
        }
    }

    /// Returns a short human-readable name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match (self.axis, self.end_date) {
            (Axis::Month, EndDatePolicy::PaddedDay31) => "monthly-padded",
            (Axis::Month, _) => "monthly-exact",
            (Axis::Year, _) => "yearly",
            (Axis::Period, _) => "period",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

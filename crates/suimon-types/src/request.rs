//! Planned queries and the tokens they yield.

use serde::{Deserialize, Serialize};

use crate::{DataCategory, FileNaming, KindCode, StationId, YearMonth};

/// A `YYYYMMDD` date as sent in `BGNDATE`/`ENDDATE`.
///
/// Not validated against the calendar: padded plans send day 31 for every
/// month, which the portal tolerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WireDate {
    /// Year.
    pub year: i32,
    /// Month.
    pub month: u32,
    /// Day of month.
    pub day: u32,
}

impl WireDate {
    /// Creates a wire date.
    #[must_use]
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }
}

impl std::fmt::Display for WireDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}{:02}{:02}", self.year, self.month, self.day)
    }
}

/// The unit of time one request covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "lowercase")]
pub enum RequestSpan {
    /// A single month.
    Month(YearMonth),
    /// A single year.
    Year {
        /// The year.
        year: i32,
    },
    /// A contiguous run of years, queried at once.
    Period {
        /// First year.
        start: i32,
        /// Last year.
        end: i32,
    },
}

impl RequestSpan {
    /// Returns the naming rule for this span's file.
    #[must_use]
    pub const fn naming(&self) -> FileNaming {
        match self {
            Self::Month(_) => FileNaming::YearMonth,
            Self::Year { .. } => FileNaming::Year,
            Self::Period { .. } => FileNaming::Span,
        }
    }

    /// Returns the file stem: `2019_03`, `2019` or `2015-2019`.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Month(ym) => format!("{}_{:02}", ym.year, ym.month),
            Self::Year { year } => year.to_string(),
            Self::Period { start, end } => format!("{start}-{end}"),
        }
    }

    /// Returns true if the span lies within `start..=end` years.
    #[must_use]
    pub const fn within_years(&self, start: i32, end: i32) -> bool {
        let (first, last) = match self {
            Self::Month(ym) => (ym.year, ym.year),
            Self::Year { year } => (*year, *year),
            Self::Period { start, end } => (*start, *end),
        };
        first >= start && last <= end
    }
}

impl std::fmt::Display for RequestSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Month(ym) => write!(f, "{ym}"),
            Self::Year { year } => write!(f, "{year}"),
            Self::Period { start, end } => write!(f, "{start}-{end}"),
        }
    }
}

/// One query against the portal's display endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadRequest {
    /// Station queried.
    pub station_id: StationId,
    /// Data family, selecting the endpoint.
    pub category: DataCategory,
    /// Kind code.
    pub kind: KindCode,
    /// Time unit covered, which also names the output file.
    pub span: RequestSpan,
    /// `BGNDATE` value.
    pub begin: WireDate,
    /// `ENDDATE` value.
    pub end: WireDate,
}

/// Single-use identifier for a prepared data file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DownloadToken(String);

impl DownloadToken {
    /// Wraps a token value.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DownloadToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_date_format() {
        assert_eq!(WireDate::new(2019, 2, 31).to_string(), "20190231");
        assert_eq!(WireDate::new(2019, 11, 1).to_string(), "20191101");
    }

    #[test]
    fn test_span_labels() {
        let month = RequestSpan::Month(YearMonth::new(2019, 3).unwrap());
        assert_eq!(month.label(), "2019_03");
        assert_eq!(RequestSpan::Year { year: 2019 }.label(), "2019");
        assert_eq!(
            RequestSpan::Period {
                start: 2015,
                end: 2019
            }
            .label(),
            "2015-2019"
        );
    }

    #[test]
    fn test_within_years() {
        let period = RequestSpan::Period {
            start: 2015,
            end: 2019,
        };
        assert!(period.within_years(2015, 2019));
        assert!(!period.within_years(2016, 2019));
        assert!(RequestSpan::Year { year: 2017 }.within_years(2015, 2019));
    }
}

//! Decomposition of validated bounds into portal queries.

use suimon_types::{
    Axis, DataCategory, DownloadRequest, EndDatePolicy, KindCode, PlanBounds, RequestSpan,
    Result, StationId, Strategy, SuimonError, WireDate, YearMonth,
};
use tracing::debug;

/// Iterator over every month from `start` to `end`, inclusive.
#[derive(Debug, Clone)]
pub struct MonthIterator {
    current: Option<YearMonth>,
    end: YearMonth,
}

impl MonthIterator {
    /// Creates an iterator; it is empty if `start` is after `end`.
    #[must_use]
    pub const fn new(start: YearMonth, end: YearMonth) -> Self {
        Self {
            current: Some(start),
            end,
        }
    }

    fn remaining(&self) -> usize {
        let Some(current) = self.current else {
            return 0;
        };
        let from = i64::from(current.year) * 12 + i64::from(current.month);
        let to = i64::from(self.end.year) * 12 + i64::from(self.end.month);
        if to < from { 0 } else { (to - from + 1) as usize }
    }
}

impl Iterator for MonthIterator {
    type Item = YearMonth;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.current.filter(|month| *month <= self.end)?;
        self.current = result.checked_succ();
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for MonthIterator {}

/// Builds the request sequence for one station and kind.
#[derive(Debug, Clone)]
pub struct Planner {
    category: DataCategory,
    station_id: StationId,
    kind: KindCode,
}

impl Planner {
    /// Creates a planner for a station's data kind.
    #[must_use]
    pub const fn new(category: DataCategory, station_id: StationId, kind: KindCode) -> Self {
        Self {
            category,
            station_id,
            kind,
        }
    }

    /// Decomposes `bounds` into requests, in ascending chronological order.
    ///
    /// # Errors
    ///
    /// Returns [`SuimonError::AxisMismatch`] if the bounds were parsed for a
    /// different axis than `strategy` walks.
    pub fn plan(&self, strategy: Strategy, bounds: PlanBounds) -> Result<Vec<DownloadRequest>> {
        let requests = match (strategy.axis, bounds) {
            (Axis::Month, PlanBounds::Months { start, end }) => MonthIterator::new(start, end)
                .map(|ym| {
                    let last = match strategy.end_date {
                        EndDatePolicy::PaddedDay31 => 31,
                        EndDatePolicy::ExactLastDay | EndDatePolicy::FixedYearEnd => {
                            ym.last_day()
                        }
                    };
                    self.request(
                        RequestSpan::Month(ym),
                        WireDate::new(ym.year, ym.month, 1),
                        WireDate::new(ym.year, ym.month, last),
                    )
                })
                .collect(),
            (Axis::Year, PlanBounds::Years { start, end }) => (start..=end)
                .map(|year| {
                    self.request(
                        RequestSpan::Year { year },
                        WireDate::new(year, 1, 31),
                        WireDate::new(year, 12, 31),
                    )
                })
                .collect(),
            (Axis::Period, PlanBounds::Years { start, end }) => vec![self.request(
                RequestSpan::Period { start, end },
                WireDate::new(start, 1, 31),
                WireDate::new(end, 12, 31),
            )],
            _ => return Err(SuimonError::AxisMismatch { strategy, bounds }),
        };

        let (first, last) = (bounds.start_year(), bounds.end_year());
        debug_assert!(requests.iter().all(|r: &DownloadRequest| {
            r.span.naming() == strategy.naming() && r.span.within_years(first, last)
        }));

        debug!(
            station = %self.station_id,
            kind = %self.kind,
            %strategy,
            steps = requests.len(),
            "planned requests"
        );
        Ok(requests)
    }

    fn request(&self, span: RequestSpan, begin: WireDate, end: WireDate) -> DownloadRequest {
        DownloadRequest {
            station_id: self.station_id.clone(),
            category: self.category,
            kind: self.kind,
            span,
            begin,
            end,
        }
    }
}

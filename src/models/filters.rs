use chrono::NaiveDate;

/// Date range selection; only active once both ends are chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Both endpoints, or `None` while the selection is incomplete.
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start, self.end) {
            (Some(s), Some(e)) => Some((s, e)),
            _ => None,
        }
    }
}

/// Current user selections driving the report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub search: String,
    pub single_date: Option<NaiveDate>,
    pub date_range: DateRange,
}

impl Filters {
    pub fn with_search(mut self, text: &str) -> Self {
        self.search = text.to_string();
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.single_date = Some(date);
        self
    }

    pub fn with_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.date_range = DateRange::new(start, end);
        self
    }

    /// Reset every selection.
    pub fn clear(&mut self) {
        *self = Filters::default();
    }
}

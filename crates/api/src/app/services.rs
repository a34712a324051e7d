use std::sync::Arc;

use chrono::{FixedOffset, NaiveDate, Utc};

use clientdesk_infra::DashboardSource;

/// Source of "today" in the evaluation timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    /// Wall clock, truncated to a date at the given offset.
    System(FixedOffset),
    /// Pinned date.
    Fixed(NaiveDate),
}

impl Clock {
    pub fn system(offset: FixedOffset) -> Self {
        Clock::System(offset)
    }

    pub fn fixed(date: NaiveDate) -> Self {
        Clock::Fixed(date)
    }

    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System(offset) => clientdesk_core::local_date(&Utc::now(), offset),
            Clock::Fixed(date) => *date,
        }
    }
}

/// Everything handlers need: the data-access port and a clock.
#[derive(Clone)]
pub struct AppServices {
    source: Arc<dyn DashboardSource>,
    clock: Clock,
}

impl AppServices {
    pub fn new(source: Arc<dyn DashboardSource>, clock: Clock) -> Self {
        Self { source, clock }
    }

    pub fn source(&self) -> &dyn DashboardSource {
        self.source.as_ref()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}

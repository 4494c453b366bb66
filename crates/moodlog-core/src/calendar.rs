//! Month grid layout.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::day::Month;
use crate::entry::MoodEntry;

/// One cell of the month grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GridSlot {
    Empty,
    Day {
        day: NaiveDate,
        entry: Option<MoodEntry>,
    },
}

impl GridSlot {
    pub fn is_empty(&self) -> bool {
        matches!(self, GridSlot::Empty)
    }

    pub fn day(&self) -> Option<NaiveDate> {
        match self {
            GridSlot::Empty => None,
            GridSlot::Day { day, .. } => Some(*day),
        }
    }

    pub fn entry(&self) -> Option<&MoodEntry> {
        match self {
            GridSlot::Empty => None,
            GridSlot::Day { entry, .. } => entry.as_ref(),
        }
    }
}

static EMPTY: GridSlot = GridSlot::Empty;

/// A 7-column month layout: leading padding, then one slot per day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarGrid {
    month: Month,
    week_start: Weekday,
    leading: usize,
    slots: Vec<GridSlot>,
}

impl CalendarGrid {
    /// Lay out `month` with weeks starting on `week_start`.
    ///
    /// `lookup` is asked once per calendar day for that day's entry.
    pub fn build<F>(month: Month, week_start: Weekday, mut lookup: F) -> Self
    where
        F: FnMut(NaiveDate) -> Option<MoodEntry>,
    {
        let leading = leading_offset(month.first_day().weekday(), week_start);
        let mut slots = Vec::with_capacity(leading + month.days_in_month() as usize);
        slots.extend(std::iter::repeat(GridSlot::Empty).take(leading));
        for day in month.days() {
            slots.push(GridSlot::Day {
                day,
                entry: lookup(day),
            });
        }
        Self {
            month,
            week_start,
            leading,
            slots,
        }
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// Number of empty slots before the 1st.
    pub fn leading(&self) -> usize {
        self.leading
    }

    pub fn slots(&self) -> &[GridSlot] {
        &self.slots
    }

    /// The day slots only, skipping the leading padding.
    pub fn day_slots(&self) -> &[GridSlot] {
        &self.slots[self.leading..]
    }

    /// Weekday of each column, starting at `week_start`.
    pub fn weekday_header(&self) -> [Weekday; 7] {
        let mut header = [self.week_start; 7];
        for i in 1..7 {
            header[i] = header[i - 1].succ();
        }
        header
    }

    /// Rows of seven slots; the last row is padded with empty slots.
    pub fn rows(&self) -> Vec<[&GridSlot; 7]> {
        self.slots
            .chunks(7)
            .map(|chunk| {
                let mut row = [&EMPTY; 7];
                for (cell, slot) in row.iter_mut().zip(chunk) {
                    *cell = slot;
                }
                row
            })
            .collect()
    }
}

fn leading_offset(first: Weekday, week_start: Weekday) -> usize {
    ((first.num_days_from_monday() + 7 - week_start.num_days_from_monday()) % 7) as usize
}

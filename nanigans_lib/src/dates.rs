//! Calendar helpers for day-by-day pagination.

use std::iter::FusedIterator;

use chrono::{Duration, NaiveDate};

/// Every calendar day from `start` to `end`, inclusive, ascending.
///
/// Cloning restarts the walk from the clone point. An inverted range
/// (`start > end`) yields nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateRange {
    next: NaiveDate,
    end: NaiveDate,
    done: bool,
}

pub fn date_range(start: NaiveDate, end: NaiveDate) -> DateRange {
    DateRange {
        next: start,
        end,
        done: start > end,
    }
}

impl Iterator for DateRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        if self.done {
            return None;
        }
        let day = self.next;
        match day.succ_opt() {
            Some(following) if day < self.end => self.next = following,
            _ => self.done = true,
        }
        Some(day)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for DateRange {
    fn len(&self) -> usize {
        if self.done {
            0
        } else {
            (self.end - self.next).num_days() as usize + 1
        }
    }
}

impl FusedIterator for DateRange {}

/// The default reporting window: the seven days before `today`, ending yesterday.
///
/// `None` when the window would start before the first representable date.
pub fn trailing_week(today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let start = today.checked_sub_signed(Duration::days(7))?;
    let end = today.checked_sub_signed(Duration::days(1))?;
    Some((start, end))
}

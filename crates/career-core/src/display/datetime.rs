//! Date display utilities.

use std::fmt;

use jiff::civil::Date;

/// A wrapper around a calendar date that formats it for people, e.g.
/// `Tue, Mar 5, 2024`.
///
/// Snapshots keep dates as `YYYY-MM-DD`; this is only for output.
///
/// # Examples
///
/// ```rust
/// use career_core::display::LongDate;
/// use jiff::civil::date;
///
/// assert_eq!(LongDate(&date(2024, 3, 5)).to_string(), "Tue, Mar 5, 2024");
/// ```
pub struct LongDate<'a>(pub &'a Date);

impl<'a> fmt::Display for LongDate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%a, %b %-d, %Y"))
    }
}

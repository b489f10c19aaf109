//! Dates command - show the day-by-day calendar for a date range

use crate::cli::style::Stylize;
use anstream::println;
use tripflow::dates;
use tripflow::error::Result;

/// Run the dates command: print the inclusive day count and each day's
/// calendar date in both wire formats.
pub fn run_dates(from: &str, to: &str) -> Result<()> {
    let from = dates::parse_iso(from)?;
    let to = dates::parse_iso(to)?;
    let count = dates::trip_length_days(from, to);

    println!(
        "{} day{} from {} to {}",
        count.accent(),
        if count == 1 { "" } else { "s" },
        dates::iso_string(from).emphasis(),
        dates::iso_string(to).emphasis(),
    );

    if count < 1 {
        println!("{}", "end date is before start date".muted());
        return Ok(());
    }

    for day_id in 1..=u32::try_from(count).unwrap_or(u32::MAX) {
        let date = dates::day_date(from, day_id);
        println!(
            "  day {:>2}  {}  {}",
            day_id,
            dates::iso_string(date),
            dates::attach_string(date).muted(),
        );
    }

    Ok(())
}

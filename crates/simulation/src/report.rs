//! Tab-separated report rendering.

use std::io::{self, Write};

use crate::aggregator::AverageReport;

/// Write the averages table: a `Day` header plus one column per strategy,
/// then one row per day index starting at 1.
pub fn write_table<W: Write>(report: &AverageReport, out: &mut W) -> io::Result<()> {
    write!(out, "Day")?;
    for (id, _) in report.entries() {
        write!(out, "\t{}", id)?;
    }
    writeln!(out)?;

    for day in 0..report.num_days() {
        write!(out, "{}", day + 1)?;
        for (_, averages) in report.entries() {
            write!(out, "\t{}", averages[day])?;
        }
        writeln!(out)?;
    }
    Ok(())
}

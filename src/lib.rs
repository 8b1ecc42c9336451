use std::io::{self, Write};
use std::time::{Duration, Instant};

pub mod logging;

/// Upper bound the binary counts to.
pub const DEFAULT_BOUND: u64 = 1_000_000_000;

/// What a finished counting run looked like: the value the counter ended on
/// and how long the loop took, measured with a monotonic clock.
#[derive(Debug, Clone, Copy)]
pub struct CountReport {
    pub final_value: u64,
    pub elapsed: Duration,
}

impl CountReport {
    /// Elapsed time in microseconds, as a double (nanoseconds / 1000.0).
    pub fn elapsed_micros(&self) -> f64 {
        self.elapsed.as_nanos() as f64 / 1000.0
    }
}

/// Counts from 1 up to `bound` inclusive, printing each value after the
/// increment, and times the whole loop.
///
/// The printed value is the post-increment one, so the output runs from
/// `Voici: 2` through `Voici: <bound + 1>`. A bound below the starting
/// value of 1 prints nothing and reports a final value of 1.
///
/// The caller owns buffering and flushing of `out`.
pub fn count_to<W: Write>(bound: u64, out: &mut W) -> io::Result<CountReport> {
    let start = Instant::now();
    let mut value: u64 = 1;
    while value <= bound {
        value += 1;
        writeln!(out, "Voici: {value}")?;
    }
    let elapsed = start.elapsed();
    Ok(CountReport {
        final_value: value,
        elapsed,
    })
}

/// Writes the closing `Microsecondes : <elapsed>` line for a report.
pub fn write_summary<W: Write>(report: &CountReport, out: &mut W) -> io::Result<()> {
    writeln!(out, "Microsecondes : {}", report.elapsed_micros())
}

/// Full run with the default bound: counter lines, then the summary line.
pub fn run<W: Write>(out: &mut W) -> io::Result<CountReport> {
    let report = count_to(DEFAULT_BOUND, out)?;
    write_summary(&report, out)?;
    Ok(report)
}

use std::io::{self, BufWriter, Write};

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    compter::logging::init();

    let stdout = io::stdout().lock();
    // Printing dominates the runtime; one big buffer instead of a flush per
    // line, same lines in the same order.
    let mut out = BufWriter::with_capacity(1 << 20, stdout);

    let report = compter::run(&mut out).context("writing counter output")?;
    out.flush().context("flushing standard output")?;

    tracing::debug!(
        final_value = report.final_value,
        micros = report.elapsed_micros(),
        "count finished"
    );

    Ok(())
}

// Wall-clock instrumentation applied per operation by wrapping it.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crate::console::Console;

/// Run `op` and return its result together with how long it took.
pub fn measure<T>(op: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = op();
    (result, start.elapsed())
}

pub fn report_line(name: &str, elapsed: Duration) -> String {
    format!(
        "{} execution time is {:.3} milliseconds",
        name,
        elapsed.as_secs_f64() * 1000.0
    )
}

/// Run `op` against the console and, when `enabled`, follow its output
/// with a duration line for `name`.
pub fn timed<W, T>(
    console: &mut Console<W>,
    name: &str,
    enabled: bool,
    op: impl FnOnce(&mut Console<W>) -> T,
) -> io::Result<T>
where
    W: Write,
{
    if !enabled {
        return Ok(op(console));
    }
    let (result, elapsed) = measure(|| op(&mut *console));
    log::trace!("{} took {:?}", name, elapsed);
    console.line(&report_line(name, elapsed))?;
    Ok(result)
}

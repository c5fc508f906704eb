use env_logger::{Builder, Env};
use std::io::Write;

use crate::config::LOG_VAR;

/// Install the stderr logger. The filter comes from `USERSAPP_LOG`
/// and defaults to `warn` so prompts are not interleaved with noise.
pub fn setup_logger() -> Result<(), log::SetLoggerError> {
    Builder::from_env(Env::default().filter_or(LOG_VAR, "warn"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {} {}] {}",
                buf.timestamp_seconds(),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()?;
    log::info!("logger initialised");
    Ok(())
}

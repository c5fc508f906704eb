// Entrypoint for the CLI application.
// - Keeps `main` small: read configuration, build the user list and hand
//   it to the interactive loop.

use usersapp::app::{run, TerminalPrompt};
use usersapp::config::AppConfig;
use usersapp::logger::setup_logger;
use usersapp::users::UsersData;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    setup_logger()?;
    config.warn_ignored();
    log::info!("starting with {:?}", config);

    // Lives for the whole session; nothing is persisted.
    let mut users = UsersData::stdout(config.color, config.timing);

    run(&mut TerminalPrompt, &mut users, config.mode)?;
    Ok(())
}

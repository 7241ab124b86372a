mod board;
mod commands;
mod terminal;

use commands::{CommandLine, Commands, board as board_cmd, check};
use terminal::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.to_config();

    match commands.selected_command() {
        Commands::Board => {
            logging::init_board_logging(commands.log_file.as_deref())?;
            board_cmd::board(&cfg).await
        }
        Commands::Check => {
            logging::init_terminal_logging();
            check::check(&cfg).await
        }
    }
}

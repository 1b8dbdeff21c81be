mod commands;
mod terminal;

use commands::{CommandLine, Commands, info, list};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init_logging()?;
    print::banner(cfg.no_banner, cfg.quiet);

    let result = match commands.command() {
        Commands::List => {
            print::header("fetching employees", cfg.quiet);
            list::list(&cfg).await
        }
        Commands::Info => {
            print::header("about the tool", cfg.quiet);
            info::info(&cfg);
            Ok(())
        }
    };

    print::separator(cfg.quiet);
    result
}

use anyhow::Result;
use clap::Parser;

use itl_cli::cli::commands::{configure, panel, translate};
use itl_cli::cli::{Args, Command};
use itl_cli::logging;
use itl_cli::translation::print_languages;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let interactive = matches!(args.command, Some(Command::Panel { .. }));
    logging::init(args.verbose, interactive);

    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        Some(Command::Panel { translator }) => {
            let options = translator.or(args.translator).into();
            panel::run_panel(&options).await?;
        }
        None => {
            let options = translate::TranslateOptions {
                text: args.text,
                file: args.file,
                resolve: args.translator.into(),
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}

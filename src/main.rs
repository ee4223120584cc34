mod cli;
mod commands;
mod io;

use std::process::ExitCode;

use clap::Parser;

use cli::{Cli, Command};
use commands::CommandHandler;
use textcodec::web::ServerConfig;
use textcodec::{error, types, Context};

fn init_logging(default_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = match cli.command {
        Command::Serve { .. } => "info",
        _ => "warn",
    };
    init_logging(default_level);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("command failed: {:?}", e);
            eprintln!("error: {}", e);
            e.exit_code().into()
        }
    }
}

fn run(cli: Cli) -> error::Result<()> {
    let ctx = Context::default();

    let handler: Box<dyn CommandHandler> = match cli.command {
        Command::Enc {
            encoding,
            r#in,
            out,
            all,
            json,
        } => Box::new(commands::EncCommand {
            encoding,
            input: types::InputSource::parse(&r#in),
            output: types::OutputDest::parse(&out),
            all,
            json,
        }),

        Command::Dec {
            encoding,
            r#in,
            out,
            json,
        } => Box::new(commands::DecCommand {
            encoding,
            input: types::InputSource::parse(&r#in),
            output: types::OutputDest::parse(&out),
            json,
        }),

        Command::Conv {
            from,
            to,
            r#in,
            out,
            json,
        } => Box::new(commands::ConvCommand {
            from,
            to,
            input: types::InputSource::parse(&r#in),
            output: types::OutputDest::parse(&out),
            json,
        }),

        Command::List { json } => Box::new(commands::ListCommand { json }),

        Command::Info { encoding, json } => Box::new(commands::InfoCommand { encoding, json }),

        Command::Serve { bind } => Box::new(commands::ServeCommand {
            config: ServerConfig { bind },
        }),
    };

    handler.execute(&ctx)
}

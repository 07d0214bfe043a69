mod repl;

use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::{info, LevelFilter};
use std::io;

/// Converts infix expressions to postfix and evaluates them
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// A single space-delimited infix expression; reads expressions from stdin when omitted
    expression: Option<String>,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(
            args.verbose
                .log_level()
                .map_or(LevelFilter::Off, |level| level.to_level_filter()),
        )
        .parse_default_env()
        .init();

    let stdout = io::stdout();
    let stderr = io::stderr();
    match args.expression {
        Some(expression) => repl::convert_once(&expression, &mut stdout.lock()),
        None => {
            let redirected = !atty::is(atty::Stream::Stdin);
            info!("reading expressions from stdin (redirected: {})", redirected);
            let stdin = io::stdin();
            repl::run(
                stdin.lock(),
                &mut stdout.lock(),
                &mut stderr.lock(),
                redirected,
            )
        }
    }
}

use clap::Parser;

use nmtree::args::{NmTreeCli, RunConfig};
use nmtree::run::exit_status;

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() {
    let cli = NmTreeCli::parse();
    init_logging(cli.verbose);

    let config = match RunConfig::from_cli(cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("execution failed: {err}");
            std::process::exit(1);
        }
    };
    let strict = config.strict;

    let outcome = {
        let mut stdout = std::io::stdout().lock();
        nmtree::run::run(&config, &mut stdout)
    };
    match &outcome {
        Ok(summary) if strict && summary.malformed_lines > 0 => eprintln!(
            "execution failed: {} malformed line(s) in symbol dump",
            summary.malformed_lines
        ),
        Ok(_) => {}
        Err(err) => eprintln!("execution failed: {err}"),
    }
    std::process::exit(exit_status(&outcome, strict));
}

use trimfastq::{Cli, OutputTarget};

fn main() {
    let cli = match Cli::parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };
    let inv = cli.into_invocation();

    // Stdout carries the data; keep stderr quiet apart from warnings.
    let level = match inv.output {
        OutputTarget::Stdout => log::LevelFilter::Warn,
        OutputTarget::File(_) => log::LevelFilter::Info,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .init();

    if let Err(e) = trimfastq::run(&inv) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

use clap::ArgMatches;
use tracing::error;
use vellum_cli::settings;
use vellum_cli::CliResult;

mod cmds;
mod options;

fn main() {
    let matches = cmds::cli().get_matches();

    let tracing_level = if matches.get_flag("debug") {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt::fmt()
        .with_max_level(tracing_level)
        .init();

    match run(&matches) {
        Ok(output) => {
            if let Some(output) = output {
                println!("{output}");
            }
        }
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };
}

fn run(matches: &ArgMatches) -> CliResult<Option<String>> {
    let settings = settings::load(&settings::settings_path())?;

    match matches.subcommand() {
        Some(("queue", m)) => cmds::queue::invoke(m, &settings),
        Some(("schema", m)) => cmds::schema::invoke(m, &settings),
        Some(("user", m)) => cmds::user::invoke(m, &settings),
        Some(("connector", m)) => cmds::connector::invoke(m, &settings),
        Some(("hook", m)) => cmds::hook::invoke(m, &settings),
        Some(("configure", m)) => cmds::configure::invoke(m),
        _ => unreachable!(),
    }
}

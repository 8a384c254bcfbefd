use std::path::PathBuf;

use clap::{Arg, ArgMatches, Command};
use vellum_cli::cmd::user::{self, UserOptions};
use vellum_cli::settings::Settings;
use vellum_cli::types::{Locale, UserGroup};
use vellum_cli::CliResult;

use crate::cmds::{collect, explicit, parse_choice};
use crate::options;

pub(crate) fn command() -> Command {
    Command::new("user")
        .about("User management commands")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(create_command())
        .subcommand(change_command())
}

fn create_command() -> Command {
    Command::new("create")
        .about("Create a user")
        .arg(
            Arg::new("username")
                .required(true)
                .help("Email of the user to be created."),
        )
        .arg(options::password())
        .arg(options::user_group())
        .arg(options::locale())
        .arg(options::queue_ids("user"))
        .arg(options::organization_id())
        .arg(options::output_file())
}

fn change_command() -> Command {
    Command::new("change")
        .about("Change a user")
        .arg(
            Arg::new("id")
                .required(true)
                .value_parser(clap::value_parser!(u64))
                .help("Id of the user."),
        )
        .arg(options::password())
        .arg(options::user_group())
        .arg(options::locale())
        .arg(options::queue_ids("user"))
        .arg(options::output_file())
}

pub(crate) fn invoke(matches: &ArgMatches, settings: &Settings) -> CliResult<Option<String>> {
    match matches.subcommand() {
        Some(("create", m)) => {
            let opts = UserOptions {
                username: m.get_one::<String>("username").cloned(),
                password: m.get_one::<String>("password").cloned(),
                organization: m.get_one::<u64>("organization_id").copied(),
                group: parse_choice::<UserGroup>(m.get_one::<String>("group").cloned())?,
                locale: parse_choice::<Locale>(m.get_one::<String>("locale").cloned())?,
                queues: collect(m, "queue_ids"),
            };
            user::create(
                opts,
                settings,
                m.get_one::<PathBuf>("output_file").map(PathBuf::as_path),
            )
        }
        Some(("change", m)) => {
            let opts = UserOptions {
                username: None,
                password: m.get_one::<String>("password").cloned(),
                organization: None,
                group: parse_choice::<UserGroup>(explicit::<String>(m, "group"))?,
                locale: parse_choice::<Locale>(explicit::<String>(m, "locale"))?,
                queues: collect(m, "queue_ids"),
            };
            user::change(
                *m.get_one::<u64>("id").expect("required"),
                opts,
                m.get_one::<PathBuf>("output_file").map(PathBuf::as_path),
            )
        }
        _ => unreachable!(),
    }
}

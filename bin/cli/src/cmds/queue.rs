use std::path::PathBuf;

use clap::{Arg, ArgMatches, Command};
use vellum_cli::cmd::queue::{self, QueueOptions};
use vellum_cli::settings::Settings;
use vellum_cli::CliResult;

use crate::cmds::collect;
use crate::options;

pub(crate) fn command() -> Command {
    Command::new("queue")
        .about("Queue management commands")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(create_command())
        .subcommand(change_command())
}

fn create_command() -> Command {
    Command::new("create")
        .about("Create a queue")
        .arg(Arg::new("name").required(true).help("Name of the queue."))
        .arg(options::schema_content_file().required(true))
        .arg(options::email_prefix())
        .arg(options::bounce_email())
        .arg(options::connector_id())
        .arg(options::hook_id())
        .arg(options::workspace_id())
        .arg(options::user_ids())
        .arg(options::organization_id())
        .arg(options::output_file())
}

fn change_command() -> Command {
    Command::new("change")
        .about("Change a queue")
        .arg(id_arg("Id of the queue."))
        .arg(options::name())
        .arg(options::schema_content_file())
        .arg(options::email_prefix())
        .arg(options::bounce_email())
        .arg(options::connector_id())
        .arg(options::hook_id())
        .arg(options::workspace_id())
        .arg(options::user_ids())
        .arg(options::output_file())
}

fn id_arg(help: &'static str) -> Arg {
    Arg::new("id")
        .required(true)
        .value_parser(clap::value_parser!(u64))
        .help(help)
}

pub(crate) fn invoke(matches: &ArgMatches, settings: &Settings) -> CliResult<Option<String>> {
    match matches.subcommand() {
        Some(("create", m)) => {
            let mut opts = collect_options(m);
            opts.organization = m.get_one::<u64>("organization_id").copied();
            queue::create(
                opts,
                settings,
                m.get_one::<PathBuf>("output_file").map(PathBuf::as_path),
            )
        }
        Some(("change", m)) => queue::change(
            *m.get_one::<u64>("id").expect("required"),
            collect_options(m),
            m.get_one::<PathBuf>("output_file").map(PathBuf::as_path),
        ),
        _ => unreachable!(),
    }
}

fn collect_options(m: &ArgMatches) -> QueueOptions {
    QueueOptions {
        name: m.get_one::<String>("name").cloned(),
        workspace: m.get_one::<u64>("workspace_id").copied(),
        organization: None,
        schema_content_file: m.get_one::<PathBuf>("schema_content_file").cloned(),
        email_prefix: m.get_one::<String>("email_prefix").cloned(),
        bounce_email: m.get_one::<String>("bounce_email").cloned(),
        connector: m.get_one::<String>("connector_id").cloned(),
        hooks: collect(m, "hook_id"),
        users: collect(m, "user_ids"),
    }
}

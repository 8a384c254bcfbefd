use std::path::PathBuf;

use clap::{Arg, ArgMatches, Command};
use vellum_cli::cmd::connector::{self, ConnectorOptions};
use vellum_cli::settings::Settings;
use vellum_cli::CliResult;

use crate::cmds::{collect, explicit};
use crate::options;

pub(crate) fn command() -> Command {
    Command::new("connector")
        .about("Connector management commands")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(create_command())
        .subcommand(change_command())
}

fn create_command() -> Command {
    Command::new("create")
        .about("Create a connector")
        .arg(Arg::new("name").required(true).help("Name of the connector."))
        .arg(options::queue_ids("connector"))
        .arg(options::service_url())
        .arg(options::auth_token())
        .arg(options::params())
        .arg(options::asynchronous())
        .arg(options::organization_id())
        .arg(options::output_file())
}

fn change_command() -> Command {
    Command::new("change")
        .about("Change a connector")
        .arg(
            Arg::new("id")
                .required(true)
                .value_parser(clap::value_parser!(u64))
                .help("Id of the connector."),
        )
        .arg(options::name())
        .arg(options::queue_ids("connector"))
        .arg(options::service_url().required(false))
        .arg(options::auth_token())
        .arg(options::params())
        .arg(options::asynchronous())
        .arg(options::output_file())
}

pub(crate) fn invoke(matches: &ArgMatches, settings: &Settings) -> CliResult<Option<String>> {
    match matches.subcommand() {
        Some(("create", m)) => {
            let opts = ConnectorOptions {
                name: m.get_one::<String>("name").cloned(),
                queues: collect(m, "queue_ids"),
                organization: m.get_one::<u64>("organization_id").copied(),
                service_url: m.get_one::<String>("service_url").cloned(),
                params: m.get_one::<String>("params").cloned(),
                auth_token: m.get_one::<String>("auth_token").cloned(),
                asynchronous: m.get_one::<bool>("asynchronous").copied(),
            };
            connector::create(
                opts,
                settings,
                m.get_one::<PathBuf>("output_file").map(PathBuf::as_path),
            )
        }
        Some(("change", m)) => {
            let opts = ConnectorOptions {
                name: m.get_one::<String>("name").cloned(),
                queues: collect(m, "queue_ids"),
                organization: None,
                service_url: m.get_one::<String>("service_url").cloned(),
                params: m.get_one::<String>("params").cloned(),
                auth_token: m.get_one::<String>("auth_token").cloned(),
                asynchronous: explicit::<bool>(m, "asynchronous"),
            };
            connector::change(
                *m.get_one::<u64>("id").expect("required"),
                opts,
                m.get_one::<PathBuf>("output_file").map(PathBuf::as_path),
            )
        }
        _ => unreachable!(),
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn create_requires_service_url() {
        let err = command()
            .try_get_matches_from(["connector", "create", "SAP export"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn change_does_not_require_service_url() {
        command()
            .try_get_matches_from(["connector", "change", "15", "-n", "SAP export"])
            .unwrap();
    }

    #[test]
    fn asynchronous_defaults_to_true_on_create() {
        let matches = command()
            .try_get_matches_from([
                "connector",
                "create",
                "SAP export",
                "-u",
                "https://connector.example.com/sap",
            ])
            .unwrap();
        let m = matches.subcommand_matches("create").unwrap();
        assert_eq!(m.get_one::<bool>("asynchronous"), Some(&true));
    }
}

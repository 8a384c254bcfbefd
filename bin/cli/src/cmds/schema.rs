use std::path::PathBuf;

use clap::{Arg, ArgMatches, Command};
use vellum_cli::cmd::schema;
use vellum_cli::settings::Settings;
use vellum_cli::CliResult;

use crate::options;

pub(crate) fn command() -> Command {
    Command::new("schema")
        .about("Schema management commands")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(update_command())
}

fn update_command() -> Command {
    Command::new("update")
        .about("Update a schema")
        .arg(
            Arg::new("id")
                .required(true)
                .value_parser(clap::value_parser!(u64))
                .help("Id of the schema."),
        )
        .arg(options::name())
        .arg(options::schema_content_file().required(true))
        .arg(options::output_file())
}

pub(crate) fn invoke(matches: &ArgMatches, _settings: &Settings) -> CliResult<Option<String>> {
    match matches.subcommand() {
        Some(("update", m)) => schema::update(
            *m.get_one::<u64>("id").expect("required"),
            m.get_one::<String>("name").cloned(),
            m.get_one::<PathBuf>("schema_content_file")
                .expect("required"),
            m.get_one::<PathBuf>("output_file").map(PathBuf::as_path),
        ),
        _ => unreachable!(),
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn update_requires_schema_file() {
        let err = command()
            .try_get_matches_from(["schema", "update", "31336"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn update_accepts_output_file() {
        let matches = command()
            .try_get_matches_from([
                "schema", "update", "31336", "-s", "schema.json", "-O", "request.json",
            ])
            .unwrap();
        let m = matches.subcommand_matches("update").unwrap();
        assert_eq!(
            m.get_one::<PathBuf>("output_file"),
            Some(&PathBuf::from("request.json"))
        );
    }
}

use std::str::FromStr;

use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, Command};
use vellum_cli::CliResult;

pub mod configure;
pub mod connector;
pub mod hook;
pub mod queue;
pub mod schema;
pub mod user;

pub(crate) fn cli() -> Command {
    Command::new("vellumctl")
        .about("Manage queues, schemas, users, connectors and hooks on the Vellum document platform")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("debug")
                .long("debug")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Prints a verbose output during the program execution"),
        )
        .subcommand(queue::command())
        .subcommand(schema::command())
        .subcommand(user::command())
        .subcommand(connector::command())
        .subcommand(hook::command())
        .subcommand(configure::command())
}

/// The value only when the user typed it; defaults do not count. Change
/// commands use this so untouched attributes stay out of the request.
pub(crate) fn explicit<T>(matches: &ArgMatches, id: &str) -> Option<T>
where
    T: Clone + Send + Sync + 'static,
{
    match matches.value_source(id) {
        Some(ValueSource::CommandLine) => matches.get_one::<T>(id).cloned(),
        _ => None,
    }
}

pub(crate) fn collect<T>(matches: &ArgMatches, id: &str) -> Vec<T>
where
    T: Clone + Send + Sync + 'static,
{
    matches
        .get_many::<T>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

pub(crate) fn parse_choice<T>(value: Option<String>) -> CliResult<Option<T>>
where
    T: FromStr<Err = strum::ParseError>,
{
    Ok(value.map(|value| T::from_str(&value)).transpose()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_command_carries_conflicting_definitions() {
        cli().debug_assert();
    }

    #[test]
    fn explicit_ignores_defaulted_values() {
        let cmd = Command::new("probe")
            .no_binary_name(true)
            .arg(crate::options::active());

        let matches = cmd.clone().try_get_matches_from(Vec::<&str>::new()).unwrap();
        assert_eq!(explicit::<bool>(&matches, "active"), None);

        let matches = cmd.try_get_matches_from(["--active", "false"]).unwrap();
        assert_eq!(explicit::<bool>(&matches, "active"), Some(false));
    }
}

use std::path::PathBuf;

use clap::{Arg, ArgMatches, Command};
use vellum_cli::cmd::hook::{self, HookOptions};
use vellum_cli::settings::Settings;
use vellum_cli::types::HookType;
use vellum_cli::CliResult;

use crate::cmds::{collect, explicit, parse_choice};
use crate::options;

pub(crate) fn command() -> Command {
    Command::new("hook")
        .about("Hook management commands")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(create_command())
        .subcommand(change_command())
}

fn create_command() -> Command {
    let cmd = Command::new("create")
        .about("Create a hook")
        .arg(Arg::new("name").required(true).help("Name of the hook."))
        .arg(options::hook_type())
        .arg(options::queue_ids("hook"))
        .arg(options::active())
        .arg(options::events())
        .arg(options::organization_id())
        .arg(options::output_file());
    function_options_after_webhook(cmd)
}

fn change_command() -> Command {
    let cmd = Command::new("change")
        .about("Change a hook")
        .arg(
            Arg::new("id")
                .required(true)
                .value_parser(clap::value_parser!(u64))
                .help("Id of the hook."),
        )
        .arg(options::name())
        .arg(options::hook_type())
        .arg(options::queue_ids("hook"))
        .arg(options::active())
        .arg(options::events().required(false))
        .arg(options::output_file());
    function_options_after_webhook(cmd)
}

fn function_options_after_webhook(cmd: Command) -> Command {
    options::function_options(options::webhook_options(cmd))
}

pub(crate) fn invoke(matches: &ArgMatches, settings: &Settings) -> CliResult<Option<String>> {
    match matches.subcommand() {
        Some(("create", m)) => {
            let mut opts = collect_options(m);
            opts.name = m.get_one::<String>("name").cloned();
            opts.hook_type = parse_choice::<HookType>(m.get_one::<String>("type").cloned())?;
            opts.organization = m.get_one::<u64>("organization_id").copied();
            opts.active = m.get_one::<bool>("active").copied();
            hook::create(
                opts,
                settings,
                m.get_one::<PathBuf>("output_file").map(PathBuf::as_path),
            )
        }
        Some(("change", m)) => {
            let mut opts = collect_options(m);
            opts.name = m.get_one::<String>("name").cloned();
            opts.hook_type = parse_choice::<HookType>(explicit::<String>(m, "type"))?;
            opts.active = explicit::<bool>(m, "active");
            hook::change(
                *m.get_one::<u64>("id").expect("required"),
                opts,
                m.get_one::<PathBuf>("output_file").map(PathBuf::as_path),
            )
        }
        _ => unreachable!(),
    }
}

/// Config members come in through their all-or-none clusters, so only
/// explicit occurrences make it into the request.
fn collect_options(m: &ArgMatches) -> HookOptions {
    HookOptions {
        queues: collect(m, "queue_ids"),
        events: collect(m, "events"),
        config_url: explicit::<String>(m, "config_url"),
        config_secret: explicit::<String>(m, "config_secret"),
        config_insecure_ssl: explicit::<bool>(m, "config_insecure_ssl"),
        config_code: explicit::<String>(m, "config_code"),
        config_runtime: explicit::<String>(m, "config_runtime"),
        ..HookOptions::default()
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn create_requires_events() {
        let err = command()
            .try_get_matches_from(["hook", "create", "Invoice notifier"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn change_does_not_require_events() {
        command()
            .try_get_matches_from(["hook", "change", "77", "--active", "false"])
            .unwrap();
    }

    #[test]
    fn partial_webhook_config_is_rejected() {
        let err = command()
            .try_get_matches_from([
                "hook",
                "create",
                "Invoice notifier",
                "-e",
                "annotation_status",
                "--config-url",
                "https://example.com/notify",
            ])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn full_webhook_config_is_accepted() {
        command()
            .try_get_matches_from([
                "hook",
                "create",
                "Invoice notifier",
                "-e",
                "annotation_status",
                "--config-url",
                "https://example.com/notify",
                "--config-secret",
                "shhh",
                "--config-insecure-ssl",
                "false",
            ])
            .unwrap();
    }

    #[test]
    fn type_defaults_to_webhook_on_create() {
        let matches = command()
            .try_get_matches_from(["hook", "create", "Invoice notifier", "-e", "email"])
            .unwrap();
        let m = matches.subcommand_matches("create").unwrap();
        assert_eq!(
            m.get_one::<String>("type").map(String::as_str),
            Some("webhook")
        );
    }
}

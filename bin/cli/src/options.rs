//! Reusable flag definitions shared by the subcommands. Each constructor
//! returns a configured [`Arg`]; callers attach it with [`Command::arg`] and
//! may override any setting by chaining further builder calls, the later
//! call winning. Grouped options are attached through the `*_options`
//! functions, which also declare their all-or-none policy.

use std::path::PathBuf;

use clap::builder::PossibleValuesParser;
use clap::{value_parser, Arg, ArgAction, ArgGroup, Command, Id, ValueHint};
use vellum_cli::types::{HookType, Locale, UserGroup};

pub fn organization_id() -> Arg {
    Arg::new("organization_id")
        .short('o')
        .long("organization-id")
        .value_parser(value_parser!(u64))
        .help("Organization ID.")
        .hide(true)
}

pub fn name() -> Arg {
    Arg::new("name").short('n').long("name")
}

pub fn email_prefix() -> Arg {
    Arg::new("email_prefix")
        .long("email-prefix")
        .help("If not specified, documents cannot be imported via email.")
}

pub fn bounce_email() -> Arg {
    Arg::new("bounce_email")
        .long("bounce-email")
        .help("Unprocessable documents will be bounced to this email.")
}

pub fn connector_id() -> Arg {
    Arg::new("connector_id")
        .long("connector-id")
        .help("If not specified, queue will not call back a connector.")
}

pub fn hook_id() -> Arg {
    Arg::new("hook_id")
        .long("hook-id")
        .value_parser(value_parser!(u64))
        .action(ArgAction::Append)
        .help("If not specified, hook will not be associated with the queue.")
}

pub fn output_file() -> Arg {
    Arg::new("output_file")
        .short('O')
        .long("output-file")
        .value_parser(value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

pub fn schema_content_file() -> Arg {
    Arg::new("schema_content_file")
        .short('s')
        .long("schema-content-file")
        .value_parser(value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
        .help("Schema file.")
}

pub fn workspace_id() -> Arg {
    Arg::new("workspace_id")
        .short('w')
        .long("workspace-id")
        .value_parser(value_parser!(u64))
        .help("Workspace ID.")
}

pub fn queue_ids(related_object: &str) -> Arg {
    Arg::new("queue_ids")
        .short('q')
        .long("queue-id")
        .value_parser(value_parser!(u64))
        .action(ArgAction::Append)
        .help(format!(
            "Queue IDs, which the {related_object} will be associated with."
        ))
}

pub fn user_ids() -> Arg {
    Arg::new("user_ids")
        .short('u')
        .long("user-id")
        .value_parser(value_parser!(u64))
        .action(ArgAction::Append)
        .help("User IDs, which the queues will be associated with.")
}

pub fn service_url() -> Arg {
    Arg::new("service_url")
        .short('u')
        .long("service-url")
        .required(true)
        .help("Url of the connector endpoint.")
}

pub fn auth_token() -> Arg {
    Arg::new("auth_token")
        .short('t')
        .long("auth-token")
        .help(
            "Token sent to the connector in the header to ensure authorization. \
             Generated automatically, if not set manually.",
        )
}

pub fn params() -> Arg {
    Arg::new("params")
        .short('p')
        .long("params")
        .help("Query params appended to the service_url.")
}

pub fn asynchronous() -> Arg {
    Arg::new("asynchronous")
        .short('a')
        .long("asynchronous")
        .value_parser(value_parser!(bool))
        .default_value("true")
        .help("Affects calling of the connector.")
}

pub fn active() -> Arg {
    // a default satisfies presence, so no `required` on top of it
    Arg::new("active")
        .long("active")
        .value_parser(value_parser!(bool))
        .default_value("true")
        .help("Affects whether the hook is notified.")
}

pub fn events() -> Arg {
    Arg::new("events")
        .short('e')
        .long("events")
        .required(true)
        .action(ArgAction::Append)
        .help("List of events, when the hook should be notified.")
}

pub fn hook_type() -> Arg {
    Arg::new("type")
        .long("type")
        .value_parser(PossibleValuesParser::new(HookType::variants()))
        .default_value("webhook")
        .help("Hook type. Possible values: webhook, function.")
}

pub fn config_url() -> Arg {
    Arg::new("config_url")
        .long("config-url")
        .help("URL endpoint where the message from the hook should be pushed.")
}

pub fn config_secret() -> Arg {
    Arg::new("config_secret")
        .long("config-secret")
        .help("Secret key for authorization of payloads.")
}

pub fn config_insecure_ssl() -> Arg {
    Arg::new("config_insecure_ssl")
        .long("config-insecure-ssl")
        .value_parser(value_parser!(bool))
        .default_value("false")
        .help("Disable SSL certificate verification. (Use only for testing purposes.)")
}

pub fn config_code() -> Arg {
    Arg::new("config_code")
        .long("config-code")
        .help("String-serialized source code to be executed.")
}

pub fn config_runtime() -> Arg {
    Arg::new("config_runtime")
        .long("config-runtime")
        .default_value("nodejs12.x")
        .help("Runtime used to execute code. Allowed values: nodejs12.x.")
}

/// Attaches the webhook configuration cluster under its own help heading.
pub fn webhook_options(cmd: Command) -> Command {
    all_or_none(
        cmd,
        "webhook_config",
        "Webhook options",
        vec![config_url(), config_secret(), config_insecure_ssl()],
    )
}

/// Attaches the serverless function configuration cluster under its own
/// help heading.
pub fn function_options(cmd: Command) -> Command {
    all_or_none(
        cmd,
        "function_config",
        "Function options",
        vec![config_code(), config_runtime()],
    )
}

pub fn user_group() -> Arg {
    Arg::new("group")
        .short('g')
        .long("group")
        .value_parser(PossibleValuesParser::new(UserGroup::variants()))
        .default_value("annotator")
        .help("Permission group.")
}

pub fn locale() -> Arg {
    Arg::new("locale")
        .short('l')
        .long("locale")
        .value_parser(PossibleValuesParser::new(Locale::variants()))
        .default_value("en")
        .help("UI locale")
}

pub fn password() -> Arg {
    Arg::new("password")
        .short('p')
        .long("password")
        .help("Generated, if not specified.")
}

/// Registers every member of the cluster and wires the all-or-none policy:
/// each member requires every other member, and the surrounding `ArgGroup`
/// names the cluster as a whole. Requirements only fire on explicit
/// occurrences, so defaulted members do not drag the cluster in.
fn all_or_none(mut cmd: Command, id: &'static str, heading: &'static str, args: Vec<Arg>) -> Command {
    let ids: Vec<Id> = args.iter().map(|arg| arg.get_id().clone()).collect();
    for arg in args {
        let others: Vec<Id> = ids
            .iter()
            .filter(|other| *other != arg.get_id())
            .cloned()
            .collect();
        let mut arg = arg.help_heading(heading);
        for other in others {
            arg = arg.requires(other);
        }
        cmd = cmd.arg(arg);
    }
    cmd.group(ArgGroup::new(id).args(ids).multiple(true))
}

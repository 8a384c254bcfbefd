use clap::{Arg, ArgMatches, Command};
use vellum_cli::cmd::configure::{self, ConfigureOptions};
use vellum_cli::settings;
use vellum_cli::CliResult;

pub(crate) fn command() -> Command {
    Command::new("configure")
        .about("Store API defaults used by the other commands")
        .arg(
            Arg::new("api_url")
                .long("api-url")
                .env("VELLUM_API_URL")
                .help("Base URL of the API."),
        )
        .arg(
            Arg::new("api_token")
                .long("api-token")
                .env("VELLUM_API_TOKEN")
                .help("Token used to authenticate against the API."),
        )
        .arg(
            Arg::new("organization")
                .long("organization")
                .value_parser(clap::value_parser!(u64))
                .help("Default organization ID."),
        )
}

pub(crate) fn invoke(matches: &ArgMatches) -> CliResult<Option<String>> {
    let opts = ConfigureOptions {
        api_url: matches.get_one::<String>("api_url").cloned(),
        api_token: matches.get_one::<String>("api_token").cloned(),
        organization: matches.get_one::<u64>("organization").copied(),
    };
    configure::invoke(opts, &settings::settings_path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_partial_settings() {
        let matches = command()
            .try_get_matches_from(["configure", "--organization", "3"])
            .unwrap();
        assert_eq!(matches.get_one::<u64>("organization"), Some(&3));
        assert!(matches.get_one::<String>("api_token").is_none());
    }
}

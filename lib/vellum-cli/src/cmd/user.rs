use std::path::Path;

use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::settings::Settings;
use crate::types::{Locale, UserGroup};
use crate::{output, CliResult};

/// User account attributes collected from the command line. Passwords are
/// passed through verbatim; the platform generates one when none is sent.
#[derive(Debug, Default)]
pub struct UserOptions {
    pub username: Option<String>,
    pub password: Option<String>,
    pub organization: Option<u64>,
    pub group: Option<UserGroup>,
    pub locale: Option<Locale>,
    pub queues: Vec<u64>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize)]
struct UserRequest {
    id: Option<u64>,
    username: Option<String>,
    password: Option<String>,
    organization: Option<u64>,
    group: Option<UserGroup>,
    locale: Option<Locale>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    queues: Vec<u64>,
}

pub fn create(
    mut opts: UserOptions,
    settings: &Settings,
    output_file: Option<&Path>,
) -> CliResult<Option<String>> {
    opts.organization = opts.organization.or(settings.organization);
    compose(None, opts, output_file)
}

pub fn change(id: u64, opts: UserOptions, output_file: Option<&Path>) -> CliResult<Option<String>> {
    compose(Some(id), opts, output_file)
}

fn compose(id: Option<u64>, opts: UserOptions, output_file: Option<&Path>) -> CliResult<Option<String>> {
    let request = UserRequest {
        id,
        username: opts.username,
        password: opts.password,
        organization: opts.organization,
        group: opts.group,
        locale: opts.locale,
        queues: opts.queues,
    };

    output::write_or_return(serde_json::to_string_pretty(&request)?, output_file)
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    fn as_value(body: Option<String>) -> Value {
        serde_json::from_str(&body.unwrap()).unwrap()
    }

    #[test]
    fn create_serializes_role_and_locale() {
        let opts = UserOptions {
            username: Some("jane@example.com".to_string()),
            group: Some(UserGroup::Admin),
            locale: Some(Locale::Cs),
            queues: vec![8236, 8237],
            ..UserOptions::default()
        };
        let body = as_value(create(opts, &Settings::default(), None).unwrap());

        assert_eq!(body["username"], "jane@example.com");
        assert_eq!(body["group"], "admin");
        assert_eq!(body["locale"], "cs");
        assert_eq!(body["queues"], serde_json::json!([8236, 8237]));
        assert!(body.get("password").is_none());
    }

    #[test]
    fn change_sends_only_supplied_attributes() {
        let opts = UserOptions {
            password: Some("correct horse battery staple".to_string()),
            ..UserOptions::default()
        };
        let body = as_value(change(951, opts, None).unwrap());

        assert_eq!(body["id"], 951);
        assert_eq!(body["password"], "correct horse battery staple");
        assert!(body.get("group").is_none());
        assert!(body.get("locale").is_none());
    }
}

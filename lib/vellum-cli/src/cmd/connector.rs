use std::path::Path;

use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::settings::Settings;
use crate::{output, CliResult};

/// Connector attributes collected from the command line.
#[derive(Debug, Default)]
pub struct ConnectorOptions {
    pub name: Option<String>,
    pub queues: Vec<u64>,
    pub organization: Option<u64>,
    pub service_url: Option<String>,
    pub params: Option<String>,
    pub auth_token: Option<String>,
    pub asynchronous: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize)]
struct ConnectorRequest {
    id: Option<u64>,
    name: Option<String>,
    organization: Option<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    queues: Vec<u64>,
    service_url: Option<String>,
    authorization_token: Option<String>,
    asynchronous: Option<bool>,
}

pub fn create(
    mut opts: ConnectorOptions,
    settings: &Settings,
    output_file: Option<&Path>,
) -> CliResult<Option<String>> {
    opts.organization = opts.organization.or(settings.organization);
    compose(None, opts, output_file)
}

pub fn change(
    id: u64,
    opts: ConnectorOptions,
    output_file: Option<&Path>,
) -> CliResult<Option<String>> {
    compose(Some(id), opts, output_file)
}

fn compose(
    id: Option<u64>,
    opts: ConnectorOptions,
    output_file: Option<&Path>,
) -> CliResult<Option<String>> {
    let service_url = opts
        .service_url
        .map(|url| endpoint_url(&url, opts.params.as_deref()));

    let request = ConnectorRequest {
        id,
        name: opts.name,
        organization: opts.organization,
        queues: opts.queues,
        service_url,
        authorization_token: opts.auth_token,
        asynchronous: opts.asynchronous,
    };

    output::write_or_return(serde_json::to_string_pretty(&request)?, output_file)
}

fn endpoint_url(service_url: &str, params: Option<&str>) -> String {
    match params {
        Some(params) if !params.is_empty() => format!("{service_url}?{params}"),
        _ => service_url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    fn as_value(body: Option<String>) -> Value {
        serde_json::from_str(&body.unwrap()).unwrap()
    }

    #[test]
    fn params_are_appended_as_query_string() {
        let opts = ConnectorOptions {
            name: Some("SAP export".to_string()),
            service_url: Some("https://connector.example.com/sap".to_string()),
            params: Some("strict=true&version=2".to_string()),
            asynchronous: Some(true),
            ..ConnectorOptions::default()
        };
        let body = as_value(create(opts, &Settings::default(), None).unwrap());

        assert_eq!(
            body["service_url"],
            "https://connector.example.com/sap?strict=true&version=2"
        );
        assert_eq!(body["asynchronous"], true);
    }

    #[test]
    fn url_is_untouched_without_params() {
        let opts = ConnectorOptions {
            service_url: Some("https://connector.example.com/sap".to_string()),
            ..ConnectorOptions::default()
        };
        let body = as_value(change(15, opts, None).unwrap());

        assert_eq!(body["id"], 15);
        assert_eq!(body["service_url"], "https://connector.example.com/sap");
        assert!(body.get("authorization_token").is_none());
    }
}

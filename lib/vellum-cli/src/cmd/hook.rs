use std::path::Path;

use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::settings::Settings;
use crate::types::HookType;
use crate::{output, CliResult};

/// Hook attributes collected from the command line. Config fields are only
/// populated from explicit flag occurrences; the attached option groups
/// guarantee members arrive all together or not at all.
#[derive(Debug, Default)]
pub struct HookOptions {
    pub name: Option<String>,
    pub hook_type: Option<HookType>,
    pub queues: Vec<u64>,
    pub organization: Option<u64>,
    pub active: Option<bool>,
    pub events: Vec<String>,
    pub config_url: Option<String>,
    pub config_secret: Option<String>,
    pub config_insecure_ssl: Option<bool>,
    pub config_code: Option<String>,
    pub config_runtime: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Default, Serialize)]
struct HookConfig {
    url: Option<String>,
    secret: Option<String>,
    insecure_ssl: Option<bool>,
    code: Option<String>,
    runtime: Option<String>,
}

impl HookConfig {
    fn is_empty(&self) -> bool {
        self.url.is_none()
            && self.secret.is_none()
            && self.insecure_ssl.is_none()
            && self.code.is_none()
            && self.runtime.is_none()
    }
}

#[skip_serializing_none]
#[derive(Debug, Serialize)]
struct HookRequest {
    id: Option<u64>,
    name: Option<String>,
    #[serde(rename = "type")]
    hook_type: Option<HookType>,
    organization: Option<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    queues: Vec<u64>,
    active: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    events: Vec<String>,
    #[serde(skip_serializing_if = "HookConfig::is_empty")]
    config: HookConfig,
}

pub fn create(
    mut opts: HookOptions,
    settings: &Settings,
    output_file: Option<&Path>,
) -> CliResult<Option<String>> {
    opts.organization = opts.organization.or(settings.organization);
    compose(None, opts, output_file)
}

pub fn change(id: u64, opts: HookOptions, output_file: Option<&Path>) -> CliResult<Option<String>> {
    compose(Some(id), opts, output_file)
}

fn compose(id: Option<u64>, opts: HookOptions, output_file: Option<&Path>) -> CliResult<Option<String>> {
    let request = HookRequest {
        id,
        name: opts.name,
        hook_type: opts.hook_type,
        organization: opts.organization,
        queues: opts.queues,
        active: opts.active,
        events: opts.events,
        config: HookConfig {
            url: opts.config_url,
            secret: opts.config_secret,
            insecure_ssl: opts.config_insecure_ssl,
            code: opts.config_code,
            runtime: opts.config_runtime,
        },
    };

    output::write_or_return(serde_json::to_string_pretty(&request)?, output_file)
}

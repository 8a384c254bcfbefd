use std::path::Path;

use tracing::debug;

use crate::settings::{self, Settings};
use crate::CliResult;

/// Settings values collected from the command line. Absent fields leave the
/// stored value untouched.
#[derive(Debug, Default)]
pub struct ConfigureOptions {
    pub api_url: Option<String>,
    pub api_token: Option<String>,
    pub organization: Option<u64>,
}

pub fn invoke(opts: ConfigureOptions, path: &Path) -> CliResult<Option<String>> {
    let mut stored = settings::load(path)?;
    merge(&mut stored, opts);
    settings::save(&stored, path)?;
    debug!("settings updated at {}", path.display());
    Ok(Some(format!("Settings written to {}", path.display())))
}

fn merge(stored: &mut Settings, opts: ConfigureOptions) {
    if let Some(api_url) = opts.api_url {
        stored.api_url = Some(api_url);
    }
    if let Some(api_token) = opts.api_token {
        stored.api_token = Some(api_token);
    }
    if let Some(organization) = opts.organization {
        stored.organization = Some(organization);
    }
}

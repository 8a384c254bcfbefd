use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use serde_with::skip_serializing_none;

use crate::settings::Settings;
use crate::{output, schema_content, CliResult};

/// Queue attributes collected from the command line.
#[derive(Debug, Default)]
pub struct QueueOptions {
    pub name: Option<String>,
    pub workspace: Option<u64>,
    pub organization: Option<u64>,
    pub schema_content_file: Option<PathBuf>,
    pub email_prefix: Option<String>,
    pub bounce_email: Option<String>,
    pub connector: Option<String>,
    pub hooks: Vec<u64>,
    pub users: Vec<u64>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize)]
struct QueueRequest {
    id: Option<u64>,
    name: Option<String>,
    workspace: Option<u64>,
    organization: Option<u64>,
    schema: Option<Value>,
    email_prefix: Option<String>,
    bounce_email: Option<String>,
    connector: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    hooks: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    users: Vec<u64>,
}

pub fn create(
    mut opts: QueueOptions,
    settings: &Settings,
    output_file: Option<&Path>,
) -> CliResult<Option<String>> {
    opts.organization = opts.organization.or(settings.organization);
    compose(None, opts, output_file)
}

pub fn change(id: u64, opts: QueueOptions, output_file: Option<&Path>) -> CliResult<Option<String>> {
    compose(Some(id), opts, output_file)
}

fn compose(id: Option<u64>, opts: QueueOptions, output_file: Option<&Path>) -> CliResult<Option<String>> {
    let schema = opts
        .schema_content_file
        .as_deref()
        .map(schema_content::read)
        .transpose()?;

    let request = QueueRequest {
        id,
        name: opts.name,
        workspace: opts.workspace,
        organization: opts.organization,
        schema,
        email_prefix: opts.email_prefix,
        bounce_email: opts.bounce_email,
        connector: opts.connector,
        hooks: opts.hooks,
        users: opts.users,
    };

    output::write_or_return(serde_json::to_string_pretty(&request)?, output_file)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn as_value(body: Option<String>) -> Value {
        serde_json::from_str(&body.unwrap()).unwrap()
    }

    #[test]
    fn create_inlines_schema_content() {
        let mut schema_file = tempfile::NamedTempFile::new().unwrap();
        write!(schema_file, r#"[{{"category": "section"}}]"#).unwrap();

        let opts = QueueOptions {
            name: Some("Invoices".to_string()),
            workspace: Some(12),
            schema_content_file: Some(schema_file.path().to_path_buf()),
            hooks: vec![101, 7],
            ..QueueOptions::default()
        };
        let body = as_value(create(opts, &Settings::default(), None).unwrap());

        assert_eq!(body["name"], "Invoices");
        assert_eq!(body["workspace"], 12);
        assert_eq!(body["schema"][0]["category"], "section");
        assert_eq!(body["hooks"][0], 101);
        assert_eq!(body["hooks"][1], 7);
    }

    #[test]
    fn create_falls_back_to_settings_organization() {
        let settings = Settings {
            organization: Some(42),
            ..Settings::default()
        };
        let body = as_value(create(QueueOptions::default(), &settings, None).unwrap());
        assert_eq!(body["organization"], 42);
    }

    #[test]
    fn explicit_organization_wins_over_settings() {
        let settings = Settings {
            organization: Some(42),
            ..Settings::default()
        };
        let opts = QueueOptions {
            organization: Some(1),
            ..QueueOptions::default()
        };
        let body = as_value(create(opts, &settings, None).unwrap());
        assert_eq!(body["organization"], 1);
    }

    #[test]
    fn change_omits_absent_attributes() {
        let opts = QueueOptions {
            email_prefix: Some("invoices-east".to_string()),
            ..QueueOptions::default()
        };
        let body = as_value(change(8236, opts, None).unwrap());

        assert_eq!(body["id"], 8236);
        assert_eq!(body["email_prefix"], "invoices-east");
        assert!(body.get("bounce_email").is_none());
        assert!(body.get("hooks").is_none());
        assert!(body.get("organization").is_none());
    }
}

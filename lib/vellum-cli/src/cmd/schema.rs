use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use serde_with::skip_serializing_none;

use crate::{output, schema_content, CliResult};

#[skip_serializing_none]
#[derive(Debug, Serialize)]
struct SchemaRequest {
    id: u64,
    name: Option<String>,
    content: Value,
}

pub fn update(
    id: u64,
    name: Option<String>,
    schema_file: &Path,
    output_file: Option<&Path>,
) -> CliResult<Option<String>> {
    let request = SchemaRequest {
        id,
        name,
        content: schema_content::read(schema_file)?,
    };

    output::write_or_return(serde_json::to_string_pretty(&request)?, output_file)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn update_embeds_file_content() {
        let mut schema_file = tempfile::NamedTempFile::new().unwrap();
        write!(
            schema_file,
            r#"[{{"category": "section", "children": []}}]"#
        )
        .unwrap();

        let body = update(31336, Some("Invoice schema".to_string()), schema_file.path(), None)
            .unwrap()
            .unwrap();
        let body: Value = serde_json::from_str(&body).unwrap();

        assert_eq!(body["id"], 31336);
        assert_eq!(body["name"], "Invoice schema");
        assert_eq!(body["content"][0]["category"], "section");
    }
}

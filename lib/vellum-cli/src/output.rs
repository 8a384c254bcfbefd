use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::CliResult;

/// Writes the composed body to the requested output file, or hands it back
/// for the caller to print. The file is created here and closed on drop;
/// nothing is kept open across the call.
pub fn write_or_return(body: String, output_file: Option<&Path>) -> CliResult<Option<String>> {
    match output_file {
        Some(path) => {
            let mut file = File::create(path)?;
            file.write_all(body.as_bytes())?;
            file.write_all(b"\n")?;
            Ok(None)
        }
        None => Ok(Some(body)),
    }
}

pub mod cmd;
pub mod output;
pub mod schema_content;
pub mod settings;
pub mod types;

use thiserror::Error;

#[remain::sorted]
#[derive(Error, Debug)]
pub enum VellumCliError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("json serialize/deserialize error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("Enum parsing error: {0}")]
    StrumParseError(#[from] strum::ParseError),

    #[error("toml deserialize error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("toml serialization error: `{0}`")]
    TomlSerializeError(#[from] toml::ser::Error),
}

pub type CliResult<T> = Result<T, VellumCliError>;

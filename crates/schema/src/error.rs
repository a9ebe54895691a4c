use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("schema shape error: {0}")]
    Shape(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config.invalid_value: {name}={value}")]
    InvalidValue { name: &'static str, value: String },
}

use super::{ConfigError, EcommConfig};

/// A strongly-typed configuration section read from keys under [`prefix`](Self::prefix).
///
/// ```ignore
/// pub struct ServerConfig {
///     pub port: u16,
/// }
///
/// impl ConfigProperties for ServerConfig {
///     fn prefix() -> &'static str {
///         "server"
///     }
///
///     fn from_config(config: &EcommConfig) -> Result<Self, ConfigError> {
///         Ok(Self {
///             port: config.get_or(&Self::key("port"), 8080),
///         })
///     }
/// }
/// ```
pub trait ConfigProperties: Sized {
    /// The configuration key prefix (e.g., `"database"`).
    fn prefix() -> &'static str;

    fn from_config(config: &EcommConfig) -> Result<Self, ConfigError>;

    /// Absolute key for a property of this section.
    fn key(name: &str) -> String {
        format!("{}.{name}", Self::prefix())
    }
}

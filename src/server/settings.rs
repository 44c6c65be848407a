//! Server configuration.
//!
//! The service is stateless, so the only tunable is the bind address.
//! Defaults serve out of the box; a `rejestr.yaml` next to the working
//! directory or `REJESTR_`-prefixed environment variables override them
//! (`REJESTR_SERVER__PORT=8080`).

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    /// The bind address in `host:port` form.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Load settings from defaults, the optional config file, and the
/// environment, in that precedence order.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let settings = config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5000_i64)?
        .add_source(config::File::with_name("rejestr").required(false))
        .add_source(
            config::Environment::with_prefix("REJESTR")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

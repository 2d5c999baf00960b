//! Server configuration loaded from the environment.

/// Runtime configuration. Defaults match the original deployment: listen on
/// all interfaces, port 5000, `pdflatex` resolved from PATH.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,
    pub pdflatex_bin: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(5000);
        let pdflatex_bin =
            std::env::var("PDFLATEX_BIN").unwrap_or_else(|_| "pdflatex".to_string());

        Self {
            bind_addr,
            port,
            pdflatex_bin,
        }
    }
}

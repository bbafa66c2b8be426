use serde::Deserialize;

fn default_bind_address() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_shutdown_timeout() -> u64 {
    30u64
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct Config {
    #[serde(default = "default_bind_address")]
    pub(crate) bind_address: String,
    #[serde(default = "default_shutdown_timeout")]
    pub(crate) shutdown_timeout: u64,
    /// Where the form sends download requests. When unset, the form talks
    /// to this server's own endpoint on `bind_address`.
    #[serde(default)]
    pub(crate) download_endpoint: Option<String>,
}

impl Config {
    pub(crate) fn from_env() -> Result<Self, envy::Error> {
        envy::from_env::<Self>()
    }

    pub(crate) fn resolved_download_endpoint(&self) -> String {
        match &self.download_endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!("http://{}/", loopback_address(&self.bind_address)),
        }
    }
}

/// Rewrites wildcard listen hosts into an address a local client can dial.
fn loopback_address(bind_address: &str) -> String {
    match bind_address.rsplit_once(':') {
        Some(("0.0.0.0", port)) | Some(("", port)) => format!("127.0.0.1:{}", port),
        Some(("[::]", port)) => format!("[::1]:{}", port),
        _ => bind_address.to_string(),
    }
}

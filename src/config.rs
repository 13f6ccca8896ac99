/// Base URL of the local N8N instance the setup tool talks to.
pub const DEFAULT_N8N_URL: &str = "http://localhost:5678";
/// Base URL of the local Ollama instance stored inside the credential.
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

pub const CREDENTIAL_NAME: &str = "Ollama account";
pub const CREDENTIAL_TYPE: &str = "ollamaApi";

pub const CREDENTIALS_PATH: &str = "/api/v1/credentials";
pub const WORKFLOWS_PATH: &str = "/api/v1/workflows";

/// The fixed pair of servers a setup run talks to. Values are constants by
/// design; there is no config file and no environment layering.
#[derive(Debug, Clone)]
pub struct SetupTargets {
    pub n8n_url: String,
    pub ollama_url: String,
}

impl SetupTargets {
    pub fn new(n8n_url: &str, ollama_url: &str) -> Self {
        Self {
            n8n_url: n8n_url.trim_end_matches('/').to_string(),
            ollama_url: ollama_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for SetupTargets {
    fn default() -> Self {
        SetupTargets::new(DEFAULT_N8N_URL, DEFAULT_OLLAMA_URL)
    }
}

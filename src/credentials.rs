use anyhow::Result;
use reqwest::Client;
use serde::Serialize;

use crate::config::{self, SetupTargets};

/// Credential definition as N8N's REST API expects it:
/// `{"name": ..., "type": ..., "data": {"baseUrl": ...}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CredentialPayload {
    pub name: String,
    #[serde(rename = "type")]
    pub credential_type: String,
    pub data: CredentialData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CredentialData {
    #[serde(rename = "baseUrl")]
    pub base_url: String,
}

impl CredentialPayload {
    /// The one credential this tool registers: an "Ollama account" pointing
    /// at the local Ollama instance. Rebuilt fresh on every call.
    pub fn ollama(targets: &SetupTargets) -> Self {
        Self {
            name: config::CREDENTIAL_NAME.to_string(),
            credential_type: config::CREDENTIAL_TYPE.to_string(),
            data: CredentialData {
                base_url: targets.ollama_url.clone(),
            },
        }
    }
}

/// Raw outcome of a request: status code and body, verbatim. Callers print
/// these; nothing here parses or judges the server's answer.
#[derive(Debug, Clone)]
pub struct ResponseResult {
    pub status: u16,
    pub body: String,
}

/// POST the Ollama credential to the N8N instance and return whatever it
/// answered. A 4xx/5xx status is a normal return here, not an error; only
/// transport failures (refused connection, reset, etc.) surface as `Err`.
pub async fn register_credential(client: &Client, targets: &SetupTargets) -> Result<ResponseResult> {
    let payload = CredentialPayload::ollama(targets);
    let url = format!("{}{}", targets.n8n_url, config::CREDENTIALS_PATH);
    tracing::debug!("POST {}", url);

    let resp = client.post(&url).json(&payload).send().await?;
    let status = resp.status().as_u16();
    let body = resp.text().await?;

    Ok(ResponseResult { status, body })
}

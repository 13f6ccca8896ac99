//! Pre-flight probes for the two local servers a setup run depends on.

use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::Deserialize;

use crate::config::SetupTargets;

#[derive(Debug, Deserialize)]
struct ModelInfo {
    name: String,
}

// Response from Ollama's /api/tags endpoint.
#[derive(Debug, Deserialize)]
struct ModelsResponse {
    models: Vec<ModelInfo>,
}

/// Ask the Ollama instance which models it has installed.
pub async fn check_ollama(client: &Client, targets: &SetupTargets) -> Result<Vec<String>> {
    let url = format!("{}/api/tags", targets.ollama_url);
    tracing::debug!("GET {}", url);

    let resp = client.get(&url).send().await?;
    if !resp.status().is_success() {
        return Err(anyhow!("Ollama returned status {}", resp.status()));
    }
    let models = resp.json::<ModelsResponse>().await?.models;
    Ok(models.into_iter().map(|m| m.name).collect())
}

/// Hit the N8N base URL and report the status code it answered with.
pub async fn check_n8n(client: &Client, targets: &SetupTargets) -> Result<u16> {
    let url = format!("{}/", targets.n8n_url);
    tracing::debug!("GET {}", url);

    let resp = client.get(&url).send().await?;
    Ok(resp.status().as_u16())
}

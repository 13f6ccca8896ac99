use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::Deserialize;

use crate::config::{self, SetupTargets};
use crate::credentials::ResponseResult;

#[derive(Debug, Deserialize)]
pub struct WorkflowSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub active: bool,
}

// N8N wraps listings in a `data` envelope.
#[derive(Deserialize)]
struct WorkflowListResponse {
    data: Vec<WorkflowSummary>,
}

pub async fn list_workflows(client: &Client, targets: &SetupTargets) -> Result<Vec<WorkflowSummary>> {
    let url = format!("{}{}", targets.n8n_url, config::WORKFLOWS_PATH);
    tracing::debug!("GET {}", url);

    let resp = client.get(&url).send().await?;
    if resp.status().is_success() {
        Ok(resp.json::<WorkflowListResponse>().await?.data)
    } else {
        let status = resp.status();
        let err_text = resp.text().await.unwrap_or_default();
        Err(anyhow!("Failed to list workflows: {} - {}", status, err_text))
    }
}

/// Flip a workflow's activation toggle. Like credential registration, the
/// server's answer is returned raw for the caller to print.
pub async fn activate_workflow(
    client: &Client,
    targets: &SetupTargets,
    id: &str,
) -> Result<ResponseResult> {
    let url = format!("{}{}/{}/activate", targets.n8n_url, config::WORKFLOWS_PATH, id);
    tracing::debug!("PATCH {}", url);

    let resp = client.patch(&url).send().await?;
    let status = resp.status().as_u16();
    let body = resp.text().await?;

    Ok(ResponseResult { status, body })
}

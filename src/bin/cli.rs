use anyhow::Result;
use clap::{Parser, Subcommand};
use n8n_setup::config::{SetupTargets, DEFAULT_N8N_URL, DEFAULT_OLLAMA_URL};
use n8n_setup::credentials::ResponseResult;
use n8n_setup::{connectivity, credentials, workflows};
use reqwest::Client;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Register the Ollama credential with the N8N instance (the default action)
    Register {
        /// N8N base URL
        #[arg(long, default_value = DEFAULT_N8N_URL)]
        n8n_url: String,
        /// Ollama base URL stored inside the credential
        #[arg(long, default_value = DEFAULT_OLLAMA_URL)]
        ollama_url: String,
    },
    /// Probe the local Ollama and N8N instances
    Check {
        /// N8N base URL
        #[arg(long, default_value = DEFAULT_N8N_URL)]
        n8n_url: String,
        /// Ollama base URL
        #[arg(long, default_value = DEFAULT_OLLAMA_URL)]
        ollama_url: String,
    },
    /// List workflows known to the N8N instance
    ListWorkflows {
        /// N8N base URL
        #[arg(long, default_value = DEFAULT_N8N_URL)]
        n8n_url: String,
    },
    /// Activate a workflow by id
    ActivateWorkflow {
        /// Workflow ID
        #[arg(short, long)]
        id: String,
        /// N8N base URL
        #[arg(long, default_value = DEFAULT_N8N_URL)]
        n8n_url: String,
    },
}

fn print_outcome(outcome: &ResponseResult) {
    // The server's answer is printed verbatim, success or not.
    println!("Status: {}", outcome.status);
    println!("Response: {}", outcome.body);
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let client = Client::new();

    // Bare invocation behaves exactly like the original one-shot script.
    let command = args.command.unwrap_or(Commands::Register {
        n8n_url: DEFAULT_N8N_URL.to_string(),
        ollama_url: DEFAULT_OLLAMA_URL.to_string(),
    });

    match command {
        Commands::Register { n8n_url, ollama_url } => {
            let targets = SetupTargets::new(&n8n_url, &ollama_url);
            match credentials::register_credential(&client, &targets).await {
                Ok(outcome) => print_outcome(&outcome),
                // Transport failures are logged, not escalated: the process
                // still ends normally.
                Err(e) => eprintln!("Error: {}", e),
            }
        }
        Commands::Check { n8n_url, ollama_url } => {
            let targets = SetupTargets::new(&n8n_url, &ollama_url);
            match connectivity::check_ollama(&client, &targets).await {
                Ok(models) => {
                    println!("Ollama is running with {} models", models.len());
                    for name in models {
                        println!("  - {}", name);
                    }
                }
                Err(e) => eprintln!("Error: {}", e),
            }
            match connectivity::check_n8n(&client, &targets).await {
                Ok(status) => println!("N8N is reachable at {} (status {})", targets.n8n_url, status),
                Err(e) => eprintln!("Error: {}", e),
            }
        }
        Commands::ListWorkflows { n8n_url } => {
            let targets = SetupTargets::new(&n8n_url, DEFAULT_OLLAMA_URL);
            match workflows::list_workflows(&client, &targets).await {
                Ok(list) => {
                    if list.is_empty() {
                        println!("No workflows found");
                    }
                    for wf in list {
                        println!("{} {} (active: {})", wf.id, wf.name, wf.active);
                    }
                }
                Err(e) => eprintln!("Error: {}", e),
            }
        }
        Commands::ActivateWorkflow { id, n8n_url } => {
            let targets = SetupTargets::new(&n8n_url, DEFAULT_OLLAMA_URL);
            match workflows::activate_workflow(&client, &targets, &id).await {
                Ok(outcome) => print_outcome(&outcome),
                Err(e) => eprintln!("Error: {}", e),
            }
        }
    }

    Ok(())
}

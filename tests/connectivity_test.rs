use n8n_setup::config::SetupTargets;
use n8n_setup::connectivity::{check_n8n, check_ollama};
use reqwest::Client;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

fn spawn_mock(status_line: &'static str, body: &'static str) -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to random port");
    let port = listener.local_addr().unwrap().port();

    thread::spawn(move || {
        for stream in listener.incoming() {
            let mut stream = stream.unwrap();
            let mut buffer = [0u8; 4096];
            stream.read(&mut buffer).unwrap();

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
        }
    });

    port
}

#[tokio::test]
async fn test_check_ollama_lists_model_names() {
    let port = spawn_mock(
        "200 OK",
        r#"{"models":[{"name":"llama3.2:3b-instruct-q4_k_m"},{"name":"nomic-embed-text"}]}"#,
    );
    let targets = SetupTargets::new("http://localhost:5678", &format!("http://127.0.0.1:{}", port));

    let models = check_ollama(&Client::new(), &targets).await.unwrap();
    assert_eq!(models, vec!["llama3.2:3b-instruct-q4_k_m", "nomic-embed-text"]);
}

#[tokio::test]
async fn test_check_ollama_non_success_is_error() {
    let port = spawn_mock("503 Service Unavailable", "");
    let targets = SetupTargets::new("http://localhost:5678", &format!("http://127.0.0.1:{}", port));

    let result = check_ollama(&Client::new(), &targets).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_check_n8n_reports_status() {
    let port = spawn_mock("200 OK", "");
    let targets = SetupTargets::new(&format!("http://127.0.0.1:{}", port), "http://localhost:11434");

    let status = check_n8n(&Client::new(), &targets).await.unwrap();
    assert_eq!(status, 200);
}

mod chat;
mod llm;
mod persona;
mod profile;

use std::io::Write as _;
use std::sync::Arc;

use tokio::io::AsyncBufReadExt;

use chat::{ChatEvent, ChatSession, Message, Role, SubmitOutcome};
use llm::{ChatTurn, GeminiClient, Unconfigured, config::LlmConfig};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let profile = profile::Profile::builtin();

    // Missing credentials degrade to a backend that fails per turn, so the
    // user sees the connection fallback instead of a startup crash.
    let backend: Arc<dyn ChatTurn> = match LlmConfig::from_env() {
        Ok(config) => {
            match GeminiClient::new(config, persona::system_prompt(&profile), persona::TEMPERATURE) {
                Ok(client) => {
                    tracing::info!(model = client.model(), "model backend initialized");
                    Arc::new(client)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "model backend unavailable — turns will fail");
                    Arc::new(Unconfigured)
                }
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "model backend not configured — turns will fail");
            Arc::new(Unconfigured)
        }
    };

    let session = Arc::new(ChatSession::new(backend));

    // Printer task: the terminal stands in for the web chat panel and redraws
    // on every store change.
    let mut events = session.subscribe().await;
    let printer_session = session.clone();
    tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            match event {
                ChatEvent::Appended(message) => print_message(&message),
                ChatEvent::Reset => {
                    println!("--- conversation reset ---");
                    for message in printer_session.log().await {
                        print_message(&message);
                    }
                }
            }
        }
    });

    for message in session.log().await {
        print_message(&message);
    }
    println!("(/reset starts over, /quit exits)");

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush().ok();

        let Ok(Some(line)) = lines.next_line().await else {
            break;
        };
        match line.trim() {
            "/quit" | "/exit" => break,
            "/reset" => session.reset().await,
            input => {
                if session.submit(input).await == SubmitOutcome::RejectedBusy {
                    println!("(still thinking — give it a moment)");
                }
            }
        }
    }
}

fn print_message(message: &Message) {
    let author = match message.role {
        Role::User => "you",
        Role::Model => "ryan.ai",
    };
    println!("[{}] {}: {}", message.timestamp.format("%H:%M"), author, message.text);
}

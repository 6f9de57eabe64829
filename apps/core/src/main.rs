// Brain Tumor Assistant - terminal front end

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tracing::{info, warn};
use uuid::Uuid;

use tumor_assistant::{
    telemetry, AssistantConfig, SessionHandle, SessionSnapshot, Speaker, SubmitOutcome,
};

const BANNER: &str = "Brain Tumor Assistant. Ask about glioma, meningioma, pituitary tumors or \
no-tumor findings. Commands: /reset, /transcript, /quit";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AssistantConfig::from_env().context("Failed to load configuration")?;
    telemetry::init(&config).context("Failed to initialize logging")?;

    info!(
        typing_delay_ms = config.typing_delay_ms,
        seeded = config.rng_seed.is_some(),
        "Starting assistant"
    );

    let session = SessionHandle::new(&config);
    let renderer = tokio::spawn(render(session.subscribe()));

    println!("{}", BANNER);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        match line.trim() {
            "/quit" => break,
            "/reset" => {
                let id = session.reset().await?;
                println!("-- new conversation {} --", id);
            }
            "/transcript" => {
                let snapshot = session.snapshot().await?;
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            }
            _ => match session.submit(&line).await? {
                SubmitOutcome::Accepted { .. } | SubmitOutcome::RejectedEmpty => {}
                SubmitOutcome::RejectedBusy => {
                    println!("(still answering your last question, please wait)");
                }
            },
        }
    }

    match session.close().await {
        Err(e) if !e.is_session_closed() => return Err(e.into()),
        _ => {}
    }
    if let Err(e) = renderer.await {
        warn!("Renderer task failed: {}", e);
    }
    info!("Assistant stopped");
    Ok(())
}

/// Prints bot turns and the typing indicator as snapshots arrive.
/// Returns once the session actor has stopped.
async fn render(mut snapshots: watch::Receiver<SessionSnapshot>) {
    let mut session_id: Option<Uuid> = None;
    let mut printed = 0;
    let mut typing_shown = false;

    while snapshots.changed().await.is_ok() {
        let snapshot = snapshots.borrow_and_update().clone();

        if session_id != Some(snapshot.session_id) {
            session_id = Some(snapshot.session_id);
            printed = 0;
            typing_shown = false;
        }

        for turn in snapshot.turns.iter().skip(printed) {
            if turn.speaker == Speaker::Bot {
                println!("Assistant: {}", turn.text);
            }
        }
        printed = snapshot.turns.len();

        if snapshot.awaiting_response && !typing_shown {
            println!("Assistant is typing...");
        }
        typing_shown = snapshot.awaiting_response;
    }
}

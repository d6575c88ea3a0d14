use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use trivia_core::{FetchRequest, QuestionId};
use trivia_logging::{trivia_debug, trivia_error};

use crate::{FailureKind, FetchError, GatewayEvent, GatewaySettings, QuestionApi, ReqwestGateway};

enum GatewayCommand {
    Fetch(FetchRequest),
    Delete { question_id: QuestionId },
}

/// Runs API requests on a background runtime without blocking the caller.
///
/// Requests run concurrently and their completions are delivered in the order
/// they finish, so a slow early request can complete after a later one.
pub struct GatewayHandle {
    cmd_tx: mpsc::Sender<GatewayCommand>,
    event_rx: mpsc::Receiver<GatewayEvent>,
}

impl GatewayHandle {
    pub fn new(settings: &GatewaySettings) -> Result<Self, FetchError> {
        let api = ReqwestGateway::new(settings)?;
        Ok(Self::with_api(Arc::new(api)))
    }

    pub fn with_api(api: Arc<dyn QuestionApi>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    trivia_error!("failed to start gateway runtime: {}", err);
                    fail_all(&cmd_rx, &event_tx, &err.to_string());
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event = handle_command(api.as_ref(), command).await;
                    let _ = event_tx.send(event);
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn fetch(&self, request: FetchRequest) {
        let _ = self.cmd_tx.send(GatewayCommand::Fetch(request));
    }

    pub fn delete_question(&self, question_id: QuestionId) {
        let _ = self.cmd_tx.send(GatewayCommand::Delete { question_id });
    }

    pub fn try_recv(&self) -> Option<GatewayEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<GatewayEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(api: &dyn QuestionApi, command: GatewayCommand) -> GatewayEvent {
    match command {
        GatewayCommand::Fetch(request) => {
            let result = api.fetch(&request).await;
            trivia_debug!("fetch {:?} completed, ok={}", request, result.is_ok());
            GatewayEvent::FetchCompleted { request, result }
        }
        GatewayCommand::Delete { question_id } => {
            let result = api.delete_question(question_id).await;
            trivia_debug!("delete {} completed, ok={}", question_id, result.is_ok());
            GatewayEvent::DeleteCompleted {
                question_id,
                result,
            }
        }
    }
}

fn fail_all(
    cmd_rx: &mpsc::Receiver<GatewayCommand>,
    event_tx: &mpsc::Sender<GatewayEvent>,
    reason: &str,
) {
    while let Ok(command) = cmd_rx.recv() {
        let error = FetchError::new(FailureKind::Network, reason);
        let event = match command {
            GatewayCommand::Fetch(request) => GatewayEvent::FetchCompleted {
                request,
                result: Err(error),
            },
            GatewayCommand::Delete { question_id } => GatewayEvent::DeleteCompleted {
                question_id,
                result: Err(error),
            },
        };
        if event_tx.send(event).is_err() {
            return;
        }
    }
}

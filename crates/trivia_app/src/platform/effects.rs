use trivia_core::{Effect, FetchFailed, Msg};
use trivia_gateway::{GatewayEvent, GatewayHandle};
use trivia_logging::{trivia_info, trivia_warn};

pub const CONFIRM_PROMPT: &str = "are you sure you want to delete the question? [y/N]";

pub struct EffectRunner {
    gateway: GatewayHandle,
}

impl EffectRunner {
    pub fn new(gateway: GatewayHandle) -> Self {
        Self { gateway }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Fetch(request) => {
                    trivia_info!("Fetch {:?}", request);
                    self.gateway.fetch(request);
                }
                Effect::ConfirmDelete { question_id } => {
                    trivia_info!("ConfirmDelete question_id={}", question_id);
                    println!("{CONFIRM_PROMPT}");
                }
                Effect::DeleteQuestion { question_id } => {
                    trivia_info!("DeleteQuestion question_id={}", question_id);
                    self.gateway.delete_question(question_id);
                }
            }
        }
    }

    /// Completed gateway requests, as messages for the state machine.
    pub fn drain_events(&self) -> Vec<Msg> {
        std::iter::from_fn(|| self.gateway.try_recv())
            .map(event_to_msg)
            .collect()
    }
}

fn event_to_msg(event: GatewayEvent) -> Msg {
    match event {
        GatewayEvent::FetchCompleted { request, result } => Msg::FetchCompleted {
            result: result.map_err(|err| {
                trivia_warn!("Fetch {:?} failed: {}", request, err);
                FetchFailed
            }),
            request,
        },
        GatewayEvent::DeleteCompleted {
            question_id,
            result,
        } => Msg::DeleteCompleted {
            question_id,
            result: result.map_err(|err| {
                trivia_warn!("Delete of question {} failed: {}", question_id, err);
                FetchFailed
            }),
        },
    }
}

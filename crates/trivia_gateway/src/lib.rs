//! Trivia gateway: HTTP access to the question API and effect execution.
mod api;
mod handle;
mod settings;
mod types;
mod wire;

pub use api::{QuestionApi, ReqwestGateway};
pub use handle::GatewayHandle;
pub use settings::GatewaySettings;
pub use types::{FailureKind, FetchError, GatewayEvent};

mod answers;
mod engine;

pub use answers::AnswerMap;
pub use engine::{CheckinFlow, FlowProgress, FlowStatus};

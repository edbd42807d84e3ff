// Wire shapes for the task endpoint and the capability descriptor

pub mod agent_card;
pub mod task;

pub use agent_card::*;
pub use task::*;

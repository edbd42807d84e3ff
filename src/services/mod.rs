// Business logic services

pub mod agent_card_service;
pub mod completion_client;
pub mod plan_service;

pub use agent_card_service::*;
pub use completion_client::*;
pub use plan_service::*;

pub mod config;
pub mod coordinator;
pub mod message_processor;

pub use config::WorkerConfig;
pub use coordinator::Coordinator;
pub use message_processor::MessageProcessor;

pub mod controller;
pub mod llm_client;
pub mod prompt_builder;
pub mod protocol;

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Which backend the narration client talks to. Loaded once at startup;
/// a missing or unreadable file falls back to a local Ollama with llama3.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    pub endpoint: String,
    pub model: String,
    pub temperature: f32,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:11434".into(),
            model: "llama3:latest".into(),
            temperature: 0.7,
        }
    }
}

fn config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("dungeon");
    fs::create_dir_all(&path).ok();
    path.push("config.json");
    path
}

pub fn load_config() -> BackendConfig {
    let path = config_path();
    fs::read_to_string(path)
        .ok()
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}

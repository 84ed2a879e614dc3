use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use growthdesk_core::config::{AppConfig, LoadOptions, CONFIG_FILE_NAME};
use toml::Value;

struct ConfigSources {
    path: Option<PathBuf>,
    doc: Option<Value>,
}

pub fn run() -> String {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => return format!("config validation failed: {error}"),
    };

    let path = detect_config_path();
    let sources = ConfigSources { doc: load_config_file_doc(path.as_deref()), path };

    let origins = if config.server.allowed_origins.is_empty() {
        "<any>".to_string()
    } else {
        config.server.allowed_origins.join(", ")
    };

    let entries = [
        (
            "server.bind_address",
            config.server.bind_address.clone(),
            &["GROWTHDESK_SERVER_BIND_ADDRESS"][..],
        ),
        ("server.port", config.server.port.to_string(), &["GROWTHDESK_SERVER_PORT"][..]),
        ("server.allowed_origins", origins, &["GROWTHDESK_SERVER_ALLOWED_ORIGINS"][..]),
        (
            "server.graceful_shutdown_secs",
            config.server.graceful_shutdown_secs.to_string(),
            &["GROWTHDESK_SERVER_GRACEFUL_SHUTDOWN_SECS"][..],
        ),
        (
            "logging.level",
            config.logging.level.clone(),
            &["GROWTHDESK_LOGGING_LEVEL", "GROWTHDESK_LOG_LEVEL"][..],
        ),
        (
            "logging.format",
            format!("{:?}", config.logging.format).to_ascii_lowercase(),
            &["GROWTHDESK_LOGGING_FORMAT", "GROWTHDESK_LOG_FORMAT"][..],
        ),
    ];

    let mut lines = vec!["effective config (source precedence: env > file > default):".to_string()];
    for (key_path, value, env_keys) in entries {
        lines.push(render_line(key_path, &value, field_source(key_path, env_keys, &sources)));
    }

    lines.join("\n")
}

fn detect_config_path() -> Option<PathBuf> {
    [PathBuf::from(CONFIG_FILE_NAME), Path::new("config").join(CONFIG_FILE_NAME)]
        .into_iter()
        .find(|path| path.exists())
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(key_path: &str, env_keys: &[&str], sources: &ConfigSources) -> String {
    if let Some(env_key) = env_keys.iter().find(|key| env::var_os(key).is_some()) {
        return format!("env ({env_key})");
    }

    if let Some(doc) = &sources.doc {
        if contains_path(doc, key_path) {
            let file_path = sources
                .path
                .as_ref()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}

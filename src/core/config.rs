// ---------------------------------------------------------------------------
// MapvetConfig — file-based config loader (mapvet.json) with env-var fallback
// ---------------------------------------------------------------------------

/// Default Model2Vec model id used when neither config nor env override it.
pub const DEFAULT_MODEL_ID: &str = "minishlab/potion-base-8M";

/// Default HTTP listen port.
pub const DEFAULT_PORT: u16 = 5000;

pub const ENV_CONFIG_PATH: &str = "MAPVET_CONFIG";
pub const ENV_MODEL_ID: &str = "MAPVET_MODEL";

/// Top-level config loaded from `mapvet.json`.
#[derive(serde::Deserialize, Default, Clone, Debug)]
pub struct MapvetConfig {
    /// Model2Vec model id or local path for the sentence encoder.
    pub model_id: Option<String>,
    /// HTTP listen port.
    pub port: Option<u16>,
}

impl MapvetConfig {
    /// Model id: JSON field → `MAPVET_MODEL` env var → `minishlab/potion-base-8M`.
    pub fn resolve_model_id(&self) -> String {
        if let Some(m) = &self.model_id {
            if !m.trim().is_empty() {
                return m.clone();
            }
        }
        std::env::var(ENV_MODEL_ID)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL_ID.to_string())
    }

    /// Port: `--port` arg → JSON field → `MAPVET_PORT`/`PORT` env var → 5000.
    pub fn resolve_port(&self, arg_port: Option<u16>) -> u16 {
        if let Some(p) = arg_port {
            return p;
        }
        if let Some(p) = self.port {
            return p;
        }
        for k in ["MAPVET_PORT", "PORT"] {
            if let Ok(v) = std::env::var(k) {
                if let Ok(p) = v.trim().parse::<u16>() {
                    return p;
                }
            }
        }
        DEFAULT_PORT
    }
}

/// Load `mapvet.json` from standard locations.
///
/// Search order (first found wins):
/// 1. `MAPVET_CONFIG` env var path
/// 2. `./mapvet.json` (process cwd)
/// 3. `../mapvet.json` (one level up, for `cargo run` from a subdirectory)
///
/// Missing file → `MapvetConfig::default()` (silent, env-var fallbacks apply).
/// Parse error → log a warning, return `MapvetConfig::default()`.
pub fn load_config() -> MapvetConfig {
    let candidates: Vec<std::path::PathBuf> = {
        let mut v = vec![
            std::path::PathBuf::from("mapvet.json"),
            std::path::PathBuf::from("../mapvet.json"),
        ];
        if let Ok(env_path) = std::env::var(ENV_CONFIG_PATH) {
            v.insert(0, std::path::PathBuf::from(env_path));
        }
        v
    };

    for path in &candidates {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<MapvetConfig>(&contents) {
                Ok(cfg) => {
                    tracing::info!("mapvet.json loaded from {}", path.display());
                    return cfg;
                }
                Err(e) => {
                    tracing::warn!(
                        "mapvet.json parse error at {}: {} — using defaults",
                        path.display(),
                        e
                    );
                    return MapvetConfig::default();
                }
            },
            Err(_) => continue, // file not found at this path — try next
        }
    }

    MapvetConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arg_port_wins_over_config() {
        let cfg = MapvetConfig {
            model_id: None,
            port: Some(8080),
        };
        assert_eq!(cfg.resolve_port(Some(9000)), 9000);
        assert_eq!(cfg.resolve_port(None), 8080);
    }

    #[test]
    fn blank_model_id_falls_through_to_default() {
        let cfg = MapvetConfig {
            model_id: Some("   ".to_string()),
            port: None,
        };
        // Env var may be set in the outer environment; only assert the
        // explicit-config path here.
        let explicit = MapvetConfig {
            model_id: Some("acme/custom-encoder".to_string()),
            port: None,
        };
        assert_eq!(explicit.resolve_model_id(), "acme/custom-encoder");
        assert!(!cfg.resolve_model_id().trim().is_empty());
    }
}

use commentary_client::api::ArticleId;
use gloo_storage::{LocalStorage, Storage};

const KEY_CONFIG: &str = "config";

/// Which thread implementation the app displays
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Variant {
    /// Comments live in the app-wide store
    Store,

    /// Comments live in the thread component itself, with likes
    Legacy,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Store, Variant::Legacy];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Store => "store",
            Variant::Legacy => "legacy",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Variant::Store => "Shared store",
            Variant::Legacy => "Local state",
        }
    }

    pub fn parse(s: &str) -> Option<Variant> {
        Variant::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Config {
    /// Base url of the comment source, without trailing slash
    pub host: String,
    pub article: ArticleId,
    pub variant: Variant,
}

impl Config {
    pub fn load() -> Config {
        match LocalStorage::get(KEY_CONFIG) {
            Ok(config) => config,
            Err(err) => {
                tracing::debug!(?err, "no saved config, using defaults");
                Config::default()
            }
        }
    }

    pub fn save(&self) {
        if let Err(err) = LocalStorage::set(KEY_CONFIG, self) {
            tracing::warn!(?err, "failed saving config to local storage");
        }
    }
}

impl Default for Config {
    fn default() -> Config {
        let host = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        Config {
            host,
            article: ArticleId(1),
            variant: Variant::Store,
        }
    }
}

use anyhow::{bail, Context};
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    File,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub store: StoreKind,
    pub data_dir: PathBuf,
    /// Fixed shuffle seed; `None` seeds from entropy.
    pub seed: Option<u64>,
    pub allow_empty_custom: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            workers: 4,
            store: StoreKind::File,
            data_dir: PathBuf::from("data/decks"),
            seed: None,
            allow_empty_custom: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let store = match lookup("CARDS_STORE").as_deref().map(str::trim) {
            None | Some("") | Some("file") => StoreKind::File,
            Some("memory") => StoreKind::Memory,
            Some(other) => bail!("invalid CARDS_STORE={other} (expected file or memory)"),
        };
        let allow_empty_custom = match lookup("CARDS_ALLOW_EMPTY_CUSTOM") {
            Some(raw) => parse_bool(&raw)
                .with_context(|| format!("invalid CARDS_ALLOW_EMPTY_CUSTOM={raw}"))?,
            None => defaults.allow_empty_custom,
        };
        Ok(Self {
            host: lookup("CARDS_HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "CARDS_PORT")?.unwrap_or(defaults.port),
            workers: parse_var(&lookup, "CARDS_WORKERS")?
                .unwrap_or(defaults.workers)
                .max(1),
            store,
            data_dir: lookup("CARDS_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            seed: parse_var(&lookup, "CARDS_SEED")?,
            allow_empty_custom,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<T>()
        .map(Some)
        .map_err(|err| anyhow::anyhow!("invalid {key}={raw}: {err}"))
}

fn parse_bool(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("not a boolean: {other}"),
    }
}

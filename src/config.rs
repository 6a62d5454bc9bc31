//! Runtime Configuration
//!
//! Central place for the catalog dimensions, the session cookie policy and
//! the CLI-parsed server settings. Every value that used to be a magic
//! literal in earlier iterations lives here as a named constant.

use anyhow::Result;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Number of books in the catalog. Valid BookIds run `1..=CATALOG_SIZE`.
pub const CATALOG_SIZE: u32 = 10;

/// How many trailing history entries the recommendation engine reads.
///
/// One wider than the catalog, so a full catalog pass is always visible
/// inside the window. Inherited from the original deployment.
pub const HISTORY_READ_WINDOW: usize = CATALOG_SIZE as usize + 1;

/// Name of the cookie that carries the session identifier.
pub const SESSION_COOKIE: &str = "session_id";

/// Lifetime of the session cookie in seconds.
///
/// Unusually short for a browsing session; recommendation state visibly
/// resets once a visitor idles past this. Kept at the inherited value.
pub const SESSION_COOKIE_MAX_AGE_SECS: u32 = 10;

const DEFAULT_BIND: &str = "0.0.0.0:8000";
const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";
const DEFAULT_INDEX_PAGE: &str = "static/index.html";

/// Which key-value backend the server talks to.
#[derive(Debug, Clone)]
pub enum StoreBackend {
    /// External redis instance, the production setup.
    Redis(String),
    /// In-process store seeded with the demo catalog. For local runs.
    Memory,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub backend: StoreBackend,
    /// Static page served at `/`.
    pub index_page: PathBuf,
}

impl ServerConfig {
    /// Parse `--bind <addr:port>`, `--redis <url>`, `--memory` and
    /// `--index-page <path>` from the argument list.
    pub fn from_args(args: &[String]) -> Result<Self> {
        let mut bind_addr: SocketAddr = DEFAULT_BIND.parse()?;
        let mut backend = StoreBackend::Redis(DEFAULT_REDIS_URL.to_string());
        let mut index_page = PathBuf::from(DEFAULT_INDEX_PAGE);

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--bind" => {
                    bind_addr = flag_value(args, i, "--bind")?.parse()?;
                    i += 2;
                }
                "--redis" => {
                    backend = StoreBackend::Redis(flag_value(args, i, "--redis")?);
                    i += 2;
                }
                "--memory" => {
                    backend = StoreBackend::Memory;
                    i += 1;
                }
                "--index-page" => {
                    index_page = PathBuf::from(flag_value(args, i, "--index-page")?);
                    i += 2;
                }
                other => {
                    anyhow::bail!("Unknown argument: {}", other);
                }
            }
        }

        Ok(ServerConfig {
            bind_addr,
            backend,
            index_page,
        })
    }
}

fn flag_value(args: &[String], i: usize, flag: &str) -> Result<String> {
    args.get(i + 1)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("{} requires a value", flag))
}

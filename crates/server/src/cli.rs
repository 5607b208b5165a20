use std::path::PathBuf;

use axum::http::HeaderValue;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[clap(name = "exercise tracker server")]
pub struct Cli {
    /// Static assets served for any path no route matches
    #[clap(long, env, default_value = "public")]
    pub public_dir: PathBuf,
    /// Directory holding the `index.html` landing page
    #[clap(long, env, default_value = "views")]
    pub views_dir: PathBuf,
    #[clap(long, env, default_value = "exercise_tracker.sqlite")]
    pub sqlite_connection_string: String,
    #[clap(long, env, default_value = "3000")]
    pub port: u16,
    #[clap(long, env, default_value = "127.0.0.1")]
    pub bind_addr: String,
    /// Single allowed CORS origin. Any origin is allowed when unset
    #[arg(long, env)]
    pub cors_origin: Option<HeaderValue>,
}

//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use quiver_domain::{Header, HttpMethod};

/// Build and edit Postman-compatible API collections.
#[derive(Parser, Debug)]
#[command(name = "quiver", version)]
pub struct Cli {
    /// Write the resulting text here instead of stdout.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub output: Option<PathBuf>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print an empty collection.
    New {
        /// Collection name.
        #[arg(long)]
        name: Option<String>,
    },
    /// Import a collection file and print its canonical form.
    Normalize {
        /// Collection file.
        file: PathBuf,
    },
    /// Summarize groups, requests and assertions of a collection file.
    Inspect {
        /// Collection file.
        file: PathBuf,
    },
    /// Append a group.
    AddGroup {
        /// Collection file.
        file: PathBuf,
        /// Group name.
        name: String,
    },
    /// Append a new timestamp-named request to a group.
    AddRequest {
        /// Collection file.
        file: PathBuf,
        /// Target group.
        group: String,
        /// Base name for the request.
        #[arg(long, default_value = "")]
        name: String,
        /// HTTP method.
        #[arg(long, default_value_t = HttpMethod::Get)]
        method: HttpMethod,
        /// Request URL.
        #[arg(long, default_value = "")]
        url: String,
    },
    /// Remove a request from a group.
    DeleteRequest {
        /// Collection file.
        file: PathBuf,
        /// Group holding the request.
        group: String,
        /// Request name.
        request: String,
    },
    /// Change fields of a request.
    UpdateRequest {
        /// Collection file.
        file: PathBuf,
        /// Request name.
        request: String,
        /// New HTTP method.
        #[arg(long)]
        method: Option<HttpMethod>,
        /// New URL.
        #[arg(long)]
        url: Option<String>,
        /// New raw body text.
        #[arg(long)]
        body: Option<String>,
        /// New request name.
        #[arg(long)]
        rename: Option<String>,
        /// Replace the header list; repeat for several headers.
        #[arg(long = "header", value_name = "KEY:VALUE", value_parser = parse_header)]
        headers: Vec<Header>,
        /// Remove every header.
        #[arg(long, conflicts_with = "headers")]
        clear_headers: bool,
        /// Raw JSON patch (`request`, `event`, `name`, other keys); flags win.
        #[arg(long, value_name = "JSON")]
        patch: Option<String>,
    },
    /// Append a generated assertion to a request.
    AddTest {
        /// Collection file.
        file: PathBuf,
        /// Request name.
        request: String,
        /// Assertion to generate.
        #[command(subcommand)]
        assertion: AssertionCommand,
    },
    /// Remove an assertion from a request by position.
    RemoveTest {
        /// Collection file.
        file: PathBuf,
        /// Request name.
        request: String,
        /// Zero-based assertion index.
        index: usize,
    },
}

/// Assertion kinds.
#[derive(Subcommand, Debug)]
pub enum AssertionCommand {
    /// Response status equals CODE.
    Status {
        /// Test name.
        name: String,
        /// Expected status code.
        code: u16,
    },
    /// Value at PATH equals EXPECTED.
    JsonPath {
        /// Test name.
        name: String,
        /// Dot/bracket path into the response body.
        path: String,
        /// Expected value; `true`, `false` and numbers are emitted unquoted.
        expected: String,
        /// Always treat EXPECTED as a string.
        #[arg(long)]
        string: bool,
    },
    /// Array at PATH has LENGTH elements.
    ArrayLength {
        /// Test name.
        name: String,
        /// Dot/bracket path into the response body.
        path: String,
        /// Expected length.
        length: usize,
    },
}

fn parse_header(text: &str) -> Result<Header, String> {
    let (key, value) = text
        .split_once(':')
        .ok_or_else(|| format!("expected KEY:VALUE, got `{text}`"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("header name is empty in `{text}`"));
    }
    Ok(Header::new(key, value.trim()))
}

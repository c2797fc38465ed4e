//! Test scripts attached to requests.

use serde::{Deserialize, Serialize};

/// Content-type label for generated assertion scripts.
pub const DEFAULT_SCRIPT_TYPE: &str = "text/javascript";

/// Event a script listens to. Only test scripts are modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScriptTrigger {
    /// Runs after the response is received.
    #[default]
    #[serde(rename = "test")]
    Test,
}

/// Script payload: ordered assertion blocks plus a content-type label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    /// One literal assertion block per entry.
    #[serde(default)]
    pub exec: Vec<String>,
    /// Content-type label of `exec`.
    #[serde(rename = "type", default = "default_script_type")]
    pub script_type: String,
}

fn default_script_type() -> String {
    DEFAULT_SCRIPT_TYPE.to_string()
}

/// A request's test script container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestScript {
    /// Always [`ScriptTrigger::Test`].
    pub listen: ScriptTrigger,
    /// Script payload.
    pub script: Script,
}

impl TestScript {
    /// Creates a test script with no assertions.
    #[must_use]
    pub fn empty() -> Self {
        Self::with_exec(Vec::new())
    }

    /// Creates a test script with the given assertion blocks.
    #[must_use]
    pub fn with_exec(exec: Vec<String>) -> Self {
        Self {
            listen: ScriptTrigger::Test,
            script: Script {
                exec,
                script_type: default_script_type(),
            },
        }
    }

    /// Returns the assertion blocks.
    #[must_use]
    pub fn exec(&self) -> &[String] {
        &self.script.exec
    }
}

impl Default for TestScript {
    fn default() -> Self {
        Self::empty()
    }
}

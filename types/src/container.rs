use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Container configuration as recorded in an image, used when committing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Config {
    #[serde(default)]
    pub hostname: String,
    #[serde(default)]
    pub domainname: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub attach_stdin: bool,
    #[serde(default)]
    pub attach_stdout: bool,
    #[serde(default)]
    pub attach_stderr: bool,
    #[serde(default)]
    pub exposed_ports: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub tty: bool,
    #[serde(default)]
    pub open_stdin: bool,
    #[serde(default)]
    pub stdin_once: bool,
    #[serde(default)]
    pub env: Vec<String>,
    #[serde(default)]
    pub cmd: Vec<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub volumes: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub working_dir: String,
    #[serde(default)]
    pub entrypoint: Vec<String>,
    #[serde(default)]
    pub network_disabled: bool,
    #[serde(default)]
    pub mac_address: String,
    #[serde(default)]
    pub on_build: Vec<String>,
    #[serde(default)]
    pub labels: HashMap<String, String>,
    #[serde(default)]
    pub stop_signal: String,
    #[serde(default)]
    pub stop_timeout: Option<i32>,
    #[serde(default)]
    pub shell: Vec<String>,
}

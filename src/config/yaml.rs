use serde::Deserialize;
use std::path::Path;

/// Complete YAML configuration structure
///
/// All fields are optional to allow partial configuration. Values present in
/// the file override environment variables.
///
/// # Example YAML structure
/// ```yaml
/// endpoints:
///   submit_url: "https://openspeech-direct.zijieapi.com/api/v3/auc/bigmodel/submit"
///   query_url: "https://openspeech-direct.zijieapi.com/api/v3/auc/bigmodel/query"
///
/// request:
///   resource_id: "volc.seedasr.auc"
///   uid: "demo-user"
///   model_name: "bigmodel"
///   enable_channel_split: true
///   enable_ddc: true
///   enable_speaker_info: true
///   enable_punc: true
///   enable_itn: true
///   correct_table_name: ""
///   context: ""
///
/// http:
///   connect_timeout_secs: 60
///   read_timeout_secs: 60
///   request_timeout_secs: 60
///
/// poll:
///   interval_ms: 1000
///   max_wait_secs: 600
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct YamlConfig {
    pub endpoints: Option<EndpointsYaml>,
    pub request: Option<RequestYaml>,
    pub http: Option<HttpYaml>,
    pub poll: Option<PollYaml>,
}

/// Endpoint URLs from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct EndpointsYaml {
    pub submit_url: Option<String>,
    pub query_url: Option<String>,
}

/// Submit payload options from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RequestYaml {
    pub resource_id: Option<String>,
    pub uid: Option<String>,
    pub model_name: Option<String>,
    pub enable_channel_split: Option<bool>,
    pub enable_ddc: Option<bool>,
    pub enable_speaker_info: Option<bool>,
    pub enable_punc: Option<bool>,
    pub enable_itn: Option<bool>,
    pub correct_table_name: Option<String>,
    pub context: Option<String>,
}

/// HTTP transport timeouts from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct HttpYaml {
    pub connect_timeout_secs: Option<u64>,
    pub read_timeout_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
}

/// Polling configuration from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct PollYaml {
    pub interval_ms: Option<u64>,
    pub max_wait_secs: Option<u64>,
}

impl YamlConfig {
    /// Load YAML configuration from a file
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {e}", path.display()))?;

        let config: YamlConfig = serde_yaml::from_str(&contents)
            .map_err(|e| format!("Failed to parse YAML config: {e}"))?;

        Ok(config)
    }
}

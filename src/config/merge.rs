use std::env;

use super::ClientConfig;
use super::utils::{parse_bool, parse_u64};
use super::yaml::YamlConfig;
use crate::core::auc::{AucResource, Corpus, RecognitionOptions};

/// Environment variable names
pub mod env_vars {
    pub const SUBMIT_URL: &str = "VOLC_AUC_SUBMIT_URL";
    pub const QUERY_URL: &str = "VOLC_AUC_QUERY_URL";
    pub const RESOURCE_ID: &str = "VOLC_AUC_RESOURCE_ID";
    pub const UID: &str = "VOLC_AUC_UID";
    pub const MODEL: &str = "VOLC_AUC_MODEL";
    pub const ENABLE_CHANNEL_SPLIT: &str = "VOLC_AUC_ENABLE_CHANNEL_SPLIT";
    pub const ENABLE_DDC: &str = "VOLC_AUC_ENABLE_DDC";
    pub const ENABLE_SPEAKER_INFO: &str = "VOLC_AUC_ENABLE_SPEAKER_INFO";
    pub const ENABLE_PUNC: &str = "VOLC_AUC_ENABLE_PUNC";
    pub const ENABLE_ITN: &str = "VOLC_AUC_ENABLE_ITN";
    pub const CORRECT_TABLE: &str = "VOLC_AUC_CORRECT_TABLE";
    pub const CONTEXT: &str = "VOLC_AUC_CONTEXT";
    pub const CONNECT_TIMEOUT_SECS: &str = "VOLC_AUC_CONNECT_TIMEOUT_SECS";
    pub const READ_TIMEOUT_SECS: &str = "VOLC_AUC_READ_TIMEOUT_SECS";
    pub const REQUEST_TIMEOUT_SECS: &str = "VOLC_AUC_REQUEST_TIMEOUT_SECS";
    pub const POLL_INTERVAL_MS: &str = "VOLC_AUC_POLL_INTERVAL_MS";
    pub const MAX_WAIT_SECS: &str = "VOLC_AUC_MAX_WAIT_SECS";
}

/// Merge YAML configuration with environment variables
///
/// Priority order (highest to lowest):
/// 1. YAML configuration values
/// 2. Environment variables
/// 3. Default values
///
/// # Arguments
/// * `yaml_config` - Optional YAML configuration to use as overrides
pub fn merge_config(
    yaml_config: Option<YamlConfig>,
) -> Result<ClientConfig, Box<dyn std::error::Error>> {
    let yaml = yaml_config.unwrap_or_default();
    let defaults = ClientConfig::default();

    // YAML > ENV > default for strings
    macro_rules! get_value {
        ($env_var:expr, $yaml_value:expr, $default:expr) => {
            $yaml_value
                .or_else(|| env::var($env_var).ok())
                .unwrap_or_else(|| $default.to_string())
        };
    }

    // YAML > ENV > default for booleans
    macro_rules! get_bool {
        ($env_var:expr, $yaml_value:expr, $default:expr) => {
            match $yaml_value {
                Some(v) => v,
                None => match env::var($env_var) {
                    Ok(raw) => parse_bool(&raw)
                        .ok_or_else(|| format!("Invalid {} value '{}'", $env_var, raw))?,
                    Err(_) => $default,
                },
            }
        };
    }

    // YAML > ENV for numbers
    macro_rules! get_number {
        ($env_var:expr, $yaml_value:expr) => {
            match $yaml_value {
                Some(v) => Some(v),
                None => match env::var($env_var) {
                    Ok(raw) => Some(parse_u64($env_var, &raw)?),
                    Err(_) => None,
                },
            }
        };
    }

    let endpoints = yaml.endpoints.unwrap_or_default();
    let request = yaml.request.unwrap_or_default();
    let http = yaml.http.unwrap_or_default();
    let poll = yaml.poll.unwrap_or_default();

    let submit_url = get_value!(env_vars::SUBMIT_URL, endpoints.submit_url, defaults.submit_url);
    let query_url = get_value!(env_vars::QUERY_URL, endpoints.query_url, defaults.query_url);

    let resource = request
        .resource_id
        .or_else(|| env::var(env_vars::RESOURCE_ID).ok())
        .map(|id| AucResource::from_str_or_custom(&id))
        .unwrap_or_default();

    let uid = get_value!(env_vars::UID, request.uid, defaults.uid);

    let base = &defaults.recognition;
    let recognition = RecognitionOptions {
        model_name: get_value!(env_vars::MODEL, request.model_name, base.model_name),
        enable_channel_split: get_bool!(
            env_vars::ENABLE_CHANNEL_SPLIT,
            request.enable_channel_split,
            base.enable_channel_split
        ),
        enable_ddc: get_bool!(env_vars::ENABLE_DDC, request.enable_ddc, base.enable_ddc),
        enable_speaker_info: get_bool!(
            env_vars::ENABLE_SPEAKER_INFO,
            request.enable_speaker_info,
            base.enable_speaker_info
        ),
        enable_punc: get_bool!(env_vars::ENABLE_PUNC, request.enable_punc, base.enable_punc),
        enable_itn: get_bool!(env_vars::ENABLE_ITN, request.enable_itn, base.enable_itn),
        corpus: Corpus {
            correct_table_name: get_value!(
                env_vars::CORRECT_TABLE,
                request.correct_table_name,
                base.corpus.correct_table_name
            ),
            context: get_value!(env_vars::CONTEXT, request.context, base.corpus.context),
        },
    };

    let connect_timeout_secs = get_number!(env_vars::CONNECT_TIMEOUT_SECS, http.connect_timeout_secs)
        .unwrap_or(defaults.connect_timeout_secs);
    let read_timeout_secs = get_number!(env_vars::READ_TIMEOUT_SECS, http.read_timeout_secs)
        .unwrap_or(defaults.read_timeout_secs);
    let request_timeout_secs = get_number!(env_vars::REQUEST_TIMEOUT_SECS, http.request_timeout_secs)
        .unwrap_or(defaults.request_timeout_secs);

    let poll_interval_ms =
        get_number!(env_vars::POLL_INTERVAL_MS, poll.interval_ms).unwrap_or(defaults.poll_interval_ms);
    let max_wait_secs = get_number!(env_vars::MAX_WAIT_SECS, poll.max_wait_secs);

    Ok(ClientConfig {
        submit_url,
        query_url,
        resource,
        uid,
        recognition,
        connect_timeout_secs,
        read_timeout_secs,
        request_timeout_secs,
        poll_interval_ms,
        max_wait_secs,
    })
}

//! Unit tests for the BigASR file recognition module.
//!
//! These tests need no network access. Request/response behaviour against a
//! mock server is covered in tests/auc_mock_tests.rs.

use super::*;
use crate::config::ClientConfig;
use crate::errors::auc_error::AucError;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::json;
use std::time::Duration;

// =============================================================================
// Status Code Tests
// =============================================================================

mod status_tests {
    use super::*;

    #[test]
    fn test_success_code() {
        assert_eq!(TaskStatus::from_code(Some("20000000")), TaskStatus::Success);
    }

    #[test]
    fn test_pending_codes() {
        assert_eq!(
            TaskStatus::from_code(Some("20000001")),
            TaskStatus::Pending(PendingStage::Processing)
        );
        assert_eq!(
            TaskStatus::from_code(Some("20000002")),
            TaskStatus::Pending(PendingStage::Queued)
        );
    }

    #[test]
    fn test_other_codes_fail() {
        assert_eq!(
            TaskStatus::from_code(Some("30000001")),
            TaskStatus::Failed("30000001".to_string())
        );
        assert_eq!(
            TaskStatus::from_code(Some("45000001")),
            TaskStatus::Failed("45000001".to_string())
        );
    }

    #[test]
    fn test_missing_code_fails() {
        assert_eq!(TaskStatus::from_code(None), TaskStatus::Failed(String::new()));
    }

    #[test]
    fn test_codes_compare_exactly() {
        assert_eq!(
            TaskStatus::from_code(Some(" 20000000 ")),
            TaskStatus::Failed(" 20000000 ".to_string())
        );
        assert_eq!(
            TaskStatus::from_code(Some("20000001\t")),
            TaskStatus::Failed("20000001\t".to_string())
        );
    }
}

// =============================================================================
// Header Parsing Tests
// =============================================================================

mod header_tests {
    use super::*;

    #[test]
    fn test_status_headers_from_headers() {
        let mut map = HeaderMap::new();
        map.insert(headers::STATUS_CODE, HeaderValue::from_static("20000001"));
        map.insert(headers::MESSAGE, HeaderValue::from_static("[processing]"));
        map.insert(headers::LOGID, HeaderValue::from_static("20250101abcdef"));

        let status = StatusHeaders::from_headers(&map);
        assert_eq!(status.status_code.as_deref(), Some("20000001"));
        assert_eq!(status.message_or_empty(), "[processing]");
        assert_eq!(status.logid.as_deref(), Some("20250101abcdef"));
        assert_eq!(status.status(), TaskStatus::Pending(PendingStage::Processing));
    }

    #[test]
    fn test_status_headers_missing() {
        let status = StatusHeaders::from_headers(&HeaderMap::new());
        assert_eq!(status, StatusHeaders::default());
        assert_eq!(status.message_or_empty(), "");
        assert_eq!(status.status(), TaskStatus::Failed(String::new()));
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut map = HeaderMap::new();
        map.insert("x-api-status-code", HeaderValue::from_static("20000000"));
        let status = StatusHeaders::from_headers(&map);
        assert_eq!(status.status(), TaskStatus::Success);
    }
}

// =============================================================================
// Request Payload Tests
// =============================================================================

mod payload_tests {
    use super::*;

    #[test]
    fn test_submit_request_with_url() {
        let audio = AudioSource::url("https://example.com/a.mp3");
        let options = RecognitionOptions::default();
        let request = SubmitRequest::new(DEFAULT_UID, &audio, &options);

        let value = serde_json::to_value(request).unwrap();
        assert_eq!(
            value,
            json!({
                "user": {"uid": "fake_uid"},
                "audio": {"url": "https://example.com/a.mp3"},
                "request": {
                    "model_name": "bigmodel",
                    "enable_channel_split": true,
                    "enable_ddc": true,
                    "enable_speaker_info": true,
                    "enable_punc": true,
                    "enable_itn": true,
                    "corpus": {"correct_table_name": "", "context": ""}
                }
            })
        );
    }

    #[test]
    fn test_submit_request_with_data() {
        let audio = AudioSource::Data {
            data: "UklGRg==".to_string(),
        };
        let options = RecognitionOptions::default();
        let request = SubmitRequest::new("user-1", &audio, &options);

        let value = serde_json::to_value(request).unwrap();
        assert_eq!(value["audio"], json!({"data": "UklGRg=="}));
        assert_eq!(value["user"]["uid"], "user-1");
        assert!(value["audio"].get("url").is_none());
    }

    #[test]
    fn test_submit_request_custom_options() {
        let audio = AudioSource::url("https://example.com/a.mp3");
        let options = RecognitionOptions {
            model_name: "bigmodel-v2".to_string(),
            enable_channel_split: false,
            enable_ddc: false,
            corpus: Corpus {
                correct_table_name: "names".to_string(),
                context: "meeting notes".to_string(),
            },
            ..Default::default()
        };
        let request = SubmitRequest::new(DEFAULT_UID, &audio, &options);

        let value = serde_json::to_value(request).unwrap();
        assert_eq!(value["request"]["model_name"], "bigmodel-v2");
        assert_eq!(value["request"]["enable_channel_split"], false);
        assert_eq!(value["request"]["enable_ddc"], false);
        assert_eq!(value["request"]["enable_punc"], true);
        assert_eq!(value["request"]["corpus"]["correct_table_name"], "names");
        assert_eq!(value["request"]["corpus"]["context"], "meeting notes");
    }

    #[test]
    fn test_audio_source_describe_hides_data() {
        let audio = AudioSource::Data {
            data: "A".repeat(64),
        };
        let description = audio.describe();
        assert!(!description.contains("AAAA"));
        assert!(description.contains("64"));

        let audio = AudioSource::url("https://example.com/a.mp3");
        assert_eq!(audio.describe(), "https://example.com/a.mp3");
    }
}

// =============================================================================
// Response Body Tests
// =============================================================================

mod response_tests {
    use super::*;

    #[test]
    fn test_parse_full_result() {
        let body = json!({
            "audio_info": {"duration": 3696},
            "result": {
                "text": "这是字节跳动。",
                "utterances": [{
                    "text": "这是字节跳动。",
                    "start_time": 0,
                    "end_time": 1705,
                    "words": [{"text": "这", "start_time": 740, "end_time": 860}]
                }]
            }
        });

        let response: QueryResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.audio_info.unwrap().duration, 3696);
        let result = response.result.unwrap();
        assert_eq!(result.text, "这是字节跳动。");
        assert_eq!(result.utterances.len(), 1);
        assert_eq!(result.utterances[0].end_time, 1705);
    }

    #[test]
    fn test_parse_sentence_layouts() {
        let body = json!({
            "result": {
                "sentences": [{"text": "hello", "start_time": 0.5, "end_time": 1.25}]
            },
            "response": {
                "sentence_list": [{"text": "hi", "st": 0, "et": 900}]
            },
            "words": [{"text": "hi", "st": 0, "et": 400}]
        });

        let response: QueryResponse = serde_json::from_value(body).unwrap();
        let sentence = &response.result.unwrap().sentences[0];
        assert_eq!(sentence.start_time, 0.5);
        assert_eq!(sentence.end_time, 1.25);
        let listed = &response.response.unwrap().sentence_list[0];
        assert_eq!((listed.st, listed.et), (0, 900));
        assert_eq!(response.words[0].et, 400);
    }

    #[test]
    fn test_parse_partial_result() {
        let response: QueryResponse = serde_json::from_str("{}").unwrap();
        assert!(response.result.is_none());
        assert!(response.audio_info.is_none());

        let response: QueryResponse =
            serde_json::from_str(r#"{"result": {"text": "hi"}, "extra": 1}"#).unwrap();
        let result = response.result.unwrap();
        assert_eq!(result.text, "hi");
        assert!(result.utterances.is_empty());
    }
}

// =============================================================================
// Configuration Type Tests
// =============================================================================

mod config_tests {
    use super::*;

    #[test]
    fn test_resource_as_str() {
        assert_eq!(AucResource::BigAsr.as_str(), "volc.bigasr.auc");
        assert_eq!(AucResource::SeedAsr.as_str(), "volc.seedasr.auc");
        assert_eq!(
            AucResource::Custom("volc.other.auc".to_string()).as_str(),
            "volc.other.auc"
        );
    }

    #[test]
    fn test_resource_from_str_aliases() {
        assert_eq!(AucResource::from_str_or_custom("bigasr"), AucResource::BigAsr);
        assert_eq!(
            AucResource::from_str_or_custom("VOLC.BIGASR.AUC"),
            AucResource::BigAsr
        );
        assert_eq!(AucResource::from_str_or_custom("seed"), AucResource::SeedAsr);
        assert_eq!(
            AucResource::from_str_or_custom("volc.seedasr.auc"),
            AucResource::SeedAsr
        );
    }

    #[test]
    fn test_resource_unknown_is_custom() {
        assert_eq!(
            AucResource::from_str_or_custom(" Volc.Custom.Auc "),
            AucResource::Custom("Volc.Custom.Auc".to_string())
        );
    }

    #[test]
    fn test_resource_default_and_display() {
        assert_eq!(AucResource::default(), AucResource::BigAsr);
        assert_eq!(format!("{}", AucResource::SeedAsr), "volc.seedasr.auc");
    }

    #[test]
    fn test_recognition_options_default() {
        let options = RecognitionOptions::default();
        assert_eq!(options.model_name, DEFAULT_MODEL_NAME);
        assert!(options.enable_channel_split);
        assert!(options.enable_ddc);
        assert!(options.enable_speaker_info);
        assert!(options.enable_punc);
        assert!(options.enable_itn);
        assert_eq!(options.corpus, Corpus::default());
    }

    #[test]
    fn test_poll_policy() {
        let policy = PollPolicy::default();
        assert_eq!(policy.interval, Duration::from_secs(1));
        assert!(policy.max_wait.is_none());

        let policy =
            PollPolicy::new(Duration::from_millis(200)).with_max_wait(Duration::from_secs(5));
        assert_eq!(policy.interval, Duration::from_millis(200));
        assert_eq!(policy.max_wait, Some(Duration::from_secs(5)));
    }
}

// =============================================================================
// Credential Tests
// =============================================================================

mod credential_tests {
    use super::*;

    #[test]
    fn test_valid_credentials() {
        let credentials = Credentials::new("app", "token");
        assert!(credentials.validate().is_ok());
        assert_eq!(credentials.app_id(), "app");
        assert_eq!(credentials.access_token(), "token");
    }

    #[test]
    fn test_empty_credentials_rejected() {
        assert!(Credentials::new("", "token").validate().is_err());
        assert!(Credentials::new("app", "  ").validate().is_err());
    }

    #[test]
    fn test_header_unsafe_credentials_rejected() {
        let err = Credentials::new("app\nid", "token").validate().unwrap_err();
        assert!(err.contains("header"));
    }

    #[test]
    fn test_debug_redacts_token() {
        let credentials = Credentials::new("app", "super-secret-token");
        let debug = format!("{credentials:?}");
        assert!(debug.contains("app"));
        assert!(!debug.contains("super-secret-token"));
        assert!(debug.contains("<redacted>"));
    }
}

// =============================================================================
// Client Construction Tests
// =============================================================================

mod client_tests {
    use super::*;

    #[test]
    fn test_client_new_with_defaults() {
        let client = AucClient::new(ClientConfig::default(), Credentials::new("app", "token"));
        assert!(client.is_ok());
        assert_eq!(client.unwrap().config().resource, AucResource::BigAsr);
    }

    #[test]
    fn test_client_rejects_missing_credentials() {
        let result = AucClient::new(ClientConfig::default(), Credentials::new("", "token"));
        assert!(matches!(result, Err(AucError::ConfigurationError(_))));
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        let config = ClientConfig {
            poll_interval_ms: 0,
            ..Default::default()
        };
        let result = AucClient::new(config, Credentials::new("app", "token"));
        assert!(matches!(result, Err(AucError::ConfigurationError(_))));
    }

    #[test]
    fn test_task_result_parse() {
        let result = TaskResult {
            task: SubmittedTask {
                task_id: "id".to_string(),
                logid: "log".to_string(),
            },
            body: r#"{"result": {"text": "done"}}"#.to_string(),
            attempts: 1,
            elapsed: Duration::from_millis(5),
        };
        let parsed = result.parse().unwrap();
        assert_eq!(parsed.result.unwrap().text, "done");

        let result = TaskResult {
            body: "not json".to_string(),
            ..result
        };
        assert!(matches!(result.parse(), Err(AucError::Serialization(_))));
    }
}

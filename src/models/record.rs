use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One playback source for one episode, as stored in a stream file.
///
/// Every field is optional on disk; missing strings become empty so that a
/// sparse record still aggregates instead of failing the whole file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RawRecord {
    pub anime_title: String,

    pub episode_title: String,

    pub episode_link: String,

    pub episode_date: String,

    /// Provider payload; only `id` is interpreted.
    pub decoded_data: Value,

    pub server: String,

    pub quality: String,

    pub stream_url: String,

    pub is_default: Option<bool>,

    pub timestamp: Value,
}

impl RawRecord {
    /// The `decoded_data.id` field, or `null` when absent.
    #[must_use]
    pub fn decoded_id(&self) -> Value {
        self.decoded_data.get("id").cloned().unwrap_or(Value::Null)
    }
}

/// Content of a single stream file: either one record or a list of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RecordFile {
    Many(Vec<RawRecord>),
    One(Box<RawRecord>),
}

impl RecordFile {
    #[must_use]
    pub fn into_records(self) -> Vec<RawRecord> {
        match self {
            Self::Many(records) => records,
            Self::One(record) => vec![*record],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_object_file() {
        let file: RecordFile = serde_json::from_str(
            r#"{"anime_title":"X","episode_title":"X Episode 1","decoded_data":{"id":42}}"#,
        )
        .unwrap();
        let records = file.into_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].decoded_id(), serde_json::json!(42));
    }

    #[test]
    fn test_array_file_keeps_order() {
        let file: RecordFile = serde_json::from_str(
            r#"[{"server":"A"},{"server":"B"},{"server":"C"}]"#,
        )
        .unwrap();
        let servers: Vec<String> = file.into_records().into_iter().map(|r| r.server).collect();
        assert_eq!(servers, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_sparse_record_uses_defaults() {
        let file: RecordFile = serde_json::from_str("{}").unwrap();
        let record = file.into_records().remove(0);
        assert_eq!(record.episode_link, "");
        assert_eq!(record.is_default, None);
        assert!(record.decoded_id().is_null());
    }

    #[test]
    fn test_wrong_field_type_is_rejected() {
        assert!(serde_json::from_str::<RecordFile>(r#"{"anime_title":5}"#).is_err());
        assert!(serde_json::from_str::<RecordFile>("42").is_err());
    }
}

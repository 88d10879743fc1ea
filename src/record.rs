//! Record Data Model
//!
//! The `Record` entity served by the record backend. Records are
//! server-owned: the gateway only relays them and never mutates or
//! persists a copy.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single uploaded sensory/emotion data entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Server-assigned identity, unique within a fetch
    pub id: u64,
    /// Calendar date of the observation
    pub date: NaiveDate,
    pub location: String,
    /// Sensory category (sight, sound, smell, taste, touch)
    pub sense_type: String,
    pub keyword: String,
    pub emotion_score: f64,
    pub description: String,
}

/// Upload payload: a record without its server-assigned id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRecord {
    pub date: NaiveDate,
    pub location: String,
    pub sense_type: String,
    pub keyword: String,
    pub emotion_score: f64,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserializes_backend_json() {
        let json = r#"{
            "id": 42,
            "date": "2025-06-01",
            "location": "Seoul Forest",
            "sense_type": "smell",
            "keyword": "pine",
            "emotion_score": 8.5,
            "description": "Fresh pine after rain"
        }"#;

        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 42);
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(record.sense_type, "smell");
        assert_eq!(record.emotion_score, 8.5);
    }

    #[test]
    fn test_new_record_serializes_date_as_string() {
        let new_record = NewRecord {
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            location: "Han River".to_string(),
            sense_type: "sound".to_string(),
            keyword: "waves".to_string(),
            emotion_score: 7.0,
            description: "".to_string(),
        };

        let json = serde_json::to_value(&new_record).unwrap();
        assert_eq!(json["date"], "2025-06-01");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_record_rejects_malformed_date() {
        let json = r#"{
            "id": 1,
            "date": "06/01/2025",
            "location": "",
            "sense_type": "sight",
            "keyword": "",
            "emotion_score": 5.0,
            "description": ""
        }"#;

        assert!(serde_json::from_str::<Record>(json).is_err());
    }
}

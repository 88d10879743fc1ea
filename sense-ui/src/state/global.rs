//! Global Application State
//!
//! Reactive state management using Leptos signals, plus the pure
//! derivations the home page renders from the fetched record array.

use chrono::NaiveDate;
use leptos::*;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// The full record set from the last successful fetch
    pub records: RwSignal<Vec<Record>>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// A single sensory/emotion record from the API
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Record {
    pub id: u64,
    pub date: NaiveDate,
    pub location: String,
    pub sense_type: String,
    pub keyword: String,
    pub emotion_score: f64,
    pub description: String,
}

/// Upload payload: a record without its server-assigned id
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NewRecord {
    pub date: NaiveDate,
    pub location: String,
    pub sense_type: String,
    pub keyword: String,
    pub emotion_score: f64,
    pub description: String,
}

/// The `limit` most recent records, newest first
pub fn latest_records(records: &[Record], limit: usize) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(limit);
    sorted
}

/// The `limit` highest-scored records, highest first
pub fn top_scored(records: &[Record], limit: usize) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.emotion_score.total_cmp(&a.emotion_score));
    sorted.truncate(limit);
    sorted
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        records: create_rw_signal(Vec::new()),
        loading: create_rw_signal(true),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// The six most recent records
    pub fn latest_six(&self) -> Vec<Record> {
        latest_records(&self.records.get(), 6)
    }

    /// The five highest-scored records
    pub fn top_five(&self) -> Vec<Record> {
        top_scored(&self.records.get(), 5)
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, date: &str, score: f64) -> Record {
        Record {
            id,
            date: date.parse().unwrap(),
            location: format!("place-{}", id),
            sense_type: "sight".to_string(),
            keyword: String::new(),
            emotion_score: score,
            description: String::new(),
        }
    }

    #[test]
    fn test_latest_sorts_by_date_descending_and_truncates() {
        let records = vec![
            record(1, "2025-05-01", 3.0),
            record(2, "2025-06-03", 5.0),
            record(3, "2025-05-20", 4.0),
            record(4, "2025-06-01", 9.0),
            record(5, "2025-04-11", 2.0),
            record(6, "2025-05-28", 6.0),
            record(7, "2025-03-02", 1.0),
            record(8, "2025-06-02", 7.0),
        ];

        let latest = latest_records(&records, 6);
        let ids: Vec<u64> = latest.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 8, 4, 6, 3, 1]);
    }

    #[test]
    fn test_top_sorts_by_score_descending_and_truncates() {
        let records = vec![
            record(1, "2025-05-01", 3.0),
            record(2, "2025-06-03", 5.0),
            record(3, "2025-05-20", 4.0),
            record(4, "2025-06-01", 9.0),
            record(5, "2025-04-11", 2.0),
            record(6, "2025-05-28", 6.0),
        ];

        let top = top_scored(&records, 5);
        let ids: Vec<u64> = top.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![4, 6, 2, 3, 1]);
    }

    #[test]
    fn test_short_input_is_returned_whole() {
        let records = vec![record(1, "2025-05-01", 3.0), record(2, "2025-06-03", 5.0)];
        assert_eq!(latest_records(&records, 6).len(), 2);
        assert_eq!(top_scored(&records, 5).len(), 2);
    }

    #[test]
    fn test_empty_input_derives_empty_views() {
        assert!(latest_records(&[], 6).is_empty());
        assert!(top_scored(&[], 5).is_empty());
    }

    #[test]
    fn test_equal_dates_keep_input_order() {
        // sort_by is stable, so same-day records stay in fetch order
        let records = vec![
            record(1, "2025-06-01", 3.0),
            record(2, "2025-06-01", 5.0),
            record(3, "2025-06-01", 4.0),
        ];
        let ids: Vec<u64> = latest_records(&records, 6).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}

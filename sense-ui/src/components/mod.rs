//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod emotion_chart;
pub mod header;
pub mod loading;
pub mod record_card;
pub mod toast;
pub mod upload_form;

pub use emotion_chart::EmotionChart;
pub use header::Header;
pub use loading::CardSkeleton;
pub use record_card::RecordCard;
pub use toast::Toast;
pub use upload_form::UploadForm;

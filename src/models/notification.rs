//! notification_logs — record of notifications sent by the pipeline.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::notification_logs;

#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = notification_logs)]
pub struct NotificationLog {
    pub id: i64,
    /// Delivery channel: email, slack or telegram.
    pub notification_type: String,
    pub recipient: String,
    pub subject: Option<String>,
    pub message: String,
    pub approval_id: Option<i64>,
    pub deployment_id: Option<i64>,
    pub sent_successfully: bool,
    pub error_message: Option<String>,
    pub sent_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn failed_delivery_keeps_error_text() {
        let row = NotificationLog {
            id: 3,
            notification_type: "slack".to_string(),
            recipient: "#deployments".to_string(),
            subject: None,
            message: "Build 42 awaiting approval".to_string(),
            approval_id: Some(1),
            deployment_id: None,
            sent_successfully: false,
            error_message: Some("channel_not_found".to_string()),
            sent_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 10, 0).unwrap(),
        };

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["notification_type"], "slack");
        assert_eq!(json["sent_successfully"], false);
        assert_eq!(json["error_message"], "channel_not_found");
        assert!(json["deployment_id"].is_null());
    }
}

use serde::Deserialize;

/// Raw CSV row from the cookie log. Fields arrive already trimmed by the
/// reader configuration.
#[derive(Deserialize, Debug)]
pub struct LogRecord {
    pub cookie: String,
    pub timestamp: String,
}

impl LogRecord {
    /// Converts a raw record into a LogRecord, requiring exactly two fields.
    /// Anything else (one field, three or more fields) is not an error, just
    /// not a log row.
    pub fn from_record(record: &csv::StringRecord) -> Option<LogRecord> {
        if record.len() != 2 {
            return None;
        }

        record.deserialize(None).ok()
    }

    /// Keep the row only when the leading 10 characters of its timestamp
    /// equal `target_date`. Timestamps shorter than 10 characters yield a
    /// shorter prefix that simply fails the comparison.
    pub fn entry_for_date(self, target_date: &str) -> Option<CookieEntry> {
        let date_part: String = self.timestamp.chars().take(10).collect();

        if date_part == target_date {
            Some(CookieEntry {
                cookie: self.cookie,
                timestamp: self.timestamp,
            })
        } else {
            None
        }
    }
}

/// A log row that survived the date filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieEntry {
    pub cookie: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[&str]) -> csv::StringRecord {
        csv::StringRecord::from(fields.to_vec())
    }

    #[test]
    fn test_entry_kept_when_date_matches() {
        let row = LogRecord {
            cookie: "ABC123".to_string(),
            timestamp: "2018-12-09T10:13:00+00:00".to_string(),
        };

        let entry = row.entry_for_date("2018-12-09").unwrap();
        assert_eq!(
            entry,
            CookieEntry {
                cookie: "ABC123".to_string(),
                timestamp: "2018-12-09T10:13:00+00:00".to_string(),
            }
        );
    }

    #[test]
    fn test_entry_dropped_when_date_differs() {
        let row = LogRecord {
            cookie: "XYZ789".to_string(),
            timestamp: "2018-12-08T10:13:00+00:00".to_string(),
        };

        assert!(row.entry_for_date("2018-12-09").is_none());
    }

    #[test]
    fn test_entry_dropped_for_garbage_timestamp() {
        let row = LogRecord {
            cookie: "cookie123".to_string(),
            timestamp: "not-a-valid-timestamp".to_string(),
        };

        assert!(row.entry_for_date("2018-12-09").is_none());
    }

    #[test]
    fn test_entry_dropped_for_short_timestamp() {
        let row = LogRecord {
            cookie: "cookie123".to_string(),
            timestamp: "2018".to_string(),
        };

        assert!(row.entry_for_date("2018-12-09").is_none());
    }

    #[test]
    fn test_bare_date_timestamp_matches() {
        let row = LogRecord {
            cookie: "cookie123".to_string(),
            timestamp: "2018-12-09".to_string(),
        };

        assert!(row.entry_for_date("2018-12-09").is_some());
    }

    #[test]
    fn test_from_record_requires_exactly_two_fields() {
        assert!(LogRecord::from_record(&record(&["onlycookie"])).is_none());
        assert!(
            LogRecord::from_record(&record(&["abc", "2018-12-09T10:13:00+00:00", "extra"]))
                .is_none()
        );

        let row = LogRecord::from_record(&record(&["abc", "2018-12-09T10:13:00+00:00"])).unwrap();
        assert_eq!(row.cookie, "abc");
        assert_eq!(row.timestamp, "2018-12-09T10:13:00+00:00");
    }
}

use chrono::SubsecRound;

/// Records are keyed by an application-assigned UUID string, not by the
/// backend's native primary key.
pub type RecordId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh record id (UUID v4, hyphenated).
pub fn new_record_id() -> RecordId {
    uuid::Uuid::new_v4().to_string()
}

/// The current instant truncated to microseconds, the finest precision a
/// PostgreSQL `TIMESTAMPTZ` keeps.
pub fn now() -> Timestamp {
    chrono::Utc::now().trunc_subsecs(6)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_ids_are_unique_uuids() {
        let a = new_record_id();
        let b = new_record_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
        assert!(uuid::Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn now_has_microsecond_precision() {
        assert_eq!(now().timestamp_subsec_nanos() % 1_000, 0);
    }
}

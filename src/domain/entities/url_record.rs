//! URL record entity: the only persisted type.

use chrono::{DateTime, Utc};

/// A short URL and the original URL it redirects to.
///
/// `short_url` is the unique key (domain + prefix + slug). A record past its
/// `expiry` stays in storage but no longer redirects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub original_url: String,
    pub short_url: String,
    pub expiry: DateTime<Utc>,
    pub click_count: i64,
}

impl UrlRecord {
    /// Creates a record that has not been visited yet.
    pub fn new(original_url: String, short_url: String, expiry: DateTime<Utc>) -> Self {
        Self {
            original_url,
            short_url,
            expiry,
            click_count: 0,
        }
    }

    /// Returns true if `now` is at or after the expiry time.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expiry
    }

    /// Returns true if the record has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_new_record_has_no_clicks() {
        let expiry = Utc::now() + Duration::hours(1);
        let record = UrlRecord::new(
            "https://example.com".to_string(),
            "http://sho.rt/s/abc123".to_string(),
            expiry,
        );

        assert_eq!(record.click_count, 0);
        assert_eq!(record.expiry, expiry);
        assert!(!record.is_expired());
    }

    #[test]
    fn test_record_expired_in_the_past() {
        let record = UrlRecord::new(
            "https://example.com".to_string(),
            "http://sho.rt/s/abc123".to_string(),
            Utc::now() - Duration::seconds(1),
        );
        assert!(record.is_expired());
    }

    #[test]
    fn test_record_expires_exactly_at_expiry() {
        let expiry = Utc::now();
        let record = UrlRecord::new(
            "https://example.com".to_string(),
            "http://sho.rt/s/abc123".to_string(),
            expiry,
        );

        assert!(record.is_expired_at(expiry));
        assert!(!record.is_expired_at(expiry - Duration::milliseconds(1)));
    }
}

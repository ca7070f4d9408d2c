use crate::models::{Contact, InfluencerRecord, InfluencerResult};

/// Take the top `limit` ranked records in their public shape
pub fn project(records: &[&InfluencerRecord], limit: usize) -> Vec<InfluencerResult> {
    records.iter().take(limit).map(|record| to_result(record)).collect()
}

fn to_result(record: &InfluencerRecord) -> InfluencerResult {
    InfluencerResult {
        name: record.name.clone(),
        category: record.category.clone(),
        content_type: record.content_type.clone(),
        platform: record.platform.clone(),
        followers: record.total_followers,
        engagement: record.overall_engagement,
        rate: record.rate,
        age: record.age,
        gender: record.gender.clone(),
        contact: Contact {
            email: record.email.clone(),
            phone: record.phone.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_record(name: &str) -> InfluencerRecord {
        InfluencerRecord {
            name: name.to_string(),
            category: "travel".to_string(),
            content_type: "vlog".to_string(),
            platform: "yt".to_string(),
            total_followers: 120_000,
            overall_engagement: 4.2,
            rate: 15000.0,
            age: 29,
            gender: "male".to_string(),
            email: "travel@example.com".to_string(),
            phone: "+91 98765 43210".to_string(),
        }
    }

    #[test]
    fn test_project_truncates_in_order() {
        let records: Vec<InfluencerRecord> = (0..12).map(|i| create_record(&format!("creator {}", i))).collect();
        let refs: Vec<&InfluencerRecord> = records.iter().collect();

        let projected = project(&refs, 5);

        assert_eq!(projected.len(), 5);
        assert_eq!(projected[0].name, "creator 0");
        assert_eq!(projected[4].name, "creator 4");
    }

    #[test]
    fn test_project_shape() {
        let record = create_record("nomad");
        let projected = project(&[&record], 10);

        assert_eq!(projected.len(), 1);
        let json = serde_json::to_value(&projected[0]).unwrap();
        assert_eq!(json["followers"], 120_000);
        assert_eq!(json["contact"]["email"], "travel@example.com");
        assert_eq!(json["contact"]["phone"], "+91 98765 43210");
    }
}

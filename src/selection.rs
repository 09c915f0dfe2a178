use crate::data::Record;

/// Records whose product code equals `code`, in their original order.
///
/// The result may be empty; callers treat an empty selection as the explicit
/// "no narrative available" condition rather than an error.
pub fn filter_by_product(records: &[Record], code: u32) -> Vec<Record> {
    records
        .iter()
        .filter(|record| record.product_code == code)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::filter_by_product;
    use crate::data::{Record, Sex};

    fn record(product_code: u32, narrative: &str) -> Record {
        Record {
            treatment_date: NaiveDate::from_ymd_opt(2017, 1, 1).unwrap(),
            age: 30,
            sex: Sex::Female,
            race: "white".to_string(),
            body_part: "head".to_string(),
            location: "home".to_string(),
            diagnosis: "contusion".to_string(),
            product_code,
            weight: 1.0,
            narrative: narrative.to_string(),
        }
    }

    #[test]
    fn keeps_only_matching_records_in_order() {
        let records = vec![
            record(1842, "first"),
            record(649, "other product"),
            record(1842, "second"),
        ];

        let selection = filter_by_product(&records, 1842);
        let narratives: Vec<&str> = selection.iter().map(|r| r.narrative.as_str()).collect();
        assert_eq!(narratives, vec!["first", "second"]);
    }

    #[test]
    fn unknown_code_yields_empty_selection() {
        let records = vec![record(1842, "first")];
        assert!(filter_by_product(&records, 9999).is_empty());
    }
}

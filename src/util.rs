//! Small helpers shared by the client and its callers.

use std::cmp::Ordering;
use std::time::Duration;

use serde_json::Value;

/// Sort JSON records by a numeric field.
///
/// `order` must be `"asc"` or `"desc"` and `sort_key` must be given; anything
/// else returns the records unchanged. Numeric strings compare by value.
/// Records whose field is missing or not numeric keep their relative order
/// and go after every numeric one.
pub fn sort_data(records: &[Value], sort_key: Option<&str>, order: Option<&str>) -> Vec<Value> {
    let mut sorted = records.to_vec();
    let (Some(key), Some(order @ ("asc" | "desc"))) = (sort_key, order) else {
        return sorted;
    };
    let descending = order == "desc";

    sorted.sort_by(|a, b| match (numeric_field(a, key), numeric_field(b, key)) {
        (Some(x), Some(y)) => {
            let ord = x.total_cmp(&y);
            if descending {
                ord.reverse()
            } else {
                ord
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    sorted
}

fn numeric_field(record: &Value, key: &str) -> Option<f64> {
    let value = match record.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if s.trim().is_empty() => Some(0.0),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null => Some(0.0),
        _ => None,
    }?;
    (!value.is_nan()).then_some(value)
}

/// Last element of a slice.
pub fn last<T>(items: &[T]) -> Option<&T> {
    items.last()
}

/// Sleep for `ms` milliseconds.
pub async fn wait(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

/// Milliseconds since the Unix epoch.
pub fn now_in_milliseconds() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tvls(records: &[Value]) -> Vec<Value> {
        records.iter().map(|r| r["tvl"].clone()).collect()
    }

    #[test]
    fn test_sort_data_orders() {
        let records = vec![
            json!({ "tvl": "10" }),
            json!({ "tvl": 2 }),
            json!({ "tvl": "30.5" }),
        ];

        let asc = sort_data(&records, Some("tvl"), Some("asc"));
        assert_eq!(tvls(&asc), vec![json!(2), json!("10"), json!("30.5")]);

        let desc = sort_data(&records, Some("tvl"), Some("desc"));
        assert_eq!(tvls(&desc), vec![json!("30.5"), json!("10"), json!(2)]);
    }

    #[test]
    fn test_sort_data_unknown_order_is_copy() {
        let records = vec![json!({ "tvl": 3 }), json!({ "tvl": 1 })];
        assert_eq!(sort_data(&records, Some("tvl"), Some("up")), records);
        assert_eq!(sort_data(&records, None, Some("asc")), records);
        assert_eq!(sort_data(&records, Some("tvl"), None), records);
    }

    #[test]
    fn test_sort_data_non_numeric_last() {
        let records = vec![
            json!({ "tvl": "n/a", "id": 1 }),
            json!({ "tvl": 5 }),
            json!({ "id": 2 }),
            json!({ "tvl": 1 }),
        ];
        let sorted = sort_data(&records, Some("tvl"), Some("desc"));
        assert_eq!(sorted[0]["tvl"], 5);
        assert_eq!(sorted[1]["tvl"], 1);
        assert_eq!(sorted[2]["id"], 1);
        assert_eq!(sorted[3]["id"], 2);
    }

    #[test]
    fn test_last() {
        assert_eq!(last(&[1, 2, 3]), Some(&3));
        assert_eq!(last::<u8>(&[]), None);
    }

    #[tokio::test]
    async fn test_wait_advances_clock() {
        let before = now_in_milliseconds();
        wait(20).await;
        assert!(now_in_milliseconds() - before >= 20);
    }
}

use serde::{Deserialize, Serialize};

/// One dataset entry: either a bare number or a record with a `value` field.
///
/// ```rust
/// use trend_chart::DataPoint;
///
/// let data: Vec<DataPoint> = serde_json::from_str(r#"[1, {"value": 2.5}, 3]"#).unwrap();
/// assert_eq!(trend_chart::plain_values(&data), vec![1.0, 2.5, 3.0]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataPoint {
    Number(f32),
    Record { value: f32 },
}

impl DataPoint {
    pub fn value(&self) -> f32 {
        match *self {
            DataPoint::Number(v) | DataPoint::Record { value: v } => v,
        }
    }
}

impl From<f32> for DataPoint {
    fn from(value: f32) -> Self {
        DataPoint::Number(value)
    }
}

/// Strip records down to their numbers.
pub fn plain_values(data: &[DataPoint]) -> Vec<f32> {
    data.iter().map(DataPoint::value).collect()
}

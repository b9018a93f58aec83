//! Conversion of frame cells into output values.

use polars::prelude::*;
use serde_json::{Map, Number, Value};

/// Every row of `frame`, each cell passed through `convert`.
pub(crate) fn rows<T>(
    frame: &DataFrame,
    convert: impl Fn(&AnyValue<'_>) -> T,
) -> PolarsResult<Vec<Vec<T>>> {
    let columns = frame.get_columns();
    (0..frame.height())
        .map(|i| {
            columns
                .iter()
                .map(|column| column.get(i).map(|value| convert(&value)))
                .collect()
        })
        .collect()
}

/// Rows of `frame` as JSON objects keyed by column name.
pub(crate) fn records(frame: &DataFrame) -> PolarsResult<Vec<Map<String, Value>>> {
    let names: Vec<String> = frame
        .get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect();

    let records = rows(frame, json_value)?
        .into_iter()
        .map(|row| names.iter().cloned().zip(row).collect())
        .collect();
    Ok(records)
}

/// JSON value of a cell. Null and NaN both become `null`.
pub(crate) fn json_value(value: &AnyValue<'_>) -> Value {
    match value {
        AnyValue::Null => Value::Null,
        AnyValue::Boolean(b) => Value::Bool(*b),
        AnyValue::String(s) => Value::String((*s).to_string()),
        AnyValue::StringOwned(s) => Value::String(s.to_string()),
        AnyValue::Int32(v) => Value::from(*v),
        AnyValue::Int64(v) => Value::from(*v),
        AnyValue::UInt32(v) => Value::from(*v),
        AnyValue::UInt64(v) => Value::from(*v),
        AnyValue::Float32(v) => float(f64::from(*v)),
        AnyValue::Float64(v) => float(*v),
        other => Value::String(other.to_string()),
    }
}

fn float(v: f64) -> Value {
    Number::from_f64(v).map_or(Value::Null, Value::Number)
}

/// CSV field of a cell; null is the empty field.
pub(crate) fn csv_value(value: &AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => (*s).to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Float64(v) if v.is_nan() => String::new(),
        AnyValue::Float64(v) => v.to_string(),
        other => other.to_string(),
    }
}

/// Terminal text of a cell; floats are shown with two decimals.
pub(crate) fn text_value(value: &AnyValue<'_>) -> String {
    match value {
        AnyValue::Float64(v) if v.is_nan() => String::new(),
        AnyValue::Float64(v) => format!("{:.2}", v),
        AnyValue::Float32(v) => format!("{:.2}", v),
        other => csv_value(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> DataFrame {
        DataFrame::new(vec![
            Series::new("year".into(), vec![2012i32, 2013]).into(),
            Series::new("neighborhood".into(), vec![Some("A"), None]).into(),
            Series::new("value".into(), vec![Some(400.5), None]).into(),
        ])
        .unwrap()
    }

    #[test]
    fn test_json_values() {
        assert_eq!(json_value(&AnyValue::Null), Value::Null);
        assert_eq!(json_value(&AnyValue::Int32(2012)), Value::from(2012));
        assert_eq!(json_value(&AnyValue::Float64(f64::NAN)), Value::Null);
        assert_eq!(json_value(&AnyValue::String("A")), Value::from("A"));
    }

    #[test]
    fn test_records_keep_nulls() {
        let records = records(&frame()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["year"], Value::from(2012));
        assert_eq!(records[0]["value"], Value::from(400.5));
        assert_eq!(records[1]["neighborhood"], Value::Null);
        assert_eq!(records[1]["value"], Value::Null);
    }

    #[test]
    fn test_text_and_csv_values() {
        let text = rows(&frame(), text_value).unwrap();
        assert_eq!(text[0], vec!["2012", "A", "400.50"]);
        assert_eq!(text[1], vec!["2013", "", ""]);

        let csv = rows(&frame(), csv_value).unwrap();
        assert_eq!(csv[0], vec!["2012", "A", "400.5"]);
    }
}

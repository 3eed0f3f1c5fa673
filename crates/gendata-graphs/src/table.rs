//! Conversion of untyped tabular values into a [`Dataset`].
//!
//! Two shapes are accepted: a column object `{"x": [...], "y": [...]}` and
//! an array of records `[{"x": .., "y": ..}, ...]`. Anything else is
//! rejected with [`GenDataError::InvalidInput`].

use gendata_common::{GenDataError, Result};
use gendata_points::{DataPoint, Dataset};
use serde_json::{Map, Value};

/// Column holding the sampled x values.
pub const X_COLUMN: &str = "x";
/// Column holding the noisy y values.
pub const Y_COLUMN: &str = "y";

/// Builds a dataset from a tabular value.
pub fn dataset_from_value(value: &Value) -> Result<Dataset> {
    let points = match value {
        Value::Object(columns) => from_columns(columns)?,
        Value::Array(rows) if rows.iter().all(Value::is_object) => from_records(rows)?,
        Value::Array(_) => {
            return Err(GenDataError::invalid_input(
                "expected a table with x and y columns, got a plain list",
            ))
        }
        other => {
            return Err(GenDataError::invalid_input(format!(
                "expected a table with x and y columns, got {}",
                kind(other)
            )))
        }
    };

    if points.is_empty() {
        return Err(GenDataError::invalid_input("table has no rows"));
    }
    Ok(Dataset::from_points(points))
}

fn from_columns(columns: &Map<String, Value>) -> Result<Vec<DataPoint>> {
    let xs = column(columns, X_COLUMN)?;
    let ys = column(columns, Y_COLUMN)?;
    if xs.len() != ys.len() {
        return Err(GenDataError::invalid_input(format!(
            "columns have unequal lengths (x: {}, y: {})",
            xs.len(),
            ys.len()
        )));
    }

    xs.iter()
        .zip(ys)
        .enumerate()
        .map(|(row, (x, y))| Ok(DataPoint::new(cell_x(x, row)?, cell_y(y, row)?)))
        .collect()
}

fn from_records(rows: &[Value]) -> Result<Vec<DataPoint>> {
    rows.iter()
        .enumerate()
        .map(|(row, record)| {
            let field = |name: &str| {
                record.get(name).ok_or_else(|| {
                    GenDataError::invalid_input(format!("row {row} has no '{name}' field"))
                })
            };
            Ok(DataPoint::new(
                cell_x(field(X_COLUMN)?, row)?,
                cell_y(field(Y_COLUMN)?, row)?,
            ))
        })
        .collect()
}

fn column<'a>(columns: &'a Map<String, Value>, name: &str) -> Result<&'a Vec<Value>> {
    match columns.get(name) {
        Some(Value::Array(cells)) => Ok(cells),
        Some(other) => Err(GenDataError::invalid_input(format!(
            "column '{name}' must be a list, got {}",
            kind(other)
        ))),
        None => Err(GenDataError::invalid_input(format!("missing column '{name}'"))),
    }
}

fn cell_x(cell: &Value, row: usize) -> Result<i64> {
    cell.as_i64().ok_or_else(|| {
        GenDataError::invalid_input(format!("x in row {row} must be an integer, got {cell}"))
    })
}

fn cell_y(cell: &Value, row: usize) -> Result<f64> {
    match cell.as_f64() {
        Some(y) if y.is_finite() => Ok(y),
        _ => Err(GenDataError::invalid_input(format!(
            "y in row {row} must be a finite number, got {cell}"
        ))),
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(err: GenDataError) -> String {
        match err {
            GenDataError::InvalidInput { message } => message,
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_column_table() {
        let dataset = dataset_from_value(&json!({"x": [9, 1, 4], "y": [27.3, 1.2, 7.9]})).unwrap();
        assert_eq!(dataset.len(), 3);
        assert!(dataset.is_sorted());
        assert_eq!(dataset.points()[0], DataPoint::new(1, 1.2));
    }

    #[test]
    fn test_record_table() {
        let dataset = dataset_from_value(&json!([
            {"x": 4, "y": 7.9},
            {"x": 1, "y": 1},
        ]))
        .unwrap();
        assert_eq!(dataset.points(), &[DataPoint::new(1, 1.0), DataPoint::new(4, 7.9)]);
    }

    #[test]
    fn test_plain_list_is_rejected() {
        let msg = message(dataset_from_value(&json!([1, 2, 3])).unwrap_err());
        assert!(msg.contains("plain list"));

        let msg = message(dataset_from_value(&json!("x,y")).unwrap_err());
        assert!(msg.contains("a string"));
    }

    #[test]
    fn test_missing_and_mismatched_columns() {
        let msg = message(dataset_from_value(&json!({"x": [1]})).unwrap_err());
        assert!(msg.contains("missing column 'y'"));

        let msg = message(dataset_from_value(&json!({"x": [1, 2], "y": [1.0]})).unwrap_err());
        assert!(msg.contains("unequal lengths"));

        let msg = message(dataset_from_value(&json!({"x": 1, "y": [1.0]})).unwrap_err());
        assert!(msg.contains("must be a list"));

        let msg = message(dataset_from_value(&json!([{"x": 1}])).unwrap_err());
        assert!(msg.contains("no 'y' field"));
    }

    #[test]
    fn test_bad_cells() {
        let msg = message(dataset_from_value(&json!({"x": [1.5], "y": [1.0]})).unwrap_err());
        assert!(msg.contains("must be an integer"));

        let msg = message(dataset_from_value(&json!({"x": [1], "y": ["high"]})).unwrap_err());
        assert!(msg.contains("finite number"));
    }

    #[test]
    fn test_empty_table() {
        for value in [json!({"x": [], "y": []}), json!([])] {
            let msg = message(dataset_from_value(&value).unwrap_err());
            assert!(msg.contains("no rows"));
        }
    }
}

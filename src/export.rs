// CSV export of a filtered view

use crate::record::Record;
use chrono::NaiveDate;
use eyre::{Context, Result, eyre};
use tracing::debug;

/// One exported column: record field and its header text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub field: String,
    pub header: String,
}

impl Column {
    pub fn new(field: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            header: header.into(),
        }
    }
}

/// Serialize `records` as CSV, one row per record in column order
///
/// Values containing a comma, quote or line break are quoted with inner
/// quotes doubled. Missing fields become empty cells. An empty input yields
/// the header row alone.
pub fn export_csv<'a, R, I>(records: I, columns: &[Column]) -> Result<String>
where
    R: Record + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(columns.iter().map(|c| c.header.as_str()))
        .context("Failed to write CSV header")?;

    let mut rows = 0usize;
    for record in records {
        let fields = record.fields();
        let row: Vec<String> = columns
            .iter()
            .map(|c| fields.get(&c.field).map(ToString::to_string).unwrap_or_default())
            .collect();
        wtr.write_record(&row)
            .with_context(|| format!("Failed to write CSV row for record {}", record.id()))?;
        rows += 1;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| eyre!("Failed to flush CSV writer: {}", e.error()))?;
    let text = String::from_utf8(bytes).context("CSV output was not valid UTF-8")?;

    debug!(collection = R::collection_name(), rows, "export_csv: done");
    Ok(text)
}

/// File name a download of `view` on `date` is saved under
pub fn export_filename(view: &str, date: NaiveDate) -> String {
    format!("{}-{}.csv", view, date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FieldValue;
    use serde::{Deserialize, Serialize};
    use std::collections::HashMap;

    #[derive(Debug, Clone, Serialize, Deserialize)]
    struct Line {
        id: String,
        message: String,
        count: Option<i64>,
    }

    impl Record for Line {
        fn id(&self) -> &str {
            &self.id
        }

        fn collection_name() -> &'static str {
            "lines"
        }

        fn fields(&self) -> HashMap<String, FieldValue> {
            let mut fields = HashMap::new();
            fields.insert("id".to_string(), self.id.as_str().into());
            fields.insert("message".to_string(), self.message.as_str().into());
            if let Some(count) = self.count {
                fields.insert("count".to_string(), count.into());
            }
            fields
        }
    }

    fn line(id: &str, message: &str, count: Option<i64>) -> Line {
        Line {
            id: id.to_string(),
            message: message.to_string(),
            count,
        }
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::new("id", "ID"),
            Column::new("message", "Message"),
            Column::new("count", "Count"),
        ]
    }

    #[test]
    fn test_header_and_rows() {
        let lines = vec![line("1", "hello", Some(3)), line("2", "world", Some(4))];

        let csv = export_csv(&lines, &columns()).unwrap();
        assert_eq!(csv, "ID,Message,Count\n1,hello,3\n2,world,4\n");
    }

    #[test]
    fn test_empty_input_is_header_only() {
        let lines: Vec<Line> = Vec::new();

        let csv = export_csv(&lines, &columns()).unwrap();
        assert_eq!(csv, "ID,Message,Count\n");
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn test_escapes_commas_and_quotes() {
        let lines = vec![line("1", "a,b", None), line("2", "say \"hi\"", None)];

        let csv = export_csv(&lines, &columns()).unwrap();
        assert_eq!(csv, "ID,Message,Count\n1,\"a,b\",\n2,\"say \"\"hi\"\"\",\n");
    }

    #[test]
    fn test_newline_values_survive_a_reparse() {
        let lines = vec![line("1", "first\nsecond", Some(1))];

        let csv = export_csv(&lines, &columns()).unwrap();
        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();

        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], "first\nsecond");
    }

    #[test]
    fn test_column_order_is_respected() {
        let lines = vec![line("7", "msg", Some(9))];
        let columns = vec![Column::new("count", "Count"), Column::new("id", "ID")];

        let csv = export_csv(&lines, &columns).unwrap();
        assert_eq!(csv, "Count,ID\n9,7\n");
    }

    #[test]
    fn test_export_filename() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 28).unwrap();
        assert_eq!(export_filename("events", date), "events-2024-12-28.csv");
    }
}

use crate::DatasetError;
use serde::{ser::SerializeMap, Serialize, Serializer};

/// Rows exported from an ads keyword report.
///
/// The first non-blank line holds the column names; each following non-blank
/// line is split on `,` and mapped to the columns by position. Double quotes
/// are removed and values are trimmed. Quoted commas are not supported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Record>,
}

/// One row, keeping the column order of the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Dataset {
    pub fn parse(text: &str) -> Result<Self, DatasetError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        let mut lines = Vec::new();
        for record in reader.records() {
            let record = record?;
            if record.iter().all(str::is_empty) && record.len() <= 1 {
                continue;
            }
            lines.push(record.iter().map(clean_value).collect::<Vec<_>>());
        }

        let mut lines = lines.into_iter();
        let headers = lines.next().ok_or(DatasetError::Empty)?;

        let rows = lines
            .map(|values| Record {
                fields: headers
                    .iter()
                    .enumerate()
                    .map(|(index, header)| {
                        (header.clone(), values.get(index).cloned().unwrap_or_default())
                    })
                    .collect(),
            })
            .collect();

        Ok(Self { headers, rows })
    }

    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    #[must_use]
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Record {
    #[must_use]
    pub fn get(&self, header: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == header)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

fn clean_value(value: &str) -> String {
    value.replace('"', "")
}

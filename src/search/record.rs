//! The searchable topic corpus.

use std::fmt;

/// Maximum number of keyword table entries indexed by default.
pub const DEFAULT_RECORD_CAP: usize = 100;

/// One searchable documentation topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    title: String,
    body: String,
    /// `title` and `body` joined by a single space, used for matching and display
    text: String,
    /// Lowercased `text`, precomputed so literal terms never re-fold a record
    folded: String,
}

impl Record {
    /// Builds a record from one raw keyword table entry.
    ///
    /// The first whitespace-delimited field becomes the upper-cased title; the
    /// remaining fields are rejoined with single spaces. Returns `None` for an
    /// entry with no fields.
    pub fn from_entry(entry: &str) -> Option<Self> {
        let mut fields = entry.split_whitespace();
        let title = fields.next()?.to_uppercase();
        let body = fields.collect::<Vec<_>>().join(" ");

        let text = if body.is_empty() {
            title.clone()
        } else {
            format!("{} {}", title, body)
        };
        let folded = text.to_lowercase();

        Some(Self {
            title,
            body,
            text,
            folded,
        })
    }

    /// The upper-cased topic title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The descriptive text following the title.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Title and body as a single whitespace-normalized line.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn folded_text(&self) -> &str {
        &self.folded
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Ordered, immutable set of records built once from a keyword table.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Builds the store from the first `cap` raw entries.
    ///
    /// Entries past the cap are never read. Blank entries inside the window
    /// are skipped but still count toward the cap.
    pub fn init<I, S>(raw_records: I, cap: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let records: Vec<Record> = raw_records
            .into_iter()
            .take(cap)
            .filter_map(|entry| Record::from_entry(entry.as_ref()))
            .collect();

        tracing::debug!("Record store holds {} records (cap {})", records.len(), cap);

        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of workflow stages a task can sit in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Standard,
    Bank,
    Person,
    Execute,
}

impl ColumnKind {
    pub const ALL: [ColumnKind; 4] = [
        ColumnKind::Standard,
        ColumnKind::Bank,
        ColumnKind::Person,
        ColumnKind::Execute,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Standard => "standard",
            ColumnKind::Bank => "bank",
            ColumnKind::Person => "person",
            ColumnKind::Execute => "execute",
        }
    }

    /// Resolve an opaque drag payload id back to a column tag.
    pub fn parse(raw: &str) -> Option<ColumnKind> {
        match raw {
            "standard" => Some(ColumnKind::Standard),
            "bank" => Some(ColumnKind::Bank),
            "person" => Some(ColumnKind::Person),
            "execute" => Some(ColumnKind::Execute),
            _ => None,
        }
    }

    pub fn default_title(&self) -> &'static str {
        match self {
            ColumnKind::Standard => "Standard Events",
            ColumnKind::Bank => "Bank Events",
            ColumnKind::Person => "Personal Events",
            ColumnKind::Execute => "Execution Events",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A board column. The set is static configuration, but columns are kept as
/// a reorderable list so the display order can be rearranged by dragging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub kind: ColumnKind,
    pub title: String,
}

impl Column {
    pub fn new(kind: ColumnKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
        }
    }

    /// The four workflow columns in stage order.
    pub fn defaults() -> Vec<Column> {
        ColumnKind::ALL
            .iter()
            .map(|&kind| Column::new(kind, kind.default_title()))
            .collect()
    }
}

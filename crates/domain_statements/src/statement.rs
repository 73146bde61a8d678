//! Statement document model
//!
//! A statement is an ordered list of sections, each an ordered list of
//! labelled lines. Renderers walk it top to bottom.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::StatementError;

/// Statement kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    Purchase,
    Bas,
    Portfolio,
    TransactionHistory,
}

impl StatementKind {
    /// Document title
    pub fn title(&self) -> &'static str {
        match self {
            StatementKind::Purchase => "Unit Purchase Statement",
            StatementKind::Bas => "Business Activity Statement (BAS)",
            StatementKind::Portfolio => "Portfolio Statement",
            StatementKind::TransactionHistory => "Transaction History Statement",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StatementKind::Purchase => "purchase",
            StatementKind::Bas => "bas",
            StatementKind::Portfolio => "portfolio",
            StatementKind::TransactionHistory => "transaction_history",
        };
        f.write_str(label)
    }
}

impl FromStr for StatementKind {
    type Err = StatementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "purchase" => Ok(StatementKind::Purchase),
            "bas" => Ok(StatementKind::Bas),
            "portfolio" => Ok(StatementKind::Portfolio),
            "transaction_history" | "transaction" => Ok(StatementKind::TransactionHistory),
            other => Err(StatementError::Validation(format!("unknown statement kind: {other}"))),
        }
    }
}

/// A labelled value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLine {
    pub label: String,
    pub value: String,
    /// Totals and other lines printed in bold
    #[serde(default)]
    pub emphasis: bool,
}

impl StatementLine {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            emphasis: false,
        }
    }

    pub fn emphasized(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            emphasis: true,
            ..Self::new(label, value)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementSection {
    pub heading: String,
    pub lines: Vec<StatementLine>,
}

impl StatementSection {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            lines: Vec::new(),
        }
    }

    pub fn line(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.lines.push(StatementLine::new(label, value));
        self
    }

    pub fn total(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.lines.push(StatementLine::emphasized(label, value));
        self
    }

    /// Value of the first line with this label
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|l| l.label == label)
            .map(|l| l.value.as_str())
    }
}

/// Company block at the top of the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementHeader {
    pub company_name: String,
    pub subtitle: String,
    /// e.g. "ABN: 12 345 678 901"
    pub abn: String,
    /// e.g. "AFSL: 123456"
    pub afsl: String,
    /// Local date, dd/mm/yyyy
    pub generated_date: String,
    /// Local time, HH:MM:SS
    pub generated_time: String,
    /// IANA zone the stamp is in
    pub timezone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub kind: StatementKind,
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub header: StatementHeader,
    pub sections: Vec<StatementSection>,
    pub footer: Vec<String>,
}

impl Statement {
    pub fn section(&self, heading: &str) -> Option<&StatementSection> {
        self.sections.iter().find(|s| s.heading == heading)
    }
}

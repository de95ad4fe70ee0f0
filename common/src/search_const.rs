//! Fixed vocabularies and limits shared by the filter model, codec and clients.

use serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: i64 = 20;
pub const MAX_LIMIT: i64 = 100;
/// Page size used when broadening a keyword search that came back empty.
pub const FALLBACK_MIN_LIMIT: i64 = 40;
/// Listings first observed within this window count as "new".
pub const RECENT_WINDOW_HOURS: i64 = 72;
pub const LIST_DELIMITER: char = ',';

/// Education levels accepted in the `jenjang` filter. Value and label are the same string.
pub const JENJANG_OPTIONS: &[&str] = &["SMA", "SMK", "Diploma", "Sarjana"];

pub fn is_jenjang_value(value: &str) -> bool {
    JENJANG_OPTIONS.contains(&value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VacancyStatus {
    #[default]
    All,
    Open,
    Closed,
}

impl VacancyStatus {
    pub const ALL: [VacancyStatus; 3] = [VacancyStatus::All, VacancyStatus::Open, VacancyStatus::Closed];

    pub fn as_str(&self) -> &'static str {
        match self {
            VacancyStatus::All => "all",
            VacancyStatus::Open => "open",
            VacancyStatus::Closed => "closed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VacancyStatus::All => "Semua",
            VacancyStatus::Open => "Dibuka",
            VacancyStatus::Closed => "Ditutup",
        }
    }

    /// Returns `None` for anything outside the vocabulary; callers fall back to the default.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Newest listings first.
    #[default]
    Terbaru,
    /// Registration closing soonest first.
    Deadline,
    /// Largest quota first.
    Kuota,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [SortOrder::Terbaru, SortOrder::Deadline, SortOrder::Kuota];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Terbaru => "terbaru",
            SortOrder::Deadline => "deadline",
            SortOrder::Kuota => "kuota",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Terbaru => "Terbaru",
            SortOrder::Deadline => "Pendaftaran segera ditutup",
            SortOrder::Kuota => "Kuota terbanyak",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sort| sort.as_str() == value)
    }
}

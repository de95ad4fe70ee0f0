//! Shared search filter model and partial updates.

use serde::{Deserialize, Serialize};

use crate::search_const::{DEFAULT_LIMIT, SortOrder, VacancyStatus};


/// One complete search intent. Built fresh from the URL on every read and written straight
/// back to it; never kept around as the authoritative copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchFilters {
    pub q: String,
    pub kode_provinsi: String,
    pub kabupaten: String,
    pub jenjang: Vec<String>,
    pub prodi: Vec<String>,
    pub status: VacancyStatus,
    pub only_new: bool,
    pub sort: SortOrder,
    pub page: i64,
    pub limit: i64,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            q: String::new(),
            kode_provinsi: String::new(),
            kabupaten: String::new(),
            jenjang: Vec::new(),
            prodi: Vec::new(),
            status: VacancyStatus::default(),
            only_new: false,
            sort: SortOrder::default(),
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl SearchFilters {
    /// True when anything besides pagination differs from the defaults.
    pub fn has_active_filters(&self) -> bool {
        !self.q.is_empty()
            || !self.kode_provinsi.is_empty()
            || !self.kabupaten.is_empty()
            || !self.jenjang.is_empty()
            || !self.prodi.is_empty()
            || self.status != VacancyStatus::default()
            || self.only_new
            || self.sort != SortOrder::default()
    }

    pub fn merge(self, update: FilterUpdate) -> Self {
        update.apply(self)
    }

    /// One removable entry per active filter, in the order the filter panel shows them.
    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        let mut chips = Vec::new();
        if !self.q.is_empty() {
            chips.push(ActiveFilter::new("q", format!("Kata kunci: {}", self.q), FilterUpdate::default().q("")));
        }
        if !self.kode_provinsi.is_empty() {
            chips.push(ActiveFilter::new(
                "prov",
                format!("Provinsi: {}", self.kode_provinsi),
                FilterUpdate::province(""),
            ));
        }
        if !self.kabupaten.is_empty() {
            chips.push(ActiveFilter::new(
                "kab",
                format!("Kabupaten: {}", self.kabupaten),
                FilterUpdate::default().kabupaten(""),
            ));
        }
        for value in &self.jenjang {
            let remaining = self.jenjang.iter().filter(|item| *item != value).cloned().collect();
            chips.push(ActiveFilter::new(
                format!("jenjang-{value}"),
                format!("Jenjang: {value}"),
                FilterUpdate::default().jenjang(remaining),
            ));
        }
        for value in &self.prodi {
            let remaining = self.prodi.iter().filter(|item| *item != value).cloned().collect();
            chips.push(ActiveFilter::new(
                format!("prodi-{value}"),
                format!("Prodi: {value}"),
                FilterUpdate::default().prodi(remaining),
            ));
        }
        if self.status != VacancyStatus::default() {
            chips.push(ActiveFilter::new(
                "status",
                format!("Status: {}", self.status.label()),
                FilterUpdate::default().status(VacancyStatus::default()),
            ));
        }
        if self.only_new {
            chips.push(ActiveFilter::new("onlyNew", "Hanya baru", FilterUpdate::default().only_new(false)));
        }
        if self.sort != SortOrder::default() {
            chips.push(ActiveFilter::new(
                "sort",
                format!("Urutkan: {}", self.sort.label()),
                FilterUpdate::default().sort(SortOrder::default()),
            ));
        }
        chips
    }
}

/// A partial change set merged over the current filters. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterUpdate {
    pub q: Option<String>,
    pub kode_provinsi: Option<String>,
    pub kabupaten: Option<String>,
    pub jenjang: Option<Vec<String>>,
    pub prodi: Option<Vec<String>>,
    pub status: Option<VacancyStatus>,
    pub only_new: Option<bool>,
    pub sort: Option<SortOrder>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl FilterUpdate {
    /// Selecting a province always clears the kabupaten picked under the previous one.
    pub fn province(kode_provinsi: impl Into<String>) -> Self {
        Self { kode_provinsi: Some(kode_provinsi.into()), kabupaten: Some(String::new()), ..Self::default() }
    }

    pub fn q(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    pub fn kabupaten(mut self, kabupaten: impl Into<String>) -> Self {
        self.kabupaten = Some(kabupaten.into());
        self
    }

    pub fn jenjang(mut self, jenjang: Vec<String>) -> Self {
        self.jenjang = Some(jenjang);
        self
    }

    pub fn prodi(mut self, prodi: Vec<String>) -> Self {
        self.prodi = Some(prodi);
        self
    }

    pub fn status(mut self, status: VacancyStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn only_new(mut self, only_new: bool) -> Self {
        self.only_new = Some(only_new);
        self
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn apply(self, base: SearchFilters) -> SearchFilters {
        SearchFilters {
            q: self.q.unwrap_or(base.q),
            kode_provinsi: self.kode_provinsi.unwrap_or(base.kode_provinsi),
            kabupaten: self.kabupaten.unwrap_or(base.kabupaten),
            jenjang: self.jenjang.unwrap_or(base.jenjang),
            prodi: self.prodi.unwrap_or(base.prodi),
            status: self.status.unwrap_or(base.status),
            only_new: self.only_new.unwrap_or(base.only_new),
            sort: self.sort.unwrap_or(base.sort),
            page: self.page.unwrap_or(base.page),
            limit: self.limit.unwrap_or(base.limit),
        }
    }
}

/// A removable "chip" describing one active filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveFilter {
    pub key: String,
    pub label: String,
    pub remove: FilterUpdate,
}

impl ActiveFilter {
    fn new(key: impl Into<String>, label: impl Into<String>, remove: FilterUpdate) -> Self {
        Self { key: key.into(), label: label.into(), remove }
    }
}

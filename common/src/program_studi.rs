//! Canonical study-program ("program studi") labels.
//!
//! Programs arrive from the upstream source with inconsistent casing, accents and spacing.
//! Every label is keyed by its folded form; the first label seen for a key wins.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::search_result::Vacancy;
use crate::text_fold::{collapse_whitespace, fold_text};

pub const BASE_PROGRAM_STUDI: &[&str] = &[
    "Teknik Informatika",
    "Sistem Informasi",
    "Ilmu Komputer",
    "Rekayasa Perangkat Lunak",
    "Data Science",
    "Statistika",
    "Matematika",
    "Teknik Industri",
    "Teknik Elektro",
    "Teknik Mesin",
    "Teknik Kimia",
    "Teknik Sipil",
    "Teknik Lingkungan",
    "Teknik Telekomunikasi",
    "Teknik Fisika",
    "Teknik Geologi",
    "Teknik Perminyakan",
    "Teknik Pertambangan",
    "Sains Aktuaria",
    "Akuntansi",
    "Manajemen",
    "Bisnis Digital",
    "Administrasi Bisnis",
    "Administrasi Publik",
    "Ilmu Komunikasi",
    "Desain Komunikasi Visual",
    "Desain Produk",
    "Hubungan Internasional",
    "Hukum",
    "Psikologi",
    "Kesehatan Masyarakat",
    "Keperawatan",
    "Farmasi",
    "Kedokteran",
    "Biologi",
    "Kimia",
    "Fisika",
    "Agroteknologi",
    "Agribisnis",
    "Pariwisata",
    "Perhotelan",
    "Pendidikan Bahasa Inggris",
    "Pendidikan Matematika",
];

static BASE_PROGRAM_MAP: LazyLock<BTreeMap<String, String>> = LazyLock::new(|| {
    BASE_PROGRAM_STUDI
        .iter()
        .map(|label| (program_key(label), label.to_string()))
        .collect()
});

pub fn program_key(value: &str) -> String {
    fold_text(value)
}

/// Maps a raw program name onto the base vocabulary.
///
/// Blank input yields an empty string. Unknown programs pass through with their
/// whitespace collapsed.
pub fn canonicalize_program_label(raw: &str) -> String {
    let collapsed = collapse_whitespace(raw);
    if collapsed.is_empty() {
        return collapsed;
    }
    match BASE_PROGRAM_MAP.get(&program_key(&collapsed)) {
        Some(label) => label.clone(),
        None => collapsed,
    }
}

/// Program options offered by the filter panel: the base list plus every program seen in
/// fetched listings. Entries are only ever added.
#[derive(Debug, Clone)]
pub struct ProgramCatalog {
    labels: BTreeMap<String, String>,
}

impl Default for ProgramCatalog {
    fn default() -> Self {
        Self { labels: BASE_PROGRAM_MAP.clone() }
    }
}

impl ProgramCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, raw: &str) {
        let canonical = canonicalize_program_label(raw);
        if canonical.is_empty() {
            return;
        }
        self.labels.entry(program_key(&canonical)).or_insert(canonical);
    }

    pub fn observe_vacancies(&mut self, vacancies: &[Vacancy]) {
        for vacancy in vacancies {
            for program in &vacancy.program_studi {
                self.observe(program);
            }
        }
    }

    pub fn contains(&self, raw: &str) -> bool {
        self.labels.contains_key(&program_key(raw))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels sorted case and accent insensitively.
    pub fn options(&self) -> Vec<String> {
        let mut options = self.labels.values().cloned().collect::<Vec<_>>();
        options.sort_by_cached_key(|label| (fold_text(label), label.clone()));
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalizes_case_accents_and_spacing() {
        assert_eq!(canonicalize_program_label("teknik   informatika"), "Teknik Informatika");
        assert_eq!(canonicalize_program_label("  PSIKOLOGÍ "), "Psikologi");
        assert_eq!(canonicalize_program_label("Ilmu  Gizi"), "Ilmu Gizi");
        assert_eq!(canonicalize_program_label("   "), "");
    }

    #[test]
    fn catalog_is_append_only_and_deduplicated() {
        let mut catalog = ProgramCatalog::new();
        let base_len = catalog.len();
        assert_eq!(base_len, BASE_PROGRAM_STUDI.len());

        catalog.observe("Ilmu Gizi");
        catalog.observe("ilmu   gizi");
        catalog.observe("teknik informatika");
        catalog.observe(" ");

        assert_eq!(catalog.len(), base_len + 1);
        assert!(catalog.contains("ILMU GIZI"));
        assert!(catalog.options().contains(&"Ilmu Gizi".to_string()));
    }

    #[test]
    fn options_are_sorted_ignoring_case() {
        let mut catalog = ProgramCatalog::new();
        catalog.observe("aquakultur");
        let options = catalog.options();
        assert_eq!(options[0], "Administrasi Bisnis");
        assert_eq!(options[1], "Administrasi Publik");
        assert_eq!(options[2], "Agribisnis");
        assert_eq!(options[3], "Agroteknologi");
        assert_eq!(options[5], "aquakultur");
    }
}

//! Пакетный анализ каталога HTML-отчётов.

use crate::analysis::{Analysis, AnalysisBuilder};
use crate::document::{Document, RawFiling};
use crate::error::ExtractError;
use crate::types::LineItem;
use std::fs::{self, DirEntry};
use std::path::Path;

/// Набор результатов анализа нескольких отчётов.
#[derive(Debug, Clone, Default)]
pub struct AnalysisSet {
    /// Результаты в порядке имён файлов.
    pub analyses: Vec<Analysis>,
}

impl AnalysisSet {
    /// Анализирует все HTML-файлы каталога с настройками по умолчанию.
    #[inline]
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, ExtractError> {
        Self::from_dir_with(dir, |builder, document| builder.analyze(document))
    }

    /// Анализирует все HTML-файлы каталога, позволяя настроить builder
    /// для каждого отчёта.
    ///
    /// # Пример
    ///
    /// ```
    /// # use finstat_extract::{AnalysisSet, STANDARD_SECTION_TITLES};
    /// # let dir = "tests/fixtures";
    /// let set = AnalysisSet::from_dir_with(dir, |builder, document| {
    ///     builder.section_titles(STANDARD_SECTION_TITLES).analyze(document)
    /// })
    /// .unwrap();
    /// assert!(!set.analyses.is_empty());
    /// ```
    pub fn from_dir_with<P, F>(dir: P, mut analyze_fn: F) -> Result<Self, ExtractError>
    where
        P: AsRef<Path>,
        F: FnMut(AnalysisBuilder, &Document) -> Analysis,
    {
        let mut entries: Vec<_> = fs::read_dir(dir)?
            .filter_map(std::result::Result::ok)
            .collect();
        // Делаем порядок файлов детерминированным.
        entries.sort_by_key(DirEntry::path);

        let mut analyses = Vec::new();
        for entry in entries {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
                continue;
            };
            let ext_lower = ext.to_ascii_lowercase();
            if ext_lower != "html" && ext_lower != "htm" {
                continue;
            }

            let file = fs::File::open(&path)?;
            let raw = RawFiling::from_reader(file)?;
            let document = raw.to_document();
            analyses.push(analyze_fn(AnalysisBuilder::new(), &document));
        }

        Ok(Self { analyses })
    }

    /// Статьи, не найденные ни в одном отчёте набора.
    pub fn missing_in_all(&self) -> Vec<LineItem> {
        LineItem::ALL
            .into_iter()
            .filter(|item| {
                self.analyses
                    .iter()
                    .all(|analysis| !analysis.extraction.found(*item))
            })
            .collect()
    }
}

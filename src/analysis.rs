//! Сборка полного результата анализа одного документа.

use std::sync::LazyLock;

use crate::dictionary::Dictionary;
use crate::document::Document;
use crate::extractor::Extractor;
use crate::types::{Extraction, LineItem, PeriodLabels, Ratios};
use crate::utils::normalize_label;
use chrono::NaiveDate;
use regex::Regex;

static REPORT_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2},\s*\d{4}",
    )
    .expect("valid report date regex")
});

/// Итог анализа одного документа.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Даты колонок отчёта, если их удалось определить.
    pub periods: Option<PeriodLabels>,
    /// Извлечённые значения статей.
    pub extraction: Extraction,
    /// Производные коэффициенты.
    pub ratios: Ratios,
    /// Статьи, не найденные в документе (предупреждение для вывода).
    pub missing: Vec<LineItem>,
}

impl Analysis {
    /// Анализирует документ с настройками по умолчанию: встроенный
    /// словарь, без фильтра разделов.
    #[inline]
    pub fn of_document(document: &Document) -> Self {
        AnalysisBuilder::new().analyze(document)
    }
}

/// Builder для настройки анализа документа.
#[derive(Debug, Clone, Default)]
pub struct AnalysisBuilder {
    dictionary: Option<Dictionary>,
    section_titles: Vec<String>,
}

impl AnalysisBuilder {
    /// Создаёт builder с настройками по умолчанию.
    ///
    /// # Пример
    ///
    /// ```
    /// use finstat_extract::{AnalysisBuilder, Document, STANDARD_SECTION_TITLES};
    ///
    /// let document = Document::from_rows(vec![]);
    /// let analysis = AnalysisBuilder::new()
    ///     .section_titles(STANDARD_SECTION_TITLES)
    ///     .analyze(&document);
    /// assert_eq!(analysis.missing.len(), 7);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Задаёт словарь синонимов вместо встроенного.
    #[inline]
    pub fn dictionary(mut self, dictionary: Dictionary) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    /// Задаёт заголовки разделов для предфильтра страниц; без вызова
    /// сканируются все страницы.
    pub fn section_titles<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.section_titles = titles
            .into_iter()
            .map(|title| title.as_ref().to_string())
            .collect();
        self
    }

    /// Выполняет анализ с текущими настройками.
    pub fn analyze(self, document: &Document) -> Analysis {
        let Self {
            dictionary,
            section_titles,
        } = self;
        let extractor =
            Extractor::new(dictionary.unwrap_or_default()).with_section_titles(section_titles);

        let extraction = extractor.scan_document(document);
        let ratios = Ratios::compute(&extraction);
        let missing = extraction.missing();
        let periods = detect_period_labels(document, &extractor);

        Analysis {
            periods,
            extraction,
            ratios,
            missing,
        }
    }
}

/// Ищет в тексте отфильтрованных страниц даты отчётных периодов вида
/// «January 26, 2025»; первые две различные даты считаются текущим и
/// предыдущим периодами.
fn detect_period_labels(document: &Document, extractor: &Extractor) -> Option<PeriodLabels> {
    let mut dates: Vec<NaiveDate> = Vec::new();
    for page in &document.pages {
        if !extractor.page_matches(page.text.as_deref()) {
            continue;
        }
        let Some(text) = page.text.as_deref() else {
            continue;
        };
        for found in REPORT_DATE_RE.find_iter(text) {
            let cleaned = normalize_label(found.as_str());
            if let Ok(date) = NaiveDate::parse_from_str(&cleaned, "%B %d, %Y") {
                if !dates.contains(&date) {
                    dates.push(date);
                }
            }
        }
    }

    match *dates.as_slice() {
        [current, prior, ..] => Some(PeriodLabels { current, prior }),
        _ => None,
    }
}

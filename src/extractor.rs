//! Обход строк документа и накопление значений статей.

use crate::dictionary::Dictionary;
use crate::document::{Document, Row};
use crate::types::{Extraction, Money};
use crate::utils::{normalize_label, parse_amount};

/// Заголовки разделов консолидированной отчётности для предфильтра
/// страниц: баланс и отчёт о прибылях на поддерживаемых языках.
pub const STANDARD_SECTION_TITLES: [&str; 9] = [
    "consolidated balance sheet",
    "consolidated statements of income",
    "consolidated statements of operations",
    "資產負債表",
    "资产负债表",
    "貸借対照表",
    "損益計算書",
    "損益表",
    "利润表",
];

/// Извлекатель статей: словарь синонимов плюс фильтр разделов.
#[derive(Debug, Clone)]
pub struct Extractor {
    dictionary: Dictionary,
    section_titles: Vec<String>,
}

impl Extractor {
    /// Создаёт извлекатель с указанным словарём и без фильтра разделов.
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            section_titles: Vec::new(),
        }
    }

    /// Задаёт заголовки разделов: страницы, в тексте которых нет ни
    /// одного из них (без учёта регистра), пропускаются целиком. Пустой
    /// список отключает фильтр и оставляет все страницы.
    pub fn with_section_titles<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.section_titles = titles
            .into_iter()
            .map(|title| title.as_ref().to_lowercase())
            .collect();
        self
    }

    /// Сканирует документ, складывая значения статей в свежий накопитель.
    pub fn scan_document(&self, document: &Document) -> Extraction {
        let mut extraction = Extraction::new();
        for page in &document.pages {
            if !self.page_matches(page.text.as_deref()) {
                continue;
            }
            for table in &page.tables {
                self.scan_rows(&mut extraction, &table.rows);
            }
        }
        extraction
    }

    /// Прогоняет последовательность строк через накопитель.
    pub fn scan_rows(&self, extraction: &mut Extraction, rows: &[Row]) {
        for row in rows {
            self.scan_row(extraction, row);
        }
    }

    /// Обрабатывает одну строку таблицы.
    ///
    /// Подпись сопоставляется не более чем с одной статьёй. Повторное
    /// совпадение статьи перезаписывает её значения: итог определяет
    /// последняя полная строка документа, а строка с единственным числом
    /// обновляет только текущий период, сохраняя предыдущий.
    pub fn scan_row(&self, extraction: &mut Extraction, row: &[Option<String>]) {
        let Some(label_cell) = row.first().and_then(Option::as_deref) else {
            return;
        };
        let label = normalize_label(label_cell);
        if label.is_empty() {
            return;
        }
        let Some(item) = self.dictionary.classify(&label) else {
            return;
        };

        // Нулевые значения считаются пустыми ячейками и отбрасываются.
        let values: Vec<Money> = row[1..]
            .iter()
            .map(|cell| parse_amount(cell.as_deref()))
            .filter(|value| !value.is_zero())
            .collect();

        match *values.as_slice() {
            [] => {}
            [only] => extraction.set_current(item, only),
            [current, prior, ..] => extraction.set_pair(item, current, prior),
        }
    }

    /// Проходит ли страница фильтр разделов.
    pub(crate) fn page_matches(&self, text: Option<&str>) -> bool {
        if self.section_titles.is_empty() {
            return true;
        }
        let Some(text) = text else {
            return false;
        };
        let lower = text.to_lowercase();
        self.section_titles
            .iter()
            .any(|title| lower.contains(title.as_str()))
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(Dictionary::default())
    }
}

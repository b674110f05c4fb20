//! Исходный HTML отчёта и провайдеро-независимая табличная модель.

use crate::error::ExtractError;
use crate::utils::collect_text;
use scraper::{Html, Selector};
use std::io::Read;
use std::sync::LazyLock;

static TABLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table").expect("valid table selector"));
static ROW_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("valid tr selector"));
static CELL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td, th").expect("valid cell selector"));

/// Строка таблицы: первая ячейка — подпись статьи, остальные — значения.
pub type Row = Vec<Option<String>>;

/// Таблица, извлечённая из документа.
#[derive(Debug, Clone, Default)]
pub struct Table {
    /// Строки таблицы в порядке документа.
    pub rows: Vec<Row>,
}

/// Страница документа: извлечённый текст и найденные таблицы.
#[derive(Debug, Clone, Default)]
pub struct Page {
    /// Текст страницы, если провайдер его извлёк.
    pub text: Option<String>,
    /// Таблицы страницы.
    pub tables: Vec<Table>,
}

/// Документ, подготовленный внешним провайдером таблиц.
///
/// Порядок страниц, таблиц и строк значим: накопитель обходит их строго
/// последовательно, и итог определяет последняя совпавшая строка.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Страницы в порядке документа.
    pub pages: Vec<Page>,
}

impl Document {
    /// Оборачивает готовые строки в документ из одной страницы без текста.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self {
            pages: vec![Page {
                text: None,
                tables: vec![Table { rows }],
            }],
        }
    }
}

/// Исходный HTML отчёта без разбора.
#[derive(Debug, Clone)]
pub struct RawFiling {
    /// Полный HTML отчёта.
    pub html: String,
}

impl RawFiling {
    /// Читает HTML-отчёт из произвольного `Read`.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, ExtractError> {
        let mut html = String::new();
        reader.read_to_string(&mut html)?;
        Ok(Self { html })
    }

    /// Создаёт отчёт из готовой HTML-строки.
    #[inline]
    pub fn from_str(s: &str) -> Self {
        Self {
            html: s.to_string(),
        }
    }

    /// Разбирает HTML в табличную модель: одна страница со всем текстом
    /// документа и всеми найденными таблицами.
    pub fn to_document(&self) -> Document {
        let doc = Html::parse_document(&self.html);

        let tables = doc
            .select(&TABLE_SELECTOR)
            .map(|table| {
                let rows = table
                    .select(&ROW_SELECTOR)
                    .map(|tr| {
                        tr.select(&CELL_SELECTOR)
                            .map(|cell| {
                                let text = collect_text(cell);
                                if text.is_empty() { None } else { Some(text) }
                            })
                            .collect()
                    })
                    .collect();
                Table { rows }
            })
            .collect();

        let text = collect_text(doc.root_element());
        Document {
            pages: vec![Page {
                text: if text.is_empty() { None } else { Some(text) },
                tables,
            }],
        }
    }
}

//! Ошибки загрузки документов и настройки словаря.

use crate::types::LineItem;

/// Ошибка загрузки исходных файлов или конфигурации извлечения.
///
/// Сам обход таблиц ошибок не поднимает: нечисловые ячейки сводятся к
/// нулю, ненайденные статьи остаются с нулевыми парами.
#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    /// Ошибка ввода-вывода при чтении исходного файла.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Пользовательский словарь не содержит ни одной статьи.
    #[error("Dictionary has no entries")]
    EmptyDictionary,
    /// У статьи нет ни одной непустой фразы-синонима.
    #[error("No synonyms for line item '{item}'")]
    EmptySynonyms {
        /// Статья без синонимов.
        item: LineItem,
    },
}

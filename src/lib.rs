#![warn(missing_docs)]
//! Библиотека извлечения стандартных статей из табличной финансовой
//! отчётности и расчёта производных коэффициентов.
//!
//! Вход — таблицы ячеек, подготовленные внешним провайдером (в комплекте
//! есть адаптер для HTML-выгрузок). Подписи строк сопоставляются со
//! словарём синонимов на английском, китайском и японском языках, по
//! найденным статьям считаются коэффициент текущей ликвидности и
//! оборачиваемость дебиторской и кредиторской задолженности в днях.

mod analysis;
mod analysis_set;
mod dictionary;
mod document;
mod error;
mod extractor;
mod ratios;
mod types;
mod utils;

pub use crate::analysis::{Analysis, AnalysisBuilder};
pub use crate::analysis_set::AnalysisSet;
pub use crate::dictionary::Dictionary;
pub use crate::document::{Document, Page, RawFiling, Row, Table};
pub use crate::error::ExtractError;
pub use crate::extractor::{Extractor, STANDARD_SECTION_TITLES};
pub use crate::types::*;
pub use crate::utils::{normalize_label, parse_amount};

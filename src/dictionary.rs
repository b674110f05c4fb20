//! Словарь синонимов статей и классификация подписей строк.

use crate::error::ExtractError;
use crate::types::LineItem;

/// Встроенные фразы-синонимы в порядке приоритета совпадения.
///
/// Себестоимость объявлена раньше выручки: подпись «Cost of revenue»
/// содержит «revenue» и должна разрешаться в себестоимость.
const BUILTIN: &[(LineItem, &[&str])] = &[
    (
        LineItem::CostOfSales,
        &[
            "cost of revenue",
            "cost of sales",
            "cost of goods sold",
            "營業成本",
            "銷貨成本",
            "营业成本",
            "销售成本",
            "売上原価",
        ],
    ),
    (
        LineItem::Revenue,
        &[
            "revenue",
            "net sales",
            "營業收入",
            "营业收入",
            "売上高",
            "営業収益",
            "売上収益",
        ],
    ),
    (
        LineItem::Receivables,
        &["accounts receivable", "應收帳款", "应收账款", "売掛金"],
    ),
    (
        LineItem::Payables,
        &["accounts payable", "應付帳款", "应付账款", "買掛金"],
    ),
    (
        LineItem::CurrentAssets,
        &[
            "total current assets",
            "流動資產合計",
            "流動資產總計",
            "流动资产合计",
            "流動資産合計",
        ],
    ),
    (
        LineItem::CurrentLiabilities,
        &[
            "total current liabilities",
            "流動負債合計",
            "流動負債總計",
            "流动负债合计",
        ],
    ),
    (
        LineItem::Equity,
        &[
            "total shareholders' equity",
            "total shareholders’ equity",
            "total stockholders' equity",
            "total stockholders’ equity",
            "total equity",
            "股東權益總額",
            "股東權益合計",
            "股东权益合计",
            "所有者权益合计",
            "純資産合計",
            "株主資本合計",
        ],
    ),
];

/// Словарь фраз-синонимов, упорядоченный по приоритету совпадения.
///
/// Порядок записей решает конфликт, когда подпись подходит нескольким
/// статьям: выигрывает статья, объявленная раньше. Повторные совпадения
/// одной и той же статьи по ходу документа разрешает уже накопитель —
/// перезаписью значений, а не словарь.
#[derive(Debug, Clone)]
pub struct Dictionary {
    entries: Vec<(LineItem, Vec<String>)>,
}

impl Dictionary {
    /// Встроенный словарь: английские, китайские (традиционное и
    /// упрощённое письмо) и японские подписи статей.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN
                .iter()
                .map(|(item, phrases)| {
                    (*item, phrases.iter().map(|p| p.to_lowercase()).collect())
                })
                .collect(),
        }
    }

    /// Собирает словарь из пользовательских списков фраз.
    ///
    /// Порядок записей сохраняется и определяет приоритет совпадения.
    /// Пустые фразы отбрасываются; статья без единой непустой фразы и
    /// пустой список записей считаются ошибкой конфигурации.
    pub fn from_entries(entries: Vec<(LineItem, Vec<String>)>) -> Result<Self, ExtractError> {
        if entries.is_empty() {
            return Err(ExtractError::EmptyDictionary);
        }

        let mut cleaned = Vec::with_capacity(entries.len());
        for (item, phrases) in entries {
            let phrases: Vec<String> = phrases
                .into_iter()
                .filter(|phrase| !phrase.trim().is_empty())
                .map(|phrase| phrase.to_lowercase())
                .collect();
            if phrases.is_empty() {
                return Err(ExtractError::EmptySynonyms { item });
            }
            cleaned.push((item, phrases));
        }

        Ok(Self { entries: cleaned })
    }

    /// Определяет статью по нормализованной подписи строки.
    ///
    /// Совпадение — вхождение фразы в подпись без учёта регистра. Строка
    /// сопоставляется не более чем с одной статьёй.
    pub fn classify(&self, label: &str) -> Option<LineItem> {
        let label = label.to_lowercase();
        self.entries
            .iter()
            .find(|(_, phrases)| phrases.iter().any(|phrase| label.contains(phrase.as_str())))
            .map(|(item, _)| *item)
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::builtin()
    }
}

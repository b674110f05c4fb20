//! Доменные типы: статьи отчётности, пары периодов и результат извлечения.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::fmt;

/// Денежное значение, используем `Decimal` для точных расчётов.
pub type Money = Decimal;

/// Стандартизированная статья финансовой отчётности.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LineItem {
    /// Выручка.
    Revenue,
    /// Себестоимость продаж.
    CostOfSales,
    /// Дебиторская задолженность.
    Receivables,
    /// Кредиторская задолженность.
    Payables,
    /// Итого оборотные активы.
    CurrentAssets,
    /// Итого краткосрочные обязательства.
    CurrentLiabilities,
    /// Итого собственный капитал.
    Equity,
}

impl LineItem {
    /// Все статьи в порядке вывода.
    pub const ALL: [Self; 7] = [
        Self::Revenue,
        Self::CostOfSales,
        Self::Receivables,
        Self::Payables,
        Self::CurrentAssets,
        Self::CurrentLiabilities,
        Self::Equity,
    ];

    /// Устойчивый строковый ключ статьи.
    #[inline]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Revenue => "revenue",
            Self::CostOfSales => "cost_of_sales",
            Self::Receivables => "receivables",
            Self::Payables => "payables",
            Self::CurrentAssets => "current_assets",
            Self::CurrentLiabilities => "current_liabilities",
            Self::Equity => "equity",
        }
    }
}

impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Пара значений статьи: текущий и предыдущий отчётные периоды.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PeriodPair {
    /// Значение текущего периода.
    pub current: Money,
    /// Значение предыдущего периода.
    pub prior: Money,
}

/// Даты колонок отчёта: текущий и предыдущий отчётные периоды.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodLabels {
    /// Дата текущего периода.
    pub current: NaiveDate,
    /// Дата предыдущего периода.
    pub prior: NaiveDate,
}

/// Накопитель значений статей по одному документу.
///
/// Все семь статей присутствуют всегда; ненайденные остаются с нулевой
/// парой. Настоящий ноль в отчёте неотличим от «данных нет» — на этом
/// упрощении построена политика слияния строк.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pairs: BTreeMap<LineItem, PeriodPair>,
    found: BTreeMap<LineItem, bool>,
}

impl Extraction {
    /// Создаёт пустой накопитель с нулевыми парами по всем статьям.
    pub fn new() -> Self {
        Self {
            pairs: LineItem::ALL
                .into_iter()
                .map(|item| (item, PeriodPair::default()))
                .collect(),
            found: LineItem::ALL.into_iter().map(|item| (item, false)).collect(),
        }
    }

    /// Пара значений статьи.
    #[inline]
    pub fn pair(&self, item: LineItem) -> PeriodPair {
        self.pairs.get(&item).copied().unwrap_or_default()
    }

    /// Встречалась ли статья в документе хотя бы раз.
    #[inline]
    pub fn found(&self, item: LineItem) -> bool {
        self.found.get(&item).copied().unwrap_or(false)
    }

    /// Статьи, ни разу не встретившиеся в документе.
    pub fn missing(&self) -> Vec<LineItem> {
        LineItem::ALL
            .into_iter()
            .filter(|item| !self.found(*item))
            .collect()
    }

    /// Итератор по парам статей в порядке объявления.
    pub fn iter(&self) -> impl Iterator<Item = (LineItem, PeriodPair)> + '_ {
        self.pairs.iter().map(|(item, pair)| (*item, *pair))
    }

    /// Перезаписывает только текущий период, сохраняя предыдущий.
    pub(crate) fn set_current(&mut self, item: LineItem, value: Money) {
        self.pairs.entry(item).or_default().current = value;
        self.found.insert(item, true);
    }

    /// Перезаписывает оба периода статьи.
    pub(crate) fn set_pair(&mut self, item: LineItem, current: Money, prior: Money) {
        self.pairs.insert(item, PeriodPair { current, prior });
        self.found.insert(item, true);
    }
}

impl Default for Extraction {
    fn default() -> Self {
        Self::new()
    }
}

/// Производные коэффициенты по результату извлечения.
///
/// Ноль означает «не вычислимо»: нулевой знаменатель или отсутствующие
/// данные не поднимают ошибку.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ratios {
    /// Коэффициент текущей ликвидности, в процентах.
    pub current_ratio: Money,
    /// Оборачиваемость дебиторской задолженности, в днях.
    pub receivable_days: Money,
    /// Оборачиваемость кредиторской задолженности, в днях.
    pub payable_days: Money,
}

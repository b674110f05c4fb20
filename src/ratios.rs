//! Расчёт производных коэффициентов по результату извлечения.

use crate::types::{Extraction, LineItem, Money, PeriodPair, Ratios};
use rust_decimal::Decimal;

/// Средний остаток за период: при нулевом предыдущем периоде берём
/// текущее значение без усреднения.
fn average(balance: PeriodPair) -> Money {
    if balance.prior.is_zero() {
        balance.current
    } else {
        (balance.current + balance.prior) / Decimal::TWO
    }
}

/// Оборачиваемость в днях: 365 / (поток / средний остаток).
///
/// Нулевой поток, нулевой остаток или вырожденное отношение дают ноль
/// вместо деления на ноль.
fn turnover_days(flow: Money, balance: PeriodPair) -> Money {
    let avg = average(balance);
    if flow.is_zero() || avg.is_zero() {
        return Decimal::ZERO;
    }
    let turnover = flow / avg;
    if turnover.is_zero() {
        return Decimal::ZERO;
    }
    Decimal::from(365) / turnover
}

impl Ratios {
    /// Считает коэффициенты по заполненному накопителю.
    ///
    /// Флаги наличия статей на расчёт не влияют: ненайденные статьи
    /// участвуют нулями и дают нулевые коэффициенты.
    pub fn compute(extraction: &Extraction) -> Self {
        let assets = extraction.pair(LineItem::CurrentAssets);
        let liabilities = extraction.pair(LineItem::CurrentLiabilities);

        let current_ratio = if liabilities.current.is_zero() {
            Decimal::ZERO
        } else {
            assets.current / liabilities.current * Decimal::ONE_HUNDRED
        };

        Self {
            current_ratio,
            receivable_days: turnover_days(
                extraction.pair(LineItem::Revenue).current,
                extraction.pair(LineItem::Receivables),
            ),
            payable_days: turnover_days(
                extraction.pair(LineItem::CostOfSales).current,
                extraction.pair(LineItem::Payables),
            ),
        }
    }
}

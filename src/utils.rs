//! Нормализация подписей строк и разбор денежных значений ячеек.

use crate::types::Money;
use rust_decimal::Decimal;
use scraper::ElementRef;
use std::str::FromStr;

/// Нормализует подпись: схлопывает пробельные символы и переносы строк
/// в одиночные пробелы и обрезает края.
pub fn normalize_label(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Сводит строку суммы к виду, понятному `Decimal`: убирает валютные
/// символы, разделители разрядов и пробелы, раскрывает бухгалтерскую
/// запись `(X)` и локальные маркеры отрицательных чисел, приводит
/// полноширинные цифры к ASCII.
fn normalize_amount(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            c if c.is_whitespace() => {}
            '$' | '＄' | '¥' | '￥' | ',' | '，' | '+' => {}
            // (500) означает -500.
            '(' | '（' => output.push('-'),
            ')' | '）' => {}
            // △/▲ — отрицательные значения в отчётности Восточной Азии.
            '△' | '▲' | '−' | '－' => output.push('-'),
            '０'..='９' => {
                let digit = ch as u32 - '０' as u32;
                output.push(char::from(b'0' + digit as u8));
            }
            '．' => output.push('.'),
            _ => output.push(ch),
        }
    }
    output
}

/// Разбирает значение ячейки, трактуя пустые и нечисловые ячейки как ноль.
///
/// Ошибки разбора не поднимаются: ноль ниже по конвейеру означает
/// «данных нет», и обход таблиц не прерывается на служебных ячейках.
pub fn parse_amount(cell: Option<&str>) -> Money {
    let Some(raw) = cell else {
        return Decimal::ZERO;
    };
    let normalized = normalize_amount(raw);
    if normalized.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(&normalized).unwrap_or(Decimal::ZERO)
}

/// Собирает текст всех потомков элемента и нормализует пробелы.
pub fn collect_text(element: ElementRef<'_>) -> String {
    normalize_label(&element.text().collect::<String>())
}

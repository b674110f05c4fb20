//! Пример CLI: читает HTML-отчёт и печатает статьи и коэффициенты.

use std::env;
use std::fs::File;

use finstat_extract::{AnalysisBuilder, LineItem, RawFiling, STANDARD_SECTION_TITLES};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = if let Some(path) = env::args().nth(1) {
        path
    } else {
        println!("Usage: finstat-extract <path-to-filing.html>");
        return Ok(());
    };

    let raw = RawFiling::from_reader(File::open(&path)?)?;
    let document = raw.to_document();
    let analysis = AnalysisBuilder::new()
        .section_titles(STANDARD_SECTION_TITLES)
        .analyze(&document);

    if let Some(periods) = analysis.periods {
        println!("Периоды: {} / {}", periods.current, periods.prior);
    }
    for item in LineItem::ALL {
        let pair = analysis.extraction.pair(item);
        println!("{item}: {} / {}", pair.current, pair.prior);
    }
    println!(
        "Коэффициент текущей ликвидности: {}%",
        analysis.ratios.current_ratio
    );
    println!(
        "Оборачиваемость дебиторской задолженности, дней: {}",
        analysis.ratios.receivable_days
    );
    println!(
        "Оборачиваемость кредиторской задолженности, дней: {}",
        analysis.ratios.payable_days
    );
    if !analysis.missing.is_empty() {
        let names: Vec<String> = analysis.missing.iter().map(ToString::to_string).collect();
        println!("Не найдены статьи: {}", names.join(", "));
    }
    Ok(())
}

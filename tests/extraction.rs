use finstat_extract::{
    Analysis, AnalysisBuilder, Dictionary, Document, ExtractError, Extraction, Extractor,
    LineItem, Money, Page, PeriodPair, Row, STANDARD_SECTION_TITLES, Table, parse_amount,
};

fn row(cells: &[&str]) -> Row {
    cells
        .iter()
        .map(|cell| {
            if cell.is_empty() {
                None
            } else {
                Some((*cell).to_string())
            }
        })
        .collect()
}

fn pair(current: i64, prior: i64) -> PeriodPair {
    PeriodPair {
        current: Money::from(current),
        prior: Money::from(prior),
    }
}

#[test]
fn parses_amounts_or_zero() {
    assert_eq!(parse_amount(Some("$1,234")), Money::from(1234));
    assert_eq!(parse_amount(Some("(500)")), Money::from(-500));
    assert_eq!(parse_amount(Some("")), Money::ZERO);
    assert_eq!(parse_amount(None), Money::ZERO);
    assert_eq!(parse_amount(Some("N/A")), Money::ZERO);
    assert_eq!(parse_amount(Some("1 234")), Money::from(1234));
    assert_eq!(parse_amount(Some("△1,500")), Money::from(-1500));
    assert_eq!(parse_amount(Some("▲42")), Money::from(-42));
    assert_eq!(
        parse_amount(Some("１，２３４．５")),
        "1234.5".parse::<Money>().unwrap()
    );
}

#[test]
fn extraction_is_deterministic() {
    let rows = vec![
        row(&["Total revenue", "$1,000", "$900"]),
        row(&["Accounts receivable, net", "$200", "$150"]),
        row(&["Accounts receivable, net", "$210"]),
    ];
    let document = Document::from_rows(rows);
    let extractor = Extractor::default();
    assert_eq!(
        extractor.scan_document(&document),
        extractor.scan_document(&document)
    );
}

#[test]
fn single_value_row_preserves_prior() {
    let rows = vec![
        row(&["Accounts receivable, net", "100", "90"]),
        row(&["Accounts receivable", "110"]),
    ];
    let extractor = Extractor::default();
    let mut extraction = Extraction::new();
    extractor.scan_rows(&mut extraction, &rows);
    assert_eq!(extraction.pair(LineItem::Receivables), pair(110, 90));
}

#[test]
fn later_full_row_overwrites_pair() {
    let rows = vec![
        row(&["Accounts receivable", "100"]),
        row(&["Accounts receivable", "120", "95"]),
    ];
    let extractor = Extractor::default();
    let mut extraction = Extraction::new();
    extractor.scan_rows(&mut extraction, &rows);
    assert_eq!(extraction.pair(LineItem::Receivables), pair(120, 95));
}

#[test]
fn first_declared_concept_wins() {
    let dictionary = Dictionary::default();
    // «Cost of revenue» содержит «revenue», но себестоимость объявлена раньше.
    assert_eq!(
        dictionary.classify("Cost of revenue"),
        Some(LineItem::CostOfSales)
    );
    assert_eq!(dictionary.classify("Total revenue"), Some(LineItem::Revenue));
    assert_eq!(dictionary.classify("Research and development"), None);
}

#[test]
fn classifies_cjk_captions() {
    let dictionary = Dictionary::default();
    assert_eq!(dictionary.classify("應收帳款"), Some(LineItem::Receivables));
    assert_eq!(dictionary.classify("应付账款"), Some(LineItem::Payables));
    assert_eq!(dictionary.classify("営業収益"), Some(LineItem::Revenue));
    assert_eq!(dictionary.classify("売上原価"), Some(LineItem::CostOfSales));
    assert_eq!(
        dictionary.classify("流動負債合計"),
        Some(LineItem::CurrentLiabilities)
    );
}

#[test]
fn current_ratio_guard_on_zero_liabilities() {
    let document = Document::from_rows(vec![row(&["Total current assets", "500", "400"])]);
    let analysis = Analysis::of_document(&document);
    assert_eq!(analysis.ratios.current_ratio, Money::ZERO);
    assert_eq!(analysis.ratios.receivable_days, Money::ZERO);
    assert_eq!(analysis.ratios.payable_days, Money::ZERO);
}

#[test]
fn end_to_end_row_scenario() {
    let rows = vec![
        row(&["Total revenue", "$1,000", "$900"]),
        row(&["Accounts receivable, net", "$200", "$150"]),
        row(&["Total current assets", "$500"]),
        row(&["Total current liabilities", "$250"]),
    ];
    let document = Document::from_rows(rows);
    let analysis = Analysis::of_document(&document);

    assert_eq!(analysis.extraction.pair(LineItem::Revenue), pair(1000, 900));
    assert_eq!(
        analysis.extraction.pair(LineItem::Receivables),
        pair(200, 150)
    );
    assert_eq!(
        analysis.extraction.pair(LineItem::CurrentAssets),
        pair(500, 0)
    );
    assert_eq!(
        analysis.extraction.pair(LineItem::CurrentLiabilities),
        pair(250, 0)
    );

    assert_eq!(analysis.ratios.current_ratio, Money::from(200));

    let avg = (Money::from(200) + Money::from(150)) / Money::TWO;
    let expected_days = Money::from(365) / (Money::from(1000) / avg);
    assert_eq!(analysis.ratios.receivable_days, expected_days);
    assert!(expected_days > Money::from(63) && expected_days < Money::from(64));

    assert_eq!(
        analysis.missing,
        vec![LineItem::CostOfSales, LineItem::Payables, LineItem::Equity]
    );
}

#[test]
fn missing_equity_reported() {
    let document = Document::from_rows(vec![row(&["Total revenue", "1,000", "900"])]);
    let analysis = Analysis::of_document(&document);
    assert_eq!(analysis.extraction.pair(LineItem::Equity), pair(0, 0));
    assert!(!analysis.extraction.found(LineItem::Equity));
    assert!(analysis.missing.contains(&LineItem::Equity));
}

#[test]
fn section_filter_skips_pages() {
    let document = Document {
        pages: vec![
            Page {
                text: Some("CONSOLIDATED BALANCE SHEETS".to_string()),
                tables: vec![Table {
                    rows: vec![row(&["Total current assets", "500", "400"])],
                }],
            },
            Page {
                text: Some("Management's Discussion and Analysis".to_string()),
                tables: vec![Table {
                    rows: vec![row(&["Total current liabilities", "999", "888"])],
                }],
            },
        ],
    };

    let filtered = AnalysisBuilder::new()
        .section_titles(STANDARD_SECTION_TITLES)
        .analyze(&document);
    assert!(filtered.extraction.found(LineItem::CurrentAssets));
    assert!(!filtered.extraction.found(LineItem::CurrentLiabilities));

    // Без заголовков сканируются все страницы.
    let unfiltered = Analysis::of_document(&document);
    assert!(unfiltered.extraction.found(LineItem::CurrentLiabilities));
}

#[test]
fn zero_cell_reads_as_absent() {
    // Известное ограничение: настоящий ноль в отчёте неотличим от
    // «данных нет», поэтому строка с нулём в текущей колонке обновляет
    // текущий период единственным ненулевым значением.
    let document = Document::from_rows(vec![row(&["Accounts payable", "0", "25"])]);
    let analysis = Analysis::of_document(&document);
    assert_eq!(analysis.extraction.pair(LineItem::Payables), pair(25, 0));
}

#[test]
fn custom_dictionary_validation() {
    assert!(matches!(
        Dictionary::from_entries(vec![]),
        Err(ExtractError::EmptyDictionary)
    ));
    assert!(matches!(
        Dictionary::from_entries(vec![(LineItem::Revenue, vec!["  ".to_string()])]),
        Err(ExtractError::EmptySynonyms {
            item: LineItem::Revenue
        })
    ));

    let custom =
        Dictionary::from_entries(vec![(LineItem::Equity, vec!["net worth".to_string()])])
            .expect("valid dictionary");
    assert_eq!(custom.classify("Net Worth"), Some(LineItem::Equity));
    assert_eq!(custom.classify("Total revenue"), None);
}

//! Spreadsheet persistence
//!
//! Persistence sink: serializes the enriched records into a single-sheet
//! .xlsx workbook. The target file is deleted before writing, so a run
//! either fully replaces the previous report or fails without touching it.

use crate::{config::Config, constants::MAX_COLUMN_WIDTH, error::RunError, types::AssetRecord};
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Header row, in column order
pub const HEADERS: [&str; 8] = [
    "CollectionTimestamp",
    "Rank",
    "Name",
    "Symbol",
    "PriceUSD",
    "MarketCapUSD",
    "DominancePct",
    "Change24h",
];

/// Resolves the output path: desktop directory if it exists, else the
/// home directory, else the current directory
pub fn output_path(config: &Config) -> PathBuf {
    let base = dirs::desktop_dir()
        .filter(|p| p.is_dir())
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    base.join(&config.xlsx_filename)
}

/// Writes the records to an .xlsx workbook at `path`
///
/// Any pre-existing file is removed first; a removal failure (the file is
/// open in another program) aborts the run with [`RunError::ResourceBusy`].
pub fn write_spreadsheet(
    records: &[AssetRecord],
    path: &Path,
    config: &Config,
) -> Result<(), RunError> {
    remove_existing(path)?;

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&config.sheet_name)?;

    let collected_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let mut widths = [0usize; 8];

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
        widths[col] = header.len();
    }

    let currency_2dp = Format::new().set_num_format("$#,##0.00");
    let currency_whole = Format::new().set_num_format("$#,##0");
    let percent_2dp = Format::new().set_num_format("0.00\"%\"");

    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;

        write_text(worksheet, row, 0, &collected_at, &mut widths)?;
        if let Some(rank) = record.rank {
            write_value(worksheet, row, 1, f64::from(rank), None, &mut widths)?;
        }
        if let Some(name) = &record.name {
            write_text(worksheet, row, 2, name, &mut widths)?;
        }
        write_text(worksheet, row, 3, &record.symbol, &mut widths)?;
        if let Some(price) = record.price_usd {
            write_value(worksheet, row, 4, price, Some(&currency_2dp), &mut widths)?;
        }
        if let Some(cap) = record.market_cap_usd {
            write_value(worksheet, row, 5, cap, Some(&currency_whole), &mut widths)?;
        }
        write_value(
            worksheet,
            row,
            6,
            record.dominance_pct,
            Some(&percent_2dp),
            &mut widths,
        )?;
        if let Some(change) = record.change_24h {
            write_value(worksheet, row, 7, change, Some(&percent_2dp), &mut widths)?;
        }
    }

    // keep the header visible while scrolling
    worksheet.set_freeze_panes(1, 0)?;

    for (col, width) in widths.iter().enumerate() {
        let sized = ((width + 2) as f64).min(MAX_COLUMN_WIDTH);
        worksheet.set_column_width(col as u16, sized)?;
    }

    workbook.save(path)?;
    tracing::info!(path = %path.display(), rows = records.len(), "Wrote spreadsheet");

    Ok(())
}

fn write_text(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    text: &str,
    widths: &mut [usize; 8],
) -> Result<(), RunError> {
    worksheet.write_string(row, col, text)?;
    widths[col as usize] = widths[col as usize].max(text.len());
    Ok(())
}

fn write_value(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: f64,
    format: Option<&Format>,
    widths: &mut [usize; 8],
) -> Result<(), RunError> {
    match format {
        Some(format) => worksheet.write_number_with_format(row, col, value, format)?,
        None => worksheet.write_number(row, col, value)?,
    };
    widths[col as usize] = widths[col as usize].max(format!("{value}").len());
    Ok(())
}

/// Removes a pre-existing file at the target path
fn remove_existing(path: &Path) -> Result<(), RunError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(RunError::ResourceBusy {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    /// Extracts the shared strings part of a saved workbook; all header
    /// and text cells end up there
    fn shared_strings(path: &Path) -> String {
        let file = fs::File::open(path).unwrap();
        let mut archive = zip::ZipArchive::new(file).unwrap();
        let mut entry = archive.by_name("xl/sharedStrings.xml").unwrap();
        let mut xml = String::new();
        entry.read_to_string(&mut xml).unwrap();
        xml
    }

    fn records() -> Vec<AssetRecord> {
        vec![AssetRecord {
            rank: Some(1),
            name: Some("Bitcoin".to_string()),
            symbol: "BTC".to_string(),
            price_usd: Some(65000.0),
            market_cap_usd: Some(1.2e12),
            change_24h: Some(-0.8),
            dominance_pct: 52.3,
        }]
    }

    #[test]
    fn output_path_ends_with_configured_filename() {
        let config = Config::default();
        assert_eq!(
            output_path(&config).file_name().unwrap().to_str().unwrap(),
            config.xlsx_filename
        );
    }

    #[test]
    fn replaces_pre_existing_file_entirely() {
        let config = Config::default();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(&config.xlsx_filename);
        fs::write(&path, b"stale report from a previous tool").unwrap();

        write_spreadsheet(&records(), &path, &config).unwrap();

        // the old content is gone; xlsx is a zip archive
        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn written_workbook_contains_the_header_row() {
        let config = Config::default();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(&config.xlsx_filename);

        write_spreadsheet(&records(), &path, &config).unwrap();

        let xml = shared_strings(&path);
        for header in HEADERS {
            assert!(
                xml.contains(&format!("<t>{header}</t>")),
                "header {header} missing from workbook"
            );
        }
        // data cells land in the shared strings table too
        assert!(xml.contains("<t>Bitcoin</t>"));
        assert!(xml.contains("<t>BTC</t>"));
    }

    #[test]
    fn second_write_wins() {
        let config = Config::default();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(&config.xlsx_filename);

        write_spreadsheet(&records(), &path, &config).unwrap();
        let first = fs::read(&path).unwrap();

        let mut second_records = records();
        second_records[0].symbol = "ETH".to_string();
        write_spreadsheet(&second_records, &path, &config).unwrap();

        let second = fs::read(&path).unwrap();
        assert_eq!(&second[..2], b"PK");
        assert_ne!(first, second);

        // only the second run's data survives, no merge with the first
        let xml = shared_strings(&path);
        assert!(xml.contains("<t>ETH</t>"));
        assert!(!xml.contains("<t>BTC</t>"));
    }

    #[test]
    fn handles_records_with_missing_fields() {
        let config = Config::default();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(&config.xlsx_filename);
        let record = AssetRecord {
            rank: None,
            name: None,
            symbol: String::new(),
            price_usd: None,
            market_cap_usd: None,
            change_24h: None,
            dominance_pct: 0.0,
        };

        write_spreadsheet(&[record], &path, &config).unwrap();
        assert!(path.exists());
    }
}

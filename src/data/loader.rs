use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use arrow::array::{Array, ArrayRef, BooleanArray, Float64Array, Int64Array, StringArray};
use arrow::compute::cast;
use arrow::datatypes::DataType;
use calamine::{Data, Reader, open_workbook_auto};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::error::LoadError;
use super::model::{Cell, FilmDataset, FilmRecord};
use super::producers::select_producer_column;

pub const COUNTRIES_COLUMN: &str = "countries";
pub const YEAR_COLUMN: &str = "year";
pub const TITLE_COLUMN: &str = "title";
pub const DIRECTOR_COLUMN: &str = "director";
pub const SECTION_COLUMN: &str = "section";

static NULL_CELL: Cell = Cell::Null;

// ---------------------------------------------------------------------------
// RawTable – format-independent result of reading a file
// ---------------------------------------------------------------------------

/// Header names plus rows of typed cells, exactly as read from disk.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

/// One non-blank data row.  `source_row` is its 1-based position below the
/// header in the source file, counting skipped blank rows.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub source_row: usize,
    pub cells: Vec<Cell>,
}

impl RawTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

fn cell_at(row: &[Cell], idx: Option<usize>) -> &Cell {
    idx.and_then(|i| row.get(i)).unwrap_or(&NULL_CELL)
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load and derive the festival dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.xlsx` / `.xls` / `.xlsm` / `.ods` – first worksheet, header in row 1
/// * `.csv`     – header row with column names
/// * `.json`    – `[{ "title": ..., "year": ..., "countries": ... }, ...]`
/// * `.parquet` – flat table with one column per attribute
pub fn load_dataset(path: &Path) -> Result<FilmDataset, LoadError> {
    if !path.exists() {
        return Err(LoadError::MissingFile {
            path: path.to_path_buf(),
        });
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let table = match ext.as_str() {
        "xlsx" | "xls" | "xlsm" | "xlsb" | "ods" => load_spreadsheet(path),
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        _ => return Err(LoadError::UnsupportedFormat { extension: ext }),
    }
    .map_err(LoadError::Read)?;

    log::debug!(
        "Read {} rows with columns {:?} from {}",
        table.rows.len(),
        table.headers,
        path.display()
    );

    build_dataset(table)
}

/// Validate the raw table and derive the festival dataset from it.
pub fn build_dataset(table: RawTable) -> Result<FilmDataset, LoadError> {
    let countries_idx = table
        .column_index(COUNTRIES_COLUMN)
        .ok_or_else(|| LoadError::MissingColumn {
            column: COUNTRIES_COLUMN.to_string(),
        })?;
    let year_idx = table
        .column_index(YEAR_COLUMN)
        .ok_or_else(|| LoadError::MissingColumn {
            column: YEAR_COLUMN.to_string(),
        })?;

    let title_idx = table.column_index(TITLE_COLUMN);
    let director_idx = table.column_index(DIRECTOR_COLUMN);
    let section_idx = table.column_index(SECTION_COLUMN);
    for (name, idx) in [(TITLE_COLUMN, title_idx), (DIRECTOR_COLUMN, director_idx)] {
        if idx.is_none() {
            log::warn!("Column '{name}' not found; values will be left empty");
        }
    }
    if section_idx.is_none() {
        log::warn!("Column '{SECTION_COLUMN}' not found; section filter disabled");
    }

    let producer_column = select_producer_column(&table.headers);
    let producer_idx = producer_column.and_then(|col| table.column_index(col.column_name()));
    match producer_column {
        Some(col) => log::info!("Using '{}' as producer column", col.column_name()),
        None => log::warn!("No producer column found; producer views disabled"),
    }

    let mut records = Vec::with_capacity(table.rows.len());
    for RawRow { source_row, cells: row } in &table.rows {
        let year_cell = cell_at(row, Some(year_idx));
        let year = year_cell.as_year().ok_or_else(|| LoadError::MalformedYear {
            row: *source_row,
            value: year_cell.to_string(),
        })?;

        records.push(FilmRecord {
            title: cell_at(row, title_idx).as_text().unwrap_or_default(),
            director: cell_at(row, director_idx).as_text().unwrap_or_default(),
            year,
            countries_raw: cell_at(row, Some(countries_idx)).as_text(),
            section: cell_at(row, section_idx).as_text(),
            producers_raw: cell_at(row, producer_idx).as_text(),
            country_ids: Vec::new(),
        });
    }

    let dataset = FilmDataset::from_records(records, producer_column, section_idx.is_some());
    log::info!(
        "Loaded {} films, {} distinct countries",
        dataset.len(),
        dataset.countries.len()
    );
    Ok(dataset)
}

/// Drop rows where every cell is null (trailing blank lines in sheets).
fn push_row(rows: &mut Vec<RawRow>, source_row: usize, cells: Vec<Cell>) {
    if cells.iter().all(|c| matches!(c, Cell::Null)) {
        return;
    }
    rows.push(RawRow { source_row, cells });
}

// ---------------------------------------------------------------------------
// Spreadsheet loader
// ---------------------------------------------------------------------------

/// First worksheet; row 1 holds the column names.
fn load_spreadsheet(path: &Path) -> Result<RawTable> {
    let mut workbook = open_workbook_auto(path).context("opening workbook")?;
    let range = workbook
        .worksheet_range_at(0)
        .context("workbook has no worksheets")?
        .context("reading first worksheet")?;

    let mut rows_iter = range.rows();
    let headers: Vec<String> = rows_iter
        .next()
        .context("worksheet is empty")?
        .iter()
        .map(|cell| match cell {
            Data::String(s) => s.trim().to_string(),
            Data::Empty => String::new(),
            other => other.to_string(),
        })
        .collect();

    let mut rows = Vec::new();
    for (i, row) in rows_iter.enumerate() {
        push_row(&mut rows, i + 1, row.iter().map(spreadsheet_to_cell).collect());
    }

    Ok(RawTable { headers, rows })
}

fn spreadsheet_to_cell(data: &Data) -> Cell {
    match data {
        Data::Int(i) => Cell::Integer(*i),
        Data::Float(f) if f.is_nan() => Cell::Null,
        Data::Float(f) => Cell::Float(*f),
        Data::String(s) if s.trim().is_empty() => Cell::Null,
        Data::String(s) => Cell::String(s.clone()),
        Data::Bool(b) => Cell::Bool(*b),
        Data::Empty | Data::Error(_) => Cell::Null,
        other => Cell::String(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<RawTable> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {}", i + 1))?;
        // Line 1 is the header.
        let source_row = record
            .position()
            .map(|pos| pos.line().saturating_sub(1) as usize)
            .unwrap_or(i + 1);
        push_row(&mut rows, source_row, record.iter().map(guess_cell_type).collect());
    }

    Ok(RawTable { headers, rows })
}

fn guess_cell_type(s: &str) -> Cell {
    if s.trim().is_empty() {
        return Cell::Null;
    }
    if let Ok(i) = s.trim().parse::<i64>() {
        return Cell::Integer(i);
    }
    if let Ok(f) = s.trim().parse::<f64>() {
        // "NaN" / "inf" are text here, not numbers.
        if f.is_finite() {
            return Cell::Float(f);
        }
    }
    Cell::String(s.to_string())
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON (`df.to_json(orient='records')`).
/// Columns are the union of keys in order of first appearance.
fn load_json(path: &Path) -> Result<RawTable> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root.as_array().context("Expected top-level JSON array")?;

    let mut headers: Vec<String> = Vec::new();
    let mut positions: BTreeMap<String, usize> = BTreeMap::new();
    let mut objects = Vec::with_capacity(records.len());

    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {} is not a JSON object", i + 1))?;
        for key in obj.keys() {
            let name = key.trim().to_string();
            if !positions.contains_key(&name) {
                positions.insert(name.clone(), headers.len());
                headers.push(name);
            }
        }
        objects.push(obj);
    }

    let mut rows = Vec::with_capacity(objects.len());
    for (i, obj) in objects.into_iter().enumerate() {
        let mut row = vec![Cell::Null; headers.len()];
        for (key, val) in obj {
            if let Some(&idx) = positions.get(key.trim()) {
                row[idx] = json_to_cell(val);
            }
        }
        push_row(&mut rows, i + 1, row);
    }

    Ok(RawTable { headers, rows })
}

fn json_to_cell(val: &JsonValue) -> Cell {
    match val {
        JsonValue::String(s) if s.trim().is_empty() => Cell::Null,
        JsonValue::String(s) => Cell::String(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Cell::Integer(i)
            } else if let Some(f) = n.as_f64() {
                Cell::Float(f)
            } else {
                Cell::String(n.to_string())
            }
        }
        JsonValue::Bool(b) => Cell::Bool(*b),
        JsonValue::Null => Cell::Null,
        other => Cell::String(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Flat Parquet table written by Pandas (`df.to_parquet()`) or Polars.
fn load_parquet(path: &Path) -> Result<RawTable> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let headers: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().trim().to_string())
        .collect();
    let reader = builder.build().context("building parquet reader")?;

    let mut rows = Vec::new();
    let mut source_row = 0;
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let columns = batch
            .columns()
            .iter()
            .zip(&headers)
            .map(|(col, name)| normalize_column(col, name))
            .collect::<Result<Vec<_>>>()?;
        for row in 0..batch.num_rows() {
            source_row += 1;
            let cells = columns
                .iter()
                .map(|col| extract_cell(col.as_ref(), row))
                .collect();
            push_row(&mut rows, source_row, cells);
        }
    }

    Ok(RawTable { headers, rows })
}

/// Arrow type a column is read as: Int64, Float64, Utf8, Boolean or Null.
/// Dictionary columns (Pandas categoricals) take their value type; dates,
/// timestamps and decimals are read as text.  `None` for nested types.
fn normalized_type(data_type: &DataType) -> Option<DataType> {
    match data_type {
        DataType::Int8
        | DataType::Int16
        | DataType::Int32
        | DataType::Int64
        | DataType::UInt8
        | DataType::UInt16
        | DataType::UInt32
        | DataType::UInt64 => Some(DataType::Int64),
        DataType::Float16 | DataType::Float32 | DataType::Float64 => Some(DataType::Float64),
        DataType::Utf8 | DataType::LargeUtf8 | DataType::Utf8View => Some(DataType::Utf8),
        DataType::Boolean => Some(DataType::Boolean),
        DataType::Null => Some(DataType::Null),
        DataType::Dictionary(_, values) => normalized_type(values),
        DataType::Date32
        | DataType::Date64
        | DataType::Timestamp(_, _)
        | DataType::Decimal128(_, _)
        | DataType::Decimal256(_, _) => Some(DataType::Utf8),
        _ => None,
    }
}

/// Cast a column to its normalized type; unreadable columns are an error.
fn normalize_column(col: &ArrayRef, name: &str) -> Result<ArrayRef> {
    let target = normalized_type(col.data_type()).with_context(|| {
        format!("column '{name}' has unsupported type {:?}", col.data_type())
    })?;
    if col.data_type() == &target {
        return Ok(col.clone());
    }
    cast(col.as_ref(), &target).with_context(|| format!("converting column '{name}' to {target:?}"))
}

/// Extract a single cell from a normalized Arrow column at a given row.
fn extract_cell(col: &dyn Array, row: usize) -> Cell {
    if col.is_null(row) {
        return Cell::Null;
    }
    let any = col.as_any();
    let cell = match col.data_type() {
        DataType::Utf8 => any
            .downcast_ref::<StringArray>()
            .map(|a| a.value(row))
            .filter(|s| !s.trim().is_empty())
            .map(|s| Cell::String(s.to_string())),
        DataType::Int64 => any
            .downcast_ref::<Int64Array>()
            .map(|a| Cell::Integer(a.value(row))),
        DataType::Float64 => any
            .downcast_ref::<Float64Array>()
            .map(|a| a.value(row))
            .filter(|f| !f.is_nan())
            .map(Cell::Float),
        DataType::Boolean => any
            .downcast_ref::<BooleanArray>()
            .map(|a| Cell::Bool(a.value(row))),
        _ => None,
    };
    cell.unwrap_or(Cell::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::ProducerColumn;
    use arrow::array::{DictionaryArray, Float32Array, Int16Array, ListArray};
    use arrow::datatypes::Int32Type;
    use arrow::record_batch::RecordBatch;
    use parquet::arrow::ArrowWriter;
    use rust_xlsxwriter::Workbook;
    use std::io::Write;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    fn write_parquet(dir: &TempDir, name: &str, batch: &RecordBatch) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let file = std::fs::File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, batch.schema(), None).unwrap();
        writer.write(batch).unwrap();
        writer.close().unwrap();
        path
    }

    #[test]
    fn loads_csv_and_derives_countries() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "films.csv",
            "title,director,year,countries,section,productoras_normalizadas\n\
             Amour,Michael Haneke,2012,\"France, Austria, Germany\",Competition,\"Les Films du Losange, X Filme\"\n\
             Parasite,Bong Joon-ho,2019.0,south korea,Competition,Barunson E&A\n\
             Untitled,,2019,,Un Certain Regard,\n",
        );

        let ds = load_dataset(&path).unwrap();
        assert_eq!(ds.len(), 3);
        assert!(ds.has_section);
        assert_eq!(ds.producer_column, Some(ProducerColumn::Normalized));
        assert_eq!(ds.records[1].year, 2019);
        assert_eq!(ds.records[2].director, "");
        assert_eq!(ds.records[2].country_count(), 0);
        assert_eq!(
            ds.countries.names(),
            &["Austria", "France", "Germany", "South Korea"]
        );
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let err = load_dataset(&dir.path().join("nope.xlsx")).unwrap_err();
        assert!(matches!(err, LoadError::MissingFile { .. }));
    }

    #[test]
    fn missing_countries_column_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "films.csv", "title,director,year\nA,B,2000\n");
        let err = load_dataset(&path).unwrap_err();
        match err {
            LoadError::MissingColumn { column } => assert_eq!(column, "countries"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_year_is_reported_with_row() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "films.csv",
            "title,director,year,countries\nA,B,2000,France\nC,D,unknown,Spain\n",
        );
        let err = load_dataset(&path).unwrap_err();
        match err {
            LoadError::MalformedYear { row, value } => {
                assert_eq!(row, 2);
                assert_eq!(value, "unknown");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "films.txt", "whatever");
        let err = load_dataset(&path).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat { .. }));
    }

    #[test]
    fn loads_json_records_with_consolidated_producers() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "films.json",
            r#"[
                {"title": "Titane", "director": "Julia Ducournau", "year": 2021,
                 "countries": "France, Belgium", "productoras_consolidadas": "Kazak Productions"},
                {"title": "Anora", "director": "Sean Baker", "year": 2024.0,
                 "countries": null}
            ]"#,
        );

        let ds = load_dataset(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert!(!ds.has_section);
        assert_eq!(ds.producer_column, Some(ProducerColumn::Consolidated));
        assert_eq!(ds.records[0].producers_raw.as_deref(), Some("Kazak Productions"));
        assert_eq!(ds.records[1].year, 2024);
        assert_eq!(ds.records[1].producers_raw, None);
        assert_eq!(ds.countries.len(), 2);
    }

    #[test]
    fn blank_rows_are_skipped_but_keep_numbering() {
        let mut rows = Vec::new();
        push_row(&mut rows, 1, vec![Cell::Integer(2000), Cell::String("Chile".into())]);
        push_row(&mut rows, 2, vec![Cell::Null, Cell::Null]);
        push_row(&mut rows, 3, vec![Cell::Integer(2001), Cell::Null]);
        let numbers: Vec<usize> = rows.iter().map(|r| r.source_row).collect();
        assert_eq!(numbers, vec![1, 3]);
    }

    #[test]
    fn malformed_year_after_blank_row_reports_source_row() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "films.csv",
            "title,director,year,countries\nA,B,2000,France\n,,,\nC,D,unknown,Spain\n",
        );
        match load_dataset(&path).unwrap_err() {
            LoadError::MalformedYear { row, .. } => assert_eq!(row, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn numeric_looking_text_is_not_lost() {
        assert_eq!(guess_cell_type("1917"), Cell::Integer(1917));
        assert_eq!(guess_cell_type("NaN"), Cell::String("NaN".into()));
        assert_eq!(guess_cell_type("  "), Cell::Null);
    }

    #[test]
    fn loads_xlsx_first_sheet() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cannes.xlsx");

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        let headers = [
            " title ",
            "director",
            "year ",
            "countries",
            "section",
            "productoras_normalizadas",
        ];
        for (col, header) in headers.iter().enumerate() {
            sheet.write_string(0, col as u16, *header).unwrap();
        }
        sheet.write_string(1, 0, "Amour").unwrap();
        sheet.write_string(1, 1, "Michael Haneke").unwrap();
        sheet.write_number(1, 2, 2012).unwrap();
        sheet.write_string(1, 3, "France, Austria").unwrap();
        sheet.write_string(1, 4, "Competition").unwrap();
        sheet.write_string(1, 5, "Les Films du Losange").unwrap();
        // Row 2 left empty.
        sheet.write_string(3, 0, "Parasite").unwrap();
        sheet.write_string(3, 1, "Bong Joon-ho").unwrap();
        sheet.write_number(3, 2, 2019.0).unwrap();
        sheet.write_string(3, 3, "south korea").unwrap();
        sheet.write_string(3, 4, "Competition").unwrap();
        // Trailing row holding only whitespace.
        sheet.write_string(4, 3, "   ").unwrap();
        workbook.save(&path).unwrap();

        let ds = load_dataset(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert!(ds.has_section);
        assert_eq!(ds.producer_column, Some(ProducerColumn::Normalized));
        assert_eq!(ds.records[0].title, "Amour");
        let years: Vec<i32> = ds.records.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2012, 2019]);
        assert_eq!(ds.records[1].producers_raw, None);
        assert_eq!(
            ds.countries.names(),
            &["Austria", "France", "South Korea"]
        );
    }

    #[test]
    fn xlsx_malformed_year_reports_sheet_row() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cannes.xlsx");

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "year").unwrap();
        sheet.write_string(0, 1, "countries").unwrap();
        sheet.write_number(1, 0, 2001).unwrap();
        sheet.write_string(1, 1, "Chile").unwrap();
        sheet.write_string(3, 0, "n/a").unwrap();
        sheet.write_string(3, 1, "Peru").unwrap();
        workbook.save(&path).unwrap();

        match load_dataset(&path).unwrap_err() {
            LoadError::MalformedYear { row, value } => {
                assert_eq!(row, 3);
                assert_eq!(value, "n/a");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parquet_small_integers_and_categoricals_are_read() {
        let dir = TempDir::new().unwrap();
        let countries: DictionaryArray<Int32Type> =
            vec![Some("France, USA"), Some("France"), None].into_iter().collect();
        let batch = RecordBatch::try_from_iter(vec![
            (
                "title",
                Arc::new(StringArray::from(vec!["A", "B", "C"])) as ArrayRef,
            ),
            (
                "year",
                Arc::new(Int16Array::from(vec![2020i16, 2021, 2022])) as ArrayRef,
            ),
            ("countries", Arc::new(countries) as ArrayRef),
        ])
        .unwrap();
        let path = write_parquet(&dir, "films.parquet", &batch);

        let ds = load_dataset(&path).unwrap();
        let years: Vec<i32> = ds.records.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2020, 2021, 2022]);
        assert_eq!(ds.countries.names(), &["France", "Usa"]);
        let counts: Vec<usize> = ds.records.iter().map(|r| r.country_count()).collect();
        assert_eq!(counts, vec![2, 1, 0]);
    }

    #[test]
    fn parquet_float_years_and_row_numbers() {
        let dir = TempDir::new().unwrap();
        let batch = RecordBatch::try_from_iter(vec![
            (
                "year",
                Arc::new(Float32Array::from(vec![Some(2019.0f32), None, Some(f32::NAN)]))
                    as ArrayRef,
            ),
            (
                "countries",
                Arc::new(StringArray::from(vec![Some("Japan"), None, Some("Spain")])) as ArrayRef,
            ),
        ])
        .unwrap();
        let path = write_parquet(&dir, "films.parquet", &batch);

        match load_dataset(&path).unwrap_err() {
            LoadError::MalformedYear { row, .. } => assert_eq!(row, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parquet_nested_column_is_an_error() {
        let dir = TempDir::new().unwrap();
        let tags = ListArray::from_iter_primitive::<Int32Type, _, _>(vec![Some(vec![Some(1)])]);
        let batch = RecordBatch::try_from_iter(vec![
            ("year", Arc::new(Int64Array::from(vec![2000])) as ArrayRef),
            ("countries", Arc::new(StringArray::from(vec!["Chile"])) as ArrayRef),
            ("tags", Arc::new(tags) as ArrayRef),
        ])
        .unwrap();
        let path = write_parquet(&dir, "films.parquet", &batch);

        let err = load_dataset(&path).unwrap_err();
        assert!(matches!(err, LoadError::Read(_)));
        assert!(err.to_string().contains("tags"));
    }

    #[test]
    fn arrow_types_normalize_to_cell_types() {
        assert_eq!(normalized_type(&DataType::UInt16), Some(DataType::Int64));
        assert_eq!(normalized_type(&DataType::Float32), Some(DataType::Float64));
        assert_eq!(
            normalized_type(&DataType::Dictionary(
                Box::new(DataType::Int8),
                Box::new(DataType::LargeUtf8)
            )),
            Some(DataType::Utf8)
        );
        assert_eq!(normalized_type(&DataType::Binary), None);
    }
}

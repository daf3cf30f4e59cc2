//! Import and export of records as CSV.
//!
//! The file has the header `id,kind,category,description,amount,date,status`.
//! Amounts are in major units with up to two decimal places, dates are
//! `YYYY-MM-DD` and an empty or missing status means completed.

use std::{
    collections::HashSet,
    io::{Read, Write},
};

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    filters::parse_date,
    money::Amount,
    record::{Category, Record, RecordId, RecordKind, RecordStatus},
};

/// The header row written by [write_records].
pub const HEADER: [&str; 7] = [
    "id",
    "kind",
    "category",
    "description",
    "amount",
    "date",
    "status",
];

/// One row of the CSV file, before validation.
#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    id: RecordId,
    kind: String,
    category: String,
    description: String,
    amount: String,
    date: String,
    #[serde(default)]
    status: String,
}

impl CsvRow {
    fn into_record(self) -> Result<Record, Error> {
        let kind: RecordKind = self.kind.parse()?;
        let category: Category = self.category.parse()?;
        let amount = Amount::parse(&self.amount)?;
        let date = parse_date(&self.date)?;
        let status: RecordStatus = self.status.parse()?;

        let record = Record::new(self.id, kind, amount, category, &self.description, date)?;

        Ok(record.with_status(status))
    }
}

impl From<&Record> for CsvRow {
    fn from(record: &Record) -> Self {
        Self {
            id: record.id(),
            kind: record.kind().as_str().to_owned(),
            category: record.category().name().to_owned(),
            description: record.description().to_owned(),
            amount: record.amount().to_string(),
            date: record.occurred_on().to_string(),
            status: record.status().as_str().to_owned(),
        }
    }
}

/// Read records from CSV text with a header row.
///
/// Every row is validated the same way as [Record::new]. Surrounding
/// whitespace in fields is ignored.
///
/// # Errors
/// This function will return a:
/// - [Error::Csv] if the text is not well-formed CSV or the header is missing,
/// - or [Error::InvalidCsvRecord] with the line number of the first row that
///   is not a valid record, including rows that reuse an earlier ID.
pub fn read_records(reader: impl Read) -> Result<Vec<Record>, Error> {
    let mut reader = ::csv::ReaderBuilder::new()
        .trim(::csv::Trim::All)
        .from_reader(reader);
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    let mut seen_ids = HashSet::new();

    for row in reader.records() {
        let row = row?;
        let line = row.position().map_or(0, |position| position.line());

        let record = row
            .deserialize::<CsvRow>(Some(&headers))
            .map_err(Error::from)
            .and_then(CsvRow::into_record)
            .and_then(|record| {
                if seen_ids.insert(record.id()) {
                    Ok(record)
                } else {
                    Err(Error::DuplicateRecordId(record.id()))
                }
            })
            .map_err(|error| Error::InvalidCsvRecord {
                line,
                source: Box::new(error),
            })?;

        records.push(record);
    }

    tracing::debug!("Read {} records from CSV", records.len());

    Ok(records)
}

/// Write `records` as CSV with a header row.
///
/// The header is written even when there are no records.
///
/// # Errors
/// This function will return an [Error::Csv] or [Error::Io] if writing to
/// `writer` fails.
pub fn write_records<'a>(
    writer: impl Write,
    records: impl IntoIterator<Item = &'a Record>,
) -> Result<(), Error> {
    let mut writer = ::csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    writer.write_record(HEADER)?;

    let mut count = 0;
    for record in records {
        writer.serialize(CsvRow::from(record))?;
        count += 1;
    }

    writer.flush()?;
    tracing::debug!("Wrote {count} records as CSV");

    Ok(())
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        Error, ValidationError,
        money::Amount,
        record::{Category, RecordKind, RecordStatus},
        sample,
    };

    use super::{read_records, write_records};

    #[test]
    fn reads_valid_rows() {
        let text = "\
id,kind,category,description,amount,date,status
1,income,Sales,Sales - Maize,15000,2024-01-10,completed
4, Income ,Stock Returns, Stock Return ,2000.50,2024-01-07,pending
";

        let records = read_records(text.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].category(), Category::Sales);
        assert_eq!(records[0].amount(), Amount::from_major(15_000));
        assert_eq!(records[1].kind(), RecordKind::Income);
        assert_eq!(records[1].description(), "Stock Return");
        assert_eq!(records[1].amount(), Amount::from_minor(200_050));
        assert_eq!(records[1].occurred_on(), date!(2024 - 01 - 07));
        assert_eq!(records[1].status(), RecordStatus::Pending);
    }

    #[test]
    fn status_column_is_optional() {
        let text = "\
id,kind,category,description,amount,date
3,expense,Transport,Transport to Market,450,2024-01-08
";

        let records = read_records(text.as_bytes()).unwrap();

        assert_eq!(records[0].status(), RecordStatus::Completed);
    }

    #[test]
    fn reports_line_of_invalid_category() {
        let text = "\
id,kind,category,description,amount,date,status
1,income,Sales,Sales - Maize,15000,2024-01-10,completed
2,expense,Groceries,Bread,120,2024-01-09,completed
";

        let result = read_records(text.as_bytes());

        match result {
            Err(Error::InvalidCsvRecord { line, source }) => {
                assert_eq!(line, 3);
                assert!(matches!(
                    *source,
                    Error::Validation(ValidationError::UnknownCategory(_))
                ));
            }
            other => panic!("expected InvalidCsvRecord, got {other:?}"),
        }
    }

    #[test]
    fn rejects_negative_amounts() {
        let text = "\
id,kind,category,description,amount,date,status
1,expense,Rent,Rent Payment,-12000,2024-01-06,completed
";

        let result = read_records(text.as_bytes());

        assert!(matches!(
            result,
            Err(Error::InvalidCsvRecord { line: 2, .. })
        ));
    }

    #[test]
    fn rejects_category_of_other_kind() {
        let text = "\
id,kind,category,description,amount,date,status
1,income,Rent,Rent refund,100,2024-01-06,completed
";

        let result = read_records(text.as_bytes());

        match result {
            Err(Error::InvalidCsvRecord { source, .. }) => {
                assert!(matches!(*source, Error::CategoryKindMismatch { .. }));
            }
            other => panic!("expected InvalidCsvRecord, got {other:?}"),
        }
    }

    #[test]
    fn rejects_duplicate_ids() {
        let text = "\
id,kind,category,description,amount,date,status
1,income,Sales,Sales - Maize,15000,2024-01-10,completed
1,income,Sales,Sales - Beans,5000,2024-01-11,completed
";

        let result = read_records(text.as_bytes());

        match result {
            Err(Error::InvalidCsvRecord { line, source }) => {
                assert_eq!(line, 3);
                assert!(matches!(*source, Error::DuplicateRecordId(1)));
            }
            other => panic!("expected InvalidCsvRecord, got {other:?}"),
        }
    }

    #[test]
    fn exported_records_can_be_imported() {
        let records = sample::records().unwrap();
        let mut buffer = Vec::new();

        write_records(&mut buffer, &records).unwrap();
        let imported = read_records(buffer.as_slice()).unwrap();

        assert_eq!(imported, records);
    }

    #[test]
    fn writes_header_and_rows() {
        let records = sample::records().unwrap();
        let mut buffer = Vec::new();

        write_records(&mut buffer, records.iter().take(1)).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert_eq!(
            text,
            "id,kind,category,description,amount,date,status\n\
             1,income,Sales,Sales - Maize,15000.00,2024-01-10,completed\n"
        );
    }

    #[test]
    fn writes_header_without_records() {
        let mut buffer = Vec::new();

        write_records(&mut buffer, []).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "id,kind,category,description,amount,date,status\n"
        );
    }
}

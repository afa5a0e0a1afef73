use crate::errors::{AppError, AppResult};
use crate::models::ShiftRecord;
use std::io::Write;

/// Column order of the export; matches the serialized field names.
pub const CSV_HEADERS: [&str; 8] = [
    "employeeName",
    "date",
    "propertyName",
    "checkIn",
    "checkOut",
    "timeWorked",
    "noOfUnits",
    "avgSecPerUnit",
];

/// Write one CSV row per record, preceded by the header row.
///
/// The header is written explicitly so that an empty selection still
/// produces a valid file.
pub fn write_csv<W: Write>(records: &[ShiftRecord], out: W) -> AppResult<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(out);

    wtr.write_record(CSV_HEADERS)?;
    for record in records {
        wtr.serialize(record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// CSV text for the given records.
pub fn to_csv_string(records: &[ShiftRecord]) -> AppResult<String> {
    let mut buf = Vec::new();
    write_csv(records, &mut buf)?;
    String::from_utf8(buf).map_err(|e| AppError::Export(format!("CSV is not UTF-8: {e}")))
}

use crate::errors::AppResult;
use crate::models::ShiftRecord;
use std::io::Write;

/// Write the records as a pretty-printed JSON array.
pub fn write_json<W: Write>(records: &[ShiftRecord], mut out: W) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut out, records)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

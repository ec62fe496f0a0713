use crate::api::Departure;
use crate::constants::CSV_HEADER;
use crate::error::Result;
use csv::{Terminator, WriterBuilder};
use std::path::Path;

/// Creates or truncates `path` and writes the header plus one row per departure.
pub fn write_csv<'a>(
    departures: impl IntoIterator<Item = &'a Departure>,
    path: impl AsRef<Path>,
) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_path(path)?;

    writer.write_record(CSV_HEADER)?;
    for departure in departures {
        writer.write_record([
            &departure.name,
            &departure.start_date,
            &departure.finish_date,
            &departure.category,
        ])?;
    }
    writer.flush()?;
    Ok(())
}

use std::path::Path;

use anyhow::{Context, Result};
use csv_async::AsyncWriterBuilder;
use serde::Serialize;
use tokio::fs::File as AsyncFile;
use tokio::io::BufWriter;

/// Renders a header line plus one line per row. The header is always written,
/// even for an empty table.
pub fn to_csv_string<'a, T, I>(columns: &[&str], rows: I) -> Result<String>
where
    T: Serialize + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(columns).context("Failed to write CSV header")?;
    for row in rows {
        writer.serialize(row).context("Failed to serialize CSV row")?;
    }

    let bytes = writer.into_inner().context("Failed to flush CSV buffer")?;
    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}

/// Writes the table to `path`, replacing any existing file.
pub async fn write_csv_file<'a, T, I>(path: &Path, columns: &[&str], rows: I) -> Result<usize>
where
    T: Serialize + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let file_out = AsyncFile::create(path)
        .await
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let writer = BufWriter::new(file_out);
    let mut csv_writer = AsyncWriterBuilder::new()
        .has_headers(false)
        .create_serializer(writer);

    csv_writer
        .serialize(columns)
        .await
        .context("Failed to write CSV header")?;

    let mut written = 0;
    for row in rows {
        csv_writer
            .serialize(row)
            .await
            .with_context(|| format!("Failed to write row {} of {}", written + 1, path.display()))?;
        written += 1;
    }

    csv_writer
        .flush()
        .await
        .with_context(|| format!("Failed to flush {}", path.display()))?;

    Ok(written)
}

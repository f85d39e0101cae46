use crate::error::ExportError;
use crate::model::Category;
use crate::session::HistoryLog;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

pub fn export_csv<P: AsRef<Path>>(history: &HistoryLog, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    write_csv(history, file)?;
    info!(path = %path_ref.display(), entries = history.len(), "exported history to CSV");
    Ok(())
}

/// Writes one row per history entry, most recent first.
pub fn write_csv<W: Write>(history: &HistoryLog, writer: W) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(writer);

    let mut header = vec!["Entry", "Country", "Total (t)", "Trees Needed"];
    header.extend(Category::ALL.iter().map(|c| c.as_str()));
    writer.write_record(&header)?;

    for (i, result) in history.all().enumerate() {
        let mut row = vec![
            (i + 1).to_string(),
            result.country().to_string(),
            result.total_emission_tonnes().to_string(),
            result.trees_needed().to_string(),
        ];
        row.extend(result.breakdown().iter().map(|(_, v)| v.to_string()));
        writer.write_record(&row)?;
    }

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    Ok(())
}

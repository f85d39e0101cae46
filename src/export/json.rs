use crate::error::ExportError;
use crate::model::CalculationResult;
use crate::session::HistoryLog;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

#[derive(Serialize)]
struct HistoryEntry<'a> {
    entry: usize,
    #[serde(flatten)]
    result: &'a CalculationResult,
}

pub fn export_json<P: AsRef<Path>>(history: &HistoryLog, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let json = to_json(history)?;

    let mut file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    file.write_all(json.as_bytes())
        .map_err(|e| ExportError::WriteError {
            message: e.to_string(),
        })?;

    info!(path = %path_ref.display(), entries = history.len(), "exported history to JSON");
    Ok(())
}

/// Pretty JSON array of history entries, most recent first, numbered from 1.
pub fn to_json(history: &HistoryLog) -> Result<String, ExportError> {
    let entries: Vec<HistoryEntry> = history
        .all()
        .enumerate()
        .map(|(i, result)| HistoryEntry {
            entry: i + 1,
            result,
        })
        .collect();

    Ok(serde_json::to_string_pretty(&entries)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::EmissionModel;
    use crate::model::RawInputs;
    use crate::session::Session;
    use pretty_assertions::assert_eq;

    #[test]
    fn entries_are_numbered_newest_first() {
        let model = EmissionModel::builtin();
        let mut session = Session::start(&model);
        session.calculate("India", &RawInputs::default()).unwrap();
        let commute = RawInputs {
            distance_km: 10.0,
            ..RawInputs::default()
        };
        session.calculate("India", &commute).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&to_json(session.history()).unwrap()).unwrap();

        assert_eq!(json[0]["entry"], 1);
        assert_eq!(json[0]["trees_needed"], 25);
        assert_eq!(json[0]["breakdown"]["Transportation"], 0.51);
        assert_eq!(json[1]["entry"], 2);
        assert_eq!(json[1]["country"], "India");
    }

    #[test]
    fn empty_history_is_empty_array() {
        assert_eq!(to_json(&HistoryLog::new()).unwrap(), "[]");
    }
}

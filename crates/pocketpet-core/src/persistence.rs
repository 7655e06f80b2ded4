//! Snapshot capture and restore.
//!
//! The snapshot is a flat JSON record (timestamp, kind, name, age, maturity
//! code, parameter map), written and read through generic `Write`/`Read` so
//! the storage location stays the caller's business. File-path helpers cover
//! the common single-save-slot case.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::catalog::Catalog;
use crate::components::{Creature, Maturity, ParameterKind, UnknownParameter};
use crate::systems::{CatchUpError, CatchUpReport};

/// Persisted point-in-time record of a creature.
///
/// Exactly one snapshot is authoritative at any time: the most recently
/// captured one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Real-world save instant, seconds since the Unix epoch.
    pub timestamp: f64,
    /// Species identifier, resolved against the catalog on load.
    pub kind: String,
    pub name: String,
    pub age: u32,
    /// Integer stage code, see [`Maturity::code`].
    pub maturity: u8,
    /// Parameter-kind identifier to current value.
    pub params: BTreeMap<String, f32>,
}

/// Errors on the save/load path.
#[derive(Debug)]
pub enum SaveError {
    /// No snapshot record exists.
    Missing,
    Io(std::io::Error),
    /// The record could not be parsed into the snapshot shape, or parsed
    /// but violates it (bad stage code, unrecognized parameter key).
    Corrupt(String),
    /// The snapshot's species identifier matches no catalog entry.
    UnknownKind(String),
    /// The snapshot carries a parameter the resolved species does not define.
    Param(UnknownParameter),
    /// Catch-up hit its defensive sweep ceiling during restore.
    CatchUpOverrun(CatchUpReport),
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveError::Missing => write!(f, "no saved creature exists"),
            SaveError::Io(e) => write!(f, "IO error: {}", e),
            SaveError::Corrupt(detail) => write!(f, "corrupt save: {}", detail),
            SaveError::UnknownKind(kind) => {
                write!(f, "save references unknown species '{}'", kind)
            }
            SaveError::Param(e) => write!(f, "{}", e),
            SaveError::CatchUpOverrun(report) => write!(
                f,
                "catch-up overran its sweep ceiling ({} sweeps)",
                report.sweeps
            ),
        }
    }
}

impl std::error::Error for SaveError {}

impl From<std::io::Error> for SaveError {
    fn from(e: std::io::Error) -> Self {
        SaveError::Io(e)
    }
}

impl From<serde_json::Error> for SaveError {
    fn from(e: serde_json::Error) -> Self {
        SaveError::Corrupt(e.to_string())
    }
}

impl From<UnknownParameter> for SaveError {
    fn from(e: UnknownParameter) -> Self {
        SaveError::Param(e)
    }
}

impl From<CatchUpError> for SaveError {
    fn from(e: CatchUpError) -> Self {
        match e {
            CatchUpError::Overrun(report) => SaveError::CatchUpOverrun(report),
            CatchUpError::Param(p) => SaveError::Param(p),
        }
    }
}

/// Capture the creature's current state at the given save instant.
pub fn capture(creature: &Creature, timestamp: f64) -> Snapshot {
    let params = creature
        .params
        .iter()
        .map(|(kind, p)| (kind.as_str().to_string(), p.value))
        .collect();
    Snapshot {
        timestamp,
        kind: creature.kind.name.clone(),
        name: creature.name.clone(),
        age: creature.age,
        maturity: creature.maturity.code(),
        params,
    }
}

/// Write a snapshot record to a writer.
pub fn write_snapshot<W: Write>(writer: W, snapshot: &Snapshot) -> Result<(), SaveError> {
    serde_json::to_writer(writer, snapshot)?;
    Ok(())
}

/// Read a snapshot record from a reader.
pub fn read_snapshot<R: Read>(reader: R) -> Result<Snapshot, SaveError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Whether a save slot exists at the given path.
pub fn save_exists(path: &Path) -> bool {
    path.is_file()
}

/// Write a snapshot to the save slot at `path`.
pub fn write_snapshot_file(path: &Path, snapshot: &Snapshot) -> Result<(), SaveError> {
    let file = File::create(path)?;
    write_snapshot(file, snapshot)?;
    log::info!("saved {} ({}) to {}", snapshot.name, snapshot.kind, path.display());
    Ok(())
}

/// Read the save slot at `path`; a missing file is [`SaveError::Missing`].
pub fn read_snapshot_file(path: &Path) -> Result<Snapshot, SaveError> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(SaveError::Missing),
        Err(e) => return Err(SaveError::Io(e)),
    };
    read_snapshot(file)
}

/// Rebuild a creature from a snapshot, without catch-up.
///
/// The species comes from the catalog; parameter values land through the
/// store's clamp. Unknown species fail with `UnknownKind`; a stage code or
/// parameter key outside the contract fails with `Corrupt`.
pub fn creature_from_snapshot(
    snapshot: &Snapshot,
    catalog: &Catalog,
) -> Result<Creature, SaveError> {
    let kind = catalog
        .get(&snapshot.kind)
        .ok_or_else(|| SaveError::UnknownKind(snapshot.kind.clone()))?;
    let maturity = Maturity::from_code(snapshot.maturity)
        .ok_or_else(|| SaveError::Corrupt(format!("maturity code {}", snapshot.maturity)))?;

    let mut creature = Creature::new(kind.clone(), snapshot.name.clone());
    creature.age = snapshot.age;
    creature.maturity = maturity;
    for (key, value) in &snapshot.params {
        let param_kind = ParameterKind::parse(key)
            .ok_or_else(|| SaveError::Corrupt(format!("parameter key '{}'", key)))?;
        if !creature.params.defines(param_kind) {
            return Err(SaveError::Corrupt(format!(
                "parameter '{}' is not defined by species '{}'",
                key, snapshot.kind
            )));
        }
        creature.params.restore(param_kind, *value)?;
    }
    Ok(creature)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creature() -> Creature {
        let catalog = Catalog::builtin();
        Creature::new(catalog.get("cat").unwrap().clone(), "Misha")
    }

    #[test]
    fn test_roundtrip_reproduces_state_exactly() {
        let mut c = creature();
        c.age = 7;
        c.maturity = Maturity::Child;
        c.params.adjust_by(ParameterKind::Mood, -33.5).unwrap();

        let snapshot = capture(&c, 1_700_000_000.0);
        let mut buffer = Vec::new();
        write_snapshot(&mut buffer, &snapshot).unwrap();
        let reread = read_snapshot(&buffer[..]).unwrap();
        assert_eq!(reread, snapshot);

        let restored = creature_from_snapshot(&reread, &Catalog::builtin()).unwrap();
        assert_eq!(restored.age, 7);
        assert_eq!(restored.maturity, Maturity::Child);
        for (kind, p) in c.params.iter() {
            assert_eq!(restored.params.get(kind).unwrap(), p.value);
        }
    }

    #[test]
    fn test_unknown_kind_aborts_load() {
        let mut snapshot = capture(&creature(), 0.0);
        snapshot.kind = "dragon".into();
        let err = creature_from_snapshot(&snapshot, &Catalog::builtin()).unwrap_err();
        assert!(matches!(err, SaveError::UnknownKind(k) if k == "dragon"));
    }

    #[test]
    fn test_bad_maturity_code_is_corrupt() {
        let mut snapshot = capture(&creature(), 0.0);
        snapshot.maturity = 17;
        let err = creature_from_snapshot(&snapshot, &Catalog::builtin()).unwrap_err();
        assert!(matches!(err, SaveError::Corrupt(_)));
    }

    #[test]
    fn test_unrecognized_param_key_is_corrupt() {
        let mut snapshot = capture(&creature(), 0.0);
        snapshot.params.insert("charisma".into(), 50.0);
        let err = creature_from_snapshot(&snapshot, &Catalog::builtin()).unwrap_err();
        assert!(matches!(err, SaveError::Corrupt(_)));
    }

    #[test]
    fn test_garbage_bytes_are_corrupt() {
        let err = read_snapshot(&b"not json"[..]).unwrap_err();
        assert!(matches!(err, SaveError::Corrupt(_)));
    }

    #[test]
    fn test_out_of_range_values_clamp_on_restore() {
        let mut snapshot = capture(&creature(), 0.0);
        snapshot.params.insert("mood".into(), 900.0);
        let restored = creature_from_snapshot(&snapshot, &Catalog::builtin()).unwrap();
        assert_eq!(restored.params.get(ParameterKind::Mood).unwrap(), 100.0);
    }
}

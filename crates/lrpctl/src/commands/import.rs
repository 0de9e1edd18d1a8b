//! Fixture importer.
//!
//! A fixture is one JSON object mapping store keys to records. Every
//! record is decoded with the same codec the queries use and checked
//! against the identity encoded in its key before anything is written.

use std::path::Path;

use anyhow::{Context, bail};
use lrpgrid_bbs::schema::{SchemaKey, parse_key};
use lrpgrid_models::{decode_actual_lrp, decode_desired_lrp};
use lrpgrid_store::RedbStore;
use tracing::info;

pub fn import(store: &RedbStore, fixture: &Path) -> anyhow::Result<String> {
    let content = std::fs::read_to_string(fixture)
        .with_context(|| format!("failed to read fixture {}", fixture.display()))?;
    let entries = prepare_entries(&content)?;
    let count = store.set_many(entries)?;
    info!(count, fixture = %fixture.display(), "fixture imported");
    Ok(format!("imported {count} records"))
}

/// Validate a fixture and render it to `(key, payload)` pairs.
pub fn prepare_entries(content: &str) -> anyhow::Result<Vec<(String, Vec<u8>)>> {
    let records: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(content).context("fixture must be a JSON object")?;

    let mut entries = Vec::with_capacity(records.len());
    for (key, record) in records {
        let Some(location) = parse_key(&key) else {
            bail!("{key} is not a desired or actual lrp key");
        };
        let payload = serde_json::to_vec(&record)?;

        let payload = match &location {
            SchemaKey::Desired { process_guid } => {
                let lrp = decode_desired_lrp(&key, &payload)?;
                if &lrp.process_guid != process_guid {
                    bail!("{key} holds process_guid {}", lrp.process_guid);
                }
                lrp.to_json()?
            }
            SchemaKey::Actual {
                process_guid,
                index,
                instance_guid,
            } => {
                let lrp = decode_actual_lrp(&key, &payload)?;
                if &lrp.process_guid != process_guid
                    || lrp.index != *index
                    || &lrp.instance_guid != instance_guid
                {
                    bail!(
                        "{key} holds {}/{}/{}",
                        lrp.process_guid,
                        lrp.index,
                        lrp.instance_guid
                    );
                }
                lrp.to_json()?
            }
        };
        entries.push((location.path(), payload));
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lrpgrid_bbs::LrpBbs;
    use std::sync::Arc;

    const FIXTURE: &str = r#"{
        "desired/web": {"process_guid": "web", "instances": 2, "stack": "lucid64"},
        "actual/web/0/a": {"process_guid": "web", "instance_guid": "a", "index": 0, "state": "RUNNING"},
        "/actual/web/1/b/": {"process_guid": "web", "instance_guid": "b", "index": 1, "state": "CLAIMED"}
    }"#;

    #[test]
    fn prepare_normalizes_keys() {
        let entries = prepare_entries(FIXTURE).unwrap();
        let mut keys: Vec<_> = entries.iter().map(|(k, _)| k.as_str()).collect();
        keys.sort();
        assert_eq!(keys, ["actual/web/0/a", "actual/web/1/b", "desired/web"]);
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = prepare_entries(r#"{"tasks/t1": {}}"#).unwrap_err();
        assert!(err.to_string().contains("tasks/t1"));
    }

    #[test]
    fn rejects_identity_mismatch() {
        let err = prepare_entries(
            r#"{"actual/web/3/a": {"process_guid": "web", "instance_guid": "a", "index": 0, "state": "RUNNING"}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("actual/web/3/a"));

        let err = prepare_entries(
            r#"{"desired/api": {"process_guid": "web", "instances": 1, "stack": "s"}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("desired/api"));
    }

    #[test]
    fn rejects_malformed_record() {
        let err = prepare_entries(
            r#"{"actual/web/0/a": {"process_guid": "web", "instance_guid": "a", "index": 0, "state": "LOST"}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("actual/web/0/a"));
    }

    #[test]
    fn bundled_fixture_is_valid() {
        let entries = prepare_entries(include_str!("../../../../fixtures/cluster.json")).unwrap();
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn imported_fixture_is_queryable() {
        let dir = tempfile::tempdir().unwrap();
        let fixture = dir.path().join("cluster.json");
        std::fs::write(&fixture, FIXTURE).unwrap();

        let store = RedbStore::open(&dir.path().join("state.redb")).unwrap();
        let out = import(&store, &fixture).unwrap();
        assert_eq!(out, "imported 3 records");

        let bbs = LrpBbs::new(Arc::new(store));
        assert_eq!(bbs.get_desired_lrp("web").unwrap().instances, 2);
        assert_eq!(bbs.list_running_actual_lrps_for_process("web").unwrap().len(), 1);
    }
}

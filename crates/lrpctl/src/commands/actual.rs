use lrpgrid_bbs::LrpBbs;

pub fn list(bbs: &LrpBbs, process_guid: Option<&str>, running: bool) -> anyhow::Result<String> {
    let lrps = match (process_guid, running) {
        (Some(guid), true) => bbs.list_running_actual_lrps_for_process(guid)?,
        (Some(guid), false) => bbs.list_actual_lrps_for_process(guid)?,
        (None, true) => bbs.list_running_actual_lrps()?,
        (None, false) => bbs.list_actual_lrps()?,
    };
    Ok(serde_json::to_string_pretty(&lrps)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lrpgrid_models::ActualLrp;
    use lrpgrid_store::MemoryStore;
    use std::sync::Arc;

    fn bbs() -> LrpBbs {
        let store = MemoryStore::new();
        for (key, guid, index, instance, state) in [
            ("actual/web/0/a", "web", 0, "a", "RUNNING"),
            ("actual/web/1/b", "web", 1, "b", "CRASHED"),
            ("actual/api/0/c", "api", 0, "c", "RUNNING"),
        ] {
            let value = serde_json::json!({
                "process_guid": guid,
                "instance_guid": instance,
                "index": index,
                "state": state
            });
            store.set(key, value.to_string()).unwrap();
        }
        LrpBbs::new(Arc::new(store))
    }

    fn parse(out: &str) -> Vec<ActualLrp> {
        serde_json::from_str(out).unwrap()
    }

    #[test]
    fn flag_combinations_select_query() {
        let bbs = bbs();
        assert_eq!(parse(&list(&bbs, None, false).unwrap()).len(), 3);
        assert_eq!(parse(&list(&bbs, None, true).unwrap()).len(), 2);
        assert_eq!(parse(&list(&bbs, Some("web"), false).unwrap()).len(), 2);

        let running_web = parse(&list(&bbs, Some("web"), true).unwrap());
        assert_eq!(running_web.len(), 1);
        assert_eq!(running_web[0].instance_guid, "a");
    }

    #[test]
    fn unknown_process_prints_empty_array() {
        let out = list(&bbs(), Some("nope"), false).unwrap();
        assert!(parse(&out).is_empty());
    }
}

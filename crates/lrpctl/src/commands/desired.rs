use lrpgrid_bbs::LrpBbs;

pub fn list(bbs: &LrpBbs) -> anyhow::Result<String> {
    let lrps = bbs.list_desired_lrps()?;
    Ok(serde_json::to_string_pretty(&lrps)?)
}

pub fn get(bbs: &LrpBbs, process_guid: &str) -> anyhow::Result<String> {
    let lrp = match bbs.get_desired_lrp(process_guid) {
        Ok(lrp) => lrp,
        Err(e) if e.is_not_found() => {
            return Err(anyhow::Error::new(e).context(format!("no desired lrp for {process_guid}")));
        }
        Err(e) => return Err(e.into()),
    };
    Ok(serde_json::to_string_pretty(&lrp)?)
}

use crate::parse::split_fields;
use crate::progress::Throughput;
use crate::util;
use anyhow::bail;
use rustc_hash::FxHashMap;
use std::io::BufRead;
use std::path::Path;
use tracing::{info, warn};

pub type IdMap = FxHashMap<String, u64>;

/// Reads a `<identifier>,<internal id>` file into memory. A later record for
/// the same identifier overwrites the earlier one. Returns the map and the
/// number of lines loaded (overwrites included).
pub fn load_mapping(path: &Path) -> anyhow::Result<(IdMap, u64)> {
    let reader = util::open_reader(path)?;

    let mut map = IdMap::default();
    let mut progress = Throughput::new("id pairs");

    for line in reader.lines() {
        let line = line?;
        let mut fields = split_fields(&line, ',');
        if fields.len() == 2 {
            // a mapping file with a non-numeric id column is broken input,
            // not a line to skip
            let id: u64 = match fields[1].parse() {
                Ok(id) => id,
                Err(_) => bail!(
                    "invalid internal id '{}' in mapping file {}",
                    fields[1],
                    path.display()
                ),
            };
            map.insert(fields.swap_remove(0), id);
            progress.tick();
        } else if !line.is_empty() {
            warn!(
                "skipping mapping line '{}': expected <identifier>,<id>",
                line
            );
        }
    }

    let loaded = progress.finish();
    info!(
        "id mapping {} holds {} identifiers ({} lines loaded)",
        path.display(),
        map.len(),
        loaded
    );

    Ok((map, loaded))
}

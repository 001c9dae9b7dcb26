use crate::mapping::IdMap;
use crate::parse::split_fields;
use crate::progress::Throughput;
use crate::util;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{info, warn};

pub struct TranslateReport {
    pub processed: u64,
    pub written: u64,
    pub discarded: u64,
    pub malformed: u64,
}

/// Streams `<identifier1>,<identifier2>` lines, resolving column 1 against
/// `from_map` and column 2 against `to_map`, and writes `<id1> <id2>` lines
/// in input order. The single-map variant passes the same map twice. Edges
/// with an unresolved endpoint are dropped whole, never half-translated.
pub fn translate_edges(
    input: &Path,
    output: &Path,
    from_map: &IdMap,
    to_map: &IdMap,
) -> anyhow::Result<TranslateReport> {
    let reader = util::open_reader(input)?;
    let mut writer = util::create_writer(output)?;

    let mut progress = Throughput::new("edges");
    let mut written: u64 = 0;
    let mut discarded: u64 = 0;
    let mut malformed: u64 = 0;

    for line in reader.lines() {
        let line = line?;
        let fields = split_fields(&line, ',');
        if fields.len() == 2 {
            match (from_map.get(&fields[0]), to_map.get(&fields[1])) {
                (Some(id1), Some(id2)) => {
                    writeln!(writer, "{} {}", id1, id2)?;
                    written += 1;
                }
                _ => {
                    discarded += 1;
                    warn!("skipping edge '{}': endpoint not in the id mapping", line);
                }
            }
            progress.tick();
        } else if !line.is_empty() {
            malformed += 1;
            warn!(
                "skipping edge line '{}': expected <identifier>,<identifier>",
                line
            );
        }
    }
    // all writes must be durable before the process exits
    writer.flush()?;

    let processed = progress.finish();
    info!(
        "discarded {} of {} edges from {} for endpoints missing from the id mapping",
        discarded,
        processed,
        input.display()
    );

    Ok(TranslateReport {
        processed,
        written,
        discarded,
        malformed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn map_of(entries: &[(&str, u64)]) -> IdMap {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn write_edges(dir: &TempDir, contents: &str) -> (PathBuf, PathBuf) {
        let input = dir.path().join("edges.csv");
        let output = dir.path().join("edges.txt");
        std::fs::write(&input, contents).unwrap();
        (input, output)
    }

    #[test]
    fn discards_edges_with_unmapped_endpoints() {
        let dir = TempDir::new().unwrap();
        let (input, output) = write_edges(&dir, "a,b\nc,b\na,c\n");
        let map = map_of(&[("a", 1), ("b", 3)]);

        let report = translate_edges(&input, &output, &map, &map).unwrap();

        assert_eq!(std::fs::read_to_string(&output).unwrap(), "1 3\n");
        assert_eq!(report.processed, 3);
        assert_eq!(report.written, 1);
        assert_eq!(report.discarded, 2);
        assert_eq!(report.malformed, 0);
    }

    #[test]
    fn fully_mapped_input_round_trips_in_order() {
        let dir = TempDir::new().unwrap();
        let (input, output) = write_edges(&dir, "b,a\na,b\nb,c\n");
        let map = map_of(&[("a", 1), ("b", 2), ("c", 3)]);

        let report = translate_edges(&input, &output, &map, &map).unwrap();

        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "2 1\n1 2\n2 3\n"
        );
        assert_eq!(report.processed, 3);
        assert_eq!(report.written, 3);
        assert_eq!(report.discarded, 0);
    }

    #[test]
    fn dual_maps_translate_columns_independently() {
        let dir = TempDir::new().unwrap();
        let (input, output) = write_edges(&dir, "x,y\ny,x\n");
        let from_map = map_of(&[("x", 10)]);
        let to_map = map_of(&[("y", 20)]);

        let report = translate_edges(&input, &output, &from_map, &to_map).unwrap();

        // y,x fails both column lookups and is discarded, not cross-resolved
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "10 20\n");
        assert_eq!(report.processed, 2);
        assert_eq!(report.written, 1);
        assert_eq!(report.discarded, 1);
    }

    #[test]
    fn malformed_lines_are_counted_apart_from_processed() {
        let dir = TempDir::new().unwrap();
        let (input, output) = write_edges(&dir, "a,b\njunk\na,b,c\n\na,b\n");
        let map = map_of(&[("a", 1), ("b", 2)]);

        let report = translate_edges(&input, &output, &map, &map).unwrap();

        assert_eq!(std::fs::read_to_string(&output).unwrap(), "1 2\n1 2\n");
        assert_eq!(report.processed, 2);
        assert_eq!(report.written, 2);
        assert_eq!(report.discarded, 0);
        assert_eq!(report.malformed, 2);
    }
}

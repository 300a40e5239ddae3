//! Writes the two partition lists to disk.
//!
//! One display name per line. Line breaks inside a name are folded into
//! spaces; names left blank never reach the files.

use std::path::{Path, PathBuf};

use anyhow::Context;
use platscan_probe::Partition;
use platscan_steam_api::Platform;

/// Destination files for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub supported: PathBuf,
    pub unsupported: PathBuf,
}

impl OutputPaths {
    /// `<platform>_games.txt` and `non_<platform>_games.txt` inside `dir`.
    pub fn for_platform(dir: &Path, platform: Platform) -> Self {
        Self {
            supported: dir.join(format!("{platform}_games.txt")),
            unsupported: dir.join(format!("non_{platform}_games.txt")),
        }
    }
}

/// Writes both lists, creating the output directory if needed.
///
/// Existing files are truncated.
pub fn write_partition(paths: &OutputPaths, partition: &Partition) -> anyhow::Result<()> {
    for path in [&paths.supported, &paths.unsupported] {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }

    write_list(&paths.supported, partition.supported())?;
    write_list(&paths.unsupported, partition.unsupported())?;

    tracing::info!(
        supported = %paths.supported.display(),
        unsupported = %paths.unsupported.display(),
        "lists written"
    );
    Ok(())
}

fn write_list(path: &Path, labels: &[String]) -> anyhow::Result<()> {
    std::fs::write(path, render(labels))
        .with_context(|| format!("failed to write {}", path.display()))
}

fn render(labels: &[String]) -> String {
    let mut out = String::new();
    for line in labels.iter().filter_map(|l| single_line(l)) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Joins the non-blank pieces of a multi-line name with single spaces.
fn single_line(label: &str) -> Option<String> {
    let line = label
        .split(['\r', '\n'])
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    (!line.is_empty()).then_some(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use platscan_probe::ProbeOutcome;

    fn partition_of(outcomes: &[ProbeOutcome]) -> Partition {
        let mut p = Partition::new();
        for o in outcomes {
            p.place(o);
        }
        p
    }

    #[test]
    fn file_names_follow_platform() {
        let paths = OutputPaths::for_platform(Path::new("out"), Platform::Mac);
        assert_eq!(paths.supported, PathBuf::from("out/mac_games.txt"));
        assert_eq!(paths.unsupported, PathBuf::from("out/non_mac_games.txt"));

        let paths = OutputPaths::for_platform(Path::new("."), Platform::Linux);
        assert!(paths.supported.ends_with("linux_games.txt"));
        assert!(paths.unsupported.ends_with("non_linux_games.txt"));
    }

    #[test]
    fn render_one_name_per_line() {
        let labels = vec!["A".to_string(), String::new(), "B".to_string()];
        assert_eq!(render(&labels), "A\nB\n");
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn line_breaks_in_names_folded() {
        assert_eq!(single_line("Foo\r\n\r\nBar").as_deref(), Some("Foo Bar"));
        assert_eq!(single_line("Plain").as_deref(), Some("Plain"));
        assert_eq!(single_line(" \n\t\n"), None);
    }

    #[test]
    fn multiline_name_written_on_one_line() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = OutputPaths::for_platform(tmp.path(), Platform::Mac);
        let partition = partition_of(&[
            ProbeOutcome::resolved("Foo\n\nBar", true),
            ProbeOutcome::resolved("\n \n", true),
            ProbeOutcome::resolved("Baz", true),
        ]);

        write_partition(&paths, &partition).unwrap();

        let supported = std::fs::read_to_string(&paths.supported).unwrap();
        assert_eq!(supported, "Foo Bar\nBaz\n");
        assert_eq!(supported.lines().count(), 2);
    }

    #[test]
    fn writes_both_files() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = OutputPaths::for_platform(&tmp.path().join("nested"), Platform::Mac);
        let partition = partition_of(&[
            ProbeOutcome::resolved("Portal", true),
            ProbeOutcome::resolved("Halo", false),
            ProbeOutcome::resolved("Dota 2", true),
        ]);

        write_partition(&paths, &partition).unwrap();

        let supported = std::fs::read_to_string(&paths.supported).unwrap();
        let unsupported = std::fs::read_to_string(&paths.unsupported).unwrap();
        assert_eq!(supported, "Portal\nDota 2\n");
        assert_eq!(unsupported, "Halo\n");
    }

    #[test]
    fn empty_partition_writes_empty_files() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = OutputPaths::for_platform(tmp.path(), Platform::Windows);

        write_partition(&paths, &Partition::new()).unwrap();

        assert_eq!(std::fs::read_to_string(&paths.supported).unwrap(), "");
        assert_eq!(std::fs::read_to_string(&paths.unsupported).unwrap(), "");
    }

    #[test]
    fn overwrites_previous_run() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = OutputPaths::for_platform(tmp.path(), Platform::Mac);
        std::fs::write(&paths.supported, "Stale\nEntries\n").unwrap();

        let partition = partition_of(&[ProbeOutcome::resolved("Fresh", true)]);
        write_partition(&paths, &partition).unwrap();

        assert_eq!(
            std::fs::read_to_string(&paths.supported).unwrap(),
            "Fresh\n"
        );
    }
}

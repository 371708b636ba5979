//! End-to-end tests against on-disk datasets

use std::fs;
use std::path::Path;

use linux2bsd::{
    DataSource, Direction, Error, PatternSyntax, Query, dedup_results, load_entries,
    match_entries, translate, truncate,
};
use tempfile::TempDir;

fn dataset(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, content) in files {
        fs::write(dir.path().join(name), content).unwrap();
    }
    dir
}

fn source(dir: &Path) -> DataSource {
    DataSource::Directory(dir.to_path_buf())
}

fn results(source: &DataSource, pattern: &str, direction: Direction) -> Vec<String> {
    let query = Query::new(pattern, PatternSyntax::Shell).unwrap();
    translate(source, &query, direction, 10)
        .unwrap()
        .into_iter()
        .map(|c| c.result)
        .collect()
}

#[test]
fn test_package_managers_both_directions() {
    let dir = dataset(&[("packages.csv", "# linux, bsd\napt, pkg\nrpm, pkg\nyum, pkg\n")]);
    let source = source(dir.path());

    assert_eq!(results(&source, "apt", Direction::Bsd)[0], "pkg");
    assert_eq!(
        results(&source, "pkg", Direction::Linux),
        vec!["apt", "rpm", "yum"]
    );
}

#[test]
fn test_round_trip_contains_source_term() {
    let dir = dataset(&[
        ("network.csv", "ss, sockstat(1)\nip addr, ifconfig(8)\n"),
        ("users.csv", "whoami, whoami(1)\n"),
    ]);
    let source = source(dir.path());

    for term in ["ss", "ip addr", "whoami"] {
        let forward = results(&source, term, Direction::Bsd);
        let back = results(&source, &forward[0], Direction::Linux);
        assert!(back.contains(&term.to_string()), "{term} not in {back:?}");
    }
}

#[test]
fn test_malformed_line_fails_whole_load() {
    let dir = dataset(&[
        ("good.csv", "apt, pkg\n"),
        ("bad.csv", "ls, ls\nonlyonefield\n"),
    ]);

    let err = load_entries(&source(dir.path()), false).unwrap_err();
    match err {
        Error::DataFormat {
            file,
            line_number,
            line,
        } => {
            assert!(file.ends_with("bad.csv"));
            assert_eq!(line_number, 2);
            assert_eq!(line, "onlyonefield");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_non_csv_files_ignored() {
    let dir = dataset(&[("packages.csv", "apt, pkg\n"), ("README.md", "not, data, here\n")]);
    let entries = load_entries(&source(dir.path()), false).unwrap();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_empty_directory_has_no_entries() {
    let dir = dataset(&[]);
    assert!(load_entries(&source(dir.path()), true).unwrap().is_empty());
    assert!(results(&source(dir.path()), "apt", Direction::Bsd).is_empty());
}

#[test]
fn test_missing_directory_is_io_error() {
    let dir = dataset(&[]);
    let missing = source(&dir.path().join("missing"));
    assert!(matches!(load_entries(&missing, false), Err(Error::Io { .. })));
}

#[test]
fn test_categories_in_name_order() {
    let dir = dataset(&[("zeta.csv", "ls, ls\n"), ("alpha.csv", "lsblk, geom(8)\n")]);
    let source = source(dir.path());

    assert_eq!(source.list_categories().unwrap(), vec!["alpha", "zeta"]);
    // Equal scores, so dataset order (alpha first) decides
    assert_eq!(results(&source, "ls", Direction::Bsd), vec!["geom(8)", "ls"]);
}

#[test]
fn test_load_category_by_name() {
    let dir = dataset(&[("packages.csv", "apt, pkg\n")]);
    let source = source(dir.path());

    assert_eq!(source.load_category("packages").unwrap().entries.len(), 1);
    assert!(matches!(
        source.load_category("network"),
        Err(Error::CategoryNotFound(_))
    ));
}

#[test]
fn test_limit_then_dedup() {
    let dir = dataset(&[(
        "packages.csv",
        "apt, pkg\napt-get, pkg\naptitude, pkg\napt-file, pkg which\n",
    )]);
    let entries = load_entries(&source(dir.path()), false).unwrap();
    let query = Query::new("apt*", PatternSyntax::Shell).unwrap();
    let ranked = match_entries(&query, &entries);

    for limit in 0..=ranked.len() + 1 {
        let truncated = truncate(ranked.clone(), limit);
        assert!(truncated.len() <= limit);

        let shown = dedup_results(truncated);
        let mut seen = std::collections::HashSet::new();
        assert!(shown.iter().all(|c| seen.insert(c.result.clone())));
    }
}

#[test]
fn test_regex_and_glob_queries() {
    let dir = dataset(&[("system.csv", "lsmod, kldstat(8)\nlsblk, geom(8)\nmodprobe, kldload(8)\n")]);
    let entries = load_entries(&source(dir.path()), false).unwrap();

    let glob = Query::new("ls*", PatternSyntax::Shell).unwrap();
    assert_eq!(match_entries(&glob, &entries).len(), 2);

    let regex = Query::new("mod", PatternSyntax::Regex).unwrap();
    let ranked = match_entries(&regex, &entries);
    // "modprobe" gets the prefix bonus over "lsmod"
    assert_eq!(ranked[0].matched_key, "modprobe");
    assert_eq!(ranked[1].matched_key, "lsmod");

    assert!(matches!(
        Query::new("[", PatternSyntax::Regex),
        Err(Error::InvalidPattern { .. })
    ));
}

#[test]
fn test_every_score_positive() {
    let entries = load_entries(&DataSource::Builtin, false).unwrap();
    for pattern in ["a", "*", "?", "ip", "[a-m]*", "sys*ctl"] {
        let query = Query::new(pattern, PatternSyntax::Shell).unwrap();
        assert!(match_entries(&query, &entries).iter().all(|c| c.score > 0.0));
    }
}

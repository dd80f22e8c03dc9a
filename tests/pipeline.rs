use seqfilter::{
    ErrorPolicy, FastxReader, FilterConfig, FormatPolicy, IdIndex, ReaderOptions, RunConfig,
    RunningStats, SeqFilterError, filter_to, run,
};
use std::io::{BufReader, Cursor};
use std::path::Path;
use tempfile::tempdir;

const THREE_FASTA: &str = "\
>r1 ten
ACGTACGTAC
>r2 twenty
ACGTACGTAC
ACGTACGTAC
>r3 thirty
ACGTACGTACACGTACGTACACGTACGTAC
";

fn reader(data: &'static str) -> FastxReader {
    FastxReader::from_bufread(BufReader::new(data.as_bytes()), ReaderOptions::default())
}

fn negate() -> FilterConfig {
    FilterConfig {
        negate: true,
        ..FilterConfig::default()
    }
}

fn filter_str(
    data: &'static str,
    index: &IdIndex,
    cfg: FilterConfig,
) -> (String, RunningStats) {
    let (out, stats) = filter_to(reader(data), index, &cfg, Vec::new()).unwrap();
    (String::from_utf8(out).unwrap(), stats)
}

fn ids(out: &str) -> Vec<&str> {
    out.lines()
        .filter_map(|l| l.strip_prefix('>').or_else(|| l.strip_prefix('@')))
        .collect()
}

#[test]
fn no_list_negate_keeps_everything() {
    let (out, stats) = filter_str(THREE_FASTA, &IdIndex::new(), negate());
    assert_eq!(ids(&out), ["r1", "r2", "r3"]);
    assert_eq!(stats.records, 3);
    assert_eq!(stats.total_bases, 60);
    assert_eq!(stats.min_len, Some(10));
    assert_eq!(stats.max_len, Some(30));
}

#[test]
fn positive_list_keeps_listed_ids() {
    let index = IdIndex::build(["r2"]);
    let (out, stats) = filter_str(THREE_FASTA, &index, FilterConfig::default());
    assert_eq!(ids(&out), ["r2"]);
    assert_eq!(stats.records, 1);
    assert_eq!(out, ">r2\nACGTACGTACACGTACGTAC\n");
}

#[test]
fn negative_list_drops_listed_ids() {
    let index = IdIndex::build(["r2"]);
    let (out, stats) = filter_str(THREE_FASTA, &index, negate());
    assert_eq!(ids(&out), ["r1", "r3"]);
    assert_eq!(stats.records, 2);
}

#[test]
fn duplicated_list_entry_filters_like_a_single_one() {
    let once = IdIndex::build(["r2"]);
    let twice = IdIndex::build(["r2", "r2"]);
    assert_eq!(twice.count("r2"), Some(2));
    assert_eq!(twice.len(), 1);
    for cfg in [FilterConfig::default(), negate()] {
        assert_eq!(
            filter_str(THREE_FASTA, &once, cfg),
            filter_str(THREE_FASTA, &twice, cfg)
        );
    }
}

#[test]
fn nothing_kept_leaves_stats_unset() {
    let (out, stats) = filter_str(THREE_FASTA, &IdIndex::new(), FilterConfig::default());
    assert!(out.is_empty());
    assert_eq!(stats, RunningStats::default());
}

#[test]
fn unfiltered_fastq_round_trips() {
    let data = "@a one\nAC\nGT\n+\nII\nJJ\n@b\nTTT\n+b\n@@@\n";
    let (out, stats) = filter_str(data, &IdIndex::new(), negate());
    assert_eq!(out, "@a\nACGT\n+\nIIJJ\n@b\nTTT\n+\n@@@\n");
    assert_eq!(stats.records, 2);

    // re-reading the output gives the same records
    let again: Vec<_> = FastxReader::from_bufread(
        Cursor::new(out.clone().into_bytes()),
        ReaderOptions::default(),
    )
    .collect::<Result<_, _>>()
    .unwrap();
    let orig: Vec<_> = reader(data).collect::<Result<_, _>>().unwrap();
    assert_eq!(again.len(), orig.len());
    for (a, o) in again.iter().zip(&orig) {
        assert_eq!(a.id, o.id);
        assert_eq!(a.seq, o.seq);
        assert_eq!(a.qual, o.qual);
    }
}

#[test]
fn parse_error_aborts_the_run() {
    let data = ">ok\nACGT\n@bad\nACGT\n";
    let res = filter_to(reader(data), &IdIndex::new(), &negate(), Vec::new());
    assert!(matches!(res, Err(SeqFilterError::Parse(_))));
}

fn write(path: &Path, text: &str) {
    std::fs::write(path, text).unwrap();
}

#[test]
fn run_from_paths() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("reads.fq");
    let list = dir.path().join("ids.txt");
    let output = dir.path().join("kept.fq");
    write(
        &input,
        "@q1\nACGTACGT\n+\nIIIIIIII\n@q2\nACGTACGTACGT\n+\nIIIIIIIIIIII\n@q3\nAC\n+\nII\n",
    );
    write(&list, "q1\nq2\n");

    let stats = run(&RunConfig {
        input,
        output: output.clone(),
        id_list: Some(list),
        filter: FilterConfig {
            min_len: 10,
            max_len: 0,
            negate: false,
        },
        reader: ReaderOptions::default(),
    })
    .unwrap();

    assert_eq!(stats.records, 1);
    assert_eq!(stats.total_bases, 12);
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "@q2\nACGTACGTACGT\n+\nIIIIIIIIIIII\n"
    );
}

#[test]
fn run_with_skip_policy_continues_past_bad_records() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("reads.fq");
    let output = dir.path().join("kept.fa");
    write(&input, "@bad\nACGT\n+\n!!\n!!!\n>good\nGG\n");

    let stats = run(&RunConfig {
        input,
        output: output.clone(),
        id_list: None,
        filter: negate(),
        reader: ReaderOptions {
            error_policy: ErrorPolicy::Skip,
            format: FormatPolicy::Auto,
        },
    })
    .unwrap();

    assert_eq!(stats.records, 1);
    assert_eq!(std::fs::read_to_string(&output).unwrap(), ">good\nGG\n");
}

#[test]
fn missing_input_or_list_is_an_open_failure() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("reads.fa");
    write(&input, ">a\nA\n");

    let base = RunConfig {
        input: dir.path().join("missing.fa"),
        output: dir.path().join("out.fa"),
        id_list: None,
        filter: FilterConfig::default(),
        reader: ReaderOptions::default(),
    };
    match run(&base) {
        Err(SeqFilterError::InputOpen { path, .. }) => assert!(path.ends_with("missing.fa")),
        other => panic!("expected open failure, got {other:?}"),
    }
    // nothing was created for a run that never started
    assert!(!dir.path().join("out.fa").exists());

    let with_list = RunConfig {
        input,
        id_list: Some(dir.path().join("missing.txt")),
        ..base
    };
    assert!(matches!(
        run(&with_list),
        Err(SeqFilterError::InputOpen { .. })
    ));
}

#[test]
fn non_utf8_ids_are_matched_and_written_verbatim() {
    let data: &'static [u8] = b">r\xe91 caf\xe9\nACGT\n>r2\nGG\n";
    let index = IdIndex::from_reader(&b"r\xe91\n"[..]).unwrap();
    let fq = FastxReader::from_bufread(data, ReaderOptions::default());
    let (out, stats) = filter_to(fq, &index, &FilterConfig::default(), Vec::new()).unwrap();
    assert_eq!(out, b">r\xe91\nACGT\n");
    assert_eq!(stats.records, 1);
}

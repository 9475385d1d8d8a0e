use std::io::{BufReader, Cursor};
use trimfastq::{
    ErrorPolicy, FormatError, KeepLength, LineSource, RecordWriter, Replacement, RunState,
    TransformConfig, TrimError, Trimmer,
};

const SAMPLE: &str = "@read1 extra\nACGT.T\n+\nIIIIII\n";

fn run_on(input: &str, config: &TransformConfig) -> Result<(String, RunState), TrimError> {
    let src = LineSource::from_bufread(BufReader::new(Cursor::new(input.as_bytes().to_vec())));
    let mut sink = RecordWriter::new(Vec::new());
    let state = Trimmer::new(config).run(src, &mut sink)?;
    let out = String::from_utf8(sink.finish()?).unwrap();
    Ok((out, state))
}

fn run_ok(input: &str, config: &TransformConfig) -> (String, RunState) {
    run_on(input, config).unwrap()
}

#[test]
fn fixed_length_trims_sequence_and_quality() {
    let (out, state) = run_ok(SAMPLE, &TransformConfig::new(KeepLength::Bases(4)));
    assert_eq!(out, "@read1_extra\nACGT\n+\nIIII\n");
    assert_eq!(state.records, 1);
    assert_eq!(state.too_short, 0);
}

#[test]
fn max_mode_keeps_length_and_masks_dots() {
    let (out, state) = run_ok(SAMPLE, &TransformConfig::new(KeepLength::Max));
    assert_eq!(out, "@read1_extra\nACGTNT\n+\nIIIIII\n");
    assert_eq!(state.too_short, 0);
}

#[test]
fn flowcell_tag_added_when_absent() {
    let mut config = TransformConfig::new(KeepLength::Bases(4));
    config.flowcell_id = Some("FC1".into());
    let (out, _) = run_ok(SAMPLE, &config);
    assert!(out.starts_with("@FC1_read1_extra\n"), "{out}");

    let (out, _) = run_ok("@FC1:read1\nACGT\n+\nIIII\n", &config);
    assert!(out.starts_with("@FC1:read1\n"), "{out}");
}

#[test]
fn rename_ids_uses_sequential_index() {
    let mut config = TransformConfig::new(KeepLength::Max);
    config.rename_prefix = Some("sample".into());
    let input = "@x y\nAC\n+\nII\n@z\nGT\n+\nII\n";
    let (out, state) = run_ok(input, &config);
    assert_eq!(out, "@sample0\nAC\n+\nII\n@sample1\nGT\n+\nII\n");
    assert_eq!(state.records, 2);
}

#[test]
fn trim5_then_truncate() {
    let mut config = TransformConfig::new(KeepLength::Bases(3));
    config.trim5 = Some(2);
    let (out, _) = run_ok("@r\nACGTAC\n+\nIIIIII\n", &config);
    assert_eq!(out, "@r\nGTA\n+\nIII\n");
}

#[test]
fn short_read_kept_whole_and_counted() {
    let config = TransformConfig::new(KeepLength::Bases(10));
    let (out, state) = run_ok("@r\nAC.T\n+\nIIII\n@s\nACGTACGTACGT\n+\nIIIIIIIIIIII\n", &config);
    assert_eq!(out, "@r\nACNT\n+\nIIII\n@s\nACGTACGTAC\n+\nIIIIIIIIII\n");
    assert_eq!(state.too_short, 1);
}

#[test]
fn short_read_not_counted_with_trim5() {
    let mut config = TransformConfig::new(KeepLength::Bases(10));
    config.trim5 = Some(1);
    let (out, state) = run_ok("@r\nACGT\n+\nIIII\n", &config);
    assert_eq!(out, "@r\nCGT\n+\nIII\n");
    assert_eq!(state.too_short, 0);
}

#[test]
fn replace_and_add_end() {
    let mut config = TransformConfig::new(KeepLength::Max);
    config.replace = Some(Replacement::new("_extra", "blank"));
    config.add_end = Some("2".into());
    let (out, _) = run_ok(SAMPLE, &config);
    assert!(out.starts_with("@read1/2\n"), "{out}");
}

#[test]
fn rename_then_add_end() {
    let mut config = TransformConfig::new(KeepLength::Max);
    config.rename_prefix = Some("p".into());
    config.add_end = Some("1".into());
    let (out, _) = run_ok(SAMPLE, &config);
    assert!(out.starts_with("@p0/1\n"), "{out}");
}

#[test]
fn separator_text_is_discarded() {
    let (out, _) = run_ok("@r\nACGT\n+r desc\nIIII\n", &TransformConfig::new(KeepLength::Max));
    assert_eq!(out, "@r\nACGT\n+\nIIII\n");
}

#[test]
fn dangling_record_dropped() {
    let input = "@a\nAC\n+\nII\n@b\nGT\n+\n";
    let (out, state) = run_ok(input, &TransformConfig::new(KeepLength::Max));
    assert_eq!(out, "@a\nAC\n+\nII\n");
    assert_eq!(state.records, 1);
}

#[test]
fn crlf_input_is_normalized() {
    let (out, _) = run_ok("@a b\r\nAC\r\n+\r\nII\r\n", &TransformConfig::new(KeepLength::Max));
    assert_eq!(out, "@a_b\nAC\n+\nII\n");
}

#[test]
fn misplaced_lines_skipped_by_default() {
    let input = "junk\n@a\nAC\nnot-a-plus\n+\nII\n";
    let (out, state) = run_ok(input, &TransformConfig::new(KeepLength::Max));
    assert_eq!(out, "@a\nAC\n+\nII\n");
    assert_eq!(state.records, 1);
}

#[test]
fn misplaced_header_is_an_error_when_strict() {
    let mut config = TransformConfig::new(KeepLength::Max);
    config.error_policy = ErrorPolicy::Return;
    let err = run_on("junk\n@a\nAC\n+\nII\n", &config).unwrap_err();
    match err {
        TrimError::Format {
            source: FormatError::MissingHeader,
            ctx,
        } => assert_eq!(ctx.line_num, 1),
        other => panic!("expected format error, got {other:?}"),
    }
}

#[test]
fn fixed_length_output_has_exact_length_and_order() {
    let mut input = String::new();
    for i in 0..50 {
        let len = 8 + i % 7;
        input.push_str(&format!("@r{i}\n{}\n+\n{}\n", "A".repeat(len), "#".repeat(len)));
    }
    let (out, state) = run_ok(&input, &TransformConfig::new(KeepLength::Bases(8)));
    assert_eq!(state.records, 50);
    assert_eq!(state.too_short, 0);

    let lines: Vec<&str> = out.lines().collect();
    for (i, rec) in lines.chunks(4).enumerate() {
        assert_eq!(rec[0], format!("@r{i}"));
        assert_eq!(rec[1].len(), 8);
        assert_eq!(rec[2], "+");
        assert_eq!(rec[3].len(), 8);
    }
}

#[test]
fn masking_is_idempotent() {
    let config = TransformConfig::new(KeepLength::Max);
    let (once, _) = run_ok("@a\n..AC..\n+\nIIIIII\n", &config);
    let (twice, _) = run_ok(&once, &config);
    assert_eq!(once, "@a\nNNACNN\n+\nIIIIII\n");
    assert_eq!(once, twice);
}

#[test]
fn misplaced_separator_is_an_error_when_strict() {
    let mut config = TransformConfig::new(KeepLength::Max);
    config.error_policy = ErrorPolicy::Return;
    let err = run_on("@a\nAC\nII\n+\nII\n", &config).unwrap_err();
    match err {
        TrimError::Format {
            source: FormatError::MissingPlus,
            ctx,
        } => assert_eq!(ctx.line_num, 3),
        other => panic!("expected format error, got {other:?}"),
    }
}

#[test]
fn max_mode_with_trim5_keeps_rest_of_read() {
    let mut config = TransformConfig::new(KeepLength::Max);
    config.trim5 = Some(2);
    let (out, state) = run_ok("@r\nAC.TAC\n+\nABCDEF\n", &config);
    assert_eq!(out, "@r\nNTAC\n+\nCDEF\n");
    assert_eq!(state.too_short, 0);
}

#[test]
fn flowcell_tag_applied_before_replace() {
    let mut config = TransformConfig::new(KeepLength::Max);
    config.flowcell_id = Some("FC1".into());
    config.replace = Some(Replacement::new("FC1_read", "X"));
    let (out, _) = run_ok(SAMPLE, &config);
    assert!(out.starts_with("@X1_extra\n"), "{out}");
}

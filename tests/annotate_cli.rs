use std::io::Write;
use std::process::Command;

use tempfile::NamedTempFile;

const HEADER: &str = "SNP\tchromosome\tposition\tpvalue\tcategory\tcolor_category\tlength\n";

fn temp_file(contents: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

fn annotate() -> Command {
    Command::new(env!("CARGO_BIN_EXE_gwas_annotate"))
}

#[test]
fn annotates_to_stdout() {
    let input = temp_file("cw_chr01\t1000\trs1\t0.01\n\ncw_chr02\t5\trs2\t0.5\nx\n");
    let config = temp_file("cw_chr01\tChr1\t50000000\tA\tred\n");
    let out = annotate()
        .arg("-input")
        .arg(input.path())
        .arg("-config")
        .arg(config.path())
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        format!("{HEADER}rs1\tcw_chr01\t1000\t0.01\tA\tred\t50000000\n")
    );
}

#[test]
fn example_printed_before_table() {
    let input = temp_file("c1\t1\tm\t0.1\n");
    let config = temp_file("c1\tC\t9\tB\tblack\n");
    let out = annotate()
        .args(["-example", "-input"])
        .arg(input.path())
        .arg("--config")
        .arg(config.path())
        .output()
        .unwrap();
    assert!(out.status.success());
    let s = String::from_utf8(out.stdout).unwrap();
    assert!(s.starts_with("\n\ncw_chr01\t1\tA\tred\t54244566\n"));
    assert!(s.contains("type: A(dot), B(triangle), C(square)"));
    assert!(s.ends_with(&format!("{HEADER}m\tc1\t1\t0.1\tB\tblack\t9\n")));
}

#[test]
fn example_alone_is_a_usage_error() {
    let out = annotate().arg("-example").output().unwrap();
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8(out.stdout).unwrap().contains("color: red"));
    assert!(String::from_utf8(out.stderr)
        .unwrap()
        .contains("Both -input and -config are required."));
}

#[test]
fn missing_config_is_a_usage_error() {
    let input = temp_file("c1\t1\tm\t0.1\n");
    let out = annotate().arg("-input").arg(input.path()).output().unwrap();
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
}

#[test]
fn short_marker_line_aborts() {
    let input = temp_file("c1\t1\tm\t0.1\nc1\t2\n");
    let config = temp_file("c1\tC\t9\tB\tblack\n");
    let out = annotate()
        .arg("-input")
        .arg(input.path())
        .arg("-config")
        .arg(config.path())
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8(out.stderr).unwrap().contains("line 2"));
}

#[test]
fn unreadable_input_aborts() {
    let config = temp_file("c1\tC\t9\tB\tblack\n");
    let out = annotate()
        .args(["-input", "/nonexistent/markers.txt", "-config"])
        .arg(config.path())
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

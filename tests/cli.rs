use assert_cmd::Command;
use predicates::prelude::*;

fn fsm_regex() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("fsm-regex").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn prints_fully_matching_lines() {
    fsm_regex()
        .arg("-E")
        .arg("a*b")
        .write_stdin("aab\nb\nxx\nabc\n")
        .assert()
        .code(0)
        .stdout("aab\nb\n");
}

#[test]
fn no_matching_line() {
    fsm_regex()
        .arg("-E")
        .arg("a+b")
        .write_stdin("b\nmeow\n")
        .assert()
        .code(1)
        .stdout("");

    // Empty input has no lines at all, not one empty line.
    fsm_regex()
        .arg("-E")
        .arg("")
        .write_stdin("")
        .assert()
        .code(1);
}

#[test]
fn last_line_without_newline() {
    fsm_regex()
        .arg("-E")
        .arg("a*4.+hi")
        .write_stdin("meow\n4uhi")
        .assert()
        .code(0)
        .stdout("4uhi\n");
}

#[test]
fn crlf_line_endings() {
    fsm_regex()
        .arg("-E")
        .arg("a.c")
        .write_stdin("abc\r\nac\r\n")
        .assert()
        .code(0)
        .stdout("abc\n");
}

#[test]
fn invalid_pattern() {
    fsm_regex()
        .arg("-E")
        .arg("a|b")
        .write_stdin("a\n")
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains(
            "invalid pattern 'a|b': unsupported character '|' at offset 1",
        ));
}

#[test]
fn usage_errors() {
    fsm_regex()
        .write_stdin("a\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("usage: fsm-regex -E <pattern>"));

    fsm_regex()
        .arg("-E")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("expected a pattern after '-E'"));

    fsm_regex()
        .arg("-E")
        .arg("a")
        .arg("--verbose")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unexpected argument '--verbose'"));
}

#[test]
fn non_utf8_line() {
    fsm_regex()
        .arg("-E")
        .arg("a")
        .write_stdin(b"b\n\xff\xfe\n".to_vec())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("line 2 is not valid UTF-8"));
}

#[test]
fn dump_graph() {
    fsm_regex()
        .arg("-E")
        .arg("ab")
        .arg("--dump")
        .write_stdin("ab\n")
        .assert()
        .code(0)
        .stdout("ab\n")
        .stderr(
            "0: start -> 1\n\
             1: literal 'a' -> 2\n\
             2: literal 'b' -> 3\n\
             3: termination\n",
        );
}

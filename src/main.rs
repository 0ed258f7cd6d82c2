use std::env;
use std::io;
use std::process;

use anyhow::{bail, Context};
use bytes::{BufMut, Bytes, BytesMut};
use fsm_regex::Regex;

struct Args {
    pattern: String,
    dump: bool,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = env::args().skip(1);
    let mut pattern = None;
    let mut dump = false;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-E" => match args.next() {
                Some(p) => pattern = Some(p),
                None => bail!("expected a pattern after '-E'"),
            },
            "--dump" => dump = true,
            other => bail!("unexpected argument '{other}'"),
        }
    }
    let Some(pattern) = pattern else {
        bail!("usage: fsm-regex -E <pattern> [--dump]");
    };
    Ok(Args { pattern, dump })
}

// Reads all of stdin into a single buffer.
fn read_stdin() -> anyhow::Result<Bytes> {
    let mut writer = BytesMut::new().writer();
    io::copy(&mut io::stdin().lock(), &mut writer).context("failed to read stdin")?;
    Ok(writer.into_inner().freeze())
}

// Prints every input line the pattern matches in full and reports whether
// there was at least one.
fn run() -> anyhow::Result<bool> {
    let args = parse_args()?;
    let regex = Regex::new(&args.pattern)
        .with_context(|| format!("invalid pattern '{}'", args.pattern))?;
    if args.dump {
        eprint!("{}", regex.graph());
    }

    let input = read_stdin()?;
    if input.is_empty() {
        return Ok(false);
    }
    let body = input.strip_suffix(b"\n".as_slice()).unwrap_or(&input[..]);

    let mut matched = false;
    for (n, line) in body.split(|&b| b == b'\n').enumerate() {
        let line = std::str::from_utf8(line)
            .with_context(|| format!("line {} is not valid UTF-8", n + 1))?;
        // Tolerate CRLF input; the trailing newline itself never reaches here.
        let line = line.strip_suffix('\r').unwrap_or(line);
        if regex.is_match(line) {
            println!("{line}");
            matched = true;
        }
    }
    Ok(matched)
}

// Usage: echo <input_text> | fsm-regex -E <pattern>
fn main() {
    env_logger::init();

    match run() {
        Ok(true) => process::exit(0),
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("error: {err:#}");
            process::exit(2)
        }
    }
}

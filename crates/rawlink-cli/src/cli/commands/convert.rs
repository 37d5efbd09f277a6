//! `rawlink <url>...`: convert each argument and print its raw link.

use anyhow::{bail, Result};
use rawlink_core::converter;
use std::io::{self, Write};

pub fn run_convert(urls: &[String]) -> Result<()> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    convert_all(urls, &mut stdout.lock(), &mut stderr.lock())
}

/// Prints one raw link per convertible URL; reports the rest and fails after the last one.
fn convert_all(urls: &[String], out: &mut impl Write, err: &mut impl Write) -> Result<()> {
    let mut failed = 0usize;
    for url in urls {
        match converter::convert(url) {
            Some(raw) => writeln!(out, "{raw}")?,
            None => {
                failed += 1;
                writeln!(err, "error: not a GitHub browser URL: {}", url.trim())?;
            }
        }
    }
    out.flush()?;

    if failed > 0 {
        tracing::info!("{} of {} urls could not be converted", failed, urls.len());
        bail!("{} of {} URLs could not be converted", failed, urls.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(urls: &[&str]) -> (Result<()>, String, String) {
        let urls: Vec<String> = urls.iter().map(|u| u.to_string()).collect();
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let result = convert_all(&urls, &mut out, &mut err);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn prints_one_raw_link_per_url() {
        let (result, out, err) = run(&[
            "https://github.com/torvalds/linux/blob/master/README",
            " https://github.com/octocat/Hello-World/raw/main/src/app.js ",
        ]);
        assert!(result.is_ok());
        assert_eq!(
            out,
            "https://raw.githubusercontent.com/torvalds/linux/master/README\n\
             https://raw.githubusercontent.com/octocat/Hello-World/main/src/app.js\n"
        );
        assert!(err.is_empty());
    }

    #[test]
    fn reports_bad_urls_and_keeps_going() {
        let (result, out, err) = run(&[
            "https://github.com/a/b",
            "https://github.com/a/b/blob/main/f.txt",
        ]);
        assert_eq!(out, "https://raw.githubusercontent.com/a/b/main/f.txt\n");
        assert_eq!(err, "error: not a GitHub browser URL: https://github.com/a/b\n");
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "1 of 2 URLs could not be converted");
    }
}

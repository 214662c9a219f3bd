//! `[[target]]` extraction from a single document.

use crate::domain::LinkOccurrence;
use crate::error::{Result, VaultError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Double brackets around one or more non-`]` characters. A stray `]` ends
/// the target early and no match is produced for that token.
pub static WIKI_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[([^\]]+)\]\]").expect("valid regex"));

/// Extract every wiki-link from `reader`, numbering lines from 1.
///
/// Lines are split on `\n` with a trailing `\r` dropped. Invalid UTF-8 is
/// decoded lossily instead of failing the document.
pub fn extract_links<R: BufRead>(mut reader: R, source: &str) -> io::Result<Vec<LinkOccurrence>> {
    let mut links = Vec::new();
    let mut buf = Vec::new();
    let mut line_num = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_num += 1;

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches('\n').trim_end_matches('\r');
        for caps in WIKI_LINK.captures_iter(line) {
            links.push(LinkOccurrence {
                target: caps[1].to_string(),
                source: source.to_string(),
                line: line_num,
            });
        }
    }

    Ok(links)
}

/// Open `path` and extract its links, reporting them under `source`.
pub fn extract_links_from_file(path: &Path, source: &str) -> Result<Vec<LinkOccurrence>> {
    let read_err = |err| VaultError::Read { path: path.to_path_buf(), source: err };
    let file = File::open(path).map_err(read_err)?;
    extract_links(BufReader::new(file), source).map_err(read_err)
}

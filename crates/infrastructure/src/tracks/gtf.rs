use genes_domain::{DomainError, Strand};
use smallvec::SmallVec;
use std::io::BufRead;

/// Attribute pairs of one line, in file order. Keys may repeat (`tag`).
pub type Attributes = SmallVec<[(String, String); 8]>;

/// A single feature line of a GTF file.
///
/// Coordinates are kept as written: 1-based, inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct GtfRecord {
    pub seqname: String,
    pub feature: String,
    pub start: u64,
    pub end: u64,
    pub strand: Strand,
    pub attributes: Attributes,
}

impl GtfRecord {
    /// First value of `key`.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value of a repeated key, in file order.
    pub fn attrs<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.attributes
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Streaming GTF reader.
///
/// Skips blank lines and `#` comments. Each item carries the 1-based line
/// number it came from.
pub struct GtfReader<R: BufRead> {
    reader: R,
    buf: String,
    line_no: usize,
}

impl<R: BufRead> GtfReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            line_no: 0,
        }
    }

    pub fn records(mut self) -> impl Iterator<Item = Result<(usize, GtfRecord), DomainError>> {
        std::iter::from_fn(move || loop {
            self.buf.clear();
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => self.line_no += 1,
                Err(e) => return Some(Err(DomainError::from(e))),
            }

            let line = self.buf.trim_end_matches(['\n', '\r']);
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            let line_no = self.line_no;
            return Some(
                parse_line(line)
                    .map(|record| (line_no, record))
                    .map_err(|msg| DomainError::TrackParse(format!("line {line_no}: {msg}"))),
            );
        })
    }
}

/// Parses one non-comment GTF line.
///
/// The nine tab-separated columns are: seqname, source, feature, start,
/// end, score, strand, frame, attributes.
pub fn parse_line(line: &str) -> Result<GtfRecord, String> {
    let cols: Vec<&str> = line.splitn(9, '\t').collect();
    if cols.len() < 9 {
        return Err(format!("expected 9 tab-separated columns, found {}", cols.len()));
    }

    let start = parse_position(cols[3])?;
    let end = parse_position(cols[4])?;
    if start == 0 || end < start {
        return Err(format!("bad coordinates {start}-{end}"));
    }

    let strand = cols[6].parse().unwrap_or(Strand::Unknown);

    Ok(GtfRecord {
        seqname: cols[0].to_string(),
        feature: cols[2].to_string(),
        start,
        end,
        strand,
        attributes: parse_attributes(cols[8])?,
    })
}

fn parse_position(raw: &str) -> Result<u64, String> {
    raw.trim()
        .parse()
        .map_err(|_| format!("invalid position '{raw}'"))
}

/// Parses `key "value"; key2 "value2";`. Unquoted values are accepted.
fn parse_attributes(raw: &str) -> Result<Attributes, String> {
    let mut attributes = Attributes::new();

    for part in split_unquoted(raw, ';') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        let (key, value) = part
            .split_once(char::is_whitespace)
            .ok_or_else(|| format!("attribute without value '{part}'"))?;

        attributes.push((key.to_string(), value.trim().trim_matches('"').to_string()));
    }

    Ok(attributes)
}

/// Splits on `sep` wherever it is not inside a double-quoted value.
fn split_unquoted(raw: &str, sep: char) -> impl Iterator<Item = &str> {
    let mut in_quotes = false;
    let mut start = 0;
    let mut chars = raw.char_indices();

    std::iter::from_fn(move || {
        for (i, c) in chars.by_ref() {
            if c == '"' {
                in_quotes = !in_quotes;
            } else if c == sep && !in_quotes {
                let part = &raw[start..i];
                start = i + c.len_utf8();
                return Some(part);
            }
        }
        if start <= raw.len() {
            let part = &raw[start..];
            start = raw.len() + 1;
            return Some(part);
        }
        None
    })
}

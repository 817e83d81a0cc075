use std::str::FromStr;

use super::{Record, RecordData, RecordType};
use crate::error::InvalidRecord;

const BLANKS: [char; 2] = [' ', '\t'];

/// Cursor over the fields of one record line.
///
/// Every method returns `None` when the expected field is not there; the
/// callers turn that into an [`InvalidRecord`] for the whole line.
struct Fields<'a> {
    rest: &'a str,
}

impl<'a> Fields<'a> {
    fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    /// Runs `parse` from each blank-separated token of `line` in turn and
    /// returns the first match, so leading text that does not fit the
    /// grammar is skipped.
    fn search<T>(line: &'a str, mut parse: impl FnMut(Fields<'a>) -> Option<T>) -> Option<T> {
        line.char_indices()
            .filter(|&(i, c)| !BLANKS.contains(&c) && (i == 0 || line[..i].ends_with(BLANKS)))
            .find_map(|(i, _)| parse(Fields::new(&line[i..])))
    }

    /// A run of non-blank characters that must be followed by blanks.
    fn field(&mut self) -> Option<&'a str> {
        let end = self.rest.find(BLANKS)?;
        if end == 0 {
            return None;
        }
        let (field, rest) = self.rest.split_at(end);
        self.rest = rest.trim_start_matches(BLANKS);
        Some(field)
    }

    fn keyword(&mut self, word: &str) -> Option<()> {
        (self.field()? == word).then_some(())
    }

    /// A field made only of ASCII digits. Values too wide for `T` are
    /// rejected instead of wrapped.
    fn number<T: FromStr>(&mut self) -> Option<T> {
        let field = self.field()?;
        if !field.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        field.parse().ok()
    }

    /// `<name> <ttl> IN`
    fn header(&mut self) -> Option<(&'a str, u32)> {
        let name = self.field()?;
        let ttl = self.number()?;
        self.keyword("IN")?;
        Some((name, ttl))
    }

    /// The upper-case type tag following the header.
    fn type_tag(&mut self) -> Option<&'a str> {
        self.header()?;
        let tag = self.field()?;
        tag.bytes().all(|b| b.is_ascii_uppercase()).then_some(tag)
    }

    /// The final bare token. It stops at a blank or `;`, and anything after
    /// it is ignored.
    fn last(&mut self) -> Option<&'a str> {
        let end = self
            .rest
            .find([' ', '\t', ';'])
            .unwrap_or(self.rest.len());
        if end == 0 {
            return None;
        }
        let (token, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(token)
    }

    /// The contents of a double-quoted string. Anything after the closing
    /// quote is ignored.
    fn quoted(&mut self) -> Option<&'a str> {
        let inner = self.rest.strip_prefix('"')?;
        let end = inner.find('"')?;
        self.rest = &inner[end + 1..];
        Some(&inner[..end])
    }

    fn record(mut self, rtype: RecordType) -> Option<Record> {
        let (name, ttl) = self.header()?;
        self.keyword(rtype.as_str())?;

        let data = match rtype {
            RecordType::A => RecordData::A {
                address: self.last()?.to_owned(),
            },
            RecordType::Aaaa => RecordData::Aaaa {
                address: self.last()?.to_owned(),
            },
            RecordType::Cname => RecordData::Cname {
                target: self.last()?.to_owned(),
            },
            RecordType::Ptr => RecordData::Ptr {
                domain: self.last()?.to_owned(),
            },
            RecordType::Txt => RecordData::Txt {
                text: self.quoted()?.to_owned(),
            },
            RecordType::Srv => {
                let priority = self.number()?;
                let weight = self.number()?;
                let port = self.number()?;
                RecordData::Srv {
                    priority,
                    weight,
                    port,
                    target: self.last()?.to_owned(),
                }
            }
        };

        Some(Record::new(name, data).with_ttl(ttl))
    }
}

impl Record {
    /// Parses one line as a record of the given type.
    ///
    /// The line must contain `<name> <ttl> IN <TYPE> <fields>` with `TYPE`
    /// equal to `rtype`'s tag, starting at the first token where that fits.
    /// Fields may be separated by any run of spaces and tabs.
    pub fn parse_as(rtype: RecordType, line: &str) -> Result<Record, InvalidRecord> {
        Fields::search(line, |fields| fields.record(rtype))
            .ok_or_else(|| InvalidRecord::new(line))
    }

    /// Parses one line as a record of whichever type its tag names.
    ///
    /// The header is matched first, so an unknown tag is rejected before any
    /// type-specific grammar is tried. Either way the error carries the
    /// whole line.
    pub fn parse(line: &str) -> Result<Record, InvalidRecord> {
        let rtype = Fields::search(line, |mut fields| fields.type_tag())
            .and_then(RecordType::from_tag)
            .ok_or_else(|| InvalidRecord::new(line))?;
        Self::parse_as(rtype, line)
    }
}

impl FromStr for Record {
    type Err = InvalidRecord;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        Record::parse(line)
    }
}

impl TryFrom<String> for Record {
    type Error = InvalidRecord;

    fn try_from(line: String) -> Result<Self, Self::Error> {
        Record::parse(line.trim())
    }
}

/// Parses a block of record lines.
///
/// Lines are trimmed; blank ones and those starting with `;` are skipped.
/// The first malformed line fails the whole block.
pub fn parse_records(text: &str) -> Result<Vec<Record>, InvalidRecord> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(';'))
        .map(Record::parse)
        .collect()
}

/// Joins records into one document, one canonical line each.
pub fn format_records(records: &[Record]) -> String {
    records
        .iter()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

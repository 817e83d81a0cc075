//! DNS resource records and their zone-file-like text form.
//!
//! Every record renders to one canonical line:
//!
//! ```text
//! <name> <ttl> IN <TYPE> <fields>
//! ```
//!
//! and [`Record::parse`] reads such a line back. See [`parse_records`] for
//! whole documents.

mod parse;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use parse::{format_records, parse_records};

/// TTL given to records built without an explicit one.
pub const DEFAULT_TTL: u32 = 3600;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    Aaaa,
    Cname,
    Ptr,
    Txt,
    Srv,
}

impl RecordType {
    /// The upper-case tag used in the text form.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::Aaaa => "AAAA",
            RecordType::Cname => "CNAME",
            RecordType::Ptr => "PTR",
            RecordType::Txt => "TXT",
            RecordType::Srv => "SRV",
        }
    }

    /// Looks up a type by its tag. Matching is case-sensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "A" => Some(RecordType::A),
            "AAAA" => Some(RecordType::Aaaa),
            "CNAME" => Some(RecordType::Cname),
            "PTR" => Some(RecordType::Ptr),
            "TXT" => Some(RecordType::Txt),
            "SRV" => Some(RecordType::Srv),
            _ => None,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The type-specific part of a record.
///
/// Addresses and names are kept as the literal tokens they were given; no
/// well-formedness checks are made on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A { address: String },
    Aaaa { address: String },
    Cname { target: String },
    Ptr { domain: String },
    /// Rendered between double quotes, so `text` must not contain one.
    Txt { text: String },
    Srv {
        priority: u16,
        weight: u16,
        port: u16,
        target: String,
    },
}

impl RecordData {
    pub fn record_type(&self) -> RecordType {
        match self {
            RecordData::A { .. } => RecordType::A,
            RecordData::Aaaa { .. } => RecordType::Aaaa,
            RecordData::Cname { .. } => RecordType::Cname,
            RecordData::Ptr { .. } => RecordType::Ptr,
            RecordData::Txt { .. } => RecordType::Txt,
            RecordData::Srv { .. } => RecordType::Srv,
        }
    }
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::A { address } | RecordData::Aaaa { address } => f.write_str(address),
            RecordData::Cname { target } => f.write_str(target),
            RecordData::Ptr { domain } => f.write_str(domain),
            RecordData::Txt { text } => write!(f, "\"{}\"", text),
            RecordData::Srv {
                priority,
                weight,
                port,
                target,
            } => write!(f, "{} {} {} {}", priority, weight, port, target),
        }
    }
}

/// A single resource record.
///
/// Records are plain values: build one with the per-type constructors (or
/// parse one from text) and read it through the accessors.
///
/// ```
/// use landns::Record;
///
/// let record = Record::a("example.com.", "127.0.0.1").with_ttl(123);
/// assert_eq!(record.to_string(), "example.com. 123 IN A 127.0.0.1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Record {
    name: String,
    ttl: u32,
    data: RecordData,
}

impl Record {
    pub fn new(name: impl Into<String>, data: RecordData) -> Self {
        Self {
            name: name.into(),
            ttl: DEFAULT_TTL,
            data,
        }
    }

    pub fn a(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self::new(
            name,
            RecordData::A {
                address: address.into(),
            },
        )
    }

    pub fn aaaa(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self::new(
            name,
            RecordData::Aaaa {
                address: address.into(),
            },
        )
    }

    pub fn cname(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(
            name,
            RecordData::Cname {
                target: target.into(),
            },
        )
    }

    pub fn ptr(name: impl Into<String>, domain: impl Into<String>) -> Self {
        Self::new(
            name,
            RecordData::Ptr {
                domain: domain.into(),
            },
        )
    }

    pub fn txt(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name, RecordData::Txt { text: text.into() })
    }

    /// An SRV record with priority and weight 0. Use [`Record::new`] with
    /// [`RecordData::Srv`] to set them.
    pub fn srv(name: impl Into<String>, target: impl Into<String>, port: u16) -> Self {
        Self::new(
            name,
            RecordData::Srv {
                priority: 0,
                weight: 0,
                port,
                target: target.into(),
            },
        )
    }

    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    pub fn record_type(&self) -> RecordType {
        self.data.record_type()
    }

    pub fn data(&self) -> &RecordData {
        &self.data
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} IN {} {}",
            self.name,
            self.ttl,
            self.record_type(),
            self.data
        )
    }
}

impl From<Record> for String {
    fn from(record: Record) -> Self {
        record.to_string()
    }
}

#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::style,
    clippy::pedantic
)]

mod error;
mod parser;
pub mod path;
mod section;
mod value;

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::debug;

pub use crate::error::{ConversionError, Error, ParseBoolError, Result};
use crate::parser::Parser;
use crate::path::{ExecutableRelative, PathResolver};
pub use crate::section::{Keys, Section};
pub use crate::value::{parse_bool, parse_float};

/// Byte Order Mark (BOM) some editors write at the start of UTF-8 files.
///
/// <https://en.wikipedia.org/wiki/Byte_order_mark>
const BOM_UTF8: &[u8] = &[0xEF, 0xBB, 0xBF];

/// A parsed INI configuration.
///
/// Sections are kept in the order their headers appear. Duplicate headers are not merged; name
/// lookups return the first section with that name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ini {
    path: Option<PathBuf>,
    sections: Vec<Section>,
}

impl Ini {
    /// Parse an in-memory buffer.
    pub fn parse(buffer: &[u8]) -> Result<Self> {
        let text = decode_data(buffer);
        let sections = Parser::new(&text).into_sections()?;

        Ok(Self {
            path: None,
            sections,
        })
    }

    /// Read everything from `reader` and parse it.
    pub fn from_reader<R>(mut reader: R) -> Result<Self>
    where
        R: Read,
    {
        let mut buffer = Vec::with_capacity(4096);
        reader
            .read_to_end(&mut buffer)
            .map_err(|source| Error::Read { source })?;

        Self::parse(&buffer)
    }

    /// Load a file, resolving bare file names against the executable's directory.
    ///
    /// See [`ExecutableRelative`] for the exact rule. Use [`Ini::load_with`] to pick another
    /// [`PathResolver`].
    pub fn load<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Self::load_with(path, &ExecutableRelative)
    }

    /// Load a file after mapping `path` through `resolver`.
    pub fn load_with<P, R>(path: P, resolver: &R) -> Result<Self>
    where
        P: AsRef<Path>,
        R: PathResolver + ?Sized,
    {
        let path = path.as_ref();
        let resolved = resolver
            .resolve(path)
            .map_err(|source| Error::File {
                path: path.to_owned(),
                source,
            })?
            .into_owned();
        debug!(requested = %path.display(), resolved = %resolved.display(), "loading configuration");

        let buffer = fs::read(&resolved).map_err(|source| Error::File {
            path: resolved.clone(),
            source,
        })?;
        let mut ini = Self::parse(&buffer)?;
        debug!(sections = ini.sections.len(), "configuration loaded");

        ini.path = Some(resolved);
        Ok(ini)
    }

    /// The file this configuration was loaded from, after path resolution.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn section_names(&self) -> Vec<&str> {
        self.sections.iter().map(Section::name).collect()
    }

    /// Returns the first section called `name`.
    pub fn section(&self, name: &str) -> Result<&Section> {
        self.sections
            .iter()
            .find(|section| section.name() == name)
            .ok_or_else(|| Error::SectionNotFound {
                section: name.to_owned(),
            })
    }

    /// Returns the raw value of `key` in the first section called `section`.
    ///
    /// A key stored with an empty value (`key=`) is reported as [`Error::KeyNotFound`], exactly
    /// like a missing key. This matches long-standing behavior callers may rely on, though it is
    /// likely a defect; use [`Section::get`] to tell the two apart.
    pub fn get_string(&self, section: &str, key: &str) -> Result<&str> {
        match self.section(section)?.get(key) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(Error::KeyNotFound {
                section: section.to_owned(),
                key: key.to_owned(),
            }),
        }
    }

    /// See [`parse_bool`] for the accepted literals.
    pub fn get_bool(&self, section: &str, key: &str) -> Result<bool> {
        self.convert(section, key, parse_bool)
    }

    /// Parses a platform-width integer, so the accepted range matches `isize`.
    pub fn get_int(&self, section: &str, key: &str) -> Result<isize> {
        self.convert(section, key, str::parse::<isize>)
    }

    pub fn get_int64(&self, section: &str, key: &str) -> Result<i64> {
        self.convert(section, key, str::parse::<i64>)
    }

    /// See [`parse_float`]; finite text that overflows `f64` is a conversion error.
    pub fn get_float64(&self, section: &str, key: &str) -> Result<f64> {
        self.convert(section, key, parse_float)
    }

    /// Parse the value with `T`'s [`FromStr`] implementation.
    pub fn get<T>(&self, section: &str, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.convert(section, key, |value| {
            value.parse::<T>().map_err(|e| ConversionError::Other {
                type_name: std::any::type_name::<T>(),
                message: e.to_string(),
            })
        })
    }

    fn convert<T, E, F>(&self, section: &str, key: &str, parse: F) -> Result<T>
    where
        F: FnOnce(&str) -> std::result::Result<T, E>,
        E: Into<ConversionError>,
    {
        let value = self.get_string(section, key)?;

        parse(value).map_err(|e| Error::TypeConversion {
            section: section.to_owned(),
            key: key.to_owned(),
            value: value.to_owned(),
            source: e.into(),
        })
    }
}

// Invalid UTF-8 sequences are replaced rather than rejected.
fn decode_data(data: &[u8]) -> String {
    let data = data.strip_prefix(BOM_UTF8).unwrap_or(data);
    String::from_utf8_lossy(data).into_owned()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const SAMPLE: &[u8] = br"
; comment line
# also a comment
[database]
port=5432
dbfile=/var/lib/app.db
ratio=2.5e-3
enabled=True
empty=
big=9000000000
huge=99999999999999999999

[users]
alice=admin
";

    fn sample() -> Ini {
        Ini::parse(SAMPLE).expect("failed to parse hardcoded INI file")
    }

    #[test]
    fn section_names_in_order() {
        assert_eq!(sample().section_names(), vec!["database", "users"]);
    }

    #[test]
    fn typed_values() {
        let ini = sample();

        assert_eq!(ini.get_int("database", "port").ok(), Some(5432));
        assert_eq!(ini.get_int64("database", "big").ok(), Some(9_000_000_000));
        assert_eq!(ini.get_bool("database", "enabled").ok(), Some(true));
        assert_eq!(ini.get_string("database", "dbfile").ok(), Some("/var/lib/app.db"));

        let ratio = ini
            .get_float64("database", "ratio")
            .expect("expected hardcoded float to parse");
        assert!((ratio - 0.0025).abs() < f64::EPSILON);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn int_is_platform_width() {
        assert_eq!(sample().get_int("database", "big").ok(), Some(9_000_000_000));
    }

    #[test]
    fn int_overflow_is_a_conversion_error() {
        let result = sample().get_int("database", "huge");

        assert!(matches!(
            result,
            Err(Error::TypeConversion {
                source: ConversionError::Int(_),
                ref value,
                ..
            }) if value == "99999999999999999999"
        ));
    }

    #[rstest]
    #[case::positive("f")]
    #[case::negative("n")]
    fn float_overflow_is_a_conversion_error(#[case] key: &str) {
        let ini = Ini::parse(b"[s]\nf=1e400\nn=-1e400\n").expect("failed to parse hardcoded INI");

        assert!(matches!(
            ini.get_float64("s", key),
            Err(Error::TypeConversion {
                source: ConversionError::FloatOutOfRange,
                ..
            })
        ));
    }

    #[rstest]
    #[case::not_a_bool("dbfile")]
    #[case::number_out_of_grammar("port")]
    fn bool_conversion_errors(#[case] key: &str) {
        assert!(matches!(
            sample().get_bool("database", key),
            Err(Error::TypeConversion {
                source: ConversionError::Bool(ParseBoolError),
                ..
            })
        ));
    }

    #[test]
    fn missing_section_and_key() {
        let ini = sample();

        assert!(matches!(
            ini.get_string("nope", "port"),
            Err(Error::SectionNotFound { ref section }) if section == "nope"
        ));
        assert!(matches!(
            ini.get_float64("users", "bob"),
            Err(Error::KeyNotFound { .. })
        ));
    }

    #[test]
    fn empty_value_reads_as_missing() {
        let ini = sample();

        assert!(matches!(
            ini.get_string("database", "empty"),
            Err(Error::KeyNotFound { ref section, ref key }) if section == "database" && key == "empty"
        ));
        assert!(matches!(
            ini.get_int("database", "empty"),
            Err(Error::KeyNotFound { .. })
        ));
        assert_eq!(
            ini.section("database").map(|s| s.get("empty")).ok(),
            Some(Some(""))
        );
    }

    #[test]
    fn generic_get() {
        let ini = sample();

        assert_eq!(ini.get::<u16>("database", "port").ok(), Some(5432));
        assert!(matches!(
            ini.get::<u8>("database", "port"),
            Err(Error::TypeConversion {
                source: ConversionError::Other { type_name: "u8", .. },
                ..
            })
        ));
    }

    #[test]
    fn utf8_bom_is_stripped() {
        let ini = Ini::parse(b"\xEF\xBB\xBF[s]\nk=v\n").expect("failed to parse INI with BOM");

        assert_eq!(ini.get_string("s", "k").ok(), Some("v"));
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let ini = Ini::parse(b"[s]\nk=a\xFFb\n").expect("failed to parse INI with bad bytes");

        assert_eq!(ini.get_string("s", "k").ok(), Some("a\u{FFFD}b"));
    }

    #[test]
    fn from_reader_matches_parse() {
        let ini = Ini::from_reader(SAMPLE).expect("failed to read hardcoded INI file");

        assert_eq!(ini, sample());
        assert_eq!(ini.path(), None);
    }
}

use std::str::Lines;

use tracing::trace;

use crate::error::Error;
use crate::section::Section;

/// Represents an on-going parse.
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    lines: Lines<'a>,
    line_number: usize,
    sections: Vec<Section>,
    // Index into `sections` of the header most recently opened.
    current: Option<usize>,
}

impl<'a> Parser<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            line_number: 0,
            sections: Vec::with_capacity(16),
            current: None,
        }
    }
}

impl Parser<'_> {
    /// Consume every line, returning the sections in the order their headers appeared.
    ///
    /// The first malformed line aborts the parse.
    pub fn into_sections(mut self) -> Result<Vec<Section>, Error> {
        while let Some(line) = self.lines.next() {
            self.line_number += 1;
            self.parse_line(line.trim())?;
        }

        Ok(self.sections)
    }

    fn parse_line(&mut self, line: &str) -> Result<(), Error> {
        match line.chars().next() {
            None | Some(';' | '#' | '\r' | '\n') => Ok(()),
            Some('[') => self.parse_section_header(line),
            Some(_) => self.parse_key_value(line),
        }
    }

    /// Open a new section named by the text between `[` and the first `]`.
    ///
    /// Anything after the closing bracket is ignored.
    fn parse_section_header(&mut self, line: &str) -> Result<(), Error> {
        let Some(end) = line.find(']') else {
            return Err(Error::MalformedSectionHeader {
                line_number: self.line_number,
                line: line.to_owned(),
            });
        };

        self.add_section(line[1..end].to_owned());
        Ok(())
    }

    fn parse_key_value(&mut self, line: &str) -> Result<(), Error> {
        let line_number = self.line_number;
        let Some(section) = self.current_section_mut() else {
            return Err(Error::KeyOutsideSection {
                line_number,
                line: line.to_owned(),
            });
        };

        // Only the first '=' delimits; the rest belong to the value.
        match line.split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                section.insert(key.to_owned(), value.to_owned());
                Ok(())
            }
            _ => Err(Error::MalformedKeyValueLine {
                line_number,
                line: line.to_owned(),
            }),
        }
    }

    fn add_section(&mut self, name: String) {
        trace!(line = self.line_number, section = %name, "opened section");
        self.sections.push(Section::new(name));
        self.current = Some(self.sections.len() - 1);
    }

    fn current_section_mut(&mut self) -> Option<&mut Section> {
        self.current.and_then(|i| self.sections.get_mut(i))
    }
}

//! Byte dump formatting for diagnostic logging.
//!
//! This module renders byte sequences as lines of hexadecimal octets,
//! mainly for tracing raw message data during association troubleshooting.
//! The output is meant for humans,
//! no compatibility guarantee is attached to the exact format.

/// Options for rendering a byte sequence as hexadecimal dump lines.
///
/// The default renders 16 bytes per line,
/// with two spaces before each line and between octets,
/// and no limit on the number of bytes shown.
///
/// # Example
///
/// ```
/// # use dicom_association::dump::DumpOptions;
/// let lines = DumpOptions::new()
///     .items_per_line(4)
///     .lines(&[0x01, 0x02, 0x03, 0x04, 0xff]);
/// assert_eq!(lines, vec![
///     "  01  02  03  04".to_string(),
///     "  ff".to_string(),
/// ]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DumpOptions {
    prefix: String,
    delimiter: String,
    items_per_line: usize,
    max_size: Option<usize>,
}

impl Default for DumpOptions {
    fn default() -> Self {
        DumpOptions {
            prefix: "  ".to_string(),
            delimiter: "  ".to_string(),
            items_per_line: 16,
            max_size: None,
        }
    }
}

impl DumpOptions {
    /// Create a new set of options with the default rendering.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the text placed at the start of each line.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Override the text placed between octets.
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Override the number of bytes rendered per line.
    /// Values below 1 are clamped to 1.
    pub fn items_per_line(mut self, items_per_line: usize) -> Self {
        self.items_per_line = items_per_line.max(1);
        self
    }

    /// Cap the total number of bytes rendered.
    /// When the cap cuts the output short,
    /// the first line announces the truncation.
    pub fn max_size(mut self, max_size: usize) -> Self {
        self.max_size = Some(max_size);
        self
    }

    /// Render the given bytes as dump lines.
    pub fn lines(&self, data: &[u8]) -> Vec<String> {
        let mut lines = Vec::new();
        let mut byte_count = 0;
        let mut cutoff = None;

        for chunk in data.chunks(self.items_per_line) {
            byte_count += chunk.len();
            if let Some(max_size) = self.max_size {
                if byte_count > max_size {
                    cutoff = Some(max_size);
                    break;
                }
            }
            let octets: Vec<String> = chunk.iter().map(|b| format!("{:02x}", b)).collect();
            lines.push(format!("{}{}", self.prefix, octets.join(&self.delimiter)));
        }

        if let Some(max_size) = cutoff {
            lines.insert(0, format!("{}Only dumping {} bytes.", self.prefix, max_size));
        }

        lines
    }
}

/// Render the given bytes as dump lines with the default options.
pub fn dump_bytes(data: &[u8]) -> Vec<String> {
    DumpOptions::default().lines(data)
}

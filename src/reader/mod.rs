//! Generic spreadsheet reader with encoding and delimiter auto-detection.
//!
//! Reads delimited spreadsheet files into typed records. No report-specific
//! logic here.

use serde::de::DeserializeOwned;
use std::path::Path;

use crate::error::{ReadError, ReadResult};

/// A decoded spreadsheet, ready for typed extraction.
///
/// Holds the decoded text plus the detection metadata, so callers can check
/// the header row before committing to a record type.
#[derive(Debug, Clone)]
pub struct RawSheet {
    content: String,
    /// Detected encoding.
    pub encoding: String,
    /// Detected delimiter.
    pub delimiter: char,
    /// Column headers from the first row.
    pub headers: Vec<String>,
}

impl RawSheet {
    /// Whether the header row contains the named column.
    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    /// Deserialize every data row into `T`.
    ///
    /// Columns not named by `T` are ignored; rows are matched to fields by
    /// header name.
    pub fn deserialize<T: DeserializeOwned>(&self) -> ReadResult<Vec<T>> {
        let mut reader = csv_reader(&self.content, self.delimiter);
        let mut records = Vec::new();
        for row in reader.deserialize() {
            records.push(row?);
        }
        Ok(records)
    }
}

/// Detect the encoding of raw bytes using chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let result = chardet::detect(bytes);
    let charset = result.0;

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to a string using the specified encoding.
///
/// Unknown encodings fall back to lossy UTF-8.
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    match encoding.to_lowercase().as_str() {
        "iso-8859-1" | "latin-1" | "latin1" => {
            encoding_rs::ISO_8859_15.decode(bytes).0.to_string()
        }
        "windows-1252" | "cp1252" => encoding_rs::WINDOWS_1252.decode(bytes).0.to_string(),
        _ => String::from_utf8_lossy(bytes).to_string(),
    }
}

/// Detect the delimiter by counting occurrences in the first line.
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let separators = [';', ',', '\t', '|'];
    let mut best_sep = ',';
    let mut best_count = 0;

    for &sep in &separators {
        let count = first_line.matches(sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Read a spreadsheet file with auto-detection of encoding and delimiter.
///
/// # Example
/// ```ignore
/// let sheet = read_sheet(Path::new("data.csv"))?;
/// println!("Encoding: {}, Delimiter: '{}'", sheet.encoding, sheet.delimiter);
/// let records: Vec<RevenueRecord> = sheet.deserialize()?;
/// ```
pub fn read_sheet<P: AsRef<Path>>(path: P) -> ReadResult<RawSheet> {
    let bytes = std::fs::read(path.as_ref())?;
    read_bytes(&bytes)
}

/// Read spreadsheet bytes with auto-detection of encoding and delimiter.
pub fn read_bytes(bytes: &[u8]) -> ReadResult<RawSheet> {
    if bytes.is_empty() {
        return Err(ReadError::EmptyFile);
    }

    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding);
    let delimiter = detect_delimiter(&content);
    log::debug!("detected encoding {encoding}, delimiter '{delimiter}'");

    let mut header_reader = csv_reader(&content, delimiter);
    let headers: Vec<String> = header_reader.headers()?.iter().map(str::to_string).collect();

    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(ReadError::NoHeaders);
    }

    Ok(RawSheet {
        content,
        encoding,
        delimiter,
        headers,
    })
}

fn csv_reader(content: &str, delimiter: char) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Person {
        name: String,
        age: u32,
    }

    #[test]
    fn test_simple_sheet() {
        let sheet = read_bytes(b"name;age\nAlice;30\nBob;25").unwrap();
        let people: Vec<Person> = sheet.deserialize().unwrap();

        assert_eq!(people.len(), 2);
        assert_eq!(people[0].name, "Alice");
        assert_eq!(people[0].age, 30);
        assert_eq!(people[1].name, "Bob");
        assert_eq!(people[1].age, 25);
    }

    #[test]
    fn test_headers_and_has_column() {
        let sheet = read_bytes(b"name,age\nAlice,30").unwrap();
        assert_eq!(sheet.headers, vec!["name", "age"]);
        assert!(sheet.has_column("age"));
        assert!(!sheet.has_column("salary"));
    }

    #[test]
    fn test_quoted_values() {
        let sheet = read_bytes(b"name;note\n\"Alice\";\"Hello; World\"").unwrap();

        #[derive(Deserialize)]
        struct Row {
            name: String,
            note: String,
        }

        let rows: Vec<Row> = sheet.deserialize().unwrap();
        assert_eq!(rows[0].name, "Alice");
        assert_eq!(rows[0].note, "Hello; World");
    }

    #[test]
    fn test_extra_columns_ignored() {
        let sheet = read_bytes(b"name,age,city\nAlice,30,NYC").unwrap();
        let people: Vec<Person> = sheet.deserialize().unwrap();
        assert_eq!(people[0].name, "Alice");
    }

    #[test]
    fn test_bad_number_is_error() {
        let sheet = read_bytes(b"name,age\nAlice,abc").unwrap();
        let result: ReadResult<Vec<Person>> = sheet.deserialize();
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_file_error() {
        let result = read_bytes(b"");
        assert!(matches!(result, Err(ReadError::EmptyFile)));
    }

    #[test]
    fn test_detect_delimiter_semicolon() {
        assert_eq!(detect_delimiter("a;b;c\n1;2;3"), ';');
    }

    #[test]
    fn test_detect_delimiter_comma() {
        assert_eq!(detect_delimiter("a,b,c\n1,2,3"), ',');
    }

    #[test]
    fn test_detect_delimiter_tab() {
        assert_eq!(detect_delimiter("a\tb\tc\n1\t2\t3"), '\t');
    }

    #[test]
    fn test_detect_delimiter_pipe() {
        assert_eq!(detect_delimiter("a|b|c\n1|2|3"), '|');
    }

    #[test]
    fn test_latin1_decoding() {
        // "Société" in ISO-8859-1
        let bytes: &[u8] = &[0x53, 0x6F, 0x63, 0x69, 0xE9, 0x74, 0xE9];
        let decoded = decode_content(bytes, "iso-8859-1");
        assert!(decoded.contains("Soci"));
    }

    #[test]
    fn test_detect_encoding_utf8() {
        assert_eq!(detect_encoding("name,age\nAlice,30".as_bytes()), "utf-8");
    }
}

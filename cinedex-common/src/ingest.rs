//! Dataset ingestion: raw delimited text to typed movie records
//!
//! The source file is comma-separated with `"` quoting, a header row
//! naming the columns, and rows that sometimes end in a stray `;`.
//! Ingestion never fails past the file read: malformed rows degrade to
//! default field values and an unreadable source degrades to an empty
//! record set.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, error, info, warn};

use crate::model::MovieRecord;
use crate::normalize;
use crate::Result;

/// Columns consumed from the dataset, matched by header name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Rank,
    Year,
    Duration,
    AgeLimit,
    Rating,
    NumberOfRatings,
    Metascore,
    Description,
    Name,
}

impl Column {
    const ALL: [Column; 9] = [
        Column::Rank,
        Column::Year,
        Column::Duration,
        Column::AgeLimit,
        Column::Rating,
        Column::NumberOfRatings,
        Column::Metascore,
        Column::Description,
        Column::Name,
    ];

    fn header(self) -> &'static str {
        match self {
            Column::Rank => "Rank",
            Column::Year => "Year",
            Column::Duration => "Duration",
            Column::AgeLimit => "AgeLimit",
            Column::Rating => "Rating",
            Column::NumberOfRatings => "NumberOfRatings",
            Column::Metascore => "Metascore",
            Column::Description => "Description",
            Column::Name => "Name",
        }
    }
}

/// Header-name to field-position lookup for one dataset
struct HeaderMap {
    positions: HashMap<&'static str, usize>,
}

impl HeaderMap {
    fn from_header(header: &[String]) -> Self {
        let mut positions = HashMap::new();
        for column in Column::ALL {
            let found = header
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(column.header()));
            match found {
                Some(idx) => {
                    positions.insert(column.header(), idx);
                }
                None => warn!("Dataset header has no '{}' column", column.header()),
            }
        }
        Self { positions }
    }

    /// Cell text for `column`, empty when the column or field is missing
    fn cell<'a>(&self, row: &'a [String], column: Column) -> &'a str {
        self.positions
            .get(column.header())
            .and_then(|&idx| row.get(idx))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Read and parse the dataset at `path`.
///
/// Never fails: a missing or unreadable file is logged and yields an empty
/// record set so the service can still start.
pub fn load_from_path(path: &Path) -> Vec<MovieRecord> {
    match read_source(path) {
        Ok(content) => {
            let records = parse_records(&content);
            info!(
                "Loaded {} movie records from {}",
                records.len(),
                path.display()
            );
            records
        }
        Err(e) => {
            error!("Error reading dataset {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Read the raw dataset text
pub fn read_source(path: &Path) -> Result<String> {
    Ok(std::fs::read_to_string(path)?)
}

/// Parse dataset text into records, preserving row order.
///
/// The first non-blank row is the header. Columns are mapped by name;
/// unknown columns are ignored and missing ones read as empty text.
pub fn parse_records(content: &str) -> Vec<MovieRecord> {
    let cleaned = clean_lines(content);
    let mut rows = split_rows(&cleaned)
        .into_iter()
        .filter(|row| !row.iter().all(|f| f.trim().is_empty()));

    let header = match rows.next() {
        Some(header) => HeaderMap::from_header(&header),
        None => {
            warn!("Dataset is empty, no header row found");
            return Vec::new();
        }
    };

    let records: Vec<MovieRecord> = rows.map(|row| to_record(&header, &row)).collect();
    debug!("Parsed {} data rows", records.len());
    records
}

/// Drop blank lines and strip trailing `;`/CR clutter from each line
pub fn clean_lines(content: &str) -> String {
    content
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(|line| line.trim_end_matches([';', '\r', '\n']))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split delimited text into rows of fields.
///
/// A field that opens with `"` runs to the matching close quote and may
/// contain commas, newlines and `""` escapes. Quotes elsewhere in a field
/// are kept as literal characters, and an unterminated quote swallows the
/// rest of the input.
fn split_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }

        match c {
            '"' if field.trim().is_empty() => {
                field.clear();
                in_quotes = true;
            }
            ',' => row.push(std::mem::take(&mut field)),
            '\n' => {
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
            }
            '\r' => {}
            _ => field.push(c),
        }
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

fn to_record(header: &HeaderMap, row: &[String]) -> MovieRecord {
    let cell = |column| header.cell(row, column);

    MovieRecord {
        rank: normalize::parse_int(cell(Column::Rank)),
        year: normalize::parse_int(cell(Column::Year)),
        duration_text: normalize::text(cell(Column::Duration)),
        age_limit: normalize::text(cell(Column::AgeLimit)),
        rating: normalize::parse_float(cell(Column::Rating)),
        number_of_ratings: normalize::parse_scaled_count(cell(Column::NumberOfRatings)),
        metascore: normalize::parse_optional_int(cell(Column::Metascore)),
        description: normalize::text(cell(Column::Description)),
        name: normalize::text(cell(Column::Name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Rank,Year,Duration,AgeLimit,Rating,NumberOfRatings,Metascore,Description,Name";

    #[test]
    fn test_clean_lines_strips_terminators_and_blanks() {
        let raw = "a,b;\r\n\n\nc,d;;\n";
        assert_eq!(clean_lines(raw), "a,b\nc,d");
    }

    #[test]
    fn test_split_rows_handles_quotes() {
        let rows = split_rows("1,\"Hello, world\",x\n2,\"say \"\"hi\"\"\",y");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["1", "Hello, world", "x"]);
        assert_eq!(rows[1], vec!["2", "say \"hi\"", "y"]);
    }

    #[test]
    fn test_split_rows_quoted_newline_stays_in_field() {
        let rows = split_rows("1,\"two\nlines\"\n2,plain");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][1], "two\nlines");
        assert_eq!(rows[1], vec!["2", "plain"]);
    }

    #[test]
    fn test_split_rows_mid_field_quote_is_literal() {
        let rows = split_rows("5'11\" tall,x");
        assert_eq!(rows[0], vec!["5'11\" tall", "x"]);
    }

    #[test]
    fn test_parse_records_full_row() {
        let text = format!(
            "{}\n1,1994,2h 22m,R,9.3,(2.9M),82,\"Two imprisoned men bond, over years.\",The Shawshank Redemption;\n",
            HEADER
        );
        let records = parse_records(&text);
        assert_eq!(records.len(), 1);

        let m = &records[0];
        assert_eq!(m.rank, 1);
        assert_eq!(m.year, 1994);
        assert_eq!(m.duration_text.as_deref(), Some("2h 22m"));
        assert_eq!(m.age_limit.as_deref(), Some("R"));
        assert_eq!(m.rating, 9.3);
        assert_eq!(m.number_of_ratings, 2_900_000);
        assert_eq!(m.metascore, Some(82));
        assert_eq!(
            m.description.as_deref(),
            Some("Two imprisoned men bond, over years.")
        );
        assert_eq!(m.name.as_deref(), Some("The Shawshank Redemption"));
    }

    #[test]
    fn test_parse_records_short_row_defaults_missing_fields() {
        let text = format!("{}\n7,1957,1h 36m", HEADER);
        let records = parse_records(&text);
        assert_eq!(records.len(), 1);

        let m = &records[0];
        assert_eq!(m.rank, 7);
        assert_eq!(m.rating, 0.0);
        assert_eq!(m.number_of_ratings, 0);
        assert_eq!(m.metascore, None);
        assert_eq!(m.name, None);
    }

    #[test]
    fn test_parse_records_maps_by_header_name() {
        let text = "Name,Extra,Rank,Rating\nSeven Samurai,ignored,20,8.6\n";
        let records = parse_records(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].rank, 20);
        assert_eq!(records[0].rating, 8.6);
        assert_eq!(records[0].name.as_deref(), Some("Seven Samurai"));
        assert_eq!(records[0].year, 0);
    }

    #[test]
    fn test_parse_records_skips_blank_rows() {
        let text = format!("{}\n , , \n1,2000,,,8.0,,,,A\n,,,,,,,,\n2,2001,,,7.0,,,,B\n", HEADER);
        let records = parse_records(&text);
        let names: Vec<_> = records.iter().map(|m| m.title()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_parse_records_empty_input() {
        assert!(parse_records("").is_empty());
        assert!(parse_records("\n\n;\n").is_empty());
        assert!(parse_records(HEADER).is_empty());
    }

    #[test]
    fn test_parse_records_is_deterministic() {
        let text = format!(
            "{}\n1,2000,1h,PG,8.0,1K,,d1,A;\n2,2001,2h,R,9.0,2K,70,d2,B;\n",
            HEADER
        );
        assert_eq!(parse_records(&text), parse_records(&text));
    }

    #[test]
    fn test_load_from_missing_path_is_empty() {
        let records = load_from_path(Path::new("/nonexistent/cinedex/Movies.csv"));
        assert!(records.is_empty());
    }
}

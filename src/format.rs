//! Output formatting for the command line.
//!
//! Results are printed as JSON by default. Typed list results also support CSV through
//! [`CsvRecordProducer`]; untyped documents only have a JSON rendering.

use csv::Writer;
use serde::Serialize;
use std::str::FromStr;
use strum::EnumIter;

pub const JSON: &str = "json";
pub const CSV: &str = "csv";

#[derive(Debug, thiserror::Error)]
pub enum FormattingError {
    #[error("invalid output format {0}")]
    UnsupportedOutputFormat(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),
    #[error("JSON serialization error: {0}")]
    JsonSerializationError(#[from] serde_json::Error),
    #[error("CSV writer into inner error: {0}")]
    CsvIntoInnerError(#[from] csv::IntoInnerError<Writer<Vec<u8>>>),
}

#[derive(Debug, Clone, Default, PartialEq, PartialOrd)]
pub struct OutputFormatOptions {
    pub with_headers: bool,
    pub pretty: bool,
}

#[derive(Debug, Clone, PartialEq, PartialOrd, EnumIter)]
pub enum OutputFormat {
    Csv(OutputFormatOptions),
    Json(OutputFormatOptions),
}

impl OutputFormat {
    pub fn names() -> Vec<&'static str> {
        vec![JSON, CSV]
    }

    pub fn from_string_with_options(
        format_str: &str,
        options: OutputFormatOptions,
    ) -> Result<OutputFormat, FormattingError> {
        let normalized_format = format_str.to_lowercase();
        match normalized_format.as_str() {
            JSON => Ok(OutputFormat::Json(options)),
            CSV => Ok(OutputFormat::Csv(options)),
            _ => Err(FormattingError::UnsupportedOutputFormat(normalized_format)),
        }
    }

    pub fn options(&self) -> &OutputFormatOptions {
        match self {
            OutputFormat::Csv(options) | OutputFormat::Json(options) => options,
        }
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Json(OutputFormatOptions::default())
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OutputFormat::Csv(_) => write!(f, "{}", CSV),
            OutputFormat::Json(_) => write!(f, "{}", JSON),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = FormattingError;

    fn from_str(format_str: &str) -> Result<OutputFormat, FormattingError> {
        Self::from_string_with_options(format_str, OutputFormatOptions::default())
    }
}

/// Trait for producing CSV records from data
pub trait CsvRecordProducer {
    /// Returns the header row for the CSV output
    fn csv_header() -> Vec<String>;

    /// Converts the data into CSV records
    fn as_csv_records(&self) -> Vec<Vec<String>>;

    /// Produces CSV output with or without a header row based on the parameter
    fn to_csv(&self, with_header: bool) -> Result<String, FormattingError> {
        write_csv(Self::csv_header(), self.as_csv_records(), with_header)
    }
}

fn write_csv(
    header: Vec<String>,
    records: Vec<Vec<String>>,
    with_header: bool,
) -> Result<String, FormattingError> {
    let mut wtr = Writer::from_writer(Vec::new());
    if with_header {
        wtr.write_record(header)?;
    }
    for record in records {
        wtr.write_record(&record)?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    let bytes = wtr.into_inner()?;
    Ok(String::from_utf8(bytes)?)
}

pub trait Formattable {
    fn format(&self, f: &OutputFormat) -> Result<String, FormattingError>;
}

impl<T> Formattable for [T]
where
    T: CsvRecordProducer + Serialize,
{
    fn format(&self, f: &OutputFormat) -> Result<String, FormattingError> {
        match f {
            OutputFormat::Json(options) => to_json(self, options.pretty),
            OutputFormat::Csv(options) => {
                let records = self.iter().flat_map(|item| item.as_csv_records()).collect();
                write_csv(T::csv_header(), records, options.with_headers)
            }
        }
    }
}

impl<T> Formattable for Vec<T>
where
    T: CsvRecordProducer + Serialize,
{
    fn format(&self, f: &OutputFormat) -> Result<String, FormattingError> {
        self.as_slice().format(f)
    }
}

/// Renders a value that only has a JSON representation.
pub fn format_json_only<T: Serialize + ?Sized>(
    value: &T,
    f: &OutputFormat,
) -> Result<String, FormattingError> {
    match f {
        OutputFormat::Json(options) => to_json(value, options.pretty),
        OutputFormat::Csv(_) => Err(FormattingError::UnsupportedOutputFormat(f.to_string())),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, FormattingError> {
    if pretty {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(serde_json::to_string(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Station;

    fn station(id: &str, name: &str) -> Station {
        Station {
            station_id: id.to_string(),
            station_number: "1".to_string(),
            station_name: name.to_string(),
            street_number: "100".to_string(),
            address: "Main".to_string(),
            city: "Springfield".to_string(),
            state: "OH".to_string(),
            zip_code: "45501".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(
            "JSON".parse::<OutputFormat>().unwrap(),
            OutputFormat::Json(OutputFormatOptions::default())
        );
        assert_eq!(
            "csv".parse::<OutputFormat>().unwrap(),
            OutputFormat::Csv(OutputFormatOptions::default())
        );
        assert!("tree".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_csv_with_headers() {
        let stations = vec![station("10", "Central"), station("11", "North, East")];
        let format = OutputFormat::Csv(OutputFormatOptions {
            with_headers: true,
            pretty: false,
        });
        let csv = stations.format(&format).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "STATION_ID,STATION_NUMBER,STATION_NAME,ADDRESS,CITY,STATE,ZIP"
        );
        assert_eq!(lines[1], "10,1,Central,100 Main,Springfield,OH,45501");
        assert_eq!(lines[2], "11,1,\"North, East\",100 Main,Springfield,OH,45501");
    }

    #[test]
    fn test_csv_without_headers() {
        let stations = vec![station("10", "Central")];
        let csv = stations
            .format(&OutputFormat::Csv(OutputFormatOptions::default()))
            .unwrap();
        assert_eq!(csv, "10,1,Central,100 Main,Springfield,OH,45501\n");
    }

    #[test]
    fn test_json_only_rejects_csv() {
        let value = serde_json::json!({"a": 1});
        assert_eq!(format_json_only(&value, &OutputFormat::default()).unwrap(), r#"{"a":1}"#);
        assert!(matches!(
            format_json_only(&value, &OutputFormat::Csv(OutputFormatOptions::default())),
            Err(FormattingError::UnsupportedOutputFormat(_))
        ));
    }
}

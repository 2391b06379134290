use crate::error::CliError;
use clap::ArgMatches;
use serde::de::DeserializeOwned;

/// A mandatory argument. Clap enforces presence, so a miss is reported as a usage error.
pub fn required_string<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str, CliError> {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .ok_or_else(|| CliError::MissingRequiredArgument(name.to_string()))
}

/// Parses a JSON document given on the command line.
pub fn json_argument<T: DeserializeOwned>(matches: &ArgMatches, name: &str) -> Result<T, CliError> {
    let text = required_string(matches, name)?;
    Ok(serde_json::from_str(text)?)
}

/// Splits `key=value`, trimming both sides.
pub fn parse_key_value(text: &str) -> Result<(String, String), CliError> {
    text.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .ok_or_else(|| CliError::InvalidArgument {
            name: "parameter".to_string(),
            message: format!("expected key=value, got '{}'", text),
        })
}

/// Splits `Name: value`, trimming both sides.
pub fn parse_header(text: &str) -> Result<(String, String), CliError> {
    text.split_once(':')
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .ok_or_else(|| CliError::InvalidArgument {
            name: "header".to_string(),
            message: format!("expected 'Name: value', got '{}'", text),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value(" filter = stationNumber eq 2 ").unwrap(),
            ("filter".to_string(), "stationNumber eq 2".to_string())
        );
        assert_eq!(
            parse_key_value("a=b=c").unwrap(),
            ("a".to_string(), "b=c".to_string())
        );
        assert!(parse_key_value("novalue").is_err());
    }

    #[test]
    fn test_parse_header() {
        assert_eq!(
            parse_header("X-Trace: abc:def").unwrap(),
            ("X-Trace".to_string(), "abc:def".to_string())
        );
        assert!(parse_header("missing colon").is_err());
    }
}

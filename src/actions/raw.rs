use crate::actions::utils::{parse_header, parse_key_value, required_string};
use crate::commands::params::{PARAMETER_CONTENTS, PARAMETER_HEADER, PARAMETER_PARAMETER, PARAMETER_URL};
use crate::commands::raw::RawMethod;
use crate::context::ExecutionContext;
use crate::er_api::Options;
use crate::error::CliError;
use clap::ArgMatches;
use std::collections::BTreeMap;
use tracing::debug;

pub async fn raw_request(method: RawMethod, matches: &ArgMatches) -> Result<(), CliError> {
    let target = required_string(matches, PARAMETER_URL)?;

    let mut options = Options::new();
    for parameter in matches.get_many::<String>(PARAMETER_PARAMETER).into_iter().flatten() {
        let (key, value) = parse_key_value(parameter)?;
        options.insert(key, value);
    }

    let mut headers = BTreeMap::new();
    for header in matches.get_many::<String>(PARAMETER_HEADER).into_iter().flatten() {
        let (name, value) = parse_header(header)?;
        headers.insert(name, value);
    }

    let body = matches
        .get_one::<String>(PARAMETER_CONTENTS)
        .map(|contents| contents.as_bytes().to_vec());

    debug!("Raw {} {} with {} option(s)", method, target, options.len());

    let context = ExecutionContext::from_args(matches).await?;
    let value = context
        .client()
        .raw_operation(method.method(), target, &options, &headers, body)
        .await?;
    context.print_json(&value)
}

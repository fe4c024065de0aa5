use std::{env, fmt::Display, fs, process::ExitCode};

mod model;
mod service;
mod ui;

use model::ids::Puuid;
use service::{
    assets::IconSet,
    formatter::{self, SummaryError},
    parsing::{matches::parse_match, ParsingError},
};
use ui::views::match_card_lines;

static SAMPLE_MATCH: &str = include_str!("../demos/sample_match.json");
static SAMPLE_VIEWER: &str =
    "u5NX_aVe9Uf4HTrlzSIu-8xfHit85d8UU-Mc1cQAml7GsWdH5WmLUXa_tvOzTzFRGRqonK7AhLMMIA";

const PATCH_VERSION: &str = "15.12.1";

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    let (payload, viewer) = match args.get(1) {
        Some(path) => {
            let Some(viewer) = args.get(2) else {
                println!("Usage: matchcard [<match.json> <viewer-puuid>]");
                return ExitCode::FAILURE;
            };
            match fs::read_to_string(path) {
                Ok(text) => (text, viewer.clone()),
                Err(error) => {
                    println!("Error occured while reading {}:\n{}\n", path, error);
                    return ExitCode::FAILURE;
                }
            }
        }
        None => (SAMPLE_MATCH.to_string(), SAMPLE_VIEWER.to_string()),
    };

    match run(&payload, &viewer.as_str().into()) {
        Ok(lines) => {
            ui::print_lines(&lines);
            ExitCode::SUCCESS
        }
        Err(error) => {
            println!("Error occured while summarizing match:\n{}\n", error);
            ExitCode::FAILURE
        }
    }
}

fn run(payload: &str, viewer: &Puuid) -> Result<Vec<String>, AppError> {
    let json = json::parse(payload)?;
    let record = parse_match(&json)?;
    let icons = IconSet::new(PATCH_VERSION);
    let summary = formatter::summarize(&record, viewer, &icons)?;
    Ok(match_card_lines(&summary))
}

#[derive(Debug)]
enum AppError {
    Payload(json::Error),
    Parsing(ParsingError),
    Summary(SummaryError),
}

impl From<json::Error> for AppError {
    fn from(error: json::Error) -> Self {
        Self::Payload(error)
    }
}

impl From<ParsingError> for AppError {
    fn from(error: ParsingError) -> Self {
        Self::Parsing(error)
    }
}

impl From<SummaryError> for AppError {
    fn from(error: SummaryError) -> Self {
        Self::Summary(error)
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Payload(error) => write!(f, "Payload is not valid JSON: {}", error),
            AppError::Parsing(error) => write!(f, "{}", error),
            AppError::Summary(error) => write!(f, "{}", error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_on_embedded_sample() {
        let lines = run(SAMPLE_MATCH, &SAMPLE_VIEWER.into()).unwrap();
        assert!(lines.iter().any(|l| l.contains("Naafiri")));
        assert!(lines.iter().any(|l| l.contains("popcorn seller#coup")));
    }

    #[test]
    fn test_run_reports_unknown_viewer() {
        let error = run(SAMPLE_MATCH, &"nobody".into()).unwrap_err();
        assert!(matches!(error, AppError::Summary(_)));
    }

    #[test]
    fn test_run_reports_bad_payload() {
        let error = run("not json", &SAMPLE_VIEWER.into()).unwrap_err();
        assert!(matches!(error, AppError::Payload(_)));
    }
}

//! File processing API for the vdf format
//!
//! Processing is described by a `stage-format` string:
//!
//! | spec          | output                                         |
//! |---------------|------------------------------------------------|
//! | `token-simple`| one token per line: location, kind, literal     |
//! | `token-json`  | token list as JSON                              |
//! | `ast-json`    | parsed document as JSON                         |
//! | `ast-yaml`    | parsed document as YAML                         |
//! | `ast-treeviz` | parsed document as a tree view                  |
//!
//! # Sample Sources
//!
//! The [`vdf_sources`] module gives access to the sample documents under
//! `docs/samples`, which tests use instead of inlining large documents.

use crate::vdf::ast::SourceLocation;
use crate::vdf::formats::{FormatError, FormatRegistry};
use crate::vdf::lexing::{tokenize, Token};
use crate::vdf::parsing::{parse, ParseError};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Represents the processing stage (what data to extract)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Ast,
}

impl ProcessingStage {
    fn as_str(&self) -> &'static str {
        match self {
            ProcessingStage::Token => "token",
            ProcessingStage::Ast => "ast",
        }
    }
}

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Yaml,
    Treeviz,
}

impl OutputFormat {
    /// Name of the format, matching the formatter registry for the AST stage
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Treeviz => "treeviz",
        }
    }
}

/// Represents a complete processing specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    pub fn new(stage: ProcessingStage, format: OutputFormat) -> Self {
        Self { stage, format }
    }

    /// Parse a format string like "token-simple" or "ast-treeviz"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let (stage, format) = format_str
            .split_once('-')
            .ok_or_else(|| ProcessingError::InvalidFormat(format_str.to_string()))?;

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "ast" => ProcessingStage::Ast,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "yaml" => OutputFormat::Yaml,
            "treeviz" => OutputFormat::Treeviz,
            _ => return Err(ProcessingError::InvalidFormatType(format.to_string())),
        };

        // Validate stage/format compatibility
        match (stage, format) {
            (ProcessingStage::Token, OutputFormat::Simple | OutputFormat::Json) => {}
            (
                ProcessingStage::Ast,
                OutputFormat::Json | OutputFormat::Yaml | OutputFormat::Treeviz,
            ) => {}
            (ProcessingStage::Token, _) => {
                return Err(ProcessingError::InvalidFormatType(format!(
                    "Format '{}' only works with ast stage",
                    format.as_str()
                )))
            }
            (ProcessingStage::Ast, _) => {
                return Err(ProcessingError::InvalidFormatType(format!(
                    "Format '{}' only works with token stage",
                    format.as_str()
                )))
            }
        }

        Ok(ProcessingSpec { stage, format })
    }

    /// Get all available processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        vec![
            ProcessingSpec::new(ProcessingStage::Token, OutputFormat::Simple),
            ProcessingSpec::new(ProcessingStage::Token, OutputFormat::Json),
            ProcessingSpec::new(ProcessingStage::Ast, OutputFormat::Json),
            ProcessingSpec::new(ProcessingStage::Ast, OutputFormat::Yaml),
            ProcessingSpec::new(ProcessingStage::Ast, OutputFormat::Treeviz),
        ]
    }
}

impl fmt::Display for ProcessingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.stage.as_str(), self.format.as_str())
    }
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    FileNotFound(String),
    InvalidFormat(String),
    InvalidStage(String),
    InvalidFormatType(String),
    IoError(String),
    Parse(ParseError),
    Format(FormatError),
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::FileNotFound(path) => write!(f, "File not found: {}", path),
            ProcessingError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            ProcessingError::InvalidStage(stage) => write!(f, "Invalid stage: {}", stage),
            ProcessingError::InvalidFormatType(format_type) => {
                write!(f, "Invalid format type: {}", format_type)
            }
            ProcessingError::IoError(msg) => write!(f, "IO error: {}", msg),
            ProcessingError::Parse(err) => write!(f, "{}", err),
            ProcessingError::Format(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ProcessingError {}

impl From<ParseError> for ProcessingError {
    fn from(err: ParseError) -> Self {
        ProcessingError::Parse(err)
    }
}

impl From<FormatError> for ProcessingError {
    fn from(err: FormatError) -> Self {
        ProcessingError::Format(err)
    }
}

/// Process vdf source text according to the given specification
pub fn process_source(source: &str, spec: &ProcessingSpec) -> Result<String, ProcessingError> {
    debug!(%spec, bytes = source.len(), "processing source");
    match spec.stage {
        ProcessingStage::Token => format_tokens(source, &tokenize(source), spec.format),
        ProcessingStage::Ast => {
            let doc = parse(source)?;
            Ok(FormatRegistry::with_defaults().serialize(&doc, spec.format.as_str())?)
        }
    }
}

/// Process a vdf file according to the given specification
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
) -> Result<String, ProcessingError> {
    let file_path = file_path.as_ref();

    if !file_path.exists() {
        return Err(ProcessingError::FileNotFound(
            file_path.display().to_string(),
        ));
    }

    let content =
        fs::read_to_string(file_path).map_err(|e| ProcessingError::IoError(e.to_string()))?;

    process_source(&content, spec)
}

#[derive(Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    literal: &'a str,
    start: usize,
    end: usize,
    line: usize,
    column: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Format tokens according to the specified format
fn format_tokens(
    source: &str,
    tokens: &[Token<'_>],
    format: OutputFormat,
) -> Result<String, ProcessingError> {
    let locations = SourceLocation::new(source);
    match format {
        OutputFormat::Simple => {
            let mut result = String::new();
            for token in tokens {
                result.push_str(&format!(
                    "{} {} {:?}\n",
                    locations.range_to_location(&token.span),
                    token.kind,
                    token.literal
                ));
            }
            Ok(result)
        }
        OutputFormat::Json => {
            let records: Vec<TokenRecord> = tokens
                .iter()
                .map(|token| {
                    let start = locations.byte_to_position(token.span.start);
                    TokenRecord {
                        kind: token.kind.name(),
                        literal: token.literal,
                        start: token.span.start,
                        end: token.span.end,
                        line: start.line,
                        column: start.column,
                        error: token.to_lex_error(source).map(|err| err.kind.to_string()),
                    }
                })
                .collect();
            let mut json = serde_json::to_string_pretty(&records)
                .map_err(|e| ProcessingError::IoError(e.to_string()))?;
            json.push('\n');
            Ok(json)
        }
        other => Err(ProcessingError::InvalidFormatType(format!(
            "Format '{}' only works with ast stage",
            other.as_str()
        ))),
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .into_iter()
        .map(|spec| spec.to_string())
        .collect()
}

/// Sample sources module for accessing the sample vdf documents
pub mod vdf_sources {
    use super::*;

    /// Directory holding the samples, relative to the crate root
    pub const SAMPLES_DIR: &str = "docs/samples";

    /// Available sample files
    pub const AVAILABLE_SAMPLES: &[&str] = &[
        "appmanifest.acf",
        "appworkshop.acf",
        "comments.vdf",
        "libraryfolders.vdf",
    ];

    pub struct VdfSources;

    impl VdfSources {
        fn sample_path(filename: &str) -> String {
            format!("{}/{}", SAMPLES_DIR, filename)
        }

        fn validate_sample(filename: &str) -> Result<(), ProcessingError> {
            if !AVAILABLE_SAMPLES.contains(&filename) {
                return Err(ProcessingError::FileNotFound(format!(
                    "Sample '{}' is not available. Available samples: {:?}",
                    filename, AVAILABLE_SAMPLES
                )));
            }
            Ok(())
        }

        /// Get sample content as raw string
        pub fn get_string(filename: &str) -> Result<String, ProcessingError> {
            Self::validate_sample(filename)?;
            let path = Self::sample_path(filename);
            fs::read_to_string(&path)
                .map_err(|e| ProcessingError::IoError(format!("Failed to read {}: {}", path, e)))
        }

        /// Get sample content processed with the specified format string
        pub fn get_processed(filename: &str, format: &str) -> Result<String, ProcessingError> {
            Self::validate_sample(filename)?;
            let spec = ProcessingSpec::from_string(format)?;
            process_file(Self::sample_path(filename), &spec)
        }

        pub fn list_samples() -> Vec<&'static str> {
            AVAILABLE_SAMPLES.to_vec()
        }
    }
}

//! CLI command implementations.
//!
//! Contains the business logic for each CLI command, wiring the parsed
//! arguments into [`crate::scanner`], [`crate::chunking`], and
//! [`crate::orchestrator`].

use crate::chunking::create_chunker;
use crate::cli::output::{
    OutputFormat, format_chunk_list, format_document_list, format_export_summary,
    format_ignore_result,
};
use crate::cli::parser::{Cli, Commands, ExportFormat};
use crate::config::ProjectFile;
use crate::core::Document;
use crate::error::{CommandError, Result};
use crate::io::read_file;
use crate::orchestrator;
use crate::scanner::{IgnoreMatcher, Scanner};
use crate::tokenizer::Cl100kTokenizer;
use std::path::{Path, PathBuf};

/// Executes the CLI command.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);
    let project_config = load_project_file(cli.config.as_deref())?;

    match &cli.command {
        Commands::Scan { root, ignore } => cmd_scan(root, ignore, format),
        Commands::Chunk {
            file,
            strategy,
            max_tokens,
            overlap,
        } => cmd_chunk(file, strategy, *max_tokens, *overlap, format),
        Commands::IgnoreTest {
            path,
            pattern,
            include_embeddings: _,
        } => cmd_ignore_test(path, pattern, format),
        Commands::Export {
            root,
            ignore,
            format: export_format,
        } => cmd_export(root, ignore, export_format, &project_config, format),
    }
}

fn load_project_file(path: Option<&Path>) -> Result<ProjectFile> {
    path.map_or_else(|| Ok(ProjectFile::default()), ProjectFile::from_path)
}

fn scan_documents(root: &PathBuf, ignore_patterns: &[String]) -> Result<Vec<Document>> {
    let root_str = root.to_string_lossy().into_owned();
    let ignore = IgnoreMatcher::new(ignore_patterns.to_vec());
    let scanner = Scanner::new(root_str, ignore)?;
    scanner.scan()
}

fn cmd_scan(root: &PathBuf, ignore_patterns: &[String], format: OutputFormat) -> Result<String> {
    let documents = scan_documents(root, ignore_patterns)?;
    Ok(format_document_list(&documents, format))
}

fn cmd_chunk(
    file: &Path,
    strategy: &str,
    max_tokens: usize,
    overlap: usize,
    format: OutputFormat,
) -> Result<String> {
    let raw = read_file(file)?;
    let relative_path = file.to_string_lossy().into_owned();
    let (frontmatter, body) = crate::scanner::frontmatter::strip_frontmatter(&raw);
    let title = crate::scanner::frontmatter::extract_title(&frontmatter, &body);

    let document = Document {
        id: Document::compute_id(&relative_path),
        path: file.to_path_buf(),
        relative_path,
        title,
        body: body.clone(),
        modified: 0,
        frontmatter,
        sections: crate::scanner::structure::extract_sections(&body),
        links: crate::scanner::structure::extract_links(&body),
        code_blocks: crate::scanner::structure::extract_code_blocks(&body),
    };

    let chunker = create_chunker(strategy)?;
    let tokenizer = Cl100kTokenizer::new()?;
    chunker.validate(max_tokens, overlap)?;
    let chunks = chunker.chunk(&document, &tokenizer, max_tokens, overlap)?;

    Ok(format_chunk_list(&chunks, format))
}

fn cmd_ignore_test(path: &str, patterns: &[String], format: OutputFormat) -> Result<String> {
    let matcher = IgnoreMatcher::new(patterns.to_vec());
    let ignored = matcher.should_ignore(path);
    Ok(format_ignore_result(path, ignored, format))
}

fn cmd_export(
    root: &PathBuf,
    ignore_patterns: &[String],
    export_format: &ExportFormat,
    project_config: &ProjectFile,
    format: OutputFormat,
) -> Result<String> {
    let documents = scan_documents(root, ignore_patterns)?;

    match export_format {
        ExportFormat::Index {
            name,
            description,
            output,
        } => {
            let config = merged_project_config(project_config, name, description);
            let bytes = orchestrator::build_index(&documents, &config);
            write_and_summarize("index", &bytes, output.as_deref(), format)
        }
        ExportFormat::Full {
            name,
            description,
            output,
        } => {
            let config = merged_project_config(project_config, name, description);
            let bytes = orchestrator::build_full(&documents, &config);
            write_and_summarize("full", &bytes, output.as_deref(), format)
        }
        ExportFormat::Jsonl {
            strategy,
            max_tokens,
            overlap,
            output,
        } => {
            let tokenizer = Cl100kTokenizer::new()?;
            let bytes =
                orchestrator::build_jsonl(&documents, &tokenizer, strategy, *max_tokens, *overlap)?;
            write_and_summarize("jsonl", &bytes, output.as_deref(), format)
        }
        ExportFormat::Markdown { output } => {
            let tokenizer = Cl100kTokenizer::new()?;
            let bytes = orchestrator::build_markdown(&documents, &tokenizer);
            write_and_summarize("markdown", &bytes, output.as_deref(), format)
        }
    }
}

fn merged_project_config(
    project_config: &ProjectFile,
    name: &Option<String>,
    description: &Option<String>,
) -> crate::config::ProjectConfig {
    crate::config::ProjectConfig {
        name: name.clone().unwrap_or_else(|| project_config.project.name.clone()),
        description: description
            .clone()
            .unwrap_or_else(|| project_config.project.description.clone()),
    }
}

fn write_and_summarize(
    label: &str,
    bytes: &[u8],
    output: Option<&Path>,
    format: OutputFormat,
) -> Result<String> {
    if let Some(path) = output {
        let content = String::from_utf8(bytes.to_vec()).map_err(|e| {
            CommandError::ExecutionFailed(format!("export produced invalid UTF-8: {e}"))
        })?;
        crate::io::write_file(path, &content)?;
    }
    Ok(format_export_summary(label, bytes, format))
}

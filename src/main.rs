// src/main.rs

use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use std::fs;
use wp2content::{
    deliver, render_json, AppError, CommandLineInput, ContentDocument, ContentQuery, ContentSource,
    DeliveryTarget, DocumentComposer, DocumentDelivery, OutputPlan, OutputReport, PipelineConfig,
    RenderedDocument, WordPressFetcher, WordPressRepository,
};

/// Sets up logging configuration.
///
/// Console logs go to stderr so stdout carries only the JSON document.
fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("wp2content.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stderr_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] {t} - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Executes the three-stage pipeline: fetch → compose → deliver.
async fn execute_pipeline(config: &PipelineConfig) -> Result<(), AppError> {
    let pipeline = WordPressToJson::new(config)?;

    let content = pipeline.fetch(&config.query).await?;
    let document = pipeline.compose(content.as_ref())?;
    let report = pipeline.deliver(document)?;
    pipeline.report_completion(content.as_ref(), &report);

    Ok(())
}

/// Orchestrates retrieval, serialization and delivery of one lookup.
struct WordPressToJson<'a> {
    config: &'a PipelineConfig,
    fetcher: WordPressFetcher,
}

impl<'a> WordPressToJson<'a> {
    fn new(config: &'a PipelineConfig) -> Result<Self, AppError> {
        let fetcher = WordPressFetcher::connect(&config.site)?;
        Ok(Self { config, fetcher })
    }

    fn plan_delivery(&self, document: RenderedDocument) -> OutputPlan {
        let content = document.into_string();
        let mut plan = OutputPlan::new();

        if self.config.prints_to_stdout() {
            return plan.with_operation(DeliveryTarget::PrintToStdout { content });
        }

        if let Some(path) = &self.config.output_file {
            plan = plan.with_operation(DeliveryTarget::WriteFile {
                path: path.clone(),
                content: content.clone(),
            });
        }

        if self.config.clipboard {
            plan = plan.with_operation(DeliveryTarget::CopyToClipboard { content });
        }

        plan
    }

    /// Tells the user where the document went. Silent when printing to stdout.
    fn report_completion(&self, content: Option<&ContentDocument>, report: &OutputReport) {
        if self.config.prints_to_stdout() {
            return;
        }

        match content {
            Some(document) => eprintln!(
                "Fetched {} '{}'",
                document.object_type_name(),
                document.display_title()
            ),
            None => eprintln!("Nothing matched {}", self.config.query),
        }

        for completed in &report.completed {
            match &completed.operation {
                DeliveryTarget::WriteFile { path, .. } => {
                    eprintln!("✓ Saved to {}", path.display());
                }
                DeliveryTarget::CopyToClipboard { .. } => {
                    eprintln!("✓ Copied to clipboard");
                }
                DeliveryTarget::PrintToStdout { .. } => {}
            }
        }
    }
}

#[async_trait::async_trait]
impl ContentSource for WordPressToJson<'_> {
    async fn fetch(&self, query: &ContentQuery) -> Result<Option<ContentDocument>, AppError> {
        log::info!(
            "Retrieving {} from {} (locale {})",
            query,
            self.fetcher.endpoints().site(),
            query.locale().as_str()
        );

        let content = self.fetcher.resolve_query(query).await?;

        match &content {
            Some(document) => log::info!(
                "Retrieved {} '{}'",
                document.object_type_name(),
                document.display_title()
            ),
            None => log::warn!("No content matched {}", query),
        }

        Ok(content)
    }
}

impl DocumentComposer for WordPressToJson<'_> {
    fn compose(&self, content: Option<&ContentDocument>) -> Result<RenderedDocument, AppError> {
        render_json(content, self.config.compact)
    }
}

impl DocumentDelivery for WordPressToJson<'_> {
    fn deliver(&self, document: RenderedDocument) -> Result<OutputReport, AppError> {
        let report = deliver(self.plan_delivery(document))?;

        if !report.is_success() {
            return Err(AppError::DeliveryFailed {
                failures: report.failed.iter().map(|f| f.error.clone()).collect(),
            });
        }

        Ok(report)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = PipelineConfig::resolve(cli)?;

    execute_pipeline(&config).await?;

    Ok(())
}

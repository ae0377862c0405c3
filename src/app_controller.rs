use futures::stream::{FuturesUnordered, StreamExt};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use crate::app_config::Config;
use crate::errors::{AppError, ConfigError, JobError, SourceError, WriteError};
use crate::file_utils::{FileManager, LocalFileStore, ResourceStore};
use crate::language_utils;
use crate::translation::{Substitutor, TranslationLoader};

// @module: Application controller running one job per requested language

/// Stage of a language job
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    /// Reading and parsing the translation table
    Loading,
    /// Replacing placeholders in memory
    Substituting,
    /// Creating the output directory and writing the result
    Writing,
    /// Output written
    Done,
    /// Stopped on an error
    Failed,
}

/// Result of one language job
#[derive(Debug)]
pub struct JobOutcome {
    /// Language the job ran for
    pub language: String,
    /// Written output path, or the failure
    pub result: Result<PathBuf, JobError>,
}

impl JobOutcome {
    /// Whether the job wrote its output
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Written output path
    pub fn output_path(&self) -> Option<&Path> {
        self.result.as_ref().ok().map(PathBuf::as_path)
    }

    /// Failure, if any
    pub fn error(&self) -> Option<&JobError> {
        self.result.as_ref().err()
    }
}

/// Outcomes of a run, in completion order
#[derive(Debug, Default)]
pub struct RunSummary {
    pub outcomes: Vec<JobOutcome>,
}

impl RunSummary {
    /// Number of jobs that wrote their output
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// Number of failed jobs
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// Whether every job succeeded
    pub fn all_succeeded(&self) -> bool {
        self.failed() == 0
    }

    /// First outcome recorded for a language
    pub fn outcome_for(&self, language: &str) -> Option<&JobOutcome> {
        self.outcomes.iter().find(|o| o.language == language)
    }
}

/// Work unit producing one language's output.
///
/// Runs `Loading -> Substituting -> Writing -> Done`, or stops in `Failed`.
/// Each stage only starts once the previous one has succeeded.
#[derive(Debug)]
pub struct LanguageJob {
    language: String,
    source: Arc<str>,
    config: Arc<Config>,
    store: Arc<dyn ResourceStore>,
    state: JobState,
}

impl LanguageJob {
    /// Create a job for a language over a shared source text
    pub fn new(
        language: impl Into<String>,
        source: Arc<str>,
        config: Arc<Config>,
        store: Arc<dyn ResourceStore>,
    ) -> Self {
        Self {
            language: language.into(),
            source,
            config,
            store,
            state: JobState::Loading,
        }
    }

    /// Current stage
    pub fn state(&self) -> JobState {
        self.state
    }

    /// Run the job to completion
    pub async fn run(mut self) -> JobOutcome {
        let result = self.execute().await;
        self.transition(if result.is_ok() { JobState::Done } else { JobState::Failed });
        JobOutcome {
            language: self.language,
            result,
        }
    }

    fn transition(&mut self, next: JobState) {
        debug!("[{}] {:?} -> {:?}", self.language, self.state, next);
        self.state = next;
    }

    async fn execute(&mut self) -> Result<PathBuf, JobError> {
        let loader = TranslationLoader::new(self.config.input_directory.clone(), Arc::clone(&self.store));
        let table = loader.load(&self.language).await?;

        self.transition(JobState::Substituting);
        let substitutor = Substitutor::new(&table, &self.config.delimiters)?;
        let output = substitutor.substitute(&self.source);

        self.transition(JobState::Writing);
        let output_dir = &self.config.output_directory;
        self.store
            .create_dir_all(output_dir)
            .await
            .map_err(|source| WriteError::CreateDir {
                path: output_dir.clone(),
                source,
            })?;

        let output_path = FileManager::generate_output_path(
            &self.config.source_file,
            output_dir,
            &self.config.output_name,
            &self.language,
        );
        self.store
            .write(&output_path, output.as_bytes())
            .await
            .map_err(|source| WriteError::File {
                path: output_path.clone(),
                source,
            })?;

        Ok(output_path)
    }
}

/// Main application controller
pub struct Controller {
    // @field: Resolved configuration shared with every job
    config: Arc<Config>,
    // @field: File access for the source, translations and outputs
    store: Arc<dyn ResourceStore>,
}

impl Controller {
    // @method: Create a controller working on the local file system
    pub fn with_config(config: Config) -> Result<Self, ConfigError> {
        Self::with_store(config, Arc::new(LocalFileStore))
    }

    // @method: Create a controller over a custom store
    pub fn with_store(config: Config, store: Arc<dyn ResourceStore>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
            store,
        })
    }

    /// Resolved configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read the source document, then run every language job.
    ///
    /// Only a source failure is returned as an error; job failures are
    /// reported and collected in the summary.
    pub async fn run(&self) -> Result<RunSummary, AppError> {
        let start_time = Instant::now();
        let source = self.read_source().await?;
        let summary = self.run_with_source(source).await;

        info!(
            "Finished {} language(s) in {:.2?}: {} succeeded, {} failed",
            summary.outcomes.len(),
            start_time.elapsed(),
            summary.succeeded(),
            summary.failed()
        );
        Ok(summary)
    }

    /// Read and decode the source document, deleting it afterwards when configured
    pub async fn read_source(&self) -> Result<Arc<str>, SourceError> {
        let path = &self.config.source_file;
        let bytes = self.store.read(path).await.map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                SourceError::NotFound { path: path.clone() }
            } else {
                SourceError::Io {
                    path: path.clone(),
                    source,
                }
            }
        })?;

        if self.config.delete_source {
            self.store
                .remove_file(path)
                .await
                .map_err(|source| SourceError::Delete {
                    path: path.clone(),
                    source,
                })?;
            debug!("Deleted source file {:?}", path);
        }

        let (text, lossy) = FileManager::decode_text(bytes);
        if lossy {
            warn!("{:?} is not valid UTF-8, invalid sequences were replaced", path);
        }
        Ok(Arc::from(text))
    }

    /// Run one job per language over an already loaded source.
    ///
    /// All jobs are started before any is awaited, and each outcome is
    /// reported as soon as its job finishes.
    pub async fn run_with_source(&self, source: Arc<str>) -> RunSummary {
        self.warn_about_overwrites();

        let mut pending = FuturesUnordered::new();
        for language in &self.config.languages {
            let job = LanguageJob::new(
                language.clone(),
                Arc::clone(&source),
                Arc::clone(&self.config),
                Arc::clone(&self.store),
            );
            let handle = tokio::spawn(job.run());
            let language = language.clone();
            pending.push(async move {
                match handle.await {
                    Ok(outcome) => outcome,
                    Err(e) => JobOutcome {
                        language,
                        result: Err(JobError::Aborted(e.to_string())),
                    },
                }
            });
        }

        let mut summary = RunSummary::default();
        while let Some(outcome) = pending.next().await {
            self.report(&outcome);
            summary.outcomes.push(outcome);
        }
        summary
    }

    fn report(&self, outcome: &JobOutcome) {
        let source_file = self.config.source_file.display();
        match &outcome.result {
            Ok(path) => info!(
                "Success: {} has been internationalized with {} translation keys -> {}",
                source_file,
                language_utils::describe_language(&outcome.language),
                path.display()
            ),
            Err(e) => error!(
                "Error: {} could not be internationalized with {} translation keys: {}",
                source_file, outcome.language, e
            ),
        }
    }

    fn warn_about_overwrites(&self) {
        for language in language_utils::find_duplicates(&self.config.languages) {
            warn!("Language {} is requested more than once, its output will be written repeatedly", language);
        }
        if self.config.output_name.is_fixed() && self.config.languages.len() > 1 {
            warn!(
                "An explicit output name is set for {} languages, each output overwrites the previous one",
                self.config.languages.len()
            );
        }
    }
}

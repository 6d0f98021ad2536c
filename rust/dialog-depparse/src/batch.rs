//! Batch parsing over many sentences.
//!
//! Sentences share nothing but the read-only parser, so a batch is
//! embarrassingly parallel. [`parse_stream`] decodes sentences on tokio's
//! blocking pool, keeping at most [`ParserConfig::concurrency`] in flight,
//! and yields reports in input order. [`Parser::parse_batch`] does the same
//! work sequentially.
//!
//! One bad sentence never aborts a batch: each report carries its own
//! complete, partial or failed status.
//!
//! [`ParserConfig::concurrency`]: crate::ParserConfig::concurrency

use std::sync::Arc;

use futures_core::Stream;
use futures_util::StreamExt;

use crate::error::DepParseError;
use crate::parser::Parser;
use crate::scorer::ActionScorer;
use crate::sentence::Sentence;
use crate::tree::DependencyStructure;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStatus {
    Complete,
    Partial,
    Failed,
}

/// The result of parsing the `index`-th sentence of a batch.
#[derive(Debug)]
pub struct SentenceReport {
    pub index: usize,
    pub result: Result<DependencyStructure, DepParseError>,
}

impl SentenceReport {
    fn new(index: usize, result: Result<DependencyStructure, DepParseError>) -> Self {
        let report = SentenceReport { index, result };
        match &report.result {
            Ok(structure) if !structure.is_complete() => {
                tracing::warn!(index, status = ?structure.status(), "sentence parsed partially");
            }
            Err(error) => {
                tracing::warn!(
                    index,
                    %error,
                    malformed_scores = error.is_malformed_scores(),
                    "sentence failed to parse"
                );
            }
            Ok(_) => {}
        }
        report
    }

    pub fn status(&self) -> ReportStatus {
        match &self.result {
            Ok(structure) if structure.is_complete() => ReportStatus::Complete,
            Ok(_) => ReportStatus::Partial,
            Err(_) => ReportStatus::Failed,
        }
    }

    pub fn structure(&self) -> Option<&DependencyStructure> {
        self.result.as_ref().ok()
    }
}

/// Per-status counts over a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub complete: usize,
    pub partial: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn record(&mut self, report: &SentenceReport) {
        match report.status() {
            ReportStatus::Complete => self.complete += 1,
            ReportStatus::Partial => self.partial += 1,
            ReportStatus::Failed => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.complete + self.partial + self.failed
    }
}

impl<'a> FromIterator<&'a SentenceReport> for BatchSummary {
    fn from_iter<I: IntoIterator<Item = &'a SentenceReport>>(reports: I) -> Self {
        let mut summary = BatchSummary::default();
        for report in reports {
            summary.record(report);
        }
        tracing::info!(
            complete = summary.complete,
            partial = summary.partial,
            failed = summary.failed,
            "batch finished"
        );
        summary
    }
}

impl<S: ActionScorer> Parser<S> {
    /// Parse every sentence in order, one at a time.
    pub fn parse_batch<I>(&self, sentences: I) -> Vec<SentenceReport>
    where
        I: IntoIterator<Item = Sentence>,
    {
        sentences
            .into_iter()
            .enumerate()
            .map(|(index, sentence)| SentenceReport::new(index, self.parse_sentence(&sentence)))
            .collect()
    }
}

/// Parse a stream of sentences concurrently, yielding reports in input order.
///
/// Must be polled from within a tokio runtime.
pub fn parse_stream<S, St>(
    parser: Arc<Parser<S>>,
    sentences: St,
) -> impl Stream<Item = SentenceReport>
where
    S: ActionScorer + Send + Sync + 'static,
    St: Stream<Item = Sentence>,
{
    let workers = parser.config().workers();
    sentences
        .enumerate()
        .map(move |(index, sentence)| {
            let parser = parser.clone();
            async move {
                let result =
                    tokio::task::spawn_blocking(move || parser.parse_sentence(&sentence))
                        .await
                        .unwrap_or_else(|error| Err(DepParseError::Worker(error.to_string())));
                SentenceReport::new(index, result)
            }
        })
        .buffered(workers)
}

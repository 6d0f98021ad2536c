use std::sync::Arc;

use anyhow::Result;
use dialog_depparse::{
    Action, ActionScorer, BatchSummary, Configuration, DepParseError, Parser, ParserConfig,
    ReportStatus, ScoredAction, Sentence, SentenceReport, parse_stream,
};
use futures_util::{StreamExt, stream};
use pretty_assertions::assert_eq;

/// Builds right-branching chains. Sentences starting with "broken" get a
/// non-finite score; sentences starting with "stuck" never see a shift.
struct Scripted;

impl ActionScorer for Scripted {
    fn score_actions(
        &self,
        configuration: &Configuration,
        sentence: &Sentence,
    ) -> Result<Vec<ScoredAction>, DepParseError> {
        match sentence.word(1) {
            Some("broken") => Ok(vec![ScoredAction::new(Action::Shift, f64::INFINITY)]),
            Some("stuck") => Ok(vec![ScoredAction::new(Action::right_arc("dep"), 1.0)]),
            _ => {
                let shift = if configuration.buffer().is_empty() { 0.0 } else { 1.0 };
                Ok(vec![
                    ScoredAction::new(Action::Shift, shift),
                    ScoredAction::new(Action::right_arc("dep"), 0.5),
                ])
            }
        }
    }
}

fn sentences() -> Vec<Sentence> {
    [
        vec!["one"],
        vec!["broken", "input"],
        vec!["three", "little", "words"],
        vec!["stuck", "here"],
        vec![],
        vec!["last", "one"],
    ]
    .into_iter()
    .map(|words| {
        let tags = vec!["X"; words.len()];
        Sentence::new(words, tags).expect("aligned")
    })
    .collect()
}

fn statuses(reports: &[SentenceReport]) -> Vec<(usize, ReportStatus)> {
    reports.iter().map(|r| (r.index, r.status())).collect()
}

fn expected() -> Vec<(usize, ReportStatus)> {
    vec![
        (0, ReportStatus::Complete),
        (1, ReportStatus::Failed),
        (2, ReportStatus::Complete),
        (3, ReportStatus::Partial),
        (4, ReportStatus::Complete),
        (5, ReportStatus::Complete),
    ]
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn stream_reports_in_input_order() -> Result<()> {
    let parser = Arc::new(Parser::with_config(
        Scripted,
        ParserConfig::default().with_concurrency(3),
    ));

    let reports = parse_stream(parser, stream::iter(sentences()))
        .collect::<Vec<_>>()
        .await;

    assert_eq!(statuses(&reports), expected());

    let summary = reports.iter().collect::<BatchSummary>();
    assert_eq!(summary.complete, 4);
    assert_eq!(summary.partial, 1);
    assert_eq!(summary.failed, 1);

    let failure = reports[1].result.as_ref().err();
    assert!(matches!(failure, Some(DepParseError::NonFiniteScore { .. })));

    Ok(())
}

#[tokio::test]
async fn stream_matches_sequential_batch() -> Result<()> {
    let parser = Arc::new(Parser::new(Scripted));

    let sequential = parser.parse_batch(sentences());
    let streamed = parse_stream(parser.clone(), stream::iter(sentences()))
        .collect::<Vec<_>>()
        .await;

    assert_eq!(statuses(&sequential), statuses(&streamed));
    for (a, b) in sequential.iter().zip(&streamed) {
        assert_eq!(a.structure(), b.structure());
    }

    Ok(())
}

#[tokio::test]
async fn single_worker_still_drains_the_stream() -> Result<()> {
    let parser = Arc::new(Parser::with_config(
        Scripted,
        ParserConfig::default().with_concurrency(0),
    ));

    let reports = parse_stream(parser, stream::iter(sentences()))
        .collect::<Vec<_>>()
        .await;

    assert_eq!(reports.len(), 6);
    Ok(())
}

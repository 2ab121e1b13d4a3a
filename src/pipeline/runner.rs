//! Parallel execution and run statistics.

use std::time::{Duration, Instant};

use log::info;
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TweetnormError};
use crate::pipeline::Pipeline;
use crate::pipeline::record::Record;

impl Pipeline {
    /// Process records on a dedicated pool of `threads` workers.
    ///
    /// Output order matches input order. With `threads <= 1` the records are
    /// processed on the calling thread.
    pub fn run_parallel<I, R>(&self, records: I, threads: usize) -> Result<Vec<Record>>
    where
        I: IntoIterator<Item = R>,
        R: Into<Record>,
    {
        let records: Vec<Record> = records.into_iter().map(Into::into).collect();
        if threads <= 1 || records.len() < 2 {
            return Ok(self.run(records));
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("tweetnorm-{i}"))
            .build()
            .map_err(|e| TweetnormError::other(format!("Failed to create thread pool: {e}")))?;

        Ok(pool.install(|| {
            records
                .into_par_iter()
                .map(|record| self.process(record))
                .collect()
        }))
    }

    /// Process records and report what came out.
    pub fn run_with_summary<I, R>(
        &self,
        records: I,
        threads: usize,
    ) -> Result<(Vec<Record>, RunSummary)>
    where
        I: IntoIterator<Item = R>,
        R: Into<Record>,
    {
        let start = Instant::now();
        let output = self.run_parallel(records, threads)?;
        let summary = RunSummary::from_records(&output, start.elapsed());
        info!(
            "Normalized {} records ({} missing, {} tokens) in {} ms",
            summary.records, summary.missing, summary.tokens, summary.duration_ms
        );
        Ok((output, summary))
    }
}

/// Counts describing one run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Records processed.
    pub records: usize,
    /// Records without text.
    pub missing: usize,
    /// Records that ended as token sequences.
    pub tokenized: usize,
    /// Tokens across all records.
    pub tokens: usize,
    /// Wall-clock time.
    pub duration_ms: u64,
}

impl RunSummary {
    /// Summarize pipeline output.
    pub fn from_records(records: &[Record], elapsed: Duration) -> Self {
        let mut summary = RunSummary {
            records: records.len(),
            duration_ms: elapsed.as_millis() as u64,
            ..Default::default()
        };

        for record in records {
            match record {
                Record::Missing => summary.missing += 1,
                Record::Tokens(tokens) => {
                    summary.tokenized += 1;
                    summary.tokens += tokens.len();
                }
                Record::Text(_) => {}
            }
        }

        summary
    }

    /// Average tokens per tokenized record.
    pub fn tokens_per_record(&self) -> f64 {
        if self.tokenized == 0 {
            0.0
        } else {
            self.tokens as f64 / self.tokenized as f64
        }
    }
}

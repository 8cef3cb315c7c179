// This file is part of draw-bench and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2026 draw-bench contributors

//! The ordered log of timed tests

use std::fmt;
use std::time::{Duration, Instant};

use thiserror::Error;

/// Ordinal id of a test. Ids are handed out densely from 0 in the order tests are started.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TestId(usize);

impl TestId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for TestId {
    fn from(index: usize) -> Self {
        TestId(index)
    }
}

impl fmt::Display for TestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The record of one timed workload
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestResult {
    pub id: TestId,
    pub name: String,
    pub start_time: Instant,
    pub end_time: Option<Instant>,
    pub duration: Option<Duration>,
}

impl TestResult {
    pub fn is_finished(&self) -> bool {
        self.end_time.is_some()
    }
}

/// One line of the results screen
impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.duration {
            Some(duration) => write!(f, "Test {} ({}): {:.5} seconds", self.id, self.name, duration.as_secs_f64()),
            None => write!(f, "Test {} ({}): not finished", self.id, self.name),
        }
    }
}

/// Why an `end` request could not be applied. None of these are fatal; the log is left untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EndError {
    #[error("No test to end.")]
    Empty,
    #[error("No active test to end: test {0} has already ended.")]
    NoActiveTest(TestId),
    #[error("Invalid test ID: {id}. Only {count} tests exist.")]
    InvalidId { id: TestId, count: usize },
    #[error("Test {0} has already ended.")]
    AlreadyEnded(TestId),
}

/// A test that was just ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Completed<'a> {
    pub id: TestId,
    pub name: &'a str,
    pub duration: Duration,
}

/// Append-only, keyed by [`TestId`]. An entry's index in the log is always its id.
#[derive(Debug, Default)]
pub struct ResultLog {
    entries: Vec<TestResult>,
}

impl ResultLog {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TestResult> {
        self.entries.iter()
    }

    pub fn get(&self, id: TestId) -> Option<&TestResult> {
        self.entries.get(id.0)
    }

    /// The id the next [`ResultLog::begin`] will hand out
    pub fn next_id(&self) -> TestId {
        TestId(self.entries.len())
    }

    pub fn begin(&mut self, name: &str, start_time: Instant) -> TestId {
        let id = self.next_id();
        self.entries.push(TestResult {
            id,
            name: name.to_string(),
            start_time,
            end_time: None,
            duration: None,
        });
        id
    }

    /// Record `end_time` on the target test. With no explicit `id` the most recently started test is
    /// targeted, and it must still be running.
    pub fn finish(&mut self, id: Option<TestId>, end_time: Instant) -> Result<Completed<'_>, EndError> {
        let count = self.entries.len();
        let last = count.checked_sub(1).ok_or(EndError::Empty)?;

        let index = match id {
            Some(id) if id.0 >= count => return Err(EndError::InvalidId { id, count }),
            Some(id) if self.entries[id.0].is_finished() => return Err(EndError::AlreadyEnded(id)),
            Some(id) => id.0,
            None if self.entries[last].is_finished() => return Err(EndError::NoActiveTest(TestId(last))),
            None => last,
        };

        let entry = &mut self.entries[index];
        let duration = end_time.duration_since(entry.start_time);
        entry.end_time = Some(end_time);
        entry.duration = Some(duration);

        Ok(Completed {
            id: entry.id,
            name: &entry.name,
            duration,
        })
    }
}

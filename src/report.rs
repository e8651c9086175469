// Copyright 2026 dnsly developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use indexmap::IndexMap;
use serde::ser::{SerializeSeq, SerializeStruct};
use serde::{Serialize, Serializer};

use crate::resolver::LookupError;
use crate::RecordType;

/// Outcome of the lookup of one record type.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Outcome {
    /// The name resolved; the records may still be empty.
    Resolved(Vec<String>),
    Failed(LookupError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordResult {
    record_type: RecordType,
    outcome: Outcome,
}

impl RecordResult {
    pub fn resolved(record_type: RecordType, records: Vec<String>) -> RecordResult {
        RecordResult {
            record_type,
            outcome: Outcome::Resolved(records),
        }
    }

    pub fn failed(record_type: RecordType, error: LookupError) -> RecordResult {
        RecordResult {
            record_type,
            outcome: Outcome::Failed(error),
        }
    }

    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    pub fn success(&self) -> bool {
        matches!(self.outcome, Outcome::Resolved(_))
    }

    /// Records found; empty for failed lookups.
    pub fn records(&self) -> &[String] {
        match &self.outcome {
            Outcome::Resolved(records) => records,
            Outcome::Failed(_) => &[],
        }
    }

    pub fn error(&self) -> Option<&LookupError> {
        match &self.outcome {
            Outcome::Resolved(_) => None,
            Outcome::Failed(err) => Some(err),
        }
    }

    pub fn count(&self) -> usize {
        self.records().len()
    }
}

impl Serialize for RecordResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.error().is_some() { 5 } else { 4 };
        let mut state = serializer.serialize_struct("RecordResult", len)?;
        state.serialize_field("record_type", &self.record_type)?;
        state.serialize_field("success", &self.success())?;
        state.serialize_field("records", self.records())?;
        if let Some(err) = self.error() {
            state.serialize_field("error", &err.to_string())?;
        }
        state.serialize_field("count", &self.count())?;
        state.end()
    }
}

/// Results of all lookups of one invocation in request order.
#[derive(Debug, Clone, Serialize)]
pub struct QueryReport {
    domain: String,
    #[serde(serialize_with = "ser_results")]
    results: IndexMap<RecordType, RecordResult>,
}

impl QueryReport {
    pub fn new<S: Into<String>>(domain: S) -> QueryReport {
        QueryReport {
            domain: domain.into(),
            results: IndexMap::new(),
        }
    }

    /// Adds a result; a second result for the same record type replaces the first but keeps its position.
    pub fn add(&mut self, result: RecordResult) {
        self.results.insert(result.record_type(), result);
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn get(&self, record_type: RecordType) -> Option<&RecordResult> {
        self.results.get(&record_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecordResult> {
        self.results.values()
    }

    pub fn record_types(&self) -> Vec<RecordType> {
        self.results.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn num_successes(&self) -> usize {
        self.iter().filter(|x| x.success()).count()
    }

    pub fn has_success(&self) -> bool {
        self.num_successes() > 0
    }

    pub fn errors(&self) -> impl Iterator<Item = &LookupError> {
        self.iter().filter_map(RecordResult::error)
    }
}

fn ser_results<S: Serializer>(results: &IndexMap<RecordType, RecordResult>, serializer: S) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(results.len()))?;
    for result in results.values() {
        seq.serialize_element(result)?;
    }
    seq.end()
}

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use spectral::prelude::*;

    use super::*;

    fn report() -> QueryReport {
        let mut report = QueryReport::new("example.com");
        report.add(RecordResult::resolved(RecordType::A, vec!["93.184.216.34".to_string()]));
        report.add(RecordResult::resolved(RecordType::CNAME, Vec::new()));
        report.add(RecordResult::failed(
            RecordType::MX,
            LookupError::NoRecords {
                record_type: RecordType::MX,
            },
        ));
        report
    }

    #[test]
    fn empty_result_is_not_a_failure() {
        crate::utils::tests::logging::init();
        let result = RecordResult::resolved(RecordType::TXT, Vec::new());

        assert_that(&result.success()).is_true();
        assert_that(&result.count()).is_equal_to(0);
        assert_that(&result.error()).is_none();
    }

    #[test]
    fn failed_result_has_no_records() {
        crate::utils::tests::logging::init();
        let result = RecordResult::failed(RecordType::A, LookupError::NxDomain);

        assert_that(&result.success()).is_false();
        assert_that(&result.count()).is_equal_to(0);
        assert_that(&result.error()).is_some().is_equal_to(&LookupError::NxDomain);
    }

    #[test]
    fn keeps_insertion_order() {
        crate::utils::tests::logging::init();

        assert_that(&report().record_types()).is_equal_to(vec![RecordType::A, RecordType::CNAME, RecordType::MX]);
    }

    #[test]
    fn counts_successes() {
        crate::utils::tests::logging::init();
        let report = report();

        assert_that(&report.num_successes()).is_equal_to(2);
        assert_that(&report.errors().count()).is_equal_to(1);
    }

    #[test]
    fn json_count_matches_records() {
        crate::utils::tests::logging::init();

        let json = serde_json::to_string(&report()).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_that(&value["domain"]).is_equal_to(&Value::from("example.com"));
        let results = value["results"].as_array().unwrap();
        assert_that(results).has_length(3);
        for result in results {
            let records = result["records"].as_array().unwrap();
            assert_that(&result["count"].as_u64()).is_equal_to(Some(records.len() as u64));
        }
        assert_that(&results[2]["error"]).is_equal_to(&Value::from("No MX records found"));
        assert_that(&results[0].get("error")).is_none();
    }
}

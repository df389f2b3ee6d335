//! Read-only collection of cases for one session.
//!
//! The store is filled once from whatever the shell provides and is never
//! written to afterwards. Edits the user makes in the detail view live in the
//! selection coordinator, not here.

use std::collections::HashSet;

use crate::event::CaseId;
use crate::model::Case;
use crate::StoreError;

const DEMO_CASES_JSON: &str = include_str!("../data/cases.json");

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseStore {
    cases: Vec<Case>,
    loaded: bool,
}

impl CaseStore {
    /// Builds a store, rejecting duplicate case identifiers.
    pub fn new(cases: Vec<Case>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(cases.len());
        for case in &cases {
            if !seen.insert(&case.id) {
                return Err(StoreError::DuplicateCaseId(case.id.to_string()));
            }
        }
        Ok(Self {
            cases,
            loaded: true,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let cases: Vec<Case> =
            serde_json::from_str(json).map_err(|e| StoreError::Malformed(e.to_string()))?;
        Self::new(cases)
    }

    /// The bundled demonstration data set.
    pub fn demo() -> Result<Self, StoreError> {
        Self::from_json(DEMO_CASES_JSON)
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    #[must_use]
    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    #[must_use]
    pub fn get(&self, id: &CaseId) -> Option<&Case> {
        self.cases.iter().find(|c| &c.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Distinct values in first-seen order.
    pub(crate) fn distinct<'a, F>(&'a self, field: F) -> Vec<String>
    where
        F: Fn(&'a Case) -> Option<&'a str>,
    {
        let mut seen = HashSet::new();
        self.cases
            .iter()
            .filter_map(field)
            .filter(|v| seen.insert(*v))
            .map(str::to_string)
            .collect()
    }
}

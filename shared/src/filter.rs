//! Queue filtering.
//!
//! [`apply`] is a stable, conjunctive filter over the store's order. The four
//! selectors are independent; each one's default matches every case. Option
//! values coming from the shell's dropdowns ("All", "Any", "Me", "Unassigned"
//! or a literal) are parsed with the `from_option_value` constructors.

use serde::{Deserialize, Serialize};

use crate::case_store::CaseStore;
use crate::model::{Case, User};

pub const ALL_QUEUES: &str = "All";
pub const ANY: &str = "Any";
pub const ME: &str = "Me";
pub const UNASSIGNED: &str = "Unassigned";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub enum QueueFilter {
    #[default]
    All,
    Named(String),
}

impl QueueFilter {
    #[must_use]
    pub fn from_option_value(value: &str) -> Self {
        match value {
            ALL_QUEUES => Self::All,
            name => Self::Named(name.to_string()),
        }
    }

    #[must_use]
    pub fn option_value(&self) -> &str {
        match self {
            Self::All => ALL_QUEUES,
            Self::Named(name) => name,
        }
    }

    fn matches(&self, case: &Case) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => case.queue == *name,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub enum AssigneeFilter {
    #[default]
    Any,
    Me,
    Unassigned,
    Named(String),
}

impl AssigneeFilter {
    #[must_use]
    pub fn from_option_value(value: &str) -> Self {
        match value {
            ANY => Self::Any,
            ME => Self::Me,
            UNASSIGNED => Self::Unassigned,
            name => Self::Named(name.to_string()),
        }
    }

    #[must_use]
    pub fn option_value(&self) -> &str {
        match self {
            Self::Any => ANY,
            Self::Me => ME,
            Self::Unassigned => UNASSIGNED,
            Self::Named(name) => name,
        }
    }

    fn matches(&self, case: &Case, user: &User) -> bool {
        match self {
            Self::Any => true,
            Self::Me => case.assignee.as_deref() == Some(user.name.as_str()),
            Self::Unassigned => case.assignee.is_none(),
            Self::Named(name) => case.assignee.as_deref() == Some(name.as_str()),
        }
    }
}

/// Exact-match selector used for broker and transaction type.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub enum MatchFilter {
    #[default]
    Any,
    Exactly(String),
}

impl MatchFilter {
    #[must_use]
    pub fn from_option_value(value: &str) -> Self {
        match value {
            ANY => Self::Any,
            v => Self::Exactly(v.to_string()),
        }
    }

    #[must_use]
    pub fn option_value(&self) -> &str {
        match self {
            Self::Any => ANY,
            Self::Exactly(v) => v,
        }
    }

    fn matches(&self, value: Option<&str>) -> bool {
        match self {
            Self::Any => true,
            Self::Exactly(expected) => value == Some(expected.as_str()),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub queue: QueueFilter,
    pub assignee: AssigneeFilter,
    pub broker: MatchFilter,
    pub transaction_type: MatchFilter,
}

impl FilterCriteria {
    /// True when nothing narrows the queue.
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    #[must_use]
    pub fn matches(&self, case: &Case, user: &User) -> bool {
        self.queue.matches(case)
            && self.assignee.matches(case, user)
            && self.broker.matches(Some(case.broker.as_str()))
            && self.transaction_type.matches(case.transaction_type.as_deref())
    }
}

/// Visible subset of `cases`, in store order.
#[must_use]
pub fn apply<'a>(cases: &'a [Case], criteria: &FilterCriteria, current_user: &User) -> Vec<&'a Case> {
    cases
        .iter()
        .filter(|case| criteria.matches(case, current_user))
        .collect()
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    fn literal(value: &str) -> Self {
        Self::new(value, value)
    }
}

/// Dropdown contents for the four selectors.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FilterOptions {
    pub queues: Vec<SelectOption>,
    pub assignees: Vec<SelectOption>,
    pub brokers: Vec<SelectOption>,
    pub transaction_types: Vec<SelectOption>,
}

impl FilterOptions {
    #[must_use]
    pub fn from_store(store: &CaseStore) -> Self {
        let queues = std::iter::once(SelectOption::new("All queues", ALL_QUEUES))
            .chain(store.distinct(|c| Some(c.queue.as_str())).iter().map(|q| SelectOption::literal(q)))
            .collect();

        let assignees = [
            SelectOption::new("Any / All", ANY),
            SelectOption::new(ME, ME),
            SelectOption::new(UNASSIGNED, UNASSIGNED),
        ]
        .into_iter()
        .chain(store.distinct(|c| c.assignee.as_deref()).iter().map(|a| SelectOption::literal(a)))
        .collect();

        let brokers = std::iter::once(SelectOption::literal(ANY))
            .chain(store.distinct(|c| Some(c.broker.as_str())).iter().map(|b| SelectOption::literal(b)))
            .collect();

        let transaction_types = std::iter::once(SelectOption::literal(ANY))
            .chain(
                store
                    .distinct(|c| c.transaction_type.as_deref())
                    .iter()
                    .map(|t| SelectOption::literal(t)),
            )
            .collect();

        Self {
            queues,
            assignees,
            brokers,
            transaction_types,
        }
    }
}

//! Ranked preferences, keyed either by person or by task.
//!
//! Both maps keep entries in the order they were first inserted.

use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::rvals::QueryVal;

type OrderedMap<V> = IndexMap<String, V, FxBuildHasher>;

/// person -> tasks, most preferred first
///
/// JSON objects deserialize in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreferenceMap {
    people: OrderedMap<Vec<String>>,
}

impl PreferenceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `person`'s preferences. A person already present keeps their
    /// position and has their list replaced.
    pub fn insert<P, T, I>(&mut self, person: P, tasks: I)
    where
        P: Into<String>,
        T: Into<String>,
        I: IntoIterator<Item = T>,
    {
        self.people
            .insert(person.into(), tasks.into_iter().map(Into::into).collect());
    }

    pub fn get(&self, person: &str) -> Option<&[String]> {
        self.people.get(person).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.people
            .iter()
            .map(|(person, tasks)| (person.as_str(), tasks.as_slice()))
    }

    pub fn people(&self) -> impl Iterator<Item = &str> {
        self.people.keys().map(String::as_str)
    }

    /// Number of (person, task) occurrences across every list.
    pub fn occurrences(&self) -> usize {
        self.people.values().map(Vec::len).sum()
    }

    /// `[person, ...]` in iteration order.
    pub fn people_query_val(&self) -> QueryVal {
        QueryVal::list(self.people())
    }
}

impl<P, T, I> FromIterator<(P, I)> for PreferenceMap
where
    P: Into<String>,
    T: Into<String>,
    I: IntoIterator<Item = T>,
{
    fn from_iter<It: IntoIterator<Item = (P, I)>>(iter: It) -> Self {
        let mut prefs = PreferenceMap::new();
        for (person, tasks) in iter {
            prefs.insert(person, tasks);
        }
        prefs
    }
}

/// One person's ranking of a particular task. Serialized as `[person, rank]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(String, usize)", into = "(String, usize)")]
pub struct Ranking {
    pub person: String,
    pub rank: usize,
}

impl Ranking {
    pub fn new(person: impl Into<String>, rank: usize) -> Self {
        Ranking {
            person: person.into(),
            rank,
        }
    }

    pub fn to_query_val(&self) -> QueryVal {
        QueryVal::List(vec![
            QueryVal::atom(self.person.as_str()),
            QueryVal::from(self.rank),
        ])
    }
}

impl From<(String, usize)> for Ranking {
    fn from((person, rank): (String, usize)) -> Self {
        Ranking { person, rank }
    }
}

impl From<Ranking> for (String, usize) {
    fn from(ranking: Ranking) -> Self {
        (ranking.person, ranking.rank)
    }
}

/// task -> rankings, in the order the ranking people were visited
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskPreferenceMap {
    tasks: OrderedMap<Vec<Ranking>>,
}

impl TaskPreferenceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// The ranking list for `task`, created empty the first time it is asked for.
    pub fn entry(&mut self, task: &str) -> &mut Vec<Ranking> {
        if !self.tasks.contains_key(task) {
            trace!("new task entry: {}", task);
        }
        self.tasks.entry(task.to_string()).or_default()
    }

    pub fn get(&self, task: &str) -> Option<&[Ranking]> {
        self.tasks.get(task).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Ranking])> {
        self.tasks
            .iter()
            .map(|(task, rankings)| (task.as_str(), rankings.as_slice()))
    }

    pub fn tasks(&self) -> impl Iterator<Item = &str> {
        self.tasks.keys().map(String::as_str)
    }

    /// Total number of rankings across every task.
    pub fn rankings(&self) -> usize {
        self.tasks.values().map(Vec::len).sum()
    }

    /// `[task, [person, rank], ...]` for one task.
    pub fn task_query_val(task: &str, rankings: &[Ranking]) -> QueryVal {
        let mut items = Vec::with_capacity(rankings.len() + 1);
        items.push(QueryVal::atom(task));
        items.extend(rankings.iter().map(Ranking::to_query_val));
        QueryVal::List(items)
    }

    /// `[[task, [person, rank], ...], ...]`
    pub fn to_query_val(&self) -> QueryVal {
        QueryVal::List(
            self.iter()
                .map(|(task, rankings)| Self::task_query_val(task, rankings))
                .collect(),
        )
    }
}

/// Inverts person -> tasks into task -> (person, rank).
///
/// Ranks are 1-based positions in each person's list. Nothing is
/// deduplicated: every (person, task) occurrence produces one ranking.
pub fn map_preferences_to_tasks(prefs: &PreferenceMap) -> TaskPreferenceMap {
    let mut tasks = TaskPreferenceMap::new();
    for (person, choices) in prefs.iter() {
        for (i, task) in choices.iter().enumerate() {
            tasks.entry(task).push(Ranking::new(person, i + 1));
        }
    }
    debug!(
        "mapped {} people onto {} tasks ({} rankings)",
        prefs.len(),
        tasks.len(),
        tasks.rankings()
    );
    tasks
}

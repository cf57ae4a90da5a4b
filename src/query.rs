use log::debug;

use crate::prefs::{map_preferences_to_tasks, PreferenceMap, TaskPreferenceMap};
use crate::rerrs::Result;
use crate::rvals::QueryVal;
use crate::stop;

pub const DEFAULT_RESULT_VAR: &str = "Result";

/// Builder for a `match/3` query over a set of preferences.
///
/// ```
/// use prefquery::{MatchQuery, PreferenceMap};
///
/// let prefs: PreferenceMap = vec![("fe", vec!["task1"])].into_iter().collect();
/// let query = MatchQuery::new(&prefs).with_result_var("Assignment").unwrap();
/// assert_eq!(query.compact(), "match([[task1, [fe, 1]]], [fe], Assignment).");
/// ```
#[derive(Clone, Debug)]
pub struct MatchQuery {
    tasks: TaskPreferenceMap,
    people: QueryVal,
    result_var: String,
}

impl MatchQuery {
    pub fn new(prefs: &PreferenceMap) -> Self {
        MatchQuery {
            tasks: map_preferences_to_tasks(prefs),
            people: prefs.people_query_val(),
            result_var: DEFAULT_RESULT_VAR.to_string(),
        }
    }

    /// Names the unbound third argument. Must be a Prolog variable.
    pub fn with_result_var(mut self, name: &str) -> Result<Self> {
        if !is_prolog_variable(name) {
            stop!(InvalidArgument => "not a Prolog variable: {:?}", name);
        }
        self.result_var = name.to_string();
        Ok(self)
    }

    pub fn tasks(&self) -> &TaskPreferenceMap {
        &self.tasks
    }

    /// Everything on one line.
    pub fn compact(&self) -> String {
        format!(
            "match({}, {}, {}).",
            self.tasks.to_query_val(),
            self.people,
            self.result_var
        )
    }

    /// One task per line, aligned under the opening bracket.
    pub fn pretty(&self) -> String {
        let mut out = String::from("match([");
        let mut iter = self.tasks.iter().peekable();
        while let Some((task, rankings)) = iter.next() {
            out.push_str(&TaskPreferenceMap::task_query_val(task, rankings).to_string());
            if iter.peek().is_some() {
                out.push_str(",\n       ");
            }
        }
        out.push_str("],\n      ");
        out.push_str(&self.people.to_string());
        out.push_str(", ");
        out.push_str(&self.result_var);
        out.push_str(").");
        debug!("built match query over {} tasks", self.tasks.len());
        out
    }
}

/// `match(<tasks>, <people>, Result).` laid out one task per line.
pub fn build_match_query(prefs: &PreferenceMap) -> String {
    MatchQuery::new(prefs).pretty()
}

/// Same query as [`build_match_query`], on a single line.
pub fn build_match_query_compact(prefs: &PreferenceMap) -> String {
    MatchQuery::new(prefs).compact()
}

/// Strips every whitespace character.
pub fn normalize_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

fn is_prolog_variable(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_uppercase() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

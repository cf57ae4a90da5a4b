//! `c[ad]+r` pair predicates.
//!
//! A chain such as `dda` names the accessor `cddar`. Applying it to `x`
//! only works if `x`, `(car x)` and `(cdar x)` are all pairs; the generated
//! lambda checks exactly those.

use std::fmt;
use std::str::FromStr;

use log::trace;

use crate::rerrs::{GenErr, Result};
use crate::stop;

/// A validated accessor chain of at least two `a`/`d` directives.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AccessorChain(String);

impl AccessorChain {
    pub fn parse(chain: &str) -> Result<Self> {
        if chain.len() < 2 {
            stop!(InvalidArgument => "accessor chain needs at least 2 directives, got {:?}", chain);
        }
        if let Some(bad) = chain.chars().find(|c| !matches!(c, 'a' | 'd')) {
            stop!(InvalidArgument => "unexpected {:?} in accessor chain {:?}", bad, chain);
        }
        Ok(AccessorChain(chain.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Accessors that must yield a pair, innermost first: `car`, `cdar` for `dda`.
    pub fn accessor_names(&self) -> impl Iterator<Item = String> + '_ {
        // chars are ASCII, so byte offsets are char offsets
        let n = self.0.len();
        (1..n).map(move |k| format!("c{}r", &self.0[n - k..]))
    }

    pub fn predicate(&self) -> String {
        let mut clauses = String::from("(pair? x)");
        for name in self.accessor_names() {
            clauses.push_str(&format!(" (pair? ({} x))", name));
        }
        trace!("predicate for {}: {} clauses", self, self.0.len());
        format!("(lambda (x) (and {}))", clauses)
    }
}

impl fmt::Display for AccessorChain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "c{}r", self.0)
    }
}

impl FromStr for AccessorChain {
    type Err = GenErr;

    fn from_str(s: &str) -> Result<Self> {
        AccessorChain::parse(s)
    }
}

/// Scheme lambda checking every intermediate access of `c<chain>r` is a pair.
pub fn generate_accessor_predicate(chain: &str) -> Result<String> {
    Ok(AccessorChain::parse(chain)?.predicate())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_predicates() {
        assert_eq!(
            generate_accessor_predicate("dda").unwrap(),
            "(lambda (x) (and (pair? x) (pair? (car x)) (pair? (cdar x))))"
        );
        assert_eq!(
            generate_accessor_predicate("ada").unwrap(),
            "(lambda (x) (and (pair? x) (pair? (car x)) (pair? (cdar x))))"
        );
        assert_eq!(
            generate_accessor_predicate("aaaa").unwrap(),
            "(lambda (x) (and (pair? x) (pair? (car x)) (pair? (caar x)) (pair? (caaar x))))"
        );
        assert_eq!(
            generate_accessor_predicate("ad").unwrap(),
            "(lambda (x) (and (pair? x) (pair? (cdr x))))"
        );
    }

    #[test]
    fn rejects_bad_chains() {
        for chain in ["", "a", "d", "abd", "AD", "dd ", "ä"] {
            let err = generate_accessor_predicate(chain).unwrap_err();
            assert!(err.is_invalid_argument(), "{chain:?} -> {err}");
        }
    }

    #[test]
    fn names_and_display() {
        let chain: AccessorChain = "adda".parse().unwrap();
        assert_eq!(chain.to_string(), "caddar");
        assert_eq!(chain.as_str(), "adda");
        assert_eq!(
            chain.accessor_names().collect::<Vec<_>>(),
            ["car", "cdar", "cddar"]
        );
    }
}

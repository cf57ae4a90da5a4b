use std::fmt;
use QueryVal::*;

/// A Prolog term as it appears inside a generated query.
///
/// Atoms are written bare, never quoted, so `Atom("fe")` becomes `fe`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum QueryVal {
    Atom(String),
    Int(i64),
    /// Counts and ranks, kept unsigned so large values never wrap.
    Nat(usize),
    List(Vec<QueryVal>),
}

impl QueryVal {
    pub fn atom(name: impl Into<String>) -> Self {
        Atom(name.into())
    }

    pub fn list<T: Into<QueryVal>>(items: impl IntoIterator<Item = T>) -> Self {
        List(items.into_iter().map(Into::into).collect())
    }

    pub fn as_list(&self) -> Option<&[QueryVal]> {
        match self {
            List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for QueryVal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Atom(name) => write!(f, "{}", name),
            Int(n) => write!(f, "{}", n),
            Nat(n) => write!(f, "{}", n),
            List(items) => {
                let mut iter = items.iter();
                write!(f, "[")?;
                if let Some(last) = iter.next_back() {
                    for item in iter {
                        write!(f, "{}, ", item)?;
                    }
                    write!(f, "{}", last)?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Render a value using Prolog list syntax.
pub fn render_literal(value: &QueryVal) -> String {
    value.to_string()
}

impl From<&str> for QueryVal {
    fn from(val: &str) -> QueryVal {
        Atom(val.to_string())
    }
}

impl From<String> for QueryVal {
    fn from(val: String) -> QueryVal {
        Atom(val)
    }
}

impl From<&String> for QueryVal {
    fn from(val: &String) -> QueryVal {
        Atom(val.clone())
    }
}

impl From<i64> for QueryVal {
    fn from(val: i64) -> QueryVal {
        Int(val)
    }
}

impl From<usize> for QueryVal {
    fn from(val: usize) -> QueryVal {
        Nat(val)
    }
}

impl<T: Into<QueryVal>> From<Vec<T>> for QueryVal {
    fn from(val: Vec<T>) -> QueryVal {
        QueryVal::list(val)
    }
}

#[test]
fn display_atom_test() {
    assert_eq!(QueryVal::atom("task1").to_string(), "task1");
    assert_eq!(Int(42).to_string(), "42");
    assert_eq!(Int(-3).to_string(), "-3");
    assert_eq!(QueryVal::atom("o'neil").to_string(), "o'neil");
}

#[test]
fn display_list_test() {
    assert_eq!(List(vec![]).to_string(), "[]");
    assert_eq!(
        render_literal(&List(vec![
            List(vec![Atom("fe".into()), Int(1)]),
            List(vec![Atom("gwyn".into()), Int(1)]),
        ])),
        "[[fe, 1], [gwyn, 1]]"
    );
    assert_eq!(
        List(vec![
            List(vec![Int(1), List(vec![Int(2), List(vec![])])]),
            Atom("x".into()),
            List(vec![Int(7)])
        ])
        .to_string(),
        "[[1, [2, []]], x, [7]]"
    );
}

#[test]
fn conversions_test() {
    let people: QueryVal = vec!["fe", "wei"].into();
    assert_eq!(people.to_string(), "[fe, wei]");
    assert_eq!(people.as_list().map(<[QueryVal]>::len), Some(2));
    assert_eq!(QueryVal::from(3usize), Nat(3));
    assert_eq!(QueryVal::from(usize::MAX).to_string(), usize::MAX.to_string());
    assert_eq!(Atom("a".into()).as_list(), None);
}

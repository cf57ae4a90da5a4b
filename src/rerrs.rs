use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GenErr {
    #[error("Invalid Argument: {0}")]
    InvalidArgument(String),
    #[error("Io: {0}")]
    Io(String),
    #[error("Parse: {0}")]
    Parse(String),
}

impl GenErr {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, GenErr::InvalidArgument(_))
    }
}

impl From<std::io::Error> for GenErr {
    fn from(v: std::io::Error) -> Self {
        GenErr::Io(v.to_string())
    }
}

impl From<serde_json::Error> for GenErr {
    fn from(v: serde_json::Error) -> Self {
        GenErr::Parse(v.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GenErr>;

#[macro_export]
macro_rules! stop {
    ($type:ident => $fmt:expr, $($arg:tt)+) => {
        return Err($crate::rerrs::GenErr::$type(format!($fmt, $($arg)+)))
    };
    ($type:ident => $thing:expr) => {
        return Err($crate::rerrs::GenErr::$type(($thing).to_string()))
    };
}

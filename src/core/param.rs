//! Message template parameters

use std::fmt;

/// Opaque value substituted into a message template.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Str(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Char(char),
}

impl Param {
    /// Type name used in degraded directives such as `%!d(string=x)`
    pub fn type_name(&self) -> &'static str {
        match self {
            Param::Str(_) => "string",
            Param::Int(_) => "int",
            Param::Uint(_) => "uint",
            Param::Float(_) => "float64",
            Param::Bool(_) => "bool",
            Param::Char(_) => "char",
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Str(s) => write!(f, "{}", s),
            Param::Int(i) => write!(f, "{}", i),
            Param::Uint(u) => write!(f, "{}", u),
            Param::Float(fl) => write!(f, "{}", fl),
            Param::Bool(b) => write!(f, "{}", b),
            Param::Char(c) => write!(f, "{}", c),
        }
    }
}

impl From<String> for Param {
    fn from(s: String) -> Self {
        Param::Str(s)
    }
}

impl From<&str> for Param {
    fn from(s: &str) -> Self {
        Param::Str(s.to_string())
    }
}

impl From<&String> for Param {
    fn from(s: &String) -> Self {
        Param::Str(s.clone())
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Param {
            fn from(i: $t) -> Self {
                Param::Int(i as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Param {
            fn from(u: $t) -> Self {
                Param::Uint(u as u64)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for Param {
    fn from(f: f32) -> Self {
        Param::Float(f as f64)
    }
}

impl From<f64> for Param {
    fn from(f: f64) -> Self {
        Param::Float(f)
    }
}

impl From<bool> for Param {
    fn from(b: bool) -> Self {
        Param::Bool(b)
    }
}

impl From<char> for Param {
    fn from(c: char) -> Self {
        Param::Char(c)
    }
}

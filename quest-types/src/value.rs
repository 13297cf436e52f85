use std::fmt;
use std::time::Duration;

/// The expected type of a question's answer.
///
/// Set when the question is built; coercion switches on it to decide how a
/// raw line of input is parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AnswerKind {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,

    /// `y`/`yes`/`n`/`no`, or a generic boolean literal.
    Bool,

    /// A whole number of seconds.
    Duration,

    /// The raw line, untouched.
    Text,

    /// The raw line, trimmed and lower-cased.
    #[default]
    Normalized,
}

impl AnswerKind {
    /// Short name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Bool => "bool",
            Self::Duration => "duration",
            Self::Text => "text",
            Self::Normalized => "normalized text",
        }
    }
}

impl fmt::Display for AnswerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed answer value.
///
/// Every variant keeps the exact width it was parsed at; an `I32` question
/// never yields an `I64` value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Bool(bool),
    Duration(Duration),

    /// Produced by both `Text` and `Normalized` questions.
    Text(String),
}

impl Value {
    /// The kind family this value belongs to.
    ///
    /// Text values report `AnswerKind::Text`, whether or not they were normalized.
    pub fn kind(&self) -> AnswerKind {
        match self {
            Self::I8(_) => AnswerKind::I8,
            Self::I16(_) => AnswerKind::I16,
            Self::I32(_) => AnswerKind::I32,
            Self::I64(_) => AnswerKind::I64,
            Self::U8(_) => AnswerKind::U8,
            Self::U16(_) => AnswerKind::U16,
            Self::U32(_) => AnswerKind::U32,
            Self::U64(_) => AnswerKind::U64,
            Self::F32(_) => AnswerKind::F32,
            Self::F64(_) => AnswerKind::F64,
            Self::Bool(_) => AnswerKind::Bool,
            Self::Duration(_) => AnswerKind::Duration,
            Self::Text(_) => AnswerKind::Text,
        }
    }

    /// Check if this value could have been produced by a question of the given kind.
    pub fn matches(&self, kind: AnswerKind) -> bool {
        match kind {
            AnswerKind::Normalized => self.kind() == AnswerKind::Text,
            other => self.kind() == other,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as a signed integer, widening if needed.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::I8(i) => Some(i64::from(*i)),
            Self::I16(i) => Some(i64::from(*i)),
            Self::I32(i) => Some(i64::from(*i)),
            Self::I64(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an unsigned integer, widening if needed.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::U8(u) => Some(u64::from(*u)),
            Self::U16(u) => Some(u64::from(*u)),
            Self::U32(u) => Some(u64::from(*u)),
            Self::U64(u) => Some(*u),
            _ => None,
        }
    }

    /// Try to get this value as a float, widening if needed.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::F32(f) => Some(f64::from(*f)),
            Self::F64(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a duration.
    pub fn as_duration(&self) -> Option<Duration> {
        match self {
            Self::Duration(d) => Some(*d),
            _ => None,
        }
    }

    /// Get the type name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I8(v) => write!(f, "{v}"),
            Self::I16(v) => write!(f, "{v}"),
            Self::I32(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::U8(v) => write!(f, "{v}"),
            Self::U16(v) => write!(f, "{v}"),
            Self::U32(v) => write!(f, "{v}"),
            Self::U64(v) => write!(f, "{v}"),
            Self::F32(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Duration(d) => write!(f, "{}s", d.as_secs()),
            Self::Text(s) => f.write_str(s),
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

impl_from! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    bool => Bool,
    Duration => Duration,
    String => Text,
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

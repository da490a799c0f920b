//! Day 2: Declarations and Zero Values
//!
//! Every declared variable holds a value from the start: either the one it is
//! initialised with or its type's zero value. Declarations live in a block
//! scope and disappear when the block ends.

use value_lessons_common::{Scope, ScopeError};

// =============================================================================
// Constants
// =============================================================================

pub const COMPANY_NAME: &str = "GoTech Solutions";
pub const MAX_STUDENTS: u32 = 50;

/// Application status, numbered in declaration order starting at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Status {
    Pending = 0,
    Approved = 1,
    Rejected = 2,
}

impl Status {
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no status with ordinal {0}")]
pub struct UnknownStatus(pub u8);

impl TryFrom<u8> for Status {
    type Error = UnknownStatus;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        match ordinal {
            0 => Ok(Status::Pending),
            1 => Ok(Status::Approved),
            2 => Ok(Status::Rejected),
            other => Err(UnknownStatus(other)),
        }
    }
}

// =============================================================================
// Zero Values
// =============================================================================

/// Fields left undeclared take their zero values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZeroValues {
    pub int: i64,
    pub float: f32,
    pub boolean: bool,
    pub string: String,
}

/// The kinds of value a declaration can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Int,
    Float,
    Bool,
    Rune,
    Str,
}

/// A declared value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Rune(char),
    Str(String),
}

impl Kind {
    /// The value a declaration of this kind holds before any assignment.
    #[must_use]
    pub fn zero(self) -> Value {
        match self {
            Kind::Int => Value::Int(0),
            Kind::Float => Value::Float(0.0),
            Kind::Bool => Value::Bool(false),
            Kind::Rune => Value::Rune('\0'),
            Kind::Str => Value::Str(String::new()),
        }
    }
}

impl Value {
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Value::Int(_) => Kind::Int,
            Value::Float(_) => Kind::Float,
            Value::Bool(_) => Kind::Bool,
            Value::Rune(_) => Kind::Rune,
            Value::Str(_) => Kind::Str,
        }
    }
}

// =============================================================================
// Declarations in a Block
// =============================================================================

/// Declares the student's details one binding at a time.
pub fn student_scope() -> Result<Scope<Value>, ScopeError> {
    Scope::new()
        .declare("student_name", Value::Str("Alice Johnson".into()))?
        .declare("student_age", Value::Int(22))?
        .declare("student_grade", Value::Rune('A'))?
        .declare("is_enrolled", Value::Bool(true))?
        .declare("course_name", Value::Str("Go Programming".into()))?
        .declare("course_code", Value::Str("GOLANG101".into()))?
        .declare("credits", Value::Float(3.5))
}

/// Declares each name with its kind's zero value.
pub fn declare_zeroed(
    scope: &Scope<Value>,
    names: &[(&str, Kind)],
) -> Result<Scope<Value>, ScopeError> {
    names
        .iter()
        .try_fold(scope.clone(), |scope, (name, kind)| scope.declare(*name, kind.zero()))
}

/// Classifies `n` inside a block that declares `num`, the way an `if` with an
/// initialiser does. Returns the label and the scope after the block ends, in
/// which `num` is no longer visible (unless `scope` already declared it).
pub fn classify_in_block(
    scope: &Scope<Value>,
    n: i64,
) -> Result<(&'static str, Scope<Value>), ScopeError> {
    let block = scope.child().declare("num", Value::Int(n))?;

    let label = match block.lookup("num") {
        Some(Value::Int(num)) if *num > 0 => "positive",
        Some(Value::Int(num)) if *num < 0 => "negative",
        _ => "zero",
    };

    let after = block.leave().unwrap_or_default();
    Ok((label, after))
}

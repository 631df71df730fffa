//! Argument value types shared by the emitters and their range checks.
//!
//! Numbers are rendered the way FlightStream's reference scripts spell them:
//! integers stay bare (`3`), floats always carry a fractional part (`3.0`,
//! `0.05`) and switch to exponent form outside `1e-4..1e16` (`1e-06`).

use std::fmt;
use std::path::Path;

use crate::errors::ValidationError;

/// A numeric argument that remembers whether it was written as an integer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Int(i64),
    Float(f64),
}

impl Scalar {
    pub fn as_f64(self) -> f64 {
        match self {
            Scalar::Int(i) => i as f64,
            Scalar::Float(f) => f,
        }
    }

    pub fn is_finite(self) -> bool {
        match self {
            Scalar::Int(_) => true,
            Scalar::Float(f) => f.is_finite(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(i) => write!(f, "{i}"),
            Scalar::Float(v) => f.write_str(&format_float(*v)),
        }
    }
}

macro_rules! scalar_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Scalar {
            fn from(v: $t) -> Self {
                Scalar::Int(v as i64)
            }
        })*
    };
}

scalar_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

/// Render a float using the shortest round-trip digits, always with a
/// fractional part or an exponent.
pub fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if v == 0.0 {
        return if v.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }
    let sci = format!("{v:e}");
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    if !(-4..16).contains(&exp) {
        let sign = if exp < 0 { '-' } else { '+' };
        return format!("{mantissa}e{sign}{:02}", exp.abs());
    }
    let plain = format!("{v}");
    if plain.contains('.') {
        plain
    } else {
        format!("{plain}.0")
    }
}

/// Boundary (surface) selection: every boundary, or an explicit index list.
///
/// The count written to the script is always derived from the list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Boundaries {
    #[default]
    All,
    List(Vec<u32>),
}

impl Boundaries {
    pub fn list<I>(indices: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        Boundaries::List(indices.into_iter().collect())
    }

    /// `-1` for all boundaries, otherwise the number of listed indices.
    pub fn count_token(&self) -> String {
        match self {
            Boundaries::All => "-1".to_string(),
            Boundaries::List(v) => v.len().to_string(),
        }
    }

    pub fn indices(&self) -> &[u32] {
        match self {
            Boundaries::All => &[],
            Boundaries::List(v) => v,
        }
    }

    pub(crate) fn validate(&self, parameter: &'static str) -> Result<(), ValidationError> {
        if let Boundaries::List(v) = self {
            validate_indices(parameter, v)?;
        }
        Ok(())
    }
}

impl From<Vec<u32>> for Boundaries {
    fn from(v: Vec<u32>) -> Self {
        Boundaries::List(v)
    }
}

impl From<&[u32]> for Boundaries {
    fn from(v: &[u32]) -> Self {
        Boundaries::List(v.to_vec())
    }
}

impl<const N: usize> From<[u32; N]> for Boundaries {
    fn from(v: [u32; N]) -> Self {
        Boundaries::List(v.to_vec())
    }
}

/// A single entity by 1-based index, or every entity (`-1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Target {
    #[default]
    All,
    Index(u32),
}

impl Target {
    pub(crate) fn validate(self, parameter: &'static str) -> Result<(), ValidationError> {
        match self {
            Target::All => Ok(()),
            Target::Index(i) => require_positive_index(parameter, i),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::All => f.write_str("-1"),
            Target::Index(i) => write!(f, "{i}"),
        }
    }
}

impl From<u32> for Target {
    fn from(i: u32) -> Self {
        Target::Index(i)
    }
}

/// Boolean token for commands that take `True` / `False` rather than
/// `ENABLE` / `DISABLE`.
pub(crate) fn flag(on: bool) -> &'static str {
    if on {
        "True"
    } else {
        "False"
    }
}

/// A point in a coordinate frame, rendered as `x y z`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vertex {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            format_float(self.x),
            format_float(self.y),
            format_float(self.z)
        )
    }
}

impl From<(f64, f64, f64)> for Vertex {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Vertex::new(x, y, z)
    }
}

impl From<[f64; 3]> for Vertex {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Vertex::new(x, y, z)
    }
}

/// Join indices as the tool expects them on a single line: `1,4,5`.
pub fn join_indices(indices: &[u32]) -> String {
    indices
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

pub(crate) fn validate_indices(parameter: &'static str, v: &[u32]) -> Result<(), ValidationError> {
    if v.is_empty() {
        return Err(ValidationError::invalid(
            parameter,
            "must list at least one index",
        ));
    }
    if let Some(bad) = v.iter().find(|i| **i == 0) {
        return Err(ValidationError::out_of_range(
            parameter,
            bad,
            "a list of positive (1-based) indices",
        ));
    }
    Ok(())
}

pub(crate) fn require_positive_index(
    parameter: &'static str,
    value: u32,
) -> Result<(), ValidationError> {
    if value == 0 {
        Err(ValidationError::out_of_range(
            parameter,
            value,
            "a positive (1-based) index",
        ))
    } else {
        Ok(())
    }
}

pub(crate) fn require_finite(
    parameter: &'static str,
    value: Scalar,
) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::out_of_range(parameter, value, "a finite number"))
    }
}

pub(crate) fn require_finite_vertex(
    parameter: &'static str,
    v: Vertex,
) -> Result<(), ValidationError> {
    if [v.x, v.y, v.z].iter().all(|c| c.is_finite()) {
        Ok(())
    } else {
        Err(ValidationError::out_of_range(parameter, v, "finite coordinates"))
    }
}

pub(crate) fn require_positive(
    parameter: &'static str,
    value: Scalar,
) -> Result<(), ValidationError> {
    require_finite(parameter, value)?;
    if value.as_f64() > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::out_of_range(parameter, value, "greater than 0"))
    }
}

/// Inclusive range check.
pub(crate) fn require_within(
    parameter: &'static str,
    value: Scalar,
    lo: f64,
    hi: f64,
) -> Result<(), ValidationError> {
    require_finite(parameter, value)?;
    let v = value.as_f64();
    if (lo..=hi).contains(&v) {
        Ok(())
    } else {
        Err(ValidationError::out_of_range(
            parameter,
            value,
            format!("in the range [{lo}, {hi}]"),
        ))
    }
}

/// Non-empty text that fits on one script line.
pub(crate) fn require_text(parameter: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::invalid(parameter, "must not be empty"));
    }
    require_single_line(parameter, value)
}

pub(crate) fn require_single_line(
    parameter: &'static str,
    value: &str,
) -> Result<(), ValidationError> {
    crate::util::reject_newlines(value, parameter)
        .map_err(|_| ValidationError::invalid(parameter, "must not contain a newline or NUL"))
}

/// Render a file path argument, rejecting paths that cannot be one script line.
pub(crate) fn path_arg(parameter: &'static str, path: &Path) -> Result<String, ValidationError> {
    let text = path.to_string_lossy();
    require_text(parameter, &text)?;
    Ok(text.into_owned())
}

/// Like [`path_arg`], additionally requiring one of the given extensions
/// (case-insensitive, without the dot).
pub(crate) fn path_with_extension(
    parameter: &'static str,
    path: &Path,
    extensions: &[&str],
) -> Result<String, ValidationError> {
    let text = path_arg(parameter, path)?;
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    if extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext)) {
        Ok(text)
    } else {
        Err(ValidationError::invalid(
            parameter,
            format!("must end in one of .{}", extensions.join(", .")),
        ))
    }
}

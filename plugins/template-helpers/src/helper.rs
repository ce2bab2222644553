use std::fmt;
use std::str::FromStr;

use seqhelpers_position::{Offset, element_at_offset, has_element_at_offset};

use crate::config::LogLevel;
use crate::output::{Flag, HelperOutput};
use crate::{Error, Result, logging};

/// Template-facing helper names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HelperName {
    Previous,
    HasNext,
}

impl HelperName {
    pub const ALL: [Self; 2] = [Self::Previous, Self::HasNext];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Previous => "previous",
            Self::HasNext => "hasNext",
        }
    }

    /// Fixed offset each helper applies to the matched element.
    pub const fn offset(self) -> Offset {
        match self {
            Self::Previous => Offset::PREVIOUS,
            Self::HasNext => Offset::NEXT,
        }
    }
}

impl fmt::Display for HelperName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HelperName {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == value)
            .ok_or_else(|| Error::unknown_helper(value))
    }
}

fn trace_outcome(name: HelperName, outcome: &str) {
    logging::log_with(LogLevel::Trace, || format!("helper={name} result={outcome}"));
}

/// The element just before the first match of `value`.
pub fn previous<'a, T, Q>(array: &'a [T], value: &Q) -> HelperOutput<'a, T>
where
    T: PartialEq<Q>,
    Q: ?Sized,
{
    let output = HelperOutput::Element(element_at_offset(
        array,
        value,
        HelperName::Previous.offset(),
    ));
    trace_outcome(HelperName::Previous, output.outcome());
    output
}

/// Whether anything follows the first match of `value`.
pub fn has_next<T, Q>(array: &[T], value: &Q) -> Flag
where
    T: PartialEq<Q>,
    Q: ?Sized,
{
    let flag = Flag(has_element_at_offset(
        array,
        value,
        HelperName::HasNext.offset(),
    ));
    trace_outcome(HelperName::HasNext, flag.outcome());
    flag
}

pub fn invoke<'a, T, Q>(name: HelperName, array: &'a [T], value: &Q) -> HelperOutput<'a, T>
where
    T: PartialEq<Q>,
    Q: ?Sized,
{
    match name {
        HelperName::Previous => previous(array, value),
        HelperName::HasNext => has_next(array, value).into(),
    }
}

pub fn invoke_by_name<'a, T, Q>(
    name: &str,
    array: &'a [T],
    value: &Q,
) -> Result<HelperOutput<'a, T>>
where
    T: PartialEq<Q>,
    Q: ?Sized,
{
    let name = name.parse::<HelperName>().inspect_err(|err| {
        logging::warn(&err.to_string());
    })?;
    Ok(invoke(name, array, value))
}

use std::fmt;

/// Answer of an existence query. Renders as `true`/`false` whatever the
/// element type of the queried sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Flag(pub bool);

impl Flag {
    pub const fn get(self) -> bool {
        self.0
    }

    pub(crate) const fn outcome(self) -> &'static str {
        if self.0 { "true" } else { "false" }
    }
}

impl From<Flag> for bool {
    fn from(flag: Flag) -> Self {
        flag.0
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Value a helper hands back to the binding layer.
#[derive(Debug, PartialEq, Eq)]
pub enum HelperOutput<'a, T> {
    /// An element of the sequence, or nothing.
    Element(Option<&'a T>),
    Flag(bool),
}

impl<'a, T> HelperOutput<'a, T> {
    pub fn as_element(&self) -> Option<&'a T> {
        match self {
            Self::Element(element) => *element,
            Self::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(flag) => Some(*flag),
            Self::Element(_) => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Element(None))
    }

    pub(crate) fn outcome(&self) -> &'static str {
        match self {
            Self::Element(Some(_)) => "found",
            Self::Element(None) => "absent",
            Self::Flag(flag) => Flag(*flag).outcome(),
        }
    }
}

impl<T> From<Flag> for HelperOutput<'_, T> {
    fn from(flag: Flag) -> Self {
        Self::Flag(flag.get())
    }
}

impl<T> Clone for HelperOutput<'_, T> {
    fn clone(&self) -> Self {
        match self {
            Self::Element(element) => Self::Element(*element),
            Self::Flag(flag) => Self::Flag(*flag),
        }
    }
}

impl<T: fmt::Display> fmt::Display for HelperOutput<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(Some(element)) => write!(f, "{element}"),
            Self::Element(None) => Ok(()),
            Self::Flag(flag) => write!(f, "{flag}"),
        }
    }
}

/// Text for the output binding: `true`/`false`, the element, or nothing.
pub fn render_output<R: fmt::Display + ?Sized>(output: &R) -> String {
    output.to_string()
}

/// Renders an element through `project`, e.g. a record's display field.
pub fn render_with<T, F, D>(output: &HelperOutput<'_, T>, project: F) -> String
where
    F: FnOnce(&T) -> D,
    D: fmt::Display,
{
    match output {
        HelperOutput::Element(Some(element)) => project(*element).to_string(),
        HelperOutput::Element(None) => String::new(),
        HelperOutput::Flag(flag) => flag.to_string(),
    }
}

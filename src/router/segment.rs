/// Splits `path` on `/` and drops every empty token, so leading, trailing and
/// repeated slashes collapse. The root path yields no segments.
pub fn segmentize(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// One segment of a registered pattern.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum PatternSegment<'a> {
    Static(&'a str),
    /// `:name` binds `name`; `?` matches without binding.
    Param(Option<&'a str>),
}

impl<'a> PatternSegment<'a> {
    pub fn parse(segment: &'a str) -> Self {
        if let Some(name) = segment.strip_prefix(':') {
            return Self::Param(Some(name));
        }
        if segment == "?" {
            return Self::Param(None);
        }
        Self::Static(segment)
    }
}

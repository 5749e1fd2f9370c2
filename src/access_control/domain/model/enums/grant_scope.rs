/// How far an access-control entry reaches: every object, or a single one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GrantScope {
    Global,
    Object,
}

impl GrantScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Object => "object",
        }
    }
}

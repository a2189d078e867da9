/// Outcome of a lookup whose shape depends on which optional keys were given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Found<T> {
    /// A single record addressed by id.
    One(T),
    /// Every record matching the remaining filters.
    Many(Vec<T>),
}

impl<T> Found<T> {
    /// Converts every contained record with the provided function.
    pub fn map<U>(self, mut convert: impl FnMut(T) -> U) -> Found<U> {
        match self {
            Self::One(value) => Found::One(convert(value)),
            Self::Many(values) => Found::Many(values.into_iter().map(convert).collect()),
        }
    }
}

/// A payload paired with the priority it is ordered by.
///
/// The heap only ever compares `priority`; `element` is carried along
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Record<P, T> {
    pub priority: P,
    pub element: T,
}

impl<P, T> Record<P, T> {
    pub fn new(priority: P, element: T) -> Self {
        Self { priority, element }
    }

    pub fn into_element(self) -> T {
        self.element
    }
}

impl<P, T> From<(P, T)> for Record<P, T> {
    fn from((priority, element): (P, T)) -> Self {
        Self::new(priority, element)
    }
}

#[cfg(test)]
mod tests {
    use super::Record;

    #[test]
    fn test_from_tuple() {
        let record: Record<i32, &str> = (7, "seven").into();
        assert_eq!(Record::new(7, "seven"), record);
        assert_eq!("seven", record.into_element());
    }
}

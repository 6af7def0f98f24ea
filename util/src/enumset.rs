use plain_enum::*;
use itertools::Itertools;
use std::fmt;
use super::assign::*;

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct EnumSet<E: PlainEnum>(EnumMap<E, bool>)
    where
        E::EnumMapArray<bool>: Eq,
;

impl<E: PlainEnum+Copy> EnumSet<E>
    where
        E::EnumMapArray<bool>: Eq,
{
    pub fn new_empty() -> Self {
        Self(E::map_from_fn(|_e| false))
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|b| !b)
    }

    pub fn is_full(&self) -> bool {
        self.0.iter().all(|b| *b)
    }

    pub fn len(&self) -> usize {
        self.0.iter().filter(|b| **b).count()
    }

    pub fn contains(&self, e: E) -> bool {
        self.0[e]
    }

    /// Returns `false` if `e` was already present.
    pub fn insert(&mut self, e: E) -> bool {
        assign_neq(&mut self.0[e], true)
    }

    pub fn remove(&mut self, e: E) -> bool {
        assign_neq(&mut self.0[e], false)
    }

    pub fn iter(&self) -> impl Iterator<Item=E> + '_ {
        E::values().filter(move |e| self.contains(*e))
    }
}

impl<E: PlainEnum+Copy> FromIterator<E> for EnumSet<E>
    where
        E::EnumMapArray<bool>: Eq,
{
    fn from_iter<ItE: IntoIterator<Item=E>>(ite: ItE) -> Self {
        let mut sete = Self::new_empty();
        for e in ite {
            sete.insert(e);
        }
        sete
    }
}

impl<E: PlainEnum+Copy+fmt::Display> fmt::Display for EnumSet<E>
    where
        E::EnumMapArray<bool>: Eq,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{{}}}", self.iter().join(" "))
    }
}

#[cfg(test)]
plain_enum_mod!(modetest, ETest {
    A, B, C,
});
#[cfg(test)]
impl fmt::Display for ETest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[test]
fn test_enumset() {
    let mut sete = EnumSet::<ETest>::new_empty();
    assert!(sete.is_empty());
    assert!(sete.insert(ETest::B));
    assert!(!sete.insert(ETest::B));
    assert_eq!(sete.len(), 1);
    assert_eq!(sete.iter().collect::<Vec<_>>(), vec![ETest::B]);
    assert_eq!(format!("{}", sete), "{B}");
    assert!(sete.remove(ETest::B));
    assert!(!sete.remove(ETest::B));
    let sete = [ETest::A, ETest::C, ETest::B].into_iter().collect::<EnumSet<_>>();
    assert!(sete.is_full());
}

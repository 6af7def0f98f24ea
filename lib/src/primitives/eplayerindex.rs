use crate::util::*;
use arrayvec::{self, ArrayVec};
use std::{fmt, slice, str::FromStr};

plain_enum_mod!(modepi, EPlayerIndex {
    EPI0, EPI1, EPI2, EPI3,
});

impl fmt::Display for EPlayerIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_usize())
    }
}

impl FromStr for EPlayerIndex {
    type Err = Error;
    fn from_str(str_epi: &str) -> Result<Self, Self::Err> {
        usize::from_str(str_epi.trim()).ok()
            .and_then(EPlayerIndex::checked_from_usize)
            .ok_or_else(|| format_err!("Could not convert \"{}\" to a seat.", str_epi))
    }
}

/// Up to four items, each tagged with the seat that contributed it, starting at `epi_first`.
#[derive(Clone, Eq, PartialEq)]
pub struct SPlayersInRound<T> {
    pub epi_first: EPlayerIndex,
    vect: ArrayVec<T, {EPlayerIndex::SIZE}>,
}

impl<T: fmt::Debug> fmt::Debug for SPlayersInRound<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for epi in EPlayerIndex::values() {
            if epi==self.epi_first {
                write!(f, ">")?;
            } else {
                write!(f, " ")?;
            }
            match self.get(epi) {
                None => {write!(f, "__")?;}
                Some(t) => {write!(f, "{t:?}")?;}
            }
        }
        Ok(())
    }
}

pub struct SPlayersInRoundIterator<InternalIter> {
    iter: InternalIter,
    n_epi: usize,
}

impl<InternalIter: Iterator> Iterator for SPlayersInRoundIterator<InternalIter> {
    type Item = (EPlayerIndex, InternalIter::Item);
    fn next(&mut self) -> Option<(EPlayerIndex, InternalIter::Item)> {
        let item_next = self.iter.next()
            .map(|t| (EPlayerIndex::wrapped_from_usize(self.n_epi), t));
        self.n_epi += 1;
        item_next
    }
}

impl<T> SPlayersInRound<T> {
    pub fn new(epi_first: EPlayerIndex) -> Self {
        SPlayersInRound {
            epi_first,
            vect: ArrayVec::new(),
        }
    }
    pub fn new_full(epi_first: EPlayerIndex, at: [T; EPlayerIndex::SIZE]) -> Self {
        SPlayersInRound {
            epi_first,
            vect: ArrayVec::from(at),
        }
    }
    pub fn first_playerindex(&self) -> EPlayerIndex {
        self.epi_first
    }
    /// The seat whose item comes next, or `None` once all four are present.
    pub fn current_playerindex(&self) -> Option<EPlayerIndex> {
        if_then_some!(
            !self.is_full(),
            self.first_playerindex().wrapping_add(self.size())
        )
    }
    pub fn size(&self) -> usize {
        self.vect.len()
    }
    pub fn is_full(&self) -> bool {
        self.size()==EPlayerIndex::SIZE
    }
    pub fn is_empty(&self) -> bool {
        self.size()==0
    }
    pub fn push(&mut self, t: T) {
        assert!(!self.is_full());
        self.vect.push(t);
    }
    pub fn first(&self) -> &T {
        unwrap!(self.vect.first())
    }
    pub fn iter(&self) -> SPlayersInRoundIterator<slice::Iter<T>> {
        SPlayersInRoundIterator {
            iter: self.vect.iter(),
            n_epi: self.epi_first.to_usize(),
        }
    }
    /// Offset of `epi` relative to `epi_first`.
    pub fn position(&self, epi: EPlayerIndex) -> usize {
        epi.wrapped_difference_usize(self.epi_first)
    }
    pub fn get(&self, epi: EPlayerIndex) -> Option<&T> {
        self.vect.get(self.position(epi))
    }
}

impl<T> std::ops::Index<EPlayerIndex> for SPlayersInRound<T> {
    type Output = T;
    fn index(&self, epi: EPlayerIndex) -> &T {
        unwrap!(self.get(epi))
    }
}

impl<T> IntoIterator for SPlayersInRound<T> {
    type Item = (EPlayerIndex, T);
    type IntoIter = SPlayersInRoundIterator<arrayvec::IntoIter<T, {EPlayerIndex::SIZE}>>;
    fn into_iter(self) -> Self::IntoIter {
        SPlayersInRoundIterator {
            n_epi: self.epi_first.to_usize(),
            iter: self.vect.into_iter(),
        }
    }
}

#[test]
fn test_playersinround() {
    let mut playersinround = SPlayersInRound::new(EPlayerIndex::EPI2);
    assert!(playersinround.is_empty());
    assert_eq!(playersinround.current_playerindex(), Some(EPlayerIndex::EPI2));
    playersinround.push('a');
    playersinround.push('b');
    assert_eq!(playersinround.current_playerindex(), Some(EPlayerIndex::EPI0));
    assert_eq!(playersinround.get(EPlayerIndex::EPI3), Some(&'b'));
    assert_eq!(playersinround.get(EPlayerIndex::EPI0), None);
    assert_eq!(playersinround.position(EPlayerIndex::EPI1), 3);
    playersinround.push('c');
    playersinround.push('d');
    assert!(playersinround.is_full());
    assert_eq!(playersinround.current_playerindex(), None);
    assert_eq!(
        playersinround.iter().map(|(epi, chr)| (epi, *chr)).collect::<Vec<_>>(),
        vec![
            (EPlayerIndex::EPI2, 'a'),
            (EPlayerIndex::EPI3, 'b'),
            (EPlayerIndex::EPI0, 'c'),
            (EPlayerIndex::EPI1, 'd'),
        ]
    );
    assert_eq!(format!("{:?}", playersinround), " 'c' 'd'>'a' 'b'");
    assert_eq!("3".parse::<EPlayerIndex>().ok(), Some(EPlayerIndex::EPI3));
    assert!("4".parse::<EPlayerIndex>().is_err());
}

#[test]
fn test_playersinround_payload_without_debug() {
    struct SPayload(usize);
    let mut playersinround = SPlayersInRound::new(EPlayerIndex::EPI3);
    playersinround.push(SPayload(3));
    playersinround.push(SPayload(0));
    assert_eq!(playersinround.first().0, 3);
    assert_eq!(playersinround[EPlayerIndex::EPI0].0, 0);
}

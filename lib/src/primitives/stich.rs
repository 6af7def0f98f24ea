use crate::primitives::*;
use std::fmt;

pub type SStich = SPlayersInRound<ECard>;

impl fmt::Display for SStich {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, (epi, card)) in self.iter().enumerate() {
            if 0<i {
                write!(f, " ")?;
            }
            write!(f, "{}:{}", epi, card)?;
        }
        Ok(())
    }
}

#[test]
fn test_stich() {
    use crate::primitives::card::ECard::*;
    use plain_enum::PlainEnum;
    let acard = [E7, E8, E9, EK];
    for epi_first in EPlayerIndex::values() {
        for n_size in 0..5 {
            let mut stich = SStich::new(epi_first);
            for &card in acard.iter().take(n_size) {
                stich.push(card);
            }
            assert_eq!(stich.size(), n_size);
            assert_eq!(stich.first_playerindex(), epi_first);
            assert_eq!(stich.size(), stich.iter().count());
            for (epi, card) in stich.iter() {
                assert_eq!(stich.get(epi), Some(card));
                assert_eq!(stich[epi], *card);
            }
        }
    }
    let mut stich = SStich::new(EPlayerIndex::EPI3);
    stich.push(EU);
    stich.push(G7);
    assert_eq!(format!("{}", stich), "3:EU 0:G7");
}

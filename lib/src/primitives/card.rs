use crate::util::*;
use std::fmt;

plain_enum_mod!(modefarbe, EFarbe {
    Eichel,
    Gras,
    Herz,
    Schelln,
});

impl EFarbe {
    pub fn str_name(self) -> &'static str {
        match self {
            Self::Eichel => "Eichel",
            Self::Gras => "Gras",
            Self::Herz => "Herz",
            Self::Schelln => "Schelln",
        }
    }

    pub fn from_str_name(str_farbe: &str) -> Option<Self> {
        Self::values().find(|efarbe| efarbe.str_name().eq_ignore_ascii_case(str_farbe))
    }
}

impl fmt::Display for EFarbe {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.str_name())
    }
}

plain_enum_mod!(modeschlag, ESchlag {
    Ass,
    Zehn,
    Koenig,
    Ober,
    Unter,
    S9,
    S8,
    S7,
});

impl ESchlag {
    pub fn str_name(self) -> &'static str {
        match self {
            Self::Ass => "Ass",
            Self::Zehn => "Zehner",
            Self::Koenig => "Koenig",
            Self::Ober => "Ober",
            Self::Unter => "Unter",
            Self::S9 => "Neuner",
            Self::S8 => "Achter",
            Self::S7 => "Siebner",
        }
    }
}

impl fmt::Display for ESchlag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.str_name())
    }
}

// Ordered suit-major: all Eichel cards first, within a suit by ESchlag (Ass first).
plain_enum_mod!(modecard, ECard {
    EA, EZ, EK, EO, EU, E9, E8, E7,
    GA, GZ, GK, GO, GU, G9, G8, G7,
    HA, HZ, HK, HO, HU, H9, H8, H7,
    SA, SZ, SK, SO, SU, S9, S8, S7,
});

impl ECard {
    pub fn new(efarbe: EFarbe, eschlag: ESchlag) -> ECard {
        ECard::wrapped_from_usize(efarbe.to_usize() * ESchlag::SIZE + eschlag.to_usize())
    }
    pub fn farbe(self) -> EFarbe {
        EFarbe::wrapped_from_usize(self.to_usize() / ESchlag::SIZE)
    }
    pub fn schlag(self) -> ESchlag {
        ESchlag::wrapped_from_usize(self.to_usize() % ESchlag::SIZE)
    }
    /// Long form, e.g. "Herz Ass".
    pub fn str_name(self) -> String {
        format!("{} {}", self.farbe(), self.schlag())
    }
}

impl fmt::Display for ECard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}",
            match self.farbe() {
                EFarbe::Eichel => "E",
                EFarbe::Gras => "G",
                EFarbe::Herz => "H",
                EFarbe::Schelln => "S",
            },
            match self.schlag() {
                ESchlag::S7 => "7",
                ESchlag::S8 => "8",
                ESchlag::S9 => "9",
                ESchlag::Zehn => "Z",
                ESchlag::Unter => "U",
                ESchlag::Ober => "O",
                ESchlag::Koenig => "K",
                ESchlag::Ass => "A",
            }
        )
    }
}

#[test]
fn test_farbe_schlag_enumerators() {
    assert_eq!(EFarbe::values().count(), 4);
    assert_eq!(ESchlag::values().count(), 8);
    assert_eq!(ECard::values().count(), 32);
}

#[test]
fn test_card_ctor() {
    macro_rules! explicit_test{($($efarbe:ident, $eschlag:ident, $card:ident)+) => {{
        $({
            let card = ECard::new(EFarbe::$efarbe, ESchlag::$eschlag);
            assert_eq!(card, ECard::$card);
            assert_eq!(card.farbe(), EFarbe::$efarbe);
            assert_eq!(card.schlag(), ESchlag::$eschlag);
            assert_eq!(format!("{}", card), stringify!($card));
        })+
    }}}
    explicit_test!(
        Eichel, S7, E7
        Eichel, Zehn, EZ
        Eichel, Unter, EU
        Eichel, Ass, EA
        Gras, S8, G8
        Gras, Ober, GO
        Gras, Koenig, GK
        Herz, S9, H9
        Herz, Unter, HU
        Herz, Ass, HA
        Schelln, S7, S7
        Schelln, Zehn, SZ
        Schelln, Ober, SO
        Schelln, Ass, SA
    )
}

#[test]
fn test_card_order_and_names() {
    use ECard::*;
    assert!(EA < E7);
    assert!(E7 < GA);
    assert!(HA < SA);
    assert_eq!(HA.str_name(), "Herz Ass");
    assert_eq!(S9.str_name(), "Schelln Neuner");
    assert_eq!(EFarbe::from_str_name("herz"), Some(EFarbe::Herz));
    assert_eq!(EFarbe::from_str_name("SCHELLN"), Some(EFarbe::Schelln));
    assert_eq!(EFarbe::from_str_name("rot"), None);
}

use crate::primitives::*;
use crate::rules::*;
use crate::util::*;
use std::{fs, path::Path};

/// Rules configuration as read from a TOML file:
/// ```toml
/// game = "farbwenz"
/// farbe = "gras"
/// seed = 42 # optional
/// ```
#[derive(new, Debug, Clone, PartialEq, Eq)]
pub struct SRuleSet {
    pub egametype: EGameType,
    pub efarbe: EFarbe,
    pub on_seed: Option<u64>,
}

impl Default for SRuleSet {
    fn default() -> Self {
        Self::new(EGameType::Solo, EFarbe::Herz, /*on_seed*/None)
    }
}

fn read_str<'tbl>(tomltbl: &'tbl toml::Table, str_key: &str) -> Result<Option<&'tbl str>, Error> {
    match tomltbl.get(str_key) {
        None => Ok(None),
        Some(tomlval) => match tomlval.as_str() {
            Some(str_val) => Ok(Some(str_val)),
            None => bail!("Found {} with invalid value {}. Must be a string.", str_key, tomlval),
        },
    }
}

impl SRuleSet {
    pub fn rules(&self) -> SRules {
        SRules::new(self.egametype, self.efarbe)
    }

    pub fn from_string(str_toml: &str) -> Result<SRuleSet, Error> {
        let tomltbl = str_toml.parse::<toml::Table>()?;
        let egametype = match read_str(&tomltbl, "game")? {
            None => bail!("Could not find game."),
            Some(str_game) => EGameType::from_str_name(str_game)
                .ok_or_else(|| format_err!("Unknown game {}.", str_game))?,
        };
        let oefarbe = read_str(&tomltbl, "farbe")?
            .map(|str_farbe| EFarbe::from_str_name(str_farbe)
                .ok_or_else(|| format_err!("Unknown farbe {}.", str_farbe))
            )
            .transpose()?;
        let efarbe = match (egametype.has_trumpf_farbe(), oefarbe) {
            (true, Some(efarbe)) => efarbe,
            (true, None) => bail!("{} requires a farbe.", egametype),
            (false, Some(efarbe)) => {
                info!("SRuleSet: Ignoring farbe {} for {}.", efarbe, egametype);
                efarbe
            },
            (false, None) => EFarbe::Herz,
        };
        let on_seed = match tomltbl.get("seed") {
            None => None,
            Some(tomlval) => match tomlval.as_integer() {
                Some(n_seed) if 0<=n_seed => Some(n_seed as u64),
                _ => bail!("Found seed with invalid value {}. Must be a non-negative integer.", tomlval),
            },
        };
        Ok(SRuleSet::new(egametype, efarbe, on_seed))
    }

    pub fn from_file(path: &Path) -> Result<SRuleSet, Error> {
        Self::from_string(&fs::read_to_string(path)?)
    }
}

#[test]
fn test_ruleset_from_string() {
    assert_eq!(
        unwrap!(SRuleSet::from_string("game = \"farbwenz\"\nfarbe = \"gras\"")),
        SRuleSet::new(EGameType::FarbWenz, EFarbe::Gras, None)
    );
    assert_eq!(
        unwrap!(SRuleSet::from_string("game = \"Solo\"\nfarbe = \"Eichel\"\nseed = 7")),
        SRuleSet::new(EGameType::Solo, EFarbe::Eichel, Some(7))
    );
    assert_eq!(unwrap!(SRuleSet::from_string("game = \"wenz\"")).egametype, EGameType::Wenz);
    assert!(SRuleSet::from_string("game = \"solo\"").is_err());
    assert!(SRuleSet::from_string("game = \"ramsch\"").is_err());
    assert!(SRuleSet::from_string("farbe = \"herz\"").is_err());
    assert!(SRuleSet::from_string("game = \"geier\"\nseed = -1").is_err());
    assert!(SRuleSet::from_string("game = 3").is_err());
    assert!(SRuleSet::from_string("game = ").is_err());
}

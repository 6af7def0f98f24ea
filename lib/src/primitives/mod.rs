pub mod card;
pub mod cardvector;
pub mod eplayerindex;
pub mod hand;
pub mod stich;

pub use self::{card::*, cardvector::*, eplayerindex::*, hand::*, stich::*};

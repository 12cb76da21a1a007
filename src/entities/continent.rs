// 🌍 Continent - Closed set of world regions
// Every value carries a display name distinct from its tag

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Continent {
    Afrika,
    Asien,
    Europa,
    Nordamerika,
    Suedamerika,
    Ozeanien,
    Antarktis,
}

impl Continent {
    /// All continents in declaration order
    pub const ALL: [Continent; 7] = [
        Continent::Afrika,
        Continent::Asien,
        Continent::Europa,
        Continent::Nordamerika,
        Continent::Suedamerika,
        Continent::Ozeanien,
        Continent::Antarktis,
    ];

    /// Human-readable name, used for display and for continent ordering
    pub fn display_name(&self) -> &'static str {
        match self {
            Continent::Afrika => "Afrika",
            Continent::Asien => "Asien",
            Continent::Europa => "Europa",
            Continent::Nordamerika => "Nordamerika",
            Continent::Suedamerika => "Südamerika",
            Continent::Ozeanien => "Ozeanien",
            Continent::Antarktis => "Antarktis",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

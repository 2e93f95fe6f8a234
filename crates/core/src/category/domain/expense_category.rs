use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Food,
    Transport,
    Shopping,
    Accommodation,
    Sightseeing,
    Other,
}

impl ExpenseCategory {
    pub const ALL: &[ExpenseCategory] = &[
        ExpenseCategory::Food,
        ExpenseCategory::Transport,
        ExpenseCategory::Shopping,
        ExpenseCategory::Accommodation,
        ExpenseCategory::Sightseeing,
        ExpenseCategory::Other,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ExpenseCategory::Food => "food",
            ExpenseCategory::Transport => "transport",
            ExpenseCategory::Shopping => "shopping",
            ExpenseCategory::Accommodation => "accommodation",
            ExpenseCategory::Sightseeing => "sightseeing",
            ExpenseCategory::Other => "other",
        }
    }

    /// Japanese label shown next to expenses.
    pub fn label_ja(self) -> &'static str {
        match self {
            ExpenseCategory::Food => "食事",
            ExpenseCategory::Transport => "交通",
            ExpenseCategory::Shopping => "買物",
            ExpenseCategory::Accommodation => "宿泊",
            ExpenseCategory::Sightseeing => "観光",
            ExpenseCategory::Other => "その他",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ExpenseCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ExpenseCategory::ALL
            .iter()
            .copied()
            .find(|c| c.id() == lower)
            .ok_or_else(|| format!("unknown expense category '{s}'"))
    }
}

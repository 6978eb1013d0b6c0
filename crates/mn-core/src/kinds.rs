use core::fmt;

/// Kind of a metabolic entity (and of the network node representing it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum EntityKind {
    Metabolite,
    Reaction,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Metabolite => "metabolite",
            EntityKind::Reaction => "reaction",
        }
    }
}

/// Role of a metabolite in a reaction.
///
/// Reactants flow into a reaction, products flow out of it. Network links
/// follow the same orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Role {
    Reactant,
    Product,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Reactant => "reactant",
            Role::Product => "product",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

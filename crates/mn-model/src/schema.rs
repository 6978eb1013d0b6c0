//! Model schema definitions.
//!
//! Records are immutable once loaded. Collections are keyed by identifier in
//! ordered maps so every downstream derivation iterates in the same order.

use std::collections::BTreeMap;

use mn_core::{CompartmentId, MetaboliteId, ProcessId, ReactionId, Role};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Model {
    #[serde(default)]
    pub metabolites: BTreeMap<MetaboliteId, Metabolite>,
    #[serde(default)]
    pub reactions: BTreeMap<ReactionId, Reaction>,
    #[serde(default)]
    pub compartments: BTreeMap<CompartmentId, Compartment>,
    #[serde(default)]
    pub processes: BTreeMap<ProcessId, Process>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Metabolite {
    pub identifier: MetaboliteId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge: Option<i32>,
    /// Identifiers of the metabolite in external databases.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub references: BTreeMap<ReferenceType, String>,
}

/// External database a metabolite reference points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceType {
    #[default]
    Pubchem,
    Hmdb,
    Metanetx,
}

impl ReferenceType {
    pub const ALL: [ReferenceType; 3] = [
        ReferenceType::Pubchem,
        ReferenceType::Hmdb,
        ReferenceType::Metanetx,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ReferenceType::Pubchem => "pubchem",
            ReferenceType::Hmdb => "hmdb",
            ReferenceType::Metanetx => "metanetx",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reaction {
    pub identifier: ReactionId,
    pub name: String,
    #[serde(default)]
    pub reversibility: bool,
    #[serde(default)]
    pub participants: Vec<Participant>,
    /// Compartments declared on the reaction itself (participants add theirs).
    #[serde(default)]
    pub compartments: Vec<CompartmentId>,
    #[serde(default)]
    pub processes: Vec<ProcessId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub genes: Vec<String>,
}

/// One metabolite's participation in a reaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Participant {
    pub metabolite: MetaboliteId,
    pub compartment: CompartmentId,
    pub role: Role,
    #[serde(default = "default_coefficient")]
    pub coefficient: f64,
}

fn default_coefficient() -> f64 {
    1.0
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Compartment {
    pub identifier: CompartmentId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Process {
    pub identifier: ProcessId,
    pub name: String,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metabolite(mut self, metabolite: Metabolite) -> Self {
        self.metabolites
            .insert(metabolite.identifier.clone(), metabolite);
        self
    }

    pub fn with_reaction(mut self, reaction: Reaction) -> Self {
        self.reactions.insert(reaction.identifier.clone(), reaction);
        self
    }

    pub fn with_compartment(mut self, compartment: Compartment) -> Self {
        self.compartments
            .insert(compartment.identifier.clone(), compartment);
        self
    }

    pub fn with_process(mut self, process: Process) -> Self {
        self.processes.insert(process.identifier.clone(), process);
        self
    }

    /// Display name of a metabolite, falling back to its identifier.
    pub fn metabolite_name<'a>(&'a self, identifier: &'a str) -> &'a str {
        self.metabolites
            .get(identifier)
            .map(|m| m.name.as_str())
            .unwrap_or(identifier)
    }

    /// Display name of a reaction, falling back to its identifier.
    pub fn reaction_name<'a>(&'a self, identifier: &'a str) -> &'a str {
        self.reactions
            .get(identifier)
            .map(|r| r.name.as_str())
            .unwrap_or(identifier)
    }

    pub fn compartment_name<'a>(&'a self, identifier: &'a str) -> &'a str {
        self.compartments
            .get(identifier)
            .map(|c| c.name.as_str())
            .unwrap_or(identifier)
    }

    pub fn process_name<'a>(&'a self, identifier: &'a str) -> &'a str {
        self.processes
            .get(identifier)
            .map(|p| p.name.as_str())
            .unwrap_or(identifier)
    }
}

impl Metabolite {
    pub fn new(identifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
            formula: None,
            charge: None,
            references: BTreeMap::new(),
        }
    }

    pub fn with_reference(mut self, kind: ReferenceType, identifier: impl Into<String>) -> Self {
        self.references.insert(kind, identifier.into());
        self
    }
}

impl Reaction {
    pub fn new(identifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
            reversibility: false,
            participants: Vec::new(),
            compartments: Vec::new(),
            processes: Vec::new(),
            genes: Vec::new(),
        }
    }

    pub fn reactant(
        self,
        metabolite: impl Into<String>,
        compartment: impl Into<String>,
        coefficient: f64,
    ) -> Self {
        self.participant(metabolite, compartment, Role::Reactant, coefficient)
    }

    pub fn product(
        self,
        metabolite: impl Into<String>,
        compartment: impl Into<String>,
        coefficient: f64,
    ) -> Self {
        self.participant(metabolite, compartment, Role::Product, coefficient)
    }

    fn participant(
        mut self,
        metabolite: impl Into<String>,
        compartment: impl Into<String>,
        role: Role,
        coefficient: f64,
    ) -> Self {
        self.participants.push(Participant {
            metabolite: metabolite.into(),
            compartment: compartment.into(),
            role,
            coefficient,
        });
        self
    }

    pub fn in_process(mut self, process: impl Into<String>) -> Self {
        self.processes.push(process.into());
        self
    }

    pub fn in_compartment(mut self, compartment: impl Into<String>) -> Self {
        self.compartments.push(compartment.into());
        self
    }

    pub fn reversible(mut self) -> Self {
        self.reversibility = true;
        self
    }
}

impl Compartment {
    pub fn new(identifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
        }
    }
}

impl Process {
    pub fn new(identifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
        }
    }
}

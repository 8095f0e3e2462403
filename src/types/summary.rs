use serde::{Deserialize, Serialize};

/// Generated summary: an ordered list of facts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(rename = "summary")]
    facts: Vec<String>,
}

impl Summary {
    pub fn new(facts: Vec<String>) -> Self {
        Self { facts }
    }

    pub fn facts(&self) -> &[String] {
        &self.facts
    }

    pub fn into_facts(self) -> Vec<String> {
        self.facts
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}

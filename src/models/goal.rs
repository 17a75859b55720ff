//! Savings goals
//!
//! Goals come from a static catalog; a session only selects which ones are
//! active.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A savings goal with a short actionable tip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub tip: String,
}

/// (id, title, tip), in catalog order
const GOAL_CATALOG: [(&str, &str, &str); 4] = [
    (
        "emergency-fund",
        "Montar reserva de emergência",
        "Separe 10% da renda para sua reserva. Meta inicial: 3 meses de despesas.",
    ),
    (
        "debts",
        "Quitar dívidas de curto prazo",
        "Mapeie juros acima de 8% ao mês e priorize negociações.",
    ),
    (
        "education",
        "Investir em educação",
        "Reserve um valor mensal para cursos ou certificações que tragam aumento de renda.",
    ),
    (
        "leisure",
        "Planejar lazer sem culpa",
        "Crie um envelope digital para viagens e experiências.",
    ),
];

/// Goals active in a fresh session
const DEFAULT_GOAL_IDS: [&str; 2] = ["emergency-fund", "leisure"];

impl Goal {
    /// Every goal in the catalog
    pub fn catalog() -> Vec<Goal> {
        GOAL_CATALOG
            .iter()
            .map(|(id, title, tip)| Goal {
                id: id.to_string(),
                title: title.to_string(),
                tip: tip.to_string(),
            })
            .collect()
    }

    /// Find a catalog goal by id
    pub fn find(id: &str) -> Option<Goal> {
        Self::catalog().into_iter().find(|g| g.id == id)
    }

    /// The goal set a new or reset session starts with
    pub fn default_set() -> Vec<Goal> {
        DEFAULT_GOAL_IDS.iter().filter_map(|id| Self::find(id)).collect()
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.tip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order() {
        let ids: Vec<_> = Goal::catalog().into_iter().map(|g| g.id).collect();
        assert_eq!(ids, vec!["emergency-fund", "debts", "education", "leisure"]);
    }

    #[test]
    fn test_default_set() {
        let goals = Goal::default_set();
        assert_eq!(goals.len(), 2);
        assert_eq!(goals[0].id, "emergency-fund");
        assert_eq!(goals[1].id, "leisure");
    }

    #[test]
    fn test_find_unknown() {
        assert!(Goal::find("yacht").is_none());
    }
}

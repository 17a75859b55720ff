//! Keyword tables
//!
//! Ordered slices rather than maps: the first matching entry wins, so the
//! order here is the tie-break order. All keywords are lowercase and are
//! matched as substrings of lowercased text; a leading space is part of the
//! keyword.

use crate::models::Category;

/// Any of these means the user wants to start over
pub const RESET_KEYWORDS: &[&str] = &["reset", "apagar", "começar do zero"];

/// A summary question needs one of these...
pub const QUESTION_KEYWORDS: &[&str] = &["quanto", "qual"];

/// ...and one of these
pub const FINANCE_KEYWORDS: &[&str] = &["gastei", "gastos", "saldo", "recebi"];

/// Asking about savings goals ("metas" and "objetivos" match as well)
pub const GOAL_KEYWORDS: &[&str] = &["meta", "objetivo"];

/// Money coming in
pub const INCOME_KEYWORDS: &[&str] = &["receb", "entrou", "ganhei", "salário"];

/// Money put aside; only decides the type, never the category
pub const INVESTMENT_KEYWORDS: &[&str] = &["investi", "apliquei"];

/// Income categories, checked in order
pub const INCOME_CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (Category::Salary, &["salár"]),
    (Category::Freelance, &["freel", "projeto", "cliente"]),
];

/// Expense and investment categories, checked in order
pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Food,
        &[
            "café",
            "restaurante",
            "almoço",
            "lanche",
            "mercado",
            "supermercado",
            "pizza",
            "ifood",
        ],
    ),
    (
        Category::Transport,
        &[
            "uber",
            "99",
            " gasolina",
            "combustível",
            "ônibus",
            "metrô",
            "passagem",
        ],
    ),
    (
        Category::Housing,
        &["aluguel", "condomínio", "luz", "energia", "água", "internet"],
    ),
    (
        Category::Health,
        &["farmácia", "consulta", "remédio", "psicólogo", "dentista"],
    ),
    (
        Category::Leisure,
        &["cinema", "show", "streaming", "netflix", "spotify"],
    ),
    (Category::Education, &["curso", "faculdade", "livro", "pós"]),
    (Category::Salary, &["salário", "folha", "pagamento"]),
    (Category::Freelance, &["freela", "projeto", "cliente"]),
];

/// Whether any keyword occurs in `text` (already lowercased)
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}

/// First category in `table` with a keyword occurring in `text`
pub fn first_match(text: &str, table: &[(Category, &[&str])]) -> Option<Category> {
    table
        .iter()
        .find(|(_, keywords)| contains_any(text, keywords))
        .map(|(category, _)| *category)
}

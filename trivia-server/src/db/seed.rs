//! Bundled starter data
//!
//! Categories are fixed; there is no endpoint to create or delete them.

use sqlx::PgPool;
use trivia_core::{Category, Question};

const CATEGORIES: &[(i64, &str)] = &[
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

// (question, answer, category, difficulty)
const QUESTIONS: &[(&str, &str, i64, i32)] = &[
    ("What is the chemical symbol for gold?", "Au", 1, 2),
    ("Which planet is known as the Red Planet?", "Mars", 1, 1),
    ("What is the hardest natural substance on Earth?", "Diamond", 1, 2),
    ("How many bones are in the adult human body?", "206", 1, 3),
    ("Who painted the ceiling of the Sistine Chapel?", "Michelangelo", 2, 2),
    ("Which artist cut off part of his own ear?", "Vincent van Gogh", 2, 1),
    ("In which city is the Louvre museum?", "Paris", 2, 1),
    ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    ("What is the capital of Australia?", "Canberra", 3, 2),
    ("Which river flows through Cairo?", "The Nile", 3, 1),
    ("In which year did the Berlin Wall fall?", "1989", 4, 2),
    ("Who was the first person to walk on the Moon?", "Neil Armstrong", 4, 1),
    ("Which empire built Machu Picchu?", "The Inca Empire", 4, 3),
    ("Which film won the first Academy Award for Best Picture?", "Wings", 5, 4),
    ("What is the name of the wizarding school in Harry Potter?", "Hogwarts", 5, 1),
    ("Which band released the album Abbey Road?", "The Beatles", 5, 1),
    ("Which country has won the most FIFA World Cups?", "Brazil", 6, 3),
    ("How many players are on a basketball team on court?", "Five", 6, 1),
    ("In which sport is the Ryder Cup contested?", "Golf", 6, 2),
];

/// Seed categories.
pub fn categories() -> Vec<Category> {
    CATEGORIES
        .iter()
        .map(|&(id, kind)| Category::new(id, kind))
        .collect()
}

/// Seed questions with ids assigned in order, starting at 1.
pub fn questions() -> Vec<Question> {
    QUESTIONS
        .iter()
        .enumerate()
        .map(|(i, &(question, answer, category, difficulty))| Question {
            id: i as i64 + 1,
            question: question.to_owned(),
            answer: answer.to_owned(),
            category,
            difficulty,
        })
        .collect()
}

/// Rows written by [`seed_database`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub categories: u64,
    pub questions: u64,
}

/// Insert seed data into Postgres.
///
/// Categories are upserted by id. Questions are only inserted when the
/// questions table is empty, so re-running never duplicates them.
pub async fn seed_database(pool: &PgPool) -> Result<SeedReport, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut report = SeedReport::default();

    for &(id, kind) in CATEGORIES {
        let result = sqlx::query(
            "INSERT INTO categories (id, type) VALUES ($1, $2) ON CONFLICT (id) DO NOTHING",
        )
        .bind(id)
        .bind(kind)
        .execute(&mut *tx)
        .await?;
        report.categories += result.rows_affected();
    }

    // Explicit ids bypass the sequence; move it past them
    sqlx::query(
        "SELECT setval(pg_get_serial_sequence('categories', 'id'), (SELECT MAX(id) FROM categories))",
    )
    .execute(&mut *tx)
    .await?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
        .fetch_one(&mut *tx)
        .await?;

    if existing == 0 {
        for &(question, answer, category, difficulty) in QUESTIONS {
            sqlx::query(
                "INSERT INTO questions (question, answer, category, difficulty) VALUES ($1, $2, $3, $4)",
            )
            .bind(question)
            .bind(answer)
            .bind(category)
            .bind(difficulty)
            .execute(&mut *tx)
            .await?;
            report.questions += 1;
        }
    } else {
        tracing::info!(existing, "questions table not empty, skipping question seed");
    }

    tx.commit().await?;
    Ok(report)
}

//! Quiz scoring.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::course::content::QuizContent;
use crate::types::ItemId;

/// Selected answer ids per question id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSubmission {
    pub answers: HashMap<ItemId, Vec<ItemId>>,
}

impl QuizSubmission {
    pub fn select(mut self, question_id: &str, answer_id: &str) -> Self {
        self.answers
            .entry(question_id.to_string())
            .or_default()
            .push(answer_id.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub score: u32,
    pub max_score: u32,
    pub percentage: u8,
    pub passed: bool,
    pub incorrect_question_ids: Vec<ItemId>,
}

/// Score a submission. A question counts as correct when the selected
/// answers are exactly the set of correct answers.
pub fn evaluate_quiz(quiz: &QuizContent, submission: &QuizSubmission) -> QuizResult {
    let mut score = 0u32;
    let mut incorrect_question_ids = Vec::new();

    for question in &quiz.questions {
        let expected: BTreeSet<&str> = question
            .answers
            .iter()
            .filter(|a| a.is_correct)
            .map(|a| a.id.as_str())
            .collect();
        let selected: BTreeSet<&str> = submission
            .answers
            .get(&question.id)
            .map(|ids| ids.iter().map(String::as_str).collect())
            .unwrap_or_default();

        if !expected.is_empty() && expected == selected {
            score += 1;
        } else {
            incorrect_question_ids.push(question.id.clone());
        }
    }

    let max_score = quiz.questions.len() as u32;
    let percentage = if max_score == 0 {
        0
    } else {
        ((score * 100 + max_score / 2) / max_score) as u8
    };

    QuizResult {
        score,
        max_score,
        percentage,
        passed: max_score > 0 && percentage >= quiz.passing_score_percent,
        incorrect_question_ids,
    }
}

//! Scoring: pure functions from captured answers to per-area results.

use crate::assessment::answers::AnswerRecord;
use crate::models::result::{ProficiencyLevel, SkillResult};
use crate::models::skill::SkillArea;

/// Scores every area against the answer record.
///
/// Results follow `areas` order. An area without questions scores 0 of 0 at
/// 0% (Beginner). Unanswered and timed-out questions count as incorrect.
pub fn score(areas: &[SkillArea], answers: &AnswerRecord) -> Vec<SkillResult> {
    areas
        .iter()
        .map(|area| {
            let correct = area
                .questions
                .iter()
                .filter(|q| {
                    answers
                        .get(&q.id)
                        .map(|a| a.is_correct_for(q.correct_option_index))
                        .unwrap_or(false)
                })
                .count() as u32;
            let max_score = area.questions.len() as u32;
            let percentage = if max_score > 0 {
                correct as f64 / max_score as f64 * 100.0
            } else {
                0.0
            };
            SkillResult {
                area: area.name.clone(),
                score: correct,
                max_score,
                percentage,
                level: ProficiencyLevel::from_percentage(percentage),
            }
        })
        .collect()
}

/// Results ordered by percentage, highest first. Ties keep area order.
pub fn ranked(results: &[SkillResult]) -> Vec<SkillResult> {
    let mut sorted = results.to_vec();
    sorted.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
    sorted
}

pub fn top_skills(results: &[SkillResult], n: usize) -> Vec<SkillResult> {
    ranked(results).into_iter().take(n).collect()
}

/// Mean percentage across areas; 0 when there are no results.
pub fn average_percentage(results: &[SkillResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    results.iter().map(|r| r.percentage).sum::<f64>() / results.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::result::Answer;
    use crate::models::skill::{Difficulty, Question};

    fn question(id: &str, correct: usize) -> Question {
        Question {
            id: id.to_string(),
            prompt: id.to_string(),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_option_index: correct,
            difficulty: Difficulty::Medium,
            explanation: String::new(),
        }
    }

    fn area(name: &str, questions: Vec<Question>) -> SkillArea {
        SkillArea {
            name: name.to_string(),
            description: String::new(),
            icon: String::new(),
            questions,
        }
    }

    fn record(entries: &[(&str, Answer)]) -> AnswerRecord {
        let mut answers = AnswerRecord::default();
        for (id, answer) in entries {
            answers.record(id, *answer).unwrap();
        }
        answers
    }

    fn result(area: &str, percentage: f64) -> SkillResult {
        SkillResult {
            area: area.to_string(),
            score: 0,
            max_score: 0,
            percentage,
            level: ProficiencyLevel::from_percentage(percentage),
        }
    }

    #[test]
    fn test_one_correct_one_timeout_is_half_beginner() {
        let areas = vec![area("Math", vec![question("m1", 0), question("m2", 1)])];
        let answers = record(&[("m1", Answer::Selected(0)), ("m2", Answer::TimedOut)]);
        let results = score(&areas, &answers);
        assert_eq!(
            results,
            vec![SkillResult {
                area: "Math".to_string(),
                score: 1,
                max_score: 2,
                percentage: 50.0,
                level: ProficiencyLevel::Beginner,
            }]
        );
    }

    #[test]
    fn test_empty_area_scores_zero_not_nan() {
        let results = score(&[area("Empty", vec![])], &AnswerRecord::default());
        assert_eq!(results[0].max_score, 0);
        assert_eq!(results[0].percentage, 0.0);
        assert!(results[0].percentage.is_finite());
        assert_eq!(results[0].level, ProficiencyLevel::Beginner);
    }

    #[test]
    fn test_results_follow_area_order() {
        let areas = vec![
            area("Low", vec![question("l1", 0)]),
            area("High", vec![question("h1", 2)]),
        ];
        let answers = record(&[("l1", Answer::Selected(3)), ("h1", Answer::Selected(2))]);
        let names: Vec<String> = score(&areas, &answers).into_iter().map(|r| r.area).collect();
        assert_eq!(names, vec!["Low", "High"]);
    }

    #[test]
    fn test_score_bounds_hold_for_every_answer_pattern() {
        let questions: Vec<Question> = (0..4).map(|i| question(&format!("q{i}"), i)).collect();
        let areas = vec![area("Grid", questions)];
        // every combination of answers in {-1, 0, 1, 2, 3} for four questions
        for pattern in 0..5u32.pow(4) {
            let mut answers = AnswerRecord::default();
            let mut p = pattern;
            for i in 0..4 {
                let answer = match p % 5 {
                    0 => Answer::TimedOut,
                    n => Answer::Selected((n - 1) as usize),
                };
                answers.record(&format!("q{i}"), answer).unwrap();
                p /= 5;
            }
            let r = &score(&areas, &answers)[0];
            assert!(r.score <= r.max_score);
            assert!((0.0..=100.0).contains(&r.percentage));
        }
    }

    #[test]
    fn test_all_correct_is_expert() {
        let areas = vec![area("A", vec![question("a1", 1), question("a2", 2)])];
        let answers = record(&[("a1", Answer::Selected(1)), ("a2", Answer::Selected(2))]);
        let r = &score(&areas, &answers)[0];
        assert_eq!(r.percentage, 100.0);
        assert_eq!(r.level, ProficiencyLevel::Expert);
    }

    #[test]
    fn test_answers_for_other_areas_are_ignored() {
        let areas = vec![area("A", vec![question("a1", 0)])];
        let answers = record(&[("zz", Answer::Selected(0))]);
        assert_eq!(score(&areas, &answers)[0].score, 0);
    }

    #[test]
    fn test_ranked_does_not_mutate_input_and_is_stable() {
        let results = vec![result("A", 40.0), result("B", 80.0), result("C", 40.0)];
        let sorted = ranked(&results);
        let names: Vec<&str> = sorted.iter().map(|r| r.area.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
        assert_eq!(results[0].area, "A");
    }

    #[test]
    fn test_top_skills_and_average() {
        let results = vec![result("A", 20.0), result("B", 80.0), result("C", 60.0), result("D", 40.0)];
        let top: Vec<String> = top_skills(&results, 3).into_iter().map(|r| r.area).collect();
        assert_eq!(top, vec!["B", "C", "D"]);
        assert!((average_percentage(&results) - 50.0).abs() < f64::EPSILON);
        assert_eq!(average_percentage(&[]), 0.0);
    }
}

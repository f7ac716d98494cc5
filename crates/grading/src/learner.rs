use serde::{Deserialize, Serialize};

use tally_core::{Entity, EntityId};

/// Letter grade derived from a numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Fixed thresholds: >= 80 A, >= 70 B, >= 60 C, >= 50 D, else F.
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s >= 80 => Grade::A,
            s if s >= 70 => Grade::B,
            s if s >= 60 => Grade::C,
            s if s >= 50 => Grade::D,
            _ => Grade::F,
        }
    }

    pub fn letter(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl core::fmt::Display for Grade {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.letter())
    }
}

/// One graded learner record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Learner {
    pub id: EntityId,
    pub full_name: String,
    pub score: i32,
}

impl Learner {
    pub fn new(id: u32, full_name: impl Into<String>, score: i32) -> Self {
        Self {
            id: EntityId::new(id),
            full_name: full_name.into(),
            score,
        }
    }

    pub fn grade(&self) -> Grade {
        Grade::from_score(self.score)
    }

    /// The fixed report line: `<name> (ID: <id>): Score = <score>, Grade = <letter>`.
    pub fn report_line(&self) -> String {
        format!(
            "{} (ID: {}): Score = {}, Grade = {}",
            self.full_name,
            self.id,
            self.score,
            self.grade()
        )
    }
}

impl Entity for Learner {
    fn id(&self) -> EntityId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_boundaries() {
        let cases = [
            (80, Grade::A),
            (79, Grade::B),
            (70, Grade::B),
            (69, Grade::C),
            (60, Grade::C),
            (59, Grade::D),
            (50, Grade::D),
            (49, Grade::F),
        ];
        for (score, expected) in cases {
            assert_eq!(Grade::from_score(score), expected, "score {score}");
        }
    }

    #[test]
    fn negative_scores_grade_as_f() {
        assert_eq!(Grade::from_score(-5), Grade::F);
    }

    #[test]
    fn report_line_has_the_fixed_shape() {
        let learner = Learner::new(12, "Ama Serwaa", 83);
        assert_eq!(
            learner.report_line(),
            "Ama Serwaa (ID: 12): Score = 83, Grade = A"
        );
    }
}

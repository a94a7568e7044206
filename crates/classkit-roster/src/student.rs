//! The student record and its derived values.
//!
//! Raw fields are private and every mutation goes through a validating
//! entry point, so a `Student` can never be observed with marks out of
//! range. Derived values (totals, percentage, grade) are computed on
//! demand from the raw fields and are never stored, which rules out the
//! stale-derived-value bug class entirely.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RosterError;

/// Maximum mark for each of the three coursework components.
pub const MAX_COURSEWORK_MARK: u32 = 20;
/// Maximum exam mark.
pub const MAX_EXAM_MARK: u32 = 100;
/// Maximum overall total (3 x 20 coursework + 100 exam).
pub const TOTAL_MAX_MARKS: u32 = 160;

/// Letter grade, thresholded on the overall percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Grade for an overall percentage of the 160-mark maximum.
    pub fn from_percentage(percentage: f64) -> Grade {
        if percentage >= 70.0 {
            Grade::A
        } else if percentage >= 60.0 {
            Grade::B
        } else if percentage >= 50.0 {
            Grade::C
        } else if percentage >= 40.0 {
            Grade::D
        } else {
            Grade::F
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::A => write!(f, "A"),
            Grade::B => write!(f, "B"),
            Grade::C => write!(f, "C"),
            Grade::D => write!(f, "D"),
            Grade::F => write!(f, "F"),
        }
    }
}

/// A single validated student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    code: String,
    name: String,
    marks: [u32; 3],
    exam: u32,
}

impl Student {
    /// Create a validated record.
    ///
    /// The code may be any string: the conventional 4-digit form is an
    /// entry-validation rule for front-ends, not a parse-time constraint.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        marks: [u32; 3],
        exam: u32,
    ) -> Result<Student, RosterError> {
        let name = name.into();
        validate_name(&name)?;
        validate_marks(&marks, exam)?;
        Ok(Student {
            code: code.into(),
            name,
            marks,
            exam,
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn marks(&self) -> [u32; 3] {
        self.marks
    }

    pub fn exam(&self) -> u32 {
        self.exam
    }

    /// Sum of the three coursework components (out of 60).
    pub fn coursework_total(&self) -> u32 {
        self.marks.iter().sum()
    }

    /// Overall total (out of 160).
    pub fn total(&self) -> u32 {
        self.coursework_total() + self.exam
    }

    /// Overall percentage of the 160-mark maximum.
    pub fn percentage(&self) -> f64 {
        (self.total() as f64 / TOTAL_MAX_MARKS as f64) * 100.0
    }

    /// Letter grade derived from the overall percentage.
    pub fn grade(&self) -> Grade {
        Grade::from_percentage(self.percentage())
    }

    /// Apply a partial update. Fields left `None` are untouched.
    ///
    /// Validation happens before anything is written, so a rejected update
    /// leaves the record exactly as it was.
    pub fn apply(&mut self, update: &StudentUpdate) -> Result<(), RosterError> {
        let name = update.name.as_deref().unwrap_or(&self.name);
        validate_name(name)?;

        let mut marks = self.marks;
        for (slot, new) in marks.iter_mut().zip(update.marks) {
            if let Some(m) = new {
                *slot = m;
            }
        }
        let exam = update.exam.unwrap_or(self.exam);
        validate_marks(&marks, exam)?;

        if let Some(n) = &update.name {
            self.name = n.clone();
        }
        self.marks = marks;
        self.exam = exam;
        Ok(())
    }

    /// Serialize to the six-field comma format used on disk.
    pub fn to_line(&self) -> String {
        format!(
            "{},{},{},{},{},{}",
            self.code, self.name, self.marks[0], self.marks[1], self.marks[2], self.exam
        )
    }

    /// Parse one record line of the six-field comma format.
    pub fn parse_line(line: &str) -> Result<Student, RosterError> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 6 {
            return Err(RosterError::FieldCount {
                found: fields.len(),
            });
        }

        let mark = |s: &str| -> Result<u32, RosterError> {
            s.trim()
                .parse::<u32>()
                .map_err(|_| RosterError::MarkNotNumeric(s.trim().to_string()))
        };

        Student::new(
            fields[0].trim(),
            fields[1].trim(),
            [mark(fields[2])?, mark(fields[3])?, mark(fields[4])?],
            mark(fields[5])?,
        )
    }
}

fn validate_name(name: &str) -> Result<(), RosterError> {
    if name.trim().is_empty() || name.contains(',') {
        return Err(RosterError::InvalidName);
    }
    Ok(())
}

fn validate_marks(marks: &[u32; 3], exam: u32) -> Result<(), RosterError> {
    for &m in marks {
        if m > MAX_COURSEWORK_MARK {
            return Err(RosterError::CourseworkOutOfRange(m));
        }
    }
    if exam > MAX_EXAM_MARK {
        return Err(RosterError::ExamOutOfRange(exam));
    }
    Ok(())
}

/// A partial update: only supplied fields are changed.
#[derive(Debug, Clone, Default)]
pub struct StudentUpdate {
    pub name: Option<String>,
    pub marks: [Option<u32>; 3],
    pub exam: Option<u32>,
}

impl StudentUpdate {
    /// True when no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.marks.iter().all(Option::is_none) && self.exam.is_none()
    }
}

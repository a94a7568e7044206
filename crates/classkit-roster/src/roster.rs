//! The roster: an ordered student list backed by a flat file.
//!
//! On-disk format:
//!
//! ```text
//! <class_size>
//! <code>,<name>,<cw1>,<cw2>,<cw3>,<exam>
//! ...
//! ```
//!
//! The in-memory list is the single source of truth during a session; every
//! save rewrites the whole file. Mutating operations persist immediately
//! and roll their in-memory change back if the write fails, so the list
//! always stays consistent with what was actually persisted.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::RosterError;
use crate::student::{Student, StudentUpdate};

/// Sort keys supported by `Roster::sort`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Total,
    Percentage,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "total" | "total_score" => Ok(SortKey::Total),
            "percentage" | "percent" => Ok(SortKey::Percentage),
            other => Err(format!("unknown sort key: {other}")),
        }
    }
}

/// The ordered in-memory student sequence bound to its backing file.
#[derive(Debug)]
pub struct Roster {
    path: PathBuf,
    students: Vec<Student>,
}

impl Roster {
    /// Load a roster from disk.
    ///
    /// An absent file is an empty roster, not an error. Record lines that
    /// fail to parse (wrong field count, non-numeric or out-of-range marks)
    /// are skipped with a warning.
    pub fn load(path: impl Into<PathBuf>) -> Result<Roster, RosterError> {
        let path = path.into();
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no roster file, starting empty");
                return Ok(Roster {
                    path,
                    students: Vec::new(),
                });
            }
            Err(source) => return Err(RosterError::Read { path, source }),
        };

        let mut lines = content.lines();
        // First line is the declared class size. It is informational only:
        // the loader recounts from the records that actually parse.
        if let Some(declared) = lines.next() {
            if declared.trim().parse::<usize>().is_err() {
                tracing::warn!(
                    path = %path.display(),
                    line = declared,
                    "first line is not a record count"
                );
            }
        }

        let mut students = Vec::new();
        for (idx, line) in lines.enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match Student::parse_line(line) {
                Ok(student) => students.push(student),
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        line = idx + 2,
                        "skipping malformed record: {e}"
                    );
                }
            }
        }

        Ok(Roster { path, students })
    }

    /// An empty roster bound to `path` (nothing is written until a save).
    pub fn empty(path: impl Into<PathBuf>) -> Roster {
        Roster {
            path: path.into(),
            students: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Rewrite the whole backing file: current count, then one line per
    /// record. On failure the in-memory list is untouched and the error is
    /// returned to the caller.
    pub fn save(&self) -> Result<(), RosterError> {
        let mut out = String::new();
        out.push_str(&self.students.len().to_string());
        out.push('\n');
        for student in &self.students {
            out.push_str(&student.to_line());
            out.push('\n');
        }
        std::fs::write(&self.path, out).map_err(|source| RosterError::Write {
            path: self.path.clone(),
            source,
        })
    }

    /// All students matching `term`, in roster order.
    ///
    /// Matching is case-insensitive; a code must equal the term exactly,
    /// a name matches on substring.
    pub fn find(&self, term: &str) -> Vec<&Student> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return Vec::new();
        }
        self.students
            .iter()
            .filter(|s| {
                s.code().eq_ignore_ascii_case(&term) || s.name().to_lowercase().contains(&term)
            })
            .collect()
    }

    fn position(&self, term: &str) -> Option<usize> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return None;
        }
        self.students.iter().position(|s| {
            s.code().eq_ignore_ascii_case(&term) || s.name().to_lowercase().contains(&term)
        })
    }

    /// The student with the highest (or lowest) overall total. Ties go to
    /// the first such student in roster order, so the fold below compares
    /// strictly instead of using `Iterator::max_by` (which keeps the last).
    pub fn extremes(&self, highest: bool) -> Option<&Student> {
        let mut best: Option<&Student> = None;
        for s in &self.students {
            best = match best {
                None => Some(s),
                Some(b) => {
                    let better = if highest {
                        s.total() > b.total()
                    } else {
                        s.total() < b.total()
                    };
                    if better {
                        Some(s)
                    } else {
                        Some(b)
                    }
                }
            };
        }
        best
    }

    /// Stable sort by the chosen key; `ascending = false` reverses.
    pub fn sort(&mut self, key: SortKey, ascending: bool) {
        let cmp = |a: &Student, b: &Student| -> Ordering {
            match key {
                SortKey::Name => a.name().cmp(b.name()),
                SortKey::Total => a.total().cmp(&b.total()),
                SortKey::Percentage => a
                    .percentage()
                    .partial_cmp(&b.percentage())
                    .unwrap_or(Ordering::Equal),
            }
        };
        if ascending {
            self.students.sort_by(cmp);
        } else {
            self.students.sort_by(|a, b| cmp(b, a));
        }
    }

    /// Class size and mean overall percentage.
    pub fn summary(&self) -> (usize, f64) {
        if self.students.is_empty() {
            return (0, 0.0);
        }
        let total: f64 = self.students.iter().map(Student::percentage).sum();
        (self.students.len(), total / self.students.len() as f64)
    }

    /// Append a record and persist. A failed save rolls the append back.
    pub fn add(&mut self, student: Student) -> Result<(), RosterError> {
        self.students.push(student);
        if let Err(e) = self.save() {
            self.students.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Update the first record matching `term` with the supplied fields,
    /// then persist. A failed validation or save leaves the roster as it
    /// was.
    pub fn update(&mut self, term: &str, update: &StudentUpdate) -> Result<&Student, RosterError> {
        let idx = self
            .position(term)
            .ok_or_else(|| RosterError::NotFound(term.to_string()))?;

        let previous = self.students[idx].clone();
        self.students[idx].apply(update)?;
        if let Err(e) = self.save() {
            self.students[idx] = previous;
            return Err(e);
        }
        Ok(&self.students[idx])
    }

    /// Delete the first record matching `term`, then persist. A failed
    /// save reinserts the record at its old position.
    pub fn delete(&mut self, term: &str) -> Result<Student, RosterError> {
        let idx = self
            .position(term)
            .ok_or_else(|| RosterError::NotFound(term.to_string()))?;

        let removed = self.students.remove(idx);
        if let Err(e) = self.save() {
            self.students.insert(idx, removed);
            return Err(e);
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::student::Grade;

    fn student(code: &str, name: &str, marks: [u32; 3], exam: u32) -> Student {
        Student::new(code, name, marks, exam).unwrap()
    }

    fn sample_roster(dir: &Path) -> Roster {
        let mut r = Roster::empty(dir.join("studentMarks.txt"));
        r.add(student("1001", "Ada Lovelace", [18, 16, 17], 85)).unwrap();
        r.add(student("1002", "Charles Babbage", [10, 12, 11], 55)).unwrap();
        r.add(student("1003", "Grace Hopper", [20, 19, 18], 92)).unwrap();
        r
    }

    #[test]
    fn load_missing_file_is_empty_roster() {
        let dir = tempfile::tempdir().unwrap();
        let r = Roster::load(dir.path().join("nope.txt")).unwrap();
        assert!(r.is_empty());
    }

    #[test]
    fn save_load_roundtrip_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let r = sample_roster(dir.path());
        let first = std::fs::read_to_string(r.path()).unwrap();

        let reloaded = Roster::load(r.path()).unwrap();
        assert_eq!(reloaded.len(), 3);
        reloaded.save().unwrap();
        let second = std::fs::read_to_string(r.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn load_skips_malformed_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("studentMarks.txt");
        std::fs::write(
            &path,
            "4\n1001,Ada,18,16,17,85\nnot a record\n1002,Bob,5,5,5\n1003,Cyd,9,nine,9,40\n",
        )
        .unwrap();

        let r = Roster::load(&path).unwrap();
        assert_eq!(r.len(), 1);
        assert_eq!(r.students()[0].code(), "1001");
    }

    #[test]
    fn declared_count_is_informational() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("studentMarks.txt");
        std::fs::write(&path, "99\n1001,Ada,18,16,17,85\n").unwrap();
        let r = Roster::load(&path).unwrap();
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn find_matches_code_exactly_and_name_by_substring() {
        let dir = tempfile::tempdir().unwrap();
        let r = sample_roster(dir.path());

        // code is exact-match only: "42" must not match code "0042"-style
        // prefixes or fragments
        assert!(r.find("100").is_empty());
        assert_eq!(r.find("1002").len(), 1);

        // name matches on substring, case-insensitively
        let hits = r.find("ada");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name(), "Ada Lovelace");

        assert!(r.find("").is_empty());
        assert!(r.find("zz").is_empty());
    }

    #[test]
    fn find_code_fragment_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut r = Roster::empty(dir.path().join("s.txt"));
        r.add(student("0042", "Marie Curie", [10, 10, 10], 50)).unwrap();
        assert!(r.find("42").is_empty());
        assert_eq!(r.find("0042").len(), 1);
    }

    #[test]
    fn find_returns_all_matches_in_roster_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut r = Roster::empty(dir.path().join("s.txt"));
        r.add(student("2001", "Anna Smith", [10, 10, 10], 50)).unwrap();
        r.add(student("2002", "Bert Jones", [10, 10, 10], 50)).unwrap();
        r.add(student("2003", "Susanna Clarke", [10, 10, 10], 50)).unwrap();

        let hits = r.find("anna");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].code(), "2001");
        assert_eq!(hits[1].code(), "2003");
    }

    #[test]
    fn extremes_returns_first_on_ties() {
        let dir = tempfile::tempdir().unwrap();
        let mut r = Roster::empty(dir.path().join("s.txt"));
        r.add(student("1", "Low", [5, 5, 5], 35)).unwrap(); // total 50
        r.add(student("2", "TieA", [20, 20, 20], 30)).unwrap(); // total 90
        r.add(student("3", "TieB", [10, 20, 20], 40)).unwrap(); // total 90

        let best = r.extremes(true).unwrap();
        assert_eq!(best.code(), "2");
        let worst = r.extremes(false).unwrap();
        assert_eq!(worst.code(), "1");
    }

    #[test]
    fn extremes_of_empty_roster_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let r = Roster::empty(dir.path().join("s.txt"));
        assert!(r.extremes(true).is_none());
    }

    #[test]
    fn sort_by_total_and_reverse() {
        let dir = tempfile::tempdir().unwrap();
        let mut r = sample_roster(dir.path());

        r.sort(SortKey::Total, true);
        let codes: Vec<&str> = r.students().iter().map(Student::code).collect();
        assert_eq!(codes, ["1002", "1001", "1003"]);

        r.sort(SortKey::Total, false);
        let codes: Vec<&str> = r.students().iter().map(Student::code).collect();
        assert_eq!(codes, ["1003", "1001", "1002"]);
    }

    #[test]
    fn sort_by_name_is_stable_for_ties() {
        let dir = tempfile::tempdir().unwrap();
        let mut r = Roster::empty(dir.path().join("s.txt"));
        r.add(student("1", "Same Name", [1, 1, 1], 10)).unwrap();
        r.add(student("2", "Aaa", [1, 1, 1], 10)).unwrap();
        r.add(student("3", "Same Name", [2, 2, 2], 20)).unwrap();

        r.sort(SortKey::Name, true);
        let codes: Vec<&str> = r.students().iter().map(Student::code).collect();
        assert_eq!(codes, ["2", "1", "3"]);
    }

    #[test]
    fn summary_means_percentages() {
        let dir = tempfile::tempdir().unwrap();
        let mut r = Roster::empty(dir.path().join("s.txt"));
        assert_eq!(r.summary(), (0, 0.0));

        r.add(student("1", "A", [20, 20, 20], 100)).unwrap(); // 100%
        r.add(student("2", "B", [0, 0, 0], 80)).unwrap(); // 50%
        let (size, avg) = r.summary();
        assert_eq!(size, 2);
        assert!((avg - 75.0).abs() < 1e-9);
    }

    #[test]
    fn add_persists_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("s.txt");
        let mut r = Roster::empty(&path);
        r.add(student("1001", "Ada", [1, 2, 3], 4)).unwrap();

        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, "1\n1001,Ada,1,2,3,4\n");
    }

    #[test]
    fn failed_save_rolls_back_add() {
        let dir = tempfile::tempdir().unwrap();
        // the backing "file" is a directory, so every write fails
        let mut r = Roster::empty(dir.path());
        let err = r.add(student("1001", "Ada", [1, 2, 3], 4));
        assert!(matches!(err, Err(RosterError::Write { .. })));
        assert!(r.is_empty());
    }

    #[test]
    fn update_mutates_only_supplied_fields_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut r = sample_roster(dir.path());

        let updated = r
            .update(
                "1002",
                &StudentUpdate {
                    exam: Some(90),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.exam(), 90);
        assert_eq!(updated.name(), "Charles Babbage");
        assert_eq!(updated.grade(), Grade::A);

        let reloaded = Roster::load(r.path()).unwrap();
        assert_eq!(reloaded.find("1002")[0].exam(), 90);
    }

    #[test]
    fn update_unknown_term_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut r = sample_roster(dir.path());
        assert!(matches!(
            r.update("9999", &StudentUpdate::default()),
            Err(RosterError::NotFound(_))
        ));
    }

    #[test]
    fn delete_removes_first_match_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut r = sample_roster(dir.path());

        let removed = r.delete("grace").unwrap();
        assert_eq!(removed.code(), "1003");
        assert_eq!(r.len(), 2);

        let reloaded = Roster::load(r.path()).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert!(reloaded.find("1003").is_empty());
    }

    #[test]
    fn failed_save_reinserts_deleted_record() {
        let dir = tempfile::tempdir().unwrap();
        let mut r = sample_roster(dir.path());
        // rebind the backing path to an unwritable location
        r.path = dir.path().to_path_buf();

        let err = r.delete("1001");
        assert!(matches!(err, Err(RosterError::Write { .. })));
        assert_eq!(r.len(), 3);
        assert_eq!(r.students()[0].code(), "1001");
    }
}

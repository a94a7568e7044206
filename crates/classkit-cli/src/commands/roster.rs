//! `classkit roster`: list, search, and edit the student roster.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use classkit_roster::{Roster, SortKey, Student, StudentUpdate};
use comfy_table::{Cell, Table};

use crate::config::Config;
use crate::RosterAction;

pub fn execute(file: Option<PathBuf>, action: RosterAction, config: Option<PathBuf>) -> Result<()> {
    let config = Config::load(config.as_deref())?;
    let path = file.unwrap_or(config.roster.file);
    let mut roster = Roster::load(&path)?;

    match action {
        RosterAction::List { sort, desc } => {
            if let Some(key) = sort {
                let key: SortKey = key.parse().map_err(|e: String| anyhow!(e))?;
                roster.sort(key, !desc);
            }
            print_students(roster.students().iter());
            let (count, mean) = roster.summary();
            println!("{count} student(s), class average {mean:.1}%");
        }
        RosterAction::Find { term } => {
            let matches = roster.find(&term);
            if matches.is_empty() {
                println!("No student matches '{term}'");
            } else {
                print_students(matches.into_iter());
            }
        }
        RosterAction::Best => match roster.extremes(true) {
            Some(s) => print_students(std::iter::once(s)),
            None => println!("Roster is empty"),
        },
        RosterAction::Worst => match roster.extremes(false) {
            Some(s) => print_students(std::iter::once(s)),
            None => println!("Roster is empty"),
        },
        RosterAction::Add {
            code,
            name,
            marks,
            exam,
        } => {
            let [Some(m1), Some(m2), Some(m3)] = parse_marks(&marks)? else {
                return Err(anyhow!("all three coursework marks are required"));
            };
            let student = Student::new(code, name, [m1, m2, m3], exam)?;
            roster.add(student.clone())?;
            println!("Added {} ({})", student.name(), student.code());
        }
        RosterAction::Update {
            term,
            name,
            marks,
            exam,
        } => {
            let marks = match marks {
                Some(spec) => parse_marks(&spec)?,
                None => [None; 3],
            };
            let update = StudentUpdate { name, marks, exam };
            if update.is_empty() {
                return Err(anyhow!("nothing to update: pass --name, --marks, or --exam"));
            }
            let student = roster.update(&term, &update)?;
            println!("Updated {} ({})", student.name(), student.code());
        }
        RosterAction::Delete { term } => {
            let student = roster.delete(&term)?;
            println!("Deleted {} ({})", student.name(), student.code());
        }
    }
    Ok(())
}

/// Parse `"12,15,18"` style coursework marks; blank fields stay `None`.
fn parse_marks(spec: &str) -> Result<[Option<u32>; 3]> {
    let fields: Vec<&str> = spec.split(',').collect();
    if fields.len() != 3 {
        return Err(anyhow!(
            "expected three comma-separated coursework marks, got {}",
            fields.len()
        ));
    }
    let mut marks = [None; 3];
    for (slot, field) in marks.iter_mut().zip(&fields) {
        let field = field.trim();
        if !field.is_empty() {
            *slot = Some(
                field
                    .parse::<u32>()
                    .with_context(|| format!("invalid coursework mark: {field}"))?,
            );
        }
    }
    Ok(marks)
}

fn print_students<'a>(students: impl Iterator<Item = &'a Student>) {
    let mut table = Table::new();
    table.set_header(vec![
        "Code",
        "Name",
        "CW (60)",
        "Exam (100)",
        "Total (160)",
        "Percent",
        "Grade",
    ]);
    for s in students {
        table.add_row(vec![
            Cell::new(s.code()),
            Cell::new(s.name()),
            Cell::new(s.coursework_total()),
            Cell::new(s.exam()),
            Cell::new(s.total()),
            Cell::new(format!("{:.1}%", s.percentage())),
            Cell::new(s.grade()),
        ]);
    }
    println!("{table}");
}

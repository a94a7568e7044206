//! `classkit init`: write starter config and data files.

use std::path::Path;

use anyhow::{Context, Result};

const SAMPLE_CONFIG: &str = r#"# classkit configuration

[quiz]
max_questions = 10
max_lives = 5
first_attempt_points = 10
second_attempt_points = 5
# "percent_of_max" or "raw_score"
rank_convention = "percent_of_max"

[roster]
file = "students.txt"

[jokes]
file = "jokes.txt"
"#;

const SAMPLE_ROSTER: &str = "3
1001,Ada Lovelace,18,16,17,85
1002,Charles Babbage,10,12,11,55
1003,Grace Hopper,20,19,18,92
";

const SAMPLE_JOKES: &str = "\
Why did the student eat his homework?Because the teacher said it was a piece of cake
What do you call a bear with no teeth?A gummy bear
Why was the maths book sad?It had too many problems
";

pub fn execute() -> Result<()> {
    write_if_absent(Path::new("classkit.toml"), SAMPLE_CONFIG)?;
    write_if_absent(Path::new("students.txt"), SAMPLE_ROSTER)?;
    write_if_absent(Path::new("jokes.txt"), SAMPLE_JOKES)?;

    println!();
    println!("Next steps:");
    println!("  classkit quiz --tier beginner");
    println!("  classkit roster list");
    println!("  classkit joke");
    Ok(())
}

fn write_if_absent(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping", path.display());
        return Ok(());
    }
    std::fs::write(path, content)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Created {}", path.display());
    Ok(())
}

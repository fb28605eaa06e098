use crate::report::{Plan, PlannedEntry};
use colored::{ColoredString, Colorize};
use std::path::Path;

fn label(path: &Path) -> String {
    path.file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn entry_line(entry: &PlannedEntry, is_last: bool) -> String {
    let connector = if is_last {
        "└── ".yellow()
    } else {
        "├── ".yellow()
    };
    let name: ColoredString = if entry.exists {
        format!("{} (exists)", label(&entry.path)).yellow()
    } else {
        label(&entry.path).green()
    };

    format!("{}{}", connector, name)
}

/// Print the plan with a nice ASCII style.
pub fn preview_as_tree(plan: &Plan) {
    println!(
        "Legend: {} = (directory), {} = (new file), {} = (kept as is)",
        "blue".blue(),
        "green".green(),
        "yellow".yellow()
    );

    let fancy_prompt = format!(
        "{} {}\n",
        "┌─".bold().bright_blue(),
        "Preview".bold().bright_blue(),
    );

    println!("{}", fancy_prompt);

    let root = if plan.root_exists {
        label(&plan.root).blue()
    } else {
        format!("{} (new)", label(&plan.root)).blue()
    };
    println!("{}", root);

    let len = plan.entries.len();
    for (i, entry) in plan.entries.iter().enumerate() {
        println!("{}", entry_line(entry, i == len - 1));
    }

    let fancy_prompt = format!(
        "\n{} {}\n",
        "└─".bold().bright_blue(),
        format!(
            "{} file(s) would be created in {}",
            plan.pending(),
            plan.root.display()
        )
        .bright_green()
    );

    println!("{}", fancy_prompt);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn labels_use_the_file_name() {
        assert_eq!(label(Path::new("dog-walk-tracker/app.js")), "app.js");
        assert_eq!(label(Path::new("/")), "/");
    }

    #[test]
    fn last_entry_closes_the_tree() {
        colored::control::set_override(false);

        let entry = PlannedEntry {
            path: PathBuf::from("dog-walk-tracker/README.md"),
            exists: true,
        };

        assert_eq!(entry_line(&entry, true), "└── README.md (exists)");
        assert_eq!(entry_line(&entry, false), "├── README.md (exists)");
    }
}

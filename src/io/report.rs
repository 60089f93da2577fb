//! Console banner and the attribute frequency table

use crate::io::error::{Result, file_system};
use crate::pieces::labels::{BACKGROUND_LABEL, RequiredLabels, extract_labels};
use std::collections::BTreeMap;
use std::path::Path;

const BANNER: &str = r"
    ███╗   ██╗███████╗████████╗ ██████╗ ███████╗███╗   ██╗
    ████╗  ██║██╔════╝╚══██╔══╝██╔════╝ ██╔════╝████╗  ██║
    ██╔██╗ ██║█████╗     ██║   ██║  ███╗█████╗  ██╔██╗ ██║
    ██║╚██╗██║██╔══╝     ██║   ██║   ██║██╔══╝  ██║╚██╗██║
    ██║ ╚████║██║        ██║   ╚██████╔╝███████╗██║ ╚████║
    ╚═╝  ╚═══╝╚═╝        ╚═╝    ╚═════╝ ╚══════╝╚═╝  ╚═══╝
";

const COLUMN_WIDTH: usize = 15;

/// Print the startup banner
// Allow print for the user-facing banner
#[allow(clippy::print_stdout)]
pub fn print_banner() {
    println!("{BANNER}");
}

/// Frequency of one label across the source folder
#[derive(Clone, Debug, PartialEq)]
pub struct AttributeFrequency {
    /// The label
    pub label: String,
    /// Occurrences across all filenames
    pub count: usize,
    /// `count` divided by all non-background occurrences
    pub share: f64,
    /// Whether every generated image is guaranteed to carry this label
    pub starred: bool,
}

/// Label frequencies over every filename of a source folder
#[derive(Clone, Debug, PartialEq)]
pub struct AttributeReport {
    /// Label occurrences including `BACKGROUND`
    pub total_occurrences: usize,
    /// One row per distinct non-background label, sorted by label
    pub entries: Vec<AttributeFrequency>,
}

impl AttributeReport {
    /// Count labels over `names`
    ///
    /// A label is starred when it is required, or when nothing is required.
    pub fn from_file_names<I, S>(names: I, required: &RequiredLabels) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        let mut total_occurrences = 0;
        for name in names {
            for label in extract_labels(name.as_ref()) {
                total_occurrences += 1;
                *counts.entry(label).or_default() += 1;
            }
        }

        let background = counts.remove(BACKGROUND_LABEL).unwrap_or(0);
        let denominator = total_occurrences - background;

        let entries = counts
            .into_iter()
            .map(|(label, count)| AttributeFrequency {
                starred: required.is_empty() || required.contains(&label),
                share: if denominator == 0 {
                    0.0
                } else {
                    count as f64 / denominator as f64
                },
                label,
                count,
            })
            .collect();

        Self {
            total_occurrences,
            entries,
        }
    }

    /// Count labels over every filename in `folder`
    ///
    /// # Errors
    ///
    /// Returns an error if the folder or one of its entries cannot be read
    pub fn from_folder(folder: &Path, required: &RequiredLabels) -> Result<Self> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(folder).map_err(file_system(folder, "read directory"))? {
            let entry = entry.map_err(file_system(folder, "read directory entry"))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(Self::from_file_names(names, required))
    }

    /// Too few labels to be worth tabulating
    pub const fn is_degenerate(&self) -> bool {
        self.total_occurrences < 2
    }

    /// Render the report as printed on the console
    pub fn render(&self) -> String {
        if self.is_degenerate() {
            return "There are no attributes!".to_string();
        }

        let mut lines = vec![
            format!("There are {} different attributes: ", self.entries.len()),
            "(All images will have starred attributes)".to_string(),
            format!("{:^COLUMN_WIDTH$}{:^COLUMN_WIDTH$}", "NAME", "FREQUENCY"),
        ];
        for entry in &self.entries {
            let name = if entry.starred {
                format!("★ {}", entry.label)
            } else {
                entry.label.clone()
            };
            let share = format!("{:.2}%", entry.share * 100.0);
            lines.push(format!("{name:^COLUMN_WIDTH$}{share:^COLUMN_WIDTH$}"));
        }
        lines.join("\n")
    }

    /// Print the report to stdout
    // Allow print for the user-facing report
    #[allow(clippy::print_stdout)]
    pub fn print(&self) {
        println!("{}", self.render());
    }
}

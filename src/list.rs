//! `--list` output: the pattern registry as plain text

use gallery_core::PatternKind;

/// One line per pattern: selection key, label, category and scenario ids
pub fn registry_listing() -> String {
    let label_width = PatternKind::ALL
        .iter()
        .map(|kind| kind.label().len())
        .max()
        .unwrap_or_default();

    PatternKind::ALL
        .iter()
        .enumerate()
        .map(|(index, kind)| {
            let scenarios: Vec<&str> = kind.mount().scenarios().iter().map(|s| s.id).collect();
            format!(
                "{}  {:<width$}  {:<10}  {}\n",
                index + 1,
                kind.label(),
                kind.category().label(),
                scenarios.join(", "),
                width = label_width,
            )
        })
        .collect()
}

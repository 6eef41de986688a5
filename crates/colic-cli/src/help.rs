//! Human-readable field descriptions.

use colic_model::FeatureSchema;

/// Fields grouped by kind, with the accepted labels of every categorical
/// field.
pub fn render_features(schema: &FeatureSchema) -> String {
    let overview = schema.overview();

    let numeric = format!("Numeric features:\n{}", overview.numeric.join(", "));
    let binary = format!("yes/no features:\n{}", overview.binary.join(", "));

    let mut lines = vec!["Categorical features:".to_string()];
    for (name, values) in &overview.categorical {
        lines.push(format!("  {name}:"));
        lines.push(format!("  - {}", values.join(" | ")));
    }
    if let Some(lesion) = overview.lesion {
        lines.push(format!("  {lesion}:"));
        lines.push("  - lesion types (see `colic features --lesion`)".to_string());
    }

    [numeric, binary, lines.join("\n")].join("\n\n")
}

/// Accepted labels of the lesion field.
pub fn render_lesion_values(schema: &FeatureSchema) -> Option<String> {
    let field = schema.lesion_field()?;
    Some(format!(
        "{} possible values:\n{}",
        field.name,
        field.domain.values().join(", ")
    ))
}

/// Input format notes shown after the `encode` and `predict` help.
pub const INPUT_HELP: &str = concat!(
    "Records are `key: value` pairs separated by commas, for example:\n",
    "  surgery: yes, age: adult, rectal_temp: 38.1, pulse: 132.0, pain: severe_pain\n\n",
    "Run `colic features` to list the fields and their values."
);

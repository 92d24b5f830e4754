//! One-hot encoding of an application against a fixed feature-column schema.
//!
//! Column names follow the `"{field}_{value}"` convention of the schema the
//! classifier was trained with. Values the schema has never seen produce no
//! column and therefore encode as zeros.

use std::collections::HashSet;

/// The categorical inputs the classifier was trained on.
#[derive(Debug, Clone, Copy)]
pub struct ApplicationFeatures<'a> {
    pub company_name: &'a str,
    pub job_role: &'a str,
    pub website: &'a str,
    pub status: &'a str,
    pub notes: Option<&'a str>,
}

impl<'a> ApplicationFeatures<'a> {
    /// Missing notes encode as the empty string, matching the blank form
    /// value the training rows carry.
    fn fields(&self) -> [(&'static str, &'a str); 5] {
        [
            ("company_name", self.company_name),
            ("job_role", self.job_role),
            ("website", self.website),
            ("status", self.status),
            ("notes", self.notes.unwrap_or("")),
        ]
    }
}

/// Dummy columns this record switches on, one per field.
pub fn one_hot_columns(features: &ApplicationFeatures<'_>) -> Vec<String> {
    features
        .fields()
        .into_iter()
        .map(|(field, value)| format!("{field}_{value}"))
        .collect()
}

/// Re-indexes the record's dummy columns onto `schema`, filling gaps with 0.
/// Columns unknown to the schema are dropped.
pub fn encode_row(features: &ApplicationFeatures<'_>, schema: &[String]) -> Vec<f64> {
    let active: HashSet<String> = one_hot_columns(features).into_iter().collect();
    schema
        .iter()
        .map(|column| if active.contains(column) { 1.0 } else { 0.0 })
        .collect()
}

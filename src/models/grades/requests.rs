use crate::models::common::PaginationQuery;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GradeListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub aluno_id: Option<i64>,
    pub disciplina_id: Option<i64>,
    pub bimestre: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateGradeRequest {
    pub student_id: i64,
    pub offering_id: i64,
    pub term: String,
    pub value: f64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateGradeRequest {
    pub student_id: Option<i64>,
    pub offering_id: Option<i64>,
    pub term: Option<String>,
    pub value: Option<f64>,
}

/// One item of the bulk grade upsert. Field names follow the established
/// client contract for this endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct BulkGradeItem {
    /// Existing grade id; absent means create
    pub id: Option<i64>,
    pub aluno: Option<i64>,
    pub disciplina: Option<i64>,
    pub bimestre: Option<String>,
    /// Accepts numbers and strings; empty values mean "skip this item"
    pub valor: Option<serde_json::Value>,
}

impl BulkGradeItem {
    /// Numeric value, or None when the field is missing, null or an empty
    /// string.
    pub fn parsed_value(&self) -> Option<f64> {
        match &self.valor {
            None => None,
            Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::Number(n)) => n.as_f64(),
            Some(serde_json::Value::String(s)) => {
                if s.trim().is_empty() {
                    None
                } else {
                    s.trim().parse::<f64>().ok()
                }
            }
            Some(_) => None,
        }
    }
}

// Grade list query for the storage layer
#[derive(Debug, Clone)]
pub struct GradeListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub student_id: Option<i64>,
    pub offering_id: Option<i64>,
    pub term: Option<String>,
    /// Restrict to these student profile ids; None means no restriction
    pub visible_student_ids: Option<Vec<i64>>,
    /// Restrict to offerings taught by this teacher
    pub taught_by: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(valor: serde_json::Value) -> BulkGradeItem {
        BulkGradeItem {
            id: None,
            aluno: Some(1),
            disciplina: Some(2),
            bimestre: Some("1º Bimestre".into()),
            valor: Some(valor),
        }
    }

    #[test]
    fn parses_numbers_and_numeric_strings() {
        assert_eq!(item(serde_json::json!(8.5)).parsed_value(), Some(8.5));
        assert_eq!(item(serde_json::json!("7.25")).parsed_value(), Some(7.25));
    }

    #[test]
    fn empty_values_are_skipped() {
        assert_eq!(item(serde_json::json!("")).parsed_value(), None);
        assert_eq!(item(serde_json::json!("   ")).parsed_value(), None);
        assert_eq!(item(serde_json::Value::Null).parsed_value(), None);
        let mut missing = item(serde_json::json!(1.0));
        missing.valor = None;
        assert_eq!(missing.parsed_value(), None);
    }
}

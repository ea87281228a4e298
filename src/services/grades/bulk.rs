//! Batch grade upsert.
//!
//! The grade-entry screen posts a whole spreadsheet at once: a JSON list
//! mixing new rows and edits. The endpoint predates the response envelope,
//! so its contract is raw JSON with Portuguese messages: 200 with the
//! saved rows when everything succeeds, 207 with `sucesso`/`erros` on
//! partial failure, 400 when the payload is not a list.

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::warn;

use super::GradeService;
use crate::access::gate;
use crate::models::grades::{
    entities::Grade,
    requests::{BulkGradeItem, CreateGradeRequest, UpdateGradeRequest},
    responses::BulkGradeOutcome,
};
use crate::services::{forbidden, load_caller};

fn item_label(item: &BulkGradeItem) -> String {
    match item.id {
        Some(id) => id.to_string(),
        None => "novo".to_string(),
    }
}

/// Which offering the ownership filter must confirm for one item.
/// `Ok(None)` means no check is needed; the error carries the per-item
/// message. An item without an offering can never pass the filter.
fn ownership_precheck(is_admin: bool, item: &BulkGradeItem) -> Result<Option<i64>, String> {
    if is_admin {
        return Ok(None);
    }
    match item.disciplina {
        Some(offering_id) => Ok(Some(offering_id)),
        None => Err(format!(
            "ID {}: Você não tem permissão para esta disciplina.",
            item_label(item)
        )),
    }
}

pub async fn bulk_update_grades(
    service: &GradeService,
    payload: serde_json::Value,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match load_caller(&storage, request).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    if !gate::can_write_grades(&ctx) {
        return Ok(forbidden());
    }

    let serde_json::Value::Array(raw_items) = payload else {
        return Ok(HttpResponse::BadRequest()
            .json(serde_json::json!({"erro": "O payload deve ser uma lista."})));
    };

    let is_admin = ctx.is_coordination();
    let mut sucesso: Vec<Grade> = Vec::new();
    let mut erros: Vec<String> = Vec::new();

    for raw in raw_items {
        let item: BulkGradeItem = match serde_json::from_value(raw) {
            Ok(item) => item,
            Err(e) => {
                erros.push(format!("ID novo: {e}"));
                continue;
            }
        };
        let label = item_label(&item);

        // Teachers may only touch rows of their own offerings
        let offering_to_confirm = match ownership_precheck(is_admin, &item) {
            Ok(target) => target,
            Err(msg) => {
                erros.push(msg);
                continue;
            }
        };
        if let Some(offering_id) = offering_to_confirm {
            match storage.offering_taught_by(offering_id, ctx.account.id).await {
                Ok(true) => {}
                Ok(false) => {
                    erros.push(format!(
                        "ID {label}: Você não tem permissão para esta disciplina."
                    ));
                    continue;
                }
                Err(e) => {
                    erros.push(format!("ID {label}: {e}"));
                    continue;
                }
            }
        }

        // Blank cells are left untouched
        let Some(value) = item.parsed_value() else {
            continue;
        };

        match item.id {
            Some(grade_id) => {
                let existing = if is_admin {
                    storage.get_grade_by_id(grade_id).await
                } else {
                    storage
                        .get_grade_by_id_taught_by(grade_id, ctx.account.id)
                        .await
                };

                match existing {
                    Ok(Some(_)) => {
                        let update = UpdateGradeRequest {
                            student_id: item.aluno,
                            offering_id: item.disciplina,
                            term: item.bimestre.clone(),
                            value: Some(value),
                        };
                        match storage.update_grade(grade_id, update).await {
                            Ok(Some(grade)) => sucesso.push(grade),
                            Ok(None) => {
                                erros.push(format!(
                                    "Nota ID {grade_id} não encontrada ou não pertence a você."
                                ));
                            }
                            Err(e) => erros.push(format!("ID {label}: {e}")),
                        }
                    }
                    Ok(None) => {
                        erros.push(format!(
                            "Nota ID {grade_id} não encontrada ou não pertence a você."
                        ));
                    }
                    Err(e) => erros.push(format!("ID {label}: {e}")),
                }
            }
            None => {
                let (Some(student_id), Some(offering_id), Some(term)) =
                    (item.aluno, item.disciplina, item.bimestre.clone())
                else {
                    erros.push(format!(
                        "ID {label}: aluno, disciplina e bimestre são obrigatórios."
                    ));
                    continue;
                };

                let create = CreateGradeRequest {
                    student_id,
                    offering_id,
                    term,
                    value,
                };
                match storage.create_grade(create).await {
                    Ok(grade) => sucesso.push(grade),
                    Err(e) => {
                        let msg = e.to_string();
                        if msg.contains("UNIQUE constraint failed") {
                            erros.push(format!(
                                "Erro na Disc. {offering_id}: Esta nota já foi lançada para este bimestre."
                            ));
                        } else {
                            erros.push(format!("ID {label}: {msg}"));
                        }
                    }
                }
            }
        }
    }

    if erros.is_empty() {
        Ok(HttpResponse::Ok().json(sucesso))
    } else {
        warn!(
            "Bulk grade upsert finished with {} errors, {} saved",
            erros.len(),
            sucesso.len()
        );
        Ok(HttpResponse::MultiStatus().json(BulkGradeOutcome { sucesso, erros }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: Option<i64>, disciplina: Option<i64>) -> BulkGradeItem {
        BulkGradeItem {
            id,
            aluno: Some(42),
            disciplina,
            bimestre: Some("1º Bimestre".to_string()),
            valor: Some(serde_json::json!(8.5)),
        }
    }

    #[test]
    fn admins_skip_the_ownership_filter() {
        assert_eq!(ownership_precheck(true, &item(None, None)), Ok(None));
        assert_eq!(ownership_precheck(true, &item(Some(3), Some(7))), Ok(None));
    }

    #[test]
    fn teachers_confirm_the_named_offering() {
        assert_eq!(ownership_precheck(false, &item(None, Some(7))), Ok(Some(7)));
    }

    #[test]
    fn items_without_an_offering_are_denied_for_teachers() {
        assert_eq!(
            ownership_precheck(false, &item(None, None)),
            Err("ID novo: Você não tem permissão para esta disciplina.".to_string())
        );
        assert_eq!(
            ownership_precheck(false, &item(Some(12), None)),
            Err("ID 12: Você não tem permissão para esta disciplina.".to_string())
        );
    }
}

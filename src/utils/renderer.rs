//! Report-card rendering behind a narrow trait.
//!
//! The HTML renderer produces a self-contained document; converting it to
//! PDF is the caller's concern (a separate conversion service in
//! production).

use crate::errors::Result;
use crate::models::reports::responses::PerformanceReport;

pub trait ReportCardRenderer: Send + Sync {
    /// Renders the report card document. Returns the bytes and their MIME
    /// type.
    fn render(&self, report: &PerformanceReport) -> Result<(Vec<u8>, &'static str)>;
}

pub struct HtmlReportCardRenderer;

impl ReportCardRenderer for HtmlReportCardRenderer {
    fn render(&self, report: &PerformanceReport) -> Result<(Vec<u8>, &'static str)> {
        let mut rows = String::new();
        for avg in &report.subject_averages {
            rows.push_str(&format!(
                "<tr><td>{}</td><td>{:.2}</td></tr>\n",
                html_escape(&avg.subject),
                avg.average
            ));
        }

        let html = format!(
            "<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>Boletim - {name}</title>\n</head>\n<body>\n\
             <h1>Boletim Escolar</h1>\n\
             <p><strong>Aluno:</strong> {name}</p>\n\
             <p><strong>Matrícula:</strong> {registration}</p>\n\
             <p><strong>Turma:</strong> {class_group}</p>\n\
             <table border=\"1\">\n\
             <thead><tr><th>Disciplina</th><th>Média</th></tr></thead>\n\
             <tbody>\n{rows}</tbody>\n</table>\n\
             <p><strong>Total de faltas:</strong> {absences}</p>\n\
             </body>\n</html>\n",
            name = html_escape(&report.name),
            registration = html_escape(&report.registration),
            class_group = html_escape(report.class_group_name.as_deref().unwrap_or("Sem turma")),
            rows = rows,
            absences = report.total_absences,
        );

        Ok((html.into_bytes(), "text/html; charset=utf-8"))
    }
}

fn html_escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::reports::responses::SubjectAverage;

    fn sample_report() -> PerformanceReport {
        PerformanceReport {
            student_id: 1,
            name: "Maria <Silva>".into(),
            registration: "12345678901".into(),
            class_group_id: Some(3),
            class_group_name: Some("3A".into()),
            guardian_name: None,
            guardian_email: None,
            status: "active".into(),
            subject_averages: vec![SubjectAverage {
                subject: "Matemática".into(),
                average: 7.5,
            }],
            total_absences: 4,
            justified_absences: 1,
        }
    }

    #[test]
    fn renders_escaped_html() {
        let (bytes, mime) = HtmlReportCardRenderer.render(&sample_report()).unwrap();
        let html = String::from_utf8(bytes).unwrap();
        assert_eq!(mime, "text/html; charset=utf-8");
        assert!(html.contains("Maria &lt;Silva&gt;"));
        assert!(html.contains("Matemática"));
        assert!(html.contains("7.50"));
    }
}

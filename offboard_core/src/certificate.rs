//! # Experience Certificate
//!
//! The one feature that produces a real file. Certificate markup is built from
//! an embedded HTML template with the structured fields injected (escaped)
//! by string formatting; delivering the bytes is a separate capability so the
//! markup can be tested without touching the filesystem.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use offboard_core::certificate::{issue_certificate, CertificateData, MemorySink};
//! use offboard_core::employee::EMPLOYEES;
//!
//! let issued = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
//! let data = CertificateData::for_employee(&EMPLOYEES[1], issued, "Olivia Martinez");
//! let mut sink = MemorySink::default();
//! issue_certificate(&mut sink, &data).unwrap();
//! assert!(sink.downloads[0].0.ends_with(".html"));
//! ```

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::employee::Employee;
use crate::errors::{OffboardError, OffboardResult};

const DATE_FORMAT: &str = "%B %-d, %Y";

const CERTIFICATE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Experience Certificate - {{NAME}}</title>
<style>
  body { font-family: Georgia, serif; margin: 48px; color: #1f2937; }
  .frame { border: 6px double #1e3a8a; padding: 48px; }
  h1 { text-align: center; color: #1e3a8a; letter-spacing: 2px; }
  .meta { text-align: right; font-size: 14px; }
  .signature { margin-top: 64px; }
</style>
</head>
<body>
<div class="frame">
  <p class="meta">Certificate No: {{CERT_NO}}<br>Date: {{ISSUED}}</p>
  <h1>EXPERIENCE CERTIFICATE</h1>
  <p>To whom it may concern,</p>
  <p>This is to certify that <strong>{{NAME}}</strong> (Employee ID: {{ID}}) was employed
  with {{COMPANY}} as <strong>{{ROLE}}</strong> in the {{DEPARTMENT}} department
  from {{JOINED}} to {{LAST_DAY}}.</p>
  <p>During this tenure we found {{NAME}} to be sincere, hardworking and dedicated.
  We wish them every success in their future endeavours.</p>
  <div class="signature">
    <p>{{ISSUED_BY}}<br>Human Resources<br>{{COMPANY}}</p>
  </div>
</div>
</body>
</html>
"#;

/// Structured fields printed on the certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateData {
    pub certificate_no: String,
    pub employee_id: String,
    pub employee_name: String,
    pub role: String,
    pub department: String,
    pub joining_date: NaiveDate,
    pub last_working_day: NaiveDate,
    pub issue_date: NaiveDate,
    pub issued_by: String,
    pub company: String,
}

impl CertificateData {
    /// Fill the certificate from an employee record. Without a scheduled last
    /// working day the issue date is used.
    pub fn for_employee(employee: &Employee, issue_date: NaiveDate, issued_by: impl Into<String>) -> Self {
        CertificateData {
            certificate_no: format!("EXP-{}-{}", issue_date.format("%Y%m%d"), employee.id),
            employee_id: employee.id.clone(),
            employee_name: employee.full_name(),
            role: employee.role.clone(),
            department: employee.department.clone(),
            joining_date: employee.joining_date,
            last_working_day: employee.last_working_day.unwrap_or(issue_date),
            issue_date,
            issued_by: issued_by.into(),
            company: "Company Inc.".to_string(),
        }
    }

    /// Suggested download name, e.g. `Experience_Certificate_EMP002.html`
    pub fn file_name(&self) -> String {
        format!("Experience_Certificate_{}.html", self.employee_id)
    }

    fn validate(&self) -> OffboardResult<()> {
        if self.last_working_day < self.joining_date {
            return Err(OffboardError::invalid_input(
                "last_working_day",
                self.last_working_day.to_string(),
                "Last working day precedes the joining date",
            ));
        }
        Ok(())
    }
}

/// Build the certificate markup.
pub fn render_certificate_html(data: &CertificateData) -> String {
    let date = |d: NaiveDate| d.format(DATE_FORMAT).to_string();
    fill_template(CERTIFICATE_TEMPLATE, |key| match key {
        "CERT_NO" => Some(escape_html(&data.certificate_no)),
        "ISSUED" => Some(date(data.issue_date)),
        "NAME" => Some(escape_html(&data.employee_name)),
        "ID" => Some(escape_html(&data.employee_id)),
        "COMPANY" => Some(escape_html(&data.company)),
        "ROLE" => Some(escape_html(&data.role)),
        "DEPARTMENT" => Some(escape_html(&data.department)),
        "JOINED" => Some(date(data.joining_date)),
        "LAST_DAY" => Some(date(data.last_working_day)),
        "ISSUED_BY" => Some(escape_html(&data.issued_by)),
        _ => None,
    })
}

/// Replace each `{{KEY}}` in one left-to-right pass.
///
/// Substituted values are never rescanned. Unknown keys are kept verbatim.
fn fill_template(template: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(template.len() + 512);
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let key = &after[..end];
                match lookup(key) {
                    Some(value) => out.push_str(&value),
                    None => {
                        out.push_str("{{");
                        out.push_str(key);
                        out.push_str("}}");
                    }
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Escape text for inclusion in HTML.
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Document generation and delivery capability.
///
/// `generate_document` defaults to the HTML certificate; implementors decide
/// where the bytes go.
pub trait DocumentSink {
    fn generate_document(&self, data: &CertificateData) -> String {
        render_certificate_html(data)
    }

    /// Deliver the bytes under `filename`; returns where they ended up.
    fn trigger_download(&mut self, filename: &str, bytes: &[u8]) -> OffboardResult<PathBuf>;
}

/// Writes downloads into a directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirectorySink { dir: dir.into() }
    }
}

impl DocumentSink for DirectorySink {
    fn trigger_download(&mut self, filename: &str, bytes: &[u8]) -> OffboardResult<PathBuf> {
        if filename.is_empty() || filename.contains(['/', '\\']) {
            return Err(OffboardError::invalid_input("filename", filename, "Not a plain file name"));
        }
        fs::create_dir_all(&self.dir)
            .map_err(|e| OffboardError::file_error("create dir", self.dir.display().to_string(), e.to_string()))?;
        let path = self.dir.join(filename);
        fs::write(&path, bytes)
            .map_err(|e| OffboardError::file_error("write", path.display().to_string(), e.to_string()))?;
        Ok(path)
    }
}

/// Keeps downloads in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub downloads: Vec<(String, Vec<u8>)>,
}

impl DocumentSink for MemorySink {
    fn trigger_download(&mut self, filename: &str, bytes: &[u8]) -> OffboardResult<PathBuf> {
        self.downloads.push((filename.to_string(), bytes.to_vec()));
        Ok(PathBuf::from(filename))
    }
}

/// Generate the certificate and hand it to the sink.
pub fn issue_certificate(sink: &mut dyn DocumentSink, data: &CertificateData) -> OffboardResult<PathBuf> {
    data.validate()?;
    let markup = sink.generate_document(data);
    let path = sink.trigger_download(&data.file_name(), markup.as_bytes())?;
    tracing::info!(employee = %data.employee_id, path = %path.display(), "certificate issued");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::EMPLOYEES;

    fn issued() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_markup_contains_fields() {
        let data = CertificateData::for_employee(&EMPLOYEES[1], issued(), "Olivia Martinez");
        let html = render_certificate_html(&data);
        assert!(html.contains("James Rodriguez"));
        assert!(html.contains("Product Manager"));
        assert!(html.contains("July 1, 2020"));
        assert!(html.contains("November 28, 2026"));
        assert!(html.contains("EXP-20261016-EMP002"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_markup_escapes_input() {
        let mut data = CertificateData::for_employee(&EMPLOYEES[0], issued(), "HR");
        data.role = "R&D <Lead>".to_string();
        let html = render_certificate_html(&data);
        assert!(html.contains("R&amp;D &lt;Lead&gt;"));
    }

    #[test]
    fn test_placeholders_inside_fields_stay_literal() {
        let mut data = CertificateData::for_employee(&EMPLOYEES[0], issued(), "{{COMPANY}}");
        data.employee_name = "Eve {{ROLE}}".to_string();
        let html = render_certificate_html(&data);
        assert!(html.contains("<strong>Eve {{ROLE}}</strong>"));
        assert!(!html.contains("Eve Senior Software Engineer"));
        assert!(html.contains("<p>{{COMPANY}}<br>Human Resources"));
    }

    #[test]
    fn test_fill_template_single_pass() {
        let filled = fill_template("a {{X}} b {{Y}} c {{Z", |k| match k {
            "X" => Some("{{Y}}".to_string()),
            "Y" => Some("y".to_string()),
            _ => None,
        });
        assert_eq!(filled, "a {{Y}} b y c {{Z");
        assert_eq!(fill_template("{{NOPE}}", |_| None), "{{NOPE}}");
    }

    #[test]
    fn test_memory_sink_receives_markup() {
        let data = CertificateData::for_employee(&EMPLOYEES[3], issued(), "HR");
        let mut sink = MemorySink::default();
        let path = issue_certificate(&mut sink, &data).unwrap();
        assert_eq!(path, PathBuf::from("Experience_Certificate_EMP004.html"));
        let (_, bytes) = &sink.downloads[0];
        assert!(String::from_utf8_lossy(bytes).contains("Michael Brown"));
    }

    #[test]
    fn test_directory_sink_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::new(dir.path().join("certs"));
        let data = CertificateData::for_employee(&EMPLOYEES[0], issued(), "HR");
        let path = issue_certificate(&mut sink, &data).unwrap();
        let written = fs::read_to_string(path).unwrap();
        assert!(written.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_rejects_inverted_dates() {
        let mut data = CertificateData::for_employee(&EMPLOYEES[0], issued(), "HR");
        data.last_working_day = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let mut sink = MemorySink::default();
        assert!(issue_certificate(&mut sink, &data).is_err());
        assert!(sink.downloads.is_empty());
    }

    #[test]
    fn test_directory_sink_rejects_paths() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::new(dir.path());
        assert!(sink.trigger_download("../escape.html", b"x").is_err());
    }
}

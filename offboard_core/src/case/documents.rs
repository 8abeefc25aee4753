//! Case documents: search, category filter, batch export selection,
//! metadata-only upload, and two-phase delete.

use std::collections::BTreeSet;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{OffboardError, OffboardResult};
use crate::ids::IdGenerator;

/// Category filter value meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "All Categories";

/// Categories offered by the filter and the upload form.
pub const CATEGORIES: [&str; 5] = ["HR", "Legal", "Finance", "IT", "Other"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseDocument {
    pub id: String,
    pub name: String,
    /// Upper-cased file extension, e.g. "PDF"
    #[serde(rename = "type")]
    pub doc_type: String,
    /// Human-readable size, e.g. "245.3 KB"
    pub size: String,
    pub date: NaiveDate,
    pub uploader: String,
    pub category: String,
}

/// Metadata of a locally picked file. Contents are never read or kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    pub name: String,
    pub size_bytes: u64,
}

impl LocalFile {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        LocalFile {
            name: name.into(),
            size_bytes,
        }
    }

    /// Read name and size from the filesystem.
    pub fn from_path(path: &Path) -> OffboardResult<Self> {
        let meta = std::fs::metadata(path)
            .map_err(|e| OffboardError::file_error("stat", path.display().to_string(), e.to_string()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| OffboardError::invalid_input("path", path.display().to_string(), "Not a file"))?;
        Ok(LocalFile::new(name, meta.len()))
    }
}

/// Document type label from a file name's extension.
///
/// # Example
/// ```
/// use offboard_core::case::documents::infer_type;
/// assert_eq!(infer_type("contract.final.pdf"), "PDF");
/// assert_eq!(infer_type("README"), "FILE");
/// ```
pub fn infer_type(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => ext.to_uppercase(),
        _ => "FILE".to_string(),
    }
}

/// Human-readable size string.
///
/// # Example
/// ```
/// use offboard_core::case::documents::format_size;
/// assert_eq!(format_size(512), "512 B");
/// assert_eq!(format_size(2048), "2.0 KB");
/// assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let b = bytes as f64;
    if b < KB {
        format!("{bytes} B")
    } else if b < MB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{:.1} MB", b / MB)
    }
}

/// Result of a simulated batch export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSummary {
    pub document_ids: Vec<String>,
    pub document_names: Vec<String>,
}

impl ExportSummary {
    pub fn count(&self) -> usize {
        self.document_ids.len()
    }
}

/// Documents tab state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentLibrary {
    documents: Vec<CaseDocument>,
    search: String,
    category: Option<String>,
    export_mode: bool,
    selection: BTreeSet<String>,
    pending_delete: Option<String>,
    uploader: String,
    ids: IdGenerator,
}

impl DocumentLibrary {
    pub fn new(documents: Vec<CaseDocument>, uploader: impl Into<String>) -> Self {
        let ids = IdGenerator::after("DOC", documents.iter().map(|d| d.id.as_str()));
        DocumentLibrary {
            documents,
            search: String::new(),
            category: None,
            export_mode: false,
            selection: BTreeSet::new(),
            pending_delete: None,
            uploader: uploader.into(),
            ids,
        }
    }

    pub fn all(&self) -> &[CaseDocument] {
        &self.documents
    }

    pub fn get(&self, id: &str) -> Option<&CaseDocument> {
        self.documents.iter().find(|d| d.id == id)
    }

    // ----- filtering -----

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Set the category filter. [`ALL_CATEGORIES`] or an empty string clears it.
    pub fn set_category(&mut self, category: &str) {
        let category = category.trim();
        self.category = if category.is_empty() || category.eq_ignore_ascii_case(ALL_CATEGORIES) {
            None
        } else {
            Some(category.to_string())
        };
    }

    /// Documents matching both the name search and the category filter.
    pub fn filtered(&self) -> Vec<&CaseDocument> {
        let needle = self.search.to_lowercase();
        self.documents
            .iter()
            .filter(|d| needle.is_empty() || d.name.to_lowercase().contains(&needle))
            .filter(|d| {
                self.category
                    .as_deref()
                    .map_or(true, |c| d.category.eq_ignore_ascii_case(c))
            })
            .collect()
    }

    // ----- export mode -----

    pub fn is_export_mode(&self) -> bool {
        self.export_mode
    }

    pub fn enter_export_mode(&mut self) {
        self.export_mode = true;
        self.selection.clear();
    }

    /// Leave export mode without exporting; the selection is dropped.
    pub fn exit_export_mode(&mut self) {
        self.export_mode = false;
        self.selection.clear();
    }

    pub fn selection(&self) -> &BTreeSet<String> {
        &self.selection
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    /// Flip one row's checkbox; returns whether it is now selected.
    pub fn toggle_selection(&mut self, id: &str) -> OffboardResult<bool> {
        self.require_export_mode("select documents")?;
        if self.get(id).is_none() {
            return Err(OffboardError::not_found("documents", id));
        }
        if self.selection.remove(id) {
            Ok(false)
        } else {
            self.selection.insert(id.to_string());
            Ok(true)
        }
    }

    /// Select exactly the currently filtered documents.
    pub fn select_all(&mut self) -> OffboardResult<usize> {
        self.require_export_mode("select all")?;
        let ids: BTreeSet<String> = self.filtered().into_iter().map(|d| d.id.clone()).collect();
        self.selection = ids;
        Ok(self.selection.len())
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Simulate the export of the selected documents and leave export mode.
    pub fn confirm_export(&mut self) -> OffboardResult<ExportSummary> {
        self.require_export_mode("export")?;
        if self.selection.is_empty() {
            return Err(OffboardError::invalid_input(
                "selection",
                "0",
                "Select at least one document to export",
            ));
        }
        // Rows hidden by the current search or category are not exported.
        let (document_ids, document_names): (Vec<String>, Vec<String>) = self
            .filtered()
            .into_iter()
            .filter(|d| self.selection.contains(&d.id))
            .map(|d| (d.id.clone(), d.name.clone()))
            .unzip();
        if document_ids.is_empty() {
            return Err(OffboardError::invalid_input(
                "selection",
                "0",
                "None of the selected documents match the current filters",
            ));
        }
        let summary = ExportSummary {
            document_ids,
            document_names,
        };
        tracing::info!(count = summary.count(), "documents exported");
        self.exit_export_mode();
        Ok(summary)
    }

    // ----- upload / delete -----

    /// Append metadata-only entries for picked files.
    pub fn upload(&mut self, files: &[LocalFile], category: &str, today: NaiveDate) -> OffboardResult<Vec<String>> {
        let category = category.trim();
        if category.is_empty() || category.eq_ignore_ascii_case(ALL_CATEGORIES) {
            return Err(OffboardError::missing_field("category"));
        }
        if let Some(bad) = files.iter().find(|f| f.name.trim().is_empty()) {
            return Err(OffboardError::invalid_input("name", bad.name.clone(), "File name is empty"));
        }

        let mut added = Vec::with_capacity(files.len());
        for file in files {
            let doc = CaseDocument {
                id: self.ids.next_id(),
                name: file.name.clone(),
                doc_type: infer_type(&file.name),
                size: format_size(file.size_bytes),
                date: today,
                uploader: self.uploader.clone(),
                category: category.to_string(),
            };
            tracing::info!(document = %doc.id, name = %doc.name, size = %doc.size, "document uploaded");
            added.push(doc.id.clone());
            self.documents.push(doc);
        }
        Ok(added)
    }

    /// First phase of delete: remember which document the user wants gone.
    pub fn request_delete(&mut self, id: &str) -> OffboardResult<&CaseDocument> {
        let doc = self
            .documents
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| OffboardError::not_found("documents", id))?;
        self.pending_delete = Some(doc.id.clone());
        Ok(doc)
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    /// Second phase: remove the requested document.
    pub fn confirm_delete(&mut self) -> OffboardResult<CaseDocument> {
        let id = self
            .pending_delete
            .take()
            .ok_or_else(|| OffboardError::invalid_transition("documents", "confirm delete without a request"))?;
        let index = self
            .documents
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| OffboardError::not_found("documents", id.clone()))?;
        self.selection.remove(&id);
        tracing::info!(document = %id, "document deleted");
        Ok(self.documents.remove(index))
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    fn require_export_mode(&self, action: &str) -> OffboardResult<()> {
        if !self.export_mode {
            return Err(OffboardError::invalid_transition("browse mode", action));
        }
        Ok(())
    }
}

pub(crate) fn seed_documents(day: NaiveDate) -> Vec<CaseDocument> {
    let doc = |id: &str, name: &str, size: &str, days_ago: i64, uploader: &str, category: &str| CaseDocument {
        id: id.to_string(),
        name: name.to_string(),
        doc_type: infer_type(name),
        size: size.to_string(),
        date: day - chrono::Duration::days(days_ago),
        uploader: uploader.to_string(),
        category: category.to_string(),
    };
    vec![
        doc("DOC-1", "Resignation Letter.pdf", "245.3 KB", 30, "Olivia Martinez", "HR"),
        doc("DOC-2", "Non-Disclosure Agreement.pdf", "1.2 MB", 28, "Legal Team", "Legal"),
        doc("DOC-3", "Asset Return Form.pdf", "88.0 KB", 10, "IT Helpdesk", "IT"),
        doc("DOC-4", "Final Settlement Statement.xlsx", "56.7 KB", 5, "Payroll Team", "Finance"),
        doc("DOC-5", "Knowledge Transfer Plan.docx", "132.9 KB", 7, "David Chen", "Other"),
        doc("DOC-6", "Exit Interview Notes.docx", "40.2 KB", 2, "Olivia Martinez", "HR"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn library() -> DocumentLibrary {
        DocumentLibrary::new(seed_documents(today()), "You")
    }

    fn names(docs: Vec<&CaseDocument>) -> Vec<&str> {
        docs.into_iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn test_default_filter_returns_everything() {
        let mut lib = library();
        lib.set_search("");
        lib.set_category(ALL_CATEGORIES);
        assert_eq!(lib.filtered().len(), lib.all().len());
    }

    #[test]
    fn test_search_asset_finds_one() {
        let mut lib = library();
        lib.set_search("asset");
        assert_eq!(names(lib.filtered()), vec!["Asset Return Form.pdf"]);
    }

    #[test]
    fn test_search_and_category_compose() {
        let mut lib = library();
        lib.set_search(".pdf");
        lib.set_category("hr");
        assert_eq!(names(lib.filtered()), vec!["Resignation Letter.pdf"]);
        lib.set_category("Finance");
        assert!(lib.filtered().is_empty());
    }

    #[test]
    fn test_search_keeps_whitespace() {
        let mut lib = library();
        lib.set_search("asset ");
        assert_eq!(names(lib.filtered()), vec!["Asset Return Form.pdf"]);
        lib.set_search(" asset");
        assert!(lib.filtered().is_empty());
        lib.set_search(" ");
        assert_eq!(lib.filtered().len(), 6);
        lib.set_search("pdf ");
        assert!(lib.filtered().is_empty());
    }

    #[test]
    fn test_export_skips_rows_hidden_by_filters() {
        let mut lib = library();
        lib.enter_export_mode();
        lib.toggle_selection("DOC-1").unwrap();
        lib.toggle_selection("DOC-4").unwrap();
        lib.set_category("Finance");

        let summary = lib.confirm_export().unwrap();
        assert_eq!(summary.document_ids, vec!["DOC-4"]);

        lib.set_category(ALL_CATEGORIES);
        lib.enter_export_mode();
        lib.toggle_selection("DOC-1").unwrap();
        lib.set_search("settlement");
        assert!(lib.confirm_export().is_err());
        assert!(lib.is_export_mode());
        assert!(lib.is_selected("DOC-1"));
    }

    #[test]
    fn test_selection_requires_export_mode() {
        let mut lib = library();
        assert!(lib.toggle_selection("DOC-1").is_err());
        assert!(lib.select_all().is_err());
        assert!(lib.confirm_export().is_err());
    }

    #[test]
    fn test_select_all_uses_filtered_set() {
        let mut lib = library();
        lib.enter_export_mode();
        lib.set_category("HR");
        assert_eq!(lib.select_all().unwrap(), 2);
        assert!(lib.is_selected("DOC-1"));
        assert!(lib.is_selected("DOC-6"));
        assert!(!lib.is_selected("DOC-3"));
        lib.clear_selection();
        assert!(lib.selection().is_empty());
    }

    #[test]
    fn test_confirm_export_exits_mode() {
        let mut lib = library();
        lib.enter_export_mode();
        assert!(lib.confirm_export().is_err());
        assert!(lib.toggle_selection("DOC-4").unwrap());
        assert!(lib.toggle_selection("DOC-2").unwrap());
        assert!(!lib.toggle_selection("DOC-4").unwrap());
        lib.toggle_selection("DOC-4").unwrap();

        let summary = lib.confirm_export().unwrap();
        assert_eq!(summary.document_ids, vec!["DOC-2", "DOC-4"]);
        assert_eq!(summary.count(), 2);
        assert!(!lib.is_export_mode());
        assert!(lib.selection().is_empty());
    }

    #[test]
    fn test_upload_records_metadata_only() {
        let mut lib = library();
        let files = [
            LocalFile::new("badge-photo.PNG", 3_500_000),
            LocalFile::new("handover", 900),
        ];
        let ids = lib.upload(&files, "IT", today()).unwrap();
        assert_eq!(ids, vec!["DOC-7", "DOC-8"]);

        let photo = lib.get("DOC-7").unwrap();
        assert_eq!(photo.doc_type, "PNG");
        assert_eq!(photo.size, "3.3 MB");
        assert_eq!(photo.date, today());
        assert_eq!(photo.uploader, "You");
        assert_eq!(lib.get("DOC-8").unwrap().doc_type, "FILE");
        assert_eq!(lib.get("DOC-8").unwrap().size, "900 B");
    }

    #[test]
    fn test_upload_requires_category() {
        let mut lib = library();
        let files = [LocalFile::new("a.pdf", 1)];
        assert!(lib.upload(&files, ALL_CATEGORIES, today()).is_err());
        assert_eq!(lib.all().len(), 6);
    }

    #[test]
    fn test_upload_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, vec![b'x'; 2048]).unwrap();
        let file = LocalFile::from_path(&path).unwrap();
        assert_eq!(file, LocalFile::new("notes.txt", 2048));
    }

    #[test]
    fn test_delete_is_two_phase() {
        let mut lib = library();
        assert!(lib.confirm_delete().is_err());

        lib.request_delete("DOC-5").unwrap();
        assert_eq!(lib.pending_delete(), Some("DOC-5"));
        lib.cancel_delete();
        assert_eq!(lib.all().len(), 6);

        lib.request_delete("DOC-5").unwrap();
        let removed = lib.confirm_delete().unwrap();
        assert_eq!(removed.name, "Knowledge Transfer Plan.docx");
        assert_eq!(lib.all().len(), 5);
        assert!(lib.pending_delete().is_none());
        assert!(lib.request_delete("DOC-5").is_err());
    }

    #[test]
    fn test_document_type_serializes_as_type() {
        let json = serde_json::to_value(&library().all()[0]).unwrap();
        assert_eq!(json["type"], "PDF");
    }
}

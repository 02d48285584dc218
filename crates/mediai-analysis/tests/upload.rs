use mediai_analysis::error::AnalysisError;
use mediai_analysis::report::{RiskLevel, Severity, analyze};
use mediai_analysis::upload::{FileKind, UploadQueue};

#[test]
fn reports_accept_documents_only() {
    assert!(FileKind::Report.accepts("labs.pdf"));
    assert!(FileKind::Report.accepts("Notes.DOCX"));
    assert!(!FileKind::Report.accepts("chest.png"));
    assert!(!FileKind::Report.accepts(".pdf"));
}

#[test]
fn imaging_kinds_accept_images_only() {
    for kind in [FileKind::Xray, FileKind::Mri, FileKind::Scan] {
        assert!(kind.accepts("image.jpeg"), "{kind}");
        assert!(kind.accepts("study.dicom"), "{kind}");
        assert!(!kind.accepts("report.txt"), "{kind}");
    }
}

#[test]
fn add_records_metadata_and_preview_flag() {
    let mut queue = UploadQueue::new();
    let image = queue
        .add("chest.png", FileKind::Xray, Some("image/png"))
        .unwrap()
        .clone();
    let doc = queue
        .add("labs.pdf", FileKind::Report, Some("application/pdf"))
        .unwrap()
        .clone();

    assert!(image.previewable);
    assert!(!doc.previewable);
    assert_eq!(doc.kind, FileKind::Report);
    assert_eq!(queue.files(), [image, doc]);
}

#[test]
fn unsupported_extension_is_rejected_and_not_queued() {
    let mut queue = UploadQueue::new();
    let err = queue.add("scan.exe", FileKind::Mri, None).unwrap_err();
    assert!(matches!(err, AnalysisError::UnsupportedFile { kind: FileKind::Mri, .. }));
    assert!(err.to_string().contains(".dicom"));
    assert!(queue.is_empty());
}

#[test]
fn remove_drops_only_the_matching_file() {
    let mut queue = UploadQueue::new();
    let first = queue.add("a.pdf", FileKind::Report, None).unwrap().id;
    let second = queue.add("b.pdf", FileKind::Report, None).unwrap().id;

    assert!(queue.remove(first));
    assert!(!queue.remove(first));
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.files()[0].id, second);

    queue.clear();
    assert!(queue.is_empty());
}

#[test]
fn analyze_requires_files() {
    let queue = UploadQueue::new();
    assert!(matches!(analyze(&queue), Err(AnalysisError::NoFiles)));
}

#[test]
fn analyze_returns_sample_report_for_queued_files() {
    let mut queue = UploadQueue::new();
    let id = queue.add("labs.txt", FileKind::Report, None).unwrap().id;

    let report = analyze(&queue).unwrap();
    assert_eq!(report.condition, "Type 2 Diabetes");
    assert_eq!(report.confidence, 92);
    assert_eq!(report.severity, Severity::Moderate);
    assert_eq!(report.risk_level.label(), RiskLevel::Medium.label());
    assert_eq!(report.recommendations.len(), 3);
    assert_eq!(report.source_files, vec![id]);
}

use concert_renamer::progress::Progress;
use concert_renamer::{
    scan_directory, CompletionError, CompletionRequest, CompletionService, DirectoryRenamer,
    FileOutcome, FilenameRequester, NoProposalPolicy, RenameOptions, RequesterConfig,
    ResponseSanitizer,
};
use std::cell::RefCell;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// Replies with a fixed answer per original filename and records every prompt
struct CannedService {
    replies: Vec<(&'static str, &'static str)>,
    prompts: RefCell<Vec<String>>,
}

impl CannedService {
    fn new(replies: &[(&'static str, &'static str)]) -> Self {
        Self {
            replies: replies.to_vec(),
            prompts: RefCell::new(Vec::new()),
        }
    }
}

impl CompletionService for CannedService {
    fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let prompt = request.messages.last().map(|m| m.content.clone()).unwrap_or_default();
        self.prompts.borrow_mut().push(prompt.clone());

        self.replies
            .iter()
            .find(|(old, _)| prompt.contains(old))
            .map(|(_, reply)| reply.to_string())
            .ok_or(CompletionError::Status {
                status: 500,
                message: "canned failure".to_string(),
            })
    }
}

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), name).unwrap();
}

fn sorted_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

fn run(
    dir: &Path,
    service: &CannedService,
    options: RenameOptions,
) -> concert_renamer::RenameReport {
    let config = RequesterConfig {
        output_format: "<Artist> - <ConcertName> - <Year>".to_string(),
        ..Default::default()
    };
    let renamer = DirectoryRenamer::new(
        FilenameRequester::new(service, config),
        ResponseSanitizer::new(),
        options,
    );
    let entries = scan_directory(dir).unwrap();
    renamer.rename_all(&entries, &mut Progress::silent())
}

#[test]
fn test_full_pass_renames_and_skips() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "stones_leeds_1971.MP3");
    touch(dir.path(), "bjork_opera_house.mp4");
    touch(dir.path(), "mystery_tape.wav");
    touch(dir.path(), "nirvana_mtv.flac");

    let service = CannedService::new(&[
        ("stones_leeds_1971.MP3", "the rolling stones - live at leeds - 1971.MP3"),
        ("bjork_opera_house.mp4", "Bj?rk - Live at the Royal Opera House.mp4"),
        ("nirvana_mtv.flac", "I'm sorry, I cannot determine this concert."),
    ]);

    let report = run(dir.path(), &service, RenameOptions::default());

    assert_eq!(report.len(), 4);
    assert_eq!(report.renamed_count(), 1);
    assert_eq!(report.skipped_count(), 3);
    assert_eq!(report.failed_count(), 0);
    assert_eq!(
        sorted_names(dir.path()),
        vec![
            "The Rolling Stones - Live at Leeds - 1971.MP3",
            "bjork_opera_house.mp4",
            "mystery_tape.wav",
            "nirvana_mtv.flac",
        ]
    );
}

#[test]
fn test_prompts_carry_format_and_year() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "dylan_newport_1965.flac");

    let service = CannedService::new(&[]);
    run(dir.path(), &service, RenameOptions::default());

    let prompts = service.prompts.borrow();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("<Artist> - <ConcertName> - <Year>"));
    assert!(prompts[0].contains("dylan_newport_1965.flac"));
    assert!(prompts[0].contains("year 1965"));
}

#[test]
fn test_noop_never_mutates() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "stones_leeds_1971.MP3");
    touch(dir.path(), "grateful_dead-cornell.mp3");

    let service = CannedService::new(&[(
        "stones_leeds_1971.MP3",
        "The Rolling Stones - Live at Leeds - 1971.MP3",
    )]);

    let report = run(
        dir.path(),
        &service,
        RenameOptions {
            dry_run: true,
            on_no_proposal: NoProposalPolicy::FallbackTitleCase,
        },
    );

    assert!(report.dry_run);
    assert_eq!(report.would_rename_count(), 2);
    assert_eq!(report.fallback_count(), 1);
    assert_eq!(
        sorted_names(dir.path()),
        vec!["grateful_dead-cornell.mp3", "stones_leeds_1971.MP3"]
    );
}

#[test]
fn test_directories_are_processed_too() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("phish_big_cypress")).unwrap();

    let service = CannedService::new(&[("phish_big_cypress", "phish - big cypress - 1999")]);

    let report = run(dir.path(), &service, RenameOptions::default());

    assert_eq!(report.renamed_count(), 1);
    assert!(dir.path().join("Phish - Big Cypress - 1999").is_dir());
}

#[test]
fn test_collision_is_reported_not_resolved() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "queen_a.mkv");
    touch(dir.path(), "Queen - Live Aid.mkv");

    let service = CannedService::new(&[
        ("queen_a.mkv", "queen - live aid.mkv"),
        ("Queen - Live Aid.mkv", "Queen - Live Aid.mkv"),
    ]);

    let report = run(dir.path(), &service, RenameOptions::default());

    let failed: Vec<&FileOutcome> = report
        .outcomes
        .iter()
        .filter(|o| matches!(o, FileOutcome::Failed { .. }))
        .collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].source_name(), "queen_a.mkv");
    assert_eq!(
        sorted_names(dir.path()),
        vec!["Queen - Live Aid.mkv", "queen_a.mkv"]
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("Queen - Live Aid.mkv")).unwrap(),
        "Queen - Live Aid.mkv"
    );
}

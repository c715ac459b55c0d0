use std::{
    cell::RefCell,
    fs,
    io::Cursor,
    path::{Path, PathBuf},
    rc::Rc,
};

use synpage::{
    application::{
        render::render_service,
        session::{
            Dialogs, DropOutcome, DropSession, STATUS_FAILED, STATUS_NOT_FOUND, STATUS_READY,
            SessionState,
        },
    },
    infra::{error::InfraError, opener::Opener},
    presentation::terminal::{TerminalDialogs, run_drop_zone},
};
use tempfile::tempdir;

#[derive(Default)]
struct RecordingDialogs {
    statuses: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    questions: Vec<String>,
    answer: bool,
}

impl RecordingDialogs {
    fn answering(answer: bool) -> Self {
        Self {
            answer,
            ..Self::default()
        }
    }
}

impl Dialogs for RecordingDialogs {
    fn set_status(&mut self, status: &str) {
        self.statuses.push(status.to_string());
    }

    fn warning(&mut self, _title: &str, message: &str) {
        self.warnings.push(message.to_string());
    }

    fn error(&mut self, _title: &str, message: &str) {
        self.errors.push(message.to_string());
    }

    fn confirm(&mut self, _title: &str, message: &str) -> bool {
        self.questions.push(message.to_string());
        self.answer
    }
}

#[derive(Clone, Default)]
struct RecordingOpener {
    opened: Rc<RefCell<Vec<PathBuf>>>,
    fail: bool,
}

impl Opener for RecordingOpener {
    fn open(&self, path: &Path) -> Result<(), InfraError> {
        self.opened.borrow_mut().push(path.to_path_buf());
        if self.fail {
            return Err(InfraError::launch(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "no handler"),
            ));
        }
        Ok(())
    }
}

fn session(
    answer: bool,
    opener: RecordingOpener,
) -> DropSession<RecordingDialogs, RecordingOpener> {
    DropSession::new(render_service(), RecordingDialogs::answering(answer), opener)
}

fn entries(dir: &Path) -> usize {
    fs::read_dir(dir).expect("read dir").count()
}

#[test]
fn starts_ready_and_idle() {
    let session = session(true, RecordingOpener::default());

    assert_eq!(session.state(), SessionState::Idle);
    assert_eq!(session.dialogs().statuses, vec![STATUS_READY.to_string()]);
}

#[test]
fn wrong_extension_is_rejected_without_touching_disk() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("notes.txt");
    fs::write(&input, "print('no')\n").expect("write");
    let opener = RecordingOpener::default();
    let mut session = session(true, opener.clone());

    let outcome = session.drop_path(&input);

    assert_eq!(outcome, DropOutcome::Rejected);
    assert_eq!(
        session.dialogs().warnings,
        vec!["Please select a file with .py extension".to_string()]
    );
    assert_eq!(session.dialogs().statuses, vec![STATUS_READY.to_string()]);
    assert_eq!(entries(dir.path()), 1);
    assert_eq!(session.state(), SessionState::Idle);
    assert!(opener.opened.borrow().is_empty());
}

#[test]
fn accepted_drop_converts_and_opens_on_yes() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("app.py");
    fs::write(&input, "import sys\nprint(sys.argv)\n").expect("write");
    let opener = RecordingOpener::default();
    let mut session = session(true, opener.clone());

    let outcome = session.drop_path(&input);

    let expected = dir.path().join("app.html");
    assert_eq!(
        outcome,
        DropOutcome::Converted {
            output: expected.clone(),
            open_requested: true,
        }
    );
    assert!(expected.exists());
    assert_eq!(
        session.dialogs().statuses,
        vec![
            STATUS_READY.to_string(),
            "Processing file: app.py".to_string(),
            "Successfully created: app.html".to_string(),
        ]
    );
    assert_eq!(session.dialogs().questions.len(), 1);
    assert!(session.dialogs().questions[0].contains(&expected.display().to_string()));
    assert_eq!(*opener.opened.borrow(), vec![expected]);
    assert_eq!(session.state(), SessionState::Idle);
}

#[test]
fn declining_leaves_the_page_unopened() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("quiet.py");
    fs::write(&input, "pass\n").expect("write");
    let opener = RecordingOpener::default();
    let mut session = session(false, opener.clone());

    let outcome = session.drop_path(&input);

    assert!(matches!(
        outcome,
        DropOutcome::Converted {
            open_requested: false,
            ..
        }
    ));
    assert!(dir.path().join("quiet.html").exists());
    assert!(opener.opened.borrow().is_empty());
}

#[test]
fn launch_failure_does_not_fail_the_conversion() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("open.py");
    fs::write(&input, "pass\n").expect("write");
    let opener = RecordingOpener {
        fail: true,
        ..RecordingOpener::default()
    };
    let mut session = session(true, opener.clone());

    let outcome = session.drop_path(&input);

    assert!(matches!(outcome, DropOutcome::Converted { .. }));
    assert_eq!(opener.opened.borrow().len(), 1);
    assert!(session.dialogs().errors.is_empty());
}

#[test]
fn missing_file_reports_not_found() {
    let dir = tempdir().expect("tempdir");
    let mut session = session(true, RecordingOpener::default());

    let outcome = session.drop_path(&dir.path().join("gone.py"));

    assert_eq!(outcome, DropOutcome::Failed { not_found: true });
    assert_eq!(session.dialogs().errors, vec!["File not found".to_string()]);
    assert_eq!(
        session.dialogs().statuses.last().map(String::as_str),
        Some(STATUS_NOT_FOUND)
    );
    assert_eq!(session.state(), SessionState::Idle);
}

#[test]
fn other_failures_report_the_cause() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("binary.py");
    fs::write(&input, [0xff, 0xfe, 0x00, 0x80]).expect("write");
    let mut session = session(true, RecordingOpener::default());

    let outcome = session.drop_path(&input);

    assert_eq!(outcome, DropOutcome::Failed { not_found: false });
    let errors = &session.dialogs().errors;
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("An error occurred:\n"));
    assert!(errors[0].contains("UTF-8"));
    assert_eq!(
        session.dialogs().statuses.last().map(String::as_str),
        Some(STATUS_FAILED)
    );
    assert!(!dir.path().join("binary.html").exists());
}

#[test]
fn session_accepts_another_drop_after_a_failure() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("later.py");
    fs::write(&input, "x = 2\n").expect("write");
    let mut session = session(false, RecordingOpener::default());

    session.drop_path(&dir.path().join("missing.py"));
    let outcome = session.drop_path(&input);

    assert!(matches!(outcome, DropOutcome::Converted { .. }));
}

#[test]
fn terminal_loop_handles_drops_until_quit() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("script.py");
    fs::write(&input, "print(1)\n").expect("write");
    let opener = RecordingOpener::default();

    let script = format!("notes.txt\n'{}'\nn\nq\n", input.display());
    let dialogs = TerminalDialogs::new(Cursor::new(script.into_bytes()), Vec::new());
    let mut session = DropSession::new(render_service(), dialogs, opener.clone());

    run_drop_zone(&mut session, dir.path()).expect("loop ends cleanly");

    let transcript = String::from_utf8(session.dialogs().output().clone()).expect("utf-8");
    assert!(transcript.contains("[Ready]"));
    assert!(transcript.contains("[!] Error: Please select a file with .py extension"));
    assert!(transcript.contains("[Processing file: script.py]"));
    assert!(transcript.contains("[Successfully created: script.html]"));
    assert!(transcript.contains("Open it in browser?"));
    assert!(dir.path().join("script.html").exists());
    assert!(opener.opened.borrow().is_empty());
}

#[test]
fn terminal_picker_converts_the_chosen_file() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("a.py"), "a = 1\n").expect("write");
    fs::write(dir.path().join("b.py"), "b = 2\n").expect("write");
    fs::write(dir.path().join("c.txt"), "skip").expect("write");
    let opener = RecordingOpener::default();

    let dialogs = TerminalDialogs::new(Cursor::new(b"pick\n2\n\n".to_vec()), Vec::new());
    let mut session = DropSession::new(render_service(), dialogs, opener.clone());

    run_drop_zone(&mut session, dir.path()).expect("loop ends at end of input");

    assert!(dir.path().join("b.html").exists());
    assert!(!dir.path().join("a.html").exists());
    assert_eq!(*opener.opened.borrow(), vec![dir.path().join("b.html")]);
}

#[test]
fn picker_failure_keeps_the_loop_running() {
    let dir = tempdir().expect("tempdir");
    let missing = dir.path().join("not-a-dir");
    let input = dir.path().join("after.py");
    fs::write(&input, "x = 1\n").expect("write");

    let script = format!("pick\nnotes.txt\n'{}'\nn\nq\n", input.display());
    let dialogs = TerminalDialogs::new(Cursor::new(script.into_bytes()), Vec::new());
    let mut session = DropSession::new(render_service(), dialogs, RecordingOpener::default());

    run_drop_zone(&mut session, &missing).expect("listing errors do not end the loop");

    let transcript = String::from_utf8(session.dialogs().output().clone()).expect("utf-8");
    assert!(transcript.contains("[-] Error: An error occurred:"));
    assert!(transcript.contains("not-a-dir"));
    assert!(transcript.contains("[!] Error: Please select a file with .py extension"));
    assert!(transcript.contains("[Successfully created: after.html]"));
    assert_eq!(session.state(), SessionState::Idle);
}

#[test]
fn unusable_drop_text_is_ignored() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("a.py"), "a = 1\n").expect("write");

    let dialogs = TerminalDialogs::new(Cursor::new(b"''\nq\n".to_vec()), Vec::new());
    let mut session = DropSession::new(render_service(), dialogs, RecordingOpener::default());

    run_drop_zone(&mut session, dir.path()).expect("loop ends cleanly");

    let transcript = String::from_utf8(session.dialogs().output().clone()).expect("utf-8");
    assert!(!transcript.contains("file number> "));
    assert!(!transcript.contains("[!]"));
    assert_eq!(transcript.matches("drop> ").count(), 2);
    assert!(!dir.path().join("a.html").exists());
}

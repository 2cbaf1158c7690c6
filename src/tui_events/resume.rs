//! Resume dialog event handling.

use crate::resume::export_resume;
use crate::sound::Cue;
use crate::tui::PortfolioTerminal;
use crate::tui_types::TuiView;
use crate::tui_utils::open_path;
use crossterm::event::KeyCode;

pub fn handle_resume_key(app: &mut PortfolioTerminal, key: KeyCode) {
    match key {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.view = TuiView::Prompt;
        }
        KeyCode::Enter | KeyCode::Char('d') => {
            app.sound.play(Cue::Click);
            match export_resume(&app.portfolio, &app.settings.download_dir) {
                Ok(path) => {
                    app.status_message = Some(format!("Resume saved to {}", path.display()));
                    app.view = TuiView::ResumeDialog {
                        exported: Some(path),
                    };
                }
                Err(e) => {
                    tracing::warn!("resume export failed: {e}");
                    app.status_message = Some(format!("Failed to save resume: {e}"));
                }
            }
        }
        KeyCode::Char('o') => {
            let TuiView::ResumeDialog { exported } = &app.view else {
                return;
            };
            match exported.clone() {
                Some(path) => match open_path(&path) {
                    Ok(()) => app.status_message = Some(format!("Opened {}", path.display())),
                    Err(e) => app.status_message = Some(format!("Failed to open file: {e}")),
                },
                None => {
                    app.status_message = Some("No resume downloaded yet".to_string());
                }
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{press, test_app};

    #[test]
    fn enter_exports_into_download_dir() {
        let dir = tempfile::tempdir().unwrap();
        let (mut app, _) = test_app();
        app.settings.download_dir = dir.path().to_path_buf();
        app.view = TuiView::ResumeDialog { exported: None };

        press(&mut app, KeyCode::Enter);

        let expected = dir.path().join("Alex_Morgan_Resume.txt");
        assert!(expected.exists());
        assert_eq!(
            app.view,
            TuiView::ResumeDialog {
                exported: Some(expected)
            }
        );
        assert!(app.status_message.as_deref().unwrap().starts_with("Resume saved to"));
    }

    #[test]
    fn export_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let (mut app, _) = test_app();
        app.settings.download_dir = dir.path().to_path_buf();
        app.portfolio.resume.pdf_path = Some(dir.path().join("missing.pdf"));
        app.view = TuiView::ResumeDialog { exported: None };

        press(&mut app, KeyCode::Enter);

        assert_eq!(app.view, TuiView::ResumeDialog { exported: None });
        assert!(app.status_message.as_deref().unwrap().starts_with("Failed"));
    }

    #[test]
    fn open_before_export_explains() {
        let (mut app, _) = test_app();
        app.view = TuiView::ResumeDialog { exported: None };
        press(&mut app, KeyCode::Char('o'));
        assert_eq!(app.status_message.as_deref(), Some("No resume downloaded yet"));
    }

    #[test]
    fn esc_closes_dialog() {
        let (mut app, _) = test_app();
        app.view = TuiView::ResumeDialog { exported: None };
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.view, TuiView::Prompt);
        assert!(!app.should_quit);
    }
}

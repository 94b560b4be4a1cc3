//! End-to-end sessions: configuration file, controller, plain-text views.

use draw_number::{
    run_session, ConfigOptions, ConfigSource, DrawNumberController, DrawNumberView,
    PrintStreamView,
};
use std::cell::RefCell;
use std::fs;
use std::io::{self, Cursor, Write};
use std::path::PathBuf;
use std::rc::Rc;

/// Write sink shared between a boxed view and the test.
#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    fn text(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn write_config(name: &str, contents: &str) -> PathBuf {
    let file_name = format!("draw-number-{}-{}.yml", std::process::id(), name);
    let path = std::env::temp_dir().join(file_name);
    fs::write(&path, contents).unwrap();
    path
}

/// Builds a seeded controller whose only view writes into the returned buffer.
fn seeded(source: &ConfigSource, seed: u64) -> (SharedBuffer, DrawNumberController) {
    let buffer = SharedBuffer::default();
    let view = PrintStreamView::new(buffer.clone());
    let views: Vec<Box<dyn DrawNumberView>> = vec![Box::new(view)];
    let controller = DrawNumberController::with_seed(source, views, seed);
    (buffer, controller)
}

#[test]
fn config_file_drives_the_game() {
    let path = write_config("valid", "minimum: 1; maximum: 3\nattempts: 2\n");
    let (buffer, mut controller) = seeded(&ConfigSource::file(&path), 12);
    fs::remove_file(&path).ok();

    let config = controller.configuration();
    assert_eq!(
        (config.minimum(), config.maximum(), config.attempts()),
        (1, 3, 2)
    );

    run_session(&mut controller, Cursor::new("0\n2\n")).unwrap();
    let text = buffer.text();
    assert!(text.starts_with("Draw number started\n"));
    assert!(text.contains("Incorrect number, try again"));
    assert!(text.contains("Result: "));
    assert!(!text.contains("Error"));
}

#[test]
fn command_line_overrides_win_over_file() {
    let path = write_config("overridden", "minimum: 1\nmaximum: 30\nattempts: 2\n");
    let overrides = ConfigOptions::new().with_maximum(50).with_attempts(5);
    let source = ConfigSource::file(&path).with_overrides(overrides);
    let (buffer, controller) = seeded(&source, 12);
    fs::remove_file(&path).ok();

    let config = controller.configuration();
    assert_eq!(
        (config.minimum(), config.maximum(), config.attempts()),
        (1, 50, 5)
    );
    assert_eq!(controller.model().remaining_attempts(), 5);
    assert!(!buffer.text().contains("Error"));
}

#[test]
fn overrides_can_make_file_inconsistent() {
    let path = write_config("clashing", "minimum: 40\nmaximum: 60\n");
    let overrides = ConfigOptions::new().with_maximum(10);
    let source = ConfigSource::file(&path).with_overrides(overrides);
    let (buffer, controller) = seeded(&source, 12);
    fs::remove_file(&path).ok();

    assert_eq!(controller.configuration().maximum(), 100);
    assert!(buffer.text().contains("min: 40, max: 10"));
}

#[test]
fn malformed_config_uses_defaults_and_reports() {
    let path = write_config("malformed", "minimum: zero\n");
    let (buffer, controller) = seeded(&ConfigSource::file(&path), 12);
    fs::remove_file(&path).ok();

    assert_eq!(controller.configuration().maximum(), 100);
    assert!(buffer.text().contains("Error: invalid number for 'minimum'"));
}

#[test]
fn inconsistent_config_uses_defaults_and_reports() {
    let path = write_config("inconsistent", "minimum:10;maximum:5;attempts:0");
    let (buffer, controller) = seeded(&ConfigSource::file(&path), 12);
    fs::remove_file(&path).ok();

    assert_eq!(controller.configuration().attempts(), 10);
    let expected = "Inconsistent configuration: min: 10, max: 5, attempts: 0. Using defaults instead.";
    assert!(buffer.text().contains(expected));
}

#[test]
fn full_session_with_reset_history_and_quit() {
    let (buffer, mut controller) = seeded(&ConfigSource::default(), 3);

    let input = Cursor::new("50\nh\nreset\nh\nquit\n25\n");
    let handled = run_session(&mut controller, input).unwrap();
    assert_eq!(handled, 5);
    assert!(!controller.is_running());
    assert!(controller.history().is_empty());

    let text = buffer.text();
    assert!(text.contains("1. 50 - "));
    assert!(text.contains("New game"));
    assert!(text.contains("No attempts made yet."));
}

use std::cell::RefCell;
use std::fmt::{Arguments, Write};
use std::rc::Rc;

///
/// Receives the progress output of long-running computations, most notably
/// [`crate::algorithms::buchberger::buchberger()`].
///
/// The output consists of short symbols whose meaning is documented at the
/// algorithm that produces them.
///
pub trait ComputationController: Clone {

    fn log(&self, args: Arguments);
}

#[macro_export]
macro_rules! log_progress {
    ($controller:expr, $($args:tt)*) => {
        ($controller).log(std::format_args!($($args)*))
    };
}

///
/// Prints all progress output to stdout.
///
/// We use `print!` instead of writing to `Stdout` directly, since
/// this works with output capture in tests.
///
#[derive(Clone, Copy)]
pub struct LogProgress;

impl ComputationController for LogProgress {

    fn log(&self, args: Arguments) {
        print!("{}", args);
        _ = std::io::Write::flush(&mut std::io::stdout());
    }
}

///
/// Discards all progress output.
///
#[derive(Clone, Copy)]
pub struct DontObserve;

impl ComputationController for DontObserve {

    fn log(&self, _args: Arguments) {}
}

///
/// Collects all progress output in a string that is shared between all clones
/// of this controller.
///
#[derive(Clone, Default)]
pub struct RecordProgress {
    record: Rc<RefCell<String>>
}

impl RecordProgress {

    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Returns everything that was logged so far.
    ///
    pub fn recorded(&self) -> String {
        self.record.borrow().clone()
    }
}

impl ComputationController for RecordProgress {

    fn log(&self, args: Arguments) {
        _ = self.record.borrow_mut().write_fmt(args);
    }
}

#[cfg(test)]
pub const TEST_LOG_PROGRESS: LogProgress = LogProgress;

#[test]
fn test_record_progress_shared_between_clones() {
    let controller = RecordProgress::new();
    let clone = controller.clone();
    log_progress!(controller, "(b={})", 3);
    log_progress!(clone, "-");
    assert_eq!("(b=3)-", controller.recorded());
    DontObserve.log(format_args!("ignored"));
}

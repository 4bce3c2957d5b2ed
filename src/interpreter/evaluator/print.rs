/// Where printed lines go.
///
/// The evaluator only ever emits whole lines of text; how they are shown is
/// up to the implementor.
pub trait Output {
    /// Emits one line of text, without a trailing newline.
    fn emit(&mut self, line: &str);
}

/// Writes every line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stdout;

impl Output for Stdout {
    fn emit(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Collects every line, in order.
///
/// # Example
/// ```
/// use imp::interpreter::evaluator::print::Output;
///
/// let mut lines: Vec<String> = Vec::new();
/// lines.emit("42");
/// lines.emit("true");
///
/// assert_eq!(lines, ["42", "true"]);
/// ```
impl Output for Vec<String> {
    fn emit(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

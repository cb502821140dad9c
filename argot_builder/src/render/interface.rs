/// The output seam: rendered help and error lines pass through here, so a
/// host can redirect them without touching the rendering itself.
pub trait UserInterface {
    /// Emit one line of regular output.
    fn print(&self, message: String);

    /// Emit one line of error output.
    fn print_error(&self, message: String);
}

/// The standard interface: stdout for help, stderr for errors.
#[derive(Default)]
pub struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, message: String) {
        eprintln!("{message}");
    }
}

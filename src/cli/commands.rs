// Shell keywords

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
}

impl Command {
    /// Recognise a keyword; anything else is a question.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "exit" | "quit" => Some(Command::Quit),
            _ => None,
        }
    }
}

//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::ConsoleFormatter;
use colored::Colorize;
use playground_application::{AskModelInput, AskModelUseCase};
use playground_domain::ModelId;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};

/// One entry of the in-session transcript
struct Turn {
    role: &'static str,
    content: String,
}

/// Interactive chat REPL
///
/// Each question is an independent exchange — the selected model sees only
/// the current question. The transcript is display state, not conversation
/// context sent to the model.
pub struct ChatRepl {
    use_case: AskModelUseCase,
    model: ModelId,
    transcript: Vec<Turn>,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(use_case: AskModelUseCase, model: ModelId) -> Self {
        Self {
            use_case,
            model,
            transcript: Vec::new(),
        }
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load history
        let history_path =
            dirs::data_dir().map(|p| p.join("bedrock-playground").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    // Handle commands
                    if line.starts_with('/') {
                        if self.handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    // Add to history
                    let _ = rl.add_history_entry(line);

                    self.process_question(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│      Bedrock Playground - Chat Mode         │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Model: {}", self.model);
        println!();
        println!("Commands:");
        println!("  /help          - Show this help");
        println!("  /models        - List the model catalog");
        println!("  /model <id>    - Switch model");
        println!("  /history       - Show the session transcript");
        println!("  /quit          - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&mut self, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                return true;
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?    - Show this help");
                println!("  /models          - List the model catalog");
                println!("  /model <id>      - Switch model");
                println!("  /history         - Show the session transcript");
                println!("  /quit, /exit, /q - Exit chat");
                println!();
            }
            "/models" => {
                println!();
                print!("{}", ConsoleFormatter::format_catalog());
                println!();
            }
            "/history" => {
                println!();
                if self.transcript.is_empty() {
                    println!("No messages yet.");
                }
                for turn in &self.transcript {
                    println!("{} {}", format!("{}:", turn.role).bold(), turn.content);
                }
                println!();
            }
            _ => {
                if let Some(id) = cmd.strip_prefix("/model ") {
                    self.switch_model(id.trim());
                } else {
                    println!("Unknown command: {}", cmd);
                    println!("Type /help for available commands");
                }
            }
        }
        false
    }

    fn switch_model(&mut self, id: &str) {
        let model = ModelId::new(id);
        if model.vendor().is_none() {
            println!("Unknown vendor prefix in model id: {}", id);
            return;
        }
        println!("Switched to {}", model);
        self.model = model;
    }

    async fn process_question(&mut self, question: &str) {
        println!();

        self.transcript.push(Turn {
            role: "user",
            content: question.to_string(),
        });

        let input = AskModelInput::new(self.model.clone(), question);

        match self.use_case.execute(input).await {
            Ok(answer) => {
                println!("{}", ConsoleFormatter::format_answer(&self.model, &answer));
                self.transcript.push(Turn {
                    role: "assistant",
                    content: answer,
                });
            }
            Err(e) => {
                eprintln!("{}", ConsoleFormatter::format_error(&e));
            }
        }
        println!();
    }
}

//! The prompt loop driven by a scripted line editor.

use std::cell::RefCell;
use std::rc::Rc;

use tinkertable::console::{Console, ConsoleConfig, LineEditor, Prompt, ReadResult};
use tinkertable::foundation::Result;
use tinkertable::registry::{FieldProvider, FieldRegistry, FieldSpec, VarCell};

/// Feeds a fixed script of read results, then EOF.
struct ScriptedEditor {
    script: Vec<ReadResult>,
    history: Vec<String>,
    variables: Vec<String>,
}

impl ScriptedEditor {
    fn new(lines: &[&str]) -> Self {
        Self {
            script: lines
                .iter()
                .rev()
                .map(|l| ReadResult::Line((*l).to_string()))
                .collect(),
            history: Vec::new(),
            variables: Vec::new(),
        }
    }

    // Script is stored reversed and popped; pushing puts the interrupt
    // ahead of every line.
    fn with_interrupt(mut self) -> Self {
        self.script.push(ReadResult::Interrupted);
        self
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self.script.pop().unwrap_or(ReadResult::Eof))
    }

    fn add_history(&mut self, line: &str) {
        self.history.push(line.to_string());
    }

    fn set_variables(&mut self, names: Vec<String>) {
        self.variables = names;
    }
}

struct Stats {
    hp: VarCell<i64>,
    mana: VarCell<i64>,
}

impl FieldProvider for Stats {
    fn fields(&self) -> Vec<FieldSpec> {
        vec![
            FieldSpec::integer("hp", &self.hp),
            FieldSpec::integer("mana", &self.mana),
        ]
    }
}

fn quiet_console() -> (Console, VarCell<i64>) {
    let stats = Stats {
        hp: VarCell::new(100),
        mana: VarCell::new(50),
    };
    let hp = stats.hp.clone();
    let mut registry = FieldRegistry::new();
    registry.add_provider(stats);
    let console = Console::with_config(registry, ConsoleConfig::default().with_banner(false));
    (console, hp)
}

#[test]
fn loop_runs_the_script_to_eof() {
    let (console, hp) = quiet_console();
    let editor = ScriptedEditor::new(&["/set hp 1", "/set mana 2", "/getAll"]);
    let mut prompt = Prompt::with_editor(console, editor);

    prompt.run().unwrap();
    assert_eq!(hp.get(), 1);
    assert_eq!(
        prompt.console().history().entries(),
        ["/set hp 1", "/set mana 2", "/getAll"]
    );
}

#[test]
fn whitespace_lines_never_reach_the_console() {
    let (console, _hp) = quiet_console();
    let editor = ScriptedEditor::new(&["", "  \t ", "/get hp", "   "]);
    let mut prompt = Prompt::with_editor(console, editor);

    prompt.run().unwrap();
    assert_eq!(prompt.console().history().entries(), ["/get hp"]);
}

#[test]
fn lines_are_trimmed_before_submission() {
    let (console, hp) = quiet_console();
    let editor = ScriptedEditor::new(&["  /set hp 7  "]);
    let mut prompt = Prompt::with_editor(console, editor);

    prompt.run().unwrap();
    assert_eq!(hp.get(), 7);
    assert_eq!(prompt.console().history().entries(), ["/set hp 7"]);
}

#[test]
fn interrupt_does_not_end_the_loop() {
    let (console, hp) = quiet_console();
    let editor = ScriptedEditor::new(&["/set hp 3"]).with_interrupt();
    let mut prompt = Prompt::with_editor(console, editor);

    prompt.run().unwrap();
    assert_eq!(hp.get(), 3);
}

#[test]
fn completion_names_are_seeded_from_the_registry() {
    let (console, _hp) = quiet_console();
    let seeded: Rc<RefCell<Vec<String>>> = Rc::default();

    struct Probe {
        seeded: Rc<RefCell<Vec<String>>>,
    }
    impl LineEditor for Probe {
        fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
            Ok(ReadResult::Eof)
        }
        fn add_history(&mut self, _line: &str) {}
        fn set_variables(&mut self, names: Vec<String>) {
            *self.seeded.borrow_mut() = names;
        }
    }

    let probe = Probe {
        seeded: Rc::clone(&seeded),
    };
    let mut prompt = Prompt::with_editor(console, probe);
    prompt.run().unwrap();

    assert_eq!(*seeded.borrow(), ["hp", "mana"]);
}

//! A scripted console session covering every command form.

use std::cell::RefCell;
use std::rc::Rc;

use tinkertable::console::{Console, ConsoleConfig};
use tinkertable::foundation::Severity;
use tinkertable::registry::{FieldProvider, FieldRegistry, FieldSpec, VarCell};

struct Session {
    score: VarCell<i64>,
    volume: VarCell<f64>,
    player: VarCell<String>,
}

impl FieldProvider for Session {
    fn fields(&self) -> Vec<FieldSpec> {
        vec![
            FieldSpec::integer("score", &self.score),
            FieldSpec::float("volume", &self.volume),
            FieldSpec::text("player", &self.player),
            FieldSpec::constant("version", "1.0.3"),
        ]
    }
}

fn console() -> (Console, VarCell<i64>) {
    let session = Session {
        score: VarCell::new(0),
        volume: VarCell::new(0.8),
        player: VarCell::new(String::from("anon")),
    };
    let score = session.score.clone();
    let mut registry = FieldRegistry::new();
    registry.add_provider(session);
    (Console::new(registry), score)
}

#[test]
fn a_full_session_transcript() {
    let (mut console, score) = console();

    let transcript = [
        ("/get score", "Integer score is [0]"),
        ("/set score 42", "Integer score set to [42]"),
        ("/get score", "Integer score is [42]"),
        ("/reset score", "Integer score set to [0]"),
        ("/set volume 0.25", "Float volume set to [0.25]"),
        ("/set player zoe", "Text player set to [zoe]"),
        ("/get version", "Text version is [1.0.3]"),
        ("/getAll", "score, volume, player, version"),
        ("/set version 2.0", "Variable 'version' is read-only!"),
        ("/set score lots", "Invalid argument lots for command: '/set'!"),
        ("/get fps", "Variable 'fps' not found!"),
        ("/teleport 0 0", "Invalid command: '/teleport'!"),
        ("hello there", "Valid command should start with '/'!"),
        ("/set score", "Command '/set' has not enough arguments!"),
    ];

    for (line, expected) in transcript {
        let result = console.submit(line).unwrap();
        assert_eq!(result.message, expected, "line: {line}");
    }

    assert_eq!(score.get(), 0);
    assert_eq!(console.history().len(), transcript.len());
}

#[test]
fn sink_and_history_agree_on_a_mixed_session() {
    let seen: Rc<RefCell<Vec<Severity>>> = Rc::default();
    let sink_seen = Rc::clone(&seen);

    let (mut console, _score) = console();
    console.set_result_sink(move |severity, _text| {
        sink_seen.borrow_mut().push(severity);
    });

    console.submit("/set score 10");
    console.submit("/set score oops");
    console.submit("/getAll");

    assert_eq!(
        *seen.borrow(),
        [Severity::Info, Severity::Error, Severity::Info]
    );
    assert_eq!(
        console.history().entries(),
        ["/set score 10", "/set score oops", "/getAll"]
    );
}

#[test]
fn providers_registered_mid_session_are_picked_up() {
    let (mut console, _score) = console();
    console.submit("/set score 99");

    // A new system comes online mid-session and registers its fields.
    struct Reloaded(VarCell<i64>);
    impl FieldProvider for Reloaded {
        fn fields(&self) -> Vec<FieldSpec> {
            vec![FieldSpec::integer("combo", &self.0)]
        }
    }
    let combo = VarCell::new(1);
    console.registry_mut().add_provider(Reloaded(combo.clone()));

    assert_eq!(
        console.submit("/get combo").unwrap().message,
        "Integer combo is [1]"
    );
    assert_eq!(
        console.submit("/getAll").unwrap().message,
        "score, volume, player, version, combo"
    );
}

#[test]
fn disabled_history_session_still_answers() {
    let session = Session {
        score: VarCell::new(5),
        volume: VarCell::new(1.0),
        player: VarCell::new(String::from("anon")),
    };
    let mut registry = FieldRegistry::new();
    registry.add_provider(session);
    let mut console =
        Console::with_config(registry, ConsoleConfig::default().with_record_history(false));

    assert_eq!(
        console.submit("/get score").unwrap().message,
        "Integer score is [5]"
    );
    assert!(console.history().is_empty());
}

//! Integration tests for the console facade.

use std::cell::RefCell;
use std::rc::Rc;

use tinkertable_command::CommandOutcome;
use tinkertable_console::{Console, ConsoleConfig};
use tinkertable_foundation::Severity;
use tinkertable_registry::{FieldProvider, FieldRegistry, FieldSpec, VarCell};

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

fn console() -> (Console, VarCell<i64>) {
    let stats = Stats {
        hp: VarCell::new(100),
        mana: VarCell::new(50),
    };
    let hp = stats.hp.clone();
    let mut registry = FieldRegistry::new();
    registry.add_provider(stats);
    (Console::new(registry), hp)
}

#[test]
fn a_session_records_every_submitted_line() {
    let (mut console, hp) = console();

    console.submit("/get hp");
    console.submit("/set hp 5");
    console.submit("/getAll");
    console.submit("bogus");

    assert_eq!(hp.get(), 5);
    assert_eq!(
        console.history().entries(),
        ["/get hp", "/set hp 5", "/getAll", "bogus"]
    );
}

#[test]
fn recall_through_the_facade_matches_history_order() {
    let (mut console, _hp) = console();
    console.submit("/get hp");
    console.submit("/get mana");

    assert_eq!(console.recall_previous(), Some("/get mana"));
    assert_eq!(console.recall_previous(), Some("/get hp"));
    assert_eq!(console.recall_next(), Some("/get mana"));
    assert_eq!(console.recall_next(), Some(""));
}

#[test]
fn sink_sees_results_in_submission_order() {
    let seen: Rc<RefCell<Vec<(Severity, String)>>> = Rc::default();
    let sink_seen = Rc::clone(&seen);

    let (mut console, _hp) = console();
    console.set_result_sink(move |severity, text| {
        sink_seen.borrow_mut().push((severity, text.to_string()));
    });

    console.submit("/set hp 42");
    console.submit("/set hp oops");
    console.submit("");

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0], (Severity::Info, "Integer hp set to [42]".into()));
    assert_eq!(
        seen[1],
        (
            Severity::Error,
            "Invalid argument oops for command: '/set'!".into()
        )
    );
}

#[test]
fn disabled_history_still_dispatches() {
    let mut registry = FieldRegistry::new();
    registry.add_provider(Stats {
        hp: VarCell::new(1),
        mana: VarCell::new(1),
    });
    let mut console =
        Console::with_config(registry, ConsoleConfig::default().with_record_history(false));

    let result = console.submit("/set hp 9").unwrap();
    assert_eq!(result.kind, CommandOutcome::Ok);
    assert!(console.history().is_empty());
    assert!(console.recall_previous().is_none());
}

#[test]
fn providers_added_after_construction_are_visible() {
    let (mut console, _hp) = console();

    struct Extra(VarCell<String>);
    impl FieldProvider for Extra {
        fn fields(&self) -> Vec<FieldSpec> {
            vec![FieldSpec::text("motd", &self.0)]
        }
    }
    console
        .registry_mut()
        .add_provider(Extra(VarCell::new(String::from("hi"))));

    let result = console.submit("/getAll").unwrap();
    assert_eq!(result.message, "hp, mana, motd");
}

#[test]
fn invalidation_refreshes_reset_snapshots() {
    let (mut console, hp) = console();

    console.submit("/set hp 7");
    console.registry_mut().invalidate();
    console.submit("/set hp 3");

    // Snapshot was retaken at 7 after the invalidate.
    let result = console.submit("/reset hp").unwrap();
    assert_eq!(result.message, "Integer hp set to [7]");
    assert_eq!(hp.get(), 7);
}

use super::*;
use crate::models::sample_tree;
use std::time::Duration;

const HEADER: &str =
    "// Header.tsx\nexport default function Header() {\n  return <header>Header Component</header>;\n}";

fn new_store() -> Store {
    Store::new(AppState::new(sample_tree().unwrap(), EditorSettings::default()))
}

fn id(s: &str) -> NodeId {
    NodeId::new(s)
}

/// Activates a file and feeds the load result back, the way the host does.
fn open(store: &mut Store, file: &str, content: &str) -> Vec<Effect> {
    let result = store.dispatch(Action::ActivateNode(id(file)));
    let mut effects = result.effects;
    assert!(matches!(
        effects.last(),
        Some(Effect::LoadContent { file_id }) if file_id == &id(file)
    ));
    effects.pop();
    let loaded = store.dispatch(Action::DocumentLoaded {
        file_id: id(file),
        content: content.to_string(),
    });
    effects.extend(loaded.effects);
    effects
}

fn live_pulse(store: &Store) -> PulseId {
    store.state().autosave.live().unwrap()
}

#[test]
fn test_activate_file_emits_load_then_start() {
    let mut store = new_store();

    let result = store.dispatch(Action::ActivateNode(id("6")));
    assert!(result.state_changed);
    assert_eq!(result.effects, vec![Effect::LoadContent { file_id: id("6") }]);

    let result = store.dispatch(Action::DocumentLoaded {
        file_id: id("6"),
        content: HEADER.to_string(),
    });
    let pulse = live_pulse(&store);
    assert_eq!(
        result.effects,
        vec![Effect::StartAutosave {
            pulse,
            interval: Duration::from_millis(3000),
        }]
    );
    assert_eq!(store.state().session.active_file_id(), Some(&id("6")));
    assert_eq!(store.state().session.line_count(), 4);
}

#[test]
fn test_edit_updates_line_count() {
    let mut store = new_store();
    open(&mut store, "6", HEADER);

    let result = store.dispatch(Action::Edit("a".to_string()));
    assert!(result.state_changed);
    assert_eq!(store.state().session.buffer(), "a");
    assert_eq!(store.state().session.line_count(), 1);
}

#[test]
fn test_edit_restarts_pulse() {
    let mut store = new_store();
    open(&mut store, "6", HEADER);
    let first = live_pulse(&store);

    let result = store.dispatch(Action::Edit("a".to_string()));
    let second = live_pulse(&store);

    assert_ne!(first, second);
    assert_eq!(
        result.effects,
        vec![
            Effect::CancelAutosave { pulse: first },
            Effect::StartAutosave {
                pulse: second,
                interval: Duration::from_millis(3000),
            },
        ]
    );

    let stale = store.dispatch(Action::AutosaveFired {
        pulse: first,
        at: Instant::now(),
    });
    assert!(stale.effects.is_empty());
}

#[test]
fn test_unchanged_edit_keeps_pulse() {
    let mut store = new_store();
    open(&mut store, "6", HEADER);
    let pulse = live_pulse(&store);

    let result = store.dispatch(Action::Edit(HEADER.to_string()));

    assert!(!result.state_changed);
    assert!(result.effects.is_empty());
    assert!(store.state().autosave.is_live(pulse));
}

#[test]
fn test_edit_with_autosave_off_starts_nothing() {
    let mut store = new_store();
    store.dispatch(Action::ApplySettings(EditorSettings {
        auto_save: false,
        ..EditorSettings::default()
    }));
    open(&mut store, "6", HEADER);

    let result = store.dispatch(Action::Edit("a".to_string()));

    assert!(result.state_changed);
    assert!(result.effects.is_empty());
    assert!(store.state().autosave.live().is_none());
}

#[test]
fn test_edit_without_document_is_ignored() {
    let mut store = new_store();
    let result = store.dispatch(Action::Edit("text".to_string()));
    assert!(!result.state_changed);
    assert_eq!(store.state().session.buffer(), "");
}

#[test]
fn test_switching_files_cancels_previous_pulse_first() {
    let mut store = new_store();
    open(&mut store, "2", "main");
    let first = live_pulse(&store);

    let effects = open(&mut store, "3", "app");
    let second = live_pulse(&store);

    assert_ne!(first, second);
    assert_eq!(
        effects,
        vec![
            Effect::CancelAutosave { pulse: first },
            Effect::StartAutosave {
                pulse: second,
                interval: Duration::from_millis(3000),
            },
        ]
    );
    assert_eq!(store.state().session.buffer(), "app");
}

#[test]
fn test_reactivating_same_file_discards_edits() {
    // Observed behavior: no shortcut when the file is already open.
    let mut store = new_store();
    open(&mut store, "6", HEADER);
    store.dispatch(Action::Edit("unsaved".to_string()));
    let first = live_pulse(&store);

    let effects = open(&mut store, "6", HEADER);

    assert_eq!(effects[0], Effect::CancelAutosave { pulse: first });
    assert_eq!(store.state().session.buffer(), HEADER);
    assert_eq!(store.state().session.line_count(), 4);
    assert!(!store.state().session.is_dirty());
}

#[test]
fn test_activate_folder_only_toggles_expansion() {
    let mut store = new_store();
    open(&mut store, "6", HEADER);
    store.dispatch(Action::Edit("edited".to_string()));
    let pulse = live_pulse(&store);

    assert!(store.state().explorer.is_expanded(&id("1")));
    let result = store.dispatch(Action::ActivateNode(id("1")));

    assert!(result.state_changed);
    assert!(result.effects.is_empty());
    assert!(!store.state().explorer.is_expanded(&id("1")));
    assert_eq!(store.state().session.active_file_id(), Some(&id("6")));
    assert_eq!(store.state().session.buffer(), "edited");
    assert!(store.state().autosave.is_live(pulse));
}

#[test]
fn test_activate_unknown_node_is_noop() {
    let mut store = new_store();
    let result = store.dispatch(Action::ActivateNode(id("nope")));
    assert!(!result.state_changed);
    assert!(result.effects.is_empty());
}

#[test]
fn test_loaded_content_for_folder_is_rejected() {
    let mut store = new_store();
    let result = store.dispatch(Action::DocumentLoaded {
        file_id: id("1"),
        content: "x".to_string(),
    });
    assert!(!result.state_changed);
    assert!(!store.state().session.is_open());
    assert!(store.state().autosave.live().is_none());
}

#[test]
fn test_autosave_fire_flushes_non_empty_buffer() {
    let mut store = new_store();
    open(&mut store, "6", HEADER);
    store.dispatch(Action::Edit("a".to_string()));
    let pulse = live_pulse(&store);
    let at = Instant::now();

    let result = store.dispatch(Action::AutosaveFired { pulse, at });

    assert_eq!(
        result.effects,
        vec![Effect::Flush {
            file_id: id("6"),
            content: "a".to_string(),
        }]
    );
    assert_eq!(store.state().session.last_flushed_at(), Some(at));
}

#[test]
fn test_autosave_fire_with_empty_buffer_does_nothing() {
    let mut store = new_store();
    open(&mut store, "6", HEADER);
    store.dispatch(Action::Edit(String::new()));
    let pulse = live_pulse(&store);

    let result = store.dispatch(Action::AutosaveFired {
        pulse,
        at: Instant::now(),
    });

    assert!(result.effects.is_empty());
    assert!(!result.state_changed);
    assert!(store.state().session.last_flushed_at().is_none());
    assert!(store.state().autosave.is_live(pulse));
}

#[test]
fn test_tick_from_cancelled_pulse_is_dropped() {
    let mut store = new_store();
    open(&mut store, "2", "main");
    let stale = live_pulse(&store);
    open(&mut store, "3", "app");

    let result = store.dispatch(Action::AutosaveFired {
        pulse: stale,
        at: Instant::now(),
    });

    assert!(result.effects.is_empty());
    assert!(store.state().session.last_flushed_at().is_none());
}

#[test]
fn test_close_cancels_and_resets() {
    let mut store = new_store();
    open(&mut store, "6", HEADER);
    let pulse = live_pulse(&store);
    store.dispatch(Action::AutosaveFired {
        pulse,
        at: Instant::now(),
    });

    let result = store.dispatch(Action::CloseDocument);

    assert_eq!(result.effects, vec![Effect::CancelAutosave { pulse }]);
    let session = &store.state().session;
    assert!(session.active_file_id().is_none());
    assert_eq!(session.buffer(), "");
    assert_eq!(session.line_count(), 1);
    assert!(session.last_flushed_at().is_none());
    assert!(store.state().autosave.live().is_none());

    let again = store.dispatch(Action::CloseDocument);
    assert!(!again.state_changed);
    assert!(again.effects.is_empty());
}

#[test]
fn test_disabling_autosave_cancels_and_open_skips_start() {
    let mut store = new_store();
    open(&mut store, "6", HEADER);
    let pulse = live_pulse(&store);

    let settings = EditorSettings {
        auto_save: false,
        ..EditorSettings::default()
    };
    let result = store.dispatch(Action::ApplySettings(settings));
    assert_eq!(result.effects, vec![Effect::CancelAutosave { pulse }]);

    let effects = open(&mut store, "2", "main");
    assert!(effects.is_empty());
    assert!(store.state().autosave.live().is_none());
}

#[test]
fn test_changing_interval_restarts_pulse() {
    let mut store = new_store();
    open(&mut store, "6", HEADER);
    let first = live_pulse(&store);

    let settings = EditorSettings {
        autosave_interval_ms: 1000,
        ..EditorSettings::default()
    };
    let result = store.dispatch(Action::ApplySettings(settings));
    let second = live_pulse(&store);

    assert_eq!(
        result.effects,
        vec![
            Effect::CancelAutosave { pulse: first },
            Effect::StartAutosave {
                pulse: second,
                interval: Duration::from_millis(1000),
            },
        ]
    );
}

#[test]
fn test_cosmetic_settings_do_not_touch_pulse() {
    let mut store = new_store();
    open(&mut store, "6", HEADER);
    let pulse = live_pulse(&store);

    let settings = EditorSettings {
        font_size: 18,
        word_wrap: false,
        ..EditorSettings::default()
    };
    let result = store.dispatch(Action::ApplySettings(settings));

    assert!(result.state_changed);
    assert!(result.effects.is_empty());
    assert!(store.state().autosave.is_live(pulse));
    assert_eq!(store.state().settings.font_size, 18);
}

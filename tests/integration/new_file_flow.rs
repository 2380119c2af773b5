use super::support::keyboard::{ScriptedKeyboard, Step};
use super::{at, IntegrationHarness};
use anyhow::Result;
use notestamp::events::CommandOutcomeKind;
use notestamp::prompt::{Key, KeyPress, Modifiers};
use notestamp::{CommandId, CommandOutcome};
use std::fs;

#[test]
fn typed_name_creates_empty_markdown_note() -> Result<()> {
    let harness = IntegrationHarness::new();
    let mut commands = harness.commands(at(2024, 5, 2, 14, 7));
    let mut keyboard = ScriptedKeyboard::typing("2024-05-02 1407 - Groceries");

    let outcome = commands.run(CommandId::NewFile, &mut keyboard, None)?;

    assert_eq!(keyboard.seen_titles, vec!["File name:".to_string()]);
    assert_eq!(
        keyboard.seen_initial_values,
        vec!["2024-05-02 1407 - ".to_string()]
    );
    let note = outcome.created().expect("note should be created");
    assert_eq!(note.extension, "md");
    let written = fs::read(harness.vault_path().join("2024-05-02 1407 - Groceries.md"))?;
    assert!(written.is_empty());

    let events = harness.log().load_events()?;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].command, CommandId::NewFile);
    assert_eq!(events[0].outcome, CommandOutcomeKind::Created);
    Ok(())
}

#[test]
fn shift_enter_does_not_submit() -> Result<()> {
    let harness = IntegrationHarness::new();
    let mut commands = harness.commands(at(2024, 5, 2, 14, 7));
    let shift = Modifiers {
        shift: true,
        ..Modifiers::default()
    };
    let mut keyboard = ScriptedKeyboard::new(vec![
        Step::Type("Draft".into()),
        Step::Press(KeyPress::with_modifiers(Key::Enter, shift)),
        Step::ClickAway,
    ]);

    let outcome = commands.new_file(&mut keyboard)?;

    assert_eq!(outcome, CommandOutcome::Cancelled);
    assert_eq!(fs::read_dir(harness.vault_path())?.count(), 0);
    let events = harness.log().load_events()?;
    assert_eq!(events[0].outcome, CommandOutcomeKind::Cancelled);
    Ok(())
}

#[test]
fn ok_button_submits_without_edits() -> Result<()> {
    let harness = IntegrationHarness::new();
    let mut commands = harness.commands(at(2025, 12, 31, 23, 59));
    let mut keyboard = ScriptedKeyboard::new(vec![Step::ClickOk]);

    let outcome = commands.new_file(&mut keyboard)?;

    assert_eq!(
        outcome.created().map(|note| note.basename.as_str()),
        Some("2025-12-31 2359 - ")
    );
    Ok(())
}

#[test]
fn name_collision_surfaces_as_command_error() -> Result<()> {
    let harness = IntegrationHarness::new();
    fs::create_dir_all(harness.vault_path())?;
    fs::write(harness.vault_path().join("Taken.md"), b"keep me")?;
    let mut commands = harness.commands(at(2024, 5, 2, 14, 7));

    let outcome = commands.new_file(&mut ScriptedKeyboard::typing("Taken"));

    let err = outcome.expect_err("collision should fail the command");
    assert!(format!("{err:#}").contains("already exists"));
    assert_eq!(fs::read(harness.vault_path().join("Taken.md"))?, b"keep me");
    let events = harness.log().load_events()?;
    assert_eq!(events[0].outcome, CommandOutcomeKind::Failed);
    Ok(())
}

use checklist_app::{parse_command, render, Command, CommandError};
use checklist_core::{update, Check, ChecklistState, HeaderMsg, Msg, SequentialIds};

fn loaded() -> ChecklistState {
    let checks = vec![
        Check::new("milk"),
        Check {
            title: "eggs".to_string(),
            detail: Some("a dozen".to_string()),
        },
    ];
    update(ChecklistState::new(), Msg::FetchSucceeded(checks), &mut SequentialIds::new()).0
}

#[test]
fn toggle_uses_one_based_rows() {
    let view = loaded().view();

    let command = parse_command("toggle 2", &view).expect("parsed");

    assert_eq!(command, Command::Send(Msg::ToggleCheck(view.rows[1].id)));
}

#[test]
fn toggle_rejects_bad_rows() {
    let view = loaded().view();

    assert_eq!(parse_command("toggle 0", &view), Err(CommandError::NoSuchRow(0)));
    assert_eq!(parse_command("toggle 3", &view), Err(CommandError::NoSuchRow(3)));
    assert_eq!(
        parse_command("toggle two", &view),
        Err(CommandError::InvalidIndex("two".to_string()))
    );
    assert_eq!(
        parse_command("toggle", &view),
        Err(CommandError::MissingArgument("toggle"))
    );
}

#[test]
fn simple_commands_map_to_messages() {
    let view = ChecklistState::new().view();
    let cases = [
        ("button", Msg::ActionButtonPressed),
        ("add", Msg::AddTapped),
        ("star", Msg::StarTapped),
        ("confirm", Msg::ConfirmAdd),
        ("dismiss", Msg::ConfirmationDismissed),
        ("modal", Msg::Header(HeaderMsg::ShowModal)),
        ("refresh", Msg::Appear),
        ("icon person", Msg::Header(HeaderMsg::UserIconChanged("person".to_string()))),
    ];

    for (input, expected) in cases {
        assert_eq!(parse_command(input, &view), Ok(Command::Send(expected)), "{input}");
    }
    assert_eq!(parse_command("quit", &view), Ok(Command::Quit));
    assert_eq!(parse_command("   ", &view), Err(CommandError::Empty));
    assert_eq!(
        parse_command("fly", &view),
        Err(CommandError::Unknown("fly".to_string()))
    );
}

#[test]
fn render_shows_rows_button_and_prompt() {
    let mut ids = SequentialIds::new();
    let state = loaded();
    let first = state.view().rows[0].id;
    let (state, _) = update(state, Msg::ToggleCheck(first), &mut ids);
    let (state, _) = update(state, Msg::ShowConfirmation, &mut ids);

    let lines = render(&state.view());

    assert_eq!(lines[0], "== CheckList ==");
    assert_eq!(lines[1], "  1. [x] milk");
    assert_eq!(lines[2], "  2. [ ] eggs (a dozen)");
    assert_eq!(lines[3], "Selected 1/2  ( 1 )");
    assert_eq!(lines[4], "? Add a check?  [No] dismiss  [Add] confirm");
}

#[test]
fn render_empty_list_shows_star() {
    let lines = render(&ChecklistState::new().view());

    assert_eq!(
        lines,
        vec![
            "== CheckList ==".to_string(),
            "  (no checks)".to_string(),
            "Selected 0/0  ( * )".to_string(),
        ]
    );
}

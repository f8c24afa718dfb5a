//! Editor state and the reducer that applies user actions to it
//!
//! All edits go through [`reduce`], which takes the current state by
//! reference and hands back a new one. Side effects the shell has to carry
//! out (persisting a snapshot, showing a share link) come back as an
//! [`Effect`] instead of being performed here.

use super::charter::{Charter, Decision, DecisionRight, Direction, Measure, MeasureVerb, Role};
use super::error::EditError;
use super::identifier::{CharterId, DEFAULT_SHARE_BASE};
use super::update::{appended, swapped, toggled, updated};

/// Whether the form accepts edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Editing,
    ReadOnly,
}

/// Everything the editor owns for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    pub charter: Charter,
    pub mode: Mode,
    pub charter_id: CharterId,
    /// Prefix the identifier is appended to when sharing
    pub share_base: String,
}

impl EditorState {
    /// Start a session with an empty charter and a fresh identifier
    pub fn new(share_base: impl Into<String>) -> Self {
        Self::with_id(CharterId::generate(), share_base)
    }

    pub fn with_id(charter_id: CharterId, share_base: impl Into<String>) -> Self {
        Self {
            charter: Charter::new(),
            mode: Mode::Editing,
            charter_id,
            share_base: share_base.into(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.mode == Mode::Editing
    }

    pub fn share_url(&self) -> String {
        self.charter_id.share_url(&self.share_base)
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(DEFAULT_SHARE_BASE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeasureEdit {
    Verb(MeasureVerb),
    Description(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecisionEdit {
    Name(String),
    /// Add the right if absent, remove it if present
    ToggleRight(DecisionRight),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleEdit {
    Name(String),
    Focus(String),
}

/// Something the user did to the charter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetMission(String),
    AddFocusArea,
    SetFocusArea { index: usize, value: String },
    MoveFocusArea { index: usize, direction: Direction },
    AddMeasure,
    SetMeasure { index: usize, edit: MeasureEdit },
    AddDecision,
    SetDecision { index: usize, edit: DecisionEdit },
    AddRole,
    SetRole { index: usize, edit: RoleEdit },
    /// Lock the form and hand the charter to the sink
    Save,
    /// Unlock the form again
    Edit,
    Share,
}

impl Action {
    /// Whether this action changes the charter itself
    pub fn mutates_charter(&self) -> bool {
        !matches!(self, Action::Save | Action::Edit | Action::Share)
    }
}

/// Work the shell must do after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Snapshot of the charter at save time
    Persist(Charter),
    ShowShareUrl(String),
}

/// Result of applying one action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub state: EditorState,
    pub effect: Option<Effect>,
}

impl Outcome {
    fn quiet(state: EditorState) -> Self {
        Self {
            state,
            effect: None,
        }
    }
}

/// Apply `action` to `state`, producing the next state.
///
/// Charter edits are rejected with [`EditError::ReadOnly`] once the form has
/// been saved. On error the caller keeps its current state.
pub fn reduce(state: &EditorState, action: Action) -> Result<Outcome, EditError> {
    if action.mutates_charter() && !state.is_editing() {
        return Err(EditError::ReadOnly);
    }

    let charter = &state.charter;
    let with_charter = |charter: Charter| EditorState {
        charter,
        ..state.clone()
    };

    let outcome = match action {
        Action::SetMission(mission) => Outcome::quiet(with_charter(Charter {
            mission,
            ..charter.clone()
        })),
        Action::AddFocusArea => Outcome::quiet(with_charter(Charter {
            focus_areas: appended(&charter.focus_areas, String::new()),
            ..charter.clone()
        })),
        Action::SetFocusArea { index, value } => {
            let focus_areas = updated(&charter.focus_areas, "focus areas", index, |area| {
                *area = value
            })?;
            Outcome::quiet(with_charter(Charter {
                focus_areas,
                ..charter.clone()
            }))
        }
        Action::MoveFocusArea { index, direction } => {
            let focus_areas = swapped(&charter.focus_areas, index, direction)?;
            Outcome::quiet(with_charter(Charter {
                focus_areas,
                ..charter.clone()
            }))
        }
        Action::AddMeasure => Outcome::quiet(with_charter(Charter {
            measures: appended(&charter.measures, Measure::default()),
            ..charter.clone()
        })),
        Action::SetMeasure { index, edit } => {
            let measures = updated(&charter.measures, "measures", index, |measure| match edit {
                MeasureEdit::Verb(verb) => measure.verb = Some(verb),
                MeasureEdit::Description(description) => measure.description = description,
            })?;
            Outcome::quiet(with_charter(Charter {
                measures,
                ..charter.clone()
            }))
        }
        Action::AddDecision => Outcome::quiet(with_charter(Charter {
            decisions: appended(&charter.decisions, Decision::default()),
            ..charter.clone()
        })),
        Action::SetDecision { index, edit } => {
            let decisions = updated(&charter.decisions, "decisions", index, |decision| {
                match edit {
                    DecisionEdit::Name(name) => decision.name = name,
                    DecisionEdit::ToggleRight(right) => {
                        decision.rights = toggled(&decision.rights, right)
                    }
                }
            })?;
            Outcome::quiet(with_charter(Charter {
                decisions,
                ..charter.clone()
            }))
        }
        Action::AddRole => Outcome::quiet(with_charter(Charter {
            roles: appended(&charter.roles, Role::default()),
            ..charter.clone()
        })),
        Action::SetRole { index, edit } => {
            let roles = updated(&charter.roles, "roles", index, |role| match edit {
                RoleEdit::Name(name) => role.name = name,
                RoleEdit::Focus(focus) => role.focus = focus,
            })?;
            Outcome::quiet(with_charter(Charter {
                roles,
                ..charter.clone()
            }))
        }
        Action::Save => match state.mode {
            Mode::ReadOnly => Outcome::quiet(state.clone()),
            Mode::Editing => Outcome {
                state: EditorState {
                    mode: Mode::ReadOnly,
                    ..state.clone()
                },
                effect: Some(Effect::Persist(charter.clone())),
            },
        },
        Action::Edit => Outcome::quiet(EditorState {
            mode: Mode::Editing,
            ..state.clone()
        }),
        Action::Share => Outcome {
            state: state.clone(),
            effect: Some(Effect::ShowShareUrl(state.share_url())),
        },
    };

    Ok(outcome)
}

/// Apply a sequence of actions, stopping at the first rejected one
#[allow(dead_code)]
pub fn reduce_all(
    state: &EditorState,
    actions: impl IntoIterator<Item = Action>,
) -> Result<(EditorState, Vec<Effect>), EditError> {
    let mut current = state.clone();
    let mut effects = Vec::new();
    for action in actions {
        let outcome = reduce(&current, action)?;
        current = outcome.state;
        effects.extend(outcome.effect);
    }
    Ok((current, effects))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn fresh() -> EditorState {
        let mut picks = [0, 0, 0].into_iter();
        let id = CharterId::generate_with(|_| picks.next().unwrap_or(0));
        EditorState::with_id(id, DEFAULT_SHARE_BASE)
    }

    fn apply(state: &EditorState, actions: Vec<Action>) -> EditorState {
        reduce_all(state, actions).unwrap().0
    }

    fn with_focus_areas(areas: &[&str]) -> EditorState {
        let mut actions = Vec::new();
        for (index, area) in areas.iter().enumerate() {
            actions.push(Action::AddFocusArea);
            actions.push(Action::SetFocusArea {
                index,
                value: area.to_string(),
            });
        }
        apply(&fresh(), actions)
    }

    fn rights(state: &EditorState, index: usize) -> BTreeSet<DecisionRight> {
        state.charter.decisions[index].rights.clone()
    }

    fn toggle(index: usize, right: &str) -> Action {
        Action::SetDecision {
            index,
            edit: DecisionEdit::ToggleRight(right.parse().unwrap()),
        }
    }

    #[test]
    fn test_set_mission_accepts_empty() {
        let state = apply(&fresh(), vec![Action::SetMission("Ship it".to_string())]);
        assert_eq!(state.charter.mission, "Ship it");
        let state = apply(&state, vec![Action::SetMission(String::new())]);
        assert_eq!(state.charter.mission, "");
    }

    #[test]
    fn test_focus_areas_track_adds_and_last_set() {
        let state = apply(
            &fresh(),
            vec![
                Action::AddFocusArea,
                Action::AddFocusArea,
                Action::SetFocusArea {
                    index: 0,
                    value: "first".to_string(),
                },
                Action::AddFocusArea,
                Action::SetFocusArea {
                    index: 0,
                    value: "again".to_string(),
                },
                Action::SetFocusArea {
                    index: 2,
                    value: "third".to_string(),
                },
            ],
        );
        assert_eq!(state.charter.focus_areas, vec!["again", "", "third"]);
    }

    #[test]
    fn test_set_focus_area_out_of_range() {
        let state = with_focus_areas(&["A"]);
        let err = reduce(
            &state,
            Action::SetFocusArea {
                index: 1,
                value: "B".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            EditError::IndexOutOfRange {
                list: "focus areas",
                index: 1,
                len: 1
            }
        );
    }

    #[test]
    fn test_move_focus_area_scenario() {
        let state = with_focus_areas(&["A", "B", "C"]);
        let state = apply(
            &state,
            vec![Action::MoveFocusArea {
                index: 1,
                direction: Direction::Up,
            }],
        );
        assert_eq!(state.charter.focus_areas, vec!["B", "A", "C"]);
        let state = apply(
            &state,
            vec![Action::MoveFocusArea {
                index: 0,
                direction: Direction::Down,
            }],
        );
        assert_eq!(state.charter.focus_areas, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_move_down_then_up_restores() {
        let original = with_focus_areas(&["w", "x", "y", "z"]);
        for i in 0..3 {
            let state = apply(
                &original,
                vec![
                    Action::MoveFocusArea {
                        index: i,
                        direction: Direction::Down,
                    },
                    Action::MoveFocusArea {
                        index: i + 1,
                        direction: Direction::Up,
                    },
                ],
            );
            assert_eq!(state.charter.focus_areas, original.charter.focus_areas);
        }
    }

    #[test]
    fn test_move_out_of_range_is_rejected() {
        let state = with_focus_areas(&["A", "B"]);
        let up = reduce(
            &state,
            Action::MoveFocusArea {
                index: 0,
                direction: Direction::Up,
            },
        );
        assert_eq!(
            up.unwrap_err(),
            EditError::MoveOutOfRange {
                index: 0,
                direction: Direction::Up,
                len: 2
            }
        );
        let down = reduce(
            &state,
            Action::MoveFocusArea {
                index: 1,
                direction: Direction::Down,
            },
        );
        assert!(down.is_err());
        assert_eq!(state.charter.focus_areas, vec!["A", "B"]);
    }

    #[test]
    fn test_measures() {
        let state = apply(
            &fresh(),
            vec![
                Action::AddMeasure,
                Action::SetMeasure {
                    index: 0,
                    edit: MeasureEdit::Verb("Decrease".parse().unwrap()),
                },
                Action::SetMeasure {
                    index: 0,
                    edit: MeasureEdit::Description("churn".to_string()),
                },
                Action::AddMeasure,
            ],
        );
        assert_eq!(
            state.charter.measures,
            vec![
                Measure {
                    verb: Some(MeasureVerb::Decrease),
                    description: "churn".to_string(),
                },
                Measure::default(),
            ]
        );
    }

    #[test]
    fn test_decision_rights_scenario() {
        let state = apply(
            &fresh(),
            vec![
                Action::AddDecision,
                toggle(0, "Consults"),
                toggle(0, "Decides"),
            ],
        );
        assert_eq!(
            rights(&state, 0),
            [DecisionRight::Consults, DecisionRight::Decides]
                .into_iter()
                .collect()
        );
        let state = apply(&state, vec![toggle(0, "Consults")]);
        assert_eq!(rights(&state, 0), [DecisionRight::Decides].into_iter().collect());
    }

    #[test]
    fn test_toggle_twice_restores_rights() {
        let start = apply(
            &fresh(),
            vec![Action::AddDecision, toggle(0, "Informs")],
        );
        for right in DecisionRight::ALL {
            let state = apply(&start, vec![toggle(0, right.as_str()), toggle(0, right.as_str())]);
            assert_eq!(rights(&state, 0), rights(&start, 0));
        }
    }

    #[test]
    fn test_decision_name_keeps_rights() {
        let state = apply(
            &fresh(),
            vec![
                Action::AddDecision,
                toggle(0, "Executes"),
                Action::SetDecision {
                    index: 0,
                    edit: DecisionEdit::Name("Budget".to_string()),
                },
            ],
        );
        assert_eq!(state.charter.decisions[0].name, "Budget");
        assert_eq!(rights(&state, 0), [DecisionRight::Executes].into_iter().collect());
    }

    #[test]
    fn test_roles() {
        let state = apply(
            &fresh(),
            vec![
                Action::SetRole {
                    index: 0,
                    edit: RoleEdit::Name("Lead".to_string()),
                },
                Action::AddRole,
                Action::SetRole {
                    index: 1,
                    edit: RoleEdit::Focus("Ops".to_string()),
                },
            ],
        );
        assert_eq!(state.charter.roles.len(), 2);
        assert_eq!(state.charter.roles[0].name, "Lead");
        assert_eq!(state.charter.roles[1].focus, "Ops");
        assert!(reduce(
            &state,
            Action::SetRole {
                index: 2,
                edit: RoleEdit::Name("x".to_string())
            }
        )
        .is_err());
    }

    #[test]
    fn test_save_empty_charter_locks_and_persists() {
        let state = fresh();
        let outcome = reduce(&state, Action::Save).unwrap();
        assert_eq!(outcome.state.mode, Mode::ReadOnly);
        assert_eq!(outcome.effect, Some(Effect::Persist(Charter::new())));
    }

    #[test]
    fn test_save_is_idempotent() {
        let (state, effects) = reduce_all(&fresh(), vec![Action::Save, Action::Save]).unwrap();
        assert_eq!(state.mode, Mode::ReadOnly);
        assert_eq!(effects.len(), 1);
    }

    #[test]
    fn test_read_only_rejects_edits() {
        let state = apply(&fresh(), vec![Action::AddFocusArea, Action::Save]);
        assert_eq!(reduce(&state, Action::AddMeasure).unwrap_err(), EditError::ReadOnly);
        assert_eq!(
            reduce(&state, Action::SetMission("late".to_string())).unwrap_err(),
            EditError::ReadOnly
        );
        assert!(reduce(&state, Action::Share).is_ok());
    }

    #[test]
    fn test_edit_unlocks_after_save() {
        let state = apply(&fresh(), vec![Action::Save, Action::Edit, Action::AddRole]);
        assert_eq!(state.mode, Mode::Editing);
        assert_eq!(state.charter.roles.len(), 2);
    }

    #[test]
    fn test_share_does_not_change_state() {
        let state = apply(&fresh(), vec![Action::AddDecision]);
        let outcome = reduce(&state, Action::Share).unwrap();
        assert_eq!(outcome.state, state);
        assert_eq!(
            outcome.effect,
            Some(Effect::ShowShareUrl(
                "https://teamcharter.com/p/draft-glass-red".to_string()
            ))
        );
    }

    #[test]
    fn test_reduce_leaves_input_untouched() {
        let state = with_focus_areas(&["A", "B"]);
        let before = state.clone();
        let _ = reduce(
            &state,
            Action::MoveFocusArea {
                index: 0,
                direction: Direction::Down,
            },
        )
        .unwrap();
        let _ = reduce(&state, Action::Save).unwrap();
        assert_eq!(state, before);
    }
}

//! Charter form panel
//!
//! The form never edits the charter directly. Each widget works on a scratch
//! copy of its field and reports changes as [`Action`]s, which the app feeds
//! through the reducer after the frame is laid out.

use eframe::egui::{self, Ui};

use crate::core::charter::{Charter, DecisionRight, Direction, MeasureVerb};
use crate::core::editor::{Action, DecisionEdit, EditorState, MeasureEdit, RoleEdit};

/// Charter form panel
pub struct CharterForm;

impl CharterForm {
    /// Show the form and return the actions the user triggered this frame
    pub fn show(ui: &mut Ui, state: &EditorState) -> Vec<Action> {
        let mut actions = Vec::new();
        let editing = state.is_editing();
        let charter = &state.charter;

        ui.vertical_centered(|ui| {
            ui.heading("Team Charter");
        });
        ui.add_space(12.0);

        Self::show_mission(ui, charter, editing, &mut actions);
        ui.add_space(12.0);
        Self::show_focus_areas(ui, charter, editing, &mut actions);
        ui.add_space(12.0);
        Self::show_measures(ui, charter, editing, &mut actions);
        ui.add_space(12.0);
        Self::show_decisions(ui, charter, editing, &mut actions);
        ui.add_space(12.0);
        Self::show_roles(ui, charter, editing, &mut actions);
        ui.add_space(16.0);
        ui.separator();
        Self::show_footer(ui, editing, &mut actions);

        actions
    }

    fn show_mission(ui: &mut Ui, charter: &Charter, editing: bool, actions: &mut Vec<Action>) {
        ui.strong("Mission");
        let mut mission = charter.mission.clone();
        let response = ui.add_enabled(
            editing,
            egui::TextEdit::multiline(&mut mission)
                .hint_text("Enter team mission...")
                .desired_width(f32::INFINITY)
                .desired_rows(3),
        );
        if response.changed() {
            actions.push(Action::SetMission(mission));
        }
    }

    fn show_focus_areas(ui: &mut Ui, charter: &Charter, editing: bool, actions: &mut Vec<Action>) {
        ui.strong("Focus Areas");
        let last = charter.focus_areas.len().saturating_sub(1);

        for (index, area) in charter.focus_areas.iter().enumerate() {
            ui.horizontal(|ui| {
                let mut value = area.clone();
                // Leave room for the move buttons
                let width = if editing {
                    ui.available_width() - 64.0
                } else {
                    ui.available_width()
                };
                let response = ui.add_enabled(
                    editing,
                    egui::TextEdit::singleline(&mut value)
                        .hint_text(format!("Focus Area {}", index + 1))
                        .desired_width(width),
                );
                if response.changed() {
                    actions.push(Action::SetFocusArea { index, value });
                }

                if editing {
                    if ui
                        .add_enabled(index > 0, egui::Button::new("\u{2191}"))
                        .on_hover_text("Move up")
                        .clicked()
                    {
                        actions.push(Action::MoveFocusArea {
                            index,
                            direction: Direction::Up,
                        });
                    }
                    if ui
                        .add_enabled(index < last, egui::Button::new("\u{2193}"))
                        .on_hover_text("Move down")
                        .clicked()
                    {
                        actions.push(Action::MoveFocusArea {
                            index,
                            direction: Direction::Down,
                        });
                    }
                }
            });
        }

        if editing && ui.button("+ Add Focus Area").clicked() {
            actions.push(Action::AddFocusArea);
        }
    }

    fn show_measures(ui: &mut Ui, charter: &Charter, editing: bool, actions: &mut Vec<Action>) {
        ui.strong("Measures");

        for (index, measure) in charter.measures.iter().enumerate() {
            ui.horizontal(|ui| {
                ui.add_enabled_ui(editing, |ui| {
                    let selected = measure.verb.map_or("Select verb", MeasureVerb::as_str);
                    egui::ComboBox::from_id_salt(("measure_verb", index))
                        .selected_text(selected)
                        .width(140.0)
                        .show_ui(ui, |ui| {
                            for verb in MeasureVerb::ALL {
                                if ui
                                    .selectable_label(measure.verb == Some(verb), verb.as_str())
                                    .clicked()
                                {
                                    actions.push(Action::SetMeasure {
                                        index,
                                        edit: MeasureEdit::Verb(verb),
                                    });
                                }
                            }
                        });
                });

                let mut description = measure.description.clone();
                let response = ui.add_enabled(
                    editing,
                    egui::TextEdit::singleline(&mut description)
                        .hint_text("Measure description")
                        .desired_width(f32::INFINITY),
                );
                if response.changed() {
                    actions.push(Action::SetMeasure {
                        index,
                        edit: MeasureEdit::Description(description),
                    });
                }
            });
        }

        if editing && ui.button("+ Add Measure").clicked() {
            actions.push(Action::AddMeasure);
        }
    }

    fn show_decisions(ui: &mut Ui, charter: &Charter, editing: bool, actions: &mut Vec<Action>) {
        ui.strong("Decisions");

        for (index, decision) in charter.decisions.iter().enumerate() {
            ui.horizontal(|ui| {
                let mut name = decision.name.clone();
                let response = ui.add_enabled(
                    editing,
                    egui::TextEdit::singleline(&mut name)
                        .hint_text("Decision name")
                        .desired_width(220.0),
                );
                if response.changed() {
                    actions.push(Action::SetDecision {
                        index,
                        edit: DecisionEdit::Name(name),
                    });
                }

                ui.add_enabled_ui(editing, |ui| {
                    for right in DecisionRight::ALL {
                        let held = decision.rights.contains(&right);
                        if ui.selectable_label(held, right.as_str()).clicked() {
                            actions.push(Action::SetDecision {
                                index,
                                edit: DecisionEdit::ToggleRight(right),
                            });
                        }
                    }
                });
            });
        }

        if editing && ui.button("+ Add Decision").clicked() {
            actions.push(Action::AddDecision);
        }
    }

    fn show_roles(ui: &mut Ui, charter: &Charter, editing: bool, actions: &mut Vec<Action>) {
        ui.strong("Roles");

        for (index, role) in charter.roles.iter().enumerate() {
            ui.horizontal(|ui| {
                let mut name = role.name.clone();
                if ui
                    .add_enabled(
                        editing,
                        egui::TextEdit::singleline(&mut name)
                            .hint_text("Role name")
                            .desired_width(220.0),
                    )
                    .changed()
                {
                    actions.push(Action::SetRole {
                        index,
                        edit: RoleEdit::Name(name),
                    });
                }

                let mut focus = role.focus.clone();
                if ui
                    .add_enabled(
                        editing,
                        egui::TextEdit::singleline(&mut focus)
                            .hint_text("Role focus")
                            .desired_width(f32::INFINITY),
                    )
                    .changed()
                {
                    actions.push(Action::SetRole {
                        index,
                        edit: RoleEdit::Focus(focus),
                    });
                }
            });
        }

        if editing && ui.button("+ Add Role").clicked() {
            actions.push(Action::AddRole);
        }
    }

    fn show_footer(ui: &mut Ui, editing: bool, actions: &mut Vec<Action>) {
        ui.horizontal(|ui| {
            if editing {
                if ui.button("\u{1F4BE} Save").clicked() {
                    actions.push(Action::Save);
                }
            } else if ui.button("\u{270F} Edit").clicked() {
                actions.push(Action::Edit);
            }
            if ui.button("\u{1F517} Share").clicked() {
                actions.push(Action::Share);
            }
        });
    }
}

/// Settings dialog — language, monitored paths, and alert channels.
///
/// Edits go to the settings draft; nothing reaches the service until
/// "save". Closing the window any other way discards the draft.
use crate::state::{AppState, SettingsTab};
use egui::Ui;
use volumetrik_core::i18n::{tr, Locale, Text};
use volumetrik_core::settings::{AlertConfig, ThresholdType};

pub fn settings_panel(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_settings {
        return;
    }
    let locale = state.dashboard.locale();
    let t = |text| tr(locale, text);

    let mut open = true;
    let mut save = false;
    let mut cancel = false;

    egui::Window::new(t(Text::Settings))
        .id(egui::Id::new("settings_dialog"))
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .default_size([520.0, 420.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut state.settings_tab, SettingsTab::General, t(Text::General));
                ui.selectable_value(
                    &mut state.settings_tab,
                    SettingsTab::Monitoring,
                    t(Text::Monitoring),
                );
                ui.selectable_value(&mut state.settings_tab, SettingsTab::Alerts, t(Text::Alerts));
            });
            ui.separator();

            egui::ScrollArea::vertical()
                .max_height(340.0)
                .show(ui, |ui| match state.settings_tab {
                    SettingsTab::General => general_tab(ui, state, locale),
                    SettingsTab::Monitoring => monitoring_tab(ui, state, locale),
                    SettingsTab::Alerts => {
                        let alerts = &mut state.dashboard.settings_mut().draft_mut().alerts;
                        alerts_tab(ui, alerts, locale);
                    }
                });

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button(t(Text::SaveChanges)).clicked() {
                    save = true;
                }
                if ui.button(t(Text::Cancel)).clicked() {
                    cancel = true;
                }
            });
        });

    if save {
        state.save_settings();
    } else if cancel || !open {
        state.cancel_settings();
    }
}

// ── Tabs ───────────────────────────────────────────────────────────

fn general_tab(ui: &mut Ui, state: &mut AppState, locale: Locale) {
    let draft = state.dashboard.settings_mut().draft_mut();
    let selected = Locale::from_code(&draft.language);

    ui.horizontal(|ui| {
        ui.label(tr(locale, Text::Language));
        egui::ComboBox::from_id_salt("language")
            .selected_text(selected.native_name())
            .show_ui(ui, |ui| {
                for option in Locale::ALL {
                    if ui
                        .selectable_label(option == selected, option.native_name())
                        .clicked()
                    {
                        draft.language = option.code().to_string();
                    }
                }
            });
    });
}

fn monitoring_tab(ui: &mut Ui, state: &mut AppState, locale: Locale) {
    let t = |text| tr(locale, text);
    let mut remove = None;
    let mut add = false;

    {
        let monitoring = &mut state.dashboard.settings_mut().draft_mut().monitoring;
        ui.checkbox(&mut monitoring.enabled, t(Text::EnableMonitoring));
        ui.horizontal(|ui| {
            ui.label(t(Text::IntervalMinutes));
            ui.add(egui::DragValue::new(&mut monitoring.check_interval_minutes).range(1..=1440));
        });
    }

    ui.add_space(6.0);
    ui.label(egui::RichText::new(t(Text::MonitoredPaths)).strong());

    egui::Grid::new("monitored_paths")
        .num_columns(3)
        .striped(true)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            for (index, rule) in state.dashboard.settings().rules().iter().enumerate() {
                ui.label(rule.path.as_str());
                ui.label(format!(
                    "{} {} GB",
                    threshold_label(rule.threshold_type, locale),
                    rule.threshold_value
                ));
                if ui.small_button("🗑").clicked() {
                    remove = Some(index);
                }
                ui.end_row();
            }
        });

    ui.add_space(6.0);
    let form = &mut state.rule_form;
    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut form.path)
                .hint_text(t(Text::EnterPath))
                .desired_width(200.0),
        );
        egui::ComboBox::from_id_salt("threshold_type")
            .selected_text(threshold_label(form.threshold_type, locale))
            .show_ui(ui, |ui| {
                for kind in ThresholdType::ALL {
                    ui.selectable_value(&mut form.threshold_type, kind, threshold_label(kind, locale));
                }
            });
        ui.add(
            egui::DragValue::new(&mut form.threshold_value)
                .speed(1.0)
                .suffix(" GB"),
        );
        if ui.button(t(Text::Add)).clicked() {
            add = true;
        }
    });
    if let Some(error) = form.error {
        ui.label(egui::RichText::new(error).color(egui::Color32::from_rgb(0xf8, 0x71, 0x71)));
    }

    if add {
        state.add_rule();
    }
    if let Some(index) = remove {
        state.remove_rule(index);
    }
}

fn alerts_tab(ui: &mut Ui, alerts: &mut AlertConfig, locale: Locale) {
    let t = |text| tr(locale, text);

    ui.checkbox(&mut alerts.enabled, t(Text::EnableAlerts));
    ui.add_space(4.0);
    ui.label(t(Text::CustomAlertMessage));
    let mut message = alerts.custom_message.clone().unwrap_or_default();
    if ui
        .add(egui::TextEdit::multiline(&mut message).desired_rows(2))
        .changed()
    {
        alerts.custom_message = non_blank(message);
    }
    ui.add_space(6.0);

    egui::Grid::new("alert_channels")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            channel_heading(ui, "Telegram");
            optional_field(ui, t(Text::BotToken), &mut alerts.telegram_bot_token);
            optional_field(ui, t(Text::ChatId), &mut alerts.telegram_chat_id);
            channel_heading(ui, "Webhook");
            optional_field(ui, t(Text::GenericWebhookUrl), &mut alerts.webhook_url);
            channel_heading(ui, "Pushover");
            optional_field(ui, t(Text::UserKey), &mut alerts.pushover_user_key);
            optional_field(ui, t(Text::ApiToken), &mut alerts.pushover_api_token);
            channel_heading(ui, "Gotify");
            optional_field(ui, t(Text::ServerUrl), &mut alerts.gotify_url);
            optional_field(ui, t(Text::AppToken), &mut alerts.gotify_token);
            channel_heading(ui, "Slack / Discord / Teams");
            optional_field(ui, t(Text::SlackWebhookUrl), &mut alerts.slack_webhook_url);
            optional_field(ui, t(Text::DiscordWebhookUrl), &mut alerts.discord_webhook_url);
            optional_field(ui, t(Text::TeamsWebhookUrl), &mut alerts.teams_webhook_url);
            channel_heading(ui, "ntfy");
            optional_field(ui, t(Text::TopicUrl), &mut alerts.ntfy_url);
            optional_field(ui, t(Text::AccessToken), &mut alerts.ntfy_token);
        });
}

// ── Helpers ────────────────────────────────────────────────────────

fn threshold_label(kind: ThresholdType, locale: Locale) -> &'static str {
    match kind {
        ThresholdType::MaxUsed => tr(locale, Text::MaxUsed),
        ThresholdType::MinRemaining => tr(locale, Text::MinRemaining),
    }
}

fn channel_heading(ui: &mut Ui, name: &str) {
    ui.label(egui::RichText::new(name).strong());
    ui.end_row();
}

/// A text field bound to an optional value; a blank field clears it.
fn optional_field(ui: &mut Ui, label: &str, value: &mut Option<String>) {
    ui.label(label);
    let mut text = value.clone().unwrap_or_default();
    if ui
        .add(egui::TextEdit::singleline(&mut text).desired_width(280.0))
        .changed()
    {
        *value = non_blank(text);
    }
    ui.end_row();
}

fn non_blank(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::non_blank;

    #[test]
    fn blank_text_clears_the_value() {
        assert_eq!(non_blank("   ".into()), None);
        assert_eq!(non_blank("https://hooks".into()), Some("https://hooks".into()));
    }
}

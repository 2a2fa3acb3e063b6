//! Notification message formatting for generated alerts.

use chrono::{DateTime, Utc};

use activityhub_core::types::NotificationKind;
use activityhub_entity::{Activity, Notification};

use crate::engine::rules::RuleKind;

/// A notification derived by a rule, before it reaches the store and queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAlert {
    /// Dedup key, e.g. `sin-evidencia-42`.
    pub key: String,
    /// Severity of both the toast and the stored notification.
    pub kind: NotificationKind,
    /// Title.
    pub title: String,
    /// Body text.
    pub message: String,
    /// In-app path opened by the toast action and by click-through.
    pub target: String,
    /// Label of the toast action button.
    pub action_label: String,
}

impl GeneratedAlert {
    /// Convert into an unread, locally-created notification stamped `timestamp`.
    pub fn to_notification(&self, timestamp: DateTime<Utc>) -> Notification {
        let mut notification =
            Notification::new(self.kind, self.title.clone(), self.message.clone())
                .with_target(self.target.clone());
        notification.timestamp = timestamp;
        notification
    }
}

/// Formats the alerts produced by each rule.
pub struct NotificationFormatter;

impl NotificationFormatter {
    /// Activity starts tomorrow.
    pub fn starting_tomorrow(activity: &Activity) -> GeneratedAlert {
        GeneratedAlert {
            key: RuleKind::StartingTomorrow.dedup_key(activity.id),
            kind: NotificationKind::Info,
            title: "Actividad próxima".to_string(),
            message: format!("La actividad \"{}\" comienza mañana.", display_name(activity)),
            target: activity_path(activity.id, None),
            action_label: "Ver actividad".to_string(),
        }
    }

    /// Activity finished `days` days ago.
    pub fn recently_finished(activity: &Activity, days: i64) -> GeneratedAlert {
        let unit = if days == 1 { "día" } else { "días" };
        GeneratedAlert {
            key: RuleKind::RecentlyFinished.dedup_key(activity.id),
            kind: NotificationKind::Success,
            title: "Actividad finalizada".to_string(),
            message: format!(
                "La actividad \"{}\" finalizó hace {} {}.",
                display_name(activity),
                days,
                unit
            ),
            target: activity_path(activity.id, None),
            action_label: "Ver actividad".to_string(),
        }
    }

    /// Finished activity with no participation records.
    pub fn without_participation(activity: &Activity) -> GeneratedAlert {
        GeneratedAlert {
            key: RuleKind::WithoutParticipation.dedup_key(activity.id),
            kind: NotificationKind::Warning,
            title: "Actividad sin participación".to_string(),
            message: format!(
                "La actividad \"{}\" finalizó y no tiene participación registrada.",
                display_name(activity)
            ),
            target: activity_path(activity.id, Some("participacion")),
            action_label: "Registrar participación".to_string(),
        }
    }

    /// Finished activity with no evidence.
    pub fn without_evidence(activity: &Activity) -> GeneratedAlert {
        GeneratedAlert {
            key: RuleKind::WithoutEvidence.dedup_key(activity.id),
            kind: NotificationKind::Warning,
            title: "Actividad sin evidencias".to_string(),
            message: format!(
                "La actividad \"{}\" finalizó y no tiene evidencias cargadas.",
                display_name(activity)
            ),
            target: activity_path(activity.id, Some("evidencias")),
            action_label: "Subir evidencias".to_string(),
        }
    }

    /// Activity created interactively.
    pub fn new_activity(activity: &Activity, creator: Option<&str>) -> GeneratedAlert {
        let message = match creator.map(str::trim).filter(|c| !c.is_empty()) {
            Some(creator) => format!(
                "{} creó la actividad \"{}\".",
                creator,
                display_name(activity)
            ),
            None => format!("Se creó la actividad \"{}\".", display_name(activity)),
        };

        GeneratedAlert {
            key: RuleKind::NewActivity.dedup_key(activity.id),
            kind: NotificationKind::Info,
            title: "Nueva actividad".to_string(),
            message,
            target: activity_path(activity.id, None),
            action_label: "Ver actividad".to_string(),
        }
    }
}

fn display_name(activity: &Activity) -> String {
    if activity.name.trim().is_empty() {
        format!("#{}", activity.id)
    } else {
        activity.name.clone()
    }
}

fn activity_path(activity_id: i64, tab: Option<&str>) -> String {
    match tab {
        Some(tab) => format!("/actividades/{activity_id}?tab={tab}"),
        None => format!("/actividades/{activity_id}"),
    }
}

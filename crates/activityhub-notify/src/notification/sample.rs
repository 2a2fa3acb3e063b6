//! Fallback notification set used while the backend lacks the endpoint.

use chrono::{DateTime, TimeDelta, Utc};

use activityhub_core::types::NotificationKind;
use activityhub_entity::Notification;

/// Fixed sample notifications, stamped relative to `now`.
///
/// Ids, texts, kinds and read flags never change, so the UI shows the same
/// non-empty list every time the backend is unavailable.
pub fn sample_notifications(now: DateTime<Utc>) -> Vec<Notification> {
    vec![
        Notification {
            id: 1,
            title: "Bienvenido".to_string(),
            message: "Aquí verás los avisos sobre tus actividades.".to_string(),
            kind: NotificationKind::Info,
            timestamp: now - TimeDelta::minutes(5),
            read: false,
            navigation_target: None,
        },
        Notification {
            id: 2,
            title: "Recordatorio".to_string(),
            message: "Registra la participación al finalizar cada actividad.".to_string(),
            kind: NotificationKind::Warning,
            timestamp: now - TimeDelta::hours(2),
            read: false,
            navigation_target: Some("/actividades".to_string()),
        },
        Notification {
            id: 3,
            title: "Evidencias".to_string(),
            message: "Puedes adjuntar evidencias desde el detalle de la actividad.".to_string(),
            kind: NotificationKind::Success,
            timestamp: now - TimeDelta::days(1),
            read: true,
            navigation_target: Some("/actividades".to_string()),
        },
    ]
}

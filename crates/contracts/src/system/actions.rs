//! Mutation entry points for the pages.
//!
//! Every button that would change a record goes through [`HotelActions`]. The
//! trait is the integration point for a persistence backend; the named
//! operations all funnel into [`HotelActions::perform`].

use crate::data::Catalogs;
use crate::domain::a002_reservation::ReservationStatus;
use crate::domain::a008_hotel::HotelStatus;
use crate::system::settings::{AppSettings, SettingsError};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Room,
    Reservation,
    Client,
    Payment,
    MenuItem,
    InventoryItem,
    Sale,
    Hotel,
}

impl EntityKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            EntityKind::Room => "room",
            EntityKind::Reservation => "reservation",
            EntityKind::Client => "client",
            EntityKind::Payment => "payment",
            EntityKind::MenuItem => "menu item",
            EntityKind::InventoryItem => "inventory item",
            EntityKind::Sale => "sale",
            EntityKind::Hotel => "hotel",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Key of one record: room number, product name and hotel name for the
/// catalogs keyed that way, the `id` field otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordRef {
    pub kind: EntityKind,
    pub id: String,
}

impl RecordRef {
    pub fn new(kind: EntityKind, id: impl Into<String>) -> Self {
        Self { kind, id: id.into() }
    }
}

impl fmt::Display for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.id)
    }
}

/// Partial update: field name to new value.
pub type RecordPatch = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq)]
pub enum ActionRequest {
    View(RecordRef),
    Edit { target: RecordRef, patch: RecordPatch },
    Delete(RecordRef),
    CheckIn { reservation_id: String },
    Cancel { reservation_id: String },
    Restock { product_name: String },
    ToggleAvailability { menu_item_id: String },
    Suspend { hotel_name: String },
    Activate { hotel_name: String },
    DownloadInvoice { payment_id: String },
    SaveSettings(Box<AppSettings>),
}

impl ActionRequest {
    pub fn name(&self) -> &'static str {
        match self {
            ActionRequest::View(_) => "view",
            ActionRequest::Edit { .. } => "edit",
            ActionRequest::Delete(_) => "delete",
            ActionRequest::CheckIn { .. } => "check_in",
            ActionRequest::Cancel { .. } => "cancel",
            ActionRequest::Restock { .. } => "restock",
            ActionRequest::ToggleAvailability { .. } => "toggle_availability",
            ActionRequest::Suspend { .. } => "suspend",
            ActionRequest::Activate { .. } => "activate",
            ActionRequest::DownloadInvoice { .. } => "download_invoice",
            ActionRequest::SaveSettings(_) => "save_settings",
        }
    }

    /// The record the action applies to; settings have none.
    pub fn target(&self) -> Option<RecordRef> {
        let target = match self {
            ActionRequest::View(target)
            | ActionRequest::Delete(target)
            | ActionRequest::Edit { target, .. } => target.clone(),
            ActionRequest::CheckIn { reservation_id } | ActionRequest::Cancel { reservation_id } => {
                RecordRef::new(EntityKind::Reservation, reservation_id.as_str())
            }
            ActionRequest::Restock { product_name } => {
                RecordRef::new(EntityKind::InventoryItem, product_name.as_str())
            }
            ActionRequest::ToggleAvailability { menu_item_id } => {
                RecordRef::new(EntityKind::MenuItem, menu_item_id.as_str())
            }
            ActionRequest::Suspend { hotel_name } | ActionRequest::Activate { hotel_name } => {
                RecordRef::new(EntityKind::Hotel, hotel_name.as_str())
            }
            ActionRequest::DownloadInvoice { payment_id } => {
                RecordRef::new(EntityKind::Payment, payment_id.as_str())
            }
            ActionRequest::SaveSettings(_) => return None,
        };
        Some(target)
    }
}

impl fmt::Display for ActionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, self.target()) {
            (ActionRequest::Edit { patch, .. }, Some(target)) => {
                let fields: Vec<&str> = patch.keys().map(String::as_str).collect();
                write!(f, "edit {} [{}]", target, fields.join(", "))
            }
            (_, Some(target)) => write!(f, "{} {}", self.name(), target),
            (_, None) => f.write_str(self.name()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    #[error("{kind} {id:?} not found")]
    NotFound { kind: EntityKind, id: String },
    #[error("cannot {action}: {reason}")]
    NotAllowed { action: &'static str, reason: String },
    #[error("invalid settings: {0}")]
    InvalidSettings(#[from] SettingsError),
    #[error("backend error: {0}")]
    Backend(String),
}

pub type ActionResult = Result<(), ActionError>;

/// Capability set behind the page buttons.
pub trait HotelActions: Send + Sync {
    fn perform(&self, request: ActionRequest) -> ActionResult;

    fn view(&self, target: RecordRef) -> ActionResult {
        self.perform(ActionRequest::View(target))
    }

    fn edit(&self, target: RecordRef, patch: RecordPatch) -> ActionResult {
        self.perform(ActionRequest::Edit { target, patch })
    }

    fn delete(&self, target: RecordRef) -> ActionResult {
        self.perform(ActionRequest::Delete(target))
    }

    fn check_in(&self, reservation_id: &str) -> ActionResult {
        self.perform(ActionRequest::CheckIn {
            reservation_id: reservation_id.to_string(),
        })
    }

    fn cancel(&self, reservation_id: &str) -> ActionResult {
        self.perform(ActionRequest::Cancel {
            reservation_id: reservation_id.to_string(),
        })
    }

    fn restock(&self, product_name: &str) -> ActionResult {
        self.perform(ActionRequest::Restock {
            product_name: product_name.to_string(),
        })
    }

    fn toggle_availability(&self, menu_item_id: &str) -> ActionResult {
        self.perform(ActionRequest::ToggleAvailability {
            menu_item_id: menu_item_id.to_string(),
        })
    }

    fn suspend(&self, hotel_name: &str) -> ActionResult {
        self.perform(ActionRequest::Suspend {
            hotel_name: hotel_name.to_string(),
        })
    }

    fn activate(&self, hotel_name: &str) -> ActionResult {
        self.perform(ActionRequest::Activate {
            hotel_name: hotel_name.to_string(),
        })
    }

    fn download_invoice(&self, payment_id: &str) -> ActionResult {
        self.perform(ActionRequest::DownloadInvoice {
            payment_id: payment_id.to_string(),
        })
    }

    fn save_settings(&self, settings: AppSettings) -> ActionResult {
        self.perform(ActionRequest::SaveSettings(Box::new(settings)))
    }
}

fn record_exists(catalogs: &Catalogs, target: &RecordRef) -> bool {
    let id = target.id.as_str();
    match target.kind {
        EntityKind::Room => catalogs.rooms.iter().any(|r| r.number == id),
        EntityKind::Reservation => catalogs.reservation(id).is_some(),
        EntityKind::Client => catalogs.clients.iter().any(|c| c.id == id),
        EntityKind::Payment => catalogs.payments.iter().any(|p| p.id == id),
        EntityKind::MenuItem => catalogs.menu_items.iter().any(|m| m.id == id),
        EntityKind::InventoryItem => catalogs.inventory.iter().any(|i| i.product_name == id),
        EntityKind::Sale => catalogs.sales.iter().any(|s| s.id == id),
        EntityKind::Hotel => catalogs.hotel(id).is_some(),
    }
}

fn not_allowed(action: &'static str, reason: String) -> ActionError {
    ActionError::NotAllowed { action, reason }
}

/// Checks a request against the current catalogs without performing it.
pub fn validate_request(request: &ActionRequest, catalogs: &Catalogs) -> ActionResult {
    if let ActionRequest::SaveSettings(settings) = request {
        settings.validate()?;
        return Ok(());
    }

    if let Some(target) = request.target() {
        if !record_exists(catalogs, &target) {
            return Err(ActionError::NotFound {
                kind: target.kind,
                id: target.id,
            });
        }
    }

    match request {
        ActionRequest::Edit { patch, .. } if patch.is_empty() => {
            Err(not_allowed("edit", "no fields to update".to_string()))
        }
        ActionRequest::CheckIn { reservation_id } => {
            let status = reservation_status(catalogs, reservation_id);
            if status.is_some_and(|s| s.can_check_in()) {
                Ok(())
            } else {
                Err(not_allowed(
                    "check_in",
                    format!("reservation {reservation_id} is not confirmed"),
                ))
            }
        }
        ActionRequest::Cancel { reservation_id } => {
            let status = reservation_status(catalogs, reservation_id);
            if status.is_some_and(|s| s.can_cancel()) {
                Ok(())
            } else {
                Err(not_allowed(
                    "cancel",
                    format!("reservation {reservation_id} is already closed"),
                ))
            }
        }
        ActionRequest::Suspend { hotel_name } => match hotel_status(catalogs, hotel_name) {
            Some(HotelStatus::Active) => Ok(()),
            _ => Err(not_allowed(
                "suspend",
                format!("{hotel_name} is not active"),
            )),
        },
        ActionRequest::Activate { hotel_name } => match hotel_status(catalogs, hotel_name) {
            Some(HotelStatus::Active) => Err(not_allowed(
                "activate",
                format!("{hotel_name} is already active"),
            )),
            _ => Ok(()),
        },
        _ => Ok(()),
    }
}

fn reservation_status(catalogs: &Catalogs, id: &str) -> Option<ReservationStatus> {
    catalogs.reservation(id).map(|r| r.status)
}

fn hotel_status(catalogs: &Catalogs, name: &str) -> Option<HotelStatus> {
    catalogs.hotel(name).map(|h| h.status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalogs;
    use std::sync::Mutex;

    /// Records requests instead of performing them.
    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<String>>,
    }

    impl HotelActions for Recorder {
        fn perform(&self, request: ActionRequest) -> ActionResult {
            validate_request(&request, catalogs())?;
            self.seen.lock().unwrap().push(request.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_named_operations_route_to_perform() {
        let actions = Recorder::default();
        actions.check_in("res-001").unwrap();
        actions.restock("Flour").unwrap();
        actions.suspend("Le Grand Hotel").unwrap();
        actions
            .view(RecordRef::new(EntityKind::Room, "205"))
            .unwrap();
        assert_eq!(
            *actions.seen.lock().unwrap(),
            vec![
                "check_in reservation res-001",
                "restock inventory item Flour",
                "suspend hotel Le Grand Hotel",
                "view room 205",
            ]
        );
    }

    #[test]
    fn test_missing_record() {
        let err = validate_request(
            &ActionRequest::Delete(RecordRef::new(EntityKind::Client, "client-999")),
            catalogs(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ActionError::NotFound {
                kind: EntityKind::Client,
                id: "client-999".into()
            }
        );
        assert_eq!(err.to_string(), "client \"client-999\" not found");
    }

    #[test]
    fn test_reservation_transitions() {
        let c = catalogs();
        let check_in = |id: &str| {
            validate_request(&ActionRequest::CheckIn { reservation_id: id.into() }, c)
        };
        let cancel = |id: &str| {
            validate_request(&ActionRequest::Cancel { reservation_id: id.into() }, c)
        };
        assert!(check_in("res-001").is_ok());
        assert!(check_in("res-003").is_err());
        assert!(cancel("res-002").is_ok());
        assert!(matches!(cancel("res-004"), Err(ActionError::NotAllowed { .. })));
        assert!(matches!(cancel("res-005"), Err(ActionError::NotAllowed { .. })));
    }

    #[test]
    fn test_hotel_lifecycle() {
        let actions = Recorder::default();
        assert!(actions.suspend("Mountain Inn").is_err());
        assert!(actions.activate("Mountain Inn").is_ok());
        assert!(actions.activate("Beach Resort").is_ok());
        assert!(actions.activate("Coastal Paradise").is_err());
    }

    #[test]
    fn test_edit_needs_fields() {
        let target = RecordRef::new(EntityKind::MenuItem, "menu-001");
        let actions = Recorder::default();
        assert!(actions.edit(target.clone(), RecordPatch::new()).is_err());

        let mut patch = RecordPatch::new();
        patch.insert("price".into(), "475".into());
        actions.edit(target, patch).unwrap();
        assert_eq!(
            actions.seen.lock().unwrap().last().map(String::as_str),
            Some("edit menu item menu-001 [price]")
        );
    }

    #[test]
    fn test_settings_are_validated() {
        let actions = Recorder::default();
        assert!(actions.save_settings(AppSettings::default()).is_ok());
        let mut settings = AppSettings::default();
        settings.hotel.name.clear();
        assert_eq!(
            actions.save_settings(settings),
            Err(ActionError::InvalidSettings(SettingsError::EmptyHotelName))
        );
    }
}

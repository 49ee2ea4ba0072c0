//! End-to-end session tests with a recording host.
//!
//! The recording host captures every boundary call so the tests can assert
//! on what the widget told the platform: main-button sync, alerts, and the
//! submitted order payload.

use std::sync::Mutex;

use samovar_core::{Currency, ItemId};
use samovar_miniapp::catalog::{Catalog, parse_menu};
use samovar_miniapp::error::CatalogError;
use samovar_miniapp::host::Host;
use samovar_miniapp::session::Session;
use samovar_miniapp::views::Screen;
use serde_json::{Value, json};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Expand,
    ShowMain,
    HideMain,
    MainText(String),
    EnableMain,
    DisableMain,
    Alert(String),
    SendData(Value),
}

#[derive(Default)]
struct RecordingHost {
    calls: Mutex<Vec<Call>>,
}

impl RecordingHost {
    fn push(&self, call: Call) {
        self.calls.lock().expect("host lock").push(call);
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("host lock").clone()
    }

    fn sent_payloads(&self) -> Vec<Value> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::SendData(payload) => Some(payload),
                _ => None,
            })
            .collect()
    }

    fn alerts(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Alert(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    /// Visibility after the most recent show/hide call, if any.
    fn main_button_visible(&self) -> Option<bool> {
        self.calls().into_iter().rev().find_map(|call| match call {
            Call::ShowMain => Some(true),
            Call::HideMain => Some(false),
            _ => None,
        })
    }

    fn last_main_button_text(&self) -> Option<String> {
        self.calls().into_iter().rev().find_map(|call| match call {
            Call::MainText(text) => Some(text),
            _ => None,
        })
    }
}

impl Host for RecordingHost {
    fn expand(&self) {
        self.push(Call::Expand);
    }

    fn show_main_button(&self) {
        self.push(Call::ShowMain);
    }

    fn hide_main_button(&self) {
        self.push(Call::HideMain);
    }

    fn set_main_button_text(&self, text: &str) {
        self.push(Call::MainText(text.to_owned()));
    }

    fn enable_main_button(&self) {
        self.push(Call::EnableMain);
    }

    fn disable_main_button(&self) {
        self.push(Call::DisableMain);
    }

    fn show_alert(&self, message: &str) {
        self.push(Call::Alert(message.to_owned()));
    }

    fn user_context(&self) -> Option<Value> {
        Some(json!({"id": 99, "username": "tester"}))
    }

    fn send_data(&self, payload: Value) {
        self.push(Call::SendData(payload));
    }
}

fn catalog() -> Catalog {
    let csv = "id,category,name,price,image\n\
               A1,Drinks,Cola,150,http://img/cola.png\n\
               A2,Drinks,Juice,120,http://img/juice.png\n\
               B1,Food,Borscht,250,http://img/borscht.png\n";
    Catalog::new(parse_menu(csv, Currency::Rub), Currency::Rub)
}

fn ready_session() -> Session<RecordingHost> {
    let mut session = Session::new(RecordingHost::default());
    session.catalog_loaded(Ok(catalog()));
    session
}

#[test]
fn expand_is_called_once_at_session_start() {
    let session = ready_session();
    let expands = session
        .host()
        .calls()
        .into_iter()
        .filter(|call| *call == Call::Expand)
        .count();
    assert_eq!(expands, 1);
}

#[test]
fn full_flow_submits_one_payload_with_matching_total() {
    let mut session = ready_session();

    session.select_category("Drinks");
    session.increment(ItemId::new("A1"));
    session.increment(ItemId::new("A1"));
    session.increment(ItemId::new("B1"));

    assert_eq!(
        session.host().last_main_button_text().as_deref(),
        Some("Place order (550 ₽)")
    );
    assert_eq!(session.host().main_button_visible(), Some(true));

    session.checkout();

    let payloads = session.host().sent_payloads();
    assert_eq!(payloads.len(), 1, "checkout submits exactly once");
    let payload = &payloads[0];
    assert_eq!(payload["totalPrice"], "550");
    assert_eq!(payload["cart"]["Cola"]["quantity"], 2);
    assert_eq!(payload["cart"]["Cola"]["price"], "150");
    assert_eq!(payload["cart"]["Borscht"]["quantity"], 1);
    assert_eq!(payload["userInfo"]["id"], 99);
}

#[test]
fn checkout_with_empty_cart_is_refused_with_a_notice() {
    let session = ready_session();
    session.checkout();

    assert_eq!(session.host().alerts().len(), 1);
    assert!(session.host().sent_payloads().is_empty());
}

#[test]
fn checkout_with_only_stale_ids_is_refused() {
    let mut session = ready_session();
    session.increment(ItemId::new("GONE"));
    session.checkout();

    assert_eq!(session.host().alerts().len(), 1);
    assert!(session.host().sent_payloads().is_empty());
}

#[test]
fn mutations_toggle_main_button_visibility() {
    let mut session = ready_session();

    session.increment(ItemId::new("A2"));
    assert_eq!(session.host().main_button_visible(), Some(true));

    session.decrement(&ItemId::new("A2"));
    assert_eq!(session.host().main_button_visible(), Some(false));
}

#[test]
fn stale_cart_ids_do_not_show_the_main_button() {
    let mut session = ready_session();
    session.increment(ItemId::new("GONE"));
    assert_eq!(session.host().main_button_visible(), Some(false));
}

#[test]
fn failed_load_shows_error_and_keeps_button_hidden() {
    let mut session = Session::new(RecordingHost::default());
    session.catalog_loaded(Err(CatalogError::Empty));

    assert!(matches!(session.screen(), Screen::Failed { .. }));
    assert_eq!(session.host().main_button_visible(), Some(false));
    assert!(!session.chrome().cart_visible);
}

#[test]
fn checkout_before_ready_does_nothing() {
    let session = Session::new(RecordingHost::default());
    session.checkout();

    assert!(session.host().alerts().is_empty());
    assert!(session.host().sent_payloads().is_empty());
}
